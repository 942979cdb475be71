//! Records page: JSON backup download, restore from a backup file and,
//! for Architects, erasing every record.

use api::models::{RestoreSummary, Snapshot};
use dioxus::prelude::*;
use ui::icons::{FaDownload, FaTrash, FaUpload};
use ui::{save_file, use_session, Icon, Navbar, Status, StatusLine};

const BACKUP_FILE: &str = "records_backup.json";

/// Prefer the server's count; fall back to what the file held.
fn restore_message(summary: &RestoreSummary, snapshot: &Snapshot) -> String {
    let count = if summary.count > 0 {
        summary.count as usize
    } else {
        snapshot.record_count().unwrap_or(0)
    };
    format!("Success: {count} records restored")
}

#[component]
pub fn Records() -> Element {
    let session = use_session();
    let permissions = session().permissions();
    let allowed = permissions.can_manage_snapshots();
    let can_erase = permissions.can_erase_records();

    let mut status = use_signal(|| Option::<Status>::None);
    let mut busy = use_signal(|| false);
    let mut confirm_erase = use_signal(|| false);

    let download = move |_| {
        spawn(async move {
            busy.set(true);
            let result = match session().client() {
                Ok(api) => api.download_snapshot().await.map_err(|e| e.user_message()),
                Err(e) => Err(e.user_message()),
            };
            let next = match result.and_then(|bytes| {
                save_file(BACKUP_FILE, &bytes, "application/json")
            }) {
                Ok(()) => Status::Success("Backup downloaded successfully".to_string()),
                Err(e) => {
                    tracing::error!("Backup download failed: {}", e);
                    Status::Error(format!("Download error: {e}"))
                }
            };
            status.set(Some(next));
            busy.set(false);
        });
    };

    let upload = move |evt: FormEvent| async move {
        let Some(files) = evt.files() else {
            return;
        };
        let Some(file_name) = files.files().into_iter().next() else {
            return;
        };
        busy.set(true);
        let next = match files.read_file_to_string(&file_name).await {
            None => Status::Error(format!("Restore error: could not read {file_name}")),
            Some(text) => match Snapshot::from_json(&text) {
                Err(e) => Status::Error(format!("Restore error: {e}")),
                Ok(snapshot) => {
                    let result = match session().client() {
                        Ok(api) => api.upload_snapshot(&snapshot).await,
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(summary) => {
                            tracing::info!("Restored snapshot from {}", file_name);
                            Status::Success(restore_message(&summary, &snapshot))
                        }
                        Err(e) => {
                            tracing::error!("Restore failed: {}", e);
                            Status::Error(format!("Restore error: {}", e.user_message()))
                        }
                    }
                }
            },
        };
        status.set(Some(next));
        busy.set(false);
    };

    let erase = move |_| {
        confirm_erase.set(false);
        spawn(async move {
            busy.set(true);
            let result = match session().client() {
                Ok(api) => api.erase_records().await,
                Err(e) => Err(e),
            };
            let next = match result {
                Ok(summary) => {
                    tracing::warn!("Erased {} records", summary.deleted);
                    Status::Success(format!("Erased {} records", summary.deleted))
                }
                Err(e) => {
                    tracing::error!("Erase failed: {}", e);
                    Status::Error(e.user_message())
                }
            };
            status.set(Some(next));
            busy.set(false);
        });
    };

    rsx! {
        Navbar {}

        div {
            class: "page",
            div {
                class: "card",
                h2 { "Download/Upload" }

                if allowed {
                    div {
                        class: "form-row",
                        button {
                            class: "btn",
                            disabled: busy(),
                            onclick: download,
                            Icon { icon: FaDownload, width: 14, height: 14 }
                            " Download backup"
                        }
                        label {
                            class: "btn btn-secondary",
                            Icon { icon: FaUpload, width: 14, height: 14 }
                            " Restore from file"
                            input {
                                r#type: "file",
                                accept: "application/json,.json",
                                style: "display: none;",
                                disabled: busy(),
                                onchange: upload,
                            }
                        }
                    }

                    if can_erase {
                        div {
                            class: "danger-zone",
                            if confirm_erase() {
                                p { class: "text-danger", "Erase every record? This cannot be undone." }
                                button {
                                    class: "btn btn-danger",
                                    disabled: busy(),
                                    onclick: erase,
                                    "Yes, erase"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| confirm_erase.set(false),
                                    "Cancel"
                                }
                            } else {
                                button {
                                    class: "btn btn-danger",
                                    disabled: busy(),
                                    onclick: move |_| confirm_erase.set(true),
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                    " Erase all records"
                                }
                            }
                        }
                    }

                    StatusLine { status: status() }
                } else {
                    p { class: "error", "Only Architects can manage backups." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_message_uses_server_count() {
        let snapshot = Snapshot::from_json("[{}, {}]").unwrap();
        let summary = RestoreSummary {
            restored: true,
            count: 5,
        };
        assert_eq!(restore_message(&summary, &snapshot), "Success: 5 records restored");
    }

    #[test]
    fn test_restore_message_falls_back_to_file() {
        let snapshot = Snapshot::from_json(r#"{"records": [{}, {}, {}]}"#).unwrap();
        assert_eq!(
            restore_message(&RestoreSummary::default(), &snapshot),
            "Success: 3 records restored"
        );
    }
}
