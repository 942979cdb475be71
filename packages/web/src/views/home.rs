//! Home page: the record map, record details and the create form.

use api::models::{ImageUpload, NewRecord};
use api::{ApiError, Record};
use dioxus::prelude::*;
use ui::icons::{FaHeart, FaXmark};
use ui::{use_session, Icon, LatLng, Navbar, RecordMap, Status, StatusLine};

/// Text the user typed into the create form.
#[derive(Clone, Debug, Default, PartialEq)]
struct RecordDraft {
    name: String,
    x: String,
    y: String,
    kind: String,
    description: String,
    additional_info: String,
}

impl RecordDraft {
    fn at(point: LatLng) -> Self {
        Self {
            x: format!("{:.6}", point.lat),
            y: format!("{:.6}", point.lng),
            ..Self::default()
        }
    }

    /// Parse coordinates and validate.
    fn to_new_record(&self, image: Option<ImageUpload>) -> Result<NewRecord, &'static str> {
        let x = self
            .x
            .trim()
            .parse::<f64>()
            .map_err(|_| "Latitude must be a number")?;
        let y = self
            .y
            .trim()
            .parse::<f64>()
            .map_err(|_| "Longitude must be a number")?;

        let record = NewRecord {
            name: self.name.clone(),
            x,
            y,
            kind: self.kind.clone(),
            description: self.description.clone(),
            additional_info: self.additional_info.clone(),
            image,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Records for the map. Failures are logged here, once per load.
async fn load_records(session: ui::SessionState) -> Result<Vec<Record>, ApiError> {
    let result = match session.client() {
        Ok(api) => api.list_records().await.and_then(|env| env.into_data()),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        tracing::error!("Failed to load records: {}", e);
    }
    result
}

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let can_create = session().permissions().can_create_records();

    let mut records = use_resource(move || load_records(session()));

    let mut selected = use_signal(|| Option::<Record>::None);
    let mut liked = use_signal(|| false);
    let mut draft = use_signal(|| Option::<RecordDraft>::None);
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut saving = use_signal(|| false);

    let loaded: Vec<Record> = match &*records.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let select_record = move |id: i64| {
        spawn(async move {
            let result = match session().client() {
                Ok(api) => api.get_record(id).await.and_then(|env| env.into_data()),
                Err(e) => Err(e),
            };
            match result {
                Ok(record) => {
                    draft.set(None);
                    liked.set(false);
                    selected.set(Some(record));
                }
                Err(e) => tracing::error!("Failed to load record {}: {}", id, e),
            }
        });
    };

    let pick_point = move |point: LatLng| {
        selected.set(None);
        image.set(None);
        status.set(None);
        draft.set(Some(RecordDraft::at(point)));
    };

    let toggle_like = move |_| {
        let Some(record) = selected() else {
            return;
        };
        let was_liked = liked();
        spawn(async move {
            let result = match session().client() {
                Ok(api) if was_liked => api.unlike_record(record.id).await,
                Ok(api) => api.like_record(record.id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(state) => {
                    liked.set(!was_liked);
                    if let Some(current) = selected.write().as_mut() {
                        let step = if was_liked { -1 } else { 1 };
                        current.likes = state.likes.unwrap_or(current.likes + step);
                    }
                }
                Err(e) => tracing::error!("Failed to update like on {}: {}", record.id, e),
            }
        });
    };

    let pick_image = move |evt: FormEvent| async move {
        let Some(files) = evt.files() else {
            return;
        };
        let Some(file_name) = files.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match files.read_file(&file_name).await {
            Some(bytes) => image.set(Some(ImageUpload { file_name, bytes })),
            None => tracing::error!("Could not read image {}", file_name),
        }
    };

    let save_record = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = draft() else {
            return;
        };
        let new_record = match current.to_new_record(image()) {
            Ok(r) => r,
            Err(message) => {
                status.set(Some(Status::Error(message.to_string())));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            let result = match session().client() {
                Ok(api) => api.create_record(new_record).await.and_then(|env| env.into_data()),
                Err(e) => Err(e),
            };
            match result {
                Ok(record) => {
                    tracing::info!("Created record {}", record.id);
                    draft.set(None);
                    image.set(None);
                    status.set(Some(Status::Success("Record created".to_string())));
                    records.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to create record: {}", e);
                    status.set(Some(Status::Error(e.user_message())));
                }
            }
            saving.set(false);
        });
    };

    let selected_id = selected().map(|r| r.id);

    rsx! {
        Navbar {}

        div {
            class: "page home",

            if can_create {
                RecordMap {
                    records: loaded,
                    selected: selected_id,
                    on_select: select_record,
                    on_pick: pick_point,
                }
            } else {
                RecordMap {
                    records: loaded,
                    selected: selected_id,
                    on_select: select_record,
                }
            }

            div {
                class: "side-panel",

                StatusLine { status: status() }

                if let Some(record) = selected() {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            h3 { "Record Details" }
                            button {
                                class: "btn-icon",
                                title: "Close",
                                onclick: move |_| selected.set(None),
                                Icon { icon: FaXmark, width: 14, height: 14 }
                            }
                        }
                        if let Some(src) = record.image.clone() {
                            img { class: "record-image", src: src, alt: "{record.name}" }
                        }
                        dl {
                            dt { "Name" }
                            dd { "{record.name}" }
                            dt { "Coordinates" }
                            dd { "{record.x:.5}, {record.y:.5}" }
                            if let Some(kind) = record.kind.clone() {
                                dt { "Type" }
                                dd { "{kind}" }
                            }
                            if let Some(description) = record.description.clone() {
                                dt { "Description" }
                                dd { "{description}" }
                            }
                            if let Some(info) = record.additional_info.clone() {
                                dt { "Additional info" }
                                dd { "{info}" }
                            }
                        }
                        button {
                            class: if liked() { "btn btn-like liked" } else { "btn btn-like" },
                            onclick: toggle_like,
                            Icon { icon: FaHeart, width: 14, height: 14 }
                            span { " {record.likes}" }
                        }
                    }
                }

                if let Some(current) = draft() {
                    div {
                        class: "card",
                        h3 { "Create Record" }
                        form {
                            class: "form",
                            onsubmit: save_record,
                            input {
                                placeholder: "Name",
                                value: current.name.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.name = evt.value();
                                    }
                                },
                            }
                            input {
                                placeholder: "Latitude (x)",
                                value: current.x.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.x = evt.value();
                                    }
                                },
                            }
                            input {
                                placeholder: "Longitude (y)",
                                value: current.y.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.y = evt.value();
                                    }
                                },
                            }
                            input {
                                placeholder: "Type",
                                value: current.kind.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.kind = evt.value();
                                    }
                                },
                            }
                            textarea {
                                placeholder: "Description",
                                value: current.description.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.description = evt.value();
                                    }
                                },
                            }
                            textarea {
                                placeholder: "Additional info",
                                value: current.additional_info.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.additional_info = evt.value();
                                    }
                                },
                            }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: pick_image,
                            }
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn",
                                    r#type: "submit",
                                    disabled: saving(),
                                    if saving() { "Saving..." } else { "Save" }
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        draft.set(None);
                                        image.set(None);
                                    },
                                    "Cancel"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RecordDraft {
        RecordDraft {
            name: "Rynok Square".to_string(),
            x: "49.8419".to_string(),
            y: " 24.0315 ".to_string(),
            kind: "square".to_string(),
            description: "Old town".to_string(),
            additional_info: String::new(),
        }
    }

    #[tokio::test]
    async fn test_failed_record_load_is_returned() {
        // Nothing answers the default API base with a record envelope.
        let session = ui::SessionState {
            entry_verified: true,
            token: None,
        };
        assert!(load_records(session).await.is_err());
    }

    #[test]
    fn test_draft_prefills_clicked_point() {
        let draft = RecordDraft::at(LatLng::new(49.8397, 24.0297));
        assert_eq!(draft.x, "49.839700");
        assert_eq!(draft.y, "24.029700");
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_draft_parses_coordinates() {
        let record = filled().to_new_record(None).unwrap();
        assert_eq!(record.x, 49.8419);
        assert_eq!(record.y, 24.0315);
        assert_eq!(record.name, "Rynok Square");
        assert!(record.image.is_none());
    }

    #[test]
    fn test_draft_keeps_image() {
        let image = ImageUpload {
            file_name: "a.png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let record = filled().to_new_record(Some(image.clone())).unwrap();
        assert_eq!(record.image, Some(image));
    }

    #[test]
    fn test_draft_rejects_non_numeric_latitude() {
        let mut draft = filled();
        draft.x = "north".to_string();
        assert_eq!(draft.to_new_record(None).unwrap_err(), "Latitude must be a number");
    }

    #[test]
    fn test_draft_rejects_out_of_range_longitude() {
        let mut draft = filled();
        draft.y = "200".to_string();
        assert_eq!(
            draft.to_new_record(None).unwrap_err(),
            "Longitude must be between -180 and 180"
        );
    }

    #[test]
    fn test_draft_requires_name() {
        let mut draft = filled();
        draft.name = "  ".to_string();
        assert_eq!(draft.to_new_record(None).unwrap_err(), "Name is required");
    }
}
