//! Entry page: the shared password that unlocks login and registration.

use api::models::EntryVerdict;
use api::ApiError;
use dioxus::prelude::*;
use ui::{mark_entry_verified, use_session};

use crate::Route;

/// Accepted, or the text to show under the form.
fn entry_outcome(result: Result<EntryVerdict, ApiError>) -> Result<(), String> {
    match result {
        Ok(verdict) if verdict.ok => Ok(()),
        Ok(verdict) => Err(verdict
            .detail
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "Wrong password".to_string())),
        Err(ApiError::Status { message, .. }) => Err(message),
        Err(e) => {
            tracing::error!("Entry verification failed: {}", e);
            Err("Network error".to_string())
        }
    }
}

#[component]
pub fn Entry() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let result = match session().client() {
                Ok(api) => api.verify_entry(&password()).await,
                Err(e) => Err(e),
            };

            match entry_outcome(result) {
                Ok(()) => {
                    mark_entry_verified(&mut session);
                    nav.push(Route::Login {});
                }
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page center",
            div {
                class: "card",
                h2 { "Enter Today's Password" }
                form {
                    class: "form",
                    onsubmit: handle_submit,
                    input {
                        r#type: "password",
                        placeholder: "Entry password",
                        required: true,
                        minlength: "1",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Verifying..." } else { "Submit" }
                    }
                    if let Some(err) = error() {
                        div { class: "error", "{err}" }
                    }
                }
            }
        }
    }
}
