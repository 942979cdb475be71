use api::models::{Architect, HallOfFameMessage};
use api::ApiError;
use dioxus::prelude::*;
use ui::{use_session, Navbar, Status, StatusLine};

/// Message for the chosen architect, once both fields are filled.
fn compose(architect: Option<i64>, message: &str) -> Option<HallOfFameMessage> {
    let message = message.trim();
    match architect {
        Some(architect_id) if !message.is_empty() => Some(HallOfFameMessage {
            architect_id,
            message: message.to_string(),
        }),
        _ => None,
    }
}

/// Architects for the select. Failures are logged here, once per load.
async fn load_architects(session: ui::SessionState) -> Result<Vec<Architect>, ApiError> {
    let result = match session.client() {
        Ok(api) => api.hall_of_fame().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        tracing::error!("Failed to load architects: {}", e);
    }
    result
}

#[component]
pub fn HallOfFame() -> Element {
    let session = use_session();

    let architects = use_resource(move || load_architects(session()));

    let mut architect = use_signal(|| Option::<i64>::None);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut sending = use_signal(|| false);

    let ready = compose(architect(), &message()).is_some();

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(body) = compose(architect(), &message()) else {
            return;
        };
        spawn(async move {
            sending.set(true);
            let result = match session().client() {
                Ok(api) => api.send_hall_of_fame(&body).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    status.set(Some(Status::Success("Message sent successfully!".to_string())));
                    message.set(String::new());
                    architect.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to send hall of fame message: {}", e);
                    status.set(Some(Status::Error("Failed to send message.".to_string())));
                }
            }
            sending.set(false);
        });
    };

    let options = match &*architects.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        Navbar {}

        div {
            class: "page",
            div {
                class: "card",
                h2 { "Hall of Fame" }
                p { class: "muted", "Write a word of thanks to one of the Architects." }

                form {
                    class: "form",
                    onsubmit: send,
                    select {
                        onchange: move |evt: FormEvent| architect.set(evt.value().parse::<i64>().ok()),
                        option { value: "", "Select Architect" }
                        for a in options {
                            option {
                                key: "{a.id}",
                                value: "{a.id}",
                                selected: architect() == Some(a.id),
                                "{a.username}"
                            }
                        }
                    }
                    textarea {
                        placeholder: "Write your message...",
                        rows: "5",
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: !ready || sending(),
                        if sending() { "Sending..." } else { "Send Message" }
                    }
                }

                StatusLine { status: status() }
            }
        }
    }
}
