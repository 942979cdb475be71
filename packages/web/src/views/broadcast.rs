//! Broadcast page: an Architect emails every member of the chosen tiers.

use api::models::Broadcast as BroadcastForm;
use api::RoleTier;
use dioxus::prelude::*;
use ui::{use_session, Navbar, Status, StatusLine};

#[component]
pub fn Broadcast() -> Element {
    let session = use_session();
    let allowed = session().permissions().can_broadcast();

    let mut form = use_signal(BroadcastForm::default);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut sending = use_signal(|| false);

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let body = form();
        if !body.is_complete() {
            return;
        }
        spawn(async move {
            sending.set(true);
            let result = match session().client() {
                Ok(api) => api.broadcast(&body).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    tracing::info!("Broadcast sent to {:?}", body.tiers);
                    form.set(BroadcastForm::default());
                    status.set(Some(Status::Success(
                        "Broadcast message sent successfully.".to_string(),
                    )));
                }
                Err(e) => {
                    tracing::error!("Broadcast failed: {}", e);
                    status.set(Some(Status::Error(
                        "Failed to send broadcast message. Please try again later.".to_string(),
                    )));
                }
            }
            sending.set(false);
        });
    };

    if !allowed {
        return rsx! {
            Navbar {}
            div {
                class: "page",
                p { class: "error", "Only Architects can send broadcast emails." }
            }
        };
    }

    let current = form();

    rsx! {
        Navbar {}

        div {
            class: "page",
            div {
                class: "card",
                h2 { "Send Broadcast" }

                form {
                    class: "form",
                    onsubmit: send,

                    fieldset {
                        class: "tiers",
                        legend { "Recipients" }
                        for tier in RoleTier::BROADCAST_AUDIENCE {
                            label {
                                key: "{tier}",
                                input {
                                    r#type: "checkbox",
                                    checked: current.tiers.contains(&tier),
                                    onchange: move |_| form.write().toggle_tier(tier),
                                }
                                " {tier}"
                            }
                        }
                    }
                    input {
                        placeholder: "Message topic",
                        value: current.topic.clone(),
                        oninput: move |evt: FormEvent| form.write().topic = evt.value(),
                    }
                    textarea {
                        placeholder: "Your message...",
                        rows: "6",
                        value: current.text.clone(),
                        oninput: move |evt: FormEvent| form.write().text = evt.value(),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: !current.is_complete() || sending(),
                        if sending() { "Sending..." } else { "Send Broadcast" }
                    }
                }

                StatusLine { status: status() }
            }
        }
    }
}
