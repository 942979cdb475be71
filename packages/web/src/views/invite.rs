//! Invite page: GoldMasons and Architects invite a new member by email.
//!
//! The answer never says whether the address was already known: a conflict
//! reads the same as a sent invitation.

use api::ApiError;
use dioxus::prelude::*;
use ui::{use_session, Navbar, Status, StatusLine};

const INVITE_SENT: &str = "If this person can be invited, they’ll receive an email shortly.";
const INVITE_FAILED: &str =
    "Invitation could not be processed at this time. Please try again later.";

fn invite_outcome(result: &Result<(), ApiError>) -> Status {
    match result {
        Ok(()) => Status::Success(INVITE_SENT.to_string()),
        Err(e) if e.status() == Some(409) => Status::Success(INVITE_SENT.to_string()),
        Err(e) => {
            tracing::error!("Invitation failed: {}", e);
            Status::Error(INVITE_FAILED.to_string())
        }
    }
}

#[component]
pub fn Invite() -> Element {
    let session = use_session();
    let allowed = session().permissions().can_invite();

    let mut email = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut sending = use_signal(|| false);

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if address.is_empty() {
            return;
        }
        spawn(async move {
            sending.set(true);
            status.set(None);
            let result = match session().client() {
                Ok(api) => api.invite(&address).await,
                Err(e) => Err(e),
            };
            let outcome = invite_outcome(&result);
            if !outcome.is_error() {
                email.set(String::new());
            }
            status.set(Some(outcome));
            sending.set(false);
        });
    };

    rsx! {
        Navbar {}

        div {
            class: "page",
            div {
                class: "card",
                h2 { "Send Invitation" }

                if allowed {
                    form {
                        class: "form",
                        onsubmit: send,
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: sending() || email().trim().is_empty(),
                            if sending() { "Sending..." } else { "Send Invite" }
                        }
                    }
                    StatusLine { status: status() }
                } else {
                    p { class: "error", "Only GoldMasons and Architects can send invitations." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ApiError {
        ApiError::Status {
            status,
            message: "detail".to_string(),
        }
    }

    #[test]
    fn test_sent_invitation() {
        assert_eq!(invite_outcome(&Ok(())), Status::Success(INVITE_SENT.to_string()));
    }

    #[test]
    fn test_conflict_reads_as_sent() {
        assert_eq!(
            invite_outcome(&Err(status_error(409))),
            Status::Success(INVITE_SENT.to_string())
        );
    }

    #[test]
    fn test_other_failures() {
        for err in [
            status_error(400),
            status_error(500),
            ApiError::Config("bad base".to_string()),
        ] {
            assert_eq!(invite_outcome(&Err(err)), Status::Error(INVITE_FAILED.to_string()));
        }
    }
}
