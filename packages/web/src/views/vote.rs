//! Vote page: open votes, promotion requests and ban proposals.

use std::time::Duration;

use api::models::{Ack, BanCandidate, Ballot, Envelope, Vote as VoteItem, VoteChoice};
use api::ApiError;
use dioxus::prelude::*;
use ui::{sleep, use_session, Navbar, Status, StatusLine};

const RELOAD_DELAY: Duration = Duration::from_secs(1);

/// Everything the page shows, fetched together.
#[derive(Clone, Debug, PartialEq)]
struct VoteBoard {
    votes: Result<Vec<VoteItem>, String>,
    can_promote: bool,
    /// `None` when the user may not propose bans.
    ban_candidates: Option<Vec<BanCandidate>>,
}

impl VoteBoard {
    fn failed(message: String) -> Self {
        Self {
            votes: Err(message),
            can_promote: false,
            ban_candidates: None,
        }
    }
}

fn votes_outcome(result: Result<Envelope<Vec<VoteItem>>, ApiError>) -> Result<Vec<VoteItem>, String> {
    match result {
        Ok(envelope) if envelope.is_ok() => Ok(envelope.data.unwrap_or_default()),
        Ok(envelope) => {
            tracing::warn!("Vote list rejected with status {}", envelope.status);
            Err("Server returned wrong response".to_string())
        }
        Err(e) => {
            tracing::error!("Failed to fetch votes: {}", e);
            Err("Failed to fetch votes".to_string())
        }
    }
}

/// Whether the backend lets the current user ask for promotion.
fn promote_allowed(result: &Result<Ack, ApiError>) -> bool {
    matches!(result, Ok(ack) if ack.is_ok())
}

/// Users the current user may propose to ban, or `None` when not permitted.
fn ban_candidates(
    result: Result<Envelope<Vec<BanCandidate>>, ApiError>,
) -> Option<Vec<BanCandidate>> {
    match result {
        Ok(envelope) if envelope.is_ok() => Some(envelope.data.unwrap_or_default()),
        Ok(_) => None,
        Err(e) => {
            tracing::error!("Ban permission check failed: {}", e);
            None
        }
    }
}

/// Message for a vote, promotion or ban action.
fn action_status(result: Result<Ack, ApiError>, success: String, failure: &str) -> Status {
    match result {
        Ok(ack) if ack.is_ok() => Status::Success(success),
        Ok(ack) => Status::Error(format!(
            "Server error: {}",
            ack.notification.unwrap_or_default()
        )),
        Err(e) => {
            tracing::error!("{} {}", failure, e);
            Status::Error(failure.to_string())
        }
    }
}

#[component]
pub fn Vote() -> Element {
    let session = use_session();

    let mut board = use_resource(move || async move {
        let api = match session().client() {
            Ok(api) => api,
            Err(e) => return VoteBoard::failed(e.user_message()),
        };
        let (votes, promote, ban) =
            futures::join!(api.list_votes(), api.check_promote(), api.check_ban());
        VoteBoard {
            votes: votes_outcome(votes),
            can_promote: promote_allowed(&promote),
            ban_candidates: ban_candidates(ban),
        }
    });

    let mut status = use_signal(|| Option::<Status>::None);
    let mut ban_target = use_signal(|| Option::<i64>::None);
    let mut busy = use_signal(|| false);

    // Show the outcome, then reload after a moment when it succeeded.
    let mut finish = move |next: Status| {
        let succeeded = !next.is_error();
        status.set(Some(next));
        busy.set(false);
        if succeeded {
            spawn(async move {
                sleep(RELOAD_DELAY).await;
                status.set(None);
                ban_target.set(None);
                board.restart();
            });
        }
    };

    let mut cast = move |vote: VoteItem, choice: VoteChoice| {
        busy.set(true);
        spawn(async move {
            let ballot = Ballot::new(&vote, choice);
            let result = match session().client() {
                Ok(api) => api.send_vote(&ballot).await,
                Err(e) => Err(e),
            };
            finish(action_status(
                result,
                format!("Vote {choice} sent successfully!"),
                "Failed to send vote!",
            ));
        });
    };

    let request_promotion = move |_| {
        busy.set(true);
        spawn(async move {
            let result = match session().client() {
                Ok(api) => api.promote().await,
                Err(e) => Err(e),
            };
            finish(action_status(
                result,
                "Promotion successful!".to_string(),
                "Failed to promote!",
            ));
        });
    };

    let propose_ban = move |_| {
        let candidates = match &*board.read() {
            Some(b) => b.ban_candidates.clone().unwrap_or_default(),
            None => Vec::new(),
        };
        let Some(candidate) = ban_target()
            .and_then(|id| candidates.into_iter().find(|c| c.user_id == id))
        else {
            status.set(Some(Status::Error("Please select a user to ban.".to_string())));
            return;
        };
        busy.set(true);
        spawn(async move {
            let result = match session().client() {
                Ok(api) => api.ban(&candidate).await,
                Err(e) => Err(e),
            };
            let success = format!("Ban vote created for {}!", candidate.username);
            finish(action_status(result, success, "Failed to ban!"));
        });
    };

    let content = match &*board.read() {
        None => rsx! { p { class: "muted", "Loading votes..." } },
        Some(board) => {
            let board = board.clone();
            rsx! {
                {match board.votes.clone() {
                    Err(message) => rsx! { p { class: "error", "{message}" } },
                    Ok(votes) if votes.is_empty() => rsx! {
                        p { class: "muted", "There are no active votes" }
                    },
                    Ok(votes) => rsx! {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Percentage of users who voted" }
                                    th { "Type" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for vote in votes {
                                    tr {
                                        key: "{vote.id}",
                                        td { "{vote.name}" }
                                        td { "{vote.percent_label()}" }
                                        td { {vote.kind.clone().unwrap_or_default()} }
                                        td {
                                            class: "actions",
                                            if let Some(choice) = vote.choice {
                                                span { class: "text-accent", "{choice}" }
                                            } else {
                                                button {
                                                    class: "btn",
                                                    disabled: busy(),
                                                    onclick: {
                                                        let vote = vote.clone();
                                                        move |_| cast(vote.clone(), VoteChoice::Agree)
                                                    },
                                                    "Agree"
                                                }
                                                button {
                                                    class: "btn btn-secondary",
                                                    disabled: busy(),
                                                    onclick: {
                                                        let vote = vote.clone();
                                                        move |_| cast(vote.clone(), VoteChoice::Disagree)
                                                    },
                                                    "Disagree"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}

                if board.can_promote {
                    div {
                        class: "card",
                        h3 { "Promotion" }
                        button {
                            class: "btn",
                            disabled: busy(),
                            onclick: request_promotion,
                            "Request promotion"
                        }
                    }
                }

                if let Some(candidates) = board.ban_candidates.clone() {
                    div {
                        class: "card",
                        h3 { "Ban" }
                        div {
                            class: "form-row",
                            select {
                                onchange: move |evt: FormEvent| {
                                    ban_target.set(evt.value().parse::<i64>().ok());
                                },
                                option { value: "", "Select..." }
                                for candidate in candidates {
                                    option {
                                        key: "{candidate.user_id}",
                                        value: "{candidate.user_id}",
                                        selected: ban_target() == Some(candidate.user_id),
                                        "{candidate.username}"
                                    }
                                }
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: busy(),
                                onclick: propose_ban,
                                "Propose ban"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Navbar {}

        div {
            class: "page",
            h2 { "Active Votes" }
            StatusLine { status: status() }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ack(json: &str) -> Ack {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ok_envelope_lists_votes() {
        let vote = VoteItem {
            id: 1,
            name: "Promote hiram".to_string(),
            ..VoteItem::default()
        };
        let result = votes_outcome(Ok(Envelope::ok(vec![vote.clone()])));
        assert_eq!(result, Ok(vec![vote]));
    }

    #[test]
    fn test_non_ok_envelope_is_wrong_response() {
        let envelope = Envelope::<Vec<VoteItem>> {
            status: "FAIL".to_string(),
            data: None,
            notification: None,
        };
        assert_eq!(
            votes_outcome(Ok(envelope)),
            Err("Server returned wrong response".to_string())
        );
    }

    #[test]
    fn test_http_failure_is_fetch_error() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(votes_outcome(Err(err)), Err("Failed to fetch votes".to_string()));
    }

    #[test]
    fn test_promote_allowed_only_on_ok() {
        assert!(promote_allowed(&Ok(ack(r#"{"status":"OK"}"#))));
        assert!(!promote_allowed(&Ok(ack(r#"{"status":"DENIED"}"#))));
        assert!(!promote_allowed(&Err(ApiError::Rejected("no".to_string()))));
    }

    #[test]
    fn test_ban_check_rejected_means_no_permission() {
        let envelope = Envelope::<Vec<BanCandidate>> {
            status: "DENIED".to_string(),
            data: Some(vec![BanCandidate::default()]),
            notification: None,
        };
        assert_eq!(ban_candidates(Ok(envelope)), None);
        assert_eq!(ban_candidates(Err(ApiError::Rejected("no".to_string()))), None);
    }

    #[test]
    fn test_ban_check_ok_lists_candidates() {
        let candidate = BanCandidate {
            user_id: 7,
            username: "jubelo".to_string(),
        };
        assert_eq!(
            ban_candidates(Ok(Envelope::ok(vec![candidate.clone()]))),
            Some(vec![candidate])
        );

        let empty: Envelope<Vec<BanCandidate>> =
            serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert_eq!(ban_candidates(Ok(empty)), Some(Vec::new()));
    }

    #[test]
    fn test_action_status_success() {
        let status = action_status(
            Ok(ack(r#"{"status":"OK","notification":"ignored"}"#)),
            "Promotion successful!".to_string(),
            "Failed to promote!",
        );
        assert_eq!(status, Status::Success("Promotion successful!".to_string()));
    }

    #[test]
    fn test_action_status_rejected_shows_notification() {
        let status = action_status(
            Ok(ack(r#"{"status":"FAIL","notification":"Vote closed"}"#)),
            "ok".to_string(),
            "Failed to send vote!",
        );
        assert_eq!(status, Status::Error("Server error: Vote closed".to_string()));
    }

    #[test]
    fn test_action_status_request_failure() {
        let err = ApiError::Status {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        let status = action_status(Err(err), "ok".to_string(), "Failed to ban!");
        assert_eq!(status, Status::Error("Failed to ban!".to_string()));
    }
}
