use dioxus::prelude::*;

/// Outcome of the last action on a page, shown as one line of text.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Status::Info(m) | Status::Success(m) | Status::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }

    fn class(&self) -> &'static str {
        match self {
            Status::Info(_) => "status status-info",
            Status::Success(_) => "status text-accent",
            Status::Error(_) => "status text-danger error",
        }
    }
}

#[component]
pub fn StatusLine(status: Option<Status>) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };

    rsx! {
        p {
            class: status.class(),
            "{status.message()}"
        }
    }
}
