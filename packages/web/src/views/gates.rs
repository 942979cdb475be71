//! Route guard layouts.
//!
//! Each layout renders its child route only when the session passes the
//! gate, and otherwise replaces the current history entry with the fallback
//! page.

use dioxus::prelude::*;
use ui::{use_session, Gate, GuardLevel};

use crate::Route;

fn guarded(level: GuardLevel) -> Element {
    let session = use_session();
    let nav = use_navigator();

    match session().gate(level) {
        Gate::Allow => rsx! { Outlet::<Route> {} },
        Gate::RedirectToEntry => {
            nav.replace(Route::Entry {});
            rsx! {}
        }
        Gate::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}

/// Needs the entry password to have been accepted.
#[component]
pub fn EntryGate() -> Element {
    guarded(GuardLevel::Entry)
}

/// Needs the entry password and a bearer token.
#[component]
pub fn AuthGate() -> Element {
    guarded(GuardLevel::Auth)
}
