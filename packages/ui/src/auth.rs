//! Session context and hooks for the UI.
//!
//! The session store is the source of truth; [`SessionState`] is a snapshot
//! of it held in a signal so components re-render when the user verifies the
//! entry password, logs in or logs out. Every mutation writes through to the
//! store first.

use api::{ApiClient, ApiError, ClientConfig, Permissions};
use dioxus::prelude::*;
use store::{default_session, Session, SessionStorage};

use crate::guard::{gate, Gate, GuardLevel};

/// Per-tab session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub entry_verified: bool,
    pub token: Option<String>,
}

impl SessionState {
    pub fn load<S: SessionStorage>(session: &Session<S>) -> Self {
        Self {
            entry_verified: session.is_entry_verified(),
            token: session.auth_token(),
        }
    }

    /// Role names decoded from the token; empty when there is none.
    pub fn roles(&self) -> Vec<String> {
        api::user_roles(self.token.as_deref())
    }

    pub fn permissions(&self) -> Permissions {
        Permissions::from_roles(&self.roles())
    }

    /// Display name carried by the token, if any.
    pub fn username(&self) -> Option<String> {
        let token = self.token.as_deref()?;
        api::auth::decode_claims(token).ok()?.username
    }

    pub fn gate(&self, level: GuardLevel) -> Gate {
        gate(level, self.entry_verified, self.token.as_deref())
    }

    pub fn verify_entry<S: SessionStorage>(&mut self, session: &Session<S>) {
        session.set_entry_verified(true);
        self.entry_verified = true;
    }

    pub fn sign_in<S: SessionStorage>(&mut self, session: &Session<S>, token: &str) {
        session.set_auth_token(token);
        self.token = session.auth_token();
    }

    /// Clear the whole session; the entry password must be entered again.
    pub fn sign_out<S: SessionStorage>(&mut self, session: &Session<S>) {
        session.clear();
        *self = Self::default();
    }

    /// A client for the backend carrying this session's token.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        Ok(ApiClient::new(&ClientConfig::from_build_env())?.with_token(self.token.clone()))
    }
}

/// Get the current session state.
/// Returns a signal that updates on entry verification, login and logout.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that loads the session from storage.
/// Wrap your app with this component to enable the route guards.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionState::load(&default_session())));

    rsx! {
        {children}
    }
}

pub fn mark_entry_verified(state: &mut Signal<SessionState>) {
    state.write().verify_entry(&default_session());
    tracing::info!("Entry password accepted");
}

pub fn sign_in(state: &mut Signal<SessionState>, token: &str) {
    state.write().sign_in(&default_session(), token);
    tracing::info!("Signed in");
}

pub fn sign_out(state: &mut Signal<SessionState>) {
    state.write().sign_out(&default_session());
    tracing::info!("Signed out");
}

/// Button to log out and return to the entry page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        sign_out(&mut session);
        nav.replace("/entry");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
