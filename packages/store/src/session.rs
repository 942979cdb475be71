//! Typed accessors for the two values the app keeps per tab.

use crate::storage::SessionStorage;

/// Key holding `"1"` once the entry password has been accepted.
pub const ENTRY_VERIFIED_KEY: &str = "entry_verified";
/// Key holding the bearer token returned by login.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// The storage backing [`default_session`] on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = crate::BrowserStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = crate::MemoryStorage;

/// Session state on top of any [`SessionStorage`].
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_entry_verified(&self, verified: bool) {
        let value = if verified { "1" } else { "0" };
        self.storage.set(ENTRY_VERIFIED_KEY, value);
    }

    /// True only when the flag holds exactly `"1"`.
    pub fn is_entry_verified(&self) -> bool {
        self.storage.get(ENTRY_VERIFIED_KEY).as_deref() == Some("1")
    }

    pub fn set_auth_token(&self, token: &str) {
        self.storage.set(AUTH_TOKEN_KEY, token);
    }

    /// The stored bearer token. An empty string counts as no token.
    pub fn auth_token(&self) -> Option<String> {
        self.storage
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn clear_auth_token(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
    }

    /// Drop everything, as logout does.
    pub fn clear(&self) {
        self.storage.clear();
    }
}

/// The session for the current platform.
///
/// In the browser this is `sessionStorage`. Elsewhere a single process-wide
/// [`crate::MemoryStorage`] is shared by every caller so that writes from one
/// component are visible to the next, as they are in a browser tab.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn default_session() -> Session<PlatformStorage> {
    Session::new(crate::BrowserStorage::new())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn default_session() -> Session<PlatformStorage> {
    use std::sync::OnceLock;

    static SHARED: OnceLock<crate::MemoryStorage> = OnceLock::new();
    Session::new(SHARED.get_or_init(crate::MemoryStorage::new).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new())
    }

    #[test]
    fn test_set_entry_verified_stores_one_and_zero() {
        let session = session();

        session.set_entry_verified(true);
        assert_eq!(session.storage().get(ENTRY_VERIFIED_KEY).as_deref(), Some("1"));

        session.set_entry_verified(false);
        assert_eq!(session.storage().get(ENTRY_VERIFIED_KEY).as_deref(), Some("0"));
    }

    #[test]
    fn test_entry_verified_only_when_one() {
        let session = session();
        assert!(!session.is_entry_verified());

        session.storage().set(ENTRY_VERIFIED_KEY, "1");
        assert!(session.is_entry_verified());

        session.storage().set(ENTRY_VERIFIED_KEY, "0");
        assert!(!session.is_entry_verified());

        session.storage().set(ENTRY_VERIFIED_KEY, "true");
        assert!(!session.is_entry_verified());
    }

    #[test]
    fn test_auth_token_roundtrip() {
        let session = session();
        assert!(session.auth_token().is_none());

        session.set_auth_token("myToken123");
        assert_eq!(session.auth_token().as_deref(), Some("myToken123"));

        session.clear_auth_token();
        assert!(session.auth_token().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = session();
        session.set_auth_token("");
        assert!(session.auth_token().is_none());
    }

    #[test]
    fn test_clear_drops_flag_and_token() {
        let session = session();
        session.set_entry_verified(true);
        session.set_auth_token("abc");

        session.clear();
        assert!(!session.is_entry_verified());
        assert!(session.auth_token().is_none());
    }

    #[test]
    fn test_default_session_is_shared() {
        let first = default_session();
        let second = default_session();

        first.storage().set("default_session_shared", "seen");
        assert_eq!(
            second.storage().get("default_session_shared").as_deref(),
            Some("seen")
        );
        second.storage().remove("default_session_shared");
    }
}
