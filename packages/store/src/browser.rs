//! # Browser session storage
//!
//! [`BrowserStorage`] is the [`SessionStorage`] used on the **web platform**. It
//! reads and writes `window.sessionStorage` through `web-sys`, so values survive
//! page reloads but vanish when the tab closes.
//!
//! ## Error handling
//!
//! `sessionStorage` can be missing (no window) or throw (quota, privacy
//! settings). Every method swallows those failures: reads return `None`,
//! writes do nothing. A broken storage therefore degrades to "not verified,
//! not logged in", which the route guards turn into a redirect to the entry
//! page. Failures are logged at `warn`.

use web_sys::Storage;

use crate::storage::{warn_on_failure, SessionStorage};

/// `window.sessionStorage`-backed SessionStorage.
///
/// Zero-size and `Copy`; the storage handle is looked up on every call since
/// `web_sys::Storage` is not `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.session_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("sessionStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        warn_on_failure(&format!("write {key} to"), storage.set_item(key, value));
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        warn_on_failure(&format!("remove {key} from"), storage.remove_item(key));
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        warn_on_failure("clear", storage.clear());
    }
}
