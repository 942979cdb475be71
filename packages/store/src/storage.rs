//! # Session storage abstraction
//!
//! The application keeps exactly two pieces of client state between page
//! loads: whether the shared entry password was accepted, and the bearer token
//! returned by login. Both live for the lifetime of the browser tab, which is
//! what the browser's `sessionStorage` gives us.
//!
//! [`SessionStorage`] is the seam between that state and where it is kept:
//!
//! | Implementation | Target | Backing |
//! |----------------|--------|---------|
//! | [`crate::MemoryStorage`] | native, tests | `Arc<Mutex<HashMap>>` |
//! | `BrowserStorage` | `wasm32` + `web` feature | `window.sessionStorage` |
//!
//! The trait is synchronous because `sessionStorage` is. The UI runs on a
//! single thread, so implementations do no cross-call coordination.

use std::fmt::Debug;

/// String key/value storage scoped to one browser tab.
pub trait SessionStorage {
    /// Read a value. Missing keys and storage failures both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Remove a single key.
    fn remove(&self, key: &str);

    /// Remove every key.
    fn clear(&self);
}

/// Log a failed write at `warn` and swallow it. Returns whether the write
/// went through.
#[cfg_attr(not(all(target_arch = "wasm32", feature = "web")), allow(dead_code))]
pub(crate) fn warn_on_failure<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to {action} sessionStorage: {:?}", e);
            false
        }
    }
}
