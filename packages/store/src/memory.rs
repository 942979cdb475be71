use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::SessionStorage;

/// In-memory SessionStorage for testing and non-browser targets.
///
/// Clones share the same map, mirroring how every component in a tab sees the
/// same `sessionStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds valid strings.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        assert!(storage.get("missing").is_none());

        storage.set("key", "value");
        assert_eq!(storage.get("key").as_deref(), Some("value"));

        storage.set("key", "other");
        assert_eq!(storage.get("key").as_deref(), Some("other"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let view = storage.clone();

        storage.set("shared", "yes");
        assert_eq!(view.get("shared").as_deref(), Some("yes"));

        view.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_only_touches_one_key() {
        let storage = MemoryStorage::new();
        storage.set("a", "1");
        storage.set("b", "2");

        storage.remove("a");
        assert!(storage.get("a").is_none());
        assert_eq!(storage.get("b").as_deref(), Some("2"));
    }
}
