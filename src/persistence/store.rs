//! Key/value string storage boundary.

use rustc_hash::FxHashMap;

/// Opaque string key/value store supplied by the embedding environment.
///
/// Calls are synchronous and assumed to always succeed within a session.
pub trait KeyValueStore {
    /// Get the value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: String);

    /// Delete `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: String) {
        (**self).save(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store.
///
/// ## Example
///
/// ```
/// use swarm_strike::persistence::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.save("playerName", "Ada".to_string());
/// assert_eq!(store.load("playerName").as_deref(), Some("Ada"));
///
/// store.remove("playerName");
/// assert!(store.load("playerName").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces() {
        let mut store = MemoryStore::new();
        store.save("k", "a".to_string());
        store.save("k", "b".to_string());
        assert_eq!(store.load("k").as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("missing");
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_store() {
        fn write<S: KeyValueStore>(mut store: S) {
            store.save("k", "v".to_string());
        }

        let mut store = MemoryStore::new();
        write(&mut store);
        assert!(store.contains_key("k"));
    }
}
