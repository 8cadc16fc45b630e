//! In-memory store for tests and throwaway sessions

use super::Storage;
use crate::error::StoreError;
use rustc_hash::FxHashMap;

/// Volatile key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("daily_word", "x".to_string()).unwrap();
        store.set("daily_word", "y".to_string()).unwrap();
        assert_eq!(store.get("daily_word").as_deref(), Some("y"));
        assert_eq!(store.len(), 1);

        store.remove("daily_word").unwrap();
        store.remove("daily_word").unwrap();
        assert!(store.is_empty());
    }
}
