//! In-memory store for tests and throwaway sessions.

use std::collections::BTreeMap;

use super::traits::LocalStore;
use crate::error::Result;

/// Volatile `LocalStore` backed by a sorted map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set_item` calls since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_and_counts() {
        let mut store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        store.set_item("a", "2").unwrap();

        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_seeded_items_do_not_count() {
        let store = MemoryStore::new().with_item("b", "x").with_item("a", "y");
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let mut store = MemoryStore::new();
        store.remove_item("nothing").unwrap();
        assert!(store.get_item("nothing").unwrap().is_none());
    }
}
