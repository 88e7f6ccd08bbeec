//! Local store trait definition.
//!
//! `LocalStore` is a namespaced string key/value store with the shape of
//! browser local storage. Every persisted piece of FlowNote state is one
//! opaque value under a fixed key; there is no schema beyond that.

use crate::error::Result;

/// Durable key/value store for FlowNote state.
///
/// Implementations must ensure:
/// - `set_item` replaces the whole value in one step (no partial writes)
/// - values read back byte-for-byte as written
/// - missing keys read as `Ok(None)`, never as an error
pub trait LocalStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `FlownoteError::Storage` if the backend cannot write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// List stored keys in lexical order.
    fn keys(&self) -> Result<Vec<String>>;
}

impl<S: LocalStore + ?Sized> LocalStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_trait_is_object_safe() {
        let mut store: Box<dyn LocalStore> = Box::new(MemoryStore::new());
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
