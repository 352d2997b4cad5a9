//! Key/value storage seam shared by the browser and in-memory backends.
//!
//! # Design
//! - Mirror the browser `Storage` surface: string keys, string values, key enumeration.
//! - Reads borrow immutably; writes take `&mut self` since the UI is single-threaded.

use std::collections::BTreeMap;

use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("storage {operation} failed for '{key}': {detail}")]
pub struct StorageError {
    /// Operation identifier (`get`, `set`, `remove`, `keys`).
    pub operation: &'static str,
    /// Key involved in the failing operation (empty for enumeration).
    pub key: String,
    /// Backend-specific detail.
    pub detail: String,
}

impl StorageError {
    /// Build an error for the given operation and key.
    #[must_use]
    pub fn new(operation: &'static str, key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation,
            key: key.into(),
            detail: detail.into(),
        }
    }
}

/// String-keyed, string-valued persistent storage.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Snapshot every key currently held by the backend.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}

/// Ordered in-memory store used by native builds and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        store.remove("a").unwrap();
        assert!(store.get("a").unwrap().is_none());
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_keys_are_sorted() {
        let store: MemoryStore = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(store.keys().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn mutable_reference_forwards_to_inner_store() {
        let mut inner = MemoryStore::new();
        {
            let mut borrowed = &mut inner;
            borrowed.set("k", "v").unwrap();
            assert_eq!(borrowed.keys().unwrap(), vec!["k"]);
        }
        assert!(inner.contains("k"));
    }

    #[test]
    fn storage_error_formats_context() {
        let err = StorageError::new("set", "nvram_x", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "storage set failed for 'nvram_x': quota exceeded"
        );
    }
}
