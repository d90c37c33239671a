//! Key-Value store wrapper with automatic serialization.

use crate::backend::KvBackend;
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug)]
pub struct Cache<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> Cache<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored value that does not
    /// decode as `T` is reported as [`CacheError::SerializeError`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("cart_v1")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing any previous value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart_v1", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_set_and_get() {
        let cache = Cache::new(MemoryBackend::new());
        let entry = Entry {
            name: "widget".to_string(),
            count: 2,
        };

        cache.set("entry", &entry).unwrap();
        let loaded: Option<Entry> = cache.get("entry").unwrap();
        assert_eq!(loaded, Some(entry));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryBackend::new());
        let loaded: Option<Entry> = cache.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let cache = Cache::new(MemoryBackend::new());
        cache.set("list", &vec![1, 2, 3]).unwrap();
        cache.set("list", &vec![9]).unwrap();

        let loaded: Option<Vec<i32>> = cache.get("list").unwrap();
        assert_eq!(loaded, Some(vec![9]));
    }

    #[test]
    fn test_undecodable_value_is_serialize_error() {
        let backend = MemoryBackend::new();
        backend.set("entry", b"{not json").unwrap();
        let cache = Cache::new(backend);

        let result: Result<Option<Entry>, _> = cache.get("entry");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryBackend::new());
        cache.set("flag", &true).unwrap();
        assert!(cache.exists("flag").unwrap());

        cache.delete("flag").unwrap();
        assert!(!cache.exists("flag").unwrap());
    }
}
