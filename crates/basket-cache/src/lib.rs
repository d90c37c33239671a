//! Type-safe key-value storage layer for Basket.
//!
//! Provides a small, ergonomic API for keeping JSON-encoded values in a
//! pluggable key-value backend. Values are always read and written whole:
//! a `set` fully replaces whatever was stored under the key.
//!
//! # Example
//!
//! ```rust
//! use basket_cache::{Cache, MemoryBackend};
//!
//! let cache = Cache::new(MemoryBackend::new());
//!
//! cache.set("greeting", &vec!["hello".to_string()]).unwrap();
//!
//! let value: Option<Vec<String>> = cache.get("greeting").unwrap();
//! assert_eq!(value, Some(vec!["hello".to_string()]));
//!
//! cache.delete("greeting").unwrap();
//! assert!(!cache.exists("greeting").unwrap());
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
