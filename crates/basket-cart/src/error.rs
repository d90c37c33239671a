//! Cart error types.

use std::path::PathBuf;

use basket_cache::CacheError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Backend failed to read or write the cart.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Persisted cart exists but is not a well-formed item list.
    #[error("Stored cart is corrupt: {0}")]
    Corrupt(String),

    /// Unit price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not a valid product list.
    #[error("Failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
