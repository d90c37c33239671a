//! Cart domain types and the persisted cart store for Basket.
//!
//! - **Cart**: ordered line items keyed by id, with merge-on-add
//! - **Store**: [`CartStore`], a read-mutate-write register over one
//!   persisted value in a [`basket_cache`] backend
//! - **Summary**: display-ready view of a cart
//! - **Catalog**: products that can be added by id
//!
//! # Example
//!
//! ```rust
//! use basket_cache::MemoryBackend;
//! use basket_cart::prelude::*;
//!
//! let store = CartStore::new(MemoryBackend::new());
//!
//! let widget = NewItem::new("a", "Widget", 9.99).unwrap();
//! store.add(widget.clone()).unwrap();
//! store.add(widget).unwrap();
//!
//! let cart = store.load();
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.get("a").unwrap().qty, 2);
//! assert_eq!(store.total(), 19.98);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod quantity;

pub mod cart;
pub mod catalog;
pub mod store;

pub use error::CartError;
pub use ids::ItemId;
pub use money::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ItemId;
    pub use crate::money::Currency;
    pub use crate::quantity::{parse_quantity, MIN_QUANTITY};

    pub use crate::cart::{Cart, CartSummary, LineItem, NewItem, SummaryLine, EMPTY_CART_MESSAGE};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::store::{Added, CartStore, DEFAULT_CART_KEY};
}
