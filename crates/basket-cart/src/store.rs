//! Persisted cart store.
//!
//! [`CartStore`] owns no cart state of its own. Every operation reads the
//! single persisted value, changes it, and writes the whole value back, so
//! the backend is always the source of truth.

use basket_cache::{Cache, CacheError, KvBackend};
use tracing::{debug, warn};

use crate::cart::{Cart, LineItem, NewItem};
use crate::error::CartError;
use crate::quantity::parse_quantity;

/// Storage key used when none is given.
pub const DEFAULT_CART_KEY: &str = "cart_v1";

/// Acknowledgment returned by [`CartStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct Added {
    /// The line as stored after the add.
    pub item: LineItem,
    /// `true` if the item was already in the cart and its quantity went up.
    pub merged: bool,
}

/// Read-mutate-write register over one persisted cart.
#[derive(Debug)]
pub struct CartStore<B: KvBackend> {
    cache: Cache<B>,
    key: String,
}

impl<B: KvBackend> CartStore<B> {
    /// Create a store over `backend` using [`DEFAULT_CART_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_CART_KEY)
    }

    /// Create a store over `backend` using a custom storage key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(backend),
            key: key.into(),
        }
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted cart.
    ///
    /// An absent, unreadable or malformed value yields an empty cart. Use
    /// [`CartStore::try_load`] to tell those cases apart.
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        }
    }

    /// Read the persisted cart, reporting read and decode failures.
    ///
    /// An absent value (or a stored JSON `null`) is an empty cart, not an
    /// error.
    pub fn try_load(&self) -> Result<Cart, CartError> {
        match self.cache.get::<Option<Cart>>(&self.key) {
            Ok(cart) => Ok(cart.flatten().unwrap_or_default()),
            Err(CacheError::SerializeError(e)) => Err(CartError::Corrupt(e.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the persisted cart.
    pub fn save(&self, cart: &Cart) -> Result<(), CartError> {
        self.cache.set(&self.key, cart)?;
        debug!(key = %self.key, lines = cart.len(), "saved cart");
        Ok(())
    }

    /// Add one unit of an item and persist.
    ///
    /// Merges into an existing line with the same id, otherwise appends a
    /// new line with quantity 1.
    pub fn add(&self, item: NewItem) -> Result<Added, CartError> {
        let mut cart = self.load();
        let (line, merged) = cart.upsert(item);
        let added = Added {
            item: line.clone(),
            merged,
        };
        self.save(&cart)?;
        debug!(id = %added.item.id, qty = added.item.qty, merged, "added to cart");
        Ok(added)
    }

    /// Remove the line with this id and persist.
    ///
    /// Returns whether a line was removed. A missing id is not an error.
    pub fn remove(&self, id: &str) -> Result<bool, CartError> {
        let mut cart = self.load();
        let removed = cart.remove(id).is_some();
        self.save(&cart)?;
        debug!(id, removed, "remove from cart");
        Ok(removed)
    }

    /// Set a line's quantity from user input and persist.
    ///
    /// The input is coerced by [`parse_quantity`]. Returns `false`, without
    /// writing anything, if no line has this id.
    pub fn set_quantity(&self, id: &str, qty: Option<&str>) -> Result<bool, CartError> {
        let mut cart = self.load();
        let qty = parse_quantity(qty);
        if !cart.set_quantity(id, qty) {
            debug!(id, "quantity update for unknown item ignored");
            return Ok(false);
        }
        self.save(&cart)?;
        Ok(true)
    }

    /// Replace the persisted cart with an empty one.
    pub fn clear(&self) -> Result<(), CartError> {
        self.save(&Cart::new())
    }

    /// Sum of `price * qty` over the persisted cart. Zero when empty.
    pub fn total(&self) -> f64 {
        self.load().total()
    }

    /// Persisted lines in order.
    pub fn items(&self) -> Vec<LineItem> {
        self.load().into_items()
    }
}
