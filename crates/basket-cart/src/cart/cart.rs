//! Cart and line item types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CartError;
use crate::ids::ItemId;
use crate::quantity::MIN_QUANTITY;

/// A shopping cart.
///
/// Line items keep insertion order and are keyed by id: the position index
/// is maintained alongside the list, so no operation can produce a second
/// line with the same id. Serializes as a plain JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
    index: HashMap<ItemId, usize>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// If a line with the same id exists its quantity goes up by one and its
    /// title and price are left as they were. Otherwise a new line with
    /// quantity 1 is appended. Returns the resulting line and whether it was
    /// merged into an existing one.
    pub fn upsert(&mut self, item: NewItem) -> (&LineItem, bool) {
        if let Some(&pos) = self.index.get(item.id.as_str()) {
            let line = &mut self.items[pos];
            line.qty = line.qty.saturating_add(1);
            return (&self.items[pos], true);
        }

        let pos = self.items.len();
        self.index.insert(item.id.clone(), pos);
        self.items.push(LineItem {
            id: item.id,
            title: item.title,
            price: item.price,
            qty: MIN_QUANTITY,
        });
        (&self.items[pos], false)
    }

    /// Remove the line with the given id.
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let pos = self.index.remove(id)?;
        let removed = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Set the quantity of a line, raising it to at least [`MIN_QUANTITY`].
    ///
    /// Returns `false` if no line has this id.
    pub fn set_quantity(&mut self, id: &str, qty: u32) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.items[pos].qty = qty.max(MIN_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Get a line by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart, returning its lines in order.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Iterate over lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }

    /// Sum of `price * qty` over all lines, unrounded. Zero when empty.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |sum, item| sum + item.line_total())
    }

    fn insert_or_merge(&mut self, item: LineItem) {
        match self.index.get(item.id.as_str()) {
            Some(&pos) => {
                let existing = &mut self.items[pos];
                existing.qty = existing.qty.saturating_add(item.qty);
            }
            None => {
                self.index.insert(item.id.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }
}

/// Builds a cart from stored lines. Repeated ids are folded into the first
/// occurrence with their quantities summed.
impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        items.into_iter().collect()
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for mut item in iter {
            item.qty = item.qty.max(MIN_QUANTITY);
            cart.insert_or_merge(item);
        }
        cart
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredLineItem")]
pub struct LineItem {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Quantity, at least 1.
    pub qty: u32,
}

impl LineItem {
    /// `price * qty` for this line.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Wire shape of a persisted line, validated into a [`LineItem`].
#[derive(Deserialize)]
struct StoredLineItem {
    id: ItemId,
    title: String,
    price: f64,
    qty: i64,
}

impl TryFrom<StoredLineItem> for LineItem {
    type Error = CartError;

    fn try_from(stored: StoredLineItem) -> Result<Self, Self::Error> {
        let price = validate_price(stored.price)?;
        let qty = u32::try_from(stored.qty.max(i64::from(MIN_QUANTITY))).unwrap_or(u32::MAX);
        Ok(Self {
            id: stored.id,
            title: stored.title,
            price,
            qty,
        })
    }
}

/// Input for adding an item to a cart: everything but the quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    id: ItemId,
    title: String,
    price: f64,
}

impl NewItem {
    /// Create an item to add.
    ///
    /// Returns [`CartError::InvalidPrice`] if `price` is negative, NaN or
    /// infinite.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        price: f64,
    ) -> Result<Self, CartError> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            price: validate_price(price)?,
        })
    }

    /// Item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

fn validate_price(price: f64) -> Result<f64, CartError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CartError::InvalidPrice(price))
    }
}
