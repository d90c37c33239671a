//! Order wire types.

use basket_cart::cart::Cart;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;

/// Body posted to the order endpoint.
///
/// ```json
/// {"customer": {"name": "..", "email": "..", "phone": ".."},
///  "items": [{"id": "..", "title": "..", "price": 9.99, "qty": 2}],
///  "total": 19.98}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Who is ordering.
    pub customer: Customer,
    /// Cart contents, serialized as the same array that is persisted.
    pub items: Cart,
    /// Cart total, unrounded.
    pub total: f64,
}

impl OrderRequest {
    /// Build an order from a customer and a cart snapshot.
    pub fn new(customer: Customer, items: Cart) -> Self {
        let total = items.total();
        Self {
            customer,
            items,
            total,
        }
    }
}

/// Acknowledgment returned by the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Whether the order was accepted.
    pub ok: bool,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
