//! Shopping cart module.
//!
//! Contains the cart, its line items, and the display summary.

mod cart;
mod summary;

pub use cart::{Cart, LineItem, NewItem};
pub use summary::{CartSummary, SummaryLine, EMPTY_CART_MESSAGE};
