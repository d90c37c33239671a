//! Display-ready view of a cart.

use serde::Serialize;

use crate::cart::Cart;
use crate::ids::ItemId;
use crate::money::{format_amount, Currency};

/// Message shown in place of line items when the cart has none.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Snapshot of a cart for rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    /// One entry per cart line, in cart order.
    pub lines: Vec<SummaryLine>,
    /// Sum of line totals, unrounded.
    pub total: f64,
    /// Currency used for formatting.
    pub currency: Currency,
}

impl CartSummary {
    /// Build a summary from a cart.
    pub fn from_cart(cart: &Cart, currency: Currency) -> Self {
        let lines = cart
            .iter()
            .map(|item| SummaryLine {
                id: item.id.clone(),
                title: item.title.clone(),
                qty: item.qty,
                unit_price: item.price,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            lines,
            total: cart.total(),
            currency,
        }
    }

    /// Check if there is anything to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total with symbol (e.g., "R$ 19.98").
    pub fn formatted_total(&self) -> String {
        self.currency.format(self.total)
    }

    /// Total without symbol (e.g., "19.98").
    pub fn total_amount(&self) -> String {
        format_amount(self.total)
    }

    /// Plain-text rendering: one line per item followed by the total.
    pub fn to_text(&self) -> String {
        if self.is_empty() {
            return EMPTY_CART_MESSAGE.to_string();
        }

        let mut out: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{} x {} = {}",
                    line.title,
                    line.qty,
                    self.currency.format(line.line_total)
                )
            })
            .collect();
        out.push(format!("Total: {}", self.formatted_total()));
        out.join("\n")
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryLine {
    /// Item id.
    pub id: ItemId,
    /// Display name.
    pub title: String,
    /// Quantity.
    pub qty: u32,
    /// Unit price.
    pub unit_price: f64,
    /// `unit_price * qty`.
    pub line_total: f64,
}
