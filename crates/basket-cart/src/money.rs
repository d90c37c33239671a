//! Currency display.
//!
//! Cart arithmetic stays in plain `f64` with no rounding. Amounts are only
//! rounded to two decimals when formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Format an amount with symbol and two decimals (e.g., "R$ 19.98").
    pub fn format(&self, amount: f64) -> String {
        format!("{} {}", self.symbol(), format_amount(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Format an amount with two decimals and no symbol (e.g., "19.98").
pub fn format_amount(amount: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    format!("{:.2}", amount + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(Currency::BRL.format(19.98), "R$ 19.98");
        assert_eq!(Currency::USD.format(120.0), "$ 120.00");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("BRL"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("XYZ"), None);
    }

    #[test]
    fn test_default_is_brl() {
        assert_eq!(Currency::default(), Currency::BRL);
        assert_eq!(Currency::default().to_string(), "BRL");
    }
}
