//! Quantity input coercion.
//!
//! Quantities typed by a user arrive as free text. They are read with
//! leading-integer semantics (`"3abc"` is 3, `"2.7"` is 2) and clamped to
//! [`MIN_QUANTITY`]; anything without a leading integer counts as 1.

/// Smallest quantity a line item can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Parse a user-entered quantity.
///
/// Missing, empty and non-numeric input yields [`MIN_QUANTITY`]. Zero and
/// negative values are raised to [`MIN_QUANTITY`]. Values beyond `u32`
/// saturate at `u32::MAX`.
pub fn parse_quantity(input: Option<&str>) -> u32 {
    match input.filter(|s| !s.is_empty()).and_then(leading_integer) {
        Some(Leading::Digits(n)) => n.max(MIN_QUANTITY),
        Some(Leading::Negative) | None => MIN_QUANTITY,
    }
}

/// Leading integer of an input: unsigned digits, or a negative number.
enum Leading {
    Digits(u32),
    Negative,
}

fn leading_integer(input: &str) -> Option<Leading> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(Leading::Negative);
    }

    // Only ASCII digits remain, so the sole parse failure is overflow.
    Some(Leading::Digits(digits.parse().unwrap_or(u32::MAX)))
}
