//! Bid amount normalization.
//!
//! The submission layer stores bid amounts as loosely formatted strings
//! ("$1,200", "45.5", "USD 300"). The engine never compares raw strings:
//! everything funnels through [`parse_amount`], which keeps digits and a
//! single decimal point and drops the rest.
//!
//! A string with **no digits parses to zero**. Callers comparing amounts
//! should either treat such bids as lowest-priority or reject them at
//! submission time — the engine itself does not re-validate.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a loosely formatted amount string into a non-negative decimal.
///
/// Retains ASCII digits and the first `.`; every other character
/// (currency symbols, commas, whitespace, further dots) is dropped.
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let mut cleaned = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '.' && !seen_point {
            cleaned.push(c);
            seen_point = true;
        }
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Normalize a period string to digits only, matching the submission
/// layer's contract for `Bid::period`.
#[must_use]
pub fn parse_period(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
