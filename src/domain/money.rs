//! Monetary types and catalog price normalization.
//!
//! Catalog prices arrive as free-form strings (`"29,99 €"`, `"€44.99"`,
//! `"1.234,50"`). They are normalized to an exact [`Decimal`] here so that
//! every downstream calculation stays free of floating point artifacts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Largest price accepted from the catalog. Bundle sums and yearly
/// fallbacks stay far below `Decimal::MAX` under this bound.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Parse a catalog price string into a [`Price`].
///
/// Everything except digits, `,` and `.` is stripped. When a comma is present
/// it is the decimal separator and periods are thousands separators. The
/// longest valid leading number is used. Missing, blank, unparseable or
/// implausibly large input (above [`MAX_PRICE`]) yields zero; this never fails.
pub fn parse_price(raw: Option<&str>) -> Price {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = if kept.contains(',') {
        kept.replace('.', "").replace(',', ".")
    } else {
        kept
    };

    match leading_number(&normalized).and_then(|n| Decimal::from_str(&n).ok()) {
        Some(price) if price <= MAX_PRICE => price,
        Some(price) => {
            warn!(raw, %price, "price out of range, treating as zero");
            Decimal::ZERO
        }
        None => {
            if !raw.trim().is_empty() {
                warn!(raw, "unparseable price, treating as zero");
            }
            Decimal::ZERO
        }
    }
}

/// Returns true when the raw price string is absent or blank.
pub(crate) fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}

/// Round a monetary amount to cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Extract digits with at most one decimal point from the start of `s`.
fn leading_number(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut seen_point = false;
    let mut seen_digit = false;

    for c in s.chars() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                out.push(c);
            }
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    if out.ends_with('.') {
        out.pop();
    }
    if out.starts_with('.') {
        out.insert(0, '0');
    }
    Some(out)
}
