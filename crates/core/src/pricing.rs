//! Order total arithmetic.
//!
//! Totals are rounded to 2 decimal places using
//! [`RoundingStrategy::MidpointAwayFromZero`] (round half up for
//! positive amounts). The strategy is pinned here and in the tests so
//! it cannot drift silently between call sites.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::snapshot::OrderLine;

/// Decimal places in a monetary total.
pub const MONEY_SCALE: u32 = 2;

/// Round a monetary amount to the canonical 2-decimal-place scale.
#[must_use]
pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the rounded total for a set of order lines.
#[must_use]
pub fn order_total(lines: &[OrderLine]) -> Decimal {
    round_total(lines.iter().map(OrderLine::subtotal).sum())
}
