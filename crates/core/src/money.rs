//! Rupiah display helpers.
//!
//! Amounts are carried as whole rupiah in `u64` throughout the crate;
//! this module only wraps them for display.

use rusty_money::{Money, iso};

/// Wraps a whole-rupiah amount for display.
#[must_use]
pub fn rupiah(amount: u64) -> Money<'static, iso::Currency> {
    Money::from_major(i64::try_from(amount).unwrap_or(i64::MAX), iso::IDR)
}
