//! Exchange (tukar tambah) settlement arithmetic.
//!
//! An exchange buys back the customer's old gold and applies its value
//! toward new gold sold in the same interaction. The signed difference
//! drives the "Customer Pays" / "Change" labels in the UI, so its sign
//! convention is load-bearing.

use serde::Serialize;

use crate::{buyback::BuybackSheet, cart::Cart};

/// Signed settlement difference, `new − old`: positive means the
/// customer owes the difference, negative means the store owes change,
/// zero is an even trade.
#[must_use]
pub fn exchange_difference(old_gold_total: u64, new_gold_total: u64) -> i64 {
    i64::try_from(new_gold_total).unwrap_or(i64::MAX)
        - i64::try_from(old_gold_total).unwrap_or(i64::MAX)
}

/// Who pays whom to settle an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Settlement {
    /// The customer pays the store the contained amount.
    CustomerPays(u64),

    /// The store returns change to the customer.
    ChangeDue(u64),

    /// Old and new gold value out exactly.
    EvenTrade,
}

impl Settlement {
    /// Classifies a signed difference from [`exchange_difference`].
    #[must_use]
    pub fn from_difference(difference: i64) -> Self {
        match difference {
            0 => Self::EvenTrade,
            d if d > 0 => Self::CustomerPays(d.unsigned_abs()),
            d => Self::ChangeDue(d.unsigned_abs()),
        }
    }
}

/// Valuation of one exchange interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeQuote {
    /// Buy-side value of the customer's old gold.
    pub old_gold_total: u64,

    /// Sell-side value of the new gold leaving the store.
    pub new_gold_total: u64,
}

impl ExchangeQuote {
    /// Bundles already-computed totals.
    #[must_use]
    pub fn new(old_gold_total: u64, new_gold_total: u64) -> Self {
        Self {
            old_gold_total,
            new_gold_total,
        }
    }

    /// Values an exchange from the intake sheet and the new-gold cart.
    #[must_use]
    pub fn from_state(old_gold: &BuybackSheet, new_gold: &Cart) -> Self {
        Self {
            old_gold_total: old_gold.total(),
            new_gold_total: new_gold.total(),
        }
    }

    /// Signed difference, `new − old`.
    #[must_use]
    pub fn difference(self) -> i64 {
        exchange_difference(self.old_gold_total, self.new_gold_total)
    }

    /// Settlement direction and magnitude.
    #[must_use]
    pub fn settlement(self) -> Settlement {
        Settlement::from_difference(self.difference())
    }
}
