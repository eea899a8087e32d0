//! Daily gold price snapshots.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::products::{GoldType, Purity};

/// One quoted (type, purity) pair on the daily board: buy and sell
/// side, per gram, whole rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldPrice {
    /// Gold sourcing category.
    pub gold_type: GoldType,

    /// Fineness in parts per thousand.
    pub purity: Purity,

    /// The store buys from customers at this price per gram.
    pub buy_price: u64,

    /// The store sells to customers at this price per gram.
    pub sell_price: u64,
}

/// Immutable exact-match index over one day's quoted prices.
///
/// A missing pair is a valid "no price available today" state, not an
/// error and never a zero price; callers are expected to withhold the
/// affected action. There is no interpolation or fallback across
/// purities.
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    prices: FxHashMap<(GoldType, Purity), GoldPrice>,
}

impl PriceSnapshot {
    /// Builds a snapshot from quoted rows. Later rows replace earlier
    /// ones for the same (type, purity) pair.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = GoldPrice>) -> Self {
        let mut prices = FxHashMap::default();

        for row in rows {
            prices.insert((row.gold_type, row.purity), row);
        }

        Self { prices }
    }

    /// Full quoted row for the pair, if priced today.
    #[must_use]
    pub fn get(&self, gold_type: GoldType, purity: Purity) -> Option<&GoldPrice> {
        self.prices.get(&(gold_type, purity))
    }

    /// Sell-side quote per gram, if the pair is priced today.
    #[must_use]
    pub fn sell_price_per_gram(&self, gold_type: GoldType, purity: Purity) -> Option<u64> {
        self.get(gold_type, purity).map(|price| price.sell_price)
    }

    /// Buy-side quote per gram, if the pair is priced today.
    #[must_use]
    pub fn buy_price_per_gram(&self, gold_type: GoldType, purity: Purity) -> Option<u64> {
        self.get(gold_type, purity).map(|price| price.buy_price)
    }

    /// Number of quoted pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether nothing is priced today.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<GoldPrice> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = GoldPrice>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}
