//! Customer gold intake for buyback transactions.

use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    pricing,
    products::{GoldType, Purity},
};

/// One weighed parcel of customer gold, priced at intake time.
#[derive(Debug, Clone, Serialize)]
pub struct BuybackLine {
    /// Declared gold category.
    pub gold_type: GoldType,

    /// Declared fineness.
    pub purity: Purity,

    /// Weighed grams.
    pub weight_grams: Decimal,

    /// Buy-side quote per gram at intake time.
    pub price_per_gram: u64,

    /// `round(weight × price_per_gram)`; no making charge on the buy
    /// side.
    pub total: u64,
}

impl BuybackLine {
    /// Prices a parcel at the given buy-side quote.
    #[must_use]
    pub fn new(
        gold_type: GoldType,
        purity: Purity,
        weight_grams: Decimal,
        price_per_gram: u64,
    ) -> Self {
        let total = pricing::buyback_price(weight_grams, price_per_gram);

        Self {
            gold_type,
            purity,
            weight_grams,
            price_per_gram,
            total,
        }
    }
}

/// The intake sheet for one buyback interaction: a handful of weighed
/// parcels and their running total.
#[derive(Debug, Clone, Default)]
pub struct BuybackSheet {
    lines: SmallVec<[BuybackLine; 4]>,
}

impl BuybackSheet {
    /// Creates an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a priced parcel.
    pub fn add(&mut self, line: BuybackLine) {
        self.lines.push(line);
    }

    /// Removes the parcel at `index`; no-op when out of range.
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Drops every parcel.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Parcels in intake order.
    #[must_use]
    pub fn lines(&self) -> &[BuybackLine] {
        &self.lines
    }

    /// Sum the store pays out for the whole sheet.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.total).sum()
    }

    /// Whether no parcels were taken in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of parcels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
