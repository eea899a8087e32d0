//! Gold price wire models.

use emas::{
    prices::GoldPrice,
    products::{GoldType, Purity},
};
use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily price row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldPriceRecord {
    /// Backend-issued identifier.
    pub id: Uuid,

    /// Day the quote applies to.
    pub date: Date,

    /// Gold sourcing category.
    pub gold_type: GoldType,

    /// Fineness in parts per thousand.
    pub purity: Purity,

    /// Buy-side price per gram, whole rupiah.
    pub buy_price: u64,

    /// Sell-side price per gram, whole rupiah.
    pub sell_price: u64,

    /// Where the quote came from, when recorded.
    pub source: Option<String>,

    /// Creation instant.
    pub created_at: Timestamp,
}

impl GoldPriceRecord {
    /// Core price row for snapshot building.
    #[must_use]
    pub fn to_price(&self) -> GoldPrice {
        GoldPrice {
            gold_type: self.gold_type,
            purity: self.purity,
            buy_price: self.buy_price,
            sell_price: self.sell_price,
        }
    }
}

/// Upsert payload for today's price of one (type, purity) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetGoldPriceRequest {
    /// Gold sourcing category.
    pub gold_type: GoldType,

    /// Fineness in parts per thousand.
    pub purity: Purity,

    /// Buy-side price per gram, whole rupiah.
    pub buy_price: u64,

    /// Sell-side price per gram, whole rupiah.
    pub sell_price: u64,
}
