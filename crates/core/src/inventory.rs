//! Inventory units.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::products::Product;

/// Lifecycle state of a physical inventory unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    /// On the shop floor and sellable.
    Available,

    /// Sold and gone.
    Sold,

    /// Held against a pending transaction.
    Reserved,
}

/// One uniquely identified physical item: a serial-numbered unit, not a
/// SKU with stock levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Backend-issued identifier; uniqueness key for cart lines.
    pub id: Uuid,

    /// Printed barcode, see [`crate::barcode`].
    pub barcode: String,

    /// Current lifecycle state.
    pub status: InventoryStatus,

    /// Denormalised product attributes used for pricing and display.
    pub product: Product,
}

impl InventoryItem {
    /// Whether the unit can be placed into a sale.
    #[must_use]
    pub fn is_sellable(&self) -> bool {
        self.status == InventoryStatus::Available
    }
}
