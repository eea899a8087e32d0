//! Demo catalogue and price board used by tests and the quote CLI.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    barcode,
    inventory::{InventoryItem, InventoryStatus},
    prices::{GoldPrice, PriceSnapshot},
    products::{GoldType, Product, Purity},
};

/// Three showcase items mirroring a typical display case.
#[must_use]
pub fn demo_inventory() -> Vec<InventoryItem> {
    vec![
        showcase_item(1, "Cincin Polos", "CN", GoldType::Lm, 750, Decimal::from(5), 200_000),
        showcase_item(2, "Kalung Rantai", "KL", GoldType::Lm, 750, Decimal::from(10), 350_000),
        showcase_item(3, "Gelang Keroncong", "GL", GoldType::Lokal, 375, Decimal::from(8), 150_000),
    ]
}

/// A full sell/buy price board for the three gold types at the common
/// fineness steps.
#[must_use]
pub fn demo_snapshot() -> PriceSnapshot {
    PriceSnapshot::from_rows([
        row(GoldType::Lm, 999, 1_150_000, 1_250_000),
        row(GoldType::Lm, 750, 950_000, 1_050_000),
        row(GoldType::Lm, 375, 475_000, 525_000),
        row(GoldType::Ubs, 999, 1_145_000, 1_245_000),
        row(GoldType::Ubs, 750, 945_000, 1_045_000),
        row(GoldType::Ubs, 375, 472_000, 522_000),
        row(GoldType::Lokal, 999, 1_100_000, 1_200_000),
        row(GoldType::Lokal, 750, 880_000, 980_000),
        row(GoldType::Lokal, 375, 440_000, 490_000),
    ])
}

fn showcase_item(
    sequence: u32,
    name: &str,
    category: &str,
    gold_type: GoldType,
    purity: u16,
    weight_grams: Decimal,
    labor_cost: u64,
) -> InventoryItem {
    InventoryItem {
        id: Uuid::from_u128(sequence.into()),
        barcode: barcode::generate(category, sequence),
        status: InventoryStatus::Available,
        product: Product {
            name: name.to_string(),
            gold_type,
            purity: Purity::new(purity),
            weight_grams,
            labor_cost,
        },
    }
}

fn row(gold_type: GoldType, purity: u16, buy_price: u64, sell_price: u64) -> GoldPrice {
    GoldPrice {
        gold_type,
        purity: Purity::new(purity),
        buy_price,
        sell_price,
    }
}
