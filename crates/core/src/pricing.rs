//! Line price computation.
//!
//! All currency outputs are whole rupiah. Rounding is half away from
//! zero and happens once, on the final weight × price product, never on
//! intermediate terms.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::{
    inventory::InventoryItem,
    prices::PriceSnapshot,
    products::{GoldType, Purity},
};

fn round_rupiah(amount: Decimal) -> u64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Sell-side line price: material value plus the fixed making charge.
#[must_use]
pub fn sale_price(weight_grams: Decimal, price_per_gram: u64, labor_cost: u64) -> u64 {
    round_rupiah(weight_grams * Decimal::from(price_per_gram)) + labor_cost
}

/// Buy-side line price: raw material only, no making charge.
#[must_use]
pub fn buyback_price(weight_grams: Decimal, price_per_gram: u64) -> u64 {
    round_rupiah(weight_grams * Decimal::from(price_per_gram))
}

/// Sell-side quote for a finished inventory item, when its (type,
/// purity) pair is priced today. `None` means "not priceable", which is
/// deliberately distinct from a zero price.
#[must_use]
pub fn sell_quote(snapshot: &PriceSnapshot, item: &InventoryItem) -> Option<u64> {
    let product = &item.product;
    let per_gram = snapshot.sell_price_per_gram(product.gold_type, product.purity)?;

    Some(sale_price(product.weight_grams, per_gram, product.labor_cost))
}

/// Buy-side quote for weighed customer gold, when the pair is priced
/// today.
#[must_use]
pub fn buy_quote(
    snapshot: &PriceSnapshot,
    gold_type: GoldType,
    purity: Purity,
    weight_grams: Decimal,
) -> Option<u64> {
    let per_gram = snapshot.buy_price_per_gram(gold_type, purity)?;

    Some(buyback_price(weight_grams, per_gram))
}
