//! Active-sale cart state.
//!
//! One cart per POS session. The cart is an explicitly owned value the
//! session passes into the checkout flow; nothing reads it through a
//! global. Totals are recomputed after every mutation, so the
//! `subtotal == Σ line.subtotal` and `total == subtotal − discount`
//! (floored at zero) invariants hold at every observation point.

use serde::Serialize;
use uuid::Uuid;

use crate::inventory::InventoryItem;

/// One row in the active cart, corresponding to exactly one uniquely
/// identified inventory unit.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    /// The physical unit being sold.
    pub inventory: InventoryItem,

    /// Unit count. Physical items are unique, so this stays 1 in
    /// practice; see [`Cart::set_quantity`].
    pub quantity: u32,

    /// Price computed at add time, whole rupiah.
    pub unit_price: u64,

    /// `unit_price × quantity`.
    pub subtotal: u64,
}

/// Result of [`Cart::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// A new line was appended.
    Added,

    /// A line for the same inventory id already exists; the cart is
    /// unchanged. Unique physical items never get a second line.
    AlreadyPresent,
}

/// The in-progress sale: ordered line items plus a cart-level discount.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount: u64,
    subtotal: u64,
    total: u64,
    customer: Option<Uuid>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `inventory` at the given unit price, unless a
    /// line with the same inventory id already exists. The unit price
    /// comes from the pricing resolver, not from this engine.
    pub fn add_item(&mut self, inventory: InventoryItem, unit_price: u64) -> AddOutcome {
        if self
            .lines
            .iter()
            .any(|line| line.inventory.id == inventory.id)
        {
            return AddOutcome::AlreadyPresent;
        }

        self.lines.push(CartLine {
            inventory,
            quantity: 1,
            unit_price,
            subtotal: unit_price,
        });
        self.recalculate();

        AddOutcome::Added
    }

    /// Removes the line for `inventory_id`; no-op when absent.
    pub fn remove_item(&mut self, inventory_id: Uuid) {
        self.lines.retain(|line| line.inventory.id != inventory_id);
        self.recalculate();
    }

    /// Sets the quantity on the line for `inventory_id` and recomputes
    /// its subtotal; no-op when absent. The value is stored as given —
    /// unique items imply 1, but enforcing that is the caller's policy.
    pub fn set_quantity(&mut self, inventory_id: Uuid, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.inventory.id == inventory_id)
        {
            line.quantity = quantity;
            line.subtotal = line.unit_price * u64::from(quantity);
        }

        self.recalculate();
    }

    /// Sets the cart-level discount, whole rupiah. The stored value is
    /// kept as given even when it exceeds the subtotal; only the
    /// computed total is floored at zero.
    pub fn set_discount(&mut self, discount: u64) {
        self.discount = discount;
        self.recalculate();
    }

    /// Attaches or detaches the customer reference.
    pub fn set_customer(&mut self, customer: Option<Uuid>) {
        self.customer = customer;
    }

    /// Resets to the empty state: no lines, zero discount, zero totals,
    /// no customer. Called after a completed or abandoned checkout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    /// Cart-level discount as entered.
    #[must_use]
    pub fn discount(&self) -> u64 {
        self.discount
    }

    /// Amount due: `subtotal − discount`, never negative.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Attached customer, if any.
    #[must_use]
    pub fn customer(&self) -> Option<Uuid> {
        self.customer
    }

    /// Whether the cart has no lines. Checkout requires a non-empty
    /// cart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn recalculate(&mut self) {
        self.subtotal = self.lines.iter().map(|line| line.subtotal).sum();
        self.total = self.subtotal.saturating_sub(self.discount);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        inventory::{InventoryItem, InventoryStatus},
        products::{GoldType, Product, Purity},
    };
    use rust_decimal::Decimal;

    use super::*;

    fn unit(id: u128, name: &str) -> InventoryItem {
        InventoryItem {
            id: Uuid::from_u128(id),
            barcode: format!("EM-CN-{id:06}-0"),
            status: InventoryStatus::Available,
            product: Product {
                name: name.to_string(),
                gold_type: GoldType::Lm,
                purity: Purity::new(750),
                weight_grams: Decimal::from(5),
                labor_cost: 200_000,
            },
        }
    }

    #[test]
    fn subtotal_tracks_every_mutation() {
        let mut cart = Cart::new();

        assert_eq!(cart.add_item(unit(1, "Cincin"), 5_450_000), AddOutcome::Added);
        assert_eq!(cart.add_item(unit(2, "Kalung"), 10_850_000), AddOutcome::Added);
        assert_eq!(cart.subtotal(), 16_300_000);

        cart.set_quantity(Uuid::from_u128(1), 2);
        assert_eq!(cart.subtotal(), 2 * 5_450_000 + 10_850_000);

        cart.remove_item(Uuid::from_u128(2));
        assert_eq!(cart.subtotal(), 2 * 5_450_000);

        let expected: u64 = cart.lines().iter().map(|line| line.subtotal).sum();
        assert_eq!(cart.subtotal(), expected);
    }

    #[test]
    fn total_never_goes_negative() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(unit(1, "Cincin"), 1_000_000), AddOutcome::Added);

        cart.set_discount(250_000);
        assert_eq!(cart.total(), 750_000);

        // discount above the subtotal floors the total, but is stored
        // as entered
        cart.set_discount(9_999_999);
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.discount(), 9_999_999);

        cart.set_discount(0);
        assert_eq!(cart.total(), 1_000_000);
    }

    #[test]
    fn duplicate_add_is_reported_and_changes_nothing() {
        let mut cart = Cart::new();

        assert_eq!(cart.add_item(unit(1, "Cincin"), 5_450_000), AddOutcome::Added);
        cart.set_quantity(Uuid::from_u128(1), 3);

        // a second add of the same physical unit, even at a new price,
        // leaves the existing line untouched
        assert_eq!(
            cart.add_item(unit(1, "Cincin"), 9_999_999),
            AddOutcome::AlreadyPresent
        );

        assert_eq!(cart.len(), 1);
        let line = cart.lines().first().map(|line| (line.unit_price, line.quantity));
        assert_eq!(line, Some((5_450_000, 3)));
    }

    #[test]
    fn clear_resets_all_state() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(unit(1, "Cincin"), 5_450_000), AddOutcome::Added);
        cart.set_discount(100_000);
        cart.set_customer(Some(Uuid::from_u128(42)));

        cart.clear();

        assert!(cart.is_empty(), "cleared cart has no lines");
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.discount(), 0);
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.customer(), None);
    }

    #[test]
    fn mutations_on_absent_lines_are_no_ops() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(unit(1, "Cincin"), 5_450_000), AddOutcome::Added);

        cart.remove_item(Uuid::from_u128(99));
        cart.set_quantity(Uuid::from_u128(99), 7);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), 5_450_000);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(unit(3, "Gelang"), 1), AddOutcome::Added);
        assert_eq!(cart.add_item(unit(1, "Cincin"), 2), AddOutcome::Added);
        assert_eq!(cart.add_item(unit(2, "Kalung"), 3), AddOutcome::Added);

        let names: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.inventory.product.name.as_str())
            .collect();

        assert_eq!(names, ["Gelang", "Cincin", "Kalung"]);
    }
}
