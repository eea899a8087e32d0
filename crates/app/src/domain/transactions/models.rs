//! Transaction wire models.
//!
//! Shapes mirror the backend command contract; serde labels match the
//! payloads it expects.

use emas::{
    buyback::BuybackSheet,
    cart::Cart,
    exchange::ExchangeQuote,
    products::{GoldType, Purity},
};
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Selling finished items to a customer.
    Sale,
    /// Buying gold from a customer.
    Buyback,
    /// Old gold traded in against new gold.
    Exchange,
}

/// Backend lifecycle state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Created, payment outstanding.
    Pending,
    /// Fully paid.
    Completed,
    /// Voided after the fact.
    Void,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash over the counter.
    Cash,
    /// QRIS e-wallet payment.
    Qris,
    /// Bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Customer-facing label used on receipts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Tunai",
            Self::Qris => "QRIS",
            Self::BankTransfer => "Transfer Bank",
        }
    }
}

/// Backend state of a recorded payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement.
    Pending,
    /// Settled.
    Success,
    /// Settlement failed.
    Failed,
}

/// Transaction record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend-issued identifier.
    pub id: Uuid,
    /// Branch the sale happened at.
    pub branch_id: Uuid,
    /// Operator who rang it up.
    pub user_id: Uuid,
    /// Optional customer reference.
    pub customer_id: Option<Uuid>,
    /// Backend-generated invoice number.
    pub invoice_no: String,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Sum of line subtotals, whole rupiah.
    pub subtotal: u64,
    /// Discount as entered at the counter.
    pub discount: u64,
    /// Tax amount; currently always zero.
    pub tax: u64,
    /// Amount due.
    pub total: u64,
    /// Free-form operator notes.
    pub notes: Option<String>,
    /// Lifecycle state.
    pub status: TransactionStatus,
    /// Creation instant.
    pub created_at: Timestamp,
}

/// Payment record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Backend-issued identifier.
    pub id: Uuid,
    /// Transaction the payment settles.
    pub transaction_id: Uuid,
    /// How the customer paid.
    pub method: PaymentMethod,
    /// Amount recorded, whole rupiah.
    pub amount: u64,
    /// External reference (QRIS/transfer receipt number).
    pub reference_no: Option<String>,
    /// Settlement state.
    pub status: PaymentStatus,
    /// Settlement instant, once settled.
    pub paid_at: Option<Timestamp>,
}

/// One sold line on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItemInput {
    /// Inventory unit being sold.
    pub inventory_id: Uuid,
    /// Price computed at add time.
    pub unit_price: u64,
    /// Line-level discount; the POS only uses the cart-level discount,
    /// so this stays zero.
    pub discount: u64,
}

/// One bought-back parcel on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuybackItemInput {
    /// Declared gold category.
    pub gold_type: GoldType,
    /// Declared fineness.
    pub purity: Purity,
    /// Weighed grams.
    pub weight_grams: Decimal,
    /// Buy-side quote per gram at intake time.
    pub unit_price: u64,
}

/// Request payload for the create-transaction command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction kind.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Optional customer reference.
    pub customer_id: Option<Uuid>,
    /// Sold lines; empty for pure buybacks.
    pub items: Vec<TransactionItemInput>,
    /// Bought-back parcels; empty for pure sales.
    pub buyback_items: Vec<BuybackItemInput>,
    /// Sum of sold line subtotals.
    pub subtotal: u64,
    /// Total discount, including any trade-in credit.
    pub discount: u64,
    /// Tax amount; currently always zero.
    pub tax: u64,
    /// Amount the customer owes.
    pub total: u64,
    /// Free-form operator notes.
    pub notes: Option<String>,
}

impl CreateTransactionRequest {
    /// Maps the active cart to a sale request.
    #[must_use]
    pub fn sale(cart: &Cart) -> Self {
        Self {
            transaction_type: TransactionType::Sale,
            customer_id: cart.customer(),
            items: sale_items(cart),
            buyback_items: Vec::new(),
            subtotal: cart.subtotal(),
            discount: cart.discount(),
            tax: 0,
            total: cart.total(),
            notes: None,
        }
    }

    /// Maps an intake sheet to a buyback request. The total is what the
    /// store pays out to the customer.
    #[must_use]
    pub fn buyback(sheet: &BuybackSheet, customer_id: Option<Uuid>) -> Self {
        let total = sheet.total();

        Self {
            transaction_type: TransactionType::Buyback,
            customer_id,
            items: Vec::new(),
            buyback_items: buyback_items(sheet),
            subtotal: total,
            discount: 0,
            tax: 0,
            total,
            notes: None,
        }
    }

    /// Maps an exchange: new gold sold from the cart, old gold taken in
    /// from the sheet. The trade-in value is carried as discount, so the
    /// backend's `subtotal − discount` arithmetic yields the amount the
    /// customer still owes, floored at zero; a negative difference is
    /// settled as change at the counter.
    #[must_use]
    pub fn exchange(new_gold: &Cart, old_gold: &BuybackSheet) -> Self {
        let quote = ExchangeQuote::from_state(old_gold, new_gold);

        Self {
            transaction_type: TransactionType::Exchange,
            customer_id: new_gold.customer(),
            items: sale_items(new_gold),
            buyback_items: buyback_items(old_gold),
            subtotal: new_gold.subtotal(),
            discount: new_gold.discount() + old_gold.total(),
            tax: 0,
            total: quote.difference().max(0).unsigned_abs(),
            notes: None,
        }
    }

    /// Whether the request carries any sold or bought-back line.
    #[must_use]
    pub fn has_lines(&self) -> bool {
        !self.items.is_empty() || !self.buyback_items.is_empty()
    }
}

fn sale_items(cart: &Cart) -> Vec<TransactionItemInput> {
    cart.lines()
        .iter()
        .map(|line| TransactionItemInput {
            inventory_id: line.inventory.id,
            unit_price: line.unit_price,
            discount: 0,
        })
        .collect()
}

fn buyback_items(sheet: &BuybackSheet) -> Vec<BuybackItemInput> {
    sheet
        .lines()
        .iter()
        .map(|line| BuybackItemInput {
            gold_type: line.gold_type,
            purity: line.purity,
            weight_grams: line.weight_grams,
            unit_price: line.price_per_gram,
        })
        .collect()
}

/// Request payload for the process-payment command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    /// Transaction being settled.
    pub transaction_id: Uuid,
    /// How the customer paid.
    pub method: PaymentMethod,
    /// Amount to record: the cash actually tendered, or the wire total
    /// for non-cash methods.
    pub amount: u64,
    /// External reference (QRIS/transfer receipt number).
    pub reference_no: Option<String>,
}

/// Server-side filters for transaction listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TransactionFilters {
    /// Earliest transaction date, inclusive.
    pub date_from: Option<Date>,
    /// Latest transaction date, inclusive.
    pub date_to: Option<Date>,
    /// Restrict to one transaction kind.
    pub transaction_type: Option<TransactionType>,
}

#[cfg(test)]
mod tests {
    use emas::{
        buyback::BuybackLine,
        cart::AddOutcome,
        fixtures, pricing,
        products::{GoldType, Purity},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn priced_cart() -> Cart {
        let snapshot = fixtures::demo_snapshot();
        let mut cart = Cart::new();

        for item in fixtures::demo_inventory() {
            let price = pricing::sell_quote(&snapshot, &item).unwrap_or_default();
            assert_eq!(cart.add_item(item, price), AddOutcome::Added);
        }

        cart
    }

    #[test]
    fn sale_request_mirrors_the_cart() {
        let mut cart = priced_cart();
        cart.set_discount(370_000);
        cart.set_customer(Some(Uuid::from_u128(42)));

        let request = CreateTransactionRequest::sale(&cart);

        assert_eq!(request.transaction_type, TransactionType::Sale);
        assert_eq!(request.customer_id, Some(Uuid::from_u128(42)));
        assert_eq!(request.items.len(), 3);
        assert!(request.buyback_items.is_empty(), "sales carry no buyback lines");
        assert_eq!(request.subtotal, cart.subtotal());
        assert_eq!(request.discount, 370_000);
        assert_eq!(request.tax, 0);
        assert_eq!(request.total, cart.total());
        assert!(
            request.items.iter().all(|item| item.discount == 0),
            "line discounts stay zero"
        );
    }

    #[test]
    fn buyback_request_pays_out_the_sheet_total() {
        let mut sheet = BuybackSheet::new();
        sheet.add(BuybackLine::new(
            GoldType::Lm,
            Purity::new(750),
            Decimal::from(10),
            950_000,
        ));

        let request = CreateTransactionRequest::buyback(&sheet, None);

        assert_eq!(request.transaction_type, TransactionType::Buyback);
        assert!(request.items.is_empty(), "buybacks sell nothing");
        assert_eq!(request.buyback_items.len(), 1);
        assert_eq!(request.subtotal, 9_500_000);
        assert_eq!(request.total, 9_500_000);
        assert!(request.has_lines(), "buyback lines count as lines");
    }

    #[test]
    fn exchange_request_carries_trade_in_as_discount() {
        let cart = priced_cart();

        let mut sheet = BuybackSheet::new();
        sheet.add(BuybackLine::new(
            GoldType::Lm,
            Purity::new(750),
            Decimal::ONE,
            3_000_000,
        ));

        let request = CreateTransactionRequest::exchange(&cart, &sheet);

        assert_eq!(request.transaction_type, TransactionType::Exchange);
        assert_eq!(request.items.len(), 3);
        assert_eq!(request.buyback_items.len(), 1);
        assert_eq!(request.subtotal, cart.subtotal());
        assert_eq!(request.discount, 3_000_000);
        assert_eq!(request.total, cart.total() - 3_000_000);
    }

    #[test]
    fn exchange_total_floors_at_zero_when_old_gold_wins() {
        let snapshot = fixtures::demo_snapshot();
        let mut cart = Cart::new();

        if let Some(ring) = fixtures::demo_inventory().into_iter().next() {
            let price = pricing::sell_quote(&snapshot, &ring).unwrap_or_default();
            assert_eq!(cart.add_item(ring, price), AddOutcome::Added);
        }

        let mut sheet = BuybackSheet::new();
        sheet.add(BuybackLine::new(
            GoldType::Lm,
            Purity::new(999),
            Decimal::from(10),
            1_150_000,
        ));

        let request = CreateTransactionRequest::exchange(&cart, &sheet);

        assert!(sheet.total() > cart.total(), "old gold outweighs new");
        assert_eq!(request.total, 0, "wire total never goes negative");
    }

    #[test]
    fn empty_state_produces_a_lineless_request() {
        let request = CreateTransactionRequest::sale(&Cart::new());

        assert!(!request.has_lines(), "empty cart maps to no lines");
        assert_eq!(request.total, 0);
    }

    #[test]
    fn wire_labels_match_the_backend_contract() -> TestResult {
        assert_eq!(
            serde_json::to_string(&TransactionType::Sale)?,
            "\"sale\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer)?,
            "\"bank_transfer\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"qris\"")?,
            PaymentMethod::Qris
        );

        let request = CreateTransactionRequest::sale(&priced_cart());
        let encoded = serde_json::to_value(&request)?;

        assert_eq!(encoded["type"], "sale");
        assert!(
            encoded.get("transaction_type").is_none(),
            "the wire field is named `type`"
        );

        Ok(())
    }

    #[test]
    fn payment_method_labels_are_customer_facing() {
        assert_eq!(PaymentMethod::Cash.label(), "Tunai");
        assert_eq!(PaymentMethod::Qris.label(), "QRIS");
        assert_eq!(PaymentMethod::BankTransfer.label(), "Transfer Bank");
    }
}
