//! Text receipt rendering.
//!
//! Renders a settled sale for the thermal-printer path: store header,
//! sold lines as a table, totals, payment and change. The caller hands
//! in checkout output unmodified; nothing here recomputes totals.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::CartLine, money::rupiah};

/// Store identity printed at the top of every receipt.
#[derive(Debug, Clone)]
pub struct StoreInfo {
    /// Store display name.
    pub name: String,

    /// Street address.
    pub address: String,

    /// Contact phone.
    pub phone: String,
}

/// Payment details as they should appear on the receipt.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPayment<'a> {
    /// Customer-facing method label ("Tunai", "QRIS", "Transfer Bank").
    pub method: &'a str,

    /// Amount recorded against the transaction.
    pub amount: u64,

    /// Cash handed over, for cash payments.
    pub tendered: Option<u64>,
}

/// Errors that can occur while writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The output sink rejected a write.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// A settled sale ready for printing.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    store: &'a StoreInfo,
    invoice_no: &'a str,
    lines: &'a [CartLine],
    subtotal: u64,
    discount: u64,
    total: u64,
    payment: ReceiptPayment<'a>,
}

impl<'a> Receipt<'a> {
    /// Assembles a receipt from checkout output.
    #[must_use]
    pub fn new(
        store: &'a StoreInfo,
        invoice_no: &'a str,
        lines: &'a [CartLine],
        subtotal: u64,
        discount: u64,
        total: u64,
        payment: ReceiptPayment<'a>,
    ) -> Self {
        Self {
            store,
            invoice_no,
            lines,
            subtotal,
            discount,
            total,
            payment,
        }
    }

    /// Change owed for cash payments, zero otherwise.
    #[must_use]
    pub fn change(&self) -> u64 {
        self.payment
            .tendered
            .map_or(0, |tendered| tendered.saturating_sub(self.total))
    }

    /// Writes the rendered receipt to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] when the sink rejects a write.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "{}", self.store.name)?;
        writeln!(out, "{}", self.store.address)?;
        writeln!(out, "Telp: {}", self.store.phone)?;
        writeln!(out, "No. Invoice: {}", self.invoice_no)?;

        let mut builder = Builder::default();
        builder.push_record(["Item", "Berat / Kadar", "Harga"]);

        for line in self.lines {
            let product = &line.inventory.product;

            builder.push_record([
                product.name.clone(),
                format!("{} gr - {}", product.weight_grams, product.purity.label()),
                rupiah(line.subtotal).to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Alignment::center());
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "{table}")?;

        writeln!(out, "Subtotal : {}", rupiah(self.subtotal))?;

        if self.discount > 0 {
            writeln!(out, "Diskon   : -{}", rupiah(self.discount))?;
        }

        writeln!(out, "TOTAL    : {}", rupiah(self.total))?;
        writeln!(out, "Pembayaran: {}", self.payment.method)?;

        if let Some(tendered) = self.payment.tendered {
            writeln!(out, "Diterima : {}", rupiah(tendered))?;

            let change = self.change();
            if change > 0 {
                writeln!(out, "Kembalian: {}", rupiah(change))?;
            }
        }

        writeln!(out, "Terima kasih atas kunjungan Anda")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{cart::Cart, fixtures, pricing};

    use super::*;

    fn demo_store() -> StoreInfo {
        StoreInfo {
            name: "Toko Emas Sejahtera".to_string(),
            address: "Jl. Raya No. 123, Jakarta".to_string(),
            phone: "021-1234567".to_string(),
        }
    }

    fn demo_cart() -> Cart {
        let snapshot = fixtures::demo_snapshot();
        let mut cart = Cart::new();

        for item in fixtures::demo_inventory() {
            let price = pricing::sell_quote(&snapshot, &item).unwrap_or_default();
            let _outcome = cart.add_item(item, price);
        }

        cart
    }

    fn render(receipt: &Receipt<'_>) -> TestResult<String> {
        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn receipt_lists_every_sold_line() -> TestResult {
        let store = demo_store();
        let cart = demo_cart();
        let payment = ReceiptPayment {
            method: "QRIS",
            amount: cart.total(),
            tendered: None,
        };
        let receipt = Receipt::new(
            &store,
            "INV-20260806-001",
            cart.lines(),
            cart.subtotal(),
            cart.discount(),
            cart.total(),
            payment,
        );

        let rendered = render(&receipt)?;

        assert!(rendered.contains("Toko Emas Sejahtera"), "store header");
        assert!(rendered.contains("INV-20260806-001"), "invoice number");
        assert!(rendered.contains("Cincin Polos"), "first line");
        assert!(rendered.contains("Kalung Rantai"), "second line");
        assert!(rendered.contains("Gelang Keroncong"), "third line");
        assert!(rendered.contains("18K (750)"), "purity label");
        assert!(!rendered.contains("Diskon"), "no discount row when zero");
        assert!(!rendered.contains("Kembalian"), "no change row without cash");

        Ok(())
    }

    #[test]
    fn cash_receipts_show_tendered_and_change() -> TestResult {
        let store = demo_store();
        let mut cart = demo_cart();
        cart.set_discount(370_000);

        let payment = ReceiptPayment {
            method: "Tunai",
            amount: 21_000_000,
            tendered: Some(21_000_000),
        };
        let receipt = Receipt::new(
            &store,
            "INV-20260806-002",
            cart.lines(),
            cart.subtotal(),
            cart.discount(),
            cart.total(),
            payment,
        );

        assert_eq!(receipt.change(), 21_000_000 - cart.total());

        let rendered = render(&receipt)?;
        assert!(rendered.contains("Diskon"), "discount row");
        assert!(rendered.contains("Diterima"), "tendered row");
        assert!(rendered.contains("Kembalian"), "change row");

        Ok(())
    }
}
