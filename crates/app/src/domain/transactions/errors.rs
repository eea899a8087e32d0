//! Checkout errors.

use thiserror::Error;
use uuid::Uuid;

use crate::gateway::GatewayError;

/// Failures of the two-step checkout flow.
///
/// The two remote stages are reported separately. A payment-stage
/// failure leaves a created-but-unpaid transaction behind and carries
/// its identifiers so the operator can reconcile it; compensation is a
/// backend concern and never happens here.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one sold or bought-back line.
    #[error("nothing to check out")]
    EmptyTransaction,

    /// Cash tendered does not cover the transaction total.
    #[error("tendered {tendered} does not cover total {total}")]
    InsufficientTender {
        /// Cash handed over.
        tendered: u64,
        /// Amount due.
        total: u64,
    },

    /// The create-transaction stage failed; payment was never
    /// attempted.
    #[error("failed to create transaction")]
    CreateTransaction(#[source] GatewayError),

    /// The payment stage failed after the transaction was created.
    #[error("failed to record payment for {invoice_no}")]
    Payment {
        /// Backend id of the already-created transaction.
        transaction_id: Uuid,
        /// Invoice number of the already-created transaction.
        invoice_no: String,
        /// Underlying gateway failure.
        #[source]
        source: GatewayError,
    },
}
