//! Checkout service.
//!
//! Composes the two remote effects of settling a sale — create the
//! transaction record, then record its payment — into one operation
//! with separately attributable failures. The composition is strictly
//! sequential and deliberately non-atomic: no retries, no compensation;
//! reconciliation of a created-but-unpaid transaction is backend-owned.

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    domain::transactions::{
        errors::CheckoutError,
        gateway::TransactionsGateway,
        models::{
            CreateTransactionRequest, Payment, PaymentMethod, ProcessPaymentRequest,
            Transaction, TransactionFilters,
        },
    },
    gateway::GatewayError,
};

/// Everything the orchestrator needs for one checkout.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Prepared create-transaction payload, see
    /// [`CreateTransactionRequest::sale`] and friends.
    pub transaction: CreateTransactionRequest,

    /// How the customer pays.
    pub payment_method: PaymentMethod,

    /// Cash handed over; required for cash payments, ignored otherwise.
    pub tendered: Option<u64>,

    /// External payment reference (QRIS/transfer receipt number).
    pub reference_no: Option<String>,

    /// Operator ringing up the sale.
    pub operator_id: Uuid,

    /// Branch the sale happens at.
    pub branch_id: Uuid,
}

/// Result of a fully settled checkout, handed unmodified to the receipt
/// renderer.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The created transaction record.
    pub transaction: Transaction,

    /// The recorded payment.
    pub payment: Payment,

    /// Cash tendered, echoed for the receipt.
    pub tendered: Option<u64>,
}

impl CheckoutOutcome {
    /// Change owed to the customer when cash over the total was
    /// tendered.
    #[must_use]
    pub fn change(&self) -> u64 {
        self.tendered
            .map_or(0, |tendered| tendered.saturating_sub(self.transaction.total))
    }
}

/// Orchestrates checkout against an injected backend gateway. One
/// service per POS session; the cart stays owned by the caller.
#[derive(Debug, Clone)]
pub struct CheckoutService<G> {
    gateway: G,
}

impl<G: TransactionsGateway> CheckoutService<G> {
    /// Wraps a gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Runs the two-step checkout.
    ///
    /// The payment stage is never attempted when transaction creation
    /// fails; a payment-stage failure reports the already-created
    /// transaction so the caller can reconcile it. Between the two
    /// calls nothing retries and nothing rolls back.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyTransaction`] when the request has no
    ///   sold or bought-back line.
    /// - [`CheckoutError::InsufficientTender`] when cash is tendered
    ///   below the total.
    /// - [`CheckoutError::CreateTransaction`] when stage one fails.
    /// - [`CheckoutError::Payment`] when stage two fails.
    pub async fn checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if !request.transaction.has_lines() {
            return Err(CheckoutError::EmptyTransaction);
        }

        let total = request.transaction.total;
        let amount = match request.payment_method {
            PaymentMethod::Cash => {
                let tendered = request.tendered.unwrap_or(0);

                if tendered < total {
                    return Err(CheckoutError::InsufficientTender { tendered, total });
                }

                tendered
            }
            PaymentMethod::Qris | PaymentMethod::BankTransfer => total,
        };

        let transaction = self
            .gateway
            .create_transaction(request.transaction, request.operator_id, request.branch_id)
            .await
            .map_err(CheckoutError::CreateTransaction)?;

        info!(invoice_no = %transaction.invoice_no, total, "transaction created");

        let payment = match self
            .gateway
            .process_payment(ProcessPaymentRequest {
                transaction_id: transaction.id,
                method: request.payment_method,
                amount,
                reference_no: request.reference_no,
            })
            .await
        {
            Ok(payment) => payment,
            Err(source) => {
                warn!(
                    invoice_no = %transaction.invoice_no,
                    "payment failed after transaction was created"
                );

                return Err(CheckoutError::Payment {
                    transaction_id: transaction.id,
                    invoice_no: transaction.invoice_no,
                    source,
                });
            }
        };

        info!(invoice_no = %transaction.invoice_no, amount = payment.amount, "payment recorded");

        Ok(CheckoutOutcome {
            transaction,
            payment,
            tendered: request.tendered,
        })
    }

    /// Voids a transaction.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure unchanged.
    pub async fn void(
        &self,
        transaction_id: Uuid,
        reason: impl Into<String> + Send,
    ) -> Result<(), GatewayError> {
        self.gateway
            .void_transaction(transaction_id, reason.into())
            .await
    }

    /// Lists transactions matching the filters.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure unchanged.
    pub async fn list(
        &self,
        filters: TransactionFilters,
    ) -> Result<Vec<Transaction>, GatewayError> {
        self.gateway.list_transactions(filters).await
    }
}
