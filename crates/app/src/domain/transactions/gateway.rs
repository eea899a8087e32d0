//! Transactions backend gateway.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::transactions::models::{
        CreateTransactionRequest, Payment, ProcessPaymentRequest, Transaction,
        TransactionFilters,
    },
    gateway::GatewayError,
};

/// Remote commands owned by the transaction backend.
///
/// Each call is a single remote invocation; sequencing and failure
/// attribution live in the checkout service.
#[automock]
#[async_trait]
pub trait TransactionsGateway: Send + Sync {
    /// Creates the durable transaction record and returns it with its
    /// backend-assigned id and invoice number.
    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
        operator_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Transaction, GatewayError>;

    /// Records a payment against an existing transaction.
    async fn process_payment(
        &self,
        request: ProcessPaymentRequest,
    ) -> Result<Payment, GatewayError>;

    /// Voids a transaction, restoring its inventory.
    async fn void_transaction(
        &self,
        transaction_id: Uuid,
        reason: String,
    ) -> Result<(), GatewayError>;

    /// Lists transactions matching the filters.
    async fn list_transactions(
        &self,
        filters: TransactionFilters,
    ) -> Result<Vec<Transaction>, GatewayError>;
}
