//! Sales, buyback and exchange transactions.

pub mod errors;
pub mod gateway;
pub mod models;
pub mod service;

pub use errors::CheckoutError;
pub use gateway::TransactionsGateway;
pub use service::*;
