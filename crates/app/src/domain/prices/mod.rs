//! Daily gold price board.

pub mod gateway;
pub mod models;
pub mod service;

pub use gateway::PricesGateway;
pub use service::*;
