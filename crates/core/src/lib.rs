//! Emas
//!
//! Domain engine for a gold-jewellery point of sale: cart state, daily
//! gold price lookup, sale/buyback/exchange arithmetic and text receipt
//! rendering. Everything here is synchronous and in-memory; the remote
//! backend lives behind the gateways in `emas-app`.

pub mod barcode;
pub mod buyback;
pub mod cart;
pub mod exchange;
pub mod fixtures;
pub mod inventory;
pub mod money;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
