//! Application services for the emas point of sale.
//!
//! The remote command backend sits behind the gateway traits in each
//! domain module; the services here compose its calls into the flows
//! the POS screens drive (checkout, price refresh) without owning any
//! persistence or retry behaviour themselves.

pub mod domain;
pub mod gateway;
