//! Gold price backend gateway.

use async_trait::async_trait;
use mockall::automock;

use emas::products::{GoldType, Purity};

use crate::{
    domain::prices::models::{GoldPriceRecord, SetGoldPriceRequest},
    gateway::GatewayError,
};

/// Remote commands owned by the price backend.
#[automock]
#[async_trait]
pub trait PricesGateway: Send + Sync {
    /// Today's quoted rows.
    async fn today_prices(&self) -> Result<Vec<GoldPriceRecord>, GatewayError>;

    /// Sets or updates today's price for one (type, purity) pair.
    async fn set_price(
        &self,
        request: SetGoldPriceRequest,
    ) -> Result<GoldPriceRecord, GatewayError>;

    /// Price history for one pair over the trailing `days`.
    async fn price_history(
        &self,
        gold_type: GoldType,
        purity: Purity,
        days: u32,
    ) -> Result<Vec<GoldPriceRecord>, GatewayError>;
}
