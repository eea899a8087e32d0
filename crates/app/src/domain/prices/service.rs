//! Price board service.

use emas::{
    prices::PriceSnapshot,
    products::{GoldType, Purity},
};
use tracing::info;

use crate::{
    domain::prices::{
        gateway::PricesGateway,
        models::{GoldPriceRecord, SetGoldPriceRequest},
    },
    gateway::GatewayError,
};

/// Fetches and folds the daily price board for the pricing resolver.
/// The snapshot is a read-only value the caller refreshes at whatever
/// cadence it chooses; nothing here caches.
#[derive(Debug, Clone)]
pub struct PricesService<G> {
    gateway: G,
}

impl<G: PricesGateway> PricesService<G> {
    /// Wraps a gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Today's prices folded into an exact-match snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure unchanged.
    pub async fn today_snapshot(&self) -> Result<PriceSnapshot, GatewayError> {
        let rows = self.gateway.today_prices().await?;

        info!(rows = rows.len(), "price snapshot refreshed");

        Ok(PriceSnapshot::from_rows(
            rows.iter().map(GoldPriceRecord::to_price),
        ))
    }

    /// Sets or updates today's price for one pair.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure unchanged.
    pub async fn set_price(
        &self,
        request: SetGoldPriceRequest,
    ) -> Result<GoldPriceRecord, GatewayError> {
        let record = self.gateway.set_price(request).await?;

        info!(
            gold_type = %record.gold_type,
            purity = %record.purity,
            sell_price = record.sell_price,
            buy_price = record.buy_price,
            "gold price updated"
        );

        Ok(record)
    }

    /// Price history for one pair over the trailing `days`.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure unchanged.
    pub async fn history(
        &self,
        gold_type: GoldType,
        purity: Purity,
        days: u32,
    ) -> Result<Vec<GoldPriceRecord>, GatewayError> {
        self.gateway.price_history(gold_type, purity, days).await
    }
}
