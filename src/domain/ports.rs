use crate::domain::errors::LookupError;
use crate::domain::market::{Kline, TradingPair};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Latest traded price for the pair.
    async fn get_spot_price(&self, pair: &TradingPair) -> Result<Decimal, LookupError>;

    /// Most recent `limit` candles of the given interval, oldest first.
    async fn get_klines(
        &self,
        pair: &TradingPair,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Kline>, LookupError>;
}
