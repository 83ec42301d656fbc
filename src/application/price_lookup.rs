//! Resolve -> spot price -> klines -> formatted outcome.

use crate::application::formatter::{DateFormatter, format_price, to_display_points};
use crate::config::LookupEnvConfig;
use crate::domain::errors::LookupError;
use crate::domain::lookup::{LookupOutcome, LookupRequest};
use crate::domain::market::{TradingPair, resolve_symbol};
use crate::domain::ports::MarketDataService;
use std::sync::Arc;
use tracing::{debug, info};

pub struct PriceLookupService {
    market_data: Arc<dyn MarketDataService>,
    dates: DateFormatter,
    history_interval: String,
    history_limit: u16,
}

impl PriceLookupService {
    pub fn new(market_data: Arc<dyn MarketDataService>, config: &LookupEnvConfig) -> Self {
        Self {
            market_data,
            dates: DateFormatter::from_config(config),
            history_interval: config.history_interval.clone(),
            history_limit: config.history_limit,
        }
    }

    /// Run one lookup. The history request is only made once the price
    /// request has succeeded.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupOutcome, LookupError> {
        let ticker = resolve_symbol(&request.search_term)?;
        let pair = TradingPair::new(ticker, request.currency);
        info!(
            "PriceLookupService: Looking up {} for '{}'",
            pair,
            request.search_term.trim()
        );

        let price = self.market_data.get_spot_price(&pair).await?;
        debug!("PriceLookupService: {} spot price {}", pair, price);

        let klines = self
            .market_data
            .get_klines(&pair, &self.history_interval, self.history_limit)
            .await?;

        let history =
            to_display_points(&klines, &self.dates).ok_or_else(|| LookupError::MalformedHistory {
                pair: pair.api_symbol(),
                reason: "candle open time cannot be shown as a date".to_string(),
            })?;

        Ok(LookupOutcome {
            price: format_price(price),
            history,
        })
    }
}
