use crate::config::{Config, Mode};
use crate::domain::ports::MarketDataService;
use crate::infrastructure::binance::BinanceMarketDataService;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::mock::MockMarketDataService;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_market_data_service(config: &Config) -> Arc<dyn MarketDataService> {
        match config.mode {
            Mode::Mock => Arc::new(MockMarketDataService::demo()),
            Mode::Binance => {
                info!(
                    "ServiceFactory: using Binance market data at {}",
                    config.binance.base_url
                );
                let service = BinanceMarketDataService::builder()
                    .base_url(config.binance.base_url.clone())
                    .client(HttpClientFactory::create_client(&config.http))
                    .build();
                Arc::new(service)
            }
        }
    }
}
