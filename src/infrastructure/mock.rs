use crate::domain::errors::LookupError;
use crate::domain::market::{KNOWN_ASSETS, Kline, TradingPair};
use crate::domain::ports::MarketDataService;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing::info;

/// Counts of upstream calls, shared with whoever built the mock
#[derive(Debug, Default)]
pub struct MockCalls {
    price: AtomicUsize,
    klines: AtomicUsize,
    pairs: Mutex<Vec<String>>,
}

impl MockCalls {
    pub fn price_calls(&self) -> usize {
        self.price.load(Ordering::SeqCst)
    }

    pub fn kline_calls(&self) -> usize {
        self.klines.load(Ordering::SeqCst)
    }

    /// Pairs requested, in call order
    pub fn pairs(&self) -> Vec<String> {
        self.pairs.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn record(&self, counter: &AtomicUsize, pair: &TradingPair) {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut pairs) = self.pairs.lock() {
            pairs.push(pair.api_symbol());
        }
    }
}

/// Offline market data.
///
/// Without scripted responses it behaves like a small fake exchange: the
/// fourteen well-known tickers trade, anything else is rejected the way
/// Binance rejects an unknown symbol.
#[derive(Default)]
pub struct MockMarketDataService {
    price: Option<Result<Decimal, LookupError>>,
    klines: Option<Result<Vec<Kline>, LookupError>>,
    gate: Option<Arc<Notify>>,
    calls: Arc<MockCalls>,
}

impl MockMarketDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake exchange used by `MODE=mock`.
    pub fn demo() -> Self {
        info!("MockMarketDataService: serving simulated prices");
        Self::default()
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(Ok(price));
        self
    }

    pub fn with_price_error(mut self, error: LookupError) -> Self {
        self.price = Some(Err(error));
        self
    }

    pub fn with_klines(mut self, klines: Vec<Kline>) -> Self {
        self.klines = Some(Ok(klines));
        self
    }

    pub fn with_klines_error(mut self, error: LookupError) -> Self {
        self.klines = Some(Err(error));
        self
    }

    /// Hold every price request until the gate is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Arc<MockCalls> {
        self.calls.clone()
    }

    fn simulated_base_price(pair: &TradingPair) -> Option<f64> {
        if !KNOWN_ASSETS.iter().any(|(_, ticker)| *ticker == pair.base) {
            return None;
        }
        let price = match pair.base.as_str() {
            "BTC" => 96000.0,
            "ETH" => 3400.0,
            "BNB" => 610.0,
            "SOL" => 180.0,
            "BCH" => 420.0,
            "LTC" => 95.0,
            "LINK" => 18.0,
            "DOT" => 7.5,
            _ => 0.85,
        };
        Some(price)
    }

    fn unknown_symbol(pair: &TradingPair) -> LookupError {
        LookupError::UpstreamRejected {
            pair: pair.api_symbol(),
            reason: "Invalid symbol.".to_string(),
        }
    }

    /// Deterministic random walk ending at today's UTC midnight.
    fn simulated_klines(base_price: f64, limit: u16) -> Vec<Kline> {
        let today = Utc::now().date_naive();
        let mut price = base_price;
        (0..limit)
            .map(|i| {
                let day = today - Duration::days(i64::from(limit - 1 - i));
                let open_time_ms = day
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| dt.and_utc().timestamp_millis())
                    .unwrap_or_default();

                // -0.5% to +0.5% drift per day
                let seed = (u64::from(i) + 1) * 1_103_515_245 + 12_345;
                let random_val = (((seed / 65_536) % 1000) as f64 / 1000.0) - 0.5;
                price *= 1.0 + random_val * 0.01;

                Kline {
                    open_time_ms,
                    close: price,
                }
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataService for MockMarketDataService {
    async fn get_spot_price(&self, pair: &TradingPair) -> Result<Decimal, LookupError> {
        self.calls.record(&self.calls.price, pair);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.price {
            Some(scripted) => scripted.clone(),
            None => Self::simulated_base_price(pair)
                .and_then(Decimal::from_f64)
                .ok_or_else(|| Self::unknown_symbol(pair)),
        }
    }

    async fn get_klines(
        &self,
        pair: &TradingPair,
        _interval: &str,
        limit: u16,
    ) -> Result<Vec<Kline>, LookupError> {
        self.calls.record(&self.calls.klines, pair);

        match &self.klines {
            Some(scripted) => scripted.clone(),
            None => Self::simulated_base_price(pair)
                .map(|base| Self::simulated_klines(base, limit))
                .ok_or_else(|| Self::unknown_symbol(pair)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::FiatCurrency;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_scripted_responses_and_counters() {
        let mock = MockMarketDataService::new()
            .with_price(dec!(43250.5))
            .with_klines(vec![Kline {
                open_time_ms: 0,
                close: 1.0,
            }]);
        let calls = mock.calls();
        let pair = TradingPair::new("BTC", FiatCurrency::Usdt);

        assert_eq!(mock.get_spot_price(&pair).await.unwrap(), dec!(43250.5));
        assert_eq!(mock.get_klines(&pair, "1d", 30).await.unwrap().len(), 1);
        assert_eq!(calls.price_calls(), 1);
        assert_eq!(calls.kline_calls(), 1);
        assert_eq!(calls.pairs(), vec!["BTCUSDT", "BTCUSDT"]);
    }

    #[tokio::test]
    async fn test_demo_rejects_unknown_tickers() {
        let mock = MockMarketDataService::demo();
        let pair = TradingPair::new("NOTACOIN", FiatCurrency::Eur);

        let err = mock.get_spot_price(&pair).await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamRejected { .. }));
    }

    #[tokio::test]
    async fn test_demo_klines_are_daily_and_ascending() {
        let mock = MockMarketDataService::demo();
        let pair = TradingPair::new("ETH", FiatCurrency::Usdt);

        let klines = mock.get_klines(&pair, "1d", 30).await.unwrap();
        assert_eq!(klines.len(), 30);
        for window in klines.windows(2) {
            assert_eq!(window[1].open_time_ms - window[0].open_time_ms, 86_400_000);
        }
        assert!(klines.iter().all(|k| k.close > 0.0));
    }
}
