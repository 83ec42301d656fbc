//! Binance Market Data Service
//!
//! Public, unauthenticated REST calls used by the tracker:
//! - Spot price (`/api/v3/ticker/price`)
//! - Candlesticks (`/api/v3/klines`)
//!
//! Responses are decoded from the body whatever the HTTP status, since
//! Binance reports unknown pairs as a JSON `{"code", "msg"}` object.

use crate::config::{BinanceConfig, HttpEnvConfig};
use crate::domain::errors::LookupError;
use crate::domain::market::{Kline, TradingPair};
use crate::domain::ports::MarketDataService;
use crate::infrastructure::core::http_client_factory::HttpClientFactory;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, info};

pub struct BinanceMarketDataService {
    client: Client,
    base_url: String,
}

impl BinanceMarketDataService {
    pub fn builder() -> BinanceMarketDataServiceBuilder {
        BinanceMarketDataServiceBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        pair: &str,
    ) -> Result<Value, LookupError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("BinanceMarketDataService: GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                pair: pair.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                "BinanceMarketDataService: {} answered {} for {}",
                path, status, pair
            );
        }

        response.json::<Value>().await.map_err(|e| LookupError::Transport {
            pair: pair.to_string(),
            reason: format!("status {}, body is not JSON: {}", status, e),
        })
    }
}

#[derive(Default)]
pub struct BinanceMarketDataServiceBuilder {
    base_url: Option<String>,
    client: Option<Client>,
}

impl BinanceMarketDataServiceBuilder {
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> BinanceMarketDataService {
        let base_url = self
            .base_url
            .unwrap_or_else(|| BinanceConfig::default().base_url)
            .trim_end_matches('/')
            .to_string();
        let client = self
            .client
            .unwrap_or_else(|| HttpClientFactory::create_client(&HttpEnvConfig::default()));

        BinanceMarketDataService { client, base_url }
    }
}

#[async_trait]
impl MarketDataService for BinanceMarketDataService {
    async fn get_spot_price(&self, pair: &TradingPair) -> Result<Decimal, LookupError> {
        let symbol = pair.api_symbol();
        let body = self
            .get_json("/api/v3/ticker/price", &[("symbol", symbol.as_str())], &symbol)
            .await?;

        parse_ticker_price(body).map_err(|reason| LookupError::UpstreamRejected {
            pair: symbol,
            reason,
        })
    }

    async fn get_klines(
        &self,
        pair: &TradingPair,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Kline>, LookupError> {
        let symbol = pair.api_symbol();
        let limit = limit.to_string();
        let body = self
            .get_json(
                "/api/v3/klines",
                &[
                    ("symbol", symbol.as_str()),
                    ("interval", interval),
                    ("limit", limit.as_str()),
                ],
                &symbol,
            )
            .await?;

        let klines = parse_klines(body).map_err(|reason| LookupError::MalformedHistory {
            pair: symbol.clone(),
            reason,
        })?;

        info!(
            "BinanceMarketDataService: Fetched {} klines for {}",
            klines.len(),
            symbol
        );
        Ok(klines)
    }
}

#[derive(Debug, Deserialize)]
struct PriceTicker {
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    msg: Option<String>,
}

/// Extract the price from a ticker body. `Err` carries the reason, using
/// Binance's own `msg` when the body is an error object.
fn parse_ticker_price(body: Value) -> Result<Decimal, String> {
    let ticker: PriceTicker = serde_json::from_value(body)
        .map_err(|e| format!("unexpected ticker response: {}", e))?;

    match ticker.price {
        Some(Value::String(raw)) if !raw.trim().is_empty() => Decimal::from_str(raw.trim())
            .map_err(|e| format!("unparseable price '{}': {}", raw, e)),
        Some(Value::Number(n)) => {
            Decimal::from_str(&n.to_string()).map_err(|e| format!("unparseable price {}: {}", n, e))
        }
        _ => Err(ticker
            .msg
            .unwrap_or_else(|| "response has no price".to_string())),
    }
}

/// Decode a klines body: an array of rows where column 0 is the open time
/// in epoch milliseconds and column 4 the close price.
fn parse_klines(body: Value) -> Result<Vec<Kline>, String> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(obj) => {
            return Err(obj
                .get("msg")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| "expected an array of klines, got an object".to_string()));
        }
        other => return Err(format!("expected an array of klines, got {}", other)),
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cols = row
                .as_array()
                .ok_or_else(|| format!("row {} is not an array", i))?;
            if cols.len() < 5 {
                return Err(format!(
                    "row {} has {} columns, expected at least 5",
                    i,
                    cols.len()
                ));
            }

            let open_time_ms = cols[0]
                .as_i64()
                .ok_or_else(|| format!("row {} open time is not an integer", i))?;

            let close = match &cols[4] {
                Value::String(s) => s.trim().parse::<f64>().ok(),
                Value::Number(n) => n.as_f64(),
                _ => None,
            }
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("row {} close price is not numeric", i))?;

            Ok(Kline {
                open_time_ms,
                close,
            })
        })
        .collect()
}
