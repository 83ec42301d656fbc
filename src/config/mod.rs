//! Configuration module for the price tracker.
//!
//! Settings are loaded from environment variables (after `.env` has been
//! read by `main`) and grouped by concern: exchange, HTTP transport and
//! lookup/display.

mod broker_config;
mod lookup_config;

pub use broker_config::{BinanceConfig, HttpEnvConfig};
pub use lookup_config::{DateTimezone, LookupEnvConfig};

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Key lookup used by every `from_source` constructor.
/// Production reads the process environment, tests pass a map.
pub type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Where market data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Binance,
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binance" => Ok(Mode::Binance),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'binance' or 'mock'", s),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: Mode,
    pub binance: BinanceConfig,
    pub http: HttpEnvConfig,
    pub lookup: LookupEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&|key: &str| env::var(key).ok())
    }

    pub fn from_source(source: EnvSource<'_>) -> Result<Self> {
        let mode = match source("MODE") {
            Some(raw) => Mode::from_str(&raw)?,
            None => Mode::default(),
        };

        let binance = BinanceConfig::from_source(source).context("Failed to load Binance config")?;
        let http = HttpEnvConfig::from_source(source);
        let lookup = LookupEnvConfig::from_source(source).context("Failed to load lookup config")?;

        Ok(Self {
            mode,
            binance,
            http,
            lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::FiatCurrency;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(&|k: &str| vars.get(k).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.mode, Mode::Binance);
        assert!(config.binance.base_url.contains("binance.com"));
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.lookup.history_limit, 30);
        assert_eq!(config.lookup.default_currency, FiatCurrency::Usdt);
    }

    #[test]
    fn test_config_mock_mode() {
        let config = load(&[("MODE", "MOCK"), ("DEFAULT_CURRENCY", "inr")]).unwrap();
        assert_eq!(config.mode, Mode::Mock);
        assert_eq!(config.lookup.default_currency, FiatCurrency::Inr);
    }

    #[test]
    fn test_config_errors_carry_context() {
        let err = load(&[("MODE", "alpaca")]).unwrap_err();
        assert!(err.to_string().contains("Invalid MODE"));

        let err = load(&[("HISTORY_LIMIT", "-1")]).unwrap_err();
        assert!(format!("{:#}", err).contains("lookup config"));
    }
}
