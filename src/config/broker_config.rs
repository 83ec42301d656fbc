//! Exchange and HTTP transport configuration parsed from environment variables.

use super::EnvSource;
use anyhow::{Context, Result};

/// Binance public REST configuration
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    pub base_url: String,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.binance.com".to_string(),
        }
    }
}

impl BinanceConfig {
    pub fn from_source(source: EnvSource<'_>) -> Result<Self> {
        let raw = source("BINANCE_BASE_URL").unwrap_or_else(|| Self::default().base_url);
        let parsed = url::Url::parse(&raw)
            .with_context(|| format!("Invalid BINANCE_BASE_URL: {}", raw))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("BINANCE_BASE_URL must be http(s), got {}", raw);
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

/// Timeouts for the shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpEnvConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for HttpEnvConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl HttpEnvConfig {
    pub fn from_source(source: EnvSource<'_>) -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: source("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: source("HTTP_CONNECT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.connect_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_binance_config_defaults() {
        let vars = source(&[]);
        let config = BinanceConfig::from_source(&|k: &str| vars.get(k).cloned()).unwrap();
        assert_eq!(config.base_url, "https://api.binance.com");
    }

    #[test]
    fn test_binance_base_url_trailing_slash_trimmed() {
        let vars = source(&[("BINANCE_BASE_URL", "https://api1.binance.com/")]);
        let config = BinanceConfig::from_source(&|k: &str| vars.get(k).cloned()).unwrap();
        assert_eq!(config.base_url, "https://api1.binance.com");
    }

    #[test]
    fn test_binance_base_url_rejects_garbage() {
        let vars = source(&[("BINANCE_BASE_URL", "not a url")]);
        assert!(BinanceConfig::from_source(&|k: &str| vars.get(k).cloned()).is_err());

        let vars = source(&[("BINANCE_BASE_URL", "ftp://api.binance.com")]);
        assert!(BinanceConfig::from_source(&|k: &str| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn test_http_config_falls_back_on_bad_values() {
        let vars = source(&[("HTTP_TIMEOUT_SECS", "0"), ("HTTP_CONNECT_TIMEOUT_SECS", "x")]);
        let config = HttpEnvConfig::from_source(&|k: &str| vars.get(k).cloned());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);

        let vars = source(&[("HTTP_TIMEOUT_SECS", "5")]);
        let config = HttpEnvConfig::from_source(&|k: &str| vars.get(k).cloned());
        assert_eq!(config.timeout_secs, 5);
    }
}
