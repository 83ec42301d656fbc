//! Lookup and display settings parsed from environment variables.

use super::EnvSource;
use crate::domain::market::FiatCurrency;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::str::FromStr;

/// Time zone used when turning candle open times into dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimezone {
    #[default]
    Local,
    Utc,
}

impl FromStr for DateTimezone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(DateTimezone::Local),
            "utc" => Ok(DateTimezone::Utc),
            _ => anyhow::bail!("Invalid DATE_TIMEZONE: {}. Must be 'local' or 'utc'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupEnvConfig {
    pub history_interval: String,
    pub history_limit: u16,
    pub default_currency: FiatCurrency,
    pub date_format: String,
    pub date_timezone: DateTimezone,
}

impl Default for LookupEnvConfig {
    fn default() -> Self {
        Self {
            history_interval: "1d".to_string(),
            history_limit: 30,
            default_currency: FiatCurrency::Usdt,
            date_format: "%-m/%-d/%Y".to_string(),
            date_timezone: DateTimezone::Local,
        }
    }
}

impl LookupEnvConfig {
    pub fn from_source(source: EnvSource<'_>) -> Result<Self> {
        let defaults = Self::default();

        let history_interval = source("HISTORY_INTERVAL").unwrap_or(defaults.history_interval);

        let history_limit = match source("HISTORY_LIMIT") {
            Some(raw) => {
                let limit: u16 = raw
                    .parse()
                    .with_context(|| format!("Invalid HISTORY_LIMIT: {}", raw))?;
                if !(1..=1000).contains(&limit) {
                    anyhow::bail!("HISTORY_LIMIT must be between 1 and 1000, got {}", limit);
                }
                limit
            }
            None => defaults.history_limit,
        };

        let default_currency = match source("DEFAULT_CURRENCY") {
            Some(raw) => FiatCurrency::from_str(&raw)?,
            None => defaults.default_currency,
        };

        let date_format = source("DATE_FORMAT").unwrap_or(defaults.date_format);
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid DATE_FORMAT: {}", date_format);
        }

        let date_timezone = match source("DATE_TIMEZONE") {
            Some(raw) => DateTimezone::from_str(&raw)?,
            None => defaults.date_timezone,
        };

        Ok(Self {
            history_interval,
            history_limit,
            default_currency,
            date_format,
            date_timezone,
        })
    }
}
