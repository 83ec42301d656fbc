use crate::config::{DateTimezone, LookupEnvConfig};
use crate::domain::market::{HistoricalPoint, Kline};
use chrono::{DateTime, Local, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

/// Price with exactly two fraction digits, e.g. `43250.5` -> `"43250.50"`.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Renders candle open times as calendar dates
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    timezone: DateTimezone,
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>, timezone: DateTimezone) -> Self {
        Self {
            pattern: pattern.into(),
            timezone,
        }
    }

    pub fn from_config(config: &LookupEnvConfig) -> Self {
        Self::new(config.date_format.clone(), config.date_timezone)
    }

    /// `None` when the timestamp is out of range or the pattern is invalid.
    pub fn format(&self, epoch_ms: i64) -> Option<String> {
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
        let mut out = String::new();
        match self.timezone {
            DateTimezone::Utc => write!(out, "{}", utc.format(&self.pattern)).ok()?,
            DateTimezone::Local => {
                write!(out, "{}", utc.with_timezone(&Local).format(&self.pattern)).ok()?
            }
        }
        Some(out)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::from_config(&LookupEnvConfig::default())
    }
}

/// Convert candles into chart points, keeping upstream order.
/// Returns `None` if any open time cannot be rendered as a date.
pub fn to_display_points(klines: &[Kline], dates: &DateFormatter) -> Option<Vec<HistoricalPoint>> {
    klines
        .iter()
        .map(|k| {
            Some(HistoricalPoint {
                date: dates.format(k.open_time_ms)?,
                price: k.close,
            })
        })
        .collect()
}
