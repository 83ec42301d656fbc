//! Search term to exchange ticker resolution.

use super::currency::FiatCurrency;
use crate::domain::errors::LookupError;
use std::fmt;

/// Common asset names mapped to their Binance tickers.
pub const KNOWN_ASSETS: [(&str, &str); 14] = [
    ("bitcoin", "BTC"),
    ("ethereum", "ETH"),
    ("dogecoin", "DOGE"),
    ("binance coin", "BNB"),
    ("cardano", "ADA"),
    ("xrp", "XRP"),
    ("solana", "SOL"),
    ("polygon", "MATIC"),
    ("polkadot", "DOT"),
    ("litecoin", "LTC"),
    ("chainlink", "LINK"),
    ("stellar", "XLM"),
    ("bitcoin cash", "BCH"),
    ("tron", "TRX"),
];

/// Resolve free text into a ticker.
///
/// Known names map through [`KNOWN_ASSETS`]; anything else is taken as a
/// ticker already and upper-cased. The result is not checked against the
/// exchange, an unknown ticker only fails once the price request is made.
pub fn resolve_symbol(raw: &str) -> Result<String, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptySearchTerm);
    }

    let needle = trimmed.to_lowercase();
    let ticker = KNOWN_ASSETS
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, ticker)| (*ticker).to_string())
        .unwrap_or_else(|| trimmed.to_uppercase());

    Ok(ticker)
}

/// Base ticker quoted in a fiat/stable currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPair {
    pub base: String,
    pub quote: FiatCurrency,
}

impl TradingPair {
    pub fn new(base: impl Into<String>, quote: FiatCurrency) -> Self {
        Self {
            base: base.into(),
            quote,
        }
    }

    /// Binance wire form, e.g. `BTCUSDT`
    pub fn api_symbol(&self) -> String {
        format!("{}{}", self.base, self.quote.code())
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.quote.code())
    }
}
