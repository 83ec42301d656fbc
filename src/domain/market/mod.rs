pub mod currency;
pub mod symbol;
pub mod types;

pub use currency::FiatCurrency;
pub use symbol::{KNOWN_ASSETS, TradingPair, resolve_symbol};
pub use types::{HistoricalPoint, Kline};
