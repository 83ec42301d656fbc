/// One daily candle as consumed from the klines endpoint.
/// Binance sends full OHLCV rows, only these two columns are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Kline {
    /// Open time, epoch milliseconds
    pub open_time_ms: i64,
    pub close: f64,
}

/// A chart point ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: String,
    pub price: f64,
}
