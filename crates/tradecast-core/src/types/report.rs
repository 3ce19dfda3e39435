//! Typed rows published by the reporter.

use super::SignalRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One trade-log row: the latest signal snapshot for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub signal: i8,
    pub close: f64,
    pub rsi: f64,
    pub sma_fast: f64,
    pub sma_slow: f64,
}

impl TradeRecord {
    /// Snapshot the last row of a symbol's signal sequence. Undefined
    /// indicator values are published as 0.
    pub fn from_row(symbol: &str, row: &SignalRow, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            symbol: symbol.to_string(),
            signal: row.signal.as_i8(),
            close: row.bar.close,
            rsi: row.rsi.unwrap_or(0.0),
            sma_fast: row.sma_fast.unwrap_or(0.0),
            sma_slow: row.sma_slow.unwrap_or(0.0),
        }
    }
}

/// One aggregate portfolio-summary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub timestamp: DateTime<Utc>,
    pub total_symbols: usize,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub hold_signals: usize,
    /// Mean held-out accuracy across trained symbols; 0 when none trained.
    pub avg_accuracy: f64,
    /// Sum of last closes across symbols.
    pub portfolio_value: f64,
    /// Change vs. the previous stored summary row; 0 when none exists.
    pub daily_change: f64,
    pub daily_change_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bar, Signal};

    #[test]
    fn test_trade_record_fills_undefined_with_zero() {
        let row = SignalRow {
            bar: Bar::new(0, 10.0, 11.0, 9.0, 10.5, 1000.0),
            rsi: None,
            sma_fast: Some(10.2),
            sma_slow: None,
            macd: None,
            macd_signal: None,
            signal: Signal::Buy,
            position: Some(Signal::Buy),
        };

        let record = TradeRecord::from_row("TEST", &row, Utc::now());
        assert_eq!(record.signal, 1);
        assert_eq!(record.rsi, 0.0);
        assert_eq!(record.sma_fast, 10.2);
        assert_eq!(record.sma_slow, 0.0);
    }
}
