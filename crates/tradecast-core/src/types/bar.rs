//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar. Uses f64 for fast indicator calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// Time-series of bars for one symbol, ascending by timestamp with no
/// duplicate timestamps. The invariant is established at construction:
/// bars are sorted and de-duplicated (last write wins).
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Symbol identifier
    pub symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Create a series from raw bars, normalizing ordering and duplicates.
    pub fn from_bars(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by(|next, prev| {
            if next.timestamp == prev.timestamp {
                // keep the later write for a repeated timestamp
                *prev = *next;
                true
            } else {
                false
            }
        });
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sorts_ascending() {
        let series = BarSeries::from_bars(
            "TEST",
            vec![
                Bar::new(3, 1.0, 1.0, 1.0, 3.0, 10.0),
                Bar::new(1, 1.0, 1.0, 1.0, 1.0, 10.0),
                Bar::new(2, 1.0, 1.0, 1.0, 2.0, 10.0),
            ],
        );

        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_dedups_last_write_wins() {
        let series = BarSeries::from_bars(
            "TEST",
            vec![
                Bar::new(1, 1.0, 1.0, 1.0, 1.0, 10.0),
                Bar::new(2, 1.0, 1.0, 1.0, 2.0, 10.0),
                Bar::new(2, 1.0, 1.0, 1.0, 2.5, 20.0),
            ],
        );

        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().close, 2.5);
    }

    #[test]
    fn test_bar_datetime() {
        let bar = Bar::new(86_400_000, 1.0, 2.0, 0.5, 1.5, 100.0);
        assert_eq!(bar.datetime().timestamp(), 86_400);
    }
}
