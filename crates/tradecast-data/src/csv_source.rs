//! CSV data source for offline runs and fixtures.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::PathBuf;
use tradecast_core::error::DataError;
use tradecast_core::traits::DataSource;
use tradecast_core::types::{Bar, LookbackPeriod};

/// One CSV row. Header names follow common export conventions.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Loads `{symbol}.csv` files from a directory. The lookback period is
/// ignored: a file holds whatever history it holds.
pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    /// Create a source rooted at a directory of per-symbol CSV files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, symbol: &str) -> Option<PathBuf> {
        let candidates = [
            self.dir.join(format!("{}.csv", symbol)),
            self.dir.join(format!("{}.csv", symbol.to_lowercase())),
        ];
        candidates.into_iter().find(|p| p.exists())
    }

    fn load(&self, path: &PathBuf) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;
            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}

/// Parse a date cell in any of the common export formats, or as a Unix
/// timestamp (seconds or milliseconds).
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d", "%m/%d/%Y"];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds when the magnitude says so
        if ts > 10_000_000_000 {
            return Ok(ts);
        }
        return Ok(ts * 1000);
    }

    Err(DataError::ParseError(format!(
        "could not parse date: {}",
        date_str
    )))
}

#[async_trait]
impl DataSource for CsvSource {
    async fn fetch_bars(
        &self,
        symbol: &str,
        _period: LookbackPeriod,
    ) -> Result<Vec<Bar>, DataError> {
        match self.file_for(symbol) {
            Some(path) => self.load(&path),
            None => Err(DataError::NoDataAvailable),
        }
    }

    fn name(&self) -> &str {
        "csv"
    }
}
