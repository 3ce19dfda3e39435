//! Market data acquisition.
//!
//! Two `DataSource` implementations (Yahoo Finance HTTP, local CSV) and
//! the `SeriesFetcher` that wraps either with the period fallback chain
//! and rate-limit backoff.

mod csv_source;
mod fetcher;
mod yahoo;

pub use csv_source::CsvSource;
pub use fetcher::SeriesFetcher;
pub use yahoo::YahooClient;
