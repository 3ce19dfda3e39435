//! Error types for the signal pipeline.

use thiserror::Error;

/// Market data acquisition errors.
///
/// None of these are fatal to a run: the fetcher absorbs them via the
/// period fallback chain, and a symbol that fails every period is simply
/// left out of the result.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Provider rate limited the request")]
    RateLimited,

    #[error("No data available for the requested symbol/period")]
    NoDataAvailable,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

/// Model training errors. These skip the affected symbol, never the run.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Empty feature/label set after label construction")]
    EmptyDataset,

    #[error("Labels contain a single class; nothing to fit")]
    SingleClass,

    #[error("Insufficient data: need {required} rows, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// Reporting errors. Each sink logs and skips on these; the run continues.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Endpoint returned status {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}
