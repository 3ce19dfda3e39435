//! Core types and traits for the signal pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, LookbackPeriod)
//! - Signal rows and the ternary trade signal
//! - Reporting records
//! - Traits for data sources, indicators, and reporting sinks

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, ModelError, ReportError};
pub use traits::*;
pub use types::*;
