//! Core data types for the signal pipeline.

mod bar;
mod period;
mod report;
mod signal;

pub use bar::{Bar, BarSeries};
pub use period::LookbackPeriod;
pub use report::{PortfolioSummary, TradeRecord};
pub use signal::{Signal, SignalRow};
