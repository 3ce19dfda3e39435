//! Reporting sink trait definitions.
//!
//! Sinks are capabilities injected into the reporter. Each is optional at
//! the call site; an unconfigured integration is represented by absence,
//! not by a stub implementation.

use crate::error::ReportError;
use crate::types::{PortfolioSummary, TradeRecord};
use async_trait::async_trait;

/// Tabular store for trade-log and portfolio-summary rows.
#[async_trait]
pub trait TradeLog: Send + Sync {
    /// Append one row per symbol to the trade-log tab.
    async fn append_trades(&self, records: &[TradeRecord]) -> Result<(), ReportError>;

    /// Append one aggregate row to the portfolio-summary tab, writing the
    /// header row first if the tab is empty.
    async fn append_summary(&self, summary: &PortfolioSummary) -> Result<(), ReportError>;

    /// Portfolio value from the most recent stored summary row, if any.
    async fn previous_portfolio_value(&self) -> Result<Option<f64>, ReportError>;
}

/// Push-style notification endpoint.
#[async_trait]
pub trait Alerter: Send + Sync {
    /// Deliver a text digest. Success is delivery acknowledgement only.
    async fn send_alert(&self, text: &str) -> Result<(), ReportError>;
}
