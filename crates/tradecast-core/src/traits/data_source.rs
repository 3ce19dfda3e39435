//! Data source trait definition.

use crate::error::DataError;
use crate::types::{Bar, LookbackPeriod};
use async_trait::async_trait;

/// Trait for daily-bar history sources.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch daily bars for a symbol over the given lookback period.
    ///
    /// # Returns
    /// Bars ordered from oldest to newest. An empty vector means the
    /// provider had no data for this symbol/period combination.
    async fn fetch_bars(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<Bar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
