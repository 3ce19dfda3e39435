//! Retry-tolerant series acquisition.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tradecast_core::error::DataError;
use tradecast_core::traits::DataSource;
use tradecast_core::types::{Bar, BarSeries, LookbackPeriod};
use tracing::{error, info, warn};

/// Pause between consecutive symbols to stay under provider throttling.
const SYMBOL_DELAY: Duration = Duration::from_secs(2);

/// Pause before the single same-period retry after a rate limit.
const RATE_LIMIT_PAUSE: Duration = Duration::from_secs(5);

/// Fetches one series per symbol, walking the period fallback chain and
/// absorbing every provider error. Symbols that fail under all fallback
/// periods are absent from the result, never present with an empty series.
pub struct SeriesFetcher {
    source: Arc<dyn DataSource>,
    symbol_delay: Duration,
    rate_limit_pause: Duration,
}

impl SeriesFetcher {
    /// Create a fetcher with the standard throttling delays.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            symbol_delay: SYMBOL_DELAY,
            rate_limit_pause: RATE_LIMIT_PAUSE,
        }
    }

    /// Override the throttling delays (tests run with zero).
    pub fn with_delays(mut self, symbol_delay: Duration, rate_limit_pause: Duration) -> Self {
        self.symbol_delay = symbol_delay;
        self.rate_limit_pause = rate_limit_pause;
        self
    }

    /// Fetch every symbol that yields non-empty data.
    pub async fn fetch_all(
        &self,
        symbols: &[String],
        preferred: LookbackPeriod,
    ) -> HashMap<String, BarSeries> {
        let mut data = HashMap::new();

        for (i, symbol) in symbols.iter().enumerate() {
            if i > 0 {
                sleep(self.symbol_delay).await;
            }

            match self.fetch_symbol(symbol, preferred).await {
                Some(series) => {
                    data.insert(symbol.clone(), series);
                }
                None => {
                    error!(%symbol, "failed to fetch data under all fallback periods");
                }
            }
        }

        if data.is_empty() {
            error!("no data fetched for any symbol");
        }
        data
    }

    async fn fetch_symbol(&self, symbol: &str, preferred: LookbackPeriod) -> Option<BarSeries> {
        for period in LookbackPeriod::fallback_chain(preferred) {
            if let Some(bars) = self.try_period(symbol, period).await {
                info!(symbol, %period, rows = bars.len(), "fetched series");
                return Some(BarSeries::from_bars(symbol, bars));
            }
        }
        None
    }

    /// One attempt at a (symbol, period) pair, with a single same-period
    /// retry after a rate-limit pause.
    async fn try_period(&self, symbol: &str, period: LookbackPeriod) -> Option<Vec<Bar>> {
        info!(symbol, %period, "requesting history");

        let mut rate_limit_retried = false;
        loop {
            match self.source.fetch_bars(symbol, period).await {
                Ok(bars) if !bars.is_empty() => return Some(bars),
                Ok(_) => {
                    warn!(symbol, %period, "provider returned no rows");
                    return None;
                }
                Err(DataError::RateLimited) if !rate_limit_retried => {
                    info!(symbol, %period, "rate limited, pausing before retry");
                    sleep(self.rate_limit_pause).await;
                    rate_limit_retried = true;
                }
                Err(e) => {
                    error!(symbol, %period, error = %e, "fetch attempt failed");
                    return None;
                }
            }
        }
    }
}
