//! Run-once command implementation.

use anyhow::Result;
use std::sync::Arc;
use tradecast_config::AppConfig;
use tradecast_core::traits::DataSource;
use tradecast_data::{CsvSource, YahooClient};

use crate::cli::RunArgs;
use crate::pipeline::{build_orchestrator, RunOutcome};

pub async fn run(args: RunArgs, config: &AppConfig) -> Result<()> {
    let mut config = config.clone();
    if !args.symbols.is_empty() {
        config.market.symbols = args.symbols;
    }
    if let Some(period) = args.period {
        config.market.period = period;
    }

    let source: Arc<dyn DataSource> = match &args.data {
        Some(dir) => Arc::new(CsvSource::new(dir)),
        None => Arc::new(YahooClient::new()),
    };

    let orchestrator = build_orchestrator(&config, source)?;
    match orchestrator.run_once().await {
        RunOutcome::Success(stats) => {
            println!(
                "Run completed: {} symbols processed, {} models trained",
                stats.symbols, stats.models
            );
        }
        RunOutcome::Aborted => {
            println!("Run aborted: no data fetched for any symbol");
        }
    }

    Ok(())
}
