//! Signal pipeline CLI application.

mod cli;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use tradecast_config::load_config;
use tradecast_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config).context("Failed to load configuration")?;

    // CLI flags win over the config file; the guard flushes the log file
    // on shutdown and lives as long as the process.
    let level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.format == "json";
    let _guard = setup_logging(&level, json, config.logging.file.as_deref());

    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, &config).await,
        Commands::Schedule(args) => cli::commands::schedule::run(args, &config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&config).await,
    }
}
