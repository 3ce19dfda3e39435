//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradecast")]
#[command(author, version, about = "Daily equity signal pipeline")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute the pipeline once
    Run(RunArgs),
    /// Run the pipeline daily at a fixed time until killed
    Schedule(ScheduleArgs),
    /// Print the effective configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Symbols to process (comma-separated, overrides the config file)
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Preferred lookback period (1mo, 3mo, 6mo, 1y)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Load bars from a directory of {symbol}.csv files instead of the
    /// network provider
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Daily fire time "HH:MM" (overrides the config file)
    #[arg(long)]
    pub at: Option<String>,
}
