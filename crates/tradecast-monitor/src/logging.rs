//! Logging setup.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the process-wide subscriber. Called once from `main`.
///
/// When a log file is configured, the returned guard must be held for the
/// process lifetime so buffered lines are flushed on shutdown.
pub fn setup_logging(level: &str, json: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_else(|| "tradecast.log".as_ref());
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let base = tracing_subscriber::registry().with(filter).with(file_layer);

    if json {
        base.with(fmt::layer().json()).init();
    } else {
        base.with(fmt::layer().pretty()).init();
    }

    guard
}
