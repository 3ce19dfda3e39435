//! Daily schedule command implementation.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tradecast_config::AppConfig;
use tradecast_data::YahooClient;
use tracing::info;

use crate::cli::ScheduleArgs;
use crate::pipeline::build_orchestrator;

/// How often the loop wakes to check the schedule.
const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// One-shot-per-day latch around a wall-clock fire time.
///
/// `due` fires at the first poll at or after the configured time each
/// day. A day on which the process was not awake at any such poll is
/// simply skipped; there is no catch-up.
struct DailySchedule {
    at: NaiveTime,
    last_run: Option<NaiveDate>,
}

impl DailySchedule {
    fn parse(at: &str) -> Result<Self> {
        let at = NaiveTime::parse_from_str(at, "%H:%M")
            .with_context(|| format!("invalid schedule time '{}', expected HH:MM", at))?;
        Ok(Self { at, last_run: None })
    }

    fn due<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> bool {
        let today = now.date_naive();
        if now.time() >= self.at && self.last_run != Some(today) {
            self.last_run = Some(today);
            true
        } else {
            false
        }
    }
}

pub async fn run(args: ScheduleArgs, config: &AppConfig) -> Result<()> {
    let at = args.at.as_deref().unwrap_or(&config.schedule.daily_at);
    let mut schedule = DailySchedule::parse(at)?;

    let orchestrator = build_orchestrator(config, Arc::new(YahooClient::new()))?;
    info!(at, "pipeline scheduled daily; polling once per minute");

    // Blocking loop, killed externally. No cancellation, no missed-run
    // persistence.
    loop {
        if schedule.due(chrono::Local::now()) {
            orchestrator.run_once().await;
        }
        sleep(POLL_INTERVAL).await;
    }
}
