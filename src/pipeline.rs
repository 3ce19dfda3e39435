//! Pipeline orchestration: fetch, signal, train, report.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tradecast_config::AppConfig;
use tradecast_core::traits::{Alerter, DataSource, TradeLog};
use tradecast_core::types::LookbackPeriod;
use tradecast_data::SeriesFetcher;
use tradecast_ml::train_model;
use tradecast_report::{Reporter, SheetsClient, TelegramNotifier};
use tradecast_signals::SignalGenerator;
use tracing::{error, info, warn};

/// Terminal outcome of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Data fetched, signals and labels computed, reports attempted.
    Success(RunStats),
    /// No data fetched for any symbol; nothing else was attempted.
    Aborted,
}

/// What a successful run covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Symbols with signal rows.
    pub symbols: usize,
    /// Symbols with a trained model.
    pub models: usize,
}

/// Sequences the pipeline components over one run.
pub struct Orchestrator {
    fetcher: SeriesFetcher,
    generator: SignalGenerator,
    reporter: Reporter,
    symbols: Vec<String>,
    period: LookbackPeriod,
}

impl Orchestrator {
    pub fn new(
        fetcher: SeriesFetcher,
        generator: SignalGenerator,
        reporter: Reporter,
        symbols: Vec<String>,
        period: LookbackPeriod,
    ) -> Self {
        Self {
            fetcher,
            generator,
            reporter,
            symbols,
            period,
        }
    }

    /// One synchronous pass through the pipeline. Never returns an error:
    /// total data unavailability is the `Aborted` outcome, everything
    /// smaller is a logged per-symbol skip.
    pub async fn run_once(&self) -> RunOutcome {
        info!("starting pipeline run");

        let data = self.fetcher.fetch_all(&self.symbols, self.period).await;
        if data.is_empty() {
            error!("no data fetched for any symbol, aborting run");
            return RunOutcome::Aborted;
        }
        info!(symbols = data.len(), "fetched series");

        let mut signals = HashMap::new();
        for (symbol, series) in &data {
            let rows = self.generator.generate(series);
            info!(%symbol, rows = rows.len(), "signals generated");
            signals.insert(symbol.clone(), rows);
        }

        let mut accuracies = HashMap::new();
        for (symbol, rows) in &signals {
            match train_model(symbol, rows) {
                Ok(model) => {
                    info!(%symbol, accuracy = model.accuracy, "model trained");
                    accuracies.insert(symbol.clone(), model.accuracy);
                }
                Err(e) => {
                    warn!(%symbol, error = %e, "skipping model for symbol");
                }
            }
        }

        self.reporter.publish(&signals, &accuracies).await;

        info!("pipeline run completed");
        RunOutcome::Success(RunStats {
            symbols: signals.len(),
            models: accuracies.len(),
        })
    }
}

/// Build an orchestrator over the given source from configuration.
pub fn build_orchestrator(config: &AppConfig, source: Arc<dyn DataSource>) -> Result<Orchestrator> {
    let period: LookbackPeriod = config
        .market
        .period
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    Ok(Orchestrator::new(
        SeriesFetcher::new(source),
        SignalGenerator::new(config.signals.clone()),
        build_reporter(config),
        config.market.symbols.clone(),
        period,
    ))
}

/// Assemble the reporter from whichever integrations are configured.
/// Missing credentials degrade that integration to absent, with a warning.
pub fn build_reporter(config: &AppConfig) -> Reporter {
    let trade_log: Option<Arc<dyn TradeLog>> = match &config.sheets.spreadsheet_id {
        Some(spreadsheet_id) => {
            match SheetsClient::from_credentials_file(&config.sheets.credentials_file, spreadsheet_id)
            {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!(error = %e, "spreadsheet logging disabled");
                    None
                }
            }
        }
        None => {
            warn!("spreadsheet id not configured, spreadsheet logging disabled");
            None
        }
    };

    let alerter: Option<Arc<dyn Alerter>> = match (&config.telegram.bot_token, &config.telegram.chat_id)
    {
        (Some(token), Some(chat_id)) => Some(Arc::new(TelegramNotifier::new(token, chat_id))),
        _ => {
            warn!("telegram token or chat id not provided, digest disabled");
            None
        }
    };

    Reporter::new(trade_log, alerter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tradecast_data::YahooClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chart_body(n: usize) -> serde_json::Value {
        let timestamps: Vec<i64> = (0..n).map(|i| 1_700_000_000 + i as i64 * 86_400).collect();
        let closes: Vec<f64> = (0..n)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0)
            .collect();
        let opens: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        let volumes: Vec<f64> = closes.iter().map(|_| 1000.0).collect();
        serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": opens,
                            "high": highs,
                            "low": lows,
                            "close": closes,
                            "volume": volumes
                        }]
                    }
                }],
                "error": null
            }
        })
    }

    fn orchestrator(server: &MockServer, symbols: &[&str]) -> Orchestrator {
        let source = Arc::new(YahooClient::with_base_url(&server.uri()));
        let fetcher =
            SeriesFetcher::new(source).with_delays(Duration::ZERO, Duration::ZERO);
        Orchestrator::new(
            fetcher,
            SignalGenerator::default(),
            Reporter::new(None, None),
            symbols.iter().map(|s| s.to_string()).collect(),
            LookbackPeriod::SixMonths,
        )
    }

    #[tokio::test]
    async fn test_success_with_rate_limited_symbol() {
        let server = MockServer::start().await;

        for symbol in ["AAA.NS", "CCC.NS"] {
            Mock::given(method("GET"))
                .and(path(format!("/v8/finance/chart/{}", symbol)))
                .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(70)))
                .mount(&server)
                .await;
        }

        // BBB.NS is rate limited once; the same-period retry succeeds
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/BBB.NS"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/BBB.NS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(70)))
            .mount(&server)
            .await;

        let outcome = orchestrator(&server, &["AAA.NS", "BBB.NS", "CCC.NS"])
            .run_once()
            .await;

        match outcome {
            RunOutcome::Success(stats) => assert_eq!(stats.symbols, 3),
            RunOutcome::Aborted => panic!("run should have succeeded"),
        }
    }

    #[tokio::test]
    async fn test_aborts_when_nothing_fetched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = orchestrator(&server, &["AAA.NS", "BBB.NS"]).run_once().await;
        assert_eq!(outcome, RunOutcome::Aborted);
    }

    #[tokio::test]
    async fn test_short_series_skips_training_but_succeeds() {
        let server = MockServer::start().await;
        // 20 rows: signals exist but the slow MA never warms up, so the
        // dataset is empty and training is skipped
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(20)))
            .mount(&server)
            .await;

        let outcome = orchestrator(&server, &["AAA.NS"]).run_once().await;

        match outcome {
            RunOutcome::Success(stats) => {
                assert_eq!(stats.symbols, 1);
                assert_eq!(stats.models, 0);
            }
            RunOutcome::Aborted => panic!("run should have succeeded"),
        }
    }
}
