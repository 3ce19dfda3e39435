//! Run snapshot publication.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tradecast_core::traits::{Alerter, TradeLog};
use tradecast_core::types::{PortfolioSummary, SignalRow, TradeRecord};
use tracing::{error, warn};

/// Publishes the latest signal/accuracy snapshot to the configured
/// integrations. Each capability is optional; each sub-operation tolerates
/// its endpoint being absent or failing.
pub struct Reporter {
    trade_log: Option<Arc<dyn TradeLog>>,
    alerter: Option<Arc<dyn Alerter>>,
}

impl Reporter {
    /// Create a reporter from whichever capabilities are configured.
    pub fn new(trade_log: Option<Arc<dyn TradeLog>>, alerter: Option<Arc<dyn Alerter>>) -> Self {
        Self { trade_log, alerter }
    }

    /// Run all three publication steps: trade rows, portfolio summary,
    /// chat digest.
    pub async fn publish(
        &self,
        signals: &HashMap<String, Vec<SignalRow>>,
        accuracies: &HashMap<String, f64>,
    ) {
        let now = Utc::now();
        self.log_trades(signals, now).await;
        self.log_portfolio(signals, accuracies, now).await;
        self.send_digest(signals, accuracies).await;
    }

    /// Symbols in deterministic output order, paired with their last row.
    fn last_rows<'a>(
        signals: &'a HashMap<String, Vec<SignalRow>>,
    ) -> Vec<(&'a str, &'a SignalRow)> {
        let mut entries: Vec<(&str, &SignalRow)> = signals
            .iter()
            .filter_map(|(symbol, rows)| rows.last().map(|row| (symbol.as_str(), row)))
            .collect();
        entries.sort_by_key(|(symbol, _)| *symbol);
        entries
    }

    async fn log_trades(&self, signals: &HashMap<String, Vec<SignalRow>>, now: DateTime<Utc>) {
        let Some(trade_log) = &self.trade_log else {
            warn!("trade log not configured, skipping trade rows");
            return;
        };

        let records: Vec<TradeRecord> = Self::last_rows(signals)
            .into_iter()
            .map(|(symbol, row)| TradeRecord::from_row(symbol, row, now))
            .collect();

        if let Err(e) = trade_log.append_trades(&records).await {
            error!(error = %e, "failed to append trade rows");
        }
    }

    async fn log_portfolio(
        &self,
        signals: &HashMap<String, Vec<SignalRow>>,
        accuracies: &HashMap<String, f64>,
        now: DateTime<Utc>,
    ) {
        let Some(trade_log) = &self.trade_log else {
            warn!("trade log not configured, skipping portfolio summary");
            return;
        };

        let previous = match trade_log.previous_portfolio_value().await {
            Ok(previous) => previous,
            Err(e) => {
                warn!(error = %e, "could not read previous portfolio value");
                None
            }
        };

        let summary = Self::build_summary(signals, accuracies, previous, now);
        if let Err(e) = trade_log.append_summary(&summary).await {
            error!(error = %e, "failed to append portfolio summary");
        }
    }

    fn build_summary(
        signals: &HashMap<String, Vec<SignalRow>>,
        accuracies: &HashMap<String, f64>,
        previous_value: Option<f64>,
        now: DateTime<Utc>,
    ) -> PortfolioSummary {
        let last_rows = Self::last_rows(signals);
        let total_symbols = last_rows.len();
        let buy_signals = last_rows
            .iter()
            .filter(|(_, row)| row.signal.as_i8() == 1)
            .count();
        let sell_signals = last_rows
            .iter()
            .filter(|(_, row)| row.signal.as_i8() == -1)
            .count();
        let hold_signals = total_symbols - buy_signals - sell_signals;

        let avg_accuracy = if accuracies.is_empty() {
            0.0
        } else {
            accuracies.values().sum::<f64>() / accuracies.len() as f64
        };

        let portfolio_value: f64 = last_rows.iter().map(|(_, row)| row.bar.close).sum();
        let previous = previous_value.unwrap_or(0.0);
        let daily_change = portfolio_value - previous;
        let daily_change_pct = if previous != 0.0 {
            daily_change / previous * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            timestamp: now,
            total_symbols,
            buy_signals,
            sell_signals,
            hold_signals,
            avg_accuracy,
            portfolio_value,
            daily_change,
            daily_change_pct,
        }
    }

    async fn send_digest(
        &self,
        signals: &HashMap<String, Vec<SignalRow>>,
        accuracies: &HashMap<String, f64>,
    ) {
        let Some(alerter) = &self.alerter else {
            warn!("alerter not configured, skipping digest");
            return;
        };

        let text = Self::build_digest(signals, accuracies);
        if let Err(e) = alerter.send_alert(&text).await {
            error!(error = %e, "failed to deliver digest");
        }
    }

    fn build_digest(
        signals: &HashMap<String, Vec<SignalRow>>,
        accuracies: &HashMap<String, f64>,
    ) -> String {
        let mut text = String::from("*Trading System Update*\n\n");
        for (symbol, row) in Self::last_rows(signals) {
            text.push_str(&format!(
                "*{}*: Signal={}, Close={:.2}\n",
                symbol, row.signal, row.bar.close
            ));
            if let Some(accuracy) = accuracies.get(symbol) {
                text.push_str(&format!("ML Accuracy: {:.2}\n", accuracy));
            }
        }
        text
    }
}
