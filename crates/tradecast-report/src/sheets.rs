//! Spreadsheet sink over the Google Sheets values API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use tradecast_core::error::ReportError;
use tradecast_core::traits::TradeLog;
use tradecast_core::types::{PortfolioSummary, TradeRecord};

const BASE_URL: &str = "https://sheets.googleapis.com";

const TRADE_LOG_TAB: &str = "Trade_Log";
const SUMMARY_TAB: &str = "Portfolio_Summary";

const SUMMARY_HEADERS: [&str; 9] = [
    "Timestamp",
    "Total Symbols",
    "Buy Signals",
    "Sell Signals",
    "Hold Signals",
    "Avg Accuracy",
    "Portfolio Value",
    "Daily Change",
    "Daily Change %",
];

/// Zero-based column of "Portfolio Value" in a summary row.
const PORTFOLIO_VALUE_COLUMN: usize = 6;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bearer token read from the configured credentials file.
#[derive(Debug, Deserialize)]
struct Credentials {
    token: String,
}

/// Appends trade-log and portfolio-summary rows to a spreadsheet.
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    /// Build a client from a credentials file. A missing or unreadable
    /// file is an error the caller downgrades to "integration disabled".
    pub fn from_credentials_file(
        path: &Path,
        spreadsheet_id: &str,
    ) -> Result<Self, ReportError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Credentials(format!("{}: {}", path.display(), e)))?;
        let credentials: Credentials = serde_json::from_str(&raw)
            .map_err(|e| ReportError::Credentials(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            token: credentials.token,
        })
    }

    /// Point the client at a different API host (for tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn append_rows(&self, tab: &str, rows: Vec<Vec<Value>>) -> Result<(), ReportError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.base_url, self.spreadsheet_id, tab
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": rows }))
            .send()
            .await
            .map_err(|e| ReportError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ReportError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn read_rows(&self, tab: &str) -> Result<Vec<Vec<String>>, ReportError> {
        #[derive(Deserialize)]
        struct ValuesResponse {
            #[serde(default)]
            values: Vec<Vec<String>>,
        }

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, tab
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ReportError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ReportError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        let body: ValuesResponse = response
            .json()
            .await
            .map_err(|e| ReportError::ParseError(e.to_string()))?;
        Ok(body.values)
    }
}

#[async_trait]
impl TradeLog for SheetsClient {
    async fn append_trades(&self, records: &[TradeRecord]) -> Result<(), ReportError> {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    Value::from(r.timestamp.format(TIMESTAMP_FORMAT).to_string()),
                    Value::from(r.symbol.clone()),
                    Value::from(r.signal),
                    Value::from(r.close),
                    Value::from(r.rsi),
                    Value::from(r.sma_fast),
                    Value::from(r.sma_slow),
                ]
            })
            .collect();

        self.append_rows(TRADE_LOG_TAB, rows).await
    }

    async fn append_summary(&self, summary: &PortfolioSummary) -> Result<(), ReportError> {
        if self.read_rows(SUMMARY_TAB).await?.is_empty() {
            let header = SUMMARY_HEADERS.iter().map(|h| Value::from(*h)).collect();
            self.append_rows(SUMMARY_TAB, vec![header]).await?;
        }

        let row = vec![
            Value::from(summary.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            Value::from(summary.total_symbols),
            Value::from(summary.buy_signals),
            Value::from(summary.sell_signals),
            Value::from(summary.hold_signals),
            Value::from(format!("{:.2}%", summary.avg_accuracy * 100.0)),
            Value::from(format!("{:.2}", summary.portfolio_value)),
            Value::from(format!("{:.2}", summary.daily_change)),
            Value::from(format!("{:.2}%", summary.daily_change_pct)),
        ];
        self.append_rows(SUMMARY_TAB, vec![row]).await
    }

    async fn previous_portfolio_value(&self) -> Result<Option<f64>, ReportError> {
        let rows = self.read_rows(SUMMARY_TAB).await?;
        // First row is the header; a single row means no stored summary yet
        if rows.len() < 2 {
            return Ok(None);
        }

        let value = rows
            .last()
            .and_then(|row| row.get(PORTFOLIO_VALUE_COLUMN))
            .and_then(|cell| cell.parse::<f64>().ok());
        Ok(value)
    }
}
