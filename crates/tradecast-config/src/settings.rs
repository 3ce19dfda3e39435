//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tradecast_signals::SignalRule;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub market: MarketSettings,
    #[serde(default)]
    pub signals: SignalRule,
    #[serde(default)]
    pub sheets: SheetsSettings,
    #[serde(default)]
    pub telegram: TelegramSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Symbols and acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSettings {
    /// Symbols to process each run.
    pub symbols: Vec<String>,
    /// Preferred lookback period, e.g. "6mo".
    pub period: String,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            symbols: vec![
                "RELIANCE.NS".to_string(),
                "INFY.NS".to_string(),
                "ICICIBANK.NS".to_string(),
            ],
            period: "6mo".to_string(),
        }
    }
}

/// Spreadsheet integration settings. The integration is active only when
/// both fields resolve: a readable credentials file and a spreadsheet id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsSettings {
    /// Path to a JSON file holding the API bearer token.
    pub credentials_file: PathBuf,
    /// Target spreadsheet identifier.
    pub spreadsheet_id: Option<String>,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            credentials_file: PathBuf::from("service-account.json"),
            spreadsheet_id: None,
        }
    }
}

/// Chat integration settings. Active only when both fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramSettings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

/// Daily schedule settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Wall-clock fire time for the daily loop, "HH:MM".
    pub daily_at: String,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            daily_at: "09:30".to_string(),
        }
    }
}
