//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, LoggingConfig, MarketSettings, ScheduleSettings, SheetsSettings, TelegramSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from an optional TOML file layered under
/// `TRADECAST__`-prefixed environment overrides.
///
/// The symbol list accepts a comma-separated value, e.g.
/// `TRADECAST__MARKET__SYMBOLS=RELIANCE.NS,INFY.NS`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("TRADECAST")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("market.symbols"),
        )
        .build()?;

    config.try_deserialize()
}
