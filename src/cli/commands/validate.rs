//! Validate configuration command.

use anyhow::Result;
use tradecast_config::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid!");
    println!();
    println!("Symbols: {}", config.market.symbols.join(", "));
    println!("Preferred period: {}", config.market.period);
    println!("Schedule: daily at {}", config.schedule.daily_at);
    println!("Log level: {}", config.logging.level);
    println!(
        "Spreadsheet logging: {}",
        match &config.sheets.spreadsheet_id {
            Some(id) => format!("enabled ({})", id),
            None => "disabled".to_string(),
        }
    );
    println!(
        "Telegram digest: {}",
        if config.telegram.bot_token.is_some() && config.telegram.chat_id.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}
