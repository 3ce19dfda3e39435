//! Chat sink over the Telegram bot API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tradecast_core::error::ReportError;
use tradecast_core::traits::Alerter;

const BASE_URL: &str = "https://api.telegram.org";

/// Sends Markdown digests to one chat via a bot.
pub struct TelegramNotifier {
    client: Client,
    bot_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier for the given bot token and chat.
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self::with_base_url(BASE_URL, bot_token, chat_id)
    }

    /// Create a notifier against a custom host (for tests).
    pub fn with_base_url(base_url: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client: Client::new(),
            bot_url: format!("{}/bot{}", base_url.trim_end_matches('/'), bot_token),
            chat_id: chat_id.to_string(),
        }
    }
}

#[async_trait]
impl Alerter for TelegramNotifier {
    async fn send_alert(&self, text: &str) -> Result<(), ReportError> {
        let url = format!("{}/sendMessage", self.bot_url);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ReportError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let message = response.text().await.unwrap_or_default();
            return Err(ReportError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
