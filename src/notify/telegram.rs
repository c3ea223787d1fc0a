//! Telegram Bot API notifier.
//!
//! Sends a single `GET {base}/bot{token}/sendMessage?chat_id=..&text=..`.
//! Query parameters are URL-encoded by reqwest. The response body is ignored.
//! The status code is checked for logging only: the resulting error ends in a
//! `warn!` inside `dispatch` and never reaches the UI or the state machine.

use async_trait::async_trait;
use log::debug;

use super::{Notifier, NotifyError, contact_message};

pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(base_url: String, bot_token: String, chat_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            bot_token,
            chat_id,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, email: &str) -> Result<(), NotifyError> {
        let text = contact_message(email);
        let url = self.send_message_url();
        debug!("GET {}/bot<redacted>/sendMessage", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", self.chat_id.as_str()), ("text", text.as_str())])
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(())
    }
}
