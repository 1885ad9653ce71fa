use crate::TelegramError;
use async_trait::async_trait;
use hwbot_common::{ChatId, PollError, Result, SecretString};
use hwbot_config::TelegramConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Delivers text messages to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` to the configured chat.
    async fn notify(&self, message: &str) -> Result<()>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a ChatId,
    text: &'a str,
}

#[derive(Deserialize)]
struct ErrorReply {
    description: Option<String>,
}

/// Telegram Bot API client bound to one chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: SecretString,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Create a new notifier from the Telegram configuration section
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| PollError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Chat that receives every message.
    pub const fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    async fn send_message(&self, text: &str) -> std::result::Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token.expose());

        let resp = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let description = serde_json::from_str::<ErrorReply>(&body)
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or(body);
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip(self, message), fields(chat_id = %self.chat_id))]
    async fn notify(&self, message: &str) -> Result<()> {
        self.send_message(message)
            .await
            .map_err(PollError::notification)?;
        debug!("Message sent successfully: {}", message);
        Ok(())
    }
}
