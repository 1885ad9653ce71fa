//! Configuration schema definitions.

use hwbot_common::{ChatId, LoggingConfig, PollError, SecretString};
use std::time::Duration;

/// Main configuration structure for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Practicum API configuration.
    pub practicum: PracticumConfig,
    /// Telegram configuration.
    pub telegram: TelegramConfig,
    /// Polling configuration.
    pub polling: PollingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Practicum homework API configuration.
#[derive(Debug, Clone)]
pub struct PracticumConfig {
    /// OAuth token sent in the `Authorization` header.
    pub token: SecretString,
    /// Homework statuses endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Telegram bot configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    pub token: SecretString,
    /// Chat that receives every notification.
    pub chat_id: ChatId,
    /// Bot API base URL.
    pub api_url: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Polling loop configuration.
#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// Pause after every cycle, in seconds.
    pub retry_period_secs: u64,
}

impl PracticumConfig {
    /// Request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl TelegramConfig {
    /// Request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl PollingConfig {
    /// Retry period as a [`Duration`].
    pub const fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PollError> {
        if self.practicum.token.is_blank() {
            return Err(PollError::config("Practicum token cannot be empty"));
        }

        if self.telegram.token.is_blank() {
            return Err(PollError::config("Telegram token cannot be empty"));
        }

        if self.telegram.chat_id.0.trim().is_empty() {
            return Err(PollError::config("Telegram chat id cannot be empty"));
        }

        if !self.practicum.endpoint.starts_with("http://")
            && !self.practicum.endpoint.starts_with("https://")
        {
            return Err(PollError::config(format!(
                "Practicum endpoint must be an http(s) URL, got {}",
                self.practicum.endpoint
            )));
        }

        if self.polling.retry_period_secs == 0 {
            return Err(PollError::config("Retry period must be greater than 0"));
        }

        if self.practicum.request_timeout_secs == 0 || self.telegram.request_timeout_secs == 0 {
            return Err(PollError::config("Request timeout must be greater than 0"));
        }

        Ok(())
    }
}
