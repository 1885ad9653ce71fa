//! Default values for every optional setting.

use crate::schema::{Config, PracticumConfig, PollingConfig, TelegramConfig};
use hwbot_common::{ChatId, LoggingConfig, SecretString};

/// Practicum homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Pause between polling cycles, in seconds.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// HTTP request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl Default for Config {
    fn default() -> Self {
        Self {
            practicum: PracticumConfig::default(),
            telegram: TelegramConfig::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: SecretString::new(""),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: SecretString::new(""),
            chat_id: ChatId(String::new()),
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            retry_period_secs: DEFAULT_RETRY_PERIOD_SECS,
        }
    }
}
