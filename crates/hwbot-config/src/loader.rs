//! Configuration loading from the process environment.
//!
//! Lookups go through a caller-supplied function so tests can resolve
//! against a plain map instead of mutating the process environment.

use crate::schema::{Config, PracticumConfig, PollingConfig, TelegramConfig};
use hwbot_common::{ChatId, LoggingConfig, PollError, Result, SecretString};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// OAuth token for the Practicum API.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Telegram chat that receives notifications.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Overrides the homework statuses endpoint.
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
/// Overrides the pause between cycles, in seconds.
pub const RETRY_PERIOD_SECS: &str = "RETRY_PERIOD_SECS";
/// Overrides the HTTP timeout for both APIs, in seconds.
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
/// Overrides the Telegram Bot API base URL.
pub const TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
/// Log filter in `EnvFilter` syntax.
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Path of the append-only log file.
pub const LOG_FILE: &str = "LOG_FILE";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

/// Signature of an environment lookup.
pub type EnvLookup = fn(&str) -> Option<String>;

/// Resolves [`Config`] from environment-like key/value lookups.
pub struct ConfigLoader<F> {
    lookup: F,
}

impl ConfigLoader<EnvLookup> {
    /// Creates a loader backed by the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment take precedence.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            lookup: process_env,
        }
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Creates a loader backed by an arbitrary lookup function.
    pub const fn from_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    /// Resolves the logging section.
    ///
    /// This never fails so that logging can be installed before the
    /// required secrets are checked.
    pub fn logging(&self) -> LoggingConfig {
        let mut logging = LoggingConfig::default();
        if let Some(level) = self.get(LOG_LEVEL).or_else(|| self.get("RUST_LOG")) {
            logging.level = level;
        }
        if let Some(path) = self.get(LOG_FILE) {
            logging.file_path = Some(PathBuf::from(path));
        }
        logging
    }

    /// Loads and validates the full configuration.
    ///
    /// Every missing required variable is reported at once.
    pub fn load(&self) -> Result<Config> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|name| self.get(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PollError::ConfigMissing { names: missing });
        }

        let request_timeout_secs =
            self.parse_or(REQUEST_TIMEOUT_SECS, crate::DEFAULT_REQUEST_TIMEOUT_SECS)?;

        let config = Config {
            practicum: PracticumConfig {
                token: SecretString::new(self.require(PRACTICUM_TOKEN)?),
                endpoint: self
                    .get(PRACTICUM_ENDPOINT)
                    .unwrap_or_else(|| crate::DEFAULT_ENDPOINT.to_string()),
                request_timeout_secs,
            },
            telegram: TelegramConfig {
                token: SecretString::new(self.require(TELEGRAM_TOKEN)?),
                chat_id: ChatId(self.require(TELEGRAM_CHAT_ID)?),
                api_url: self
                    .get(TELEGRAM_API_URL)
                    .unwrap_or_else(|| crate::DEFAULT_TELEGRAM_API_URL.to_string()),
                request_timeout_secs,
            },
            polling: PollingConfig {
                retry_period_secs: self
                    .parse_or(RETRY_PERIOD_SECS, crate::DEFAULT_RETRY_PERIOD_SECS)?,
            },
            logging: self.logging(),
        };

        config.validate()?;
        debug!(
            endpoint = %config.practicum.endpoint,
            chat_id = %config.telegram.chat_id,
            retry_period_secs = config.polling.retry_period_secs,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Non-empty, trimmed value of a variable.
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn require(&self, name: &str) -> Result<String> {
        self.get(name).ok_or_else(|| PollError::ConfigMissing {
            names: vec![name.to_string()],
        })
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            Some(raw) => raw
                .parse()
                .map_err(|e| PollError::config(format!("{name}={raw:?} is not valid: {e}"))),
            None => Ok(default),
        }
    }
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
