use thiserror::Error;

/// Telegram API errors
#[derive(Debug, Error)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram API returned an error
    #[error("Telegram API error {status}: {description}")]
    Api {
        /// HTTP status of the reply
        status: u16,
        /// `description` field of the reply, or the raw body
        description: String,
    },
}
