//! Application-wide error types using thiserror.

use hwbot_common::PollError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[source] PollError),

    /// A client could not be constructed.
    #[error("Startup error: {0}")]
    Startup(#[from] PollError),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
