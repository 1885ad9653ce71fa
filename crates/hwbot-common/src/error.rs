//! Error taxonomy shared by every stage of a polling cycle.
//!
//! Display strings are in Russian because they are forwarded verbatim to the
//! Telegram chat as part of the failure report.

use std::fmt;
use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, PollError>;

/// Boxed error used to carry the cause of a failed delivery.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for configuration and polling operations.
#[derive(Error, Debug)]
pub enum PollError {
    /// One or more required environment variables are absent or empty.
    #[error("Отсутствуют обязательные переменные окружения: {}", .names.join(", "))]
    ConfigMissing {
        /// Names of the missing variables, in lookup order.
        names: Vec<String>,
    },

    /// A configuration value is present but unusable.
    #[error("Ошибка конфигурации: {message}")]
    Config {
        /// What was wrong with the value.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("Ошибка во время запроса к API {endpoint}. Параметры: {params}")]
    Connection {
        /// Endpoint that was queried.
        endpoint: String,
        /// Query parameters that were sent.
        params: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status other than 200.
    #[error("API вернул код {status}")]
    ResponseStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The API answered 200 with a body that is not JSON.
    #[error("Ответ API не является корректным JSON: {source}")]
    InvalidJson {
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// A payload value has an unexpected JSON type.
    #[error("Некорректный тип данных в ответе API: {message}")]
    TypeMismatch {
        /// Which value was wrong and what was expected.
        message: String,
    },

    /// A required key is absent from the payload.
    #[error("Не найден обязательный ключ: {key}")]
    MissingKey {
        /// Name of the missing key.
        key: String,
    },

    /// The `homeworks` list is empty.
    #[error("Список домашних работ пуст")]
    EmptyResult,

    /// A homework record has an empty name or an unknown status.
    #[error("Некорректные данные домашней работы: {message}")]
    InvalidStatus {
        /// Which value was rejected.
        message: String,
    },

    /// The message could not be delivered to Telegram.
    #[error("Сбой отправки сообщения в телеграм: {source}")]
    Notification {
        /// Underlying delivery failure.
        #[source]
        source: BoxError,
    },
}

/// Fieldless classification of [`PollError`] used for dispatch and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PollError::ConfigMissing`].
    ConfigMissing,
    /// See [`PollError::Config`].
    Config,
    /// See [`PollError::Connection`].
    Connection,
    /// See [`PollError::ResponseStatus`].
    ResponseStatus,
    /// See [`PollError::InvalidJson`].
    InvalidJson,
    /// See [`PollError::TypeMismatch`].
    TypeMismatch,
    /// See [`PollError::MissingKey`].
    MissingKey,
    /// See [`PollError::EmptyResult`].
    EmptyResult,
    /// See [`PollError::InvalidStatus`].
    InvalidStatus,
    /// See [`PollError::Notification`].
    Notification,
}

impl ErrorKind {
    /// Short snake-case name used in structured log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigMissing => "config_missing",
            Self::Config => "config",
            Self::Connection => "connection",
            Self::ResponseStatus => "response_status",
            Self::InvalidJson => "invalid_json",
            Self::TypeMismatch => "type_mismatch",
            Self::MissingKey => "missing_key",
            Self::EmptyResult => "empty_result",
            Self::InvalidStatus => "invalid_status",
            Self::Notification => "notification",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PollError {
    /// Classifies the error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigMissing { .. } => ErrorKind::ConfigMissing,
            Self::Config { .. } => ErrorKind::Config,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::ResponseStatus { .. } => ErrorKind::ResponseStatus,
            Self::InvalidJson { .. } => ErrorKind::InvalidJson,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::MissingKey { .. } => ErrorKind::MissingKey,
            Self::EmptyResult => ErrorKind::EmptyResult,
            Self::InvalidStatus { .. } => ErrorKind::InvalidStatus,
            Self::Notification { .. } => ErrorKind::Notification,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a new type mismatch error
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: msg.into(),
        }
    }

    /// Create a new missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create a new invalid status error
    pub fn invalid_status(msg: impl Into<String>) -> Self {
        Self::InvalidStatus {
            message: msg.into(),
        }
    }

    /// Create a new notification error wrapping the delivery failure
    pub fn notification(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Notification {
            source: Box::new(source),
        }
    }
}
