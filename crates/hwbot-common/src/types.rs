//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Serialize, Serializer};
use std::fmt;

/// A Telegram chat identifier.
///
/// Kept as text because Telegram accepts both numeric ids (possibly negative
/// for groups) and `@channelname` handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(pub String);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ChatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A credential that never shows up in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wraps a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret for use in a request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let secret = SecretString::new("y0_AgAAAA");
        assert_eq!(format!("{secret}"), "***");
        assert_eq!(format!("{secret:?}"), "SecretString(***)");
        assert_eq!(secret.expose(), "y0_AgAAAA");
    }

    #[test]
    fn test_blank_secret() {
        assert!(SecretString::new("   ").is_blank());
        assert!(!SecretString::new("token").is_blank());
    }

    #[test]
    fn test_chat_id_serializes_as_string() {
        let chat_id = ChatId::from("-100123");
        assert_eq!(chat_id.to_string(), "-100123");
        assert_eq!(serde_json::to_string(&chat_id).unwrap(), "\"-100123\"");
    }
}
