//! Telegram Bot API notifier.
//!
//! Delivers plain-text messages to the single configured chat through
//! `sendMessage`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod notifier;

pub use error::TelegramError;
pub use notifier::{Notifier, TelegramNotifier};
