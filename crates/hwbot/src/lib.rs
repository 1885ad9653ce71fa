//! # Homework Bot
//!
//! Polls the Practicum homework API for review status changes and relays
//! them to a Telegram chat.
//!
//! This is the main binary crate that wires configuration, the API client
//! and the notifier into the polling loop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod poller;

pub use bot::*;
pub use error::*;
pub use poller::*;
