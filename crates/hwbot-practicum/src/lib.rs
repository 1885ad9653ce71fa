//! # Homework Bot Practicum
//!
//! Everything that talks to or interprets the Practicum homework API: the
//! HTTP client, structural validation of its payload, and the mapping from
//! review status to a human-readable verdict.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;
pub mod status;
pub mod validator;

pub use client::*;
pub use models::*;
pub use status::*;
pub use validator::*;
