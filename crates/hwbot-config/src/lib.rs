//! # Homework Bot Config
//!
//! Type-safe configuration for the homework status bot.
//!
//! Secrets and optional overrides are resolved from the environment (and a
//! `.env` file when present) once at startup, validated, and then shared
//! immutably with every component.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
