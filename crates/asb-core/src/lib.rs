//! Core domain + application logic for the ancient scripts bot.
//!
//! This crate is framework-agnostic. Telegram, the script library and the AI
//! backend live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod delivery;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod governor;
pub mod locale;
pub mod logging;
pub mod messaging;
pub mod service;
pub mod store;
pub mod transform;

#[cfg(test)]
mod testing;

pub use errors::{Error, Result};
