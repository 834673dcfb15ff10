//! Configuration loading and management.
//!
//! - [`types`]: config struct definitions and file loading
//! - [`validation`]: checks run at startup and on reload
//! - [`defaults`]: serde default value functions

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, DatabaseConfig, LocaleConfig, PlayerBlock};
pub use validation::{ValidationError, validate};
