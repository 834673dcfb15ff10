//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_database_path, default_language};
use super::validation::ValidationError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("failed to load locale: {0}")]
    Locale(#[from] crate::i18n::LocaleError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Report card configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database configuration.
    pub database: Option<DatabaseConfig>,
    /// Message language and override directory.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Player blocks granting permission nodes.
    #[serde(default, rename = "player")]
    pub players: Vec<PlayerBlock>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate, folding validation problems into [`ConfigError::Invalid`].
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        super::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Path of the SQLite database, falling back to `reportcard.db`.
    pub fn database_path(&self) -> String {
        self.database
            .as_ref()
            .map(|d| d.path.clone())
            .unwrap_or_else(default_database_path)
    }

    /// Find a player block by name, ignoring case.
    pub fn find_player(&self, name: &str) -> Option<&PlayerBlock> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file, or `:memory:`.
    pub path: String,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Language code; selects `<directory>/<language>.toml`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory holding locale override files. Built-in English only when unset.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            directory: None,
        }
    }
}

/// A player and the permission nodes granted to them.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerBlock {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}
