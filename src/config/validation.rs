//! Configuration validation.
//!
//! Validates configuration at startup and on reload to catch common errors early.

use super::Config;
use crate::actor::Permission;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("locale.language must not be empty")]
    EmptyLanguage,
    #[error("locale.directory does not exist: {0}")]
    LocaleDirectoryNotFound(String),
    #[error("database.path parent directory does not exist: {0}")]
    DatabasePathInvalid(String),
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("player {0} is defined more than once")]
    DuplicatePlayer(String),
    #[error("player {player} has unknown permission node '{node}'")]
    UnknownPermission { player: String, node: String },
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.locale.language.trim().is_empty() {
        errors.push(ValidationError::EmptyLanguage);
    }

    if let Some(ref directory) = config.locale.directory
        && !Path::new(directory).is_dir()
    {
        errors.push(ValidationError::LocaleDirectoryNotFound(directory.clone()));
    }

    if let Some(ref db) = config.database
        && db.path != ":memory:"
    {
        let db_path = Path::new(&db.path);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ValidationError::DatabasePathInvalid(db.path.clone()));
        }
    }

    let mut seen = HashSet::new();
    for player in &config.players {
        if player.name.trim().is_empty() {
            errors.push(ValidationError::EmptyPlayerName);
            continue;
        }
        if !seen.insert(player.name.to_ascii_lowercase()) {
            errors.push(ValidationError::DuplicatePlayer(player.name.clone()));
        }
        for node in &player.permissions {
            if Permission::expand_node(node).is_none() {
                errors.push(ValidationError::UnknownPermission {
                    player: player.name.clone(),
                    node: node.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
