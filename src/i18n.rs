//! Message table for user-facing replies.
//!
//! Templates are looked up by symbolic key and filled with positional
//! `{0}`, `{1}`... arguments. Built-in English templates can be overridden
//! per language by a flat TOML file at `<directory>/<language>.toml`:
//!
//! ```toml
//! reportAddSuccess = "Report card saved."
//! reportLineLite = "{0}: {1}"
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LocaleConfig;

/// Locale loading errors.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse locale file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("errNoPermission", "You do not have permission to do this!"),
    ("errNotEnoughArguments", "Not enough arguments specified!"),
    ("errReportIdInvalidPrefix", "Report ids start with #, for example #12."),
    ("errReportIdNotANumber", "That report id is not a number."),
    ("errReportIdNotFound", "No report card exists with that id."),
    ("errNoReportsFound", "No report cards found."),
    ("errReloadFailed", "Reload failed, the previous configuration is still in use."),
    ("reportsFound", "{0} report card(s) found."),
    ("reportFullTop", "----- Report cards for {0} -----"),
    ("reportFullBottom", "----- End of report cards for {0} -----"),
    ("reportLineFull", "#{0} [{1} pts] {2} - by {3} on {4}"),
    ("reportLineLite", "#{0} {1}"),
    ("reportIdTop", "----- Report card lookup by {0} -----"),
    ("reportAddSuccess", "Report card added."),
    ("reportEditSuccess", "Report card updated."),
    ("reportDeleted", "Report card #{0} removed."),
    ("reloadSuccess", "Report card configuration reloaded."),
];

/// Key to template table for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    language: String,
    messages: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Locale {
    /// Build the table for the configured language.
    ///
    /// A missing override file is not an error: the built-in English
    /// templates are used. A file that exists but cannot be read or parsed is.
    pub fn load(config: &LocaleConfig) -> Result<Self, LocaleError> {
        let mut locale = Self {
            language: config.language.clone(),
            ..Self::default()
        };

        let Some(ref directory) = config.directory else {
            return Ok(locale);
        };

        let path = Path::new(directory).join(format!("{}.toml", config.language));
        let path_str = path.display().to_string();
        if !path.exists() {
            warn!(path = %path_str, language = %config.language, "Locale file not found, using built-in messages");
            return Ok(locale);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| LocaleError::Io {
            path: path_str.clone(),
            source,
        })?;
        let overrides: HashMap<String, String> =
            toml::from_str(&content).map_err(|source| LocaleError::Parse {
                path: path_str.clone(),
                source,
            })?;

        debug!(path = %path_str, count = overrides.len(), "Loaded locale overrides");
        locale.messages.extend(overrides);
        Ok(locale)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render `key` with positional arguments.
    ///
    /// Unknown keys render as the key itself so a missing template is
    /// visible instead of silent.
    pub fn translate(&self, key: &str, args: &[&dyn Display]) -> String {
        match self.messages.get(key) {
            Some(template) => format_positional(template, args),
            None => key.to_string(),
        }
    }
}

/// Substitute `{n}` placeholders in a single pass.
///
/// Substituted text is never scanned again, so a reason containing `{1}`
/// is printed verbatim. Placeholders without a matching argument are kept.
fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg.to_string(), close))
        });

        match substituted {
            Some((text, close)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
