//! Default value functions for configuration.

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_database_path() -> String {
    "reportcard.db".to_string()
}
