//! Shared state handed to the command router.
//!
//! Built once at startup and passed in explicitly. Config and locale sit
//! behind locks so `reload` can swap them; the store handle is fixed for the
//! lifetime of the context.

use parking_lot::RwLock;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::db::ReportStore;
use crate::i18n::Locale;

pub struct Context {
    config_path: Option<PathBuf>,
    config: RwLock<Arc<Config>>,
    locale: RwLock<Arc<Locale>>,
    store: Arc<dyn ReportStore>,
}

impl Context {
    /// Create a context from an already loaded config.
    ///
    /// `config_path` is the file `reload` reads; without one, reload only
    /// rebuilds the locale from the current config.
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        store: Arc<dyn ReportStore>,
    ) -> Result<Self, ConfigError> {
        let locale = Locale::load(&config.locale)?;
        Ok(Self {
            config_path,
            config: RwLock::new(Arc::new(config)),
            locale: RwLock::new(Arc::new(locale)),
            store,
        })
    }

    pub fn store(&self) -> &dyn ReportStore {
        self.store.as_ref()
    }

    /// Snapshot of the current config.
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config.read())
    }

    /// Snapshot of the current locale.
    pub fn locale(&self) -> Arc<Locale> {
        Arc::clone(&self.locale.read())
    }

    /// Render a locale message with the current table.
    pub fn tl(&self, key: &str, args: &[&dyn Display]) -> String {
        self.locale.read().translate(key, args)
    }

    /// Re-read config and locale from disk.
    ///
    /// Nothing is replaced unless both load and validate; on error the
    /// previous config and locale stay in effect.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = match self.config_path {
            Some(ref path) => Config::load_validated(path)?,
            None => Config::clone(&self.config()),
        };
        let locale = Locale::load(&config.locale)?;

        info!(
            language = %locale.language(),
            players = config.players.len(),
            "Configuration reloaded"
        );
        *self.config.write() = Arc::new(config);
        *self.locale.write() = Arc::new(locale);
        Ok(())
    }
}
