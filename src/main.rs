//! reportcard - moderation report cards for game server players.
//!
//! Runs the report card commands against a SQLite store from a console
//! session on stdin. Replies go to stdout, logs to stderr.

mod actor;
mod commands;
mod config;
mod console;
mod context;
mod db;
mod error;
mod i18n;
mod telemetry;

use crate::commands::CommandRouter;
use crate::config::Config;
use crate::context::Context;
use crate::db::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "reportcard.toml".to_string());

    let config = Config::load_validated(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    let db_path = config.database_path();
    let db = Database::new(&db_path).await?;

    info!(
        database = %db_path,
        language = %config.locale.language,
        players = config.players.len(),
        "Starting reportcard"
    );

    let ctx = Context::new(config, Some(PathBuf::from(&config_path)), Arc::new(db))?;
    let router = CommandRouter::new(Arc::new(ctx));

    console::run(&router, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Console closed, shutting down");
    Ok(())
}
