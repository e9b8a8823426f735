//! Glympse - Portfolio Analysis and Optimization
//!
//! A single-page tool: enter tickers, target weights, an optimization
//! strategy, a start date, and a benchmark profile; the analysis
//! itself is delegated to an external analytics engine, and the
//! latest configuration is persisted in SQLite so the form comes back
//! prefilled on the next visit.

pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod server;
pub mod services;
pub mod state;

use crate::config::AppConfig;
use crate::state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging, state, and the page server, then serve
pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glympse=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Glympse...");

    let app_config = AppConfig::from_env()?;
    tracing::info!(
        "Using database {} and analytics engine {}",
        app_config.db_path.display(),
        app_config.engine_url
    );

    let state = Arc::new(AppState::new(&app_config)?);
    tracing::info!("Application state initialized");

    server::serve(state, app_config.bind_addr).await?;

    Ok(())
}
