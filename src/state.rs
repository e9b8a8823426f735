//! Application state management

use crate::config::AppConfig;
use crate::db::PortfolioDb;
use crate::engine::{AnalyticsEngine, HttpAnalyticsEngine};
use crate::error::Result;
use std::sync::Arc;

/// Application state shared across all request handlers
pub struct AppState {
    /// Configuration store
    pub db: Arc<PortfolioDb>,

    /// External analytics engine
    pub engine: Arc<dyn AnalyticsEngine>,
}

impl AppState {
    /// Build state from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let db = Arc::new(PortfolioDb::new(&config.db_path)?);
        let engine = Arc::new(HttpAnalyticsEngine::new(config.engine_url.clone()));

        Ok(Self { db, engine })
    }

    /// State backed by an in-memory store and a caller-supplied engine
    #[cfg(test)]
    pub fn for_tests(engine: Arc<dyn AnalyticsEngine>) -> Self {
        Self {
            db: Arc::new(PortfolioDb::new_in_memory().expect("in-memory db")),
            engine,
        }
    }
}
