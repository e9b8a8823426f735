//! Analytics engine interface
//!
//! The actual return/risk statistics, optimization, and benchmarking
//! are owned by an external analytics service; this module only
//! defines the narrow contract the rest of the app talks to.

mod http;

use crate::error::Result;
use crate::portfolio::PortfolioConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::HttpAnalyticsEngine;

/// Input contract of the external analytics engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub start_date: String,
    pub portfolio: Vec<String>,
    pub weights: Vec<f64>,
    pub optimizer: String,
    /// The engine expects the benchmark as a single-element list
    pub benchmark: Vec<String>,
}

impl AnalysisRequest {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self {
            start_date: config.start_date_str(),
            portfolio: config.assets.clone(),
            weights: config.weights.clone(),
            optimizer: config.strategy.as_str().to_string(),
            benchmark: vec![config.benchmark.as_str().to_string()],
        }
    }
}

/// What the engine hands back after a successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Recommended weights, positionally aligned with the request tickers
    pub weights: Vec<f64>,
    /// Optional human-readable summary produced by the engine
    #[serde(default)]
    pub summary: Option<String>,
}

/// Capability for delegating portfolio analysis/optimization
#[async_trait]
pub trait AnalyticsEngine: Send + Sync {
    /// Run one synchronous analysis; any failure aborts the submission
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport>;
}
