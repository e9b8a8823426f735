//! HTTP adapter for the external analytics service

use crate::engine::{AnalysisReport, AnalysisRequest, AnalyticsEngine};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Analytics engine reached over HTTP
///
/// Posts the analysis request as JSON to `{base_url}/analyze` and
/// expects the recommended weights back in the response body.
pub struct HttpAnalyticsEngine {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct EngineResponse {
    status: Option<String>,
    message: Option<String>,
    #[serde(default)]
    weights: Vec<f64>,
    #[serde(default)]
    summary: Option<String>,
}

impl HttpAnalyticsEngine {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AnalyticsEngine for HttpAnalyticsEngine {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let url = format!("{}/analyze", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Engine(format!(
                "Engine returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body: EngineResponse = response
            .json()
            .await
            .map_err(|e| AppError::Engine(format!("Unreadable engine response: {}", e)))?;

        if matches!(body.status.as_deref(), Some("error")) {
            return Err(AppError::Engine(
                body.message
                    .unwrap_or_else(|| "Engine reported an error".to_string()),
            ));
        }

        if body.weights.len() != request.portfolio.len() {
            return Err(AppError::Engine(format!(
                "Engine returned {} weights for {} assets",
                body.weights.len(),
                request.portfolio.len()
            )));
        }

        Ok(AnalysisReport {
            weights: body.weights,
            summary: body.summary,
        })
    }
}
