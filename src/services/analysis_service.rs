//! Analysis Service
//!
//! Orchestrates one submission: validate the configuration, invoke the
//! analytics engine, and persist the configuration only after the
//! engine succeeds. Called by the page handlers.

use crate::engine::{AnalysisReport, AnalysisRequest};
use crate::error::{AppError, Result};
use crate::portfolio::PortfolioConfig;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of a successful analyze-and-save submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Identifier of the record the configuration was saved under
    pub saved_id: i64,
    /// Engine-recommended weights, aligned with the submitted tickers
    pub recommended_weights: Vec<f64>,
    /// Optional engine-produced summary
    pub summary: Option<String>,
}

/// Analysis service for business logic
pub struct AnalysisService;

impl AnalysisService {
    /// Run the engine on a validated configuration, then persist it.
    ///
    /// Persistence happens only on the success path: if the engine
    /// fails, the store is left untouched for this submission.
    pub async fn analyze_and_save(
        state: &AppState,
        config: &PortfolioConfig,
    ) -> Result<AnalysisOutcome> {
        // from_input guarantees this for form submissions, but the
        // engine is never invoked on a mismatched configuration no
        // matter where the config came from.
        if config.assets.len() != config.weights.len() {
            return Err(AppError::Validation(format!(
                "Expected one weight per asset: {} assets but {} weights",
                config.assets.len(),
                config.weights.len()
            )));
        }

        info!(
            "AnalysisService::analyze_and_save - {} assets, strategy={}, benchmark={}",
            config.assets.len(),
            config.strategy.as_str(),
            config.benchmark.as_str()
        );

        let request = AnalysisRequest::from_config(config);
        let report: AnalysisReport = state.engine.analyze(&request).await?;

        // Recommended weights must stay positionally aligned with the
        // submitted tickers, whatever engine implementation answered.
        if report.weights.len() != config.assets.len() {
            return Err(AppError::Engine(format!(
                "Engine returned {} weights for {} assets",
                report.weights.len(),
                config.assets.len()
            )));
        }

        let saved_id = state.db.append(config)?;
        info!("Portfolio configuration saved with id {}", saved_id);

        Ok(AnalysisOutcome {
            saved_id,
            recommended_weights: report.weights,
            summary: report.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalyticsEngine;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted engine: succeeds, fails, or answers with the wrong
    /// number of weights on demand; counts calls either way
    struct ScriptedEngine {
        fail: bool,
        drop_one_weight: bool,
        calls: AtomicUsize,
    }

    impl ScriptedEngine {
        fn succeeding() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                drop_one_weight: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                drop_one_weight: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn misaligned() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                drop_one_weight: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalyticsEngine for ScriptedEngine {
        async fn analyze(&self, request: &AnalysisRequest) -> crate::error::Result<AnalysisReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::Engine("engine unavailable".to_string()));
            }
            // Echo back an even split so alignment is easy to assert
            let mut n = request.portfolio.len();
            if self.drop_one_weight {
                n -= 1;
            }
            Ok(AnalysisReport {
                weights: vec![1.0 / n.max(1) as f64; n],
                summary: Some("ok".to_string()),
            })
        }
    }

    fn sample_config() -> PortfolioConfig {
        PortfolioConfig::from_input(
            "SPTM,SPAB,SPDW",
            "0.46,0.37,0.14",
            "EF",
            "2018-01-01",
            "Moderate Growth",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_persists_and_returns_weights() {
        let engine = ScriptedEngine::succeeding();
        let state = AppState::for_tests(engine.clone());

        let outcome = AnalysisService::analyze_and_save(&state, &sample_config())
            .await
            .unwrap();

        assert_eq!(outcome.recommended_weights.len(), 3);
        assert_eq!(engine.call_count(), 1);
        assert_eq!(state.db.count().unwrap(), 1);
        assert_eq!(
            state.db.load_most_recent().unwrap().unwrap().id,
            outcome.saved_id
        );
    }

    #[tokio::test]
    async fn test_engine_failure_persists_nothing() {
        let engine = ScriptedEngine::failing();
        let state = AppState::for_tests(engine.clone());

        let err = AnalysisService::analyze_and_save(&state, &sample_config())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Engine(_)));
        assert_eq!(engine.call_count(), 1);
        assert_eq!(state.db.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mismatched_config_never_reaches_engine() {
        let engine = ScriptedEngine::succeeding();
        let state = AppState::for_tests(engine.clone());

        let mut config = sample_config();
        config.weights.pop();

        let err = AnalysisService::analyze_and_save(&state, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(engine.call_count(), 0);
        assert_eq!(state.db.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_misaligned_engine_report_persists_nothing() {
        let engine = ScriptedEngine::misaligned();
        let state = AppState::for_tests(engine.clone());

        let err = AnalysisService::analyze_and_save(&state, &sample_config())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Engine(_)));
        assert_eq!(engine.call_count(), 1);
        assert_eq!(state.db.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_n_submissions_add_n_records() {
        let engine = ScriptedEngine::succeeding();
        let state = AppState::for_tests(engine);

        for _ in 0..3 {
            AnalysisService::analyze_and_save(&state, &sample_config())
                .await
                .unwrap();
        }

        assert_eq!(state.db.count().unwrap(), 3);
    }
}
