//! Page endpoint handlers
//!
//! One evaluation per request: GET renders the prefilled form, POST
//! runs the single analyze-and-save action and re-renders the page
//! with an inline success or error message.

use crate::portfolio::PortfolioConfig;
use crate::server::page;
use crate::server::types::{ApiResponse, Banner, PageView, SubmitForm};
use crate::services::AnalysisService;
use crate::state::AppState;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Health check endpoint - GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success_with_message("Glympse is running"))
}

/// Form page - GET /
///
/// Prefills from the most recent stored configuration. A storage
/// failure is reported inline and the page still renders with the
/// hard-coded defaults.
pub async fn show_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = match state.db.load_most_recent_config() {
        Ok(Some(config)) => PageView::from_config(&config),
        Ok(None) => PageView::from_config(&PortfolioConfig::default()),
        Err(e) => {
            error!("Failed to load latest portfolio: {}", e);
            PageView::from_config(&PortfolioConfig::default())
                .with_banner(Banner::error(format!("Error loading saved portfolio: {}", e)))
        }
    };

    Html(page::render(&view))
}

/// Submit action - POST /analyze
///
/// Parse and validate the form, invoke the analytics engine, and save
/// the configuration only after the engine succeeds. Every failure is
/// terminal for this interaction and reported inline; nothing is
/// retried.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let config = match PortfolioConfig::from_input(
        &form.tickers,
        &form.weights,
        &form.optimization,
        &form.start_date,
        &form.benchmark,
    ) {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected submission: {}", e);
            let view = PageView::from_form(&form).with_banner(Banner::error(e.to_string()));
            return Html(page::render(&view));
        }
    };

    match AnalysisService::analyze_and_save(&state, &config).await {
        Ok(outcome) => {
            info!(
                "Analysis complete, configuration saved with id {}",
                outcome.saved_id
            );
            let recommended = config
                .assets
                .iter()
                .cloned()
                .zip(outcome.recommended_weights.iter().copied())
                .collect();

            let mut banner_text = "Portfolio saved successfully!".to_string();
            if let Some(summary) = &outcome.summary {
                banner_text = format!("{} {}", banner_text, summary);
            }

            let view = PageView::from_config(&config)
                .with_banner(Banner::success(banner_text))
                .with_recommendations(recommended);
            Html(page::render(&view))
        }
        Err(e) => {
            if e.is_user_input() {
                warn!("Rejected submission: {}", e);
            } else {
                error!("Analysis failed: {}", e);
            }
            let view =
                PageView::from_form(&form).with_banner(Banner::error(format!("An error occurred: {}", e)));
            Html(page::render(&view))
        }
    }
}
