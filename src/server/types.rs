//! Page server types

use crate::portfolio::{BenchmarkProfile, OptimizationStrategy, PortfolioConfig};
use serde::{Deserialize, Serialize};

/// Generic API response envelope (health endpoint)
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success_with_message(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.to_string()),
        }
    }
}

/// Raw form submission, exactly as the browser posted it
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitForm {
    pub tickers: String,
    pub weights: String,
    pub optimization: String,
    pub start_date: String,
    pub benchmark: String,
}

/// Inline message shown above the form after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the page renderer needs for one evaluation
#[derive(Debug, Clone)]
pub struct PageView {
    pub tickers: String,
    pub weights: String,
    pub strategy: OptimizationStrategy,
    pub start_date: String,
    pub benchmark: BenchmarkProfile,
    pub banner: Option<Banner>,
    /// Engine-recommended weights paired with their tickers
    pub recommended: Option<Vec<(String, f64)>>,
}

impl PageView {
    /// View prefilled from a stored (or default) configuration
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self {
            tickers: config.assets_csv(),
            weights: config.weights_csv(),
            strategy: config.strategy,
            start_date: config.start_date_str(),
            benchmark: config.benchmark,
            banner: None,
            recommended: None,
        }
    }

    /// View echoing back a rejected submission so nothing typed is lost
    pub fn from_form(form: &SubmitForm) -> Self {
        Self {
            tickers: form.tickers.clone(),
            weights: form.weights.clone(),
            strategy: OptimizationStrategy::from_token(&form.optimization).unwrap_or_default(),
            start_date: form.start_date.clone(),
            benchmark: BenchmarkProfile::from_token(&form.benchmark).unwrap_or_default(),
            banner: None,
            recommended: None,
        }
    }

    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    pub fn with_recommendations(mut self, recommended: Vec<(String, f64)>) -> Self {
        self.recommended = Some(recommended);
        self
    }
}
