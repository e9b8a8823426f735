//! Portfolio configuration domain types
//!
//! A `PortfolioConfig` is what the form collects and what the store
//! persists: tickers, positionally aligned weights, an optimization
//! strategy, a start date, and a benchmark profile. Records are
//! append-only and immutable once written.

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Form defaults used when the store is empty
pub const DEFAULT_ASSETS: &str = "SPTM,SPAB,SPDW";
pub const DEFAULT_WEIGHTS: &str = "0.46,0.37,0.14";
pub const DEFAULT_START_DATE: &str = "2018-01-01";

/// Optimization strategy understood by the analytics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptimizationStrategy {
    #[default]
    #[serde(rename = "EF")]
    EfficientFrontier,
    #[serde(rename = "MEANVAR")]
    MeanVariance,
    #[serde(rename = "HRP")]
    HierarchicalRiskParity,
    #[serde(rename = "MINVAR")]
    MinimumVariance,
}

impl OptimizationStrategy {
    pub const ALL: [OptimizationStrategy; 4] = [
        OptimizationStrategy::EfficientFrontier,
        OptimizationStrategy::MeanVariance,
        OptimizationStrategy::HierarchicalRiskParity,
        OptimizationStrategy::MinimumVariance,
    ];

    /// Wire/storage token for this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationStrategy::EfficientFrontier => "EF",
            OptimizationStrategy::MeanVariance => "MEANVAR",
            OptimizationStrategy::HierarchicalRiskParity => "HRP",
            OptimizationStrategy::MinimumVariance => "MINVAR",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }
}

/// Benchmark risk profile the engine compares the portfolio against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchmarkProfile {
    #[serde(rename = "Income")]
    Income,
    #[serde(rename = "Conservative Growth")]
    ConservativeGrowth,
    #[serde(rename = "Moderate Growth")]
    ModerateGrowth,
    #[serde(rename = "Growth")]
    Growth,
}

impl BenchmarkProfile {
    pub const ALL: [BenchmarkProfile; 4] = [
        BenchmarkProfile::Income,
        BenchmarkProfile::ConservativeGrowth,
        BenchmarkProfile::ModerateGrowth,
        BenchmarkProfile::Growth,
    ];

    /// Wire/storage token for this profile
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkProfile::Income => "Income",
            BenchmarkProfile::ConservativeGrowth => "Conservative Growth",
            BenchmarkProfile::ModerateGrowth => "Moderate Growth",
            BenchmarkProfile::Growth => "Growth",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.as_str() == token)
    }
}

impl Default for BenchmarkProfile {
    fn default() -> Self {
        BenchmarkProfile::ModerateGrowth
    }
}

/// A validated portfolio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub assets: Vec<String>,
    pub weights: Vec<f64>,
    pub strategy: OptimizationStrategy,
    pub start_date: NaiveDate,
    pub benchmark: BenchmarkProfile,
}

impl PortfolioConfig {
    /// Build a configuration from raw form input, validating as we go.
    ///
    /// Parse failures and validation failures are reported before the
    /// analytics engine or the store is ever touched.
    pub fn from_input(
        assets: &str,
        weights: &str,
        strategy: &str,
        start_date: &str,
        benchmark: &str,
    ) -> Result<Self> {
        let assets = parse_tickers(assets)?;
        let weights = parse_weights(weights)?;

        if assets.len() != weights.len() {
            return Err(AppError::Validation(format!(
                "Expected one weight per asset: {} assets but {} weights",
                assets.len(),
                weights.len()
            )));
        }

        let strategy = OptimizationStrategy::from_token(strategy).ok_or_else(|| {
            AppError::Validation(format!("Unknown optimization strategy '{}'", strategy))
        })?;

        let benchmark = BenchmarkProfile::from_token(benchmark).ok_or_else(|| {
            AppError::Validation(format!("Unknown benchmark profile '{}'", benchmark))
        })?;

        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|e| AppError::Parse(format!("Invalid start date '{}': {}", start_date, e)))?;

        Ok(Self {
            assets,
            weights,
            strategy,
            start_date,
            benchmark,
        })
    }

    /// Comma-joined ticker list, as stored and as shown in the form
    pub fn assets_csv(&self) -> String {
        self.assets.join(",")
    }

    /// Comma-joined weight list, as stored and as shown in the form
    pub fn weights_csv(&self) -> String {
        self.weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Start date in `YYYY-MM-DD`, the storage format
    pub fn start_date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}

impl Default for PortfolioConfig {
    /// Hard-coded defaults shown when the store is empty
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS.split(',').map(str::to_string).collect(),
            weights: vec![0.46, 0.37, 0.14],
            strategy: OptimizationStrategy::default(),
            start_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            benchmark: BenchmarkProfile::default(),
        }
    }
}

/// Split a comma-separated ticker list, trimming whitespace and
/// dropping empty tokens.
pub fn parse_tickers(input: &str) -> Result<Vec<String>> {
    let tickers: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_uppercase())
        .collect();

    if tickers.is_empty() {
        return Err(AppError::Validation(
            "At least one ticker symbol is required".to_string(),
        ));
    }

    Ok(tickers)
}

/// Parse a comma-separated weight list into non-negative finite floats
pub fn parse_weights(input: &str) -> Result<Vec<f64>> {
    let mut weights = Vec::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let weight: f64 = token
            .parse()
            .map_err(|_| AppError::Parse(format!("Weight '{}' is not a number", token)))?;

        if !weight.is_finite() {
            return Err(AppError::Parse(format!("Weight '{}' is not finite", token)));
        }
        if weight < 0.0 {
            return Err(AppError::Validation(format!(
                "Weight '{}' is negative; weights must be non-negative",
                token
            )));
        }

        weights.push(weight);
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tickers_trims_and_uppercases() {
        let tickers = parse_tickers(" sptm, SPAB ,spdw ").unwrap();
        assert_eq!(tickers, vec!["SPTM", "SPAB", "SPDW"]);
    }

    #[test]
    fn test_parse_tickers_rejects_empty() {
        assert!(parse_tickers("").is_err());
        assert!(parse_tickers(" , ,").is_err());
    }

    #[test]
    fn test_parse_weights_rejects_non_numeric_token() {
        let err = parse_weights("0.5,abc").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_parse_weights_rejects_negative() {
        let err = parse_weights("0.5,-0.2").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_from_input_rejects_length_mismatch() {
        let err = PortfolioConfig::from_input(
            "SPTM,SPAB,SPDW",
            "0.5,0.5",
            "EF",
            "2018-01-01",
            "Moderate Growth",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_from_input_rejects_unknown_strategy() {
        let err = PortfolioConfig::from_input(
            "SPTM",
            "1.0",
            "MAXSHARPE",
            "2018-01-01",
            "Moderate Growth",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_from_input_valid() {
        let config = PortfolioConfig::from_input(
            "SPTM,SPAB,SPDW",
            "0.46,0.37,0.14",
            "HRP",
            "2020-06-15",
            "Growth",
        )
        .unwrap();
        assert_eq!(config.assets.len(), config.weights.len());
        assert_eq!(config.strategy, OptimizationStrategy::HierarchicalRiskParity);
        assert_eq!(config.benchmark, BenchmarkProfile::Growth);
        assert_eq!(config.start_date_str(), "2020-06-15");
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let config = PortfolioConfig::default();
        assert_eq!(config.assets_csv(), "SPTM,SPAB,SPDW");
        assert_eq!(config.weights_csv(), "0.46,0.37,0.14");
        assert_eq!(config.strategy.as_str(), "EF");
        assert_eq!(config.start_date_str(), "2018-01-01");
        assert_eq!(config.benchmark.as_str(), "Moderate Growth");
    }

    #[test]
    fn test_enum_tokens_round_trip() {
        for strategy in OptimizationStrategy::ALL {
            assert_eq!(
                OptimizationStrategy::from_token(strategy.as_str()),
                Some(strategy)
            );
        }
        for benchmark in BenchmarkProfile::ALL {
            assert_eq!(BenchmarkProfile::from_token(benchmark.as_str()), Some(benchmark));
        }
        assert_eq!(OptimizationStrategy::from_token("bogus"), None);
    }
}
