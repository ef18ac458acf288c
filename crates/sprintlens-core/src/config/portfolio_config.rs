//! Portfolio prioritization configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HIGH_VALUE_TARGET, DEFAULT_PORTFOLIO_ALIGNMENT_WEIGHT,
    DEFAULT_PORTFOLIO_COMPLETION_WEIGHT, DEFAULT_PORTFOLIO_RISK_WEIGHT,
    DEFAULT_QUADRANT_THRESHOLD,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Impact/effort midpoint for quadrant classification. Default: 5.0.
    pub quadrant_threshold: Option<f64>,
    /// Effort share on Quick Wins + Major Projects considered healthy. Default: 0.75.
    pub high_value_target: Option<f64>,
    /// Weight of the completion ratio in portfolio health. Default: 0.30.
    pub completion_weight: Option<f64>,
    /// Weight of the high-value alignment ratio. Default: 0.40.
    pub alignment_weight: Option<f64>,
    /// Weight of the inverted high-risk ratio. Default: 0.30.
    pub risk_weight: Option<f64>,
}

impl PortfolioConfig {
    pub fn effective_quadrant_threshold(&self) -> f64 {
        self.quadrant_threshold.unwrap_or(DEFAULT_QUADRANT_THRESHOLD)
    }

    pub fn effective_high_value_target(&self) -> f64 {
        self.high_value_target.unwrap_or(DEFAULT_HIGH_VALUE_TARGET)
    }

    pub fn effective_completion_weight(&self) -> f64 {
        self.completion_weight.unwrap_or(DEFAULT_PORTFOLIO_COMPLETION_WEIGHT)
    }

    pub fn effective_alignment_weight(&self) -> f64 {
        self.alignment_weight.unwrap_or(DEFAULT_PORTFOLIO_ALIGNMENT_WEIGHT)
    }

    pub fn effective_risk_weight(&self) -> f64 {
        self.risk_weight.unwrap_or(DEFAULT_PORTFOLIO_RISK_WEIGHT)
    }
}
