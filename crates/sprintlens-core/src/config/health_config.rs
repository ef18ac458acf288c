//! Sprint health configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HEALTH_COMPLETION_WEIGHT, DEFAULT_HEALTH_CONSISTENCY_WEIGHT,
    DEFAULT_HEALTH_ESTIMATION_WEIGHT, DEFAULT_ROLLING_WINDOW,
};

/// Weights of the three sprint health sub-scores and the rolling window.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthConfig {
    /// Weight of the completion-rate sub-score. Default: 0.40.
    pub completion_weight: Option<f64>,
    /// Weight of the velocity-consistency sub-score. Default: 0.30.
    pub consistency_weight: Option<f64>,
    /// Weight of the estimation-accuracy sub-score. Default: 0.30.
    pub estimation_weight: Option<f64>,
    /// Trailing window for rolling velocity averages. Default: 3.
    pub rolling_window: Option<usize>,
}

impl HealthConfig {
    pub fn effective_completion_weight(&self) -> f64 {
        self.completion_weight.unwrap_or(DEFAULT_HEALTH_COMPLETION_WEIGHT)
    }

    pub fn effective_consistency_weight(&self) -> f64 {
        self.consistency_weight.unwrap_or(DEFAULT_HEALTH_CONSISTENCY_WEIGHT)
    }

    pub fn effective_estimation_weight(&self) -> f64 {
        self.estimation_weight.unwrap_or(DEFAULT_HEALTH_ESTIMATION_WEIGHT)
    }

    pub fn effective_rolling_window(&self) -> usize {
        self.rolling_window.unwrap_or(DEFAULT_ROLLING_WINDOW)
    }
}
