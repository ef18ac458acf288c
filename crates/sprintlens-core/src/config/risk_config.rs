//! Initiative risk thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXTREME_EFFORT, DEFAULT_HIGH_EFFORT, DEFAULT_HIGH_RISK_THRESHOLD,
    DEFAULT_HIGH_UTILIZATION, DEFAULT_MEDIUM_RISK_THRESHOLD, DEFAULT_OVERLOAD_UTILIZATION,
    DEFAULT_SEVERE_STAGNATION_SPRINTS, DEFAULT_STAGNATION_SPRINTS,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskConfig {
    /// Default: 0.90.
    pub high_utilization: Option<f64>,
    /// Default: 1.0.
    pub overload_utilization: Option<f64>,
    /// Default: 3.
    pub stagnation_sprints: Option<u32>,
    /// Default: 6.
    pub severe_stagnation_sprints: Option<u32>,
    /// Default: 7.0.
    pub high_effort: Option<f64>,
    /// Default: 9.0.
    pub extreme_effort: Option<f64>,
    /// Risk points for Medium. Default: 2.
    pub medium_threshold: Option<u32>,
    /// Risk points for High. Default: 4.
    pub high_threshold: Option<u32>,
}

impl RiskConfig {
    pub fn effective_high_utilization(&self) -> f64 {
        self.high_utilization.unwrap_or(DEFAULT_HIGH_UTILIZATION)
    }

    pub fn effective_overload_utilization(&self) -> f64 {
        self.overload_utilization.unwrap_or(DEFAULT_OVERLOAD_UTILIZATION)
    }

    pub fn effective_stagnation_sprints(&self) -> u32 {
        self.stagnation_sprints.unwrap_or(DEFAULT_STAGNATION_SPRINTS)
    }

    pub fn effective_severe_stagnation_sprints(&self) -> u32 {
        self.severe_stagnation_sprints
            .unwrap_or(DEFAULT_SEVERE_STAGNATION_SPRINTS)
    }

    pub fn effective_high_effort(&self) -> f64 {
        self.high_effort.unwrap_or(DEFAULT_HIGH_EFFORT)
    }

    pub fn effective_extreme_effort(&self) -> f64 {
        self.extreme_effort.unwrap_or(DEFAULT_EXTREME_EFFORT)
    }

    pub fn effective_medium_threshold(&self) -> u32 {
        self.medium_threshold.unwrap_or(DEFAULT_MEDIUM_RISK_THRESHOLD)
    }

    pub fn effective_high_threshold(&self) -> u32 {
        self.high_threshold.unwrap_or(DEFAULT_HIGH_RISK_THRESHOLD)
    }
}
