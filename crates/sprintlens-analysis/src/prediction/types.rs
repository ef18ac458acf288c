//! Predictive engine types: completion forecasts, initiative risk, velocity outlook.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How a completion probability was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMethod {
    /// Monte Carlo over the historical completion-rate distribution.
    Simulated,
    /// Too little history or no variance: a single expected outcome.
    Deterministic,
}

/// Probability of a sprint delivering its committed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionForecast {
    pub sprint_number: u32,
    /// In [0, 1].
    pub probability: f64,
    pub method: SimulationMethod,
    /// Trials run. 0 for a deterministic forecast.
    pub trials: u32,
    pub expected_points: f64,
    pub committed_points: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
    /// Simulated completed points, ascending.
    pub samples: Vec<f64>,
}

impl CompletionForecast {
    pub fn probability_pct(&self) -> f64 {
        self.probability * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a total risk score. Monotone in `score`.
    pub fn from_score(score: u32, medium_threshold: u32, high_threshold: u32) -> Self {
        if score >= high_threshold {
            Self::High
        } else if score >= medium_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Team running at or over capacity.
    Utilization,
    /// Sitting in Backlog or Active for many sprints.
    Stagnation,
    /// Active with a high effort score.
    Complexity,
    /// Past its target sprint.
    Schedule,
    /// Team velocity declining.
    Velocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactorScore {
    pub factor: RiskFactor,
    pub points: u32,
}

/// At most one entry per [`RiskFactor`].
pub type RiskFactors = SmallVec<[RiskFactorScore; 5]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeRisk {
    pub initiative_id: String,
    pub name: String,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// Contributing factors; factors scoring 0 are omitted.
    pub factors: RiskFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    LinearTrend,
    LastValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub sprint_number: u32,
    pub velocity: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityForecast {
    pub points: Vec<ForecastPoint>,
    pub method: ForecastMethod,
    pub slope: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// count / total samples.
    pub frequency: f64,
}

/// Histogram of simulated outcomes, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub bins: Vec<HistogramBin>,
    pub committed_points: f64,
    pub probability: f64,
}
