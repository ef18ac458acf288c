//! Metrics engine types: derived sprint rows, health, trends, and breakdowns.

use serde::{Deserialize, Serialize};
use sprintlens_core::constants::{HEALTHY_BAND_MIN, MODERATE_BAND_MIN};
use sprintlens_core::{Sprint, StoryType};

/// A sprint plus its derived rolling-average velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintMetrics {
    pub sprint: Sprint,
    /// Trailing-window mean velocity, widening at the start of the series.
    pub rolling_avg_velocity: f64,
}

impl SprintMetrics {
    pub fn sprint_number(&self) -> u32 {
        self.sprint.sprint_number
    }

    pub fn velocity(&self) -> f64 {
        self.sprint.velocity()
    }
}

/// Direction of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

impl TrendDirection {
    /// Classify a slope against a symmetric dead band.
    pub fn from_slope(slope: f64, dead_band: f64) -> Self {
        if slope > dead_band {
            Self::Improving
        } else if slope < -dead_band {
            Self::Declining
        } else {
            Self::Stable
        }
    }
}

/// Qualitative band of a sprint health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Healthy,
    Moderate,
    AtRisk,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        if score >= HEALTHY_BAND_MIN {
            Self::Healthy
        } else if score >= MODERATE_BAND_MIN {
            Self::Moderate
        } else {
            Self::AtRisk
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Moderate => "Moderate",
            Self::AtRisk => "At Risk",
        }
    }
}

/// Composite sprint health with its sub-scores for drill-down. All values in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprintHealth {
    pub sprint_number: u32,
    pub health_score: u8,
    pub band: HealthBand,
    pub completion_score: f64,
    pub consistency_score: f64,
    pub estimation_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityTrend {
    /// Points per sprint from a least-squares fit.
    pub slope: f64,
    pub direction: TrendDirection,
    /// Mean of the last three sprints vs the first three, in percent.
    pub percent_change: f64,
    /// 1 − coefficient of variation, clamped to [0, 1].
    pub predictability: f64,
    pub mean_velocity: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeCycleTime {
    pub story_type: StoryType,
    pub sample_size: usize,
    pub mean_days: f64,
}

/// Cycle-time statistics over completed stories only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleTimeMetrics {
    pub sample_size: usize,
    pub mean_days: f64,
    pub median_days: f64,
    pub p85_days: f64,
    pub min_days: f64,
    pub max_days: f64,
    pub by_type: Vec<TypeCycleTime>,
}

impl CycleTimeMetrics {
    /// Result for a partition with no completed stories.
    pub fn empty() -> Self {
        Self {
            sample_size: 0,
            mean_days: 0.0,
            median_days: 0.0,
            p85_days: 0.0,
            min_days: 0.0,
            max_days: 0.0,
            by_type: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sample_size == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprintBlockers {
    pub sprint_number: u32,
    pub blocked_count: usize,
    pub blocked_points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeBlockers {
    pub story_type: StoryType,
    pub blocked_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockerImpact {
    pub blocked_count: usize,
    pub blocked_points: f64,
    pub total_points: f64,
    /// Blocked points / total points. 0.0 when there are no points.
    pub blocked_ratio: f64,
    pub per_sprint: Vec<SprintBlockers>,
    pub by_type: Vec<TypeBlockers>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberContribution {
    pub member_id: String,
    pub name: String,
    pub story_count: usize,
    pub points: f64,
    /// Fraction of all assigned completed points.
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckKind {
    OverloadedMember,
    BlockedWork,
    SlowCycleTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub kind: BottleneckKind,
    /// Member name or story type label.
    pub subject: String,
    /// How far past the threshold, as a ratio. Higher is worse.
    pub severity: f64,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityPoint {
    pub sprint_number: u32,
    pub total_stories: usize,
    pub bug_count: usize,
    pub tech_debt_count: usize,
    pub bug_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityTrend {
    pub points: Vec<QualityPoint>,
    /// A falling bug ratio is `Improving`.
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypePoints {
    pub story_type: StoryType,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDistribution {
    pub role: String,
    pub story_count: usize,
    pub points: f64,
    pub share: f64,
    pub by_type: Vec<TypePoints>,
}
