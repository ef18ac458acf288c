//! Prioritization engine types.

use serde::{Deserialize, Serialize};
use sprintlens_core::{Initiative, InitiativeStatus};

/// Impact/effort quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Quick Wins")]
    QuickWins,
    #[serde(rename = "Major Projects")]
    MajorProjects,
    #[serde(rename = "Fill-ins")]
    FillIns,
    #[serde(rename = "Time Sinks")]
    TimeSinks,
}

impl Quadrant {
    /// Fixed chart order.
    pub const ALL: [Quadrant; 4] = [
        Self::QuickWins,
        Self::MajorProjects,
        Self::FillIns,
        Self::TimeSinks,
    ];

    /// Classify on both axes against one threshold. A value exactly at the
    /// threshold counts as high.
    pub fn classify(impact: f64, effort: f64, threshold: f64) -> Self {
        match (impact >= threshold, effort >= threshold) {
            (true, false) => Self::QuickWins,
            (true, true) => Self::MajorProjects,
            (false, false) => Self::FillIns,
            (false, true) => Self::TimeSinks,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::QuickWins => "Quick Wins",
            Self::MajorProjects => "Major Projects",
            Self::FillIns => "Fill-ins",
            Self::TimeSinks => "Time Sinks",
        }
    }

    /// Quick Wins and Major Projects carry the portfolio's value.
    pub fn is_high_impact(&self) -> bool {
        matches!(self, Self::QuickWins | Self::MajorProjects)
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An initiative with its derived priority score and quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredInitiative {
    pub initiative: Initiative,
    pub priority_score: f64,
    pub quadrant: Quadrant,
}

impl ScoredInitiative {
    pub fn id(&self) -> &str {
        &self.initiative.initiative_id
    }

    pub fn status(&self) -> InitiativeStatus {
        self.initiative.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantCount {
    pub quadrant: Quadrant,
    pub initiative_count: usize,
    pub total_points: f64,
    /// 0.0 for an empty quadrant.
    pub avg_priority: f64,
}

/// Portfolio health with the ratios behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHealth {
    pub health_score: u8,
    /// Completed / non-deprioritized initiatives.
    pub completion_ratio: f64,
    /// Share of non-deprioritized points in Quick Wins and Major Projects,
    /// measured against those plus Time Sinks.
    pub alignment_ratio: f64,
    /// Share of non-deprioritized points sitting in Time Sinks.
    pub time_sink_ratio: f64,
    pub high_risk_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: InitiativeStatus,
    pub count: usize,
    /// Count relative to the previous stage.
    pub conversion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeFunnel {
    pub stages: Vec<FunnelStage>,
    pub deprioritized: usize,
}
