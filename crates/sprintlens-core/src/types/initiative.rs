//! Initiative: a strategic project spanning zero or more stories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownLabel;

/// Portfolio status of an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiativeStatus {
    Backlog,
    Active,
    Completed,
    Deprioritized,
}

impl InitiativeStatus {
    pub const ALL: &'static [InitiativeStatus] =
        &[Self::Backlog, Self::Active, Self::Completed, Self::Deprioritized];

    const LABELS: &'static [&'static str] = &["Backlog", "Active", "Completed", "Deprioritized"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Deprioritized => "Deprioritized",
        }
    }

    /// Completed and Deprioritized initiatives no longer carry delivery risk.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Deprioritized)
    }
}

impl std::fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitiativeStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Backlog" => Ok(Self::Backlog),
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            "Deprioritized" => Ok(Self::Deprioritized),
            other => Err(UnknownLabel {
                label: other.to_string(),
                expected: Self::LABELS,
            }),
        }
    }
}

/// Coarse ROI estimate. Ordered Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoiEstimate {
    Low,
    Medium,
    High,
}

impl RoiEstimate {
    const LABELS: &'static [&'static str] = &["High", "Medium", "Low"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RoiEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoiEstimate {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            other => Err(UnknownLabel {
                label: other.to_string(),
                expected: Self::LABELS,
            }),
        }
    }
}

/// One initiative as loaded from source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub initiative_id: String,
    pub name: String,
    pub status: InitiativeStatus,
    /// 0-10.
    pub impact_score: f64,
    /// 0-10. Zero is tolerated; scoring floors it.
    pub effort_score: f64,
    pub total_story_points: f64,
    pub roi_estimate: RoiEstimate,
    /// Sprint in which the initiative entered the portfolio.
    #[serde(default)]
    pub start_sprint: Option<u32>,
    /// Planned completion sprint.
    #[serde(default)]
    pub target_sprint: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_ordering() {
        assert!(RoiEstimate::Low < RoiEstimate::Medium);
        assert!(RoiEstimate::Medium < RoiEstimate::High);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(InitiativeStatus::Completed.is_terminal());
        assert!(InitiativeStatus::Deprioritized.is_terminal());
        assert!(!InitiativeStatus::Active.is_terminal());
        assert!(!InitiativeStatus::Backlog.is_terminal());
    }

    #[test]
    fn test_unknown_label_message_lists_expected() {
        let err = "Paused".parse::<InitiativeStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown label 'Paused', expected one of: Backlog, Active, Completed, Deprioritized"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
