//! Story: one work item within exactly one sprint.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UnknownLabel;

/// Kind of work a story represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StoryType {
    Feature,
    Bug,
    #[serde(rename = "Technical Debt")]
    TechnicalDebt,
    Spike,
}

impl StoryType {
    /// All story types in display order.
    pub const ALL: &'static [StoryType] =
        &[Self::Feature, Self::Bug, Self::TechnicalDebt, Self::Spike];

    const LABELS: &'static [&'static str] = &["Feature", "Bug", "Technical Debt", "Spike"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Bug => "Bug",
            Self::TechnicalDebt => "Technical Debt",
            Self::Spike => "Spike",
        }
    }
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoryType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Feature" => Ok(Self::Feature),
            "Bug" => Ok(Self::Bug),
            "Technical Debt" => Ok(Self::TechnicalDebt),
            "Spike" => Ok(Self::Spike),
            other => Err(UnknownLabel {
                label: other.to_string(),
                expected: Self::LABELS,
            }),
        }
    }
}

/// Workflow status of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryStatus {
    Backlog,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Blocked,
}

impl StoryStatus {
    const LABELS: &'static [&'static str] = &["Backlog", "In Progress", "Completed", "Blocked"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoryStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Backlog" => Ok(Self::Backlog),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Blocked" => Ok(Self::Blocked),
            other => Err(UnknownLabel {
                label: other.to_string(),
                expected: Self::LABELS,
            }),
        }
    }
}

/// One story. `completion_date` is set iff `status == Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub story_id: String,
    pub sprint_number: u32,
    pub assignee_id: Option<String>,
    pub story_type: StoryType,
    pub status: StoryStatus,
    pub initial_story_points: f64,
    pub final_story_points: f64,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
}

impl Story {
    pub fn is_completed(&self) -> bool {
        self.status == StoryStatus::Completed
    }

    pub fn is_blocked(&self) -> bool {
        self.status == StoryStatus::Blocked
    }

    /// Days from start to completion, for completed stories with both dates.
    pub fn cycle_time_days(&self) -> Option<f64> {
        if !self.is_completed() {
            return None;
        }
        match (self.start_date, self.completion_date) {
            (Some(start), Some(done)) => Some((done - start).num_days().max(0) as f64),
            _ => None,
        }
    }

    /// |final − initial| / initial, or `None` when initial points are zero.
    pub fn estimation_error(&self) -> Option<f64> {
        if self.initial_story_points > 0.0 {
            Some(
                (self.final_story_points - self.initial_story_points).abs()
                    / self.initial_story_points,
            )
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_type_labels_round_trip() {
        for t in StoryType::ALL {
            assert_eq!(t.name().parse::<StoryType>().unwrap(), *t);
        }
    }

    #[test]
    fn test_unknown_status_label() {
        let err = "Done".parse::<StoryStatus>().unwrap_err();
        assert_eq!(err.label, "Done");
        assert!(err.to_string().contains("In Progress"));
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&StoryType::TechnicalDebt).unwrap();
        assert_eq!(json, "\"Technical Debt\"");
        let status: StoryStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, StoryStatus::InProgress);
    }

    #[test]
    fn test_cycle_time_only_for_completed() {
        let mut story = Story {
            story_id: "S-1".into(),
            sprint_number: 1,
            assignee_id: None,
            story_type: StoryType::Feature,
            status: StoryStatus::Completed,
            initial_story_points: 5.0,
            final_story_points: 8.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            completion_date: NaiveDate::from_ymd_opt(2024, 1, 6),
        };
        assert_eq!(story.cycle_time_days(), Some(4.0));
        assert!((story.estimation_error().unwrap() - 0.6).abs() < 1e-9);

        story.status = StoryStatus::Blocked;
        assert_eq!(story.cycle_time_days(), None);
    }
}
