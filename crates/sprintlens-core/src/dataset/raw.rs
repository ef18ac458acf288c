//! Raw loader-facing records.
//!
//! Every column is optional so that a missing column surfaces as a
//! `DatasetError::MissingColumn` naming the table, row, and column instead
//! of an opaque deserializer failure. Enum and date columns stay as text
//! until the adapter parses them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSprintRecord {
    pub sprint_number: Option<u32>,
    pub committed_points: Option<f64>,
    pub completed_points: Option<f64>,
    pub team_capacity: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStoryRecord {
    pub story_id: Option<String>,
    pub sprint_number: Option<u32>,
    pub assignee_id: Option<String>,
    pub story_type: Option<String>,
    pub status: Option<String>,
    pub initial_story_points: Option<f64>,
    pub final_story_points: Option<f64>,
    pub start_date: Option<String>,
    pub completion_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInitiativeRecord {
    pub initiative_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub impact_score: Option<f64>,
    pub effort_score: Option<f64>,
    pub total_story_points: Option<f64>,
    pub roi_estimate: Option<String>,
    pub start_sprint: Option<u32>,
    pub target_sprint: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTeamMemberRecord {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub avg_capacity_per_sprint: Option<f64>,
    pub role: Option<String>,
}

/// The four named tables as produced by an external loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDataset {
    pub sprints: Vec<RawSprintRecord>,
    pub stories: Vec<RawStoryRecord>,
    pub initiatives: Vec<RawInitiativeRecord>,
    pub team: Vec<RawTeamMemberRecord>,
}
