//! Dataset-level summaries feeding the dashboard cards and heatmaps.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sprintlens_core::{Initiative, InitiativeStatus, Sprint, Story, StoryType, TeamMember};

use super::types::TypePoints;
use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSummaryStats {
    pub total_sprints: usize,
    pub avg_velocity: f64,
    pub avg_completion_rate: f64,
    pub total_delivered: f64,
    /// Sprint number with the highest velocity. `None` when there are no sprints.
    pub best_sprint: Option<u32>,
    pub worst_sprint: Option<u32>,
}

pub fn get_sprint_summary_stats(sprints: &[Sprint]) -> SprintSummaryStats {
    let velocities: Vec<f64> = sprints.iter().map(Sprint::velocity).collect();
    let rates: Vec<f64> = sprints.iter().map(Sprint::completion_rate).collect();

    // Ties go to the earliest sprint.
    let best_sprint = sprints
        .iter()
        .rev()
        .max_by(|a, b| a.velocity().total_cmp(&b.velocity()))
        .map(|s| s.sprint_number);
    let worst_sprint = sprints
        .iter()
        .min_by(|a, b| a.velocity().total_cmp(&b.velocity()))
        .map(|s| s.sprint_number);

    SprintSummaryStats {
        total_sprints: sprints.len(),
        avg_velocity: stats::mean(&velocities),
        avg_completion_rate: stats::mean(&rates),
        total_delivered: velocities.iter().sum(),
        best_sprint,
        worst_sprint,
    }
}

/// Story points of each type within one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintTypeDistribution {
    pub sprint_number: u32,
    /// One entry per story type, in declaration order, zero-filled.
    pub by_type: Vec<TypePoints>,
}

pub fn calculate_story_type_distribution(stories: &[Story]) -> Vec<SprintTypeDistribution> {
    let mut per_sprint: BTreeMap<u32, FxHashMap<StoryType, f64>> = BTreeMap::new();
    for story in stories {
        *per_sprint
            .entry(story.sprint_number)
            .or_default()
            .entry(story.story_type)
            .or_default() += story.final_story_points;
    }

    per_sprint
        .into_iter()
        .map(|(sprint_number, points)| SprintTypeDistribution {
            sprint_number,
            by_type: StoryType::ALL
                .iter()
                .map(|t| TypePoints {
                    story_type: *t,
                    points: points.get(t).copied().unwrap_or(0.0),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberMetrics {
    pub member_id: String,
    pub name: String,
    pub role: Option<String>,
    pub story_count: usize,
    pub assigned_points: f64,
    pub completed_points: f64,
    /// Completed / assigned points. 0.0 with nothing assigned.
    pub completion_ratio: f64,
    /// Mean of per-sprint assigned points / capacity over the sprints the
    /// member had work in.
    pub avg_utilization: f64,
}

pub fn calculate_team_member_metrics(
    stories: &[Story],
    team: &[TeamMember],
) -> Vec<TeamMemberMetrics> {
    team.iter()
        .map(|member| {
            let assigned: Vec<&Story> = stories
                .iter()
                .filter(|s| s.assignee_id.as_deref() == Some(member.member_id.as_str()))
                .collect();
            let assigned_points: f64 = assigned.iter().map(|s| s.final_story_points).sum();
            let completed_points: f64 = assigned
                .iter()
                .filter(|s| s.is_completed())
                .map(|s| s.final_story_points)
                .sum();

            let mut per_sprint: BTreeMap<u32, f64> = BTreeMap::new();
            for story in &assigned {
                *per_sprint.entry(story.sprint_number).or_default() += story.final_story_points;
            }
            let utilizations: Vec<f64> = per_sprint
                .values()
                .map(|points| stats::ratio_or(*points, member.avg_capacity_per_sprint, 0.0))
                .collect();

            TeamMemberMetrics {
                member_id: member.member_id.clone(),
                name: member.name.clone(),
                role: member.role.clone(),
                story_count: assigned.len(),
                assigned_points,
                completed_points,
                completion_ratio: stats::ratio_or(completed_points, assigned_points, 0.0),
                avg_utilization: stats::mean(&utilizations),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: InitiativeStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeSummary {
    pub total_initiatives: usize,
    /// Every status, in declaration order, zero-filled.
    pub by_status: Vec<StatusCount>,
    pub total_points: f64,
    pub avg_impact: f64,
    pub avg_effort: f64,
}

pub fn get_initiative_summary(initiatives: &[Initiative]) -> InitiativeSummary {
    let impacts: Vec<f64> = initiatives.iter().map(|i| i.impact_score).collect();
    let efforts: Vec<f64> = initiatives.iter().map(|i| i.effort_score).collect();

    InitiativeSummary {
        total_initiatives: initiatives.len(),
        by_status: InitiativeStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: initiatives.iter().filter(|i| i.status == *status).count(),
            })
            .collect(),
        total_points: initiatives.iter().map(|i| i.total_story_points).sum(),
        avg_impact: stats::mean(&impacts),
        avg_effort: stats::mean(&efforts),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub member_id: String,
    /// First name, as shown on the heatmap axis.
    pub label: String,
    /// Utilization percent per column of [`CapacityHeatmap::sprint_numbers`].
    pub utilization_pct: Vec<f64>,
}

/// Member × sprint utilization grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityHeatmap {
    pub sprint_numbers: Vec<u32>,
    pub rows: Vec<HeatmapRow>,
}

/// Utilization % (assigned final points / capacity × 100) over the last
/// `last_n` sprints.
pub fn calculate_capacity_heatmap(
    stories: &[Story],
    team: &[TeamMember],
    sprints: &[Sprint],
    last_n: usize,
) -> CapacityHeatmap {
    let skip = sprints.len().saturating_sub(last_n);
    let sprint_numbers: Vec<u32> = sprints[skip..].iter().map(|s| s.sprint_number).collect();

    let mut load: FxHashMap<(&str, u32), f64> = FxHashMap::default();
    for story in stories {
        if let Some(assignee) = story.assignee_id.as_deref() {
            *load.entry((assignee, story.sprint_number)).or_default() += story.final_story_points;
        }
    }

    let rows = team
        .iter()
        .map(|member| HeatmapRow {
            member_id: member.member_id.clone(),
            label: member.first_name().to_string(),
            utilization_pct: sprint_numbers
                .iter()
                .map(|n| {
                    let points = load
                        .get(&(member.member_id.as_str(), *n))
                        .copied()
                        .unwrap_or(0.0);
                    stats::ratio_or(points, member.avg_capacity_per_sprint, 0.0) * 100.0
                })
                .collect(),
        })
        .collect();

    CapacityHeatmap {
        sprint_numbers,
        rows,
    }
}
