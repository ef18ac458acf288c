//! Per-member velocity contribution and work distribution by role.

use rustc_hash::FxHashMap;
use sprintlens_core::constants::UNASSIGNED_LABEL;
use sprintlens_core::{Story, StoryType, TeamMember};

use super::types::{MemberContribution, RoleDistribution, TypePoints};
use crate::stats;

/// Completed points per team member, largest contributor first.
///
/// Only completed, assigned stories count. Every member appears, with 0
/// when they completed nothing.
pub fn calculate_team_velocity_contribution(
    stories: &[Story],
    team: &[TeamMember],
) -> Vec<MemberContribution> {
    let mut per_member: FxHashMap<&str, (usize, f64)> = FxHashMap::default();
    for story in stories.iter().filter(|s| s.is_completed()) {
        if let Some(assignee) = story.assignee_id.as_deref() {
            let entry = per_member.entry(assignee).or_default();
            entry.0 += 1;
            entry.1 += story.final_story_points;
        }
    }

    let total: f64 = team
        .iter()
        .filter_map(|m| per_member.get(m.member_id.as_str()))
        .map(|(_, points)| points)
        .sum();

    let mut contributions: Vec<MemberContribution> = team
        .iter()
        .map(|member| {
            let (story_count, points) = per_member
                .get(member.member_id.as_str())
                .copied()
                .unwrap_or_default();
            MemberContribution {
                member_id: member.member_id.clone(),
                name: member.name.clone(),
                story_count,
                points,
                share: stats::ratio_or(points, total, 0.0),
            }
        })
        .collect();

    contributions.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| a.member_id.cmp(&b.member_id))
    });
    contributions
}

/// Story points per role, broken down by story type.
///
/// Stories without an assignee, or whose assignee has no role, count
/// under "Unassigned".
pub fn calculate_work_distribution_by_role(
    stories: &[Story],
    team: &[TeamMember],
) -> Vec<RoleDistribution> {
    let roles: FxHashMap<&str, &str> = team
        .iter()
        .map(|m| {
            (
                m.member_id.as_str(),
                m.role.as_deref().unwrap_or(UNASSIGNED_LABEL),
            )
        })
        .collect();

    let mut per_role: FxHashMap<&str, (usize, FxHashMap<StoryType, f64>)> = FxHashMap::default();
    for story in stories {
        let role = story
            .assignee_id
            .as_deref()
            .and_then(|id| roles.get(id).copied())
            .unwrap_or(UNASSIGNED_LABEL);
        let entry = per_role.entry(role).or_default();
        entry.0 += 1;
        *entry.1.entry(story.story_type).or_default() += story.final_story_points;
    }

    let total: f64 = stories.iter().map(|s| s.final_story_points).sum();

    let mut distribution: Vec<RoleDistribution> = per_role
        .into_iter()
        .map(|(role, (story_count, by_type))| {
            let points: f64 = by_type.values().sum();
            RoleDistribution {
                role: role.to_string(),
                story_count,
                points,
                share: stats::ratio_or(points, total, 0.0),
                by_type: StoryType::ALL
                    .iter()
                    .map(|t| TypePoints {
                        story_type: *t,
                        points: by_type.get(t).copied().unwrap_or(0.0),
                    })
                    .collect(),
            }
        })
        .collect();

    distribution.sort_by(|a, b| b.points.total_cmp(&a.points).then_with(|| a.role.cmp(&b.role)));
    distribution
}
