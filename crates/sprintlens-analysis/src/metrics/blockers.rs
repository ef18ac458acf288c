//! Blocked-work impact per sprint and per story type.

use std::collections::BTreeMap;

use sprintlens_core::{Story, StoryType};

use super::types::{BlockerImpact, SprintBlockers, TypeBlockers};
use crate::stats;

pub fn calculate_blocker_impact(stories: &[Story]) -> BlockerImpact {
    let mut per_sprint: BTreeMap<u32, SprintBlockers> = BTreeMap::new();
    let mut blocked_count = 0;
    let mut blocked_points = 0.0;
    let mut total_points = 0.0;

    for story in stories {
        total_points += story.final_story_points;
        if story.is_blocked() {
            blocked_count += 1;
            blocked_points += story.final_story_points;
            let entry = per_sprint
                .entry(story.sprint_number)
                .or_insert(SprintBlockers {
                    sprint_number: story.sprint_number,
                    blocked_count: 0,
                    blocked_points: 0.0,
                });
            entry.blocked_count += 1;
            entry.blocked_points += story.final_story_points;
        }
    }

    let by_type = StoryType::ALL
        .iter()
        .filter_map(|t| {
            let total_count = stories.iter().filter(|s| s.story_type == *t).count();
            (total_count > 0).then(|| TypeBlockers {
                story_type: *t,
                blocked_count: stories
                    .iter()
                    .filter(|s| s.story_type == *t && s.is_blocked())
                    .count(),
                total_count,
            })
        })
        .collect();

    BlockerImpact {
        blocked_count,
        blocked_points,
        total_points,
        blocked_ratio: stats::ratio_or(blocked_points, total_points, 0.0),
        per_sprint: per_sprint.into_values().collect(),
        by_type,
    }
}
