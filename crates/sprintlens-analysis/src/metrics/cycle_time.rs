//! Cycle time (completion − start, in days) over completed stories.

use rustc_hash::FxHashMap;
use sprintlens_core::{Story, StoryType};

use super::types::{CycleTimeMetrics, TypeCycleTime};
use crate::stats;

/// Cycle-time statistics. Non-completed stories, and completed stories
/// missing a start date, are excluded rather than zero-filled.
pub fn calculate_cycle_time_metrics(stories: &[Story]) -> CycleTimeMetrics {
    let mut per_type: FxHashMap<StoryType, Vec<f64>> = FxHashMap::default();
    let mut all = Vec::new();

    for story in stories {
        if let Some(days) = story.cycle_time_days() {
            per_type.entry(story.story_type).or_default().push(days);
            all.push(days);
        }
    }

    if all.is_empty() {
        return CycleTimeMetrics::empty();
    }

    all.sort_by(f64::total_cmp);

    let by_type = StoryType::ALL
        .iter()
        .filter_map(|t| {
            per_type.get(t).map(|days| TypeCycleTime {
                story_type: *t,
                sample_size: days.len(),
                mean_days: stats::mean(days),
            })
        })
        .collect();

    CycleTimeMetrics {
        sample_size: all.len(),
        mean_days: stats::mean(&all),
        median_days: stats::median(&all),
        p85_days: stats::percentile(&all, 85),
        min_days: all[0],
        max_days: all[all.len() - 1],
        by_type,
    }
}
