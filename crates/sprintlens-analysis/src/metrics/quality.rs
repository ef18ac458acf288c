//! Per-sprint quality mix: bug and technical-debt share over time.

use std::collections::BTreeMap;

use sprintlens_core::constants::TREND_SLOPE_THRESHOLD;
use sprintlens_core::{Story, StoryType};

use super::types::{QualityPoint, QualityTrend, TrendDirection};
use crate::stats;

/// Bug ratio slope is in ratio units per sprint; scale it to percentage
/// points so the shared dead band applies.
const RATIO_TO_PERCENT: f64 = 100.0;

pub fn calculate_quality_trend(stories: &[Story]) -> QualityTrend {
    let mut per_sprint: BTreeMap<u32, QualityPoint> = BTreeMap::new();
    for story in stories {
        let point = per_sprint
            .entry(story.sprint_number)
            .or_insert(QualityPoint {
                sprint_number: story.sprint_number,
                total_stories: 0,
                bug_count: 0,
                tech_debt_count: 0,
                bug_ratio: 0.0,
            });
        point.total_stories += 1;
        match story.story_type {
            StoryType::Bug => point.bug_count += 1,
            StoryType::TechnicalDebt => point.tech_debt_count += 1,
            StoryType::Feature | StoryType::Spike => {}
        }
    }

    let points: Vec<QualityPoint> = per_sprint
        .into_values()
        .map(|mut p| {
            p.bug_ratio = stats::ratio_or(p.bug_count as f64, p.total_stories as f64, 0.0);
            p
        })
        .collect();

    let ratios: Vec<f64> = points.iter().map(|p| p.bug_ratio).collect();
    // A falling bug ratio is an improvement, so the slope is negated.
    let direction = stats::linear_fit(&ratios).map_or(TrendDirection::Stable, |fit| {
        TrendDirection::from_slope(-fit.slope * RATIO_TO_PERCENT, TREND_SLOPE_THRESHOLD)
    });

    QualityTrend { points, direction }
}

#[cfg(test)]
mod tests {
    use sprintlens_core::StoryStatus;

    use super::*;

    /// `bugs` bug stories plus enough features to make `total` stories per sprint.
    fn stories(per_sprint: &[(usize, usize)]) -> Vec<Story> {
        let mut out = Vec::new();
        for (sprint_idx, &(bugs, total)) in per_sprint.iter().enumerate() {
            for n in 0..total {
                out.push(Story {
                    story_id: format!("S{sprint_idx}-{n}"),
                    sprint_number: sprint_idx as u32 + 1,
                    assignee_id: None,
                    story_type: if n < bugs { StoryType::Bug } else { StoryType::Feature },
                    status: StoryStatus::Backlog,
                    initial_story_points: 3.0,
                    final_story_points: 3.0,
                    start_date: None,
                    completion_date: None,
                });
            }
        }
        out
    }

    #[test]
    fn test_falling_bug_ratio_is_improving() {
        let trend = calculate_quality_trend(&stories(&[(2, 4), (1, 4), (0, 4)]));
        let ratios: Vec<f64> = trend.points.iter().map(|p| p.bug_ratio).collect();
        assert_eq!(ratios, vec![0.5, 0.25, 0.0]);
        assert_eq!(trend.direction, TrendDirection::Improving);
    }

    #[test]
    fn test_rising_bug_ratio_is_declining() {
        let trend = calculate_quality_trend(&stories(&[(0, 4), (1, 4), (2, 4)]));
        assert_eq!(trend.direction, TrendDirection::Declining);
        assert_eq!(trend.points[2].bug_count, 2);
    }

    #[test]
    fn test_single_sprint_is_stable() {
        let trend = calculate_quality_trend(&stories(&[(1, 2)]));
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert!(calculate_quality_trend(&[]).points.is_empty());
    }
}
