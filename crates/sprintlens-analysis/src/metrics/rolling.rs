//! Trailing rolling-average velocity.

use sprintlens_core::Sprint;

use super::types::SprintMetrics;

/// Append a trailing `window`-sprint rolling average velocity to each sprint.
///
/// The window widens at the start of the series instead of failing, so the
/// first row's average is its own velocity. A zero window is treated as 1.
pub fn calculate_rolling_metrics(sprints: &[Sprint], window: usize) -> Vec<SprintMetrics> {
    let window = window.max(1);

    sprints
        .iter()
        .enumerate()
        .map(|(i, sprint)| {
            let start = (i + 1).saturating_sub(window);
            let slice = &sprints[start..=i];
            let total: f64 = slice.iter().map(Sprint::velocity).sum();
            SprintMetrics {
                sprint: sprint.clone(),
                rolling_avg_velocity: total / slice.len() as f64,
            }
        })
        .collect()
}
