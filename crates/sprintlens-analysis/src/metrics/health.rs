//! 3-factor sprint health scoring.
//!
//! health_score = completion × w_c + consistency × w_v + estimation × w_e
//!
//! Each sub-score is in [0, 100]; weights come from `HealthConfig` and sum to 1.0.

use sprintlens_core::config::HealthConfig;
use sprintlens_core::constants::NEUTRAL_SUB_SCORE;
use sprintlens_core::{Sprint, Story};
use tracing::debug;

use super::types::{HealthBand, SprintHealth};
use crate::stats;

/// Score one sprint against the whole sprint history.
///
/// `stories` may be the full story table; only completed stories of
/// `current` feed the estimation-accuracy sub-score.
pub fn calculate_sprint_health_score(
    current: &Sprint,
    all_sprints: &[Sprint],
    stories: &[Story],
    config: &HealthConfig,
) -> SprintHealth {
    let completion_score = completion_score(current);
    let consistency_score = consistency_score(all_sprints);
    let estimation_score = estimation_score(current.sprint_number, stories);

    let raw = completion_score * config.effective_completion_weight()
        + consistency_score * config.effective_consistency_weight()
        + estimation_score * config.effective_estimation_weight();
    let health_score = raw.round().clamp(0.0, 100.0) as u8;

    debug!(
        sprint = current.sprint_number,
        health_score, completion_score, consistency_score, estimation_score,
        "sprint health computed"
    );

    SprintHealth {
        sprint_number: current.sprint_number,
        health_score,
        band: HealthBand::from_score(health_score),
        completion_score,
        consistency_score,
        estimation_score,
    }
}

fn completion_score(sprint: &Sprint) -> f64 {
    (sprint.completion_rate() * 100.0).clamp(0.0, 100.0)
}

/// (1 − std/mean) × 100 over every sprint's velocity.
fn consistency_score(sprints: &[Sprint]) -> f64 {
    if sprints.len() < 2 {
        return NEUTRAL_SUB_SCORE;
    }
    let velocities: Vec<f64> = sprints.iter().map(Sprint::velocity).collect();
    match stats::coefficient_of_variation(&velocities) {
        Some(cv) => ((1.0 - cv) * 100.0).clamp(0.0, 100.0),
        None => NEUTRAL_SUB_SCORE,
    }
}

/// (1 − mean relative re-estimation) × 100 over the sprint's completed stories.
fn estimation_score(sprint_number: u32, stories: &[Story]) -> f64 {
    let errors: Vec<f64> = stories
        .iter()
        .filter(|s| s.sprint_number == sprint_number && s.is_completed())
        .filter_map(Story::estimation_error)
        .collect();

    if errors.is_empty() {
        return NEUTRAL_SUB_SCORE;
    }
    ((1.0 - stats::mean(&errors)) * 100.0).clamp(0.0, 100.0)
}
