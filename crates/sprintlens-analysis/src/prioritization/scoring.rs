//! Priority scores, quadrant classification, and the lists derived from them.

use sprintlens_core::constants::MIN_EFFORT_SCORE;
use sprintlens_core::Initiative;
use tracing::debug;

use super::types::{Quadrant, QuadrantCount, ScoredInitiative};
use crate::stats;

/// `(impact × 10) / effort`, with effort floored at `MIN_EFFORT_SCORE`.
pub fn priority_score(impact: f64, effort: f64) -> f64 {
    (impact * 10.0) / effort.max(MIN_EFFORT_SCORE)
}

/// Score and classify every initiative, preserving input order.
pub fn score_initiatives(initiatives: &[Initiative], threshold: f64) -> Vec<ScoredInitiative> {
    let scored: Vec<ScoredInitiative> = initiatives
        .iter()
        .map(|initiative| ScoredInitiative {
            priority_score: priority_score(initiative.impact_score, initiative.effort_score),
            quadrant: Quadrant::classify(
                initiative.impact_score,
                initiative.effort_score,
                threshold,
            ),
            initiative: initiative.clone(),
        })
        .collect();

    debug!(count = scored.len(), threshold, "initiatives scored");
    scored
}

/// Quick Wins, best first, optionally truncated.
pub fn get_quick_wins(scored: &[ScoredInitiative], limit: Option<usize>) -> Vec<&ScoredInitiative> {
    let mut wins: Vec<&ScoredInitiative> = scored
        .iter()
        .filter(|s| s.quadrant == Quadrant::QuickWins)
        .collect();
    wins.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| a.id().cmp(b.id()))
    });
    if let Some(limit) = limit {
        wins.truncate(limit);
    }
    wins
}

/// Time Sinks, lowest ROI first, then lowest priority.
pub fn get_time_sinks(scored: &[ScoredInitiative]) -> Vec<&ScoredInitiative> {
    let mut sinks: Vec<&ScoredInitiative> = scored
        .iter()
        .filter(|s| s.quadrant == Quadrant::TimeSinks)
        .collect();
    sinks.sort_by(|a, b| {
        a.initiative
            .roi_estimate
            .cmp(&b.initiative.roi_estimate)
            .then_with(|| a.priority_score.total_cmp(&b.priority_score))
            .then_with(|| a.id().cmp(b.id()))
    });
    sinks
}

/// One row per quadrant in [`Quadrant::ALL`] order, zero-filled.
pub fn get_portfolio_composition(scored: &[ScoredInitiative]) -> Vec<QuadrantCount> {
    Quadrant::ALL
        .iter()
        .map(|quadrant| {
            let members: Vec<&ScoredInitiative> =
                scored.iter().filter(|s| s.quadrant == *quadrant).collect();
            let priorities: Vec<f64> = members.iter().map(|s| s.priority_score).collect();
            QuadrantCount {
                quadrant: *quadrant,
                initiative_count: members.len(),
                total_points: members.iter().map(|s| s.initiative.total_story_points).sum(),
                avg_priority: stats::mean(&priorities),
            }
        })
        .collect()
}
