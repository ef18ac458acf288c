//! Portfolio health scoring and recommendation text.
//!
//! health_score = 100 × (completion × w_c + alignment × w_a + (1 − high_risk) × w_r)

use sprintlens_core::config::PortfolioConfig;
use sprintlens_core::InitiativeStatus;
use tracing::debug;

use super::types::{PortfolioHealth, Quadrant, ScoredInitiative};
use crate::prediction::{InitiativeRisk, RiskLevel};
use crate::recommendation::{Recommendation, RecommendationKind};
use crate::stats;

/// Alignment when no points sit in a quadrant that counts toward it.
const NEUTRAL_ALIGNMENT: f64 = 0.5;

pub fn calculate_portfolio_health_score(
    scored: &[ScoredInitiative],
    risks: &[InitiativeRisk],
    config: &PortfolioConfig,
) -> PortfolioHealth {
    let live: Vec<&ScoredInitiative> = scored
        .iter()
        .filter(|s| s.status() != InitiativeStatus::Deprioritized)
        .collect();

    let completed = live
        .iter()
        .filter(|s| s.status() == InitiativeStatus::Completed)
        .count();
    let completion_ratio = stats::ratio_or(completed as f64, live.len() as f64, 0.0);

    let points_in = |keep: fn(Quadrant) -> bool| -> f64 {
        live.iter()
            .filter(|s| keep(s.quadrant))
            .map(|s| s.initiative.total_story_points)
            .sum()
    };
    let high_impact_points = points_in(|q| q.is_high_impact());
    let time_sink_points = points_in(|q| q == Quadrant::TimeSinks);
    let total_points = points_in(|_| true);

    let alignment_ratio = stats::ratio_or(
        high_impact_points,
        high_impact_points + time_sink_points,
        NEUTRAL_ALIGNMENT,
    );
    let time_sink_ratio = stats::ratio_or(time_sink_points, total_points, 0.0);

    let high_risk = risks.iter().filter(|r| r.risk_level == RiskLevel::High).count();
    let high_risk_ratio = stats::ratio_or(high_risk as f64, risks.len() as f64, 0.0);

    let raw = 100.0
        * (completion_ratio * config.effective_completion_weight()
            + alignment_ratio * config.effective_alignment_weight()
            + (1.0 - high_risk_ratio) * config.effective_risk_weight());
    let health_score = raw.round().clamp(0.0, 100.0) as u8;

    debug!(
        health_score,
        completion_ratio, alignment_ratio, time_sink_ratio, high_risk_ratio,
        "portfolio health computed"
    );

    PortfolioHealth {
        health_score,
        completion_ratio,
        alignment_ratio,
        time_sink_ratio,
        high_risk_ratio,
    }
}

pub fn generate_portfolio_recommendations(
    scored: &[ScoredInitiative],
    health: &PortfolioHealth,
    risks: &[InitiativeRisk],
    config: &PortfolioConfig,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let aligned_pct = (health.alignment_ratio * 100.0).round();
    if health.alignment_ratio >= config.effective_high_value_target() {
        recommendations.push(Recommendation::new(
            RecommendationKind::Strength,
            format!("{aligned_pct:.0}% of portfolio effort is on high-ROI initiatives"),
        ));
    } else {
        recommendations.push(Recommendation::new(
            RecommendationKind::Optimization,
            format!(
                "Only {aligned_pct:.0}% of portfolio effort is on high-ROI initiatives; \
                 rebalance toward Quick Wins and Major Projects"
            ),
        ));
    }

    let ready_quick_wins = scored
        .iter()
        .filter(|s| s.quadrant == Quadrant::QuickWins && s.status() == InitiativeStatus::Backlog)
        .count();
    if ready_quick_wins > 0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Opportunity,
            format!("{ready_quick_wins} Quick Win initiatives ready for immediate delivery"),
        ));
    }

    let open_time_sinks = scored
        .iter()
        .filter(|s| s.quadrant == Quadrant::TimeSinks && !s.status().is_terminal())
        .count();
    if open_time_sinks > 0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Optimization,
            format!("Deprioritize {open_time_sinks} Time Sink initiatives to free capacity"),
        ));
    }

    let high_risk = risks.iter().filter(|r| r.risk_level == RiskLevel::High).count();
    if high_risk > 0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Alert,
            format!("{high_risk} initiatives flagged high-risk; realign scope or extend timeline"),
        ));
    }

    recommendations
}
