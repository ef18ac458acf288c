//! Recommendation text derived from the predictive outputs.

use sprintlens_core::constants::TREND_SLOPE_THRESHOLD;

use super::types::{CompletionForecast, InitiativeRisk, RiskLevel, VelocityForecast};
use crate::recommendation::{Recommendation, RecommendationKind};

const LIKELY_PROBABILITY: f64 = 0.80;
const POSSIBLE_PROBABILITY: f64 = 0.50;
const MAX_NAMED_RISKS: usize = 3;

pub fn generate_predictive_recommendations(
    completion: &CompletionForecast,
    forecast: &VelocityForecast,
    risks: &[InitiativeRisk],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let pct = completion.probability_pct();

    if completion.probability >= LIKELY_PROBABILITY {
        recommendations.push(Recommendation::new(
            RecommendationKind::Strength,
            format!("{pct:.0}% probability of completing committed scope"),
        ));
    } else if completion.probability >= POSSIBLE_PROBABILITY {
        recommendations.push(Recommendation::new(
            RecommendationKind::Optimization,
            format!("{pct:.0}% probability of completing committed scope; consider trimming scope"),
        ));
    } else {
        let shortfall = (completion.committed_points - completion.p50).max(0.0);
        recommendations.push(Recommendation::new(
            RecommendationKind::Alert,
            format!(
                "{pct:.0}% probability of completing committed scope; \
                 reduce commitment by ~{shortfall:.0} points"
            ),
        ));
    }

    if forecast.slope > TREND_SLOPE_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Strength,
            format!("Velocity trending up ({:+.1} points per sprint)", forecast.slope),
        ));
    } else if forecast.slope < -TREND_SLOPE_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Alert,
            format!("Velocity trending down ({:+.1} points per sprint)", forecast.slope),
        ));
    }

    let high: Vec<&str> = risks
        .iter()
        .filter(|r| r.risk_level == RiskLevel::High)
        .map(|r| r.name.as_str())
        .collect();
    if !high.is_empty() {
        let named = high
            .iter()
            .take(MAX_NAMED_RISKS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let more = high.len().saturating_sub(MAX_NAMED_RISKS);
        let message = if more > 0 {
            format!("High delivery risk: {named} and {more} more")
        } else {
            format!("High delivery risk: {named}")
        };
        recommendations.push(Recommendation::new(RecommendationKind::Alert, message));
    }

    recommendations
}
