//! Additive initiative risk model.
//!
//! Each factor contributes 0, 1 or 2 points, monotone in its input; the
//! total maps to a level through two thresholds.

use sprintlens_core::config::RiskConfig;
use sprintlens_core::{InitiativeStatus, Sprint};
use tracing::debug;

use super::types::{InitiativeRisk, RiskFactor, RiskFactorScore, RiskFactors, RiskLevel};
use crate::metrics::{calculate_velocity_trend, TrendDirection};
use crate::prioritization::ScoredInitiative;

/// Assess every open initiative, riskiest first.
///
/// Completed and Deprioritized initiatives are skipped. `team_utilization`
/// is the current sprint's completed points over capacity.
pub fn assess_all_initiatives_risk(
    scored: &[ScoredInitiative],
    current_sprint_num: u32,
    sprints: &[Sprint],
    team_utilization: f64,
    config: &RiskConfig,
) -> Vec<InitiativeRisk> {
    let velocity_declining =
        calculate_velocity_trend(sprints).direction == TrendDirection::Declining;

    let mut risks: Vec<InitiativeRisk> = scored
        .iter()
        .filter(|s| !s.status().is_terminal())
        .map(|s| {
            let factors = risk_factors(
                s,
                current_sprint_num,
                team_utilization,
                velocity_declining,
                config,
            );
            let risk_score: u32 = factors.iter().map(|f| f.points).sum();
            InitiativeRisk {
                initiative_id: s.initiative.initiative_id.clone(),
                name: s.initiative.name.clone(),
                risk_score,
                risk_level: RiskLevel::from_score(
                    risk_score,
                    config.effective_medium_threshold(),
                    config.effective_high_threshold(),
                ),
                factors,
            }
        })
        .collect();

    risks.sort_by(|a, b| {
        b.risk_score
            .cmp(&a.risk_score)
            .then_with(|| a.initiative_id.cmp(&b.initiative_id))
    });

    debug!(
        assessed = risks.len(),
        high = risks.iter().filter(|r| r.risk_level == RiskLevel::High).count(),
        velocity_declining,
        "initiative risk assessed"
    );
    risks
}

fn risk_factors(
    scored: &ScoredInitiative,
    current_sprint_num: u32,
    team_utilization: f64,
    velocity_declining: bool,
    config: &RiskConfig,
) -> RiskFactors {
    let initiative = &scored.initiative;
    let mut factors = RiskFactors::new();
    let mut add = |factor: RiskFactor, points: u32| {
        if points > 0 {
            factors.push(RiskFactorScore { factor, points });
        }
    };

    add(
        RiskFactor::Utilization,
        tiered(
            team_utilization > config.effective_overload_utilization(),
            team_utilization > config.effective_high_utilization(),
        ),
    );

    if let Some(start) = initiative.start_sprint {
        let age = current_sprint_num.saturating_sub(start);
        add(
            RiskFactor::Stagnation,
            tiered(
                age >= config.effective_severe_stagnation_sprints(),
                age >= config.effective_stagnation_sprints(),
            ),
        );
    }

    if initiative.status == InitiativeStatus::Active {
        let effort = initiative.effort_score;
        add(
            RiskFactor::Complexity,
            tiered(
                effort >= config.effective_extreme_effort(),
                effort >= config.effective_high_effort(),
            ),
        );
    }

    if initiative.target_sprint.is_some_and(|target| target < current_sprint_num) {
        add(RiskFactor::Schedule, 2);
    }

    if velocity_declining {
        add(RiskFactor::Velocity, 1);
    }

    factors
}

/// 2 for the severe tier, 1 for the elevated tier, else 0.
fn tiered(severe: bool, elevated: bool) -> u32 {
    if severe {
        2
    } else if elevated {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sprintlens_core::{Initiative, RoiEstimate};

    use super::*;
    use crate::prioritization::score_initiatives;

    fn initiative(id: &str, status: InitiativeStatus, effort: f64, start: Option<u32>) -> Initiative {
        Initiative {
            initiative_id: id.to_string(),
            name: format!("Initiative {id}"),
            status,
            impact_score: 6.0,
            effort_score: effort,
            total_story_points: 40.0,
            roi_estimate: RoiEstimate::Medium,
            start_sprint: start,
            target_sprint: None,
        }
    }

    #[test]
    fn test_terminal_initiatives_are_not_assessed() {
        let scored = score_initiatives(
            &[
                initiative("I1", InitiativeStatus::Completed, 9.0, Some(1)),
                initiative("I2", InitiativeStatus::Deprioritized, 9.0, Some(1)),
                initiative("I3", InitiativeStatus::Backlog, 2.0, None),
            ],
            5.0,
        );
        let risks = assess_all_initiatives_risk(&scored, 10, &[], 0.5, &RiskConfig::default());
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].initiative_id, "I3");
        assert_eq!(risks[0].risk_level, RiskLevel::Low);
        assert!(risks[0].factors.is_empty());
    }

    #[test]
    fn test_factors_accumulate_to_high() {
        let scored = score_initiatives(
            &[initiative("I1", InitiativeStatus::Active, 9.5, Some(2))],
            5.0,
        );
        let risks = assess_all_initiatives_risk(&scored, 10, &[], 0.95, &RiskConfig::default());
        // utilization 1 + stagnation 2 + complexity 2
        assert_eq!(risks[0].risk_score, 5);
        assert_eq!(risks[0].risk_level, RiskLevel::High);
        assert_eq!(risks[0].factors.len(), 3);
    }

    #[test]
    fn test_complexity_only_counts_for_active() {
        let scored = score_initiatives(
            &[initiative("I1", InitiativeStatus::Backlog, 9.5, None)],
            5.0,
        );
        let risks = assess_all_initiatives_risk(&scored, 1, &[], 0.5, &RiskConfig::default());
        assert_eq!(risks[0].risk_score, 0);
    }

    fn sprints(velocities: &[f64]) -> Vec<Sprint> {
        velocities
            .iter()
            .enumerate()
            .map(|(i, v)| Sprint {
                sprint_number: i as u32 + 1,
                committed_points: 40.0,
                completed_points: *v,
                team_capacity: 50.0,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_declining_velocity_adds_velocity_factor() {
        let scored = score_initiatives(
            &[initiative("I1", InitiativeStatus::Backlog, 2.0, None)],
            5.0,
        );
        let declining = sprints(&[40.0, 36.0, 32.0, 28.0]);
        let risks = assess_all_initiatives_risk(&scored, 4, &declining, 0.5, &RiskConfig::default());
        assert_eq!(risks[0].risk_score, 1);
        assert_eq!(risks[0].risk_level, RiskLevel::Low);
        assert_eq!(
            risks[0].factors.as_slice(),
            &[RiskFactorScore {
                factor: RiskFactor::Velocity,
                points: 1
            }]
        );

        let rising = sprints(&[28.0, 32.0, 36.0, 40.0]);
        let risks = assess_all_initiatives_risk(&scored, 4, &rising, 0.5, &RiskConfig::default());
        assert!(risks[0].factors.iter().all(|f| f.factor != RiskFactor::Velocity));
    }
}
