//! Property-based tests for the engine invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - priority score formula and quadrant totality
//!   - sprint health bounds
//!   - velocity forecast length
//!   - Monte Carlo determinism and monotonicity in committed points
//!   - risk level monotonicity

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sprintlens_analysis::metrics::{calculate_rolling_metrics, calculate_sprint_health_score};
use sprintlens_analysis::prediction::{
    assess_all_initiatives_risk, forecast_velocity_next_n_sprints,
    predict_sprint_completion_probability,
};
use sprintlens_analysis::prioritization::{
    get_portfolio_composition, priority_score, score_initiatives, Quadrant,
};
use sprintlens_core::config::{ForecastConfig, HealthConfig, RiskConfig, SimulationConfig};
use sprintlens_core::{Initiative, InitiativeStatus, RoiEstimate, Sprint};

fn sprint(number: u32, committed: f64, completed: f64) -> Sprint {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        + chrono::Duration::days(14 * i64::from(number));
    Sprint {
        sprint_number: number,
        committed_points: committed,
        completed_points: completed,
        team_capacity: 60.0,
        start_date: start,
        end_date: start + chrono::Duration::days(13),
    }
}

fn sprints_strategy() -> impl Strategy<Value = Vec<Sprint>> {
    prop::collection::vec((1.0f64..60.0, 0.0f64..60.0), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (committed, completed))| sprint(i as u32 + 1, committed, completed))
            .collect()
    })
}

fn initiative(
    impact: f64,
    effort: f64,
    status: InitiativeStatus,
    start: Option<u32>,
    target: Option<u32>,
) -> Initiative {
    Initiative {
        initiative_id: "I1".to_string(),
        name: "Initiative".to_string(),
        status,
        impact_score: impact,
        effort_score: effort,
        total_story_points: 10.0,
        roi_estimate: RoiEstimate::Medium,
        start_sprint: start,
        target_sprint: target,
    }
}

proptest! {
    #[test]
    fn prop_priority_score_formula(impact in 0.0f64..=10.0, effort in 0.1f64..=10.0) {
        let score = priority_score(impact, effort);
        prop_assert!((score - impact * 10.0 / effort).abs() < 1e-9);
    }

    #[test]
    fn prop_zero_effort_never_divides_by_zero(impact in 0.0f64..=10.0) {
        prop_assert!(priority_score(impact, 0.0).is_finite());
    }

    /// Every initiative lands in exactly one quadrant; composition covers them all.
    #[test]
    fn prop_composition_totals(
        scores in prop::collection::vec((0.0f64..=10.0, 0.0f64..=10.0), 0..40),
        threshold in 0.0f64..=10.0,
    ) {
        let initiatives: Vec<Initiative> = scores
            .iter()
            .map(|(i, e)| initiative(*i, *e, InitiativeStatus::Backlog, None, None))
            .collect();
        let scored = score_initiatives(&initiatives, threshold);
        let composition = get_portfolio_composition(&scored);
        prop_assert_eq!(composition.len(), Quadrant::ALL.len());
        let total: usize = composition.iter().map(|c| c.initiative_count).sum();
        prop_assert_eq!(total, initiatives.len());
    }

    #[test]
    fn prop_health_bounded(sprints in sprints_strategy()) {
        let config = HealthConfig::default();
        for current in &sprints {
            let health = calculate_sprint_health_score(current, &sprints, &[], &config);
            prop_assert!(health.health_score <= 100);
            for sub in [health.completion_score, health.consistency_score, health.estimation_score] {
                prop_assert!((0.0..=100.0).contains(&sub));
            }
        }
    }

    #[test]
    fn prop_rolling_starts_at_first_velocity(sprints in sprints_strategy(), window in 1usize..6) {
        let rows = calculate_rolling_metrics(&sprints, window);
        prop_assert_eq!(rows.len(), sprints.len());
        prop_assert_eq!(rows[0].rolling_avg_velocity, sprints[0].velocity());
    }

    #[test]
    fn prop_forecast_returns_n_points(sprints in sprints_strategy(), n in 0usize..10) {
        let forecast = forecast_velocity_next_n_sprints(&sprints, n, &ForecastConfig::default());
        prop_assert_eq!(forecast.points.len(), n);
        for p in &forecast.points {
            prop_assert!(p.lower >= 0.0 && p.lower <= p.velocity && p.velocity <= p.upper);
        }
    }

    #[test]
    fn prop_single_sprint_forecast_repeats_velocity(velocity in 0.0f64..60.0, n in 1usize..8) {
        let history = [sprint(1, 60.0, velocity)];
        let forecast = forecast_velocity_next_n_sprints(&history, n, &ForecastConfig::default());
        prop_assert!(forecast.points.iter().all(|p| p.velocity == velocity));
    }

    #[test]
    fn prop_completion_deterministic_and_monotone(
        sprints in sprints_strategy(),
        committed in 0.0f64..80.0,
        cut in 0.0f64..40.0,
        seed in any::<u64>(),
    ) {
        let config = SimulationConfig { trials: Some(200), ..Default::default() };
        let next = sprints.len() as u32 + 1;
        let run = |points: f64| {
            predict_sprint_completion_probability(
                &sprint(next, points, 0.0),
                &sprints,
                &config,
                &mut StdRng::seed_from_u64(seed),
            )
        };

        let full = run(committed);
        prop_assert_eq!(&full, &run(committed));
        prop_assert!((0.0..=1.0).contains(&full.probability));

        let reduced = run((committed - cut).max(0.0));
        prop_assert!(reduced.probability >= full.probability);
    }

    /// Raising any single risk input never lowers the level.
    #[test]
    fn prop_risk_level_monotone(
        effort in 0.0f64..=10.0,
        extra_effort in 0.0f64..=5.0,
        start in 1u32..10,
        target in 1u32..20,
        utilization in 0.0f64..1.5,
        extra_utilization in 0.0f64..0.5,
        current in 10u32..20,
        later in 0u32..5,
    ) {
        let config = RiskConfig::default();
        let assess = |effort: f64, start: u32, utilization: f64, current: u32| {
            let scored = score_initiatives(
                &[initiative(5.0, effort.min(10.0), InitiativeStatus::Active, Some(start), Some(target))],
                5.0,
            );
            assess_all_initiatives_risk(&scored, current, &[], utilization, &config)[0].clone()
        };

        let base = assess(effort, start, utilization, current);
        for raised in [
            assess(effort + extra_effort, start, utilization, current),
            assess(effort, start, utilization + extra_utilization, current),
            assess(effort, start, utilization, current + later),
        ] {
            prop_assert!(raised.risk_score >= base.risk_score);
            prop_assert!(raised.risk_level >= base.risk_level);
        }
    }
}
