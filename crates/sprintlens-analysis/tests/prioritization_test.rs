//! Prioritization engine scenarios over the shared fixture dataset.

use sprintlens_analysis::prediction::{assess_all_initiatives_risk, RiskLevel};
use sprintlens_analysis::prioritization::{self, Quadrant};
use sprintlens_analysis::RecommendationKind;
use sprintlens_core::config::{PortfolioConfig, RiskConfig};
use sprintlens_core::{Dataset, InitiativeStatus};

fn fixture() -> Dataset {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dataset.json");
    Dataset::from_json_file(std::path::Path::new(path)).unwrap()
}

#[test]
fn test_scoring_and_quadrants() {
    let scored = prioritization::score_initiatives(fixture().initiatives(), 5.0);
    let checkout = scored.iter().find(|s| s.id() == "I01").unwrap();
    assert!((checkout.priority_score - 30.0).abs() < 1e-9);
    assert_eq!(checkout.quadrant, Quadrant::QuickWins);

    let quadrants: Vec<Quadrant> = scored.iter().map(|s| s.quadrant).collect();
    assert_eq!(
        quadrants,
        vec![
            Quadrant::QuickWins,
            Quadrant::MajorProjects,
            Quadrant::QuickWins,
            Quadrant::TimeSinks,
            Quadrant::FillIns,
            Quadrant::MajorProjects,
            Quadrant::TimeSinks,
            Quadrant::FillIns,
        ]
    );
}

#[test]
fn test_quick_wins_and_time_sinks() {
    let scored = prioritization::score_initiatives(fixture().initiatives(), 5.0);

    let wins: Vec<&str> = prioritization::get_quick_wins(&scored, None)
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(wins, vec!["I03", "I01"]);
    assert_eq!(prioritization::get_quick_wins(&scored, Some(1)).len(), 1);

    // Both Low ROI; I04 has the lower priority (3.75 vs 5.0).
    let sinks: Vec<&str> = prioritization::get_time_sinks(&scored)
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(sinks, vec!["I04", "I07"]);
}

#[test]
fn test_composition_counts_every_initiative() {
    let scored = prioritization::score_initiatives(fixture().initiatives(), 5.0);
    let composition = prioritization::get_portfolio_composition(&scored);
    let order: Vec<Quadrant> = composition.iter().map(|c| c.quadrant).collect();
    assert_eq!(order, Quadrant::ALL.to_vec());
    assert!(composition.iter().all(|c| c.initiative_count == 2));
    assert_eq!(composition[1].total_points, 200.0);
}

#[test]
fn test_portfolio_health_and_recommendations() {
    let dataset = fixture();
    let scored = prioritization::score_initiatives(dataset.initiatives(), 5.0);
    let risks = assess_all_initiatives_risk(&scored, 8, dataset.sprints(), 0.6, &RiskConfig::default());
    assert_eq!(
        risks.iter().filter(|r| r.risk_level == RiskLevel::High).count(),
        1
    );

    let config = PortfolioConfig::default();
    let health = prioritization::calculate_portfolio_health_score(&scored, &risks, &config);
    assert!((health.completion_ratio - 1.0 / 7.0).abs() < 1e-9);
    assert!((health.alignment_ratio - 180.0 / 275.0).abs() < 1e-9);
    assert!((health.time_sink_ratio - 95.0 / 298.0).abs() < 1e-9);
    assert_eq!(health.health_score, 55);

    let recommendations =
        prioritization::generate_portfolio_recommendations(&scored, &health, &risks, &config);
    let kinds: Vec<RecommendationKind> = recommendations.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecommendationKind::Optimization,
            RecommendationKind::Opportunity,
            RecommendationKind::Optimization,
            RecommendationKind::Alert,
        ]
    );
    assert!(recommendations[0].message.starts_with("Only 65%"));
    assert_eq!(
        recommendations[1].message,
        "1 Quick Win initiatives ready for immediate delivery"
    );
    assert_eq!(
        recommendations[2].message,
        "Deprioritize 2 Time Sink initiatives to free capacity"
    );
}

#[test]
fn test_empty_portfolio_is_neutral() {
    let health =
        prioritization::calculate_portfolio_health_score(&[], &[], &PortfolioConfig::default());
    assert_eq!(health.completion_ratio, 0.0);
    assert_eq!(health.alignment_ratio, 0.5);
    assert_eq!(health.high_risk_ratio, 0.0);
    // 0.30·0 + 0.40·0.5 + 0.30·1
    assert_eq!(health.health_score, 50);
}

#[test]
fn test_intake_funnel() {
    let funnel = prioritization::create_intake_funnel_data(fixture().initiatives());
    let stages: Vec<(InitiativeStatus, usize)> =
        funnel.stages.iter().map(|s| (s.stage, s.count)).collect();
    assert_eq!(
        stages,
        vec![
            (InitiativeStatus::Backlog, 7),
            (InitiativeStatus::Active, 4),
            (InitiativeStatus::Completed, 1),
        ]
    );
    assert_eq!(funnel.deprioritized, 1);
    assert!((funnel.stages[2].conversion - 0.25).abs() < 1e-9);
}
