//! Metrics engine scenarios over the shared fixture dataset.

use sprintlens_analysis::metrics::{self, BottleneckKind, HealthBand, TrendDirection};
use sprintlens_core::config::{BottleneckConfig, HealthConfig};
use sprintlens_core::{Dataset, StoryType};

fn fixture() -> Dataset {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dataset.json");
    Dataset::from_json_file(std::path::Path::new(path)).unwrap()
}

#[test]
fn test_rolling_metrics_follow_sprints() {
    let dataset = fixture();
    let rows = metrics::calculate_rolling_metrics(dataset.sprints(), 3);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].rolling_avg_velocity, 34.0);
    assert!((rows[1].rolling_avg_velocity - 36.0).abs() < 1e-9);
    // Sprints 6..=8: 44, 43, 30.
    assert!((rows[7].rolling_avg_velocity - 39.0).abs() < 1e-9);
}

#[test]
fn test_current_sprint_health() {
    let dataset = fixture();
    let health = metrics::calculate_sprint_health_score(
        dataset.current_sprint(),
        dataset.sprints(),
        dataset.stories(),
        &HealthConfig::default(),
    );
    assert_eq!(health.sprint_number, 8);
    assert!((health.completion_score - 62.5).abs() < 1e-9);
    assert!((health.estimation_score - 86.666_666).abs() < 1e-3);
    assert_eq!(health.health_score, 77);
    assert_eq!(health.band, HealthBand::Moderate);
}

#[test]
fn test_single_sprint_health_uses_neutral_consistency() {
    let dataset = fixture();
    let first = &dataset.sprints()[..1];
    let health = metrics::calculate_sprint_health_score(
        &first[0],
        first,
        &[],
        &HealthConfig::default(),
    );
    assert_eq!(health.consistency_score, 50.0);
    assert_eq!(health.estimation_score, 50.0);
    assert!(health.health_score <= 100);
}

#[test]
fn test_velocity_trend_is_stable() {
    let trend = metrics::calculate_velocity_trend(fixture().sprints());
    assert!((trend.slope - 0.238_095).abs() < 1e-5);
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert!((trend.mean_velocity - 38.25).abs() < 1e-9);
    assert!(trend.predictability > 0.8 && trend.predictability < 0.9);
}

#[test]
fn test_cycle_time_over_completed_stories() {
    let cycle = metrics::calculate_cycle_time_metrics(fixture().stories());
    assert_eq!(cycle.sample_size, 37);
    assert_eq!(cycle.min_days, 2.0);
    assert_eq!(cycle.max_days, 9.0);
    assert_eq!(cycle.median_days, 5.0);
    assert_eq!(cycle.p85_days, 6.0);
    let debt = cycle
        .by_type
        .iter()
        .find(|t| t.story_type == StoryType::TechnicalDebt)
        .unwrap();
    assert_eq!(debt.sample_size, 7);
}

#[test]
fn test_cycle_time_empty() {
    let cycle = metrics::calculate_cycle_time_metrics(&[]);
    assert!(cycle.is_empty());
    assert_eq!(cycle, metrics::CycleTimeMetrics::empty());
}

#[test]
fn test_blocker_impact() {
    let impact = metrics::calculate_blocker_impact(fixture().stories());
    assert_eq!(impact.blocked_count, 2);
    assert_eq!(impact.blocked_points, 13.0);
    assert_eq!(impact.total_points, 194.0);
    let sprints: Vec<u32> = impact.per_sprint.iter().map(|s| s.sprint_number).collect();
    assert_eq!(sprints, vec![3, 8]);

    let empty = metrics::calculate_blocker_impact(&[]);
    assert_eq!(empty.blocked_ratio, 0.0);
    assert!(empty.per_sprint.is_empty());
}

#[test]
fn test_team_contribution_ranked() {
    let dataset = fixture();
    let contribution =
        metrics::calculate_team_velocity_contribution(dataset.stories(), dataset.team());
    let ids: Vec<&str> = contribution.iter().map(|c| c.member_id.as_str()).collect();
    assert_eq!(ids, vec!["M3", "M1", "M2", "M4"]);
    assert_eq!(contribution[0].points, 62.0);
    let share_sum: f64 = contribution.iter().map(|c| c.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_bottlenecks_flag_slow_technical_debt() {
    let dataset = fixture();
    let found = metrics::identify_bottlenecks(
        dataset.stories(),
        dataset.team(),
        &BottleneckConfig::default(),
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, BottleneckKind::SlowCycleTime);
    assert_eq!(found[0].subject, "Technical Debt");
    assert!(found[0].severity >= 1.0);
}

#[test]
fn test_quality_trend_flat_bug_ratio() {
    let quality = metrics::calculate_quality_trend(fixture().stories());
    assert_eq!(quality.points.len(), 8);
    assert!(quality.points.iter().all(|p| (p.bug_ratio - 0.2).abs() < 1e-9));
    assert_eq!(quality.direction, TrendDirection::Stable);

    let empty = metrics::calculate_quality_trend(&[]);
    assert!(empty.points.is_empty());
    assert_eq!(empty.direction, TrendDirection::Stable);
}

#[test]
fn test_work_distribution_by_role() {
    let dataset = fixture();
    let roles = metrics::calculate_work_distribution_by_role(dataset.stories(), dataset.team());
    let names: Vec<&str> = roles.iter().map(|r| r.role.as_str()).collect();
    assert_eq!(names, vec!["QA", "Frontend", "Backend", "Unassigned"]);
    assert_eq!(roles[3].points, 25.0);
    assert!(roles.iter().all(|r| r.by_type.len() == StoryType::ALL.len()));
}

#[test]
fn test_dataset_summaries() {
    let dataset = fixture();

    let summary = metrics::get_sprint_summary_stats(dataset.sprints());
    assert_eq!(summary.total_sprints, 8);
    assert_eq!(summary.total_delivered, 306.0);
    assert_eq!(summary.best_sprint, Some(6));
    assert_eq!(summary.worst_sprint, Some(8));
    assert_eq!(metrics::get_sprint_summary_stats(&[]).best_sprint, None);

    let distribution = metrics::calculate_story_type_distribution(dataset.stories());
    assert_eq!(distribution.len(), 8);
    let total: f64 = distribution
        .iter()
        .flat_map(|d| d.by_type.iter())
        .map(|t| t.points)
        .sum();
    assert_eq!(total, 194.0);

    let members = metrics::calculate_team_member_metrics(dataset.stories(), dataset.team());
    let m1 = members.iter().find(|m| m.member_id == "M1").unwrap();
    assert_eq!(m1.story_count, 15);
    assert_eq!(m1.assigned_points, 53.0);
    assert_eq!(m1.completed_points, 48.0);

    let initiatives = metrics::get_initiative_summary(dataset.initiatives());
    assert_eq!(initiatives.total_initiatives, 8);
    assert_eq!(initiatives.by_status.len(), 4);
    assert_eq!(initiatives.by_status.iter().map(|s| s.count).sum::<usize>(), 8);

    let heatmap =
        metrics::calculate_capacity_heatmap(dataset.stories(), dataset.team(), dataset.sprints(), 6);
    assert_eq!(heatmap.sprint_numbers, vec![3, 4, 5, 6, 7, 8]);
    assert_eq!(heatmap.rows.len(), 4);
    assert_eq!(heatmap.rows[0].label, "Alice");
    assert!(heatmap.rows.iter().all(|r| r.utilization_pct.len() == 6));
}
