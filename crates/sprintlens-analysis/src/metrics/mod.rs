//! Metrics Engine: descriptive statistics over the sprint and story tables.
//!
//! Every aggregation tolerates empty partitions and returns a neutral
//! result instead of failing.

pub mod blockers;
pub mod bottlenecks;
pub mod cycle_time;
pub mod health;
pub mod quality;
pub mod rolling;
pub mod summary;
pub mod team;
pub mod types;
pub mod velocity;

pub use blockers::calculate_blocker_impact;
pub use bottlenecks::identify_bottlenecks;
pub use cycle_time::calculate_cycle_time_metrics;
pub use health::calculate_sprint_health_score;
pub use quality::calculate_quality_trend;
pub use rolling::calculate_rolling_metrics;
pub use summary::{
    calculate_capacity_heatmap, calculate_story_type_distribution, calculate_team_member_metrics,
    get_initiative_summary, get_sprint_summary_stats, CapacityHeatmap, HeatmapRow,
    InitiativeSummary, SprintSummaryStats, SprintTypeDistribution, StatusCount,
    TeamMemberMetrics,
};
pub use team::{calculate_team_velocity_contribution, calculate_work_distribution_by_role};
pub use types::{
    BlockerImpact, Bottleneck, BottleneckKind, CycleTimeMetrics, HealthBand, MemberContribution,
    QualityPoint, QualityTrend, RoleDistribution, SprintBlockers, SprintHealth, SprintMetrics,
    TrendDirection, TypeBlockers, TypeCycleTime, TypePoints, VelocityTrend,
};
pub use velocity::calculate_velocity_trend;
