//! AnalysisSession: one loaded dataset plus its derived tables.
//!
//! Derived rows (`SprintMetrics`, `ScoredInitiative`, initiative risk) are
//! computed once on construction and reused by every later call.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use sprintlens_core::constants::{
    DEFAULT_FORECAST_HORIZON, DEFAULT_HEATMAP_SPRINTS, DEFAULT_QUICK_WIN_LIMIT, VERSION,
};
use sprintlens_core::{AnalysisError, Dataset, LookupError, Sprint, SprintLensConfig};
use tracing::info;

use crate::metrics::{
    self, BlockerImpact, Bottleneck, CapacityHeatmap, CycleTimeMetrics, InitiativeSummary,
    MemberContribution, QualityTrend, RoleDistribution, SprintHealth, SprintMetrics,
    SprintSummaryStats, SprintTypeDistribution, TeamMemberMetrics, VelocityTrend,
};
use crate::prediction::{
    self, CompletionForecast, InitiativeRisk, ProbabilityDistribution, VelocityForecast,
};
use crate::prioritization::{
    self, IntakeFunnel, PortfolioHealth, QuadrantCount, ScoredInitiative,
};
use crate::recommendation::Recommendation;

pub struct AnalysisSession {
    dataset: Dataset,
    config: SprintLensConfig,
    sprint_metrics: Vec<SprintMetrics>,
    scored: Vec<ScoredInitiative>,
    risks: Vec<InitiativeRisk>,
}

impl AnalysisSession {
    /// Validate `config` and derive the per-sprint and per-initiative tables.
    pub fn new(dataset: Dataset, config: SprintLensConfig) -> Result<Self, AnalysisError> {
        SprintLensConfig::validate(&config)?;

        let sprint_metrics = metrics::calculate_rolling_metrics(
            dataset.sprints(),
            config.health.effective_rolling_window(),
        );
        let scored = prioritization::score_initiatives(
            dataset.initiatives(),
            config.portfolio.effective_quadrant_threshold(),
        );

        let current = dataset.current_sprint();
        let risks = prediction::assess_all_initiatives_risk(
            &scored,
            current.sprint_number,
            dataset.sprints(),
            current.utilization(),
            &config.risk,
        );

        info!(
            version = VERSION,
            sprints = dataset.sprints().len(),
            stories = dataset.stories().len(),
            initiatives = scored.len(),
            current_sprint = current.sprint_number,
            "analysis session ready"
        );

        Ok(Self {
            dataset,
            config,
            sprint_metrics,
            scored,
            risks,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &SprintLensConfig {
        &self.config
    }

    /// Sprints with their rolling-average velocity, ordered by number.
    pub fn sprint_metrics(&self) -> &[SprintMetrics] {
        &self.sprint_metrics
    }

    /// Initiatives with priority score and quadrant, in dataset order.
    pub fn scored_initiatives(&self) -> &[ScoredInitiative] {
        &self.scored
    }

    pub fn current_sprint(&self) -> &Sprint {
        self.dataset.current_sprint()
    }

    /// Completed points / capacity of the current sprint.
    pub fn team_utilization(&self) -> f64 {
        self.current_sprint().utilization()
    }

    // ---- Metrics ----

    pub fn sprint_health(&self, sprint_number: u32) -> Result<SprintHealth, LookupError> {
        let sprint = self.dataset.sprint(sprint_number)?;
        Ok(self.health_of(sprint))
    }

    pub fn current_sprint_health(&self) -> SprintHealth {
        self.health_of(self.current_sprint())
    }

    fn health_of(&self, sprint: &Sprint) -> SprintHealth {
        metrics::calculate_sprint_health_score(
            sprint,
            self.dataset.sprints(),
            self.dataset.stories(),
            &self.config.health,
        )
    }

    pub fn velocity_trend(&self) -> VelocityTrend {
        metrics::calculate_velocity_trend(self.dataset.sprints())
    }

    pub fn cycle_time_metrics(&self) -> CycleTimeMetrics {
        metrics::calculate_cycle_time_metrics(self.dataset.stories())
    }

    pub fn blocker_impact(&self) -> BlockerImpact {
        metrics::calculate_blocker_impact(self.dataset.stories())
    }

    pub fn team_velocity_contribution(&self) -> Vec<MemberContribution> {
        metrics::calculate_team_velocity_contribution(self.dataset.stories(), self.dataset.team())
    }

    pub fn bottlenecks(&self) -> Vec<Bottleneck> {
        metrics::identify_bottlenecks(
            self.dataset.stories(),
            self.dataset.team(),
            &self.config.bottleneck,
        )
    }

    pub fn quality_trend(&self) -> QualityTrend {
        metrics::calculate_quality_trend(self.dataset.stories())
    }

    pub fn work_distribution_by_role(&self) -> Vec<RoleDistribution> {
        metrics::calculate_work_distribution_by_role(self.dataset.stories(), self.dataset.team())
    }

    pub fn sprint_summary_stats(&self) -> SprintSummaryStats {
        metrics::get_sprint_summary_stats(self.dataset.sprints())
    }

    pub fn story_type_distribution(&self) -> Vec<SprintTypeDistribution> {
        metrics::calculate_story_type_distribution(self.dataset.stories())
    }

    pub fn team_member_metrics(&self) -> Vec<TeamMemberMetrics> {
        metrics::calculate_team_member_metrics(self.dataset.stories(), self.dataset.team())
    }

    pub fn initiative_summary(&self) -> InitiativeSummary {
        metrics::get_initiative_summary(self.dataset.initiatives())
    }

    pub fn capacity_heatmap(&self, last_n: usize) -> CapacityHeatmap {
        metrics::calculate_capacity_heatmap(
            self.dataset.stories(),
            self.dataset.team(),
            self.dataset.sprints(),
            last_n,
        )
    }

    // ---- Prioritization ----

    pub fn quick_wins(&self, limit: Option<usize>) -> Vec<&ScoredInitiative> {
        prioritization::get_quick_wins(&self.scored, limit)
    }

    pub fn time_sinks(&self) -> Vec<&ScoredInitiative> {
        prioritization::get_time_sinks(&self.scored)
    }

    pub fn portfolio_composition(&self) -> Vec<QuadrantCount> {
        prioritization::get_portfolio_composition(&self.scored)
    }

    pub fn portfolio_health(&self) -> PortfolioHealth {
        prioritization::calculate_portfolio_health_score(
            &self.scored,
            &self.risks,
            &self.config.portfolio,
        )
    }

    pub fn portfolio_recommendations(&self) -> Vec<Recommendation> {
        prioritization::generate_portfolio_recommendations(
            &self.scored,
            &self.portfolio_health(),
            &self.risks,
            &self.config.portfolio,
        )
    }

    pub fn intake_funnel(&self) -> IntakeFunnel {
        prioritization::create_intake_funnel_data(self.dataset.initiatives())
    }

    // ---- Prediction ----

    /// Open initiatives with their risk, riskiest first.
    pub fn initiative_risks(&self) -> &[InitiativeRisk] {
        &self.risks
    }

    /// Monte Carlo completion forecast seeded from `simulation.seed`.
    ///
    /// The same session and sprint always produce the same forecast.
    pub fn completion_forecast(
        &self,
        sprint_number: u32,
    ) -> Result<CompletionForecast, LookupError> {
        let sprint = self.dataset.sprint(sprint_number)?;
        Ok(self.forecast_for(sprint))
    }

    pub fn current_completion_forecast(&self) -> CompletionForecast {
        self.forecast_for(self.current_sprint())
    }

    fn forecast_for(&self, sprint: &Sprint) -> CompletionForecast {
        let mut rng = StdRng::seed_from_u64(self.config.simulation.effective_seed());
        prediction::predict_sprint_completion_probability(
            sprint,
            self.dataset.sprints(),
            &self.config.simulation,
            &mut rng,
        )
    }

    pub fn probability_distribution(
        &self,
        sprint_number: u32,
    ) -> Result<ProbabilityDistribution, LookupError> {
        let forecast = self.completion_forecast(sprint_number)?;
        Ok(prediction::calculate_probability_distribution_chart_data(
            &forecast,
            self.config.simulation.effective_histogram_bins(),
        ))
    }

    pub fn velocity_forecast(&self, n: usize) -> VelocityForecast {
        prediction::forecast_velocity_next_n_sprints(self.dataset.sprints(), n, &self.config.forecast)
    }

    /// Recommendations for the current sprint and the default forecast horizon.
    pub fn predictive_recommendations(&self) -> Vec<Recommendation> {
        prediction::generate_predictive_recommendations(
            &self.current_completion_forecast(),
            &self.velocity_forecast(DEFAULT_FORECAST_HORIZON),
            &self.risks,
        )
    }

    // ---- Export ----

    /// Every dashboard figure for the current sprint in one serializable record.
    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            current_sprint: self.current_sprint().sprint_number,
            summary: self.sprint_summary_stats(),
            sprint_metrics: &self.sprint_metrics,
            health: self.current_sprint_health(),
            velocity_trend: self.velocity_trend(),
            cycle_time: self.cycle_time_metrics(),
            blockers: self.blocker_impact(),
            bottlenecks: self.bottlenecks(),
            quality: self.quality_trend(),
            capacity_heatmap: self.capacity_heatmap(DEFAULT_HEATMAP_SPRINTS),
            initiatives: &self.scored,
            quick_wins: self.quick_wins(Some(DEFAULT_QUICK_WIN_LIMIT)),
            composition: self.portfolio_composition(),
            portfolio_health: self.portfolio_health(),
            funnel: self.intake_funnel(),
            risks: &self.risks,
            completion: self.current_completion_forecast(),
            velocity_forecast: self.velocity_forecast(DEFAULT_FORECAST_HORIZON),
            portfolio_recommendations: self.portfolio_recommendations(),
            predictive_recommendations: self.predictive_recommendations(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

/// Serializable view of a session, borrowing its derived tables.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub current_sprint: u32,
    pub summary: SprintSummaryStats,
    pub sprint_metrics: &'a [SprintMetrics],
    pub health: SprintHealth,
    pub velocity_trend: VelocityTrend,
    pub cycle_time: CycleTimeMetrics,
    pub blockers: BlockerImpact,
    pub bottlenecks: Vec<Bottleneck>,
    pub quality: QualityTrend,
    pub capacity_heatmap: CapacityHeatmap,
    pub initiatives: &'a [ScoredInitiative],
    pub quick_wins: Vec<&'a ScoredInitiative>,
    pub composition: Vec<QuadrantCount>,
    pub portfolio_health: PortfolioHealth,
    pub funnel: IntakeFunnel,
    pub risks: &'a [InitiativeRisk],
    pub completion: CompletionForecast,
    pub velocity_forecast: VelocityForecast,
    pub portfolio_recommendations: Vec<Recommendation>,
    pub predictive_recommendations: Vec<Recommendation>,
}
