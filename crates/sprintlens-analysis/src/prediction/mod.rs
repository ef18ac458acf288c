//! Predictive Engine: completion probability, initiative risk, and
//! velocity forecasting.

pub mod distribution;
pub mod forecast;
pub mod monte_carlo;
pub mod recommendations;
pub mod risk;
pub mod types;

pub use distribution::calculate_probability_distribution_chart_data;
pub use forecast::forecast_velocity_next_n_sprints;
pub use monte_carlo::predict_sprint_completion_probability;
pub use recommendations::generate_predictive_recommendations;
pub use risk::assess_all_initiatives_risk;
pub use types::{
    CompletionForecast, ForecastMethod, ForecastPoint, HistogramBin, InitiativeRisk,
    ProbabilityDistribution, RiskFactor, RiskFactorScore, RiskFactors, RiskLevel,
    SimulationMethod, VelocityForecast,
};
