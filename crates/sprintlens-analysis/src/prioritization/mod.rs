//! Prioritization Engine: priority scores, Impact/Effort quadrants,
//! portfolio composition and health, and the intake funnel.

pub mod funnel;
pub mod portfolio;
pub mod scoring;
pub mod types;

pub use funnel::create_intake_funnel_data;
pub use portfolio::{calculate_portfolio_health_score, generate_portfolio_recommendations};
pub use scoring::{
    get_portfolio_composition, get_quick_wins, get_time_sinks, priority_score, score_initiatives,
};
pub use types::{
    FunnelStage, IntakeFunnel, PortfolioHealth, Quadrant, QuadrantCount, ScoredInitiative,
};
