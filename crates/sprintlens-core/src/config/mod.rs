//! Configuration system for SprintLens.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod bottleneck_config;
pub mod forecast_config;
pub mod health_config;
pub mod portfolio_config;
pub mod risk_config;
pub mod simulation_config;
pub mod sprintlens_config;

pub use bottleneck_config::BottleneckConfig;
pub use forecast_config::ForecastConfig;
pub use health_config::HealthConfig;
pub use portfolio_config::PortfolioConfig;
pub use risk_config::RiskConfig;
pub use simulation_config::SimulationConfig;
pub use sprintlens_config::{ConfigOverrides, SprintLensConfig};
