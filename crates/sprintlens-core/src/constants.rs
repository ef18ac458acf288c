//! Shared constants for the SprintLens analytics engine.

/// SprintLens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "sprintlens.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SPRINTLENS_LOG";

// ---- Sprint health ----

/// Default weight of the completion-rate sub-score.
pub const DEFAULT_HEALTH_COMPLETION_WEIGHT: f64 = 0.40;

/// Default weight of the velocity-consistency sub-score.
pub const DEFAULT_HEALTH_CONSISTENCY_WEIGHT: f64 = 0.30;

/// Default weight of the estimation-accuracy sub-score.
pub const DEFAULT_HEALTH_ESTIMATION_WEIGHT: f64 = 0.30;

/// Sub-score used when there is not enough data to compute one.
pub const NEUTRAL_SUB_SCORE: f64 = 50.0;

/// Health score at or above which a sprint is "Healthy".
pub const HEALTHY_BAND_MIN: u8 = 80;

/// Health score at or above which a sprint is "Moderate".
pub const MODERATE_BAND_MIN: u8 = 60;

/// Default trailing window for rolling velocity averages.
pub const DEFAULT_ROLLING_WINDOW: usize = 3;

/// Velocity slope (points per sprint) beyond which a trend is not "Stable".
pub const TREND_SLOPE_THRESHOLD: f64 = 0.5;

// ---- Portfolio ----

/// Default impact/effort midpoint for quadrant classification.
pub const DEFAULT_QUADRANT_THRESHOLD: f64 = 5.0;

/// Floor applied to effort scores before dividing.
pub const MIN_EFFORT_SCORE: f64 = 0.1;

/// Share of effort on Quick Wins + Major Projects considered healthy.
pub const DEFAULT_HIGH_VALUE_TARGET: f64 = 0.75;

/// Default weight of the initiative completion ratio.
pub const DEFAULT_PORTFOLIO_COMPLETION_WEIGHT: f64 = 0.30;

/// Default weight of the high-value effort alignment ratio.
pub const DEFAULT_PORTFOLIO_ALIGNMENT_WEIGHT: f64 = 0.40;

/// Default weight of the (inverted) high-risk ratio.
pub const DEFAULT_PORTFOLIO_RISK_WEIGHT: f64 = 0.30;

// ---- Risk ----

/// Team utilization above which delivery risk rises.
pub const DEFAULT_HIGH_UTILIZATION: f64 = 0.90;

/// Team utilization above which the team is overloaded.
pub const DEFAULT_OVERLOAD_UTILIZATION: f64 = 1.0;

/// Sprints in Backlog/Active before an initiative counts as stagnating.
pub const DEFAULT_STAGNATION_SPRINTS: u32 = 3;

/// Sprints in Backlog/Active before stagnation is severe.
pub const DEFAULT_SEVERE_STAGNATION_SPRINTS: u32 = 6;

/// Effort score at or above which an active initiative is complex.
pub const DEFAULT_HIGH_EFFORT: f64 = 7.0;

/// Effort score at or above which an active initiative is very complex.
pub const DEFAULT_EXTREME_EFFORT: f64 = 9.0;

/// Risk points at or above which an initiative is Medium risk.
pub const DEFAULT_MEDIUM_RISK_THRESHOLD: u32 = 2;

/// Risk points at or above which an initiative is High risk.
pub const DEFAULT_HIGH_RISK_THRESHOLD: u32 = 4;

// ---- Forecast & simulation ----

/// Default number of trailing sprints used to fit the velocity trend.
pub const DEFAULT_TREND_WINDOW: usize = 6;

/// Default two-sided confidence level of the forecast band.
pub const DEFAULT_FORECAST_CONFIDENCE: f64 = 0.80;

/// Sprints ahead covered by the dashboard velocity forecast.
pub const DEFAULT_FORECAST_HORIZON: usize = 3;

/// Default Monte Carlo trial count.
pub const DEFAULT_SIMULATION_TRIALS: u32 = 1000;

/// Hard upper bound on Monte Carlo trials.
pub const MAX_SIMULATION_TRIALS: u32 = 100_000;

/// Default number of prior sprints feeding the completion-rate distribution.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Default Monte Carlo seed.
pub const DEFAULT_SIMULATION_SEED: u64 = 42;

/// Default histogram bin count for the probability distribution chart.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

// ---- Bottlenecks ----

/// Assigned points / capacity above which a member is a bottleneck.
pub const DEFAULT_OVERLOAD_RATIO: f64 = 1.0;

/// Share of blocked stories in a type that flags blocked work.
pub const DEFAULT_BLOCKED_SHARE: f64 = 0.15;

/// Relative excess over the overall mean cycle time that flags a slow type.
pub const DEFAULT_CYCLE_TIME_EXCESS: f64 = 0.25;

/// Label used for work without an assignee or role.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

// ---- Dashboard ----

/// Trailing sprints shown on the capacity heatmap.
pub const DEFAULT_HEATMAP_SPRINTS: usize = 6;

/// Quick Wins listed on the portfolio overview.
pub const DEFAULT_QUICK_WIN_LIMIT: usize = 5;
