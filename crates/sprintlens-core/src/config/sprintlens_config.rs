//! Top-level SprintLens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BottleneckConfig, ForecastConfig, HealthConfig, PortfolioConfig, RiskConfig,
    SimulationConfig,
};
use crate::constants::{CONFIG_FILE_NAME, MAX_SIMULATION_TRIALS};
use crate::errors::ConfigError;

/// Tolerance when checking that a weight set sums to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `ConfigOverrides`)
/// 2. Environment variables (`SPRINTLENS_*`)
/// 3. Project config (`sprintlens.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SprintLensConfig {
    pub health: HealthConfig,
    pub portfolio: PortfolioConfig,
    pub risk: RiskConfig,
    pub forecast: ForecastConfig,
    pub simulation: SimulationConfig,
    pub bottleneck: BottleneckConfig,
}

/// Overrides supplied by the embedding application (highest priority).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub simulation_seed: Option<u64>,
    pub simulation_trials: Option<u32>,
    pub quadrant_threshold: Option<f64>,
    pub forecast_confidence: Option<f64>,
}

/// Copy every `Some` field of `$other.$section` onto `$base.$section`.
macro_rules! merge_section {
    ($base:expr, $other:expr, $section:ident { $($field:ident),+ $(,)? }) => {
        $(
            if $other.$section.$field.is_some() {
                $base.$section.$field = $other.$section.$field;
            }
        )+
    };
}

impl SprintLensConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing project file is not an error; an unparsable one is.
    pub fn load(
        root: &Path,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the effective configuration values.
    pub fn validate(config: &SprintLensConfig) -> Result<(), ConfigError> {
        let health = &config.health;
        check_weights(
            "health",
            &[
                health.effective_completion_weight(),
                health.effective_consistency_weight(),
                health.effective_estimation_weight(),
            ],
        )?;
        if health.effective_rolling_window() == 0 {
            return Err(validation("health.rolling_window", "must be at least 1"));
        }

        let portfolio = &config.portfolio;
        check_weights(
            "portfolio",
            &[
                portfolio.effective_completion_weight(),
                portfolio.effective_alignment_weight(),
                portfolio.effective_risk_weight(),
            ],
        )?;
        if !(0.0..=10.0).contains(&portfolio.effective_quadrant_threshold()) {
            return Err(validation(
                "portfolio.quadrant_threshold",
                "must be between 0.0 and 10.0",
            ));
        }
        if !(0.0..=1.0).contains(&portfolio.effective_high_value_target()) {
            return Err(validation(
                "portfolio.high_value_target",
                "must be between 0.0 and 1.0",
            ));
        }

        let risk = &config.risk;
        if risk.effective_overload_utilization() < risk.effective_high_utilization() {
            return Err(validation(
                "risk.overload_utilization",
                "must be at least risk.high_utilization",
            ));
        }
        if risk.effective_severe_stagnation_sprints() < risk.effective_stagnation_sprints() {
            return Err(validation(
                "risk.severe_stagnation_sprints",
                "must be at least risk.stagnation_sprints",
            ));
        }
        if risk.effective_extreme_effort() < risk.effective_high_effort() {
            return Err(validation(
                "risk.extreme_effort",
                "must be at least risk.high_effort",
            ));
        }
        if risk.effective_high_threshold() < risk.effective_medium_threshold() {
            return Err(validation(
                "risk.high_threshold",
                "must be at least risk.medium_threshold",
            ));
        }

        let confidence = config.forecast.effective_confidence();
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(validation(
                "forecast.confidence",
                "must be strictly between 0.0 and 1.0",
            ));
        }
        if config.forecast.effective_trend_window() < 2 {
            return Err(validation("forecast.trend_window", "must be at least 2"));
        }

        let trials = config.simulation.effective_trials();
        if trials == 0 || trials > MAX_SIMULATION_TRIALS {
            return Err(validation(
                "simulation.trials",
                format!("must be between 1 and {MAX_SIMULATION_TRIALS}"),
            ));
        }
        if config.simulation.effective_history_window() == 0 {
            return Err(validation("simulation.history_window", "must be at least 1"));
        }
        if config.simulation.effective_histogram_bins() == 0 {
            return Err(validation("simulation.histogram_bins", "must be at least 1"));
        }

        let bottleneck = &config.bottleneck;
        if bottleneck.effective_overload_ratio() <= 0.0 {
            return Err(validation("bottleneck.overload_ratio", "must be positive"));
        }
        if !(0.0..=1.0).contains(&bottleneck.effective_blocked_share()) {
            return Err(validation(
                "bottleneck.blocked_share",
                "must be between 0.0 and 1.0",
            ));
        }
        if bottleneck.effective_cycle_time_excess() < 0.0 {
            return Err(validation(
                "bottleneck.cycle_time_excess",
                "must not be negative",
            ));
        }

        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SprintLensConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SprintLensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut SprintLensConfig, other: &SprintLensConfig) {
        merge_section!(base, other, health {
            completion_weight,
            consistency_weight,
            estimation_weight,
            rolling_window,
        });
        merge_section!(base, other, portfolio {
            quadrant_threshold,
            high_value_target,
            completion_weight,
            alignment_weight,
            risk_weight,
        });
        merge_section!(base, other, risk {
            high_utilization,
            overload_utilization,
            stagnation_sprints,
            severe_stagnation_sprints,
            high_effort,
            extreme_effort,
            medium_threshold,
            high_threshold,
        });
        merge_section!(base, other, forecast { trend_window, confidence });
        merge_section!(base, other, simulation {
            trials,
            history_window,
            seed,
            histogram_bins,
        });
        merge_section!(base, other, bottleneck {
            overload_ratio,
            blocked_share,
            cycle_time_excess,
        });
    }

    /// Apply environment variable overrides.
    /// A set but unparsable variable is an error rather than a silent default.
    fn apply_env_overrides(config: &mut SprintLensConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<u64>("SPRINTLENS_SIMULATION_SEED")? {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_value::<u32>("SPRINTLENS_SIMULATION_TRIALS")? {
            config.simulation.trials = Some(v);
        }
        if let Some(v) = env_value::<f64>("SPRINTLENS_QUADRANT_THRESHOLD")? {
            config.portfolio.quadrant_threshold = Some(v);
        }
        if let Some(v) = env_value::<f64>("SPRINTLENS_FORECAST_CONFIDENCE")? {
            config.forecast.confidence = Some(v);
        }
        if let Some(v) = env_value::<usize>("SPRINTLENS_ROLLING_WINDOW")? {
            config.health.rolling_window = Some(v);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut SprintLensConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.simulation_seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = overrides.simulation_trials {
            config.simulation.trials = Some(v);
        }
        if let Some(v) = overrides.quadrant_threshold {
            config.portfolio.quadrant_threshold = Some(v);
        }
        if let Some(v) = overrides.forecast_confidence {
            config.forecast.confidence = Some(v);
        }
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse '{raw}'"),
            }),
        Err(_) => Ok(None),
    }
}

fn validation(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_weights(section: &str, weights: &[f64]) -> Result<(), ConfigError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(validation(
            &format!("{section}.*_weight"),
            "weights must be non-negative",
        ));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(validation(
            &format!("{section}.*_weight"),
            format!("weights must sum to 1.0, got {sum:.4}"),
        ));
    }
    Ok(())
}
