//! Velocity forecast configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FORECAST_CONFIDENCE, DEFAULT_TREND_WINDOW};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastConfig {
    /// Trailing sprints used to fit the trend line. Default: 6.
    pub trend_window: Option<usize>,
    /// Two-sided confidence of the forecast band, in (0, 1). Default: 0.80.
    pub confidence: Option<f64>,
}

impl ForecastConfig {
    pub fn effective_trend_window(&self) -> usize {
        self.trend_window.unwrap_or(DEFAULT_TREND_WINDOW)
    }

    pub fn effective_confidence(&self) -> f64 {
        self.confidence.unwrap_or(DEFAULT_FORECAST_CONFIDENCE)
    }
}
