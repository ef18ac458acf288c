//! Bottleneck detection thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLOCKED_SHARE, DEFAULT_CYCLE_TIME_EXCESS, DEFAULT_OVERLOAD_RATIO};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BottleneckConfig {
    /// Assigned points / capacity that marks a member overloaded. Default: 1.0.
    pub overload_ratio: Option<f64>,
    /// Blocked share of a story type that flags blocked work. Default: 0.15.
    pub blocked_share: Option<f64>,
    /// Relative cycle-time excess that flags a slow story type. Default: 0.25.
    pub cycle_time_excess: Option<f64>,
}

impl BottleneckConfig {
    pub fn effective_overload_ratio(&self) -> f64 {
        self.overload_ratio.unwrap_or(DEFAULT_OVERLOAD_RATIO)
    }

    pub fn effective_blocked_share(&self) -> f64 {
        self.blocked_share.unwrap_or(DEFAULT_BLOCKED_SHARE)
    }

    pub fn effective_cycle_time_excess(&self) -> f64 {
        self.cycle_time_excess.unwrap_or(DEFAULT_CYCLE_TIME_EXCESS)
    }
}
