//! Monte Carlo completion-probability configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HISTOGRAM_BINS, DEFAULT_HISTORY_WINDOW, DEFAULT_SIMULATION_SEED,
    DEFAULT_SIMULATION_TRIALS,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials. Default: 1000.
    pub trials: Option<u32>,
    /// Prior sprints feeding the completion-rate distribution. Default: 6.
    pub history_window: Option<usize>,
    /// RNG seed. Default: 42.
    pub seed: Option<u64>,
    /// Histogram bins for the distribution chart. Default: 20.
    pub histogram_bins: Option<usize>,
}

impl SimulationConfig {
    pub fn effective_trials(&self) -> u32 {
        self.trials.unwrap_or(DEFAULT_SIMULATION_TRIALS)
    }

    pub fn effective_history_window(&self) -> usize {
        self.history_window.unwrap_or(DEFAULT_HISTORY_WINDOW)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SIMULATION_SEED)
    }

    pub fn effective_histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS)
    }
}
