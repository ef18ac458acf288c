//! Monte Carlo estimate of sprint completion probability.
//!
//! Each trial samples a completion rate from Normal(μ, σ) fitted to recent
//! sprints and applies it to the recent average load, capped by the
//! sprint's capacity. The simulated outcome never depends on the committed
//! points, so lowering the commitment can only raise the probability.

use rand::Rng;
use sprintlens_core::config::SimulationConfig;
use sprintlens_core::constants::MAX_SIMULATION_TRIALS;
use sprintlens_core::Sprint;
use tracing::{debug, warn};

use super::types::{CompletionForecast, SimulationMethod};
use crate::stats;

/// Lower bound for the first Box-Muller uniform, keeping `ln` finite.
const MIN_UNIFORM: f64 = 1e-10;

/// Probability that `sprint` completes its committed points.
///
/// `history` may contain any sprints; only those numbered before `sprint`
/// with a non-zero commitment are used, up to the configured window.
/// The trial count is held to `1..=MAX_SIMULATION_TRIALS` whatever the config says.
pub fn predict_sprint_completion_probability<R: Rng + ?Sized>(
    sprint: &Sprint,
    history: &[Sprint],
    config: &SimulationConfig,
    rng: &mut R,
) -> CompletionForecast {
    let window = history_window(sprint, history, config.effective_history_window());
    let rates: Vec<f64> = window.iter().map(|s| s.completion_rate()).collect();
    let loads: Vec<f64> = window.iter().map(|s| s.committed_points).collect();

    let mu = stats::mean(&rates);
    let sigma = stats::std_dev(&rates);
    let reference_load = stats::mean(&loads);
    let capacity = sprint.team_capacity;
    let committed = sprint.committed_points;

    if window.len() < 2 || sigma <= f64::EPSILON {
        let expected = if window.is_empty() {
            sprint.completed_points
        } else {
            mu * reference_load
        };
        let expected = expected.max(0.0).min(capacity);

        warn!(
            sprint = sprint.sprint_number,
            history = window.len(),
            "insufficient variance for simulation, using expected completion"
        );

        return CompletionForecast {
            sprint_number: sprint.sprint_number,
            probability: if expected >= committed { 1.0 } else { 0.0 },
            method: SimulationMethod::Deterministic,
            trials: 0,
            expected_points: expected,
            committed_points: committed,
            p10: expected,
            p50: expected,
            p90: expected,
            samples: vec![expected],
        };
    }

    let trials = config.effective_trials().clamp(1, MAX_SIMULATION_TRIALS);
    let mut samples = Vec::with_capacity(trials as usize);
    let mut successes = 0u32;
    for _ in 0..trials {
        let rate = sample_normal(rng, mu, sigma);
        let simulated = (rate * reference_load).max(0.0).min(capacity);
        if simulated >= committed {
            successes += 1;
        }
        samples.push(simulated);
    }

    samples.sort_by(f64::total_cmp);
    let probability = f64::from(successes) / f64::from(trials);

    debug!(
        sprint = sprint.sprint_number,
        trials, probability, mu, sigma, reference_load,
        "completion simulated"
    );

    CompletionForecast {
        sprint_number: sprint.sprint_number,
        probability,
        method: SimulationMethod::Simulated,
        trials,
        expected_points: stats::mean(&samples),
        committed_points: committed,
        p10: stats::percentile(&samples, 10),
        p50: stats::percentile(&samples, 50),
        p90: stats::percentile(&samples, 90),
        samples,
    }
}

/// The last `size` sprints before `sprint` that had a commitment, oldest first.
fn history_window<'a>(sprint: &Sprint, history: &'a [Sprint], size: usize) -> Vec<&'a Sprint> {
    let mut prior: Vec<&Sprint> = history
        .iter()
        .filter(|s| s.sprint_number < sprint.sprint_number && s.committed_points > 0.0)
        .collect();
    prior.sort_by_key(|s| s.sprint_number);
    let skip = prior.len().saturating_sub(size);
    prior.split_off(skip)
}

/// Box-Muller transform over two uniforms from `rng`.
fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(MIN_UNIFORM);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
