//! Velocity forecast with a normal confidence band.

use sprintlens_core::config::ForecastConfig;
use sprintlens_core::Sprint;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use super::types::{ForecastMethod, ForecastPoint, VelocityForecast};
use crate::stats;

/// Extrapolate velocity `n` sprints past the last one.
///
/// Always returns exactly `n` points. With fewer than two sprints the last
/// velocity (or 0.0) is repeated with a zero-width band.
pub fn forecast_velocity_next_n_sprints(
    sprints: &[Sprint],
    n: usize,
    config: &ForecastConfig,
) -> VelocityForecast {
    let last_number = sprints.iter().map(|s| s.sprint_number).max().unwrap_or(0);
    let next_numbers = (1..=n as u32).map(|k| last_number + k);

    let window_size = config.effective_trend_window().max(2);
    let skip = sprints.len().saturating_sub(window_size);
    let window: Vec<f64> = sprints[skip..].iter().map(Sprint::velocity).collect();

    let Some(fit) = stats::linear_fit(&window) else {
        let last = window.last().copied().unwrap_or(0.0);
        return VelocityForecast {
            points: next_numbers
                .map(|sprint_number| ForecastPoint {
                    sprint_number,
                    velocity: last,
                    lower: last,
                    upper: last,
                })
                .collect(),
            method: ForecastMethod::LastValue,
            slope: 0.0,
            std_dev: 0.0,
        };
    };

    let std_dev = stats::std_dev(&window);
    let margin = z_score(config.effective_confidence()) * std_dev;
    let last_x = (window.len() - 1) as f64;

    let points = next_numbers
        .enumerate()
        .map(|(k, sprint_number)| {
            let velocity = fit.at(last_x + (k + 1) as f64).max(0.0);
            ForecastPoint {
                sprint_number,
                velocity,
                lower: (velocity - margin).max(0.0),
                upper: velocity + margin,
            }
        })
        .collect();

    debug!(n, slope = fit.slope, std_dev, margin, "velocity forecast");

    VelocityForecast {
        points,
        method: ForecastMethod::LinearTrend,
        slope: fit.slope,
        std_dev,
    }
}

/// Two-sided standard-normal critical value for `confidence`.
fn z_score(confidence: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(normal) => {
            let z = normal.inverse_cdf((1.0 + confidence) / 2.0);
            if z.is_finite() {
                z.max(0.0)
            } else {
                0.0
            }
        }
        Err(_) => 0.0,
    }
}
