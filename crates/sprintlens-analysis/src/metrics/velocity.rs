//! Velocity trend: regression slope, early-vs-late change, predictability.

use sprintlens_core::constants::TREND_SLOPE_THRESHOLD;
use sprintlens_core::Sprint;

use super::types::{TrendDirection, VelocityTrend};
use crate::stats;

/// Sprints averaged at each end of the series for `percent_change`.
const EDGE_SPRINTS: usize = 3;

pub fn calculate_velocity_trend(sprints: &[Sprint]) -> VelocityTrend {
    let velocities: Vec<f64> = sprints.iter().map(Sprint::velocity).collect();
    let mean_velocity = stats::mean(&velocities);
    let std_dev = stats::std_dev(&velocities);

    let slope = stats::linear_fit(&velocities).map_or(0.0, |fit| fit.slope);

    let percent_change = if velocities.len() >= 2 {
        let edge = EDGE_SPRINTS.min(velocities.len());
        let early = stats::mean(&velocities[..edge]);
        let late = stats::mean(&velocities[velocities.len() - edge..]);
        stats::ratio_or(late - early, early, 0.0) * 100.0
    } else {
        0.0
    };

    // A single sprint (or none) has no variance: treat it as fully predictable.
    let predictability = stats::coefficient_of_variation(&velocities)
        .map_or(1.0, |cv| (1.0 - cv).clamp(0.0, 1.0));

    VelocityTrend {
        slope,
        direction: TrendDirection::from_slope(slope, TREND_SLOPE_THRESHOLD),
        percent_change,
        predictability,
        mean_velocity,
        std_dev,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sprints(velocities: &[f64]) -> Vec<Sprint> {
        velocities
            .iter()
            .enumerate()
            .map(|(i, v)| Sprint {
                sprint_number: i as u32 + 1,
                committed_points: 30.0,
                completed_points: *v,
                team_capacity: 40.0,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_rising_velocity_is_improving() {
        let trend = calculate_velocity_trend(&sprints(&[20.0, 22.0, 24.0, 26.0, 28.0, 30.0]));
        assert!((trend.slope - 2.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Improving);
        // (28 - 22) / 22
        assert!((trend.percent_change - 27.272_727).abs() < 1e-5);
        assert!((trend.mean_velocity - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_falling_velocity_is_declining() {
        let trend = calculate_velocity_trend(&sprints(&[30.0, 28.0, 26.0, 24.0, 22.0, 20.0]));
        assert!((trend.slope + 2.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Declining);
        // (22 - 28) / 28
        assert!((trend.percent_change + 21.428_571).abs() < 1e-5);
    }

    #[test]
    fn test_short_series() {
        let trend = calculate_velocity_trend(&sprints(&[25.0]));
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert_eq!(trend.percent_change, 0.0);
        assert_eq!(trend.predictability, 1.0);

        // Two sprints: each edge is the whole series.
        let trend = calculate_velocity_trend(&sprints(&[20.0, 30.0]));
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.percent_change, 0.0);
    }
}
