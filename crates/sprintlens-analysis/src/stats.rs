//! Small descriptive-statistics helpers shared by the engines.
//!
//! All helpers return a neutral value instead of NaN on empty or degenerate input.

use statrs::statistics::Statistics;

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.mean()
}

/// Sample standard deviation (n − 1). 0.0 for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sd = values.std_dev();
    if sd.is_finite() { sd } else { 0.0 }
}

/// Coefficient of variation (std / mean), or `None` when the mean is not positive.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let m = mean(values);
    if m > 0.0 {
        Some(std_dev(values) / m)
    } else {
        None
    }
}

/// Least-squares fit `y = slope·x + intercept` over `x = 0..n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line against the series index. `None` for fewer than two points.
pub fn linear_fit(values: &[f64]) -> Option<LinearFit> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in values.iter().enumerate() {
        let x_diff = i as f64 - x_mean;
        numerator += x_diff * (y - y_mean);
        denominator += x_diff * x_diff;
    }

    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = numerator / denominator;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Nearest-rank percentile of an ascending-sorted slice. 0.0 when empty.
pub fn percentile(sorted: &[f64], k: u32) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (f64::from(k.min(100)) / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Median of an unsorted slice. 0.0 when empty.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is not positive.
pub fn ratio_or(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&v) - 5.0).abs() < 1e-9);
        // Sample std-dev of the classic example is sqrt(32/7).
        assert!((std_dev(&v) - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs_are_neutral() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[3.0]), 0.0);
        assert_eq!(coefficient_of_variation(&[0.0, 0.0]), None);
        assert!(linear_fit(&[1.0]).is_none());
        assert_eq!(percentile(&[], 50), 0.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_linear_fit_recovers_line() {
        let fit = linear_fit(&[1.0, 3.0, 5.0, 7.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
        assert!((fit.at(4.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_and_median() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&sorted, 0), 1.0);
        assert_eq!(percentile(&sorted, 50), 3.0);
        assert_eq!(percentile(&sorted, 100), 5.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_ratio_or() {
        assert_eq!(ratio_or(1.0, 4.0, 9.0), 0.25);
        assert_eq!(ratio_or(1.0, 0.0, 9.0), 9.0);
    }
}
