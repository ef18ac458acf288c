//! Histogram of simulated completion outcomes.

use super::types::{CompletionForecast, HistogramBin, ProbabilityDistribution};

/// Bin the forecast's samples into `bins` equal-width buckets over their range.
///
/// A single distinct value yields one bin; no samples yield no bins.
pub fn calculate_probability_distribution_chart_data(
    forecast: &CompletionForecast,
    bins: usize,
) -> ProbabilityDistribution {
    ProbabilityDistribution {
        bins: histogram(&forecast.samples, bins),
        committed_points: forecast.committed_points,
        probability: forecast.probability,
    }
}

fn histogram(samples: &[f64], bins: usize) -> Vec<HistogramBin> {
    let (Some(min), Some(max)) = (
        samples.iter().copied().reduce(f64::min),
        samples.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };
    let total = samples.len() as f64;

    if bins == 0 || max - min <= f64::EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: samples.len(),
            frequency: 1.0,
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in samples {
        // The maximum lands in the last bin.
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
            frequency: count as f64 / total,
        })
        .collect()
}
