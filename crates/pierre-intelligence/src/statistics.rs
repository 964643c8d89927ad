// ABOUTME: Descriptive statistics for load series: mean, sample standard deviation, standard error
// ABOUTME: Finite-population corrected standard error feeds every range-valued load metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

/// Statistics over daily or weekly load values
pub struct LoadStatistics;

impl LoadStatistics {
    /// Arithmetic mean; None for an empty series
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Sample standard deviation (n - 1); None with fewer than two values
    #[must_use]
    pub fn sample_stdev(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let mean = Self::mean(values)?;
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    }

    /// Standard error of the mean with finite population correction
    ///
    /// `population` is the number of values expected in a complete window. When
    /// the sample already covers the population the error is zero.
    #[must_use]
    pub fn standard_error(stdev: f64, sample_size: usize, population: usize) -> f64 {
        if sample_size == 0 || population == 0 || sample_size >= population {
            return 0.0;
        }
        let n = sample_size as f64;
        let big_n = population as f64;
        (stdev / n.sqrt()) * ((big_n - n) / big_n).sqrt()
    }

    /// Z-score of `value` against a reference series; None when the series has no spread
    #[must_use]
    pub fn z_score(value: f64, reference: &[f64]) -> Option<f64> {
        let mean = Self::mean(reference)?;
        let stdev = Self::sample_stdev(reference)?;
        if stdev == 0.0 {
            return None;
        }
        Some((value - mean) / stdev)
    }

    /// Whether `value` lies strictly more than `factor` standard deviations
    /// above the mean of `reference`
    ///
    /// A reference without spread makes any value above its mean a spike.
    /// Fewer than two reference values never yield a spike.
    #[must_use]
    pub fn is_spike(value: f64, reference: &[f64], factor: f64) -> bool {
        match Self::z_score(value, reference) {
            Some(z) => z > factor,
            None => {
                Self::sample_stdev(reference).is_some()
                    && Self::mean(reference).is_some_and(|mean| value > mean)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn mean_and_stdev_of_known_series() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((LoadStatistics::mean(&values).unwrap() - 5.0).abs() < EPSILON);
        // Sample variance = 32 / 7
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((LoadStatistics::sample_stdev(&values).unwrap() - expected).abs() < EPSILON);
    }

    #[test]
    fn stdev_needs_two_values() {
        assert!(LoadStatistics::sample_stdev(&[3.0]).is_none());
        assert!(LoadStatistics::mean(&[]).is_none());
    }

    #[test]
    fn standard_error_vanishes_for_full_population() {
        assert!(LoadStatistics::standard_error(10.0, 5, 5).abs() < EPSILON);
        let partial = LoadStatistics::standard_error(10.0, 4, 5);
        let expected = (10.0 / 2.0) * (1.0_f64 / 5.0).sqrt();
        assert!((partial - expected).abs() < EPSILON);
    }

    #[test]
    fn z_score_needs_spread() {
        assert!(LoadStatistics::z_score(10.0, &[5.0, 5.0, 5.0]).is_none());
        let z = LoadStatistics::z_score(7.0, &[4.0, 6.0]).unwrap();
        assert!((z - 2.0 / 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn flat_reference_spikes_only_above_mean() {
        let flat = [100.0, 100.0, 100.0];
        assert!(!LoadStatistics::is_spike(100.0, &flat, 1.2));
        assert!(LoadStatistics::is_spike(100.5, &flat, 1.2));
        assert!(!LoadStatistics::is_spike(500.0, &[100.0], 1.2));
    }

    #[test]
    fn spike_threshold_is_strict() {
        // mean 5, stdev sqrt(2)
        let reference = [4.0, 6.0];
        let at_threshold = 1.2_f64.mul_add(2.0_f64.sqrt(), 5.0);
        assert!(!LoadStatistics::is_spike(at_threshold - 1e-9, &reference, 1.2));
        assert!(LoadStatistics::is_spike(at_threshold + 1e-6, &reference, 1.2));
    }
}
