// ABOUTME: Load-model threshold configuration for ACWR, ramp, monotony, strain and statistics
// ABOUTME: Each band classifies a ratio into a training level and validates its own ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load Model Thresholds
//!
//! Bands used by the gap calculators. Ratios are compared against these
//! values directly; ramp is a ratio (current / previous), not a percentage.

use super::error::ConfigError;
use pierre_core::constants::{acwr, monotony, ramp, statistics, strain, windows};
use pierre_core::models::TrainingLevel;
use serde::{Deserialize, Serialize};

/// Acute:chronic workload ratio bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcwrThresholds {
    /// Lower edge of the optimal band
    pub optimal_low: f64,
    /// Upper edge of the optimal band
    pub optimal_high: f64,
    /// Lower edge of the overreaching band
    pub overreaching_low: f64,
    /// Upper edge of the overreaching band
    pub overreaching_high: f64,
    /// Start of the excessive band
    pub excessive: f64,
}

impl Default for AcwrThresholds {
    fn default() -> Self {
        Self {
            optimal_low: acwr::OPTIMAL_LOW,
            optimal_high: acwr::OPTIMAL_HIGH,
            overreaching_low: acwr::OVERREACHING_LOW,
            overreaching_high: acwr::OVERREACHING_HIGH,
            excessive: acwr::EXCESSIVE,
        }
    }
}

impl AcwrThresholds {
    /// Training level for an ACWR value
    #[must_use]
    pub fn classify(&self, ratio: f64) -> TrainingLevel {
        if ratio < self.optimal_low {
            TrainingLevel::Undertraining
        } else if ratio <= self.optimal_high {
            TrainingLevel::Optimal
        } else if ratio <= self.overreaching_high {
            TrainingLevel::Overreaching
        } else {
            TrainingLevel::Excessive
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.optimal_low <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("acwr optimal_low must be > 0"));
        }
        if self.optimal_low >= self.optimal_high
            || self.optimal_high > self.overreaching_low
            || self.overreaching_low >= self.overreaching_high
            || self.overreaching_high > self.excessive
        {
            return Err(ConfigError::InvalidRange(
                "acwr bands must be ordered optimal < overreaching < excessive",
            ));
        }
        Ok(())
    }
}

/// Week-over-week ramp ratio bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampThresholds {
    /// Lower edge of the optimal band
    pub optimal_low: f64,
    /// Upper edge of the optimal band
    pub optimal_high: f64,
    /// Lower edge of the overreaching band
    pub overreaching_low: f64,
    /// Upper edge of the overreaching band
    pub overreaching_high: f64,
    /// Start of the excessive band
    pub excessive: f64,
}

impl Default for RampThresholds {
    fn default() -> Self {
        Self {
            optimal_low: ramp::OPTIMAL_LOW,
            optimal_high: ramp::OPTIMAL_HIGH,
            overreaching_low: ramp::OVERREACHING_LOW,
            overreaching_high: ramp::OVERREACHING_HIGH,
            excessive: ramp::EXCESSIVE,
        }
    }
}

impl RampThresholds {
    /// Training level for a ramp ratio; a falling load is still optimal
    #[must_use]
    pub fn classify(&self, ratio: f64) -> TrainingLevel {
        if ratio <= self.optimal_high {
            TrainingLevel::Optimal
        } else if ratio <= self.overreaching_high {
            TrainingLevel::Overreaching
        } else {
            TrainingLevel::Excessive
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.optimal_low <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("ramp optimal_low must be > 0"));
        }
        if self.optimal_low >= self.optimal_high
            || self.optimal_high > self.overreaching_low
            || self.overreaching_low >= self.overreaching_high
            || self.overreaching_high > self.excessive
        {
            return Err(ConfigError::InvalidRange(
                "ramp bands must be ordered optimal < overreaching < excessive",
            ));
        }
        Ok(())
    }
}

/// Monotony limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonotonyThresholds {
    /// Monotony at which load variability should be added
    pub overreaching: f64,
    /// Monotony considered excessive
    pub excessive: f64,
    /// Standard deviations from the mean a varied load must be
    pub fix_stdev_factor: f64,
}

impl Default for MonotonyThresholds {
    fn default() -> Self {
        Self {
            overreaching: monotony::OVERREACHING,
            excessive: monotony::EXCESSIVE,
            fix_stdev_factor: monotony::FIX_STDEV_FACTOR,
        }
    }
}

impl MonotonyThresholds {
    /// Training level for a monotony value; None below the overreaching limit
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<TrainingLevel> {
        if value >= self.excessive {
            Some(TrainingLevel::Excessive)
        } else if value >= self.overreaching {
            Some(TrainingLevel::Overreaching)
        } else {
            None
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.overreaching >= self.excessive {
            return Err(ConfigError::InvalidRange(
                "monotony overreaching must be < excessive",
            ));
        }
        if self.fix_stdev_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "monotony fix_stdev_factor must be > 0",
            ));
        }
        Ok(())
    }
}

/// Strain spike detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrainThresholds {
    /// Standard deviations above the trailing mean that count as a spike
    pub spike_stdev_factor: f64,
    /// Days in the trailing window
    pub trailing_window_days: usize,
    /// First day back from today scanned for spikes
    pub spike_scan_start_day: usize,
    /// Last day back from today scanned for spikes
    pub spike_scan_end_day: usize,
}

impl Default for StrainThresholds {
    fn default() -> Self {
        Self {
            spike_stdev_factor: strain::SPIKE_STDEV_FACTOR,
            trailing_window_days: windows::STRAIN_WINDOW_DAYS,
            spike_scan_start_day: windows::STRAIN_SPIKE_SCAN_START_DAY,
            spike_scan_end_day: windows::STRAIN_SPIKE_SCAN_END_DAY,
        }
    }
}

impl StrainThresholds {
    /// Training level for a number of strain spikes
    #[must_use]
    pub const fn classify_events(event_count: usize) -> TrainingLevel {
        match event_count {
            0 => TrainingLevel::Optimal,
            1 => TrainingLevel::Overreaching,
            _ => TrainingLevel::Excessive,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.spike_stdev_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "strain spike_stdev_factor must be > 0",
            ));
        }
        if self.trailing_window_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "strain trailing_window_days must be >= 2",
            ));
        }
        if self.spike_scan_start_day > self.spike_scan_end_day {
            return Err(ConfigError::InvalidRange(
                "strain spike_scan_start_day must be <= spike_scan_end_day",
            ));
        }
        Ok(())
    }
}

/// Statistical parameters for standard-error ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalConfig {
    /// Two-sided z-score of the confidence interval
    pub z_score_95: f64,
    /// Workouts per week assumed when the athlete has not told us
    pub expected_weekly_workouts: usize,
    /// Floor for the daily-load standard deviation
    pub min_daily_stdev: f64,
    /// Multiplier for the synthetic companion of a single value
    pub spike_fill_factor: f64,
}

impl Default for StatisticalConfig {
    fn default() -> Self {
        Self {
            z_score_95: statistics::Z_SCORE_95,
            expected_weekly_workouts: statistics::EXPECTED_WEEKLY_WORKOUTS,
            min_daily_stdev: statistics::MIN_DAILY_STDEV,
            spike_fill_factor: statistics::SINGLE_VALUE_SPIKE_FACTOR,
        }
    }
}

impl StatisticalConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.z_score_95 <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("z_score_95 must be > 0"));
        }
        if self.expected_weekly_workouts == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "expected_weekly_workouts must be > 0",
            ));
        }
        if self.min_daily_stdev <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_daily_stdev must be > 0"));
        }
        if self.spike_fill_factor <= 1.0 {
            return Err(ConfigError::ValueOutOfRange("spike_fill_factor must be > 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acwr_classification_matches_bands() {
        let thresholds = AcwrThresholds::default();
        assert_eq!(thresholds.classify(0.5), TrainingLevel::Undertraining);
        assert_eq!(thresholds.classify(1.0), TrainingLevel::Optimal);
        assert_eq!(thresholds.classify(1.3), TrainingLevel::Optimal);
        assert_eq!(thresholds.classify(1.4), TrainingLevel::Overreaching);
        assert_eq!(thresholds.classify(1.6), TrainingLevel::Excessive);
    }

    #[test]
    fn ramp_classification_matches_bands() {
        let thresholds = RampThresholds::default();
        assert_eq!(thresholds.classify(0.9), TrainingLevel::Optimal);
        assert_eq!(thresholds.classify(1.12), TrainingLevel::Overreaching);
        assert_eq!(thresholds.classify(1.2), TrainingLevel::Excessive);
    }

    #[test]
    fn monotony_below_limit_has_no_level() {
        let thresholds = MonotonyThresholds::default();
        assert_eq!(thresholds.classify(1.5), None);
        assert_eq!(thresholds.classify(1.7), Some(TrainingLevel::Overreaching));
        assert_eq!(thresholds.classify(2.0), Some(TrainingLevel::Excessive));
    }

    #[test]
    fn strain_spike_count_sets_level() {
        assert_eq!(StrainThresholds::classify_events(0), TrainingLevel::Optimal);
        assert_eq!(StrainThresholds::classify_events(1), TrainingLevel::Overreaching);
        assert_eq!(StrainThresholds::classify_events(2), TrainingLevel::Excessive);
        assert_eq!(StrainThresholds::classify_events(5), TrainingLevel::Excessive);
    }

    #[test]
    fn out_of_order_bands_fail_validation() {
        let thresholds = AcwrThresholds {
            optimal_low: 1.4,
            ..AcwrThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
