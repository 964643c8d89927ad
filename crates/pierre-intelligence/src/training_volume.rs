// ABOUTME: Range-valued training-volume metrics and the ramp, ACWR, monotony and strain gap bands
// ABOUTME: Compiles the independent gap bands into one recommended load band and training level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: workout and day counts are small

//! Training Volume Processor
//!
//! Weekly metrics are computed from partial weeks, so each one carries a
//! standard-error range. A metric's lower and upper bounds come from combining
//! the observed and upper values of its inputs and only ever widen the range
//! around the observed value.
//!
//! Each gap calculator answers one question: how much more load may be added
//! today before this lens flags a problem. [`TrainingVolumeProcessor::compile_training_report`]
//! intersects the answers.

use crate::config::intelligence::StrainThresholds;
use crate::config::LoadModelConfig;
use crate::statistics::LoadStatistics;
use chrono::{Duration, NaiveDate};
use pierre_core::constants::acwr;
use pierre_core::models::{
    MonotonyGap, StandardErrorRange, TrainingLevel, TrainingVolumeGap, TrainingVolumeGapType,
};
use std::cmp::Ordering;
use tracing::debug;

/// Daily strain series with the number of strain spikes found in it
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalStrain {
    /// One rolling seven-day strain per day, oldest first
    pub daily_strain: Vec<StandardErrorRange>,
    /// Spike counts: observed from observed strains, upper from upper strains
    pub strain_events: StandardErrorRange,
}

/// Computes range-valued load metrics and gap bands
#[derive(Debug, Clone)]
pub struct TrainingVolumeProcessor {
    config: LoadModelConfig,
}

impl Default for TrainingVolumeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingVolumeProcessor {
    /// Processor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoadModelConfig::global().clone())
    }

    /// Processor using an explicit configuration
    #[must_use]
    pub const fn with_config(config: LoadModelConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &LoadModelConfig {
        &self.config
    }

    // ========================================================================
    // Range-valued metrics
    // ========================================================================

    /// Sum (or mean) of `values` with a standard-error band for partial weeks
    ///
    /// With fewer values than `expected_workouts` the band is
    /// `mean ± z·SE` (times n when summing), SE carrying the finite population
    /// correction. A lone value is paired with a synthetic companion so a
    /// spread exists. The band always contains the observed value. No values
    /// yields an insufficient range.
    #[must_use]
    pub fn get_standard_error_range(
        &self,
        expected_workouts: usize,
        values: &[f64],
        return_sum: bool,
    ) -> StandardErrorRange {
        if values.is_empty() {
            return StandardErrorRange::insufficient();
        }

        let sum: f64 = values.iter().sum();
        let observed = if return_sum {
            sum
        } else {
            sum / values.len() as f64
        };
        let mut range = StandardErrorRange::observed(observed);

        if values.len() >= expected_workouts {
            return range;
        }

        let padded;
        let sample: &[f64] = if values.len() == 1 {
            padded = [values[0], values[0] * self.config.statistical.spike_fill_factor];
            &padded
        } else {
            values
        };

        if let (Some(mean), Some(stdev)) = (
            LoadStatistics::mean(sample),
            LoadStatistics::sample_stdev(sample),
        ) {
            let se = LoadStatistics::standard_error(stdev, sample.len(), expected_workouts);
            let margin = self.config.statistical.z_score_95 * se;
            let scale = if return_sum { values.len() as f64 } else { 1.0 };
            range.lower_bound = Some(((mean - margin) * scale).min(observed));
            range.upper_bound = Some(((mean + margin) * scale).max(observed));
        }
        range
    }

    /// Acute load over chronic load
    #[must_use]
    pub fn get_acwr(
        &self,
        acute: &StandardErrorRange,
        chronic: &StandardErrorRange,
    ) -> StandardErrorRange {
        combine_ranges(acute, chronic, |a, c| (c > 0.0).then_some(a / c))
    }

    /// Chronic load minus acute load; positive means the athlete is fresh
    #[must_use]
    pub fn get_freshness_index(
        &self,
        acute: &StandardErrorRange,
        chronic: &StandardErrorRange,
    ) -> StandardErrorRange {
        combine_ranges(acute, chronic, |a, c| (c > 0.0).then_some(c - a))
    }

    /// Ratio of the current week's load to the previous week's
    #[must_use]
    pub fn get_ramp(
        &self,
        expected_workouts: usize,
        current_values: &[f64],
        previous_values: &[f64],
    ) -> StandardErrorRange {
        let current = self.get_standard_error_range(expected_workouts, current_values, true);
        let previous = self.get_standard_error_range(expected_workouts, previous_values, true);
        combine_ranges(&current, &previous, |c, p| (p > 0.0).then_some(c / p))
    }

    /// Mean over standard deviation of the week's loads
    ///
    /// Insufficient with fewer than two values or no spread.
    #[must_use]
    pub fn get_monotony(&self, expected_workouts: usize, values: &[f64]) -> StandardErrorRange {
        let Some(stdev) = LoadStatistics::sample_stdev(values) else {
            return StandardErrorRange::insufficient();
        };
        if stdev <= 0.0 {
            return StandardErrorRange::insufficient();
        }
        let average = self.get_standard_error_range(expected_workouts, values, false);
        StandardErrorRange::new(
            None,
            average.observed_value.map(|v| v / stdev),
            average.upper_bound.map(|v| v / stdev),
        )
    }

    /// Week's load times its monotony
    #[must_use]
    pub fn get_strain(
        &self,
        expected_workouts: usize,
        monotony: &StandardErrorRange,
        values: &[f64],
    ) -> StandardErrorRange {
        let load = self.get_standard_error_range(expected_workouts, values, true);
        combine_ranges(&load, monotony, |l, m| Some(l * m))
    }

    // ========================================================================
    // Daily strain
    // ========================================================================

    /// Strain of one rolling week of daily loads
    ///
    /// The standard deviation is floored so a perfectly even week still has a
    /// finite monotony. The upper bound is only set for partial weeks.
    #[must_use]
    pub fn calculate_daily_strain(
        &self,
        values: &[f64],
        expected_workouts: usize,
    ) -> Option<StandardErrorRange> {
        let stdev = LoadStatistics::sample_stdev(values)?
            .max(self.config.statistical.min_daily_stdev);
        let mean = LoadStatistics::mean(values)?;
        let sum: f64 = values.iter().sum();

        let mut strain = StandardErrorRange::observed((mean / stdev) * sum);
        if values.len() < expected_workouts {
            let se = LoadStatistics::standard_error(stdev, values.len(), expected_workouts);
            let high_mean = self.config.statistical.z_score_95.mul_add(se, mean);
            strain.upper_bound = Some((high_mean / stdev) * sum);
        }
        Some(strain)
    }

    /// Rolling seven-day strain for every day from `start` + 6 to `end`
    ///
    /// A day's strain is an event when it reaches the spike factor of standard
    /// deviations above the mean of the strains before it. Needs more than a
    /// week between `start` and `end`; otherwise the series is empty and the
    /// event range is insufficient.
    #[must_use]
    pub fn get_historical_internal_strain(
        &self,
        daily_loads: &[(NaiveDate, f64)],
        start: NaiveDate,
        end: NaiveDate,
        expected_workouts: usize,
    ) -> HistoricalStrain {
        let window = self.config.strain.trailing_window_days;
        let days = usize::try_from((end - start).num_days() + 1).unwrap_or(0);
        if days <= window {
            return HistoricalStrain {
                daily_strain: Vec::new(),
                strain_events: StandardErrorRange::insufficient(),
            };
        }

        let factor = self.config.strain.spike_stdev_factor;
        let mut daily_strain = Vec::new();
        let mut observed_series: Vec<f64> = Vec::new();
        let mut upper_series: Vec<f64> = Vec::new();
        let mut observed_events = 0_usize;
        let mut upper_events = 0_usize;

        for offset in (window - 1)..days {
            let Some(day) = days_after(start, offset) else {
                continue;
            };
            let Some(window_start) = days_after(start, offset + 1 - window) else {
                continue;
            };
            let values: Vec<f64> = daily_loads
                .iter()
                .filter(|(date, _)| window_start <= *date && *date <= day)
                .map(|(_, load)| *load)
                .collect();

            let Some(strain) = self.calculate_daily_strain(&values, expected_workouts) else {
                continue;
            };
            if let Some(observed) = strain.observed_value {
                if LoadStatistics::is_spike(observed, &observed_series, factor) {
                    observed_events += 1;
                }
                observed_series.push(observed);
            }
            if let Some(upper) = strain.upper_bound.or(strain.observed_value) {
                if LoadStatistics::is_spike(upper, &upper_series, factor) {
                    upper_events += 1;
                }
                upper_series.push(upper);
            }
            daily_strain.push(strain);
        }

        debug!(
            days = daily_strain.len(),
            observed_events, upper_events, "historical internal strain computed"
        );

        HistoricalStrain {
            daily_strain,
            strain_events: StandardErrorRange::new(
                None,
                Some(observed_events as f64),
                Some(upper_events as f64),
            ),
        }
    }

    // ========================================================================
    // Gap bands
    // ========================================================================

    /// Load that keeps the acute:chronic ratio inside the optimal band
    ///
    /// `chronic_weekly_loads` are the weekly sums before the acute week. None
    /// with fewer than two chronic weeks.
    #[must_use]
    pub fn get_acwr_gap(
        &self,
        acute_load: f64,
        chronic_weekly_loads: &[f64],
    ) -> Option<TrainingVolumeGap> {
        if chronic_weekly_loads.len() < acwr::MIN_CHRONIC_WEEKS {
            return None;
        }
        let chronic = LoadStatistics::mean(chronic_weekly_loads)?;
        if chronic <= 0.0 {
            return None;
        }
        let thresholds = &self.config.acwr;
        let low = thresholds.optimal_low.mul_add(chronic, -acute_load);
        let high = thresholds.optimal_high.mul_add(chronic, -acute_load);
        Some(
            TrainingVolumeGap::new(Some(low), Some(high), TrainingVolumeGapType::Acwr)
                .with_training_level(thresholds.classify(acute_load / chronic)),
        )
    }

    /// Load that keeps this week at or under the ramp limit over last week
    #[must_use]
    pub fn get_ramp_gap(
        &self,
        current_values: &[f64],
        previous_values: &[f64],
    ) -> Option<TrainingVolumeGap> {
        let current: f64 = current_values.iter().sum();
        let previous: f64 = previous_values.iter().sum();
        if previous <= 0.0 {
            return None;
        }
        let thresholds = &self.config.ramp;
        let low = thresholds.optimal_low.mul_add(previous, -current);
        let high = thresholds.optimal_high.mul_add(previous, -current);
        Some(
            TrainingVolumeGap::new(Some(low), Some(high), TrainingVolumeGapType::Ramp)
                .with_training_level(thresholds.classify(current / previous)),
        )
    }

    /// Options that break up a monotonous week
    ///
    /// Only produced once monotony reaches the overreaching limit. The next
    /// load should fall below the low option or above the high option.
    #[must_use]
    pub fn get_monotony_gap(&self, values: &[f64]) -> Option<MonotonyGap> {
        let mean = LoadStatistics::mean(values)?;
        let stdev = LoadStatistics::sample_stdev(values)?;
        if stdev <= 0.0 {
            return None;
        }
        let thresholds = &self.config.monotony;
        let level = thresholds.classify(mean / stdev)?;
        let spread = thresholds.fix_stdev_factor * stdev;

        Some(MonotonyGap {
            low_option: TrainingVolumeGap::new(
                None,
                Some(mean - spread),
                TrainingVolumeGapType::Monotony,
            )
            .with_training_level(level),
            high_option: TrainingVolumeGap::new(
                Some(mean + spread),
                None,
                TrainingVolumeGapType::Monotony,
            )
            .with_training_level(level),
        })
    }

    /// Load to shed (negative) or still available before today's strain spikes
    ///
    /// `strains` is the daily strain series, oldest first, ending today. The
    /// level counts spikes found between 8 and 14 days back.
    #[must_use]
    pub fn get_strain_gap(
        &self,
        strains: &[StandardErrorRange],
        monotony: Option<f64>,
    ) -> Option<TrainingVolumeGap> {
        let series: Vec<f64> = strains.iter().filter_map(|s| s.observed_value).collect();
        let (&today, before) = series.split_last()?;
        let strain_cfg = &self.config.strain;
        let trailing = &before[before.len().saturating_sub(strain_cfg.trailing_window_days)..];
        let mean = LoadStatistics::mean(trailing)?;
        let stdev = LoadStatistics::sample_stdev(trailing)?;

        let threshold = strain_cfg.spike_stdev_factor.mul_add(stdev, mean);
        let high = monotony
            .filter(|m| *m > 0.0)
            .map(|m| (threshold - today) / m);

        let today_index = series.len() - 1;
        let events = (strain_cfg.spike_scan_start_day..=strain_cfg.spike_scan_end_day)
            .filter_map(|days_back| today_index.checked_sub(days_back))
            .filter(|&i| {
                let preceding = &series[i.saturating_sub(strain_cfg.trailing_window_days)..i];
                LoadStatistics::is_spike(series[i], preceding, strain_cfg.spike_stdev_factor)
            })
            .count();

        debug!(today, threshold, events, "strain gap computed");

        Some(
            TrainingVolumeGap::new(None, high, TrainingVolumeGapType::Strain)
                .with_training_level(StrainThresholds::classify_events(events)),
        )
    }

    // ========================================================================
    // Report compilation
    // ========================================================================

    /// Intersect the gap bands into one recommended band
    ///
    /// The lowest high threshold binds the top. A monotony gap then adds its
    /// lighter option as a ceiling when its heavier option would already breach
    /// that top, and its heavier option as a floor otherwise. The highest low
    /// threshold still under the top binds the bottom. The level is the most
    /// severe level of the binding gaps.
    #[must_use]
    pub fn compile_training_report(
        &self,
        gaps: &[TrainingVolumeGap],
        monotony_gap: Option<&MonotonyGap>,
    ) -> Option<TrainingVolumeGap> {
        let mut upper_candidates: Vec<TrainingVolumeGap> =
            gaps.iter().filter(|g| g.high_threshold.is_some()).copied().collect();
        let mut lower_candidates: Vec<TrainingVolumeGap> =
            gaps.iter().filter(|g| g.low_threshold.is_some()).copied().collect();

        if let Some(monotony) = monotony_gap {
            let binding_high = lowest_high(&upper_candidates).and_then(|g| g.high_threshold);
            let heavier_breaches = matches!(
                (monotony.high_option.low_threshold, binding_high),
                (Some(low), Some(high)) if low > high
            );
            if heavier_breaches {
                upper_candidates.push(monotony.low_option);
            } else {
                lower_candidates.push(monotony.high_option);
            }
        }

        let binding_high = lowest_high(&upper_candidates);
        let ceiling = binding_high.and_then(|g| g.high_threshold);
        let binding_low = lower_candidates
            .iter()
            .filter(|g| match (g.low_threshold, ceiling) {
                (Some(low), Some(high)) => low < high,
                (Some(_), None) => true,
                _ => false,
            })
            .max_by(|a, b| threshold_cmp(a.low_threshold, b.low_threshold))
            .copied();

        let primary = binding_high.or(binding_low)?;
        let level = [binding_high, binding_low]
            .iter()
            .flatten()
            .filter_map(|g| g.training_level)
            .max();

        let mut compiled = TrainingVolumeGap::new(
            binding_low.and_then(|g| g.low_threshold),
            ceiling,
            primary.training_volume_gap_type,
        );
        if let Some(level) = level {
            compiled = compiled.with_training_level(level);
        }
        debug!(
            low = ?compiled.low_threshold,
            high = ?compiled.high_threshold,
            level = ?compiled.training_level,
            "training volume gaps compiled"
        );
        Some(compiled)
    }

    /// Most severe level across gaps that carry one
    #[must_use]
    pub fn max_training_level(gaps: &[TrainingVolumeGap]) -> Option<TrainingLevel> {
        gaps.iter().filter_map(|g| g.training_level).max()
    }
}

/// Observed value from the observed inputs; bounds from every observed/upper
/// pairing that involves an upper, kept only where they widen the range
fn combine_ranges(
    first: &StandardErrorRange,
    second: &StandardErrorRange,
    op: impl Fn(f64, f64) -> Option<f64>,
) -> StandardErrorRange {
    if first.insufficient_data || second.insufficient_data {
        return StandardErrorRange::insufficient();
    }

    let apply = |a: Option<f64>, b: Option<f64>| match (a, b) {
        (Some(a), Some(b)) => op(a, b),
        _ => None,
    };
    let observed = apply(first.observed_value, second.observed_value);
    let candidates: Vec<f64> = [
        apply(first.observed_value, second.upper_bound),
        apply(first.upper_bound, second.observed_value),
        apply(first.upper_bound, second.upper_bound),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut range = StandardErrorRange::new(None, observed, None);
    let min = candidates.iter().copied().reduce(f64::min);
    let max = candidates.iter().copied().reduce(f64::max);
    match observed {
        Some(value) => {
            range.lower_bound = min.filter(|m| *m < value);
            range.upper_bound = max.filter(|m| *m > value);
        }
        None => {
            range.lower_bound = min;
            range.upper_bound = max;
        }
    }
    range
}

fn days_after(start: NaiveDate, offset: usize) -> Option<NaiveDate> {
    let offset = i64::try_from(offset).ok()?;
    start.checked_add_signed(Duration::days(offset))
}

fn lowest_high(gaps: &[TrainingVolumeGap]) -> Option<TrainingVolumeGap> {
    gaps.iter()
        .filter(|g| g.high_threshold.is_some())
        .min_by(|a, b| threshold_cmp(a.high_threshold, b.high_threshold))
        .copied()
}

fn threshold_cmp(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(f64::NAN).total_cmp(&b.unwrap_or(f64::NAN))
}
