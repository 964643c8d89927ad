// ABOUTME: Weekly training cycles and ordered training history with monotony, strain, ACWR and ramp
// ABOUTME: Derives acute-load gaps from the uncoupled ACWR band capped by a weekly ramp limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: cycle counts are small

//! Training Load Calculator
//!
//! A [`TrainingCycle`] is one week of sessions. A [`TrainingHistory`] orders
//! cycles most recent first, so index 0 is always the current week and the
//! chronic window is everything after it.

use crate::config::LoadModelConfig;
use crate::statistics::LoadStatistics;
use chrono::NaiveDate;
use pierre_core::constants::acwr;
use pierre_core::models::{AcuteLoadGap, LoadAttribute, LoadGap, SessionType, TrainingSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One week of training sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCycle {
    /// First day of the cycle
    pub start_date: NaiveDate,
    /// Last day of the cycle
    pub end_date: NaiveDate,
    /// Sessions in the cycle, recorded and projected
    pub sessions: Vec<TrainingSession>,
}

impl TrainingCycle {
    /// Create a cycle
    #[must_use]
    pub const fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        sessions: Vec<TrainingSession>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            sessions,
        }
    }

    /// Load values for `attribute`, skipping sessions without one
    #[must_use]
    pub fn loads(&self, attribute: LoadAttribute, include_estimated: bool) -> Vec<f64> {
        self.loads_where(attribute, |s| include_estimated || !s.estimated)
    }

    /// Total load for `attribute`
    #[must_use]
    pub fn sum(&self, attribute: LoadAttribute, include_estimated: bool) -> f64 {
        self.loads(attribute, include_estimated).iter().sum()
    }

    /// Mean load divided by its standard deviation; None without spread
    #[must_use]
    pub fn monotony(&self, attribute: LoadAttribute) -> Option<f64> {
        monotony_of(&self.loads(attribute, true))
    }

    /// Monotony multiplied by total load
    #[must_use]
    pub fn strain(&self, attribute: LoadAttribute) -> Option<f64> {
        let loads = self.loads(attribute, true);
        monotony_of(&loads).map(|m| m * loads.iter().sum::<f64>())
    }

    /// Hours trained in the cycle
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.sessions
            .iter()
            .filter_map(|s| s.duration_minutes)
            .sum::<f64>()
            / 60.0
    }

    /// Internal load over external load for sessions that have both
    #[must_use]
    pub fn internal_external_ratio(&self, include_estimated: bool) -> Option<f64> {
        let (internal, external) = self
            .sessions
            .iter()
            .filter(|s| include_estimated || !s.estimated)
            .filter_map(|s| Some((s.internal_load()?, s.external_load?)))
            .fold((0.0, 0.0), |(i, e), (si, se)| (i + si, e + se));
        if external > 0.0 {
            Some(internal / external)
        } else {
            None
        }
    }

    fn loads_where(
        &self,
        attribute: LoadAttribute,
        keep: impl Fn(&TrainingSession) -> bool,
    ) -> Vec<f64> {
        self.sessions
            .iter()
            .filter(|s| keep(s))
            .filter_map(|s| s.load(attribute))
            .collect()
    }
}

fn monotony_of(loads: &[f64]) -> Option<f64> {
    let stdev = LoadStatistics::sample_stdev(loads)?;
    if stdev == 0.0 {
        return None;
    }
    Some(LoadStatistics::mean(loads)? / stdev)
}

/// Training cycles ordered most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    cycles: Vec<TrainingCycle>,
}

impl TrainingHistory {
    /// Order cycles so index 0 is the current week
    #[must_use]
    pub fn new(mut cycles: Vec<TrainingCycle>) -> Self {
        cycles.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Self { cycles }
    }

    /// All cycles, most recent first
    #[must_use]
    pub fn cycles(&self) -> &[TrainingCycle] {
        &self.cycles
    }

    /// The current week
    #[must_use]
    pub fn current(&self) -> Option<&TrainingCycle> {
        self.cycles.first()
    }

    /// The week before the current one
    #[must_use]
    pub fn previous(&self) -> Option<&TrainingCycle> {
        self.cycles.get(1)
    }

    /// Acute load and the weekly chronic loads that follow it
    #[must_use]
    pub fn acute_chronic_load(
        &self,
        attribute: LoadAttribute,
        include_estimated: bool,
        exclude_bump_up: bool,
    ) -> (Vec<f64>, Vec<f64>) {
        let Some((current, chronic_cycles)) = self.cycles.split_first() else {
            return (Vec::new(), Vec::new());
        };
        let acute = current.loads_where(attribute, |s| {
            (include_estimated || !s.estimated)
                && !(exclude_bump_up && s.session_type == SessionType::BumpUp)
        });
        let chronic = chronic_cycles
            .iter()
            .map(|c| c.sum(attribute, include_estimated))
            .collect();
        (acute, chronic)
    }

    /// Uncoupled ACWR: current week over the mean of the preceding weeks
    #[must_use]
    pub fn acwr(&self, attribute: LoadAttribute, include_estimated: bool) -> Option<f64> {
        let (acute, chronic) = self.acute_chronic_load(attribute, include_estimated, false);
        let chronic_mean = LoadStatistics::mean(&chronic)?;
        if chronic_mean <= 0.0 {
            return None;
        }
        Some(acute.iter().sum::<f64>() / chronic_mean)
    }

    /// Coupled ACWR: the chronic mean includes the current week
    #[must_use]
    pub fn coupled_acwr(&self, attribute: LoadAttribute, include_estimated: bool) -> Option<f64> {
        if self.cycles.len() < 2 {
            return None;
        }
        let sums: Vec<f64> = self
            .cycles
            .iter()
            .map(|c| c.sum(attribute, include_estimated))
            .collect();
        let chronic_mean = LoadStatistics::mean(&sums)?;
        if chronic_mean <= 0.0 {
            return None;
        }
        Some(sums[0] / chronic_mean)
    }

    /// Current week load over previous week load, as a ratio
    #[must_use]
    pub fn ramp(&self, attribute: LoadAttribute, include_estimated: bool) -> Option<f64> {
        let current = self.current()?.sum(attribute, include_estimated);
        let previous = self.previous()?.sum(attribute, include_estimated);
        if previous <= 0.0 {
            return None;
        }
        Some(current / previous)
    }

    /// Whether this week's strain is a spike against earlier weeks
    #[must_use]
    pub fn is_strain_spiking(&self, attribute: LoadAttribute) -> bool {
        LoadCalculator::new().is_strain_spiking(self, attribute)
    }

    /// Whether this week costs more internal load per unit of external load than usual
    ///
    /// Fatigue shows as the current ratio exceeding the mean of earlier weeks by
    /// more than one standard deviation. With a single earlier week the ratio
    /// only has to exceed it.
    #[must_use]
    pub fn is_athlete_fatiguing(&self) -> Option<bool> {
        let current = self.current()?.internal_external_ratio(false)?;
        let previous: Vec<f64> = self
            .cycles
            .iter()
            .skip(1)
            .filter_map(|c| c.internal_external_ratio(false))
            .collect();
        let mean = LoadStatistics::mean(&previous)?;
        let stdev = LoadStatistics::sample_stdev(&previous).unwrap_or(0.0);
        Some(current > mean + stdev)
    }

    /// Internal:external ratio averaged with weight 1/(weeks ago + 1)
    #[must_use]
    pub fn weighted_internal_external_ratio(&self) -> Option<f64> {
        let weighted: Vec<f64> = self
            .cycles
            .iter()
            .enumerate()
            .filter_map(|(weeks_ago, c)| {
                c.internal_external_ratio(false)
                    .map(|ratio| ratio / (weeks_ago as f64 + 1.0))
            })
            .collect();
        LoadStatistics::mean(&weighted)
    }

    /// Remaining load for the current week across every load attribute
    #[must_use]
    pub fn current_load_gap(&self, exclude_bump_up: bool) -> LoadGap {
        LoadCalculator::new().get_load_gap(self, exclude_bump_up)
    }
}

/// Computes load gaps and strain spikes against configured thresholds
#[derive(Debug, Clone)]
pub struct LoadCalculator {
    config: LoadModelConfig,
}

impl Default for LoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadCalculator {
    /// Calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoadModelConfig::global().clone())
    }

    /// Calculator using an explicit configuration
    #[must_use]
    pub const fn with_config(config: LoadModelConfig) -> Self {
        Self { config }
    }

    /// Acute-load targets for the rest of the week
    ///
    /// Uses the uncoupled ACWR: the acute week is not part of `chronic_load`,
    /// whose first entry is the week directly before the acute week. Returns
    /// None with fewer than two chronic weeks or no chronic load.
    #[must_use]
    pub fn get_acute_load_gap(&self, acute_load: &[f64], chronic_load: &[f64]) -> Option<AcuteLoadGap> {
        if chronic_load.len() < acwr::MIN_CHRONIC_WEEKS {
            return None;
        }
        let acute_sum: f64 = acute_load.iter().sum();
        let chronic_mean = LoadStatistics::mean(chronic_load)?;
        if chronic_mean <= 0.0 {
            return None;
        }
        let previous_week_load = chronic_load[0];

        let low_target = self.config.acwr.optimal_low.mul_add(chronic_mean, -acute_sum);
        let high_target = self.config.acwr.optimal_high.mul_add(chronic_mean, -acute_sum);
        let ramp_cap = self
            .config
            .ramp
            .optimal_high
            .mul_add(previous_week_load, -acute_sum)
            .max(0.0);
        let target_load = high_target.min(ramp_cap);

        debug!(
            acute_sum,
            chronic_mean, low_target, high_target, ramp_cap, "acute load gap computed"
        );

        Some(AcuteLoadGap {
            low_target,
            high_target,
            ramp_cap,
            target_load,
        })
    }

    /// Acute-load gaps for every load attribute
    #[must_use]
    pub fn get_load_gap(&self, history: &TrainingHistory, exclude_bump_up: bool) -> LoadGap {
        let gap_for = |attribute| {
            let (acute, chronic) = history.acute_chronic_load(attribute, true, exclude_bump_up);
            self.get_acute_load_gap(&acute, &chronic)
        };
        LoadGap {
            external_total: gap_for(LoadAttribute::ExternalLoad),
            external_high_intensity: gap_for(LoadAttribute::HighIntensityLoad),
            external_moderate_intensity: gap_for(LoadAttribute::ModIntensityLoad),
            external_low_intensity: gap_for(LoadAttribute::LowIntensityLoad),
            internal_total: gap_for(LoadAttribute::InternalLoad),
        }
    }

    /// Whether the current week's strain sits more than the spike factor of
    /// standard deviations above the earlier weeks' strains
    #[must_use]
    pub fn is_strain_spiking(&self, history: &TrainingHistory, attribute: LoadAttribute) -> bool {
        let Some(current) = history.current().and_then(|c| c.strain(attribute)) else {
            return false;
        };
        let previous: Vec<f64> = history
            .cycles()
            .iter()
            .skip(1)
            .filter_map(|c| c.strain(attribute))
            .collect();
        LoadStatistics::is_spike(current, &previous, self.config.strain.spike_stdev_factor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    const EPSILON: f64 = 1e-9;

    fn cycle(start: NaiveDate, loads: &[(f64, f64)]) -> TrainingCycle {
        let sessions = loads
            .iter()
            .enumerate()
            .map(|(i, &(rpe, minutes))| {
                TrainingSession::new(
                    start + Duration::days(i64::try_from(i).unwrap()),
                    rpe,
                    minutes,
                )
            })
            .collect();
        TrainingCycle::new(start, start + Duration::days(6), sessions)
    }

    #[test]
    fn estimated_sessions_can_be_excluded() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut c = cycle(start, &[(5.0, 60.0)]);
        c.sessions
            .push(TrainingSession::new(start, 4.0, 50.0).estimated());
        assert!((c.sum(LoadAttribute::InternalLoad, true) - 500.0).abs() < EPSILON);
        assert!((c.sum(LoadAttribute::InternalLoad, false) - 300.0).abs() < EPSILON);
    }

    #[test]
    fn monotony_undefined_without_spread() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let c = cycle(start, &[(5.0, 60.0), (5.0, 60.0)]);
        assert!(c.monotony(LoadAttribute::InternalLoad).is_none());
        assert!(c.strain(LoadAttribute::InternalLoad).is_none());
    }

    #[test]
    fn history_is_sorted_most_recent_first() {
        let week1 = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let week2 = week1 + Duration::days(7);
        let history = TrainingHistory::new(vec![
            cycle(week1, &[(5.0, 60.0)]),
            cycle(week2, &[(6.0, 60.0)]),
        ]);
        assert_eq!(history.current().unwrap().start_date, week2);
        let ramp = history.ramp(LoadAttribute::InternalLoad, true).unwrap();
        assert!((ramp - 1.2).abs() < EPSILON);
    }

    #[test]
    fn load_gap_needs_two_chronic_weeks() {
        let calculator = LoadCalculator::with_config(LoadModelConfig::default());
        assert!(calculator.get_acute_load_gap(&[100.0], &[80.0]).is_none());
    }
}
