// ABOUTME: Classifies past loading days by the soreness that followed them, per sport
// ABOUTME: Derives per-sport high relative load benchmarks from overreaching sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: per-sport session counts are small

//! Adaptation History
//!
//! Loading days are summed per calendar day. Only the heaviest day in any
//! rolling window can be blamed for the soreness that follows, so only those
//! days are classified:
//!
//! - no lasting soreness and at most 10% of the heaviest day: recovery
//! - no lasting soreness otherwise: maintenance
//! - mild soreness that cleared quickly: functional overreaching
//! - severe or long-lasting soreness: non-functional overreaching

use crate::config::LoadModelConfig;
use crate::statistics::LoadStatistics;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use pierre_core::models::LoadingEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Days in each muscular-strain comparison window
const STRAIN_WINDOW_DAYS: i64 = 14;

/// Loads per sport, split by how the athlete responded to them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationHistory {
    /// Light days with no lasting soreness
    pub recovery_loads: BTreeMap<String, Vec<f64>>,
    /// Days with no lasting soreness
    pub maintenance_loads: BTreeMap<String, Vec<f64>>,
    /// Days followed by mild, short soreness
    pub functional_overreaching_loads: BTreeMap<String, Vec<f64>>,
    /// Days followed by severe or lasting soreness
    pub non_functional_overreaching_loads: BTreeMap<String, Vec<f64>>,
    /// Percent of load followed by soreness over the last two weeks
    pub muscular_strain_last_2_weeks: Option<f64>,
    /// Percent of load followed by soreness two to four weeks ago
    pub muscular_strain_last_2_4_weeks: Option<f64>,
}

impl AdaptationHistory {
    /// Per-sport load that reliably causes overreaching: the smaller of the
    /// functional and non-functional overreaching means
    #[must_use]
    pub fn calc_high_relative_load_benchmarks(&self) -> BTreeMap<String, f64> {
        let mut benchmarks: BTreeMap<String, f64> = BTreeMap::new();
        for loads in [
            &self.functional_overreaching_loads,
            &self.non_functional_overreaching_loads,
        ] {
            for (sport, values) in loads {
                let Some(mean) = LoadStatistics::mean(values) else {
                    continue;
                };
                benchmarks
                    .entry(sport.clone())
                    .and_modify(|b| *b = b.min(mean))
                    .or_insert(mean);
            }
        }
        benchmarks
    }

    /// True when the recent two weeks strained muscles more than the two before
    #[must_use]
    pub fn muscular_strain_increasing(&self) -> bool {
        matches!(
            (self.muscular_strain_last_2_weeks, self.muscular_strain_last_2_4_weeks),
            (Some(recent), Some(earlier)) if recent > earlier
        )
    }
}

/// Builds adaptation histories from loading events
#[derive(Debug, Clone)]
pub struct AdaptationHistoryProcessor {
    config: LoadModelConfig,
}

impl Default for AdaptationHistoryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptationHistoryProcessor {
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

    /// Classify every loading day up to `load_end_date`
    #[must_use]
    pub fn load_adaptation_history(
        &self,
        events: &[LoadingEvent],
        load_end_date: NaiveDateTime,
    ) -> AdaptationHistory {
        let mut daily = Self::sum_by_day(events, load_end_date);
        self.mark_highest_loads(&mut daily);

        let max_load = daily.iter().map(|e| e.load).fold(0.0_f64, f64::max);
        let cfg = &self.config.adaptation;
        let mut history = AdaptationHistory::default();

        for event in daily.iter().filter(|e| e.highest_load_in_36_hrs) {
            let bucket = if event.is_soreness_free() {
                if max_load > 0.0 && event.load / max_load <= cfg.recovery_load_share {
                    &mut history.recovery_loads
                } else {
                    &mut history.maintenance_loads
                }
            } else if event.affected_body_parts.iter().any(|p| {
                p.indicates_non_functional_overreaching(
                    cfg.functional_overreaching_max_severity,
                    cfg.non_functional_soreness_days,
                )
            }) {
                &mut history.non_functional_overreaching_loads
            } else if event.affected_body_parts.iter().any(|p| {
                p.indicates_functional_overreaching(
                    cfg.functional_overreaching_max_severity,
                    cfg.non_functional_soreness_days,
                )
            }) {
                &mut history.functional_overreaching_loads
            } else {
                // Soreness not yet cleared; outcome still unknown
                continue;
            };
            bucket
                .entry(event.sport_name.clone())
                .or_default()
                .push(event.load);
        }

        let two_weeks_ago = load_end_date - Duration::days(STRAIN_WINDOW_DAYS);
        let four_weeks_ago = two_weeks_ago - Duration::days(STRAIN_WINDOW_DAYS);
        history.muscular_strain_last_2_weeks =
            muscular_strain(&daily, two_weeks_ago, load_end_date);
        history.muscular_strain_last_2_4_weeks =
            muscular_strain(&daily, four_weeks_ago, two_weeks_ago);

        debug!(
            days = daily.len(),
            max_load,
            recovery = history.recovery_loads.len(),
            maintenance = history.maintenance_loads.len(),
            "adaptation history loaded"
        );
        history
    }

    /// One event per calendar day, loads summed, named after the heaviest session
    fn sum_by_day(events: &[LoadingEvent], load_end_date: NaiveDateTime) -> Vec<LoadingEvent> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&LoadingEvent>> = BTreeMap::new();
        for event in events.iter().filter(|e| e.loading_date <= load_end_date) {
            by_day
                .entry(event.loading_date.date())
                .or_default()
                .push(event);
        }

        by_day
            .into_values()
            .filter_map(|sessions| {
                let heaviest = sessions
                    .iter()
                    .max_by(|a, b| a.load.total_cmp(&b.load))?;
                let first = sessions.iter().map(|e| e.loading_date).min()?;
                let total: f64 = sessions.iter().map(|e| e.load).sum();
                let parts = sessions
                    .iter()
                    .flat_map(|e| e.affected_body_parts.iter().cloned())
                    .collect();
                Some(
                    LoadingEvent::new(first, total, heaviest.sport_name.clone())
                        .with_affected_body_parts(parts),
                )
            })
            .collect()
    }

    /// Flag the heaviest day in each window starting at every loading day
    fn mark_highest_loads(&self, daily: &mut [LoadingEvent]) {
        let window = Duration::hours(self.config.adaptation.highest_load_window_hours);
        let starts: Vec<NaiveDateTime> = daily.iter().map(|e| e.loading_date).collect();
        for start in starts {
            let end = start + window;
            let heaviest = daily
                .iter()
                .enumerate()
                .filter(|(_, e)| start <= e.loading_date && e.loading_date <= end)
                .max_by(|(_, a), (_, b)| a.load.total_cmp(&b.load))
                .map(|(i, _)| i);
            if let Some(i) = heaviest {
                daily[i].highest_load_in_36_hrs = true;
            }
        }
    }
}

/// Percent of load in (`from`, `to`] on days followed by soreness
fn muscular_strain(
    daily: &[LoadingEvent],
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Option<f64> {
    let in_window: Vec<&LoadingEvent> = daily
        .iter()
        .filter(|e| from < e.loading_date && e.loading_date <= to)
        .collect();
    let total: f64 = in_window.iter().map(|e| e.load).sum();
    if total <= 0.0 {
        return None;
    }
    let sore: f64 = in_window
        .iter()
        .filter(|e| !e.is_soreness_free())
        .map(|e| e.load)
        .sum();
    Some(sore / total * 100.0)
}
