// ABOUTME: Builds a point-in-time training report from an athlete's daily internal loads
// ABOUTME: Windows the history into acute, previous and chronic weeks and compiles every gap band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::LoadModelConfig;
use crate::training::LoadCalculator;
use crate::training_volume::TrainingVolumeProcessor;
use chrono::{Duration, NaiveDate};
use pierre_core::constants::windows::{ACUTE_WINDOW_DAYS, MAX_CHRONIC_WEEKS};
use pierre_core::models::{StandardErrorRange, TrainingReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Input for one report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReportRequest {
    /// Athlete
    pub user_id: Uuid,
    /// Last day included in the report
    pub report_date: NaiveDate,
    /// Internal load per training day; several entries may share a date
    pub daily_loads: Vec<(NaiveDate, f64)>,
    /// Workouts a complete week is expected to hold
    pub expected_weekly_workouts: Option<usize>,
}

impl TrainingReportRequest {
    /// Request with the configured expected workout count
    #[must_use]
    pub const fn new(
        user_id: Uuid,
        report_date: NaiveDate,
        daily_loads: Vec<(NaiveDate, f64)>,
    ) -> Self {
        Self {
            user_id,
            report_date,
            daily_loads,
            expected_weekly_workouts: None,
        }
    }

    /// Override the expected workout count
    #[must_use]
    pub const fn with_expected_weekly_workouts(mut self, expected: usize) -> Self {
        self.expected_weekly_workouts = Some(expected);
        self
    }

    fn loads_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<f64> {
        self.daily_loads
            .iter()
            .filter(|(date, _)| start <= *date && *date <= end)
            .map(|(_, load)| *load)
            .collect()
    }

    fn earliest_date(&self) -> Option<NaiveDate> {
        self.daily_loads.iter().map(|(date, _)| *date).min()
    }
}

/// Generates training reports
#[derive(Debug, Clone)]
pub struct TrainingReportGenerator {
    processor: TrainingVolumeProcessor,
    calculator: LoadCalculator,
}

impl Default for TrainingReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingReportGenerator {
    /// Generator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoadModelConfig::global().clone())
    }

    /// Generator using an explicit configuration
    #[must_use]
    pub fn with_config(config: LoadModelConfig) -> Self {
        Self {
            calculator: LoadCalculator::with_config(config.clone()),
            processor: TrainingVolumeProcessor::with_config(config),
        }
    }

    /// Build the report for `request.report_date`
    ///
    /// Chronic weeks are only used when the history reaches back to their
    /// first day, so a short history produces fewer chronic weeks rather than
    /// artificially light ones.
    #[must_use]
    pub fn generate(&self, request: &TrainingReportRequest) -> TrainingReport {
        let expected = request
            .expected_weekly_workouts
            .unwrap_or(self.processor.config().statistical.expected_weekly_workouts);
        let report_date = request.report_date;
        let acute_start = report_date - Duration::days(ACUTE_WINDOW_DAYS - 1);
        let previous_start = acute_start - Duration::days(ACUTE_WINDOW_DAYS);

        let acute_values = request.loads_between(acute_start, report_date);
        let previous_values =
            request.loads_between(previous_start, acute_start - Duration::days(1));
        let acute_load: f64 = acute_values.iter().sum();
        let previous_load: Option<f64> =
            (!previous_values.is_empty()).then(|| previous_values.iter().sum());

        let chronic_weeks = Self::complete_chronic_weeks(request, acute_start);
        let chronic_weekly_loads: Vec<f64> = chronic_weeks
            .iter()
            .map(|values| values.iter().sum())
            .collect();

        // Range metrics
        let acute_range = self
            .processor
            .get_standard_error_range(expected, &acute_values, true);
        let chronic_range = self.chronic_range(expected, &chronic_weeks);
        let internal_acwr = chronic_range.map(|c| self.processor.get_acwr(&acute_range, &c));
        let internal_freshness_index =
            chronic_range.map(|c| self.processor.get_freshness_index(&acute_range, &c));
        let internal_ramp = previous_load.map(|_| {
            self.processor
                .get_ramp(expected, &acute_values, &previous_values)
        });
        let internal_monotony = sufficient(self.processor.get_monotony(expected, &acute_values));
        let internal_strain = internal_monotony
            .map(|m| self.processor.get_strain(expected, &m, &acute_values))
            .and_then(sufficient);

        let history_start = request
            .earliest_date()
            .map_or(acute_start, |earliest| earliest.max(Self::history_floor(acute_start)));
        let historical = self.processor.get_historical_internal_strain(
            &request.daily_loads,
            history_start,
            report_date,
            expected,
        );

        // Gap bands
        let mut gaps = Vec::new();
        gaps.extend(self.processor.get_ramp_gap(&acute_values, &previous_values));
        gaps.extend(self.processor.get_acwr_gap(acute_load, &chronic_weekly_loads));
        gaps.extend(self.processor.get_strain_gap(
            &historical.daily_strain,
            internal_monotony.and_then(|m| m.observed_value),
        ));
        let monotony_gap = self.processor.get_monotony_gap(&acute_values);
        let recommended = self
            .processor
            .compile_training_report(&gaps, monotony_gap.as_ref());
        let acute_load_gap = self
            .calculator
            .get_acute_load_gap(&acute_values, &chronic_weekly_loads);

        let training_level = recommended
            .and_then(|r| r.training_level)
            .or_else(|| TrainingVolumeProcessor::max_training_level(&gaps));

        info!(
            user_id = %request.user_id,
            %report_date,
            acute_load,
            chronic_weeks = chronic_weekly_loads.len(),
            gaps = gaps.len(),
            training_level = ?training_level,
            "training report generated"
        );

        TrainingReport {
            user_id: request.user_id,
            report_date,
            acute_load,
            previous_load,
            chronic_weekly_loads,
            internal_acwr,
            internal_ramp,
            internal_freshness_index,
            internal_monotony,
            internal_strain,
            internal_strain_events: sufficient(historical.strain_events),
            historical_internal_strain: historical.daily_strain,
            acute_load_gap,
            gaps,
            recommended,
            training_level,
        }
    }

    /// Loads of each complete week before the acute window, most recent first
    fn complete_chronic_weeks(
        request: &TrainingReportRequest,
        acute_start: NaiveDate,
    ) -> Vec<Vec<f64>> {
        let Some(earliest) = request.earliest_date() else {
            return Vec::new();
        };
        let mut weeks = Vec::new();
        let mut week_end = acute_start - Duration::days(1);
        for _ in 0..MAX_CHRONIC_WEEKS {
            let week_start = week_end - Duration::days(ACUTE_WINDOW_DAYS - 1);
            if earliest > week_start {
                break;
            }
            weeks.push(request.loads_between(week_start, week_end));
            week_end = week_start - Duration::days(1);
        }
        debug!(weeks = weeks.len(), "chronic weeks selected");
        weeks
    }

    /// Average weekly chronic load; weeks without training count as zero
    fn chronic_range(&self, expected: usize, weeks: &[Vec<f64>]) -> Option<StandardErrorRange> {
        if weeks.is_empty() {
            return None;
        }
        let ranges: Vec<StandardErrorRange> = weeks
            .iter()
            .map(|values| {
                if values.is_empty() {
                    StandardErrorRange::observed(0.0)
                } else {
                    self.processor.get_standard_error_range(expected, values, true)
                }
            })
            .collect();
        Some(StandardErrorRange::average(&ranges))
    }

    /// Earliest day the daily strain series looks back to
    fn history_floor(acute_start: NaiveDate) -> NaiveDate {
        let weeks = i64::try_from(MAX_CHRONIC_WEEKS).unwrap_or(4);
        acute_start - Duration::days(ACUTE_WINDOW_DAYS * weeks)
    }
}

fn sufficient(range: StandardErrorRange) -> Option<StandardErrorRange> {
    (!range.insufficient_data).then_some(range)
}
