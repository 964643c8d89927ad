// ABOUTME: Creates periodization plans and advances them on plan-week boundaries
// ABOUTME: Derives the weekly RPE-load target from average load and phase ACWR, then doses exposures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::factories::{
    PeriodizationGoalFactory, PeriodizationProgressionFactory, TrainingPhaseFactory,
};
use crate::capacity::AthleteCapacityProcessor;
use crate::config::LoadModelConfig;
use chrono::NaiveDate;
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    AthleteBaselineCapacities, AthleteTargetTrainingExposure, DetailedAdaptationType,
    PeriodizationGoalType, PeriodizationPersona, PeriodizationPlan, PeriodizationProgression,
    StandardErrorRange, SubAdaptationTypePersonas, TargetTrainingExposure, TrainingPhase,
    TrainingPhaseType, TrainingUnit, UserStats,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Creates and updates periodization plans
#[derive(Debug, Clone)]
pub struct PeriodizationPlanProcessor {
    config: LoadModelConfig,
    capacity_processor: AthleteCapacityProcessor,
}

impl Default for PeriodizationPlanProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodizationPlanProcessor {
    /// Processor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoadModelConfig::global().clone())
    }

    /// Processor using an explicit configuration
    #[must_use]
    pub const fn with_config(config: LoadModelConfig) -> Self {
        Self {
            config,
            capacity_processor: AthleteCapacityProcessor::new(),
        }
    }

    /// Create a plan for an athlete with enough recent history
    ///
    /// # Errors
    ///
    /// Returns an insufficient-history error when the athlete has fewer
    /// sessions in the history window than the configured minimum.
    pub fn create_periodization_plan(
        &self,
        start_date: NaiveDate,
        periodization_goals: Vec<PeriodizationGoalType>,
        training_phase_type: TrainingPhaseType,
        athlete_persona: PeriodizationPersona,
        sub_adaptation_type_personas: SubAdaptationTypePersonas,
        user_stats: &UserStats,
    ) -> AppResult<PeriodizationPlan> {
        let limits = &self.config.periodization;
        if user_stats.total_historical_sessions < limits.min_historical_sessions {
            return Err(AppError::insufficient_history(
                limits.min_historical_sessions,
                user_stats.total_historical_sessions,
                limits.history_window_days,
            )
            .with_user_id(user_stats.user_id));
        }

        let mut plan = PeriodizationPlan::new(
            start_date,
            periodization_goals,
            training_phase_type,
            athlete_persona,
            sub_adaptation_type_personas,
        );
        plan.expected_weekly_workouts = Some(user_stats.expected_weekly_workouts);
        plan.athlete_capacities = self.capacity_processor.update_capacity_with_defaults(
            user_stats.athlete_capacities.clone(),
            &plan.sub_adaptation_type_personas,
        );
        plan.target_training_exposures = Self::goal_targets(&plan.periodization_goals)
            .iter()
            .map(AthleteTargetTrainingExposure::from_target)
            .collect();
        plan.target_weekly_rpe_load = Self::get_target_weekly_rpe_load(
            training_phase_type,
            user_stats.average_weekly_internal_load.as_ref(),
        );
        self.populate_training_exposures(&mut plan);

        info!(
            user_id = %user_stats.user_id,
            %start_date,
            phase = ?training_phase_type,
            exposures = plan.target_training_exposures.len(),
            "periodization plan created"
        );
        Ok(plan)
    }

    /// Advance the plan when `event_date` starts a new plan week
    ///
    /// Returns false and leaves the plan untouched on any other day.
    pub fn update_periodization_plan_for_week(
        &self,
        plan: &mut PeriodizationPlan,
        event_date: NaiveDate,
        user_stats: &UserStats,
    ) -> bool {
        if !plan.is_week_start_date(event_date) {
            return false;
        }

        let progressions =
            PeriodizationProgressionFactory::create(plan.athlete_persona, plan.training_phase_type);
        let training_phase = TrainingPhaseFactory::create(plan.training_phase_type);
        let templates = Self::goal_targets(&plan.periodization_goals);
        let last_tier = progressions.len().saturating_sub(1);

        let mut to_progress: BTreeMap<DetailedAdaptationType, usize> = BTreeMap::new();
        for exposure in &mut plan.target_training_exposures {
            if !exposure.is_satisfied() {
                continue;
            }
            exposure.progression_week = (exposure.progression_week + 1).min(last_tier);
            for training_exposure in &exposure.training_exposures {
                let week = to_progress
                    .entry(training_exposure.detailed_adaptation_type)
                    .or_insert(exposure.progression_week);
                *week = (*week).max(exposure.progression_week);
            }
            if let Some(template) = templates.iter().find(|t| exposure.matches_target(t)) {
                exposure.exposure_count = template.exposure_count;
            }
        }

        plan.athlete_capacities = self.capacity_processor.update_capacity_with_defaults(
            plan.athlete_capacities.clone(),
            &plan.sub_adaptation_type_personas,
        );
        self.update_athlete_capacity(
            &mut plan.athlete_capacities,
            &to_progress,
            &progressions,
            &training_phase,
        );
        plan.target_weekly_rpe_load = Self::get_target_weekly_rpe_load(
            plan.training_phase_type,
            user_stats.average_weekly_internal_load.as_ref(),
        );
        self.populate_training_exposures(plan);

        info!(
            %event_date,
            week = plan.get_week_number(event_date),
            progressed = to_progress.len(),
            "periodization plan advanced"
        );
        true
    }

    /// Average weekly load scaled by the phase's ACWR band
    ///
    /// Phases without a band keep the average load as the target.
    #[must_use]
    pub fn get_target_weekly_rpe_load(
        training_phase_type: TrainingPhaseType,
        average_weekly_internal_load: Option<&StandardErrorRange>,
    ) -> Option<StandardErrorRange> {
        let average = average_weekly_internal_load?;
        let phase = TrainingPhaseFactory::create(training_phase_type);
        if phase.has_acwr_bounds() {
            Some(average.multiply_range(&phase.acwr))
        } else {
            Some(*average)
        }
    }

    /// Grow capacity for each progressed adaptation type at its tier
    ///
    /// Lower bounds grow with the phase's lower ACWR bound, upper bounds with
    /// the upper bound and observed values with their mean. RPE never exceeds
    /// the top of the scale.
    pub fn update_athlete_capacity(
        &self,
        athlete_capacities: &mut AthleteBaselineCapacities,
        to_progress: &BTreeMap<DetailedAdaptationType, usize>,
        progressions: &[PeriodizationProgression],
        training_phase: &TrainingPhase,
    ) {
        let (Some(acwr_low), Some(acwr_high)) =
            (training_phase.acwr.lower_bound, training_phase.acwr.upper_bound)
        else {
            debug!("training phase has no ACWR band, capacity unchanged");
            return;
        };

        for (&adaptation_type, &week) in to_progress {
            let Some(progression) = progressions.get(week) else {
                continue;
            };
            let Some(capacity) = athlete_capacities.get(adaptation_type).copied() else {
                continue;
            };
            let rpe = grow(
                &capacity.rpe,
                (acwr_low - 1.0) * progression.rpe_load_contribution,
                (acwr_high - 1.0) * progression.rpe_load_contribution,
            )
            .cap_highest(self.config.periodization.max_rpe);
            let volume = grow(
                &capacity.volume,
                (acwr_low - 1.0) * progression.volume_load_contribution,
                (acwr_high - 1.0) * progression.volume_load_contribution,
            );
            debug!(
                adaptation_type = %adaptation_type,
                tier = week,
                "capacity progressed"
            );
            athlete_capacities.set(adaptation_type, Some(TrainingUnit::new(rpe, volume)));
        }
    }

    /// Dose every exposure from the weekly target or, without a load share, from capacity
    fn populate_training_exposures(&self, plan: &mut PeriodizationPlan) {
        let target = plan.target_weekly_rpe_load;
        let capacities = &plan.athlete_capacities;
        for need in &mut plan.target_training_exposures {
            for exposure in &mut need.training_exposures {
                let Some(capacity) = capacities.get(exposure.detailed_adaptation_type) else {
                    continue;
                };
                match (exposure.weekly_load_percentage, target) {
                    (Some(percentage), Some(target)) => {
                        let rpe_load = target.multiply_range(&percentage.divide(100.0));
                        exposure.rpe = capacity.rpe;
                        exposure.volume = rpe_load.divide_range(&capacity.rpe);
                        exposure.rpe_load = rpe_load;
                    }
                    _ => {
                        *exposure = exposure.clone().with_dose(capacity.rpe, capacity.volume);
                    }
                }
            }
        }
        debug!(
            max_rpe = self.config.periodization.max_rpe,
            "training exposures dosed"
        );
    }

    fn goal_targets(goals: &[PeriodizationGoalType]) -> Vec<TargetTrainingExposure> {
        goals
            .iter()
            .flat_map(|goal| PeriodizationGoalFactory::create(*goal).target_training_exposures)
            .collect()
    }
}

fn grow(range: &StandardErrorRange, lower_ratio: f64, upper_ratio: f64) -> StandardErrorRange {
    let mid_ratio = (lower_ratio + upper_ratio) / 2.0;
    StandardErrorRange {
        lower_bound: range.lower_bound.map(|v| v * (1.0 + lower_ratio)),
        observed_value: range.observed_value.map(|v| v * (1.0 + mid_ratio)),
        upper_bound: range.upper_bound.map(|v| v * (1.0 + upper_ratio)),
        insufficient_data: range.insufficient_data,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pierre_core::models::TrainingPersona;

    #[test]
    fn growth_uses_mean_ratio_for_observed() {
        let grown = grow(&StandardErrorRange::new(Some(10.0), Some(10.0), Some(10.0)), 0.1, 0.3);
        assert!((grown.lower_bound.unwrap() - 11.0).abs() < 1e-9);
        assert!((grown.observed_value.unwrap() - 12.0).abs() < 1e-9);
        assert!((grown.upper_bound.unwrap() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn recovery_target_equals_average_load() {
        let average = StandardErrorRange::observed(1000.0);
        let target = PeriodizationPlanProcessor::get_target_weekly_rpe_load(
            TrainingPhaseType::Recovery,
            Some(&average),
        );
        assert_eq!(target, Some(average));
    }

    #[test]
    fn recovery_grows_no_capacity() {
        let processor = PeriodizationPlanProcessor::with_config(LoadModelConfig::default());
        let mut capacities = AthleteCapacityProcessor::new().update_capacity_with_defaults(
            AthleteBaselineCapacities::default(),
            &SubAdaptationTypePersonas::uniform(TrainingPersona::Intermediate),
        );
        let before = capacities.clone();
        let mut to_progress = BTreeMap::new();
        to_progress.insert(DetailedAdaptationType::BaseAerobicTraining, 1);
        processor.update_athlete_capacity(
            &mut capacities,
            &to_progress,
            &PeriodizationProgressionFactory::create(
                PeriodizationPersona::WellTrained,
                TrainingPhaseType::Recovery,
            ),
            &TrainingPhaseFactory::create(TrainingPhaseType::Recovery),
        );
        assert_eq!(capacities, before);
    }
}
