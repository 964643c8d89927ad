// ABOUTME: Matches workout exposures against an athlete's owed weekly exposures
// ABOUTME: Completing a matching workout decrements the first owed exposure it satisfies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::LoadModelConfig;
use pierre_core::models::{
    AthleteTargetTrainingExposure, PeriodizationPlan, TrainingExposure, WorkoutProgram,
};
use tracing::debug;

/// Exposure matching against plan needs
#[derive(Debug, Clone, Copy)]
pub struct PeriodizationUtilities {
    exposure_match_factor: f64,
}

impl Default for PeriodizationUtilities {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodizationUtilities {
    /// Utilities using the global match tolerance
    #[must_use]
    pub fn new() -> Self {
        Self::with_match_factor(LoadModelConfig::global().periodization.exposure_match_factor)
    }

    /// Utilities with an explicit RPE tolerance factor (1.05 allows 5% either way)
    #[must_use]
    pub const fn with_match_factor(exposure_match_factor: f64) -> Self {
        Self {
            exposure_match_factor,
        }
    }

    /// Whether any exposure in the workout satisfies any alternative of `need`
    ///
    /// With `include_count` a need that is already met for the week never matches.
    #[must_use]
    pub fn is_athlete_need_in_workout_exposures(
        &self,
        need: &AthleteTargetTrainingExposure,
        workout_exposures: &[TrainingExposure],
        include_count: bool,
    ) -> bool {
        if include_count && need.is_satisfied() {
            return false;
        }
        need.training_exposures.iter().any(|need_exposure| {
            workout_exposures
                .iter()
                .any(|workout_exposure| {
                    self.does_workout_exposure_meet_athlete_need(workout_exposure, need_exposure)
                })
        })
    }

    /// Same adaptation type, at least the needed volume, and RPE within tolerance
    ///
    /// Need components that are unset do not constrain the match.
    #[must_use]
    pub fn does_workout_exposure_meet_athlete_need(
        &self,
        workout_exposure: &TrainingExposure,
        need_exposure: &TrainingExposure,
    ) -> bool {
        if workout_exposure.detailed_adaptation_type != need_exposure.detailed_adaptation_type {
            return false;
        }

        let volume_ok = match (
            workout_exposure.volume.highest_value(),
            need_exposure.volume.lowest_value(),
        ) {
            (_, None) => true,
            (Some(done), Some(needed)) => done >= needed,
            (None, Some(_)) => false,
        };

        let rpe_ok = match (
            workout_exposure.rpe.highest_value(),
            need_exposure.rpe.lowest_value(),
            need_exposure.rpe.highest_value(),
        ) {
            (_, None, _) | (_, _, None) => true,
            (Some(rpe), Some(low), Some(high)) => {
                let tolerance = self.exposure_match_factor - 1.0;
                low * (1.0 - tolerance) <= rpe && rpe <= high * (1.0 + tolerance)
            }
            (None, Some(_), Some(_)) => false,
        };

        volume_ok && rpe_ok
    }

    /// Credit a completed workout against the plan's first matching owed exposure
    ///
    /// Returns true when a need was decremented.
    pub fn update_exposure_needs(
        &self,
        plan: &mut PeriodizationPlan,
        workout: &WorkoutProgram,
    ) -> bool {
        let matched = plan.target_training_exposures.iter_mut().find(|need| {
            self.is_athlete_need_in_workout_exposures(need, &workout.training_exposures, true)
        });
        match matched {
            Some(need) => {
                need.decrement_count();
                debug!(
                    workout_id = %workout.workout_id,
                    priority = need.priority,
                    remaining = ?need.exposure_count.highest_value(),
                    "exposure need credited"
                );
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::{DetailedAdaptationType, StandardErrorRange};

    fn utilities() -> PeriodizationUtilities {
        PeriodizationUtilities::with_match_factor(1.05)
    }

    #[test]
    fn rpe_tolerance_is_five_percent() {
        let need = TrainingExposure::new(DetailedAdaptationType::Speed).with_dose(
            StandardErrorRange::observed(6.0),
            StandardErrorRange::observed(60.0),
        );
        let close = TrainingExposure::new(DetailedAdaptationType::Speed).with_dose(
            StandardErrorRange::observed(6.25),
            StandardErrorRange::observed(60.0),
        );
        let far = TrainingExposure::new(DetailedAdaptationType::Speed).with_dose(
            StandardErrorRange::observed(6.5),
            StandardErrorRange::observed(60.0),
        );
        assert!(utilities().does_workout_exposure_meet_athlete_need(&close, &need));
        assert!(!utilities().does_workout_exposure_meet_athlete_need(&far, &need));
    }

    #[test]
    fn short_volume_does_not_match() {
        let need = TrainingExposure::new(DetailedAdaptationType::Power).with_dose(
            StandardErrorRange::observed(5.0),
            StandardErrorRange::observed(30.0),
        );
        let workout = TrainingExposure::new(DetailedAdaptationType::Power).with_dose(
            StandardErrorRange::observed(5.0),
            StandardErrorRange::observed(20.0),
        );
        assert!(!utilities().does_workout_exposure_meet_athlete_need(&workout, &need));
    }
}
