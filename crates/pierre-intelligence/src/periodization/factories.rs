// ABOUTME: Factories for training phases, persona progression tiers and goal exposure templates
// ABOUTME: Every call builds fresh values so plans never share a template with each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{
    DetailedAdaptationType, PeriodizationGoal, PeriodizationGoalType, PeriodizationPersona,
    PeriodizationProgression, StandardErrorRange, TargetTrainingExposure, TrainingExposure,
    TrainingPhase, TrainingPhaseType,
};
use tracing::warn;

/// Builds the ACWR band of a training phase
pub struct TrainingPhaseFactory;

impl TrainingPhaseFactory {
    /// Phase with its target ACWR band; recovery has none
    #[must_use]
    pub const fn create(training_phase_type: TrainingPhaseType) -> TrainingPhase {
        let acwr = match training_phase_type {
            TrainingPhaseType::Recovery => StandardErrorRange::empty(),
            TrainingPhaseType::Taper => StandardErrorRange::bounded(0.8, 1.1),
            TrainingPhaseType::Maintain => StandardErrorRange::bounded(0.9, 1.1),
            TrainingPhaseType::SlowlyIncrease => StandardErrorRange::bounded(1.2, 1.3),
            TrainingPhaseType::Increase => StandardErrorRange::bounded(1.3, 1.5),
            TrainingPhaseType::AggressivelyIncrease => StandardErrorRange::bounded(1.5, 2.0),
        };
        TrainingPhase::new(training_phase_type, acwr)
    }
}

/// (RPE, volume) growth shares per progression tier, shifting from volume to intensity
const WELL_TRAINED_CONTRIBUTIONS: [(f64, f64); 4] = [(0.2, 0.8), (0.4, 0.6), (0.6, 0.4), (0.8, 0.2)];

/// Builds progression tiers for a persona
pub struct PeriodizationProgressionFactory;

impl PeriodizationProgressionFactory {
    /// Progression tiers for `persona` in `training_phase_type`
    ///
    /// Only well-trained tiers are defined; other personas use them as well.
    #[must_use]
    pub fn create(
        persona: PeriodizationPersona,
        training_phase_type: TrainingPhaseType,
    ) -> Vec<PeriodizationProgression> {
        if persona != PeriodizationPersona::WellTrained {
            warn!(
                persona = ?persona,
                "no progression tiers for persona, using well-trained tiers"
            );
        }
        let training_phase = TrainingPhaseFactory::create(training_phase_type);
        WELL_TRAINED_CONTRIBUTIONS
            .iter()
            .enumerate()
            .map(|(week_number, &(rpe, volume))| PeriodizationProgression {
                week_number,
                training_phase,
                rpe_load_contribution: rpe,
                volume_load_contribution: volume,
            })
            .collect()
    }
}

/// Builds the weekly exposure template of a goal
pub struct PeriodizationGoalFactory;

impl PeriodizationGoalFactory {
    /// Template for `goal_type`; goals without a template get no exposures
    #[must_use]
    pub fn create(goal_type: PeriodizationGoalType) -> PeriodizationGoal {
        let target_training_exposures = match goal_type {
            PeriodizationGoalType::IncreaseCardioEndurance => Self::cardio_endurance(),
            PeriodizationGoalType::IncreaseAthleticismLowForce => Self::athleticism_low_force(),
            other => {
                warn!(goal = ?other, "no exposure template for goal");
                Vec::new()
            }
        };
        PeriodizationGoal {
            goal_type,
            target_training_exposures,
        }
    }

    fn cardio_endurance() -> Vec<TargetTrainingExposure> {
        let base_long = TrainingExposure::new(DetailedAdaptationType::BaseAerobicTraining)
            .with_weekly_load_percentage(StandardErrorRange::bounded(20.0, 30.0));
        let base_short = TrainingExposure::new(DetailedAdaptationType::BaseAerobicTraining)
            .with_weekly_load_percentage(StandardErrorRange::bounded(10.0, 20.0));

        vec![
            TargetTrainingExposure::new(vec![base_long], once(), 1),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::AnaerobicThresholdTraining)],
                once(),
                2,
            ),
            TargetTrainingExposure::new(vec![base_short], two_to_three(), 3),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::StrengthEndurance)],
                two_to_three(),
                5,
            ),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::HighIntensityAnaerobicTraining)],
                one_to_two(),
                6,
            ),
        ]
    }

    fn athleticism_low_force() -> Vec<TargetTrainingExposure> {
        let speed_power = vec![
            exposure(DetailedAdaptationType::Speed),
            exposure(DetailedAdaptationType::SustainedPower),
            exposure(DetailedAdaptationType::Power),
        ];

        vec![
            TargetTrainingExposure::new(speed_power, two_to_three(), 1),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::AnaerobicThresholdTraining)],
                one_to_two(),
                2,
            ),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::HighIntensityAnaerobicTraining)],
                one_to_two(),
                2,
            ),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::BaseAerobicTraining)],
                one_to_two(),
                4,
            ),
            TargetTrainingExposure::new(
                vec![exposure(DetailedAdaptationType::StrengthEndurance)],
                one_to_two(),
                5,
            ),
        ]
    }
}

const fn exposure(adaptation_type: DetailedAdaptationType) -> TrainingExposure {
    TrainingExposure::new(adaptation_type)
}

const fn once() -> StandardErrorRange {
    StandardErrorRange::observed(1.0)
}

const fn one_to_two() -> StandardErrorRange {
    StandardErrorRange::bounded(1.0, 2.0)
}

const fn two_to_three() -> StandardErrorRange {
    StandardErrorRange::bounded(2.0, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_phase_has_no_band() {
        let phase = TrainingPhaseFactory::create(TrainingPhaseType::Recovery);
        assert!(!phase.has_acwr_bounds());
        let increase = TrainingPhaseFactory::create(TrainingPhaseType::Increase);
        assert_eq!(increase.acwr.lower_bound, Some(1.3));
        assert_eq!(increase.acwr.upper_bound, Some(1.5));
    }

    #[test]
    fn progression_shifts_from_volume_to_intensity() {
        let tiers = PeriodizationProgressionFactory::create(
            PeriodizationPersona::WellTrained,
            TrainingPhaseType::Increase,
        );
        assert_eq!(tiers.len(), 4);
        assert!((tiers[0].volume_load_contribution - 0.8).abs() < f64::EPSILON);
        assert!((tiers[3].rpe_load_contribution - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_persona_falls_back_to_well_trained() {
        let fallback = PeriodizationProgressionFactory::create(
            PeriodizationPersona::Sedentary,
            TrainingPhaseType::Maintain,
        );
        let well_trained = PeriodizationProgressionFactory::create(
            PeriodizationPersona::WellTrained,
            TrainingPhaseType::Maintain,
        );
        assert_eq!(fallback, well_trained);
    }

    #[test]
    fn cardio_endurance_template() {
        let goal = PeriodizationGoalFactory::create(PeriodizationGoalType::IncreaseCardioEndurance);
        let priorities: Vec<u32> = goal
            .target_training_exposures
            .iter()
            .map(|t| t.priority)
            .collect();
        assert_eq!(priorities, vec![1, 2, 3, 5, 6]);
        assert_eq!(
            goal.target_training_exposures[0].training_exposures[0].weekly_load_percentage,
            Some(StandardErrorRange::bounded(20.0, 30.0))
        );
    }

    #[test]
    fn untemplated_goal_is_empty() {
        let goal = PeriodizationGoalFactory::create(PeriodizationGoalType::LoseWeight);
        assert!(goal.target_training_exposures.is_empty());
    }
}
