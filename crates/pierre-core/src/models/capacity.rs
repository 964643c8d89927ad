// ABOUTME: Athlete training capacity per detailed adaptation type (RPE and volume ranges)
// ABOUTME: Fixed-schema capacity record with enum-keyed accessors instead of name lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::adaptation::DetailedAdaptationType;
use super::range::StandardErrorRange;
use serde::{Deserialize, Serialize};

/// One adaptation type's capacity data point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingUnit {
    /// Intensity the athlete can sustain
    pub rpe: StandardErrorRange,
    /// Volume the athlete can sustain at that intensity
    pub volume: StandardErrorRange,
}

impl TrainingUnit {
    /// Create a training unit
    #[must_use]
    pub const fn new(rpe: StandardErrorRange, volume: StandardErrorRange) -> Self {
        Self { rpe, volume }
    }

    /// RPE multiplied by volume
    #[must_use]
    pub fn rpe_load(&self) -> StandardErrorRange {
        self.rpe.multiply_range(&self.volume)
    }
}

/// Baseline capacity for every detailed adaptation type
///
/// Unset entries mean no capacity is known yet; consumers must treat them as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AthleteBaselineCapacities {
    /// Cardio: aerobic base
    pub base_aerobic_training: Option<TrainingUnit>,
    /// Cardio: threshold
    pub anaerobic_threshold_training: Option<TrainingUnit>,
    /// Cardio: high-intensity intervals
    pub high_intensity_anaerobic_training: Option<TrainingUnit>,
    /// Strength: muscular endurance
    pub muscular_endurance: Option<TrainingUnit>,
    /// Strength: strength endurance
    pub strength_endurance: Option<TrainingUnit>,
    /// Strength: hypertrophy
    pub hypertrophy: Option<TrainingUnit>,
    /// Strength: maximal strength
    pub maximal_strength: Option<TrainingUnit>,
    /// Power: speed
    pub speed: Option<TrainingUnit>,
    /// Power: sustained power
    pub sustained_power: Option<TrainingUnit>,
    /// Power: power
    pub power: Option<TrainingUnit>,
    /// Power: maximal power
    pub maximal_power: Option<TrainingUnit>,
}

impl AthleteBaselineCapacities {
    /// Capacity recorded for an adaptation type
    #[must_use]
    pub const fn get(&self, adaptation_type: DetailedAdaptationType) -> Option<&TrainingUnit> {
        match adaptation_type {
            DetailedAdaptationType::BaseAerobicTraining => self.base_aerobic_training.as_ref(),
            DetailedAdaptationType::AnaerobicThresholdTraining => {
                self.anaerobic_threshold_training.as_ref()
            }
            DetailedAdaptationType::HighIntensityAnaerobicTraining => {
                self.high_intensity_anaerobic_training.as_ref()
            }
            DetailedAdaptationType::MuscularEndurance => self.muscular_endurance.as_ref(),
            DetailedAdaptationType::StrengthEndurance => self.strength_endurance.as_ref(),
            DetailedAdaptationType::Hypertrophy => self.hypertrophy.as_ref(),
            DetailedAdaptationType::MaximalStrength => self.maximal_strength.as_ref(),
            DetailedAdaptationType::Speed => self.speed.as_ref(),
            DetailedAdaptationType::SustainedPower => self.sustained_power.as_ref(),
            DetailedAdaptationType::Power => self.power.as_ref(),
            DetailedAdaptationType::MaximalPower => self.maximal_power.as_ref(),
        }
    }

    /// Replace the capacity for an adaptation type
    pub fn set(&mut self, adaptation_type: DetailedAdaptationType, unit: Option<TrainingUnit>) {
        *self.slot_mut(adaptation_type) = unit;
    }

    /// Builder-style variant of [`Self::set`]
    #[must_use]
    pub fn with(mut self, adaptation_type: DetailedAdaptationType, unit: TrainingUnit) -> Self {
        self.set(adaptation_type, Some(unit));
        self
    }

    /// Iterate over the capacities that are set
    pub fn iter(&self) -> impl Iterator<Item = (DetailedAdaptationType, &TrainingUnit)> + '_ {
        DetailedAdaptationType::ALL
            .into_iter()
            .filter_map(|adaptation_type| self.get(adaptation_type).map(|u| (adaptation_type, u)))
    }

    /// Number of adaptation types with a known capacity
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no capacity is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, adaptation_type: DetailedAdaptationType) -> &mut Option<TrainingUnit> {
        match adaptation_type {
            DetailedAdaptationType::BaseAerobicTraining => &mut self.base_aerobic_training,
            DetailedAdaptationType::AnaerobicThresholdTraining => {
                &mut self.anaerobic_threshold_training
            }
            DetailedAdaptationType::HighIntensityAnaerobicTraining => {
                &mut self.high_intensity_anaerobic_training
            }
            DetailedAdaptationType::MuscularEndurance => &mut self.muscular_endurance,
            DetailedAdaptationType::StrengthEndurance => &mut self.strength_endurance,
            DetailedAdaptationType::Hypertrophy => &mut self.hypertrophy,
            DetailedAdaptationType::MaximalStrength => &mut self.maximal_strength,
            DetailedAdaptationType::Speed => &mut self.speed,
            DetailedAdaptationType::SustainedPower => &mut self.sustained_power,
            DetailedAdaptationType::Power => &mut self.power,
            DetailedAdaptationType::MaximalPower => &mut self.maximal_power,
        }
    }
}
