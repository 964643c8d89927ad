// ABOUTME: Training stimulus taxonomy: detailed adaptation types and their sub-adaptation groups
// ABOUTME: Also defines training personas used to pick demographic default capacities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fine-grained physiological training stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailedAdaptationType {
    /// Low-intensity aerobic base building
    BaseAerobicTraining,
    /// Work around the anaerobic threshold
    AnaerobicThresholdTraining,
    /// High-intensity intervals above threshold
    HighIntensityAnaerobicTraining,
    /// Long-duration, moderate-load muscular work
    MuscularEndurance,
    /// Higher-rep strength work
    StrengthEndurance,
    /// Moderate-rep hypertrophy work
    Hypertrophy,
    /// Heavy, low-rep strength work
    MaximalStrength,
    /// Sprint and speed work
    Speed,
    /// Repeated power efforts
    SustainedPower,
    /// Explosive power work
    Power,
    /// Maximal explosive efforts
    MaximalPower,
}

impl DetailedAdaptationType {
    /// Every adaptation type in declaration order
    pub const ALL: [Self; 11] = [
        Self::BaseAerobicTraining,
        Self::AnaerobicThresholdTraining,
        Self::HighIntensityAnaerobicTraining,
        Self::MuscularEndurance,
        Self::StrengthEndurance,
        Self::Hypertrophy,
        Self::MaximalStrength,
        Self::Speed,
        Self::SustainedPower,
        Self::Power,
        Self::MaximalPower,
    ];

    /// The broader training category this type belongs to
    #[must_use]
    pub const fn sub_adaptation_type(self) -> SubAdaptationType {
        match self {
            Self::BaseAerobicTraining
            | Self::AnaerobicThresholdTraining
            | Self::HighIntensityAnaerobicTraining => SubAdaptationType::Cardiorespiratory,
            Self::MuscularEndurance
            | Self::StrengthEndurance
            | Self::Hypertrophy
            | Self::MaximalStrength => SubAdaptationType::Strength,
            Self::Speed | Self::SustainedPower | Self::Power | Self::MaximalPower => {
                SubAdaptationType::Power
            }
        }
    }

    /// Snake-case name used in logs and serialized payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseAerobicTraining => "base_aerobic_training",
            Self::AnaerobicThresholdTraining => "anaerobic_threshold_training",
            Self::HighIntensityAnaerobicTraining => "high_intensity_anaerobic_training",
            Self::MuscularEndurance => "muscular_endurance",
            Self::StrengthEndurance => "strength_endurance",
            Self::Hypertrophy => "hypertrophy",
            Self::MaximalStrength => "maximal_strength",
            Self::Speed => "speed",
            Self::SustainedPower => "sustained_power",
            Self::Power => "power",
            Self::MaximalPower => "maximal_power",
        }
    }
}

impl fmt::Display for DetailedAdaptationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad training category grouping detailed adaptation types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubAdaptationType {
    /// Cardio work
    Cardiorespiratory,
    /// Resistance work
    Strength,
    /// Speed and power work
    Power,
}

/// Unit a training volume is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMeasure {
    /// Time under work, in seconds
    Seconds,
    /// Repetitions or ground contacts
    Count,
}

/// Training experience level that selects demographic default capacities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPersona {
    /// No structured training background
    #[default]
    Beginner,
    /// Some months of training
    Novice,
    /// Consistent training for a year or more
    Intermediate,
    /// Several years of structured training
    Advanced,
    /// Competitive athlete
    Elite,
}

/// Per-category training personas; an athlete can be elite at cardio and a novice lifter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubAdaptationTypePersonas {
    /// Persona for cardiorespiratory work
    pub cardio_persona: TrainingPersona,
    /// Persona for power work
    pub power_persona: TrainingPersona,
    /// Persona for strength work
    pub strength_persona: TrainingPersona,
}

impl SubAdaptationTypePersonas {
    /// Use the same persona for every category
    #[must_use]
    pub const fn uniform(persona: TrainingPersona) -> Self {
        Self {
            cardio_persona: persona,
            power_persona: persona,
            strength_persona: persona,
        }
    }

    /// Persona governing the given category
    #[must_use]
    pub const fn for_sub_adaptation_type(&self, sub_type: SubAdaptationType) -> TrainingPersona {
        match sub_type {
            SubAdaptationType::Cardiorespiratory => self.cardio_persona,
            SubAdaptationType::Strength => self.strength_persona,
            SubAdaptationType::Power => self.power_persona,
        }
    }
}
