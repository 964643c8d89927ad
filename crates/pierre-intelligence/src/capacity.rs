// ABOUTME: Capacity estimation from workout history and demographic default capacities
// ABOUTME: Reconciles demonstrated and default capacity by keeping whichever has the higher RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Athlete Capacity
//!
//! Estimates how much RPE and volume an athlete can handle per adaptation
//! type. History wins when it shows more than the persona default; defaults
//! only fill gaps.

use pierre_core::models::{
    AthleteBaselineCapacities, DetailedAdaptationType, StandardErrorRange,
    SubAdaptationTypePersonas, TrainingExposure, TrainingPersona, TrainingUnit, WorkoutProgram,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Exposures averaged per adaptation type when estimating from history
const TOP_EXPOSURES_PER_TYPE: usize = 2;

/// Default intensity and per-persona volume (beginner, novice, intermediate, advanced, elite)
struct DefaultCapacity {
    adaptation_type: DetailedAdaptationType,
    rpe: f64,
    volumes: [Option<f64>; 5],
}

/// Cardio volumes are seconds of work
const CARDIO_DEFAULTS: [DefaultCapacity; 3] = [
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::BaseAerobicTraining,
        rpe: 3.0,
        volumes: [Some(300.0), Some(300.0), Some(600.0), Some(600.0), Some(600.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::AnaerobicThresholdTraining,
        rpe: 5.0,
        volumes: [None, Some(240.0), Some(540.0), Some(720.0), Some(900.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::HighIntensityAnaerobicTraining,
        rpe: 7.1,
        volumes: [None, None, Some(60.0), Some(120.0), Some(120.0)],
    },
];

/// Strength volumes are repetitions
const STRENGTH_DEFAULTS: [DefaultCapacity; 3] = [
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::StrengthEndurance,
        rpe: 5.0,
        volumes: [Some(48.0), Some(60.0), Some(72.0), Some(84.0), Some(96.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::Hypertrophy,
        rpe: 7.2,
        volumes: [None, None, Some(72.0), Some(90.0), Some(108.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::MaximalStrength,
        rpe: 9.1,
        volumes: [None, None, None, Some(4.0), Some(5.0)],
    },
];

/// Power volumes are contacts or seconds of work
const POWER_DEFAULTS: [DefaultCapacity; 4] = [
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::Speed,
        rpe: 2.5,
        volumes: [Some(48.0), Some(64.0), Some(80.0), Some(80.0), Some(80.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::Power,
        rpe: 4.5,
        volumes: [None, Some(12.0), Some(32.0), Some(90.0), Some(120.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::MaximalPower,
        rpe: 6.5,
        volumes: [None, None, None, Some(60.0), Some(120.0)],
    },
    DefaultCapacity {
        adaptation_type: DetailedAdaptationType::SustainedPower,
        rpe: 6.0,
        volumes: [None, Some(240.0), Some(540.0), Some(720.0), Some(900.0)],
    },
];

const fn persona_index(persona: TrainingPersona) -> usize {
    match persona {
        TrainingPersona::Beginner => 0,
        TrainingPersona::Novice => 1,
        TrainingPersona::Intermediate => 2,
        TrainingPersona::Advanced => 3,
        TrainingPersona::Elite => 4,
    }
}

/// Builds demographic default capacities from training personas
pub struct AthleteDefaultCapacityFactory;

impl AthleteDefaultCapacityFactory {
    /// Cardiorespiratory defaults for a persona
    #[must_use]
    pub fn get_cardio_capacities(persona: TrainingPersona) -> AthleteBaselineCapacities {
        Self::from_table(&CARDIO_DEFAULTS, persona)
    }

    /// Strength defaults for a persona
    #[must_use]
    pub fn get_strength_capacities(persona: TrainingPersona) -> AthleteBaselineCapacities {
        Self::from_table(&STRENGTH_DEFAULTS, persona)
    }

    /// Power defaults for a persona
    #[must_use]
    pub fn get_power_capacities(persona: TrainingPersona) -> AthleteBaselineCapacities {
        Self::from_table(&POWER_DEFAULTS, persona)
    }

    /// Defaults for every category, each from its own persona
    #[must_use]
    pub fn get_default_capacities(
        personas: &SubAdaptationTypePersonas,
    ) -> AthleteBaselineCapacities {
        let mut capacities = AthleteBaselineCapacities::default();
        let categories = [
            Self::get_cardio_capacities(personas.cardio_persona),
            Self::get_strength_capacities(personas.strength_persona),
            Self::get_power_capacities(personas.power_persona),
        ];
        for category in &categories {
            for (adaptation_type, unit) in category.iter() {
                capacities.set(adaptation_type, Some(*unit));
            }
        }
        capacities
    }

    fn from_table(table: &[DefaultCapacity], persona: TrainingPersona) -> AthleteBaselineCapacities {
        let index = persona_index(persona);
        let mut capacities = AthleteBaselineCapacities::default();
        for entry in table {
            let volume = entry.volumes[index].map_or_else(
                StandardErrorRange::empty,
                StandardErrorRange::observed,
            );
            capacities.set(
                entry.adaptation_type,
                Some(TrainingUnit::new(
                    StandardErrorRange::observed(entry.rpe),
                    volume,
                )),
            );
        }
        capacities
    }
}

/// Estimates and reconciles athlete capacities
#[derive(Debug, Default, Clone, Copy)]
pub struct AthleteCapacityProcessor;

impl AthleteCapacityProcessor {
    /// Create a processor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Capacity per adaptation type from the heaviest exposures in `workouts`
    ///
    /// Types with two or more exposures average the top two by RPE load; a
    /// single exposure is used as is; types never trained stay unset.
    #[must_use]
    pub fn get_capacity_from_workout_history(
        &self,
        workouts: &[WorkoutProgram],
    ) -> AthleteBaselineCapacities {
        let mut buckets: BTreeMap<DetailedAdaptationType, Vec<&TrainingExposure>> =
            BTreeMap::new();
        for exposure in workouts.iter().flat_map(|w| w.training_exposures.iter()) {
            buckets
                .entry(exposure.detailed_adaptation_type)
                .or_default()
                .push(exposure);
        }

        let mut capacities = AthleteBaselineCapacities::default();
        for (adaptation_type, mut exposures) in buckets {
            exposures.sort_by(|a, b| {
                compare_optional(b.rpe_load.highest_value(), a.rpe_load.highest_value())
            });
            let top: Vec<&TrainingExposure> =
                exposures.into_iter().take(TOP_EXPOSURES_PER_TYPE).collect();
            let rpes: Vec<StandardErrorRange> = top.iter().map(|e| e.rpe).collect();
            let volumes: Vec<StandardErrorRange> = top.iter().map(|e| e.volume).collect();
            let unit = TrainingUnit::new(
                StandardErrorRange::average(&rpes),
                StandardErrorRange::average(&volumes),
            );
            debug!(
                adaptation_type = %adaptation_type,
                exposures = top.len(),
                "capacity estimated from workout history"
            );
            capacities.set(adaptation_type, Some(unit));
        }
        capacities
    }

    /// Fill unset capacities with persona defaults and upgrade any that a default beats
    #[must_use]
    pub fn update_capacity_with_defaults(
        &self,
        athlete_capacities: AthleteBaselineCapacities,
        personas: &SubAdaptationTypePersonas,
    ) -> AthleteBaselineCapacities {
        let defaults = AthleteDefaultCapacityFactory::get_default_capacities(personas);
        let mut updated = athlete_capacities;
        for adaptation_type in DetailedAdaptationType::ALL {
            let highest =
                Self::get_highest_capacity(updated.get(adaptation_type), defaults.get(adaptation_type));
            updated.set(adaptation_type, highest);
        }
        updated
    }

    /// The candidate replaces the existing capacity only when its RPE reaches strictly higher
    #[must_use]
    pub fn get_highest_capacity(
        existing: Option<&TrainingUnit>,
        candidate: Option<&TrainingUnit>,
    ) -> Option<TrainingUnit> {
        match (existing, candidate) {
            (None, candidate) => candidate.copied(),
            (Some(existing), None) => Some(*existing),
            (Some(existing), Some(candidate)) => {
                let candidate_wins = matches!(
                    (candidate.rpe.highest_value(), existing.rpe.highest_value()),
                    (Some(c), Some(e)) if c > e
                ) || (candidate.rpe.highest_value().is_some()
                    && existing.rpe.highest_value().is_none());
                if candidate_wins {
                    Some(*candidate)
                } else {
                    Some(*existing)
                }
            }
        }
    }
}

/// Orders `Some` values numerically with `None` treated as the smallest
fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn beginner_defaults_leave_untrained_volumes_empty() {
        let caps = AthleteDefaultCapacityFactory::get_cardio_capacities(TrainingPersona::Beginner);
        let base = caps
            .get(DetailedAdaptationType::BaseAerobicTraining)
            .unwrap();
        assert_eq!(base.volume.observed_value, Some(300.0));
        let threshold = caps
            .get(DetailedAdaptationType::AnaerobicThresholdTraining)
            .unwrap();
        assert!(threshold.volume.is_empty());
        assert_eq!(threshold.rpe.observed_value, Some(5.0));
    }

    #[test]
    fn muscular_endurance_has_no_default() {
        let caps = AthleteDefaultCapacityFactory::get_default_capacities(
            &SubAdaptationTypePersonas::uniform(TrainingPersona::Elite),
        );
        assert!(caps.get(DetailedAdaptationType::MuscularEndurance).is_none());
        assert_eq!(caps.len(), 10);
    }

    #[test]
    fn tie_keeps_existing_capacity() {
        let existing = TrainingUnit::new(
            StandardErrorRange::observed(5.0),
            StandardErrorRange::observed(100.0),
        );
        let candidate = TrainingUnit::new(
            StandardErrorRange::observed(5.0),
            StandardErrorRange::observed(10.0),
        );
        let winner =
            AthleteCapacityProcessor::get_highest_capacity(Some(&existing), Some(&candidate))
                .unwrap();
        assert_eq!(winner, existing);
    }
}
