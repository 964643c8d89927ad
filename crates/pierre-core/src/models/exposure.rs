// ABOUTME: Training exposures (prescribed doses) and the weekly exposure targets owed by an athlete
// ABOUTME: Includes workout programs whose exposures feed capacity estimation and need matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::adaptation::{DetailedAdaptationType, VolumeMeasure};
use super::range::StandardErrorRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prescribed (or performed) training dose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExposure {
    /// Stimulus this dose targets
    pub detailed_adaptation_type: DetailedAdaptationType,
    /// Intensity range
    pub rpe: StandardErrorRange,
    /// Volume range
    pub volume: StandardErrorRange,
    /// RPE multiplied by volume
    pub rpe_load: StandardErrorRange,
    /// Share of the weekly RPE load this dose should take, in percent
    pub weekly_load_percentage: Option<StandardErrorRange>,
    /// Unit of `volume`
    pub volume_measure: Option<VolumeMeasure>,
}

impl TrainingExposure {
    /// Exposure of the given type with no dose populated yet
    #[must_use]
    pub const fn new(detailed_adaptation_type: DetailedAdaptationType) -> Self {
        Self {
            detailed_adaptation_type,
            rpe: StandardErrorRange::empty(),
            volume: StandardErrorRange::empty(),
            rpe_load: StandardErrorRange::empty(),
            weekly_load_percentage: None,
            volume_measure: None,
        }
    }

    /// Set the weekly load share
    #[must_use]
    pub fn with_weekly_load_percentage(mut self, percentage: StandardErrorRange) -> Self {
        self.weekly_load_percentage = Some(percentage);
        self
    }

    /// Set the dose, deriving `rpe_load` from RPE × volume
    #[must_use]
    pub fn with_dose(mut self, rpe: StandardErrorRange, volume: StandardErrorRange) -> Self {
        self.rpe = rpe;
        self.volume = volume;
        self.rpe_load = rpe.multiply_range(&volume);
        self
    }

    /// Whether two exposures describe the same target slot of a goal template
    ///
    /// Same adaptation type, and either both load shares are absent or their
    /// lower, observed and upper components are exactly equal.
    #[must_use]
    pub fn is_same_target(&self, other: &Self) -> bool {
        if self.detailed_adaptation_type != other.detailed_adaptation_type {
            return false;
        }
        match (&self.weekly_load_percentage, &other.weekly_load_percentage) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.lower_bound == b.lower_bound
                    && a.observed_value == b.observed_value
                    && a.upper_bound == b.upper_bound
            }
            _ => false,
        }
    }
}

/// A goal template's weekly requirement: any one of `training_exposures`, `exposure_count` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetTrainingExposure {
    /// Alternatives that satisfy this requirement
    pub training_exposures: Vec<TrainingExposure>,
    /// How many times per week the requirement should be met
    pub exposure_count: StandardErrorRange,
    /// Lower numbers are scheduled first
    pub priority: u32,
}

impl TargetTrainingExposure {
    /// Create a target
    #[must_use]
    pub const fn new(
        training_exposures: Vec<TrainingExposure>,
        exposure_count: StandardErrorRange,
        priority: u32,
    ) -> Self {
        Self {
            training_exposures,
            exposure_count,
            priority,
        }
    }
}

/// Returns true when two exposure bundles have the same cardinality and
/// every positional pair is the same target slot
#[must_use]
pub fn training_exposures_match(a: &[TrainingExposure], b: &[TrainingExposure]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_same_target(y))
}

/// An athlete's copy of a target exposure, tracking what is still owed this week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteTargetTrainingExposure {
    /// Alternatives that satisfy this requirement, with doses populated from capacity
    pub training_exposures: Vec<TrainingExposure>,
    /// Remaining count owed this week
    pub exposure_count: StandardErrorRange,
    /// Lower numbers are scheduled first
    pub priority: u32,
    /// Index into the progression tiers
    pub progression_week: usize,
}

impl AthleteTargetTrainingExposure {
    /// Athlete copy of a template target, starting at progression week zero
    #[must_use]
    pub fn from_target(target: &TargetTrainingExposure) -> Self {
        Self {
            training_exposures: target.training_exposures.clone(),
            exposure_count: target.exposure_count,
            priority: target.priority,
            progression_week: 0,
        }
    }

    /// True once nothing is owed for the week
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !matches!(self.exposure_count.highest_value(), Some(count) if count > 0.0)
    }

    /// Record one completed exposure, never going below zero
    pub fn decrement_count(&mut self) {
        self.exposure_count = self.exposure_count.add_value(-1.0).floor_at(0.0);
    }

    /// Whether this target and a template target describe the same requirement
    #[must_use]
    pub fn matches_target(&self, target: &TargetTrainingExposure) -> bool {
        training_exposures_match(&self.training_exposures, &target.training_exposures)
    }
}

/// A workout (planned or completed) summarised by its training exposures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    /// Workout identifier
    pub workout_id: Uuid,
    /// Day the workout was (or will be) performed
    pub event_date: Option<NaiveDate>,
    /// Exposures detected in the workout
    pub training_exposures: Vec<TrainingExposure>,
}

impl WorkoutProgram {
    /// Workout with a fresh identifier
    #[must_use]
    pub fn new(event_date: Option<NaiveDate>, training_exposures: Vec<TrainingExposure>) -> Self {
        Self {
            workout_id: Uuid::new_v4(),
            event_date,
            training_exposures,
        }
    }
}
