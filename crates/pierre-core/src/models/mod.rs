// ABOUTME: Core data models for training load, capacity and periodization
// ABOUTME: Re-exports the range primitive, adaptation taxonomy, plans, reports and injury-risk types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures shared by every calculator in the workspace. Models hold
//! state and small invariant-preserving helpers; the algorithms live in
//! `pierre-intelligence`.
//!
//! ## Design Principles
//!
//! - **Value semantics**: ranges are `Copy` and every arithmetic operation returns a new value
//! - **Enum keyed**: capacities are addressed by `DetailedAdaptationType`, never by name
//! - **Explicit absence**: insufficient data is `None` or a flagged range, not an error
//! - **Serializable**: every model round-trips through serde
//!
//! ## Core Models
//!
//! - `StandardErrorRange`: lower/observed/upper value with uncertainty
//! - `AthleteBaselineCapacities`: RPE and volume capacity per adaptation type
//! - `TrainingSession`: a recorded or projected session
//! - `PeriodizationPlan`: weekly targets and capacities for one athlete
//! - `TrainingReport`: consolidated load recommendation

mod adaptation;
mod capacity;
mod exposure;
mod injury_risk;
mod loading_event;
mod periodization;
mod range;
mod session;
mod training_volume;
mod user_stats;

// Range primitive
pub use range::StandardErrorRange;

// Adaptation taxonomy
pub use adaptation::{
    DetailedAdaptationType, SubAdaptationType, SubAdaptationTypePersonas, TrainingPersona,
    VolumeMeasure,
};

// Capacity domain
pub use capacity::{AthleteBaselineCapacities, TrainingUnit};

// Exposure domain
pub use exposure::{
    training_exposures_match, AthleteTargetTrainingExposure, TargetTrainingExposure,
    TrainingExposure, WorkoutProgram,
};

// Session domain
pub use session::{LoadAttribute, SessionType, TrainingSession};

// Periodization domain
pub use periodization::{
    PeriodizationGoal, PeriodizationGoalType, PeriodizationPersona, PeriodizationPlan,
    PeriodizationProgression, TrainingPhase, TrainingPhaseType,
};

// Training volume domain
pub use training_volume::{
    AcuteLoadGap, LoadGap, MonotonyGap, TrainingLevel, TrainingReport, TrainingVolumeGap,
    TrainingVolumeGapType,
};

// Injury risk and soreness
pub use injury_risk::{BodyPartInjuryRisk, BodyPartLocation, BodyPartSide, InjuryRiskDict, Side};
pub use loading_event::{AffectedBodyPart, LoadingEvent};

// Athlete statistics
pub use user_stats::UserStats;
