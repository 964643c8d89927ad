// ABOUTME: Training-load algorithms: capacity estimation, load metrics, reports and periodization
// ABOUTME: Pure, synchronous computation over in-memory athlete history built on pierre-core types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Algorithms of the Pierre periodization engine. Every calculator takes a
//! validated [`config::LoadModelConfig`], either the process-wide instance
//! via `new()` or an explicit one via `with_config()`.
//!
//! ## Modules
//!
//! - **capacity**: Capacity from workout history, persona defaults
//! - **training**: Weekly cycles, ACWR, ramp, monotony, strain, acute-load gaps
//! - **training_volume**: Range-valued metrics and gap bands
//! - **training_report**: Point-in-time training reports
//! - **periodization**: Plan creation, weekly progression, exposure matching
//! - **adaptation_history**: Soreness-based classification of past loads

/// Load-model thresholds with environment overrides
pub mod config;

/// Mean, standard deviation, standard error and z-scores
pub mod statistics;

/// Athlete capacity estimation
pub mod capacity;

/// Training cycles and the load calculator
pub mod training;

/// Training-volume metrics and gap bands
pub mod training_volume;

/// Training report generation
pub mod training_report;

/// Periodization plan engine
pub mod periodization;

/// Adaptation history from loading events
pub mod adaptation_history;

pub use adaptation_history::{AdaptationHistory, AdaptationHistoryProcessor};
pub use capacity::{AthleteCapacityProcessor, AthleteDefaultCapacityFactory};
pub use config::{ConfigError, LoadModelConfig};
pub use periodization::{
    PeriodizationGoalFactory, PeriodizationPlanProcessor, PeriodizationProgressionFactory,
    PeriodizationUtilities, TrainingPhaseFactory,
};
pub use statistics::LoadStatistics;
pub use training::{LoadCalculator, TrainingCycle, TrainingHistory};
pub use training_report::{TrainingReportGenerator, TrainingReportRequest};
pub use training_volume::{HistoricalStrain, TrainingVolumeProcessor};
