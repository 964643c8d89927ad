// ABOUTME: Main library entry point for the Pierre training-load and periodization engine
// ABOUTME: Re-exports the core model and algorithm crates and provides the logging bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Periodization
//!
//! Training-load modeling and periodization planning for athletes.
//!
//! ## Features
//!
//! - **Capacity estimation**: Per-adaptation RPE and volume capacity from
//!   workout history, with persona defaults for untested adaptations
//! - **Load metrics**: ACWR, ramp, monotony, strain and freshness, both as
//!   scalars and as standard-error ranges
//! - **Training reports**: Gap bands telling how much more load the athlete
//!   can take this week and how risky the current level is
//! - **Periodization plans**: Weekly exposure targets that progress on plan
//!   week boundaries
//!
//! ## Architecture
//!
//! - **`pierre_core`**: Errors, constants and the data model
//! - **`pierre_intelligence`**: The algorithms and their configuration
//! - **logging**: Structured logging bootstrap for embedding applications
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use pierre_periodization::{TrainingReportGenerator, TrainingReportRequest};
//! use uuid::Uuid;
//!
//! let report_date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default();
//! let loads = vec![(report_date, 420.0)];
//! let request = TrainingReportRequest::new(Uuid::new_v4(), report_date, loads);
//! let report = TrainingReportGenerator::new().generate(&request);
//! println!("acute load: {}", report.acute_load);
//! ```

/// Structured logging configuration
pub mod logging;

pub use pierre_core::errors::{AppError, AppResult, ErrorCode};
pub use pierre_core::models;
pub use pierre_intelligence::{
    AdaptationHistory, AdaptationHistoryProcessor, AthleteCapacityProcessor,
    AthleteDefaultCapacityFactory, ConfigError, LoadCalculator, LoadModelConfig, LoadStatistics,
    PeriodizationGoalFactory, PeriodizationPlanProcessor, PeriodizationProgressionFactory,
    PeriodizationUtilities, TrainingCycle, TrainingHistory, TrainingPhaseFactory,
    TrainingReportGenerator, TrainingReportRequest, TrainingVolumeProcessor,
};

/// Install the tracing subscriber described by the environment
///
/// # Errors
///
/// Returns an internal error if a global subscriber is already installed
pub fn init_logging() -> AppResult<()> {
    logging::init_from_env()
        .map_err(|e| AppError::internal(format!("Logging initialization failed: {e}")))
}
