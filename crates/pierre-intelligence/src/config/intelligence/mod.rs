// ABOUTME: Load-model configuration for ACWR, ramp, monotony, strain and periodization thresholds
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load Model Configuration Module
//!
//! Provides validated configuration for every calculator in this crate.
//!
//! # Module Structure
//!
//! - `load` - ACWR, ramp, monotony and strain bands plus statistical parameters
//! - `periodization` - Plan preconditions, RPE cap and adaptation-history classification
//! - `error` - Validation errors
//!
//! # Environment Overrides
//!
//! Every threshold can be overridden with a `PERIODIZATION_*` variable, for
//! example `PERIODIZATION_ACWR_OPTIMAL_HIGH=1.25`. Overrides are validated
//! after they are applied.

pub mod error;
pub mod load;
pub mod periodization;

pub use error::ConfigError;
pub use load::{
    AcwrThresholds, MonotonyThresholds, RampThresholds, StatisticalConfig, StrainThresholds,
};
pub use periodization::{AdaptationHistoryConfig, PeriodizationConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static LOAD_MODEL_CONFIG: OnceLock<LoadModelConfig> = OnceLock::new();

/// Main load-model configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadModelConfig {
    /// Acute:chronic workload ratio bands
    pub acwr: AcwrThresholds,
    /// Week-over-week ramp bands
    pub ramp: RampThresholds,
    /// Monotony limits
    pub monotony: MonotonyThresholds,
    /// Strain spike detection
    pub strain: StrainThresholds,
    /// Standard-error range parameters
    pub statistical: StatisticalConfig,
    /// Periodization engine limits
    pub periodization: PeriodizationConfig,
    /// Adaptation-history classification
    pub adaptation: AdaptationHistoryConfig,
}

impl LoadModelConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        LOAD_MODEL_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load load-model config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.acwr.validate()?;
        self.ramp.validate()?;
        self.monotony.validate()?;
        self.strain.validate()?;
        self.statistical.validate()?;
        self.periodization.validate()?;
        self.adaptation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // ACWR bands
        Self::apply_env_var("PERIODIZATION_ACWR_OPTIMAL_LOW", &mut self.acwr.optimal_low)?;
        Self::apply_env_var(
            "PERIODIZATION_ACWR_OPTIMAL_HIGH",
            &mut self.acwr.optimal_high,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_ACWR_OVERREACHING_LOW",
            &mut self.acwr.overreaching_low,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_ACWR_OVERREACHING_HIGH",
            &mut self.acwr.overreaching_high,
        )?;
        Self::apply_env_var("PERIODIZATION_ACWR_EXCESSIVE", &mut self.acwr.excessive)?;

        // Ramp bands
        Self::apply_env_var(
            "PERIODIZATION_RAMP_OPTIMAL_HIGH",
            &mut self.ramp.optimal_high,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_RAMP_OVERREACHING_HIGH",
            &mut self.ramp.overreaching_high,
        )?;

        // Monotony and strain
        Self::apply_env_var(
            "PERIODIZATION_MONOTONY_OVERREACHING",
            &mut self.monotony.overreaching,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_MONOTONY_EXCESSIVE",
            &mut self.monotony.excessive,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_STRAIN_SPIKE_STDEV_FACTOR",
            &mut self.strain.spike_stdev_factor,
        )?;

        // Statistics
        Self::apply_env_var(
            "PERIODIZATION_EXPECTED_WEEKLY_WORKOUTS",
            &mut self.statistical.expected_weekly_workouts,
        )?;
        Self::apply_env_var("PERIODIZATION_Z_SCORE", &mut self.statistical.z_score_95)?;

        // Plan engine
        Self::apply_env_var(
            "PERIODIZATION_MIN_HISTORICAL_SESSIONS",
            &mut self.periodization.min_historical_sessions,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_HISTORY_WINDOW_DAYS",
            &mut self.periodization.history_window_days,
        )?;
        Self::apply_env_var("PERIODIZATION_MAX_RPE", &mut self.periodization.max_rpe)?;

        Ok(self)
    }
}
