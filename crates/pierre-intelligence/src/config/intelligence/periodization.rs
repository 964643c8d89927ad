// ABOUTME: Periodization engine and adaptation-history configuration
// ABOUTME: Plan-creation preconditions, RPE cap, exposure matching tolerance, soreness classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use pierre_core::constants::{adaptation, periodization, windows};
use serde::{Deserialize, Serialize};

/// Periodization engine limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Sessions required in the history window before a plan can be created
    pub min_historical_sessions: usize,
    /// History window in days
    pub history_window_days: i64,
    /// Top of the RPE scale; capacity growth never exceeds it
    pub max_rpe: f64,
    /// Tolerance when matching workout RPE against an athlete need
    pub exposure_match_factor: f64,
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            min_historical_sessions: periodization::MIN_HISTORICAL_SESSIONS,
            history_window_days: periodization::HISTORY_WINDOW_DAYS,
            max_rpe: periodization::MAX_RPE,
            exposure_match_factor: periodization::EXPOSURE_MATCH_FACTOR,
        }
    }
}

impl PeriodizationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rpe <= 0.0 || self.max_rpe > periodization::MAX_RPE {
            return Err(ConfigError::ValueOutOfRange("max_rpe must be in (0, 10]"));
        }
        if self.history_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history_window_days must be > 0",
            ));
        }
        if self.exposure_match_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "exposure_match_factor must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Adaptation-history classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationHistoryConfig {
    /// Share of the highest load at or below which a soreness-free session counts as recovery
    pub recovery_load_share: f64,
    /// Highest soreness severity still treated as functional overreaching
    pub functional_overreaching_max_severity: f64,
    /// Days of soreness at which overreaching becomes non-functional
    pub non_functional_soreness_days: u32,
    /// Only the heaviest load inside this many hours can cause soreness
    pub highest_load_window_hours: i64,
}

impl Default for AdaptationHistoryConfig {
    fn default() -> Self {
        Self {
            recovery_load_share: adaptation::RECOVERY_LOAD_SHARE,
            functional_overreaching_max_severity: adaptation::FUNCTIONAL_OVERREACHING_MAX_SEVERITY,
            non_functional_soreness_days: adaptation::NON_FUNCTIONAL_SORENESS_DAYS,
            highest_load_window_hours: windows::HIGHEST_LOAD_WINDOW_HOURS,
        }
    }
}

impl AdaptationHistoryConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.recovery_load_share) {
            return Err(ConfigError::ValueOutOfRange(
                "recovery_load_share must be in [0, 1)",
            ));
        }
        if self.highest_load_window_hours <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "highest_load_window_hours must be > 0",
            ));
        }
        Ok(())
    }
}
