// ABOUTME: Training-volume gap bands, load gaps, and the consolidated training report
// ABOUTME: Produced by the ramp, ACWR, monotony and strain calculators and the report generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::range::StandardErrorRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Severity of the current training volume, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLevel {
    /// Below the productive band
    Undertraining,
    /// Inside the productive band
    Optimal,
    /// Above the band; tolerable short term
    Overreaching,
    /// Well above the band
    Excessive,
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undertraining => "undertraining",
            Self::Optimal => "optimal",
            Self::Overreaching => "overreaching",
            Self::Excessive => "excessive",
        };
        f.write_str(name)
    }
}

/// Which risk lens produced a gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingVolumeGapType {
    /// Week-over-week ramp
    Ramp,
    /// Acute:chronic workload ratio
    Acwr,
    /// Load variability
    Monotony,
    /// Monotony × load
    Strain,
}

/// Band of additional load (relative to what is already done) one calculator allows
///
/// Negative thresholds mean load should be shed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingVolumeGap {
    /// Least additional load
    pub low_threshold: Option<f64>,
    /// Most additional load
    pub high_threshold: Option<f64>,
    /// Lens that produced the band
    pub training_volume_gap_type: TrainingVolumeGapType,
    /// Current level according to this lens
    pub training_level: Option<TrainingLevel>,
}

impl TrainingVolumeGap {
    /// Create a gap
    #[must_use]
    pub const fn new(
        low_threshold: Option<f64>,
        high_threshold: Option<f64>,
        training_volume_gap_type: TrainingVolumeGapType,
    ) -> Self {
        Self {
            low_threshold,
            high_threshold,
            training_volume_gap_type,
            training_level: None,
        }
    }

    /// Set the training level
    #[must_use]
    pub const fn with_training_level(mut self, training_level: TrainingLevel) -> Self {
        self.training_level = Some(training_level);
        self
    }
}

/// Monotony fix options: go lighter than the low option or heavier than the high option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonotonyGap {
    /// Lighter session; only `high_threshold` is set
    pub low_option: TrainingVolumeGap,
    /// Heavier session; only `low_threshold` is set
    pub high_option: TrainingVolumeGap,
}

/// Acute-load targets derived from ACWR and a ramp cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcuteLoadGap {
    /// Additional load to reach the bottom of the ACWR band
    pub low_target: f64,
    /// Additional load to reach the top of the ACWR band
    pub high_target: f64,
    /// Most additional load the week-over-week ramp allows, never negative
    pub ramp_cap: f64,
    /// Lower of `high_target` and `ramp_cap`
    pub target_load: f64,
}

/// Remaining load for the current week, per load attribute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadGap {
    /// External load
    pub external_total: Option<AcuteLoadGap>,
    /// External high-intensity load
    pub external_high_intensity: Option<AcuteLoadGap>,
    /// External moderate-intensity load
    pub external_moderate_intensity: Option<AcuteLoadGap>,
    /// External low-intensity load
    pub external_low_intensity: Option<AcuteLoadGap>,
    /// Internal (RPE) load
    pub internal_total: Option<AcuteLoadGap>,
}

impl LoadGap {
    /// True when any attribute produced a gap
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.external_total.is_some()
            || self.external_high_intensity.is_some()
            || self.external_moderate_intensity.is_some()
            || self.external_low_intensity.is_some()
            || self.internal_total.is_some()
    }
}

/// Point-in-time training report for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Athlete
    pub user_id: Uuid,
    /// Last day included in the report
    pub report_date: NaiveDate,
    /// Internal load of the last seven days
    pub acute_load: f64,
    /// Internal load of days 8-14
    pub previous_load: Option<f64>,
    /// Weekly internal loads preceding the acute week, most recent first
    pub chronic_weekly_loads: Vec<f64>,
    /// Acute:chronic ratio
    pub internal_acwr: Option<StandardErrorRange>,
    /// Week-over-week ratio
    pub internal_ramp: Option<StandardErrorRange>,
    /// Chronic minus acute load
    pub internal_freshness_index: Option<StandardErrorRange>,
    /// Monotony of the acute week
    pub internal_monotony: Option<StandardErrorRange>,
    /// Strain of the acute week
    pub internal_strain: Option<StandardErrorRange>,
    /// Strain spikes in the scan window
    pub internal_strain_events: Option<StandardErrorRange>,
    /// Daily rolling strain
    pub historical_internal_strain: Vec<StandardErrorRange>,
    /// Acute-load targets
    pub acute_load_gap: Option<AcuteLoadGap>,
    /// Every gap that could be computed
    pub gaps: Vec<TrainingVolumeGap>,
    /// Consolidated band
    pub recommended: Option<TrainingVolumeGap>,
    /// Consolidated level
    pub training_level: Option<TrainingLevel>,
}
