// ABOUTME: Completed or estimated training session records consumed by the load calculators
// ABOUTME: Selects internal, external, and intensity-banded load through a typed attribute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of session, as reported by the athlete or the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Team or individual practice
    #[default]
    Practice,
    /// Strength and conditioning
    StrengthAndConditioning,
    /// Competitive game
    Game,
    /// Tournament day
    Tournament,
    /// Extra session added to push load up
    BumpUp,
    /// Corrective or mobility session
    Corrective,
}

/// Which load figure of a session a calculation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadAttribute {
    /// Session RPE × duration
    InternalLoad,
    /// Device-measured total load
    ExternalLoad,
    /// External load spent at high intensity
    HighIntensityLoad,
    /// External load spent at moderate intensity
    ModIntensityLoad,
    /// External load spent at low intensity
    LowIntensityLoad,
}

/// One training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Session identifier
    pub session_id: Uuid,
    /// Day the session happened
    pub event_date: NaiveDate,
    /// Kind of session
    pub session_type: SessionType,
    /// Session RPE (0-10)
    pub rpe: Option<f64>,
    /// Duration in minutes
    pub duration_minutes: Option<f64>,
    /// Device-measured total load
    pub external_load: Option<f64>,
    /// External load at high intensity
    pub high_intensity_load: Option<f64>,
    /// External load at moderate intensity
    pub mod_intensity_load: Option<f64>,
    /// External load at low intensity
    pub low_intensity_load: Option<f64>,
    /// True for sessions projected from the plan rather than recorded
    pub estimated: bool,
}

impl TrainingSession {
    /// Recorded session from RPE and duration
    #[must_use]
    pub fn new(event_date: NaiveDate, rpe: f64, duration_minutes: f64) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            event_date,
            session_type: SessionType::Practice,
            rpe: Some(rpe),
            duration_minutes: Some(duration_minutes),
            external_load: None,
            high_intensity_load: None,
            mod_intensity_load: None,
            low_intensity_load: None,
            estimated: false,
        }
    }

    /// Set the session type
    #[must_use]
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    /// Set external loads (total, high, moderate, low)
    #[must_use]
    pub fn with_external_loads(mut self, total: f64, high: f64, moderate: f64, low: f64) -> Self {
        self.external_load = Some(total);
        self.high_intensity_load = Some(high);
        self.mod_intensity_load = Some(moderate);
        self.low_intensity_load = Some(low);
        self
    }

    /// Mark as a projected session
    #[must_use]
    pub fn estimated(mut self) -> Self {
        self.estimated = true;
        self
    }

    /// Session RPE × duration, when both are known
    #[must_use]
    pub fn internal_load(&self) -> Option<f64> {
        match (self.rpe, self.duration_minutes) {
            (Some(rpe), Some(duration)) => Some(rpe * duration),
            _ => None,
        }
    }

    /// Load figure selected by `attribute`
    #[must_use]
    pub fn load(&self, attribute: LoadAttribute) -> Option<f64> {
        match attribute {
            LoadAttribute::InternalLoad => self.internal_load(),
            LoadAttribute::ExternalLoad => self.external_load,
            LoadAttribute::HighIntensityLoad => self.high_intensity_load,
            LoadAttribute::ModIntensityLoad => self.mod_intensity_load,
            LoadAttribute::LowIntensityLoad => self.low_intensity_load,
        }
    }
}
