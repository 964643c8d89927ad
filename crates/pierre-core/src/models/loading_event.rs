// ABOUTME: Transient loading events built from session history for adaptation-history analysis
// ABOUTME: Tracks body parts that became sore after a load and how that soreness resolved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::injury_risk::{BodyPartLocation, Side};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Soreness attributed to a loading event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedBodyPart {
    /// Location
    pub body_part: BodyPartLocation,
    /// Side
    pub side: Side,
    /// Days the soreness persisted
    pub days_sore: u32,
    /// Highest reported severity
    pub max_severity: f64,
    /// Whether the soreness has resolved
    pub cleared: bool,
    /// First report time
    pub first_reported_date: Option<NaiveDateTime>,
    /// Most recent report time
    pub last_reported_date: Option<NaiveDateTime>,
}

impl AffectedBodyPart {
    /// Soreness record with no report dates yet
    #[must_use]
    pub const fn new(
        body_part: BodyPartLocation,
        side: Side,
        days_sore: u32,
        max_severity: f64,
        cleared: bool,
    ) -> Self {
        Self {
            body_part,
            side,
            days_sore,
            max_severity,
            cleared,
            first_reported_date: None,
            last_reported_date: None,
        }
    }

    /// Cleared within a day without lingering; treated as no soreness at all
    #[must_use]
    pub const fn is_negligible(&self) -> bool {
        self.cleared && self.days_sore <= 1
    }

    /// Cleared soreness that was mild and short
    #[must_use]
    pub fn indicates_functional_overreaching(
        &self,
        max_severity: f64,
        max_days_sore: u32,
    ) -> bool {
        self.cleared && self.max_severity <= max_severity && self.days_sore < max_days_sore
    }

    /// Cleared soreness that was severe or lasted too long
    #[must_use]
    pub fn indicates_non_functional_overreaching(
        &self,
        max_severity: f64,
        max_days_sore: u32,
    ) -> bool {
        self.cleared && (self.max_severity > max_severity || self.days_sore >= max_days_sore)
    }
}

/// One day's aggregated load and the soreness it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingEvent {
    /// When the load was applied
    pub loading_date: NaiveDateTime,
    /// Session RPE
    pub rpe: Option<f64>,
    /// Duration in minutes
    pub duration_minutes: Option<f64>,
    /// RPE × duration
    pub load: f64,
    /// Sport the load came from
    pub sport_name: String,
    /// Strength and conditioning category, if any
    pub strength_conditioning_type: Option<String>,
    /// Soreness attributed to this load
    pub affected_body_parts: Vec<AffectedBodyPart>,
    /// Soreness still present from earlier loads
    pub previous_affected_body_parts: Vec<AffectedBodyPart>,
    /// Load z-score against the athlete's history
    pub z_score: Option<f64>,
    /// ACWR using a two-week acute and three-week chronic window
    pub acwr_2_3: Option<f64>,
    /// Load of the preceding event
    pub lagged_load: Option<f64>,
    /// Rest days before this event
    pub days_rest: u32,
    /// Highest RPE within the preceding 72 hours
    pub highest_rpe_in_72_hrs: Option<f64>,
    /// True when this is the heaviest load in its 36-hour window
    pub highest_load_in_36_hrs: bool,
}

impl LoadingEvent {
    /// Event with a load and sport, nothing else derived yet
    #[must_use]
    pub fn new(loading_date: NaiveDateTime, load: f64, sport_name: impl Into<String>) -> Self {
        Self {
            loading_date,
            rpe: None,
            duration_minutes: None,
            load,
            sport_name: sport_name.into(),
            strength_conditioning_type: None,
            affected_body_parts: Vec::new(),
            previous_affected_body_parts: Vec::new(),
            z_score: None,
            acwr_2_3: None,
            lagged_load: None,
            days_rest: 0,
            highest_rpe_in_72_hrs: None,
            highest_load_in_36_hrs: false,
        }
    }

    /// Event derived from session RPE and duration
    #[must_use]
    pub fn from_session(
        loading_date: NaiveDateTime,
        rpe: f64,
        duration_minutes: f64,
        sport_name: impl Into<String>,
    ) -> Self {
        let mut event = Self::new(loading_date, rpe * duration_minutes, sport_name);
        event.rpe = Some(rpe);
        event.duration_minutes = Some(duration_minutes);
        event
    }

    /// Attach soreness attributed to this event
    #[must_use]
    pub fn with_affected_body_parts(mut self, parts: Vec<AffectedBodyPart>) -> Self {
        self.affected_body_parts = parts;
        self
    }

    /// Whether `part` was already sore for at least `days` days before this event
    #[must_use]
    pub fn has_existing_soreness(&self, part: &AffectedBodyPart, days: u32) -> bool {
        self.previous_affected_body_parts.iter().any(|previous| {
            previous.body_part == part.body_part
                && previous.side == part.side
                && previous.days_sore >= days
        })
    }

    /// No soreness, or only soreness that cleared within a day
    #[must_use]
    pub fn is_soreness_free(&self) -> bool {
        self.affected_body_parts
            .iter()
            .all(AffectedBodyPart::is_negligible)
    }
}
