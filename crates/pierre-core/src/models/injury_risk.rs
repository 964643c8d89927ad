// ABOUTME: Per-body-part injury risk state (pain, ache, tightness, overreaching dates)
// ABOUTME: Supplied by the soreness-tracking collaborator and read by readiness and plan logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anatomical location tracked for soreness and overreaching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartLocation {
    /// Neck
    Neck,
    /// Shoulder
    Shoulder,
    /// Chest
    Chest,
    /// Upper back
    UpperBack,
    /// Lats
    Lats,
    /// Lower back
    LowerBack,
    /// Abdominals
    Abdominals,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearm
    Forearm,
    /// Glutes
    Glutes,
    /// Hip flexors
    HipFlexors,
    /// Groin
    Groin,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Knee
    Knee,
    /// Calves
    Calves,
    /// Shin
    Shin,
    /// Achilles
    Achilles,
    /// Ankle
    Ankle,
    /// Foot
    Foot,
}

impl BodyPartLocation {
    /// Hips and below
    #[must_use]
    pub const fn is_lower_body(self) -> bool {
        matches!(
            self,
            Self::Glutes
                | Self::HipFlexors
                | Self::Groin
                | Self::Quads
                | Self::Hamstrings
                | Self::Knee
                | Self::Calves
                | Self::Shin
                | Self::Achilles
                | Self::Ankle
                | Self::Foot
        )
    }
}

/// Side of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Midline or both sides
    #[default]
    Bilateral,
    /// Left side
    Left,
    /// Right side
    Right,
}

/// A body part on a specific side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyPartSide {
    /// Location
    pub body_part: BodyPartLocation,
    /// Side
    pub side: Side,
}

impl BodyPartSide {
    /// Create a body part side
    #[must_use]
    pub const fn new(body_part: BodyPartLocation, side: Side) -> Self {
        Self { body_part, side }
    }
}

/// Injury-risk history for one body part side
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyPartInjuryRisk {
    /// Last day sharp pain was reported
    pub last_sharp_date: Option<NaiveDate>,
    /// Severity of that sharp pain
    pub last_sharp_level: f64,
    /// Sharp pain reports in the last 20 days
    pub sharp_count_last_0_20_days: u32,
    /// Last day an ache was reported
    pub last_ache_date: Option<NaiveDate>,
    /// Severity of that ache
    pub last_ache_level: f64,
    /// Ache reports in the last 20 days
    pub ache_count_last_0_20_days: u32,
    /// Last day tightness was reported
    pub last_tight_date: Option<NaiveDate>,
    /// Severity of that tightness
    pub last_tight_level: f64,
    /// Tightness reports in the last 20 days
    pub tight_count_last_0_20_days: u32,
    /// Last day a load produced functional overreaching in this part
    pub last_functional_overreaching_date: Option<NaiveDate>,
    /// Last day a load produced non-functional overreaching in this part
    pub last_non_functional_overreaching_date: Option<NaiveDate>,
    /// Last day this part was under excessive strain
    pub last_excessive_strain_date: Option<NaiveDate>,
    /// Last day inflammation was inferred
    pub last_inflammation_date: Option<NaiveDate>,
}

impl BodyPartInjuryRisk {
    /// Functional overreaching recorded on `event_date`
    #[must_use]
    pub fn is_functional_overreaching(&self, event_date: NaiveDate) -> bool {
        self.last_functional_overreaching_date == Some(event_date)
    }

    /// Non-functional overreaching recorded on `event_date` or the day before
    #[must_use]
    pub fn is_non_functional_overreaching(&self, event_date: NaiveDate) -> bool {
        let since = event_date - Duration::days(1);
        self.last_non_functional_overreaching_date
            .is_some_and(|date| date >= since)
    }

    /// Excessive strain today, or a strain history combined with recent non-functional overreaching
    #[must_use]
    pub fn is_excessive_strain(&self, event_date: NaiveDate) -> bool {
        if self.last_excessive_strain_date == Some(event_date) {
            return true;
        }
        self.last_excessive_strain_date.is_some() && self.is_non_functional_overreaching(event_date)
    }

    /// Highest sharp or ache severity reported on `event_date`
    #[must_use]
    pub fn pain_severity_on(&self, event_date: NaiveDate) -> f64 {
        let sharp = if self.last_sharp_date == Some(event_date) {
            self.last_sharp_level
        } else {
            0.0
        };
        let ache = if self.last_ache_date == Some(event_date) {
            self.last_ache_level
        } else {
            0.0
        };
        sharp.max(ache)
    }
}

/// Injury-risk records keyed by body part side
pub type InjuryRiskDict = BTreeMap<BodyPartSide, BodyPartInjuryRisk>;
