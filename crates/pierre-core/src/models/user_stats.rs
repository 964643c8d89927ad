// ABOUTME: Aggregated athlete statistics supplied to the periodization engine
// ABOUTME: Session counts, weekly load averages, ACWR and strain-event summaries, capacities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::capacity::AthleteBaselineCapacities;
use super::range::StandardErrorRange;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Statistics about an athlete's recent training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Athlete
    pub user_id: Uuid,
    /// Sessions recorded in the history window
    pub total_historical_sessions: usize,
    /// Average weekly internal (RPE) load
    pub average_weekly_internal_load: Option<StandardErrorRange>,
    /// Internal-load ACWR
    pub internal_acwr: Option<StandardErrorRange>,
    /// Power-load ACWR
    pub power_load_acwr: Option<StandardErrorRange>,
    /// Internal strain spikes in the scan window
    pub internal_strain_events: Option<StandardErrorRange>,
    /// Power-load strain spikes in the scan window
    pub power_load_strain_events: Option<StandardErrorRange>,
    /// Capacities estimated from history
    pub athlete_capacities: AthleteBaselineCapacities,
    /// Workouts the athlete expects to do per week
    pub expected_weekly_workouts: usize,
}

impl UserStats {
    /// Stats with no history
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            total_historical_sessions: 0,
            average_weekly_internal_load: None,
            internal_acwr: None,
            power_load_acwr: None,
            internal_strain_events: None,
            power_load_strain_events: None,
            athlete_capacities: AthleteBaselineCapacities::default(),
            expected_weekly_workouts: 3,
        }
    }

    /// Set the session count and average weekly load
    #[must_use]
    pub fn with_history(
        mut self,
        total_historical_sessions: usize,
        average_weekly_internal_load: StandardErrorRange,
    ) -> Self {
        self.total_historical_sessions = total_historical_sessions;
        self.average_weekly_internal_load = Some(average_weekly_internal_load);
        self
    }

    /// Set the capacities estimated from history
    #[must_use]
    pub fn with_capacities(mut self, athlete_capacities: AthleteBaselineCapacities) -> Self {
        self.athlete_capacities = athlete_capacities;
        self
    }
}
