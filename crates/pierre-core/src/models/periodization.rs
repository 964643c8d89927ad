// ABOUTME: Periodization plan aggregate with training phases, personas, goals and progression tiers
// ABOUTME: The plan is created once and advanced in place at every seven-day boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::adaptation::SubAdaptationTypePersonas;
use super::capacity::AthleteBaselineCapacities;
use super::exposure::{AthleteTargetTrainingExposure, TargetTrainingExposure};
use super::injury_risk::{BodyPartSide, InjuryRiskDict};
use super::range::StandardErrorRange;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Load direction for the current block of training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhaseType {
    /// Unload; no target ACWR band
    Recovery,
    /// Reduce load ahead of competition
    Taper,
    /// Hold load steady
    #[default]
    Maintain,
    /// Build load gently
    SlowlyIncrease,
    /// Build load
    Increase,
    /// Build load quickly
    AggressivelyIncrease,
}

/// Athlete profile that selects the progression tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationPersona {
    /// Returning from or prone to injury
    HighInjuryRisk,
    /// Little to no training
    Sedentary,
    /// Recreational athlete building fitness
    RecreationalGaining,
    /// Recreational athlete holding fitness
    RecreationalMaintaining,
    /// Consistently trained athlete
    #[default]
    WellTrained,
    /// Elite athlete building fitness
    EliteAthleteGaining,
    /// Elite athlete holding fitness
    EliteAthleteMaintaining,
}

/// Goal an athlete trains toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationGoalType {
    /// General cardiovascular health
    IncreaseCardiovascularHealth,
    /// Weight loss
    LoseWeight,
    /// Aerobic endurance
    IncreaseCardioEndurance,
    /// Aerobic endurance with a speed component
    IncreaseCardioEnduranceWithSpeed,
    /// Maximal strength
    IncreaseStrengthMaxStrength,
    /// High-force athleticism
    IncreaseAthleticismHighForce,
    /// Low-force athleticism (speed and power)
    IncreaseAthleticismLowForce,
}

impl PeriodizationGoalType {
    /// Stable numeric code
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::IncreaseCardiovascularHealth => 10,
            Self::LoseWeight => 15,
            Self::IncreaseCardioEndurance => 20,
            Self::IncreaseCardioEnduranceWithSpeed => 25,
            Self::IncreaseStrengthMaxStrength => 30,
            Self::IncreaseAthleticismHighForce => 35,
            Self::IncreaseAthleticismLowForce => 40,
        }
    }

    /// Goal for a numeric code
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            10 => Some(Self::IncreaseCardiovascularHealth),
            15 => Some(Self::LoseWeight),
            20 => Some(Self::IncreaseCardioEndurance),
            25 => Some(Self::IncreaseCardioEnduranceWithSpeed),
            30 => Some(Self::IncreaseStrengthMaxStrength),
            35 => Some(Self::IncreaseAthleticismHighForce),
            40 => Some(Self::IncreaseAthleticismLowForce),
            _ => None,
        }
    }
}

/// A training phase and the ACWR band it targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPhase {
    /// Phase
    pub training_phase_type: TrainingPhaseType,
    /// Target acute:chronic band; empty for recovery
    pub acwr: StandardErrorRange,
}

impl TrainingPhase {
    /// Create a phase
    #[must_use]
    pub const fn new(training_phase_type: TrainingPhaseType, acwr: StandardErrorRange) -> Self {
        Self {
            training_phase_type,
            acwr,
        }
    }

    /// Whether the phase prescribes a load band at all
    #[must_use]
    pub const fn has_acwr_bounds(&self) -> bool {
        self.acwr.lower_bound.is_some() || self.acwr.upper_bound.is_some()
    }
}

/// One progression tier: how capacity growth splits between intensity and volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationProgression {
    /// Tier index
    pub week_number: usize,
    /// Phase the tier belongs to
    pub training_phase: TrainingPhase,
    /// Share of growth applied to RPE
    pub rpe_load_contribution: f64,
    /// Share of growth applied to volume
    pub volume_load_contribution: f64,
}

/// A goal and the weekly exposures it requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationGoal {
    /// Goal
    pub goal_type: PeriodizationGoalType,
    /// Weekly requirements, in priority order
    pub target_training_exposures: Vec<TargetTrainingExposure>,
}

/// An athlete's periodization plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationPlan {
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Goals the plan serves
    pub periodization_goals: Vec<PeriodizationGoalType>,
    /// Current phase
    pub training_phase_type: TrainingPhaseType,
    /// Persona selecting the progression tiers
    pub athlete_persona: PeriodizationPersona,
    /// Personas selecting default capacities
    pub sub_adaptation_type_personas: SubAdaptationTypePersonas,
    /// Current capacities
    pub athlete_capacities: AthleteBaselineCapacities,
    /// Target RPE load for the week; None without enough history
    pub target_weekly_rpe_load: Option<StandardErrorRange>,
    /// Weekly exposures still owed
    pub target_training_exposures: Vec<AthleteTargetTrainingExposure>,
    /// Workouts the athlete expects to do per week
    pub expected_weekly_workouts: Option<usize>,
}

impl PeriodizationPlan {
    /// Empty plan; targets are filled by the plan engine
    #[must_use]
    pub fn new(
        start_date: NaiveDate,
        periodization_goals: Vec<PeriodizationGoalType>,
        training_phase_type: TrainingPhaseType,
        athlete_persona: PeriodizationPersona,
        sub_adaptation_type_personas: SubAdaptationTypePersonas,
    ) -> Self {
        Self {
            start_date,
            periodization_goals,
            training_phase_type,
            athlete_persona,
            sub_adaptation_type_personas,
            athlete_capacities: AthleteBaselineCapacities::default(),
            target_weekly_rpe_load: None,
            target_training_exposures: Vec::new(),
            expected_weekly_workouts: None,
        }
    }

    /// Calendar weeks between the plan start and `event_date`, counted Monday to Monday
    #[must_use]
    pub fn get_week_number(&self, event_date: NaiveDate) -> i64 {
        let start_monday = monday_of(self.start_date);
        let event_monday = monday_of(event_date);
        let days = (event_monday - start_monday).num_days();
        // Monday-aligned differences are whole weeks; round for symmetry with negative offsets
        (days as f64 / 7.0).round() as i64
    }

    /// Start date of the plan week containing `event_date`
    #[must_use]
    pub fn get_week_start_date(&self, event_date: NaiveDate) -> NaiveDate {
        self.start_date + Duration::weeks(self.get_week_number(event_date))
    }

    /// True when `event_date` is a positive multiple of seven days after the start
    ///
    /// The start date itself (day 0) is not a week start: the plan was built
    /// on that day, so there is nothing to advance.
    #[must_use]
    pub fn is_week_start_date(&self, event_date: NaiveDate) -> bool {
        let days = (event_date - self.start_date).num_days();
        days > 0 && days % 7 == 0
    }

    /// Body parts in functional overreaching on `event_date`
    #[must_use]
    pub fn functional_overreaching_muscles(
        &self,
        injury_risk: &InjuryRiskDict,
        event_date: NaiveDate,
    ) -> Vec<BodyPartSide> {
        injury_risk
            .iter()
            .filter(|(_, risk)| risk.is_functional_overreaching(event_date))
            .map(|(part, _)| *part)
            .collect()
    }

    /// Body parts in non-functional overreaching on `event_date`
    #[must_use]
    pub fn non_functional_overreaching_muscles(
        &self,
        injury_risk: &InjuryRiskDict,
        event_date: NaiveDate,
    ) -> Vec<BodyPartSide> {
        injury_risk
            .iter()
            .filter(|(_, risk)| risk.is_non_functional_overreaching(event_date))
            .map(|(part, _)| *part)
            .collect()
    }
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
