// ABOUTME: Integration tests for periodization plan creation, weekly advancement and exposure matching
// ABOUTME: Covers the history precondition, weekly RPE-load targets, capacity growth and the RPE cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use pierre_periodization::models::{
    AthleteBaselineCapacities, AthleteTargetTrainingExposure, BodyPartInjuryRisk,
    BodyPartLocation, BodyPartSide, DetailedAdaptationType, InjuryRiskDict,
    PeriodizationGoalType, PeriodizationPersona, PeriodizationPlan, Side, StandardErrorRange,
    SubAdaptationTypePersonas, TrainingExposure, TrainingPersona, TrainingPhaseType, TrainingUnit,
    UserStats, WorkoutProgram,
};
use pierre_periodization::{
    ErrorCode, LoadModelConfig, PeriodizationPlanProcessor, PeriodizationProgressionFactory,
    PeriodizationUtilities, TrainingPhaseFactory,
};
use std::collections::BTreeMap;
use uuid::Uuid;

const EPSILON: f64 = 1e-9;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn processor() -> PeriodizationPlanProcessor {
    PeriodizationPlanProcessor::with_config(LoadModelConfig::default())
}

fn personas() -> SubAdaptationTypePersonas {
    SubAdaptationTypePersonas::uniform(TrainingPersona::Intermediate)
}

fn stats(sessions: usize) -> UserStats {
    UserStats::new(Uuid::new_v4()).with_history(sessions, StandardErrorRange::observed(1000.0))
}

fn cardio_plan(phase: TrainingPhaseType) -> PeriodizationPlan {
    processor()
        .create_periodization_plan(
            date(1, 1),
            vec![PeriodizationGoalType::IncreaseCardioEndurance],
            phase,
            PeriodizationPersona::WellTrained,
            personas(),
            &stats(6),
        )
        .unwrap()
}

fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < 1e-6)
}

// ============================================================================
// Plan creation
// ============================================================================

#[test]
fn test_creation_requires_five_recent_sessions() {
    let user_stats = stats(4);
    let err = processor()
        .create_periodization_plan(
            date(1, 1),
            vec![PeriodizationGoalType::IncreaseCardioEndurance],
            TrainingPhaseType::Increase,
            PeriodizationPersona::WellTrained,
            personas(),
            &user_stats,
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientTrainingHistory);
    assert_eq!(
        err.message,
        "Periodization plans require at least 5 training sessions in the last 35 days"
    );
    assert_eq!(err.context.user_id, Some(user_stats.user_id));
    assert_eq!(err.http_status(), 422);
}

#[test]
fn test_created_plan_has_weekly_rpe_target() {
    let plan = cardio_plan(TrainingPhaseType::Increase);
    let target = plan.target_weekly_rpe_load.unwrap();
    // 1000 × [1.3, 1.5]
    assert!(approx(target.lower_bound, 1300.0));
    assert!(approx(target.upper_bound, 1500.0));
    assert_eq!(plan.expected_weekly_workouts, Some(3));
    assert_eq!(plan.target_training_exposures.len(), 5);
    assert!(plan
        .target_training_exposures
        .iter()
        .all(|need| need.progression_week == 0));
}

#[test]
fn test_load_share_exposures_are_dosed_from_weekly_target() {
    let plan = cardio_plan(TrainingPhaseType::Increase);
    let long_aerobic = &plan.target_training_exposures[0].training_exposures[0];

    // [1300, 1500] × [20%, 30%]
    assert!(approx(long_aerobic.rpe_load.lower_bound, 260.0));
    assert!(approx(long_aerobic.rpe_load.upper_bound, 450.0));
    assert!(approx(long_aerobic.rpe.observed_value, 3.0));
    assert!(approx(long_aerobic.volume.lower_bound, 260.0 / 3.0));
    assert!(approx(long_aerobic.volume.upper_bound, 150.0));
}

#[test]
fn test_other_exposures_are_dosed_from_capacity() {
    let plan = cardio_plan(TrainingPhaseType::Increase);
    let threshold = &plan.target_training_exposures[1].training_exposures[0];
    assert_eq!(
        threshold.detailed_adaptation_type,
        DetailedAdaptationType::AnaerobicThresholdTraining
    );
    assert!(approx(threshold.rpe.observed_value, 5.0));
    assert!(approx(threshold.volume.observed_value, 540.0));
    assert!(approx(threshold.rpe_load.observed_value, 2700.0));
}

#[test]
fn test_demonstrated_capacity_survives_plan_creation() {
    let capacities = AthleteBaselineCapacities::default().with(
        DetailedAdaptationType::BaseAerobicTraining,
        TrainingUnit::new(
            StandardErrorRange::observed(4.0),
            StandardErrorRange::observed(1800.0),
        ),
    );
    let user_stats = stats(10).with_capacities(capacities);
    let plan = processor()
        .create_periodization_plan(
            date(1, 1),
            vec![PeriodizationGoalType::IncreaseCardioEndurance],
            TrainingPhaseType::Maintain,
            PeriodizationPersona::WellTrained,
            personas(),
            &user_stats,
        )
        .unwrap();
    let base = plan
        .athlete_capacities
        .get(DetailedAdaptationType::BaseAerobicTraining)
        .unwrap();
    assert!(approx(base.rpe.observed_value, 4.0));
    assert!(plan
        .athlete_capacities
        .get(DetailedAdaptationType::HighIntensityAnaerobicTraining)
        .is_some());
}

#[test]
fn test_plans_do_not_share_goal_templates() {
    let mut first = cardio_plan(TrainingPhaseType::Increase);
    first.target_training_exposures[0].decrement_count();
    let second = cardio_plan(TrainingPhaseType::Increase);
    assert!(!second.target_training_exposures[0].is_satisfied());
}

// ============================================================================
// Weekly targets
// ============================================================================

#[test]
fn test_recovery_phase_keeps_average_load() {
    let average = StandardErrorRange::new(Some(900.0), Some(1000.0), Some(1100.0));
    let target = PeriodizationPlanProcessor::get_target_weekly_rpe_load(
        TrainingPhaseType::Recovery,
        Some(&average),
    );
    assert_eq!(target, Some(average));
}

#[test]
fn test_target_uses_cross_product_of_ranges() {
    let average = StandardErrorRange::new(Some(800.0), Some(1000.0), Some(1200.0));
    let target = PeriodizationPlanProcessor::get_target_weekly_rpe_load(
        TrainingPhaseType::Taper,
        Some(&average),
    )
    .unwrap();
    // Taper band [0.8, 1.1]
    assert!(approx(target.lower_bound, 640.0));
    assert!(approx(target.upper_bound, 1320.0));
}

#[test]
fn test_no_average_load_means_no_target() {
    assert!(
        PeriodizationPlanProcessor::get_target_weekly_rpe_load(TrainingPhaseType::Increase, None)
            .is_none()
    );
}

// ============================================================================
// Weekly advancement
// ============================================================================

#[test]
fn test_mid_week_update_is_a_no_op() {
    let mut plan = cardio_plan(TrainingPhaseType::Increase);
    let before = plan.clone();
    assert!(!processor().update_periodization_plan_for_week(&mut plan, date(1, 5), &stats(6)));
    assert!(!processor().update_periodization_plan_for_week(&mut plan, date(1, 1), &stats(6)));
    assert_eq!(plan, before);
}

#[test]
fn test_satisfied_exposures_advance_and_reset() {
    let mut plan = cardio_plan(TrainingPhaseType::Increase);
    plan.target_training_exposures[0].decrement_count();
    assert!(plan.target_training_exposures[0].is_satisfied());
    let owed_before = plan.target_training_exposures[2].exposure_count;

    assert!(processor().update_periodization_plan_for_week(&mut plan, date(1, 8), &stats(6)));

    let advanced = &plan.target_training_exposures[0];
    assert_eq!(advanced.progression_week, 1);
    assert_eq!(advanced.exposure_count, StandardErrorRange::observed(1.0));

    let carried = &plan.target_training_exposures[2];
    assert_eq!(carried.progression_week, 0);
    assert_eq!(carried.exposure_count, owed_before);
}

#[test]
fn test_progressed_capacity_grows_with_phase_band() {
    let mut plan = cardio_plan(TrainingPhaseType::Increase);
    plan.target_training_exposures[0].decrement_count();
    processor().update_periodization_plan_for_week(&mut plan, date(1, 8), &stats(6));

    let base = plan
        .athlete_capacities
        .get(DetailedAdaptationType::BaseAerobicTraining)
        .unwrap();
    // Tier 1 splits growth 40% RPE / 60% volume; Increase band is [1.3, 1.5]
    assert!(approx(base.rpe.observed_value, 3.0 * 1.16));
    assert!(approx(base.volume.observed_value, 600.0 * 1.24));

    let threshold = plan
        .athlete_capacities
        .get(DetailedAdaptationType::AnaerobicThresholdTraining)
        .unwrap();
    assert!(approx(threshold.rpe.observed_value, 5.0));
}

#[test]
fn test_progression_week_is_capped_at_last_tier() {
    let mut plan = cardio_plan(TrainingPhaseType::Increase);
    let tiers =
        PeriodizationProgressionFactory::create(plan.athlete_persona, plan.training_phase_type);
    for week in 1..=6_u32 {
        plan.target_training_exposures[0].decrement_count();
        let boundary = date(1, 1) + Duration::weeks(i64::from(week));
        processor().update_periodization_plan_for_week(&mut plan, boundary, &stats(6));
    }
    assert_eq!(
        plan.target_training_exposures[0].progression_week,
        tiers.len() - 1
    );
}

#[test]
fn test_rpe_never_exceeds_top_of_scale() {
    let mut capacities = AthleteBaselineCapacities::default().with(
        DetailedAdaptationType::MaximalStrength,
        TrainingUnit::new(
            StandardErrorRange::new(Some(9.0), Some(9.5), Some(9.8)),
            StandardErrorRange::observed(5.0),
        ),
    );
    let mut to_progress = BTreeMap::new();
    to_progress.insert(DetailedAdaptationType::MaximalStrength, 3);

    processor().update_athlete_capacity(
        &mut capacities,
        &to_progress,
        &PeriodizationProgressionFactory::create(
            PeriodizationPersona::WellTrained,
            TrainingPhaseType::AggressivelyIncrease,
        ),
        &TrainingPhaseFactory::create(TrainingPhaseType::AggressivelyIncrease),
    );

    let rpe = capacities
        .get(DetailedAdaptationType::MaximalStrength)
        .unwrap()
        .rpe;
    assert!(rpe.highest_value().unwrap() <= 10.0);
    assert!(approx(rpe.observed_value, 10.0));
}

// ============================================================================
// Calendar
// ============================================================================

#[test]
fn test_week_numbers_follow_calendar_weeks() {
    // Plan starts on a Wednesday
    let plan = PeriodizationPlan::new(
        date(1, 3),
        vec![PeriodizationGoalType::IncreaseCardioEndurance],
        TrainingPhaseType::Maintain,
        PeriodizationPersona::WellTrained,
        personas(),
    );
    assert_eq!(plan.get_week_number(date(1, 3)), 0);
    assert_eq!(plan.get_week_number(date(1, 7)), 0);
    assert_eq!(plan.get_week_number(date(1, 8)), 1);
    assert_eq!(plan.get_week_number(date(1, 24)), 3);
    assert_eq!(plan.get_week_start_date(date(1, 10)), date(1, 10));

    assert!(plan.is_week_start_date(date(1, 10)));
    assert!(plan.is_week_start_date(date(1, 31)));
    assert!(!plan.is_week_start_date(date(1, 3)));
    assert!(!plan.is_week_start_date(date(1, 11)));
    assert!(!plan.is_week_start_date(NaiveDate::from_ymd_opt(2023, 12, 27).unwrap()));
}

#[test]
fn test_overreaching_muscles_by_date() {
    let plan = cardio_plan(TrainingPhaseType::Maintain);
    let calf = BodyPartSide::new(BodyPartLocation::Calves, Side::Left);
    let hamstring = BodyPartSide::new(BodyPartLocation::Hamstrings, Side::Right);

    let mut injury_risk = InjuryRiskDict::new();
    injury_risk.insert(
        calf,
        BodyPartInjuryRisk {
            last_functional_overreaching_date: Some(date(2, 10)),
            ..BodyPartInjuryRisk::default()
        },
    );
    injury_risk.insert(
        hamstring,
        BodyPartInjuryRisk {
            last_non_functional_overreaching_date: Some(date(2, 9)),
            ..BodyPartInjuryRisk::default()
        },
    );

    assert_eq!(
        plan.functional_overreaching_muscles(&injury_risk, date(2, 10)),
        vec![calf]
    );
    assert!(plan
        .functional_overreaching_muscles(&injury_risk, date(2, 11))
        .is_empty());
    assert_eq!(
        plan.non_functional_overreaching_muscles(&injury_risk, date(2, 10)),
        vec![hamstring]
    );
    assert!(plan
        .non_functional_overreaching_muscles(&injury_risk, date(2, 11))
        .is_empty());
}

// ============================================================================
// Exposure matching
// ============================================================================

fn speed(rpe: f64, volume: f64) -> TrainingExposure {
    TrainingExposure::new(DetailedAdaptationType::Speed).with_dose(
        StandardErrorRange::observed(rpe),
        StandardErrorRange::observed(volume),
    )
}

fn plan_owing(count: f64) -> PeriodizationPlan {
    let mut plan = PeriodizationPlan::new(
        date(1, 1),
        vec![PeriodizationGoalType::IncreaseAthleticismLowForce],
        TrainingPhaseType::Maintain,
        PeriodizationPersona::WellTrained,
        personas(),
    );
    plan.target_training_exposures.push(AthleteTargetTrainingExposure {
        training_exposures: vec![speed(5.0, 60.0)],
        exposure_count: StandardErrorRange::observed(count),
        priority: 1,
        progression_week: 0,
    });
    plan
}

#[test]
fn test_matching_workout_decrements_need() {
    let utilities = PeriodizationUtilities::with_match_factor(1.05);
    let mut plan = plan_owing(5.0);
    let workout = WorkoutProgram::new(Some(date(1, 2)), vec![speed(5.0, 80.0)]);

    assert!(utilities.update_exposure_needs(&mut plan, &workout));
    assert_eq!(
        plan.target_training_exposures[0].exposure_count,
        StandardErrorRange::observed(4.0)
    );
}

#[test]
fn test_non_matching_workout_leaves_needs_alone() {
    let utilities = PeriodizationUtilities::with_match_factor(1.05);
    let mut plan = plan_owing(5.0);
    let power = TrainingExposure::new(DetailedAdaptationType::Power).with_dose(
        StandardErrorRange::observed(5.0),
        StandardErrorRange::observed(60.0),
    );
    let workout = WorkoutProgram::new(None, vec![power]);
    assert!(!utilities.update_exposure_needs(&mut plan, &workout));
    assert_eq!(
        plan.target_training_exposures[0].exposure_count,
        StandardErrorRange::observed(5.0)
    );
}

#[test]
fn test_satisfied_need_is_not_decremented_below_zero() {
    let utilities = PeriodizationUtilities::with_match_factor(1.05);
    let mut plan = plan_owing(0.0);
    let workout = WorkoutProgram::new(None, vec![speed(5.0, 60.0)]);
    assert!(!utilities.update_exposure_needs(&mut plan, &workout));
    assert!(
        plan.target_training_exposures[0]
            .exposure_count
            .observed_value
            .unwrap()
            .abs()
            < EPSILON
    );
}
