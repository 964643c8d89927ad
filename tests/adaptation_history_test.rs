// ABOUTME: Integration tests for adaptation-history classification of past loading days
// ABOUTME: Verifies overreaching buckets, per-sport benchmarks, heaviest-load attribution and muscular strain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use pierre_periodization::models::{AffectedBodyPart, BodyPartLocation, LoadingEvent, Side};
use pierre_periodization::{AdaptationHistory, AdaptationHistoryProcessor, LoadModelConfig};
use std::collections::BTreeMap;

const EPSILON: f64 = 1e-9;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn processor() -> AdaptationHistoryProcessor {
    AdaptationHistoryProcessor::with_config(LoadModelConfig::default())
}

fn sore_calf(days_sore: u32, max_severity: f64, cleared: bool) -> AffectedBodyPart {
    AffectedBodyPart::new(BodyPartLocation::Calves, Side::Left, days_sore, max_severity, cleared)
}

fn run(day: u32, load: f64, soreness: Option<AffectedBodyPart>) -> LoadingEvent {
    LoadingEvent::new(at(day, 8), load, "running")
        .with_affected_body_parts(soreness.into_iter().collect())
}

/// A month of running and cycling with every kind of outcome
fn month_of_events() -> Vec<LoadingEvent> {
    vec![
        run(3, 500.0, Some(sore_calf(2, 1.0, true))),
        run(10, 800.0, Some(sore_calf(2, 3.0, true))),
        run(17, 600.0, Some(sore_calf(4, 1.0, true))),
        LoadingEvent::new(at(24, 8), 700.0, "cycling"),
        LoadingEvent::new(at(25, 8), 50.0, "cycling"),
        run(27, 400.0, Some(sore_calf(1, 2.0, false))),
        // After the end of the history
        run(30, 5000.0, Some(sore_calf(5, 4.0, true))),
    ]
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_soreness_outcome_selects_bucket() {
    let history = processor().load_adaptation_history(&month_of_events(), at(30, 0));

    assert_eq!(
        history.functional_overreaching_loads.get("running"),
        Some(&vec![500.0])
    );
    assert_eq!(
        history.non_functional_overreaching_loads.get("running"),
        Some(&vec![800.0, 600.0])
    );
    assert_eq!(history.maintenance_loads.get("cycling"), Some(&vec![700.0]));
    assert_eq!(history.recovery_loads.get("cycling"), Some(&vec![50.0]));
}

#[test]
fn test_unresolved_soreness_is_not_classified() {
    let history = processor().load_adaptation_history(&month_of_events(), at(30, 0));
    let every_load: Vec<f64> = [
        &history.recovery_loads,
        &history.maintenance_loads,
        &history.functional_overreaching_loads,
        &history.non_functional_overreaching_loads,
    ]
    .iter()
    .flat_map(|bucket| bucket.values().flatten().copied())
    .collect();
    assert!(!every_load.contains(&400.0));
    assert!(!every_load.contains(&5000.0));
}

#[test]
fn test_only_heaviest_load_in_window_is_blamed() {
    let events = vec![
        LoadingEvent::new(at(5, 8), 300.0, "cycling")
            .with_affected_body_parts(vec![sore_calf(2, 1.0, true)]),
        LoadingEvent::new(at(6, 8), 900.0, "cycling"),
    ];
    let history = processor().load_adaptation_history(&events, at(20, 0));
    assert!(history.functional_overreaching_loads.is_empty());
    assert_eq!(history.maintenance_loads.get("cycling"), Some(&vec![900.0]));
}

#[test]
fn test_short_cleared_soreness_counts_as_none() {
    let events = vec![run(5, 400.0, Some(sore_calf(1, 2.5, true)))];
    let history = processor().load_adaptation_history(&events, at(20, 0));
    assert_eq!(history.maintenance_loads.get("running"), Some(&vec![400.0]));
    assert!(history.non_functional_overreaching_loads.is_empty());
}

#[test]
fn test_no_events_yields_empty_history() {
    let history = processor().load_adaptation_history(&[], at(20, 0));
    assert_eq!(history, AdaptationHistory::default());
    assert!(history.calc_high_relative_load_benchmarks().is_empty());
}

// ============================================================================
// Benchmarks
// ============================================================================

#[test]
fn test_benchmark_is_lower_overreaching_mean() {
    let history = processor().load_adaptation_history(&month_of_events(), at(30, 0));
    let benchmarks = history.calc_high_relative_load_benchmarks();

    // Functional mean 500 is below the non-functional mean 700
    assert!((benchmarks["running"] - 500.0).abs() < EPSILON);
    assert!(!benchmarks.contains_key("cycling"));
}

#[test]
fn test_benchmark_from_a_single_bucket() {
    let mut non_functional = BTreeMap::new();
    non_functional.insert("rowing".to_owned(), vec![300.0, 500.0]);
    let history = AdaptationHistory {
        non_functional_overreaching_loads: non_functional,
        ..AdaptationHistory::default()
    };
    let benchmarks = history.calc_high_relative_load_benchmarks();
    assert!((benchmarks["rowing"] - 400.0).abs() < EPSILON);
}

// ============================================================================
// Muscular strain
// ============================================================================

#[test]
fn test_muscular_strain_windows() {
    let history = processor().load_adaptation_history(&month_of_events(), at(30, 0));

    // June 16-30: 600 and 400 of 1750 were followed by soreness
    let recent = history.muscular_strain_last_2_weeks.unwrap();
    assert!((recent - 1000.0 / 1750.0 * 100.0).abs() < 1e-6);

    // June 2-16: every load was followed by soreness
    let earlier = history.muscular_strain_last_2_4_weeks.unwrap();
    assert!((earlier - 100.0).abs() < 1e-6);
    assert!(!history.muscular_strain_increasing());
}

#[test]
fn test_muscular_strain_increasing() {
    let history = AdaptationHistory {
        muscular_strain_last_2_weeks: Some(40.0),
        muscular_strain_last_2_4_weeks: Some(10.0),
        ..AdaptationHistory::default()
    };
    assert!(history.muscular_strain_increasing());

    let unknown = AdaptationHistory {
        muscular_strain_last_2_weeks: Some(40.0),
        ..AdaptationHistory::default()
    };
    assert!(!unknown.muscular_strain_increasing());
}
