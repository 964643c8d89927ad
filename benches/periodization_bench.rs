// ABOUTME: Criterion benchmarks for training-load reports and periodization plan updates
// ABOUTME: Measures report generation over growing histories, rolling strain and weekly plan advancement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the periodization engine.
//!
//! Measures training report generation, the rolling daily-strain series and
//! weekly periodization plan updates.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_periodization::models::{
    PeriodizationGoalType, PeriodizationPersona, StandardErrorRange, SubAdaptationTypePersonas,
    TrainingPersona, TrainingPhaseType, UserStats,
};
use pierre_periodization::{
    LoadModelConfig, PeriodizationPlanProcessor, TrainingReportGenerator, TrainingReportRequest,
    TrainingVolumeProcessor,
};
use uuid::Uuid;

/// Daily loads ending on `end`, with a repeating easy/hard pattern
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_daily_loads(end: NaiveDate, days: usize) -> Vec<(NaiveDate, f64)> {
    (0..days)
        .map(|index| {
            let date = end - Duration::days(index as i64);
            let load = 250.0 + ((index * 137) % 400) as f64;
            (date, load)
        })
        .collect()
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default()
}

/// Benchmark report generation with varying history lengths
#[allow(clippy::cast_possible_truncation)]
fn bench_training_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_report");
    let generator = TrainingReportGenerator::with_config(LoadModelConfig::default());

    for days in [14_usize, 35, 120] {
        let request = TrainingReportRequest::new(
            Uuid::new_v4(),
            report_date(),
            generate_daily_loads(report_date(), days),
        );
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("generate", days), &request, |b, request| {
            b.iter(|| generator.generate(black_box(request)));
        });
    }

    group.finish();
}

/// Benchmark the rolling daily strain series
fn bench_historical_strain(c: &mut Criterion) {
    let mut group = c.benchmark_group("historical_strain");
    let processor = TrainingVolumeProcessor::with_config(LoadModelConfig::default());
    let loads = generate_daily_loads(report_date(), 35);
    let start = report_date() - Duration::days(34);

    group.bench_function("five_weeks", |b| {
        b.iter(|| {
            processor.get_historical_internal_strain(
                black_box(&loads),
                black_box(start),
                black_box(report_date()),
                5,
            )
        });
    });

    group.finish();
}

/// Benchmark plan creation and a full cycle of weekly updates
fn bench_periodization_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("periodization_plan");
    let processor = PeriodizationPlanProcessor::with_config(LoadModelConfig::default());
    let start = report_date();
    let stats = UserStats::new(Uuid::new_v4())
        .with_history(12, StandardErrorRange::new(Some(900.0), Some(1000.0), Some(1100.0)));
    let personas = SubAdaptationTypePersonas::uniform(TrainingPersona::Intermediate);
    let goals = vec![
        PeriodizationGoalType::IncreaseCardioEndurance,
        PeriodizationGoalType::IncreaseAthleticismLowForce,
    ];

    group.bench_function("create", |b| {
        b.iter(|| {
            processor.create_periodization_plan(
                black_box(start),
                goals.clone(),
                TrainingPhaseType::Increase,
                PeriodizationPersona::WellTrained,
                personas,
                black_box(&stats),
            )
        });
    });

    let Ok(plan) = processor.create_periodization_plan(
        start,
        goals.clone(),
        TrainingPhaseType::Increase,
        PeriodizationPersona::WellTrained,
        personas,
        &stats,
    ) else {
        group.finish();
        return;
    };

    group.bench_function("eight_weekly_updates", |b| {
        b.iter(|| {
            let mut plan = plan.clone();
            for week in 1..=8 {
                for need in &mut plan.target_training_exposures {
                    need.decrement_count();
                }
                processor.update_periodization_plan_for_week(
                    &mut plan,
                    start + Duration::weeks(week),
                    black_box(&stats),
                );
            }
            plan
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_training_report,
    bench_historical_strain,
    bench_periodization_plan
);
criterion_main!(benches);
