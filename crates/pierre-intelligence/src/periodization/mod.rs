// ABOUTME: Periodization plan engine: phases, progression tiers, goal templates and weekly updates
// ABOUTME: Grows athlete capacity week by week and tracks which goal exposures are still owed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Periodization Module
//!
//! A plan is created once from the athlete's goals, training phase and
//! history, then updated on every plan-week boundary.
//!
//! # Weekly cycle
//!
//! - Each goal exposure starts the week owing its template count
//! - Completed workouts decrement the first matching owed exposure
//! - At the next boundary, exposures that were fully met advance one
//!   progression tier and capacity grows for their adaptation types
//! - Exposures still owed keep their tier and their remaining count

pub mod factories;
pub mod plan;
pub mod utilities;

pub use factories::{PeriodizationGoalFactory, PeriodizationProgressionFactory, TrainingPhaseFactory};
pub use plan::PeriodizationPlanProcessor;
pub use utilities::PeriodizationUtilities;
