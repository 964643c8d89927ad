// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports load-model configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Load-model configuration (ACWR, ramp, monotony, strain, periodization)
pub mod intelligence;

pub use intelligence::{ConfigError, LoadModelConfig};
