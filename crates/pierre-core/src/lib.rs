// ABOUTME: Core types and constants for the Pierre periodization engine
// ABOUTME: Foundation crate with error handling, domain constants, and training data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! training-load and periodization engine. This crate holds no algorithms and
//! is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Load-model windows and thresholds organized by domain
//! - **models**: Range primitive, capacities, exposures, plans and reports

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Training-load constants organized by domain
pub mod constants;

/// Core data models (ranges, capacities, periodization plans, training reports)
pub mod models;
