// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Sport-science defaults for load windows, statistics, and periodization limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values for the load model, grouped by domain. The runtime values used
//! by the calculators live in `pierre_intelligence::config` and start from these.

/// Rolling window lengths used by the load calculators
pub mod windows {
    /// Days in one training cycle (the acute window)
    pub const ACUTE_WINDOW_DAYS: i64 = 7;
    /// Maximum number of chronic weeks averaged into the chronic load
    pub const MAX_CHRONIC_WEEKS: usize = 4;
    /// Trailing window for daily strain
    pub const STRAIN_WINDOW_DAYS: usize = 7;
    /// First day (counting back from today) scanned for historical strain spikes
    pub const STRAIN_SPIKE_SCAN_START_DAY: usize = 8;
    /// Last day (counting back from today) scanned for historical strain spikes
    pub const STRAIN_SPIKE_SCAN_END_DAY: usize = 14;
    /// Hours within which only the heaviest load counts as an adaptation event
    pub const HIGHEST_LOAD_WINDOW_HOURS: i64 = 36;
}

/// Acute:chronic workload ratio bands (Gabbett 2016)
pub mod acwr {
    /// Lower edge of the optimal band
    pub const OPTIMAL_LOW: f64 = 0.8;
    /// Upper edge of the optimal band
    pub const OPTIMAL_HIGH: f64 = 1.3;
    /// Lower edge of the overreaching band
    pub const OVERREACHING_LOW: f64 = 1.31;
    /// Upper edge of the overreaching band
    pub const OVERREACHING_HIGH: f64 = 1.5;
    /// Start of the excessive band
    pub const EXCESSIVE: f64 = 1.51;
    /// Chronic weeks needed before a ratio is meaningful
    pub const MIN_CHRONIC_WEEKS: usize = 2;
}

/// Week-over-week ramp ratio bands
pub mod ramp {
    /// No increase
    pub const OPTIMAL_LOW: f64 = 1.0;
    /// 10% week-over-week increase
    pub const OPTIMAL_HIGH: f64 = 1.10;
    /// Lower edge of the overreaching band
    pub const OVERREACHING_LOW: f64 = 1.11;
    /// Upper edge of the overreaching band
    pub const OVERREACHING_HIGH: f64 = 1.15;
    /// Start of the excessive band
    pub const EXCESSIVE: f64 = 1.16;
}

/// Monotony limits (Foster 1998)
pub mod monotony {
    /// Monotony at which the athlete is considered overreaching
    pub const OVERREACHING: f64 = 1.7;
    /// Monotony at which the athlete is considered excessive
    pub const EXCESSIVE: f64 = 2.0;
    /// Standard deviations away from the mean the next load must be to add variability
    pub const FIX_STDEV_FACTOR: f64 = 1.05;
}

/// Strain spike detection
pub mod strain {
    /// Standard deviations above the trailing mean that count as a spike
    pub const SPIKE_STDEV_FACTOR: f64 = 1.2;
}

/// Statistical constants
pub mod statistics {
    /// Two-sided z-score for a 95% confidence interval
    pub const Z_SCORE_95: f64 = 1.96;
    /// Workouts per week assumed when building standard-error ranges
    pub const EXPECTED_WEEKLY_WORKOUTS: usize = 5;
    /// Floor applied to the daily-load standard deviation before dividing by it
    pub const MIN_DAILY_STDEV: f64 = 0.1;
    /// Multiplier for the synthetic companion of a single observed value
    pub const SINGLE_VALUE_SPIKE_FACTOR: f64 = 1.5;
}

/// Periodization engine limits
pub mod periodization {
    /// Sessions required in the history window before a plan can be created
    pub const MIN_HISTORICAL_SESSIONS: usize = 5;
    /// Length of the history window in days
    pub const HISTORY_WINDOW_DAYS: i64 = 35;
    /// Top of the RPE scale
    pub const MAX_RPE: f64 = 10.0;
    /// Tolerance when matching a workout exposure against an athlete need
    pub const EXPOSURE_MATCH_FACTOR: f64 = 1.05;
}

/// Adaptation-history classification
pub mod adaptation {
    /// Share of the highest load below which a session counts as recovery
    pub const RECOVERY_LOAD_SHARE: f64 = 0.10;
    /// Maximum soreness severity still treated as functional overreaching
    pub const FUNCTIONAL_OVERREACHING_MAX_SEVERITY: f64 = 1.0;
    /// Soreness duration (days) at which overreaching becomes non-functional
    pub const NON_FUNCTIONAL_SORENESS_DAYS: u32 = 3;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const PIERRE_PERIODIZATION: &str = "pierre-periodization";
}
