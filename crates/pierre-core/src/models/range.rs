// ABOUTME: Bounded-uncertainty numeric value (lower/observed/upper) used by every load computation
// ABOUTME: Immutable arithmetic on ranges: add, subtract, scale, cross-product multiply/divide, merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Standard Error Range
//!
//! Every training metric in the engine (capacities, loads, ratios, targets) is
//! carried as a [`StandardErrorRange`]: an optional lower bound, an optional
//! observed value and an optional upper bound. Values are immutable; each
//! operation returns a fresh range so two entities never share a mutable bound.
//!
//! Missing components propagate through arithmetic using a fallback chain:
//! the high side of a range is `upper → observed → lower` and the low side is
//! `lower → observed → upper`.

use serde::{Deserialize, Serialize};

/// A numeric value with optional lower and upper uncertainty bounds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardErrorRange {
    /// Lower bound of the range
    pub lower_bound: Option<f64>,
    /// Point estimate
    pub observed_value: Option<f64>,
    /// Upper bound of the range
    pub upper_bound: Option<f64>,
    /// Set when the range could not be computed from the available data
    #[serde(default)]
    pub insufficient_data: bool,
}

impl StandardErrorRange {
    /// Create a range from its three components
    #[must_use]
    pub const fn new(
        lower_bound: Option<f64>,
        observed_value: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Self {
        Self {
            lower_bound,
            observed_value,
            upper_bound,
            insufficient_data: false,
        }
    }

    /// Range holding only an observed value
    #[must_use]
    pub const fn observed(value: f64) -> Self {
        Self::new(None, Some(value), None)
    }

    /// Range holding only bounds
    #[must_use]
    pub const fn bounded(lower_bound: f64, upper_bound: f64) -> Self {
        Self::new(Some(lower_bound), None, Some(upper_bound))
    }

    /// Range with no components
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Empty range flagged as lacking data
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            lower_bound: None,
            observed_value: None,
            upper_bound: None,
            insufficient_data: true,
        }
    }

    /// True when no component is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lower_bound.is_none() && self.observed_value.is_none() && self.upper_bound.is_none()
    }

    /// Highest available value: upper bound, else observed value, else lower bound
    #[must_use]
    pub fn highest_value(&self) -> Option<f64> {
        self.upper_bound.or(self.observed_value).or(self.lower_bound)
    }

    /// Lowest available value: lower bound, else observed value, else upper bound
    #[must_use]
    pub fn lowest_value(&self) -> Option<f64> {
        self.lower_bound.or(self.observed_value).or(self.upper_bound)
    }

    /// Whether `value` lies between the lowest and highest available values
    #[must_use]
    pub fn is_within(&self, value: f64) -> bool {
        match (self.lowest_value(), self.highest_value()) {
            (Some(low), Some(high)) => low <= value && value <= high,
            _ => false,
        }
    }

    /// Bound-wise sum of two ranges
    ///
    /// A bound present on only one side is combined with the other side's
    /// fallback value, so `a.add(b).lowest_value() == a.lowest_value() + b.lowest_value()`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let lower = if self.lower_bound.is_some() || other.lower_bound.is_some() {
            combine(self.lowest_value(), other.lowest_value(), |a, b| a + b)
        } else {
            None
        };
        let upper = if self.upper_bound.is_some() || other.upper_bound.is_some() {
            combine(self.highest_value(), other.highest_value(), |a, b| a + b)
        } else {
            None
        };

        Self {
            lower_bound: lower,
            observed_value: combine(self.observed_value, other.observed_value, |a, b| a + b),
            upper_bound: upper,
            insufficient_data: self.insufficient_data || other.insufficient_data,
        }
    }

    /// Bound-wise difference: the low side subtracts the other range's high side
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let lower = if self.lower_bound.is_some() || other.upper_bound.is_some() {
            combine(self.lowest_value(), other.highest_value(), |a, b| a - b)
        } else {
            None
        };
        let upper = if self.upper_bound.is_some() || other.lower_bound.is_some() {
            combine(self.highest_value(), other.lowest_value(), |a, b| a - b)
        } else {
            None
        };

        Self {
            lower_bound: lower,
            observed_value: combine(self.observed_value, other.observed_value, |a, b| a - b),
            upper_bound: upper,
            insufficient_data: self.insufficient_data || other.insufficient_data,
        }
    }

    /// Add a scalar to every component
    #[must_use]
    pub fn add_value(&self, value: f64) -> Self {
        self.map(|v| v + value)
    }

    /// Scale every component; a negative factor swaps the bounds
    #[must_use]
    pub fn multiply(&self, factor: f64) -> Self {
        let scaled = self.map(|v| v * factor);
        if factor < 0.0 {
            Self {
                lower_bound: scaled.upper_bound,
                upper_bound: scaled.lower_bound,
                ..scaled
            }
        } else {
            scaled
        }
    }

    /// Divide every component by a scalar; dividing by zero yields an empty range
    #[must_use]
    pub fn divide(&self, divisor: f64) -> Self {
        if divisor == 0.0 {
            return Self::insufficient();
        }
        self.multiply(1.0 / divisor)
    }

    /// Multiply two ranges
    ///
    /// The observed value is the product of the observed values. When either
    /// range carries a bound, the result's bounds are the minimum and maximum
    /// of every available component pairing, because ranges can combine at
    /// either extreme.
    #[must_use]
    pub fn multiply_range(&self, other: &Self) -> Self {
        self.cross_product(other, |a, b| Some(a * b))
    }

    /// Divide by another range, skipping zero divisors
    #[must_use]
    pub fn divide_range(&self, other: &Self) -> Self {
        self.cross_product(other, |a, b| if b == 0.0 { None } else { Some(a / b) })
    }

    /// Bound-wise union: min of lowers, max of uppers, mean of observed values
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let lower = match (self.lower_bound, other.lower_bound) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        let upper = match (self.upper_bound, other.upper_bound) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let observed = match (self.observed_value, other.observed_value) {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            (a, b) => a.or(b),
        };

        Self {
            lower_bound: lower,
            observed_value: observed,
            upper_bound: upper,
            insufficient_data: self.insufficient_data && other.insufficient_data,
        }
    }

    /// Clamp every component to at most `limit`
    #[must_use]
    pub fn cap_highest(&self, limit: f64) -> Self {
        self.map(|v| v.min(limit))
    }

    /// Raise every component to at least `limit`
    #[must_use]
    pub fn floor_at(&self, limit: f64) -> Self {
        self.map(|v| v.max(limit))
    }

    /// Sum of a list of ranges (empty for an empty list)
    #[must_use]
    pub fn sum(ranges: &[Self]) -> Self {
        ranges
            .split_first()
            .map_or_else(Self::empty, |(first, rest)| {
                rest.iter().fold(*first, |acc, range| acc.add(range))
            })
    }

    /// Component-wise mean of the values present in each component
    #[must_use]
    pub fn average(ranges: &[Self]) -> Self {
        Self {
            lower_bound: mean_of(ranges.iter().filter_map(|r| r.lower_bound)),
            observed_value: mean_of(ranges.iter().filter_map(|r| r.observed_value)),
            upper_bound: mean_of(ranges.iter().filter_map(|r| r.upper_bound)),
            insufficient_data: !ranges.is_empty() && ranges.iter().all(|r| r.insufficient_data),
        }
    }

    /// Range with the greatest highest value
    #[must_use]
    pub fn max_of(ranges: &[Self]) -> Option<Self> {
        ranges
            .iter()
            .filter(|r| r.highest_value().is_some())
            .max_by(|a, b| {
                a.highest_value()
                    .unwrap_or(f64::MIN)
                    .total_cmp(&b.highest_value().unwrap_or(f64::MIN))
            })
            .copied()
    }

    /// Range with the smallest lowest value
    #[must_use]
    pub fn min_of(ranges: &[Self]) -> Option<Self> {
        ranges
            .iter()
            .filter(|r| r.lowest_value().is_some())
            .min_by(|a, b| {
                a.lowest_value()
                    .unwrap_or(f64::MAX)
                    .total_cmp(&b.lowest_value().unwrap_or(f64::MAX))
            })
            .copied()
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            lower_bound: self.lower_bound.map(&f),
            observed_value: self.observed_value.map(&f),
            upper_bound: self.upper_bound.map(&f),
            insufficient_data: self.insufficient_data,
        }
    }

    fn components(&self) -> impl Iterator<Item = f64> {
        [self.lower_bound, self.observed_value, self.upper_bound]
            .into_iter()
            .flatten()
    }

    const fn has_bounds(&self) -> bool {
        self.lower_bound.is_some() || self.upper_bound.is_some()
    }

    fn cross_product(&self, other: &Self, op: impl Fn(f64, f64) -> Option<f64>) -> Self {
        let observed = match (self.observed_value, other.observed_value) {
            (Some(a), Some(b)) => op(a, b),
            _ => None,
        };

        let (lower, upper) = if self.has_bounds() || other.has_bounds() {
            let op = &op;
            let candidates: Vec<f64> = self
                .components()
                .flat_map(|a| other.components().filter_map(move |b| op(a, b)))
                .collect();
            let lower = candidates.iter().copied().reduce(f64::min);
            let upper = candidates.iter().copied().reduce(f64::max);
            (lower, upper)
        } else {
            (None, None)
        };

        Self {
            lower_bound: lower,
            observed_value: observed,
            upper_bound: upper,
            insufficient_data: self.insufficient_data || other.insufficient_data,
        }
    }
}

fn combine(a: Option<f64>, b: Option<f64>, op: impl Fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(op(a, b)),
        _ => None,
    }
}

fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
