// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed numeric intervals.

use crate::AxisError;

/// An immutable closed interval `[lower, upper]` with finite bounds.
///
/// Every operation that "changes" a range returns a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    /// Creates a range, rejecting non-finite bounds and `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, AxisError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(AxisError::invalid("range", "bounds must be finite"));
        }
        if lower > upper {
            return Err(AxisError::invalid(
                "range",
                "lower bound must not exceed upper bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Creates a range of `length` centred on `central`.
    pub fn centered(central: f64, length: f64) -> Result<Self, AxisError> {
        if length.is_nan() || length < 0.0 {
            return Err(AxisError::invalid("length", "must be non-negative"));
        }
        Self::new(central - 0.5 * length, central + 0.5 * length)
    }

    /// Only for bounds already known to be ordered and finite.
    pub(crate) const fn from_ordered(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// The lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// The midpoint of the range.
    pub fn central(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns `true` if `lower <= value <= upper`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `true` if the two ranges overlap on more than a shared bound.
    pub fn intersects(&self, other: &Self) -> bool {
        if other.lower <= self.lower {
            other.upper > self.lower
        } else {
            other.lower < self.upper
        }
    }

    /// Returns `true` if `other` lies entirely inside this range.
    pub fn encloses(&self, other: &Self) -> bool {
        self.lower <= other.lower && self.upper >= other.upper
    }

    /// The smallest range containing both ranges.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    /// Widens the range by fractions of its length on each side.
    ///
    /// Negative fractions shrink it; if the bounds would cross, the result collapses onto the
    /// midpoint of the crossed bounds.
    #[must_use]
    pub fn expand(&self, lower_fraction: f64, upper_fraction: f64) -> Self {
        let length = self.length();
        let lower = self.lower - length * lower_fraction;
        let upper = self.upper + length * upper_fraction;
        if lower > upper {
            let mid = 0.5 * (lower + upper);
            Self::from_ordered(mid, mid)
        } else {
            Self::from_ordered(lower, upper)
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNIT
    }
}
