// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overall-range computation from the registered sections.

use crate::error::check_non_negative;
use crate::registry::envelope;
use crate::{AxisError, Range, Section};

/// Which part of the sections' envelope is kept when a fixed auto-range length is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeAlign {
    /// Keep the lower bound and extend (or cut) above it.
    #[default]
    Lower,
    /// Keep the midpoint.
    Center,
    /// Keep the upper bound and extend (or cut) below it.
    Upper,
}

impl RangeAlign {
    /// Returns a range of `length` aligned to `range` according to `self`.
    pub fn align(self, range: Range, length: f64) -> Range {
        match self {
            Self::Lower => Range::from_ordered(range.lower(), range.lower() + length),
            Self::Center => Range::from_ordered(
                range.central() - 0.5 * length,
                range.central() + 0.5 * length,
            ),
            Self::Upper => Range::from_ordered(range.upper() - length, range.upper()),
        }
    }
}

/// Inputs of the auto-range calculation.
///
/// Only the validating `with_*` builders change a configuration, so margins are never
/// negative and every section stays inside the computed range unless a fixed length is set.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoRangeConfig {
    fixed_length: Option<(f64, RangeAlign)>,
    lower_margin: f64,
    upper_margin: f64,
    minimum_length: f64,
    default_range: Range,
}

impl Default for AutoRangeConfig {
    fn default() -> Self {
        Self {
            fixed_length: None,
            lower_margin: 0.0,
            upper_margin: 0.0,
            minimum_length: 1e-8,
            default_range: Range::UNIT,
        }
    }
}

impl AutoRangeConfig {
    /// Sets both margins, rejecting negative or non-finite fractions.
    pub fn with_margins(mut self, lower: f64, upper: f64) -> Result<Self, AxisError> {
        self.lower_margin = check_non_negative("lower_margin", lower)?;
        self.upper_margin = check_non_negative("upper_margin", upper)?;
        Ok(self)
    }

    /// Fixes the length of the computed range and how it is aligned to the sections.
    pub fn with_fixed_length(mut self, length: f64, align: RangeAlign) -> Result<Self, AxisError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(AxisError::invalid("fixed_length", "must be positive and finite"));
        }
        self.fixed_length = Some((length, align));
        Ok(self)
    }

    /// Removes the fixed length.
    pub fn without_fixed_length(mut self) -> Self {
        self.fixed_length = None;
        self
    }

    /// Sets the minimum range length.
    pub fn with_minimum_length(mut self, length: f64) -> Result<Self, AxisError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(AxisError::invalid(
                "minimum_length",
                "must be positive and finite",
            ));
        }
        self.minimum_length = length;
        Ok(self)
    }

    /// Sets the range used when there are no sections.
    pub fn with_default_range(mut self, range: Range) -> Self {
        self.default_range = range;
        self
    }

    /// The fixed range length and its alignment, if any.
    pub fn fixed_length(&self) -> Option<(f64, RangeAlign)> {
        self.fixed_length
    }

    /// Fraction of the length added below the lowest section.
    pub fn lower_margin(&self) -> f64 {
        self.lower_margin
    }

    /// Fraction of the length added above the highest section.
    pub fn upper_margin(&self) -> f64 {
        self.upper_margin
    }

    /// Shorter envelopes are widened to this length around their midpoint.
    pub fn minimum_length(&self) -> f64 {
        self.minimum_length
    }

    /// Result when there are no sections.
    pub fn default_range(&self) -> Range {
        self.default_range
    }
}

/// Computes the overall axis range for `sections`, which must be in ascending order.
///
/// A fixed length only applies when an alignment is configured as well; it bypasses the
/// margins and may leave sections outside the result. Otherwise the envelope of all sections
/// is widened to `minimum_length` if needed and then padded by the margins, so every section
/// is contained.
pub fn compute_range(sections: &[Section], config: &AutoRangeConfig) -> Range {
    let Some(envelope) = envelope(sections) else {
        return config.default_range;
    };

    if let Some((length, align)) = config.fixed_length {
        return align.align(envelope, length);
    }

    let mut range = envelope;
    if range.length() < config.minimum_length {
        let half = 0.5 * config.minimum_length;
        let central = range.central();
        range = Range::from_ordered(central - half, central + half);
    }
    range.expand(config.lower_margin, config.upper_margin)
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::*;

    fn sections(bounds: &[(f64, f64)]) -> Vec<Section> {
        bounds
            .iter()
            .map(|&(lo, hi)| Section::new(Range::new(lo, hi).unwrap(), None))
            .collect()
    }

    #[test]
    fn empty_uses_default_range() {
        let config = AutoRangeConfig::default().with_default_range(Range::new(-1.0, 1.0).unwrap());
        assert_eq!(compute_range(&[], &config), Range::new(-1.0, 1.0).unwrap());
    }

    #[test]
    fn margins_scale_with_length() {
        let s = sections(&[(0.0, 1.0), (1.5, 4.0)]);
        let config = AutoRangeConfig::default().with_margins(0.25, 0.5).unwrap();
        let r = compute_range(&s, &config);
        assert!((r.lower() + 1.0).abs() < 1e-12);
        assert!((r.upper() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn short_envelope_is_recentred() {
        let s = sections(&[(2.0, 2.0)]);
        let config = AutoRangeConfig::default().with_minimum_length(0.5).unwrap();
        let r = compute_range(&s, &config);
        assert_eq!((r.lower(), r.upper()), (1.75, 2.25));
    }

    #[test]
    fn fixed_length_alignments() {
        let s = sections(&[(0.0, 1.0), (1.0, 4.0)]);
        let base = AutoRangeConfig::default().with_margins(1.0, 1.0).unwrap();
        let lower = base.clone().with_fixed_length(2.0, RangeAlign::Lower).unwrap();
        let center = base.clone().with_fixed_length(2.0, RangeAlign::Center).unwrap();
        let upper = base.with_fixed_length(2.0, RangeAlign::Upper).unwrap();
        assert_eq!(compute_range(&s, &lower), Range::new(0.0, 2.0).unwrap());
        assert_eq!(compute_range(&s, &center), Range::new(1.0, 3.0).unwrap());
        assert_eq!(compute_range(&s, &upper), Range::new(2.0, 4.0).unwrap());
    }

    #[test]
    fn rejects_negative_margins() {
        assert!(AutoRangeConfig::default().with_margins(-0.1, 0.0).is_err());
        assert!(AutoRangeConfig::default().with_margins(0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejected_builders_keep_the_previous_config() {
        let config = AutoRangeConfig::default().with_margins(0.1, 0.2).unwrap();
        assert!(config.clone().with_minimum_length(0.0).is_err());
        assert!(config.clone().with_fixed_length(-1.0, RangeAlign::Upper).is_err());
        assert_eq!((config.lower_margin(), config.upper_margin()), (0.1, 0.2));
        assert_eq!(config.fixed_length(), None);
        let fixed = config.with_fixed_length(2.0, RangeAlign::Center).unwrap();
        assert_eq!(fixed.fixed_length(), Some((2.0, RangeAlign::Center)));
        assert_eq!(fixed.without_fixed_length().fixed_length(), None);
    }
}
