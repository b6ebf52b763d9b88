// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of values between ranges.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::{AxisError, Range};

/// Linearly projects `value` from `source` into `target`.
///
/// Fails with [`AxisError::OutOfRange`] when `source` does not contain `value`. A zero-length
/// source projects onto `target.lower()`.
pub fn scale_value(value: f64, source: Range, target: Range) -> Result<f64, AxisError> {
    if !source.contains(value) {
        return Err(AxisError::OutOfRange {
            value,
            range: source,
        });
    }
    let length = source.length();
    if length == 0.0 {
        return Ok(target.lower());
    }
    let projected = (value - source.lower()) / length * target.length() + target.lower();
    Ok(projected.clamp(target.lower(), target.upper()))
}

/// Number of multiples of `unit` that lie inside `range`.
///
/// Returns 0 for non-positive or non-finite units.
pub fn visible_tick_count(unit: f64, range: Range) -> usize {
    if !unit.is_finite() || unit <= 0.0 {
        return 0;
    }
    let first = (range.lower() / unit).ceil();
    let last = (range.upper() / unit).floor();
    let count = last - first + 1.0;
    if count.is_finite() && count > 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "positive, finite and capped before the cast"
        )]
        {
            count.min(1_000_000.0) as usize
        }
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_linearly() {
        let source = Range::new(0.0, 100.0).unwrap();
        let target = Range::new(3.0, 4.0).unwrap();
        assert_eq!(scale_value(0.0, source, target), Ok(3.0));
        assert_eq!(scale_value(50.0, source, target), Ok(3.5));
        assert_eq!(scale_value(100.0, source, target), Ok(4.0));
    }

    #[test]
    fn rejects_values_outside_source() {
        let source = Range::new(0.0, 10.0).unwrap();
        assert!(matches!(
            scale_value(10.5, source, Range::UNIT),
            Err(AxisError::OutOfRange { value, .. }) if value == 10.5
        ));
    }

    #[test]
    fn zero_length_source_maps_to_target_lower() {
        let source = Range::new(2.0, 2.0).unwrap();
        assert_eq!(scale_value(2.0, source, Range::new(5.0, 6.0).unwrap()), Ok(5.0));
    }

    #[test]
    fn round_trips() {
        let a = Range::new(-7.0, 13.0).unwrap();
        let b = Range::new(0.25, 0.75).unwrap();
        for i in 0..=20 {
            let v = -7.0 + f64::from(i);
            let there = scale_value(v, a, b).unwrap();
            let back = scale_value(there, b, a).unwrap();
            assert!((back - v).abs() < 1e-9, "{v} -> {there} -> {back}");
        }
    }

    #[test]
    fn counts_visible_multiples() {
        assert_eq!(visible_tick_count(10.0, Range::new(0.0, 100.0).unwrap()), 11);
        assert_eq!(visible_tick_count(10.0, Range::new(1.0, 99.0).unwrap()), 9);
        assert_eq!(visible_tick_count(10.0, Range::new(1.0, 9.0).unwrap()), 0);
        assert_eq!(visible_tick_count(0.0, Range::UNIT), 0);
    }
}
