// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value ⇄ position mapping along one edge of a drawing area.

use kurbo::Rect;

use crate::{AxisOrient, Range};

/// A two-way affine transform between axis values and device coordinates.
///
/// For vertical orientations the drawable span runs from the bottom of the area (`y1`) to its
/// top (`y0`); for horizontal ones from `x0` to `x1`. Inversion flips which end of the span
/// the range's lower bound lands on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    range: Range,
    inverted: bool,
}

impl CoordinateMapper {
    /// Creates a mapper for `range`.
    ///
    /// Mapping through a zero-length range collapses every value onto the start of the span.
    pub fn new(range: Range, inverted: bool) -> Self {
        Self { range, inverted }
    }

    /// The value range being mapped.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether the mapping is inverted.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// `(min, max)` device coordinates of the drawable span.
    pub fn span(area: Rect, orient: AxisOrient) -> (f64, f64) {
        match orient {
            AxisOrient::Top | AxisOrient::Bottom => (area.x0, area.x1),
            AxisOrient::Left | AxisOrient::Right => (area.y1, area.y0),
        }
    }

    fn device_range(&self, area: Rect, orient: AxisOrient) -> (f64, f64) {
        let (min, max) = Self::span(area, orient);
        if self.inverted {
            (max, min)
        } else {
            (min, max)
        }
    }

    /// Maps a value into device space.
    pub fn value_to_position(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        linear(
            value,
            (self.range.lower(), self.range.upper()),
            self.device_range(area, orient),
        )
    }

    /// Maps a device coordinate back into value space.
    pub fn position_to_value(&self, position: f64, area: Rect, orient: AxisOrient) -> f64 {
        linear(
            position,
            self.device_range(area, orient),
            (self.range.lower(), self.range.upper()),
        )
    }

    /// Device extent of `range` as `(min, max)`, independent of orientation and inversion.
    pub fn pixel_span(&self, range: Range, area: Rect, orient: AxisOrient) -> (f64, f64) {
        let a = self.value_to_position(range.lower(), area, orient);
        let b = self.value_to_position(range.upper(), area, orient);
        (a.min(b), a.max(b))
    }
}

fn linear(x: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let denom = d1 - d0;
    if denom == 0.0 {
        return r0;
    }
    let t = (x - d0) / denom;
    r0 + t * (r1 - r0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(50.0, 20.0, 250.0, 220.0)
    }

    #[test]
    fn vertical_lower_bound_maps_to_bottom() {
        let m = CoordinateMapper::new(Range::new(0.0, 4.0).unwrap(), false);
        assert_eq!(m.value_to_position(0.0, area(), AxisOrient::Left), 220.0);
        assert_eq!(m.value_to_position(4.0, area(), AxisOrient::Left), 20.0);
        assert_eq!(m.value_to_position(1.0, area(), AxisOrient::Right), 170.0);
    }

    #[test]
    fn inverted_vertical_lower_bound_maps_to_top() {
        let m = CoordinateMapper::new(Range::new(0.0, 4.0).unwrap(), true);
        assert_eq!(m.value_to_position(0.0, area(), AxisOrient::Left), 20.0);
        assert_eq!(m.value_to_position(1.0, area(), AxisOrient::Left), 70.0);
    }

    #[test]
    fn horizontal_spans_left_to_right() {
        let m = CoordinateMapper::new(Range::new(0.0, 4.0).unwrap(), false);
        assert_eq!(m.value_to_position(1.0, area(), AxisOrient::Bottom), 100.0);
    }

    #[test]
    fn round_trips_in_both_directions() {
        for inverted in [false, true] {
            let m = CoordinateMapper::new(Range::new(-3.5, 17.25).unwrap(), inverted);
            for orient in [AxisOrient::Left, AxisOrient::Right, AxisOrient::Top] {
                for i in 0..=40 {
                    let p = 20.0 + 5.0 * f64::from(i);
                    let v = m.position_to_value(p, area(), orient);
                    let back = m.value_to_position(v, area(), orient);
                    assert!((back - p).abs() < 1e-9, "{p} -> {v} -> {back}");
                    let again = m.position_to_value(back, area(), orient);
                    assert!((again - v).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn pixel_span_is_ordered() {
        let m = CoordinateMapper::new(Range::new(0.0, 4.0).unwrap(), false);
        let (lo, hi) = m.pixel_span(Range::new(1.0, 2.0).unwrap(), area(), AxisOrient::Left);
        assert_eq!((lo, hi), (120.0, 170.0));
    }
}
