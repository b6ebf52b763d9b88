// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested sub-axes projected into a section.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::Debug;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;
use vizir_text::{TextMeasurer, TextStyle};

use crate::format::format_tick_with_step;
use crate::project::visible_tick_count;
use crate::{AxisError, AxisOrient, CoordinateMapper, LabelAnchors, Range, Tick, TickKind};

/// A secondary scale attached to one section.
///
/// The owning axis asks for ticks laid out on the section's pixel span (`sub_area`) and
/// rescales every tick value from [`NestedAxis::range`] into the section's range. Tick values
/// must therefore lie inside `range()`.
pub trait NestedAxis: Debug {
    /// The value range of the sub-axis.
    fn range(&self) -> Range;

    /// Ticks for the sub-axis laid out on `sub_area`, in emission order.
    fn refresh_ticks(
        &self,
        measurer: &dyn TextMeasurer,
        sub_area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError>;
}

/// A linear sub-axis with automatically chosen "nice" tick units.
///
/// The unit is the smallest 1/2/5 × 10ⁿ step whose labels fit the available span without
/// overlapping. Major ticks are labeled; `minor_divisions` splits each unit into that many
/// intervals with unlabeled minor ticks (1 means no minor ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct NumberAxis {
    range: Range,
    integer_ticks: bool,
    minor_divisions: u32,
    label_style: TextStyle,
    label_spacing: f64,
}

impl NumberAxis {
    /// Creates a number axis over `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            integer_ticks: false,
            minor_divisions: 1,
            label_style: TextStyle::default(),
            label_spacing: 2.0,
        }
    }

    /// Restricts ticks to whole numbers.
    pub fn with_integer_ticks(mut self, integer_ticks: bool) -> Self {
        self.integer_ticks = integer_ticks;
        self
    }

    /// Number of minor intervals per tick unit; values below 1 are treated as 1.
    pub fn with_minor_divisions(mut self, divisions: u32) -> Self {
        self.minor_divisions = divisions.max(1);
        self
    }

    /// Font used to measure labels when choosing the tick unit.
    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Minimum free space between neighbouring labels.
    pub fn with_label_spacing(mut self, spacing: f64) -> Self {
        self.label_spacing = spacing.max(0.0);
        self
    }

    /// Whether only whole-number ticks are produced.
    pub fn integer_ticks(&self) -> bool {
        self.integer_ticks
    }

    /// Chooses the tick unit for a span of `pixels` device units.
    pub fn tick_unit(&self, measurer: &dyn TextMeasurer, pixels: f64, orient: AxisOrient) -> f64 {
        let length = self.range.length();
        if length <= 0.0 || !pixels.is_finite() || pixels <= 0.0 {
            return 0.0;
        }
        let probe = nice_step(length / 10.0);
        let label_extent = [self.range.lower(), self.range.upper()]
            .iter()
            .map(|&v| {
                let metrics = measurer.measure(&format_tick_with_step(v, probe), &self.label_style);
                if orient.is_vertical() {
                    metrics.line_height()
                } else {
                    metrics.advance_width
                }
            })
            .fold(0.0_f64, f64::max);
        let slot = label_extent + self.label_spacing;

        let mut unit = nice_step(length * slot / pixels);
        if self.integer_ticks {
            unit = unit.max(1.0);
        }
        // Rounding down to a nice step can leave labels a little too close.
        for _ in 0..8 {
            if unit <= 0.0 || unit / length * pixels >= slot {
                break;
            }
            unit = next_nice_step(unit);
        }
        unit
    }
}

impl NestedAxis for NumberAxis {
    fn range(&self) -> Range {
        self.range
    }

    fn refresh_ticks(
        &self,
        measurer: &dyn TextMeasurer,
        sub_area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        let (a, b) = CoordinateMapper::span(sub_area, orient);
        let unit = self.tick_unit(measurer, (b - a).abs(), orient);
        let anchors = LabelAnchors::for_orient(orient, false);
        if unit <= 0.0 {
            let v = self.range.lower();
            let tick = Tick::new(v, TickKind::Major)
                .with_text(format_tick_with_step(v, 1.0))
                .with_anchors(anchors);
            return Ok(alloc::vec![tick]);
        }

        let mut divisions = self.minor_divisions;
        let mut step = unit / f64::from(divisions);
        if self.integer_ticks && step.floor() != step {
            divisions = 1;
            step = unit;
        }

        let count = visible_tick_count(step, self.range);
        let first = (self.range.lower() / step).ceil();
        if count == 0 || !first.is_finite() {
            return Ok(Vec::new());
        }
        // Indices stay in f64 so far-off ranges cannot overflow an integer counter.
        let per_unit = f64::from(divisions);
        let phase = first - (first / per_unit).floor() * per_unit;

        let mut ticks = Vec::with_capacity(count);
        for i in 0..count {
            let offset = phase + i as f64;
            let value = ((first + i as f64) * step).clamp(self.range.lower(), self.range.upper());
            let tick = if offset - (offset / per_unit).floor() * per_unit == 0.0 {
                Tick::new(value, TickKind::Major).with_text(format_tick_with_step(value, unit))
            } else {
                Tick::new(value, TickKind::Minor)
            };
            ticks.push(tick.with_anchors(anchors));
        }
        Ok(ticks)
    }
}

fn decade(step: f64) -> f64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "decimal exponents of finite f64 values fit in i32"
    )]
    let power = step.log10().floor() as i32;
    10_f64.powi(power)
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = decade(step);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// The next larger 1/2/5 × 10ⁿ step.
fn next_nice_step(step: f64) -> f64 {
    let base = decade(step);
    let mantissa = (step / base).round();
    if mantissa < 2.0 {
        2.0 * base
    } else if mantissa < 5.0 {
        5.0 * base
    } else {
        10.0 * base
    }
}
