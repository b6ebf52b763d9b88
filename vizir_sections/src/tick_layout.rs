// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy tick label placement with overlap resolution.
//!
//! Labels are placed in ascending value order. Each placed label claims the region its
//! rotated text covers; a later label that would intersect a claimed region is either dropped
//! (section labels) or kept as an unlabeled mark (nested ticks, whose marks still line up with
//! minor gridlines).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use vizir_text::{TextBounds, TextMeasurer, rotated_text_bounds};

use crate::{
    AxisError, AxisOrient, CoordinateMapper, LabelAnchors, Range, Section, Tick, TickKind,
    TickLabelStyle, scale_value,
};

/// The measured label region of a tick that carries a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabelRegion {
    /// Axis value of the tick.
    pub value: f64,
    /// Region covered by the drawn label.
    pub bounds: TextBounds,
    /// Text to show while the region is hovered.
    pub tooltip: String,
}

/// Geometry shared by label measurement, placement and drawing.
#[derive(Clone, Copy)]
pub(crate) struct LabelGeometry<'a> {
    pub(crate) measurer: &'a dyn TextMeasurer,
    pub(crate) style: &'a TickLabelStyle,
    pub(crate) mapper: CoordinateMapper,
    pub(crate) data_area: Rect,
    pub(crate) orient: AxisOrient,
    /// Device x of the axis line.
    pub(crate) cursor: f64,
}

impl LabelGeometry<'_> {
    /// Point the label's text anchor is placed on.
    pub(crate) fn anchor_point(&self, value: f64) -> Point {
        let y = self
            .mapper
            .value_to_position(value, self.data_area, self.orient);
        let x = match self.orient {
            AxisOrient::Right => self.cursor + self.style.tick_length + self.style.insets.x0,
            _ => self.cursor - self.style.tick_length - self.style.insets.x1,
        };
        Point::new(x, y)
    }

    /// Region covered by the tick's label; empty for unlabeled ticks.
    pub(crate) fn label_bounds(&self, tick: &Tick) -> TextBounds {
        match tick.text.as_deref() {
            Some(text) => rotated_text_bounds(
                self.measurer,
                text,
                &self.style.text,
                self.anchor_point(tick.value),
                tick.text_anchor,
                tick.angle,
                tick.rotation_anchor,
            ),
            None => TextBounds::EMPTY,
        }
    }

    /// Label regions of every tick with a tooltip.
    pub(crate) fn tooltip_regions(&self, ticks: &[Tick]) -> Vec<TickLabelRegion> {
        ticks
            .iter()
            .filter_map(|tick| {
                let tooltip = tick.tooltip.clone()?;
                Some(TickLabelRegion {
                    value: tick.value,
                    bounds: self.label_bounds(tick),
                    tooltip,
                })
            })
            .collect()
    }
}

/// Runs both placement passes, sharing the claimed region between them.
pub(crate) struct TickPlacer<'a> {
    geometry: LabelGeometry<'a>,
    anchors: LabelAnchors,
    claimed: SmallVec<[TextBounds; 16]>,
}

impl<'a> TickPlacer<'a> {
    pub(crate) fn new(geometry: LabelGeometry<'a>) -> Self {
        let anchors = LabelAnchors::for_orient(geometry.orient, geometry.style.vertical);
        Self {
            geometry,
            anchors,
            claimed: SmallVec::new(),
        }
    }

    /// Claims the label region of `tick` unless it collides with an earlier label.
    fn try_claim(&mut self, tick: &Tick) -> bool {
        let bounds = self.geometry.label_bounds(tick);
        if self.claimed.iter().any(|c| c.intersects(&bounds)) {
            return false;
        }
        if !bounds.is_empty() {
            self.claimed.push(bounds);
        }
        true
    }

    fn labeled(&self, value: f64, kind: TickKind, label: Option<&str>) -> Tick {
        let mut tick = Tick::new(value, kind).with_anchors(self.anchors);
        if let Some(label) = label {
            let (text, tooltip) = self.geometry.style.label_text(label);
            tick.text = Some(text);
            tick.tooltip = tooltip;
        }
        tick
    }

    /// One label tick per section whose central value lies in `range`; colliding ones are
    /// dropped.
    pub(crate) fn section_ticks(&mut self, sections: &[Section], range: Range) -> Vec<Tick> {
        let mut ticks = Vec::new();
        let mut dropped = 0_usize;
        for section in sections.iter().filter(|s| range.contains(s.central())) {
            let tick = self.labeled(section.central(), TickKind::Minor, section.label());
            if self.try_claim(&tick) {
                ticks.push(tick);
            } else {
                tracing::trace!(value = tick.value, text = ?tick.text, "dropped section label");
                dropped += 1;
            }
        }
        tracing::debug!(emitted = ticks.len(), dropped, "section label pass");
        ticks
    }

    /// Ticks of every nested axis, projected into their section; colliding ones lose their
    /// label.
    pub(crate) fn nested_ticks(&mut self, sections: &[Section]) -> Result<Vec<Tick>, AxisError> {
        let geometry = self.geometry;
        let mut ticks = Vec::new();
        let mut unlabeled = 0_usize;
        for section in sections {
            let Some(nested) = section.nested_axis() else {
                continue;
            };
            let (y0, y1) =
                geometry
                    .mapper
                    .pixel_span(section.range(), geometry.data_area, geometry.orient);
            let sub_area = Rect::new(geometry.data_area.x0, y0, geometry.data_area.x1, y1);
            for nested_tick in nested.refresh_ticks(geometry.measurer, sub_area, geometry.orient)? {
                let value = scale_value(nested_tick.value, nested.range(), section.range())?;
                let mut tick = self.labeled(value, nested_tick.kind, nested_tick.text.as_deref());
                tick.text_anchor = nested_tick.text_anchor;
                tick.rotation_anchor = nested_tick.rotation_anchor;
                tick.angle = nested_tick.angle;
                if !self.try_claim(&tick) {
                    tracing::trace!(value, text = ?tick.text, "unlabeled nested tick");
                    tick.clear_label();
                    unlabeled += 1;
                }
                ticks.push(tick);
            }
        }
        tracing::debug!(emitted = ticks.len(), unlabeled, "nested tick pass");
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionRegistry;
    use vizir_text::HeuristicTextMeasurer;

    fn geometry<'a>(style: &'a TickLabelStyle, range: Range) -> LabelGeometry<'a> {
        LabelGeometry {
            measurer: &HeuristicTextMeasurer,
            style,
            mapper: CoordinateMapper::new(range, false),
            data_area: Rect::new(100.0, 0.0, 300.0, 100.0),
            orient: AxisOrient::Left,
            cursor: 100.0,
        }
    }

    #[test]
    fn anchor_point_sits_outside_the_data_area() {
        let style = TickLabelStyle::default();
        let g = geometry(&style, Range::new(0.0, 10.0).unwrap());
        assert_eq!(g.anchor_point(5.0), Point::new(94.0, 50.0));
        let right = LabelGeometry {
            orient: AxisOrient::Right,
            cursor: 300.0,
            ..g
        };
        assert_eq!(right.anchor_point(0.0), Point::new(306.0, 100.0));
    }

    #[test]
    fn first_label_wins() {
        let style = TickLabelStyle::default();
        let mut registry = SectionRegistry::new();
        for label in ["a", "b", "c"] {
            registry.append(Some(label.into()), 1.0, 0.0).unwrap();
        }
        // Centres 8px apart: 10px tall labels only clash with direct neighbours.
        let range = Range::new(0.0, 12.5).unwrap();
        let mut placer = TickPlacer::new(geometry(&style, range));
        let ticks = placer.section_ticks(registry.as_slice(), range);
        let labels: Vec<_> = ticks.iter().filter_map(|t| t.text.as_deref()).collect();
        assert_eq!(labels, ["a", "c"]);
    }

    #[test]
    fn sections_outside_the_range_are_skipped() {
        let style = TickLabelStyle::default();
        let mut registry = SectionRegistry::new();
        for label in ["a", "b", "c"] {
            registry.append(Some(label.into()), 1.0, 0.0).unwrap();
        }
        let range = Range::new(0.0, 2.0).unwrap();
        let mut placer = TickPlacer::new(geometry(&style, range));
        let ticks = placer.section_ticks(registry.as_slice(), range);
        let values: Vec<_> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.5, 1.5]);
        assert!(ticks.iter().all(|t| t.kind == TickKind::Minor));
    }

    #[test]
    fn tooltip_regions_follow_tooltips() {
        let style = TickLabelStyle::default().with_max_length(Some(2));
        let g = geometry(&style, Range::new(0.0, 10.0).unwrap());
        let anchors = LabelAnchors::for_orient(AxisOrient::Left, false);
        let (text, tooltip) = style.label_text("long");
        let mut truncated = Tick::new(5.0, TickKind::Minor).with_text(text).with_anchors(anchors);
        truncated.tooltip = tooltip;
        let plain = Tick::new(2.0, TickKind::Minor).with_text("ok").with_anchors(anchors);
        let regions = g.tooltip_regions(&[truncated, plain]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].tooltip, "long");
        assert!(regions[0].bounds.contains(Point::new(90.0, 50.0)));
    }
}
