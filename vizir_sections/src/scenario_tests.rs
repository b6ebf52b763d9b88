// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use vizir_text::{HeuristicTextMeasurer, TextBounds};

use crate::tick_layout::LabelGeometry;
use crate::{
    AxisError, AxisOrient, NestedAxis, NumberAxis, Range, RecordingSurface, SectionAxis, Tick,
    TickKind, TooltipMode, compute_range, scale_value,
};

fn data_area() -> Rect {
    Rect::new(60.0, 20.0, 360.0, 320.0)
}

fn label_bounds(axis: &SectionAxis, ticks: &[Tick], orient: AxisOrient) -> Vec<TextBounds> {
    let geometry = LabelGeometry {
        measurer: &HeuristicTextMeasurer,
        style: axis.tick_label_style(),
        mapper: axis.mapper(),
        data_area: data_area(),
        orient,
        cursor: match orient {
            AxisOrient::Right => data_area().x1,
            _ => data_area().x0,
        },
    };
    ticks
        .iter()
        .map(|t| geometry.label_bounds(t))
        .filter(|b| !b.is_empty())
        .collect()
}

#[test]
fn contiguous_sections_and_auto_range() {
    let mut axis = SectionAxis::new();
    for label in ["a", "b", "c"] {
        axis.next_section_with_gap(label, 1.0, 0.0).unwrap();
    }
    let bounds: Vec<_> = axis
        .sections()
        .iter()
        .map(|s| (s.range().lower(), s.range().upper()))
        .collect();
    assert_eq!(bounds, [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    assert_eq!(axis.configure(), Range::new(0.0, 3.0).unwrap());
}

#[test]
fn negative_length_leaves_registry_empty() {
    let mut axis = SectionAxis::new();
    let err = axis.next_section_with_length("x", -1.0).unwrap_err();
    assert!(matches!(err, AxisError::InvalidArgument { name: "length", .. }));
    assert!(axis.sections().is_empty());
}

#[test]
fn truncated_label_carries_tooltip() {
    let mut axis = SectionAxis::new();
    axis.next_section("longlabel").unwrap();
    axis.set_tick_label_max_length(Some(3));
    axis.set_tooltip_mode(TooltipMode::WhenTruncated);
    let ticks = axis
        .refresh_ticks(&HeuristicTextMeasurer, data_area(), AxisOrient::Left)
        .unwrap();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].text.as_deref(), Some("lon..."));
    assert_eq!(ticks[0].tooltip.as_deref(), Some("longlabel"));

    let regions = axis
        .tick_label_regions(&HeuristicTextMeasurer, &ticks, data_area(), AxisOrient::Left)
        .unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].tooltip, "longlabel");
}

#[test]
fn colliding_later_section_label_is_dropped() {
    let mut axis = SectionAxis::new();
    axis.next_section_with_length("first", 1.0).unwrap();
    axis.next_section_with_length("second", 0.01).unwrap();
    axis.next_section_with_length("third", 50.0).unwrap();
    let ticks = axis
        .refresh_ticks(&HeuristicTextMeasurer, data_area(), AxisOrient::Left)
        .unwrap();
    let labels: Vec<_> = ticks.iter().filter_map(|t| t.text.as_deref()).collect();
    assert_eq!(labels, ["first", "third"]);
}

#[test]
fn horizontal_grid_bands_fail_without_drawing() {
    let mut axis = SectionAxis::new();
    axis.next_section("a").unwrap();
    let mut surface = RecordingSurface::new();
    for orient in [AxisOrient::Top, AxisOrient::Bottom] {
        assert_eq!(
            axis.draw_grid_bands(&mut surface, data_area(), data_area(), orient),
            Err(AxisError::UnsupportedOrientation(orient))
        );
    }
    assert!(surface.commands().is_empty());
}

#[test]
fn nested_ticks_follow_section_labels() {
    let mut axis = SectionAxis::new();
    axis.next_section_with_length("low", 1.0).unwrap();
    axis.next_section_with_length("high", 1.0)
        .unwrap()
        .set_nested_number_range(Range::new(0.0, 100.0).unwrap(), true);
    let ticks = axis
        .refresh_ticks(&HeuristicTextMeasurer, data_area(), AxisOrient::Left)
        .unwrap();

    assert_eq!(ticks[0].text.as_deref(), Some("low"));
    assert_eq!(ticks[1].text.as_deref(), Some("high"));
    let nested = &ticks[2..];
    assert!(!nested.is_empty());
    assert!(nested.iter().all(|t| (1.0..=2.0).contains(&t.value)));
    assert!(nested.windows(2).all(|w| w[0].value < w[1].value));
    // The nested tick at 50 lands on the "high" label and loses its text.
    let middle = nested
        .iter()
        .find(|t| (t.value - 1.5).abs() < 1e-9)
        .unwrap();
    assert_eq!(middle.kind, TickKind::Major);
    assert!(middle.text.is_none() && middle.tooltip.is_none());
    assert!(nested.iter().any(|t| t.text.is_some()));
}

#[derive(Debug)]
struct Escaping;

impl NestedAxis for Escaping {
    fn range(&self) -> Range {
        Range::new(0.0, 10.0).unwrap()
    }

    fn refresh_ticks(
        &self,
        _: &dyn vizir_text::TextMeasurer,
        _: Rect,
        _: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        Ok(vec![Tick::new(11.0, TickKind::Major).with_text("11")])
    }
}

#[test]
fn nested_ticks_outside_their_range_are_errors() {
    let mut axis = SectionAxis::new();
    axis.next_section("a")
        .unwrap()
        .set_nested_axis(Some(Box::new(Escaping)));
    let err = axis
        .refresh_ticks(&HeuristicTextMeasurer, data_area(), AxisOrient::Right)
        .unwrap_err();
    assert!(matches!(err, AxisError::OutOfRange { value, .. } if value == 11.0));
}

#[test]
fn placed_labels_never_overlap() {
    let lengths = [0.3, 0.05, 2.0, 0.01, 0.01, 1.0, 0.2, 0.02, 4.0, 0.5];
    for vertical in [false, true] {
        for orient in [AxisOrient::Left, AxisOrient::Right] {
            let mut axis = SectionAxis::new();
            axis.set_vertical_tick_labels(vertical);
            for (i, &len) in lengths.iter().enumerate() {
                let section = axis
                    .next_section_with_gap(std::format!("section {i}"), len, 0.1)
                    .unwrap();
                if i % 3 == 0 {
                    section.set_nested_axis(Some(Box::new(
                        NumberAxis::new(Range::new(-5.0, 5.0).unwrap()).with_minor_divisions(2),
                    )));
                }
            }
            let ticks = axis
                .refresh_ticks(&HeuristicTextMeasurer, data_area(), orient)
                .unwrap();
            let bounds = label_bounds(&axis, &ticks, orient);
            for (i, a) in bounds.iter().enumerate() {
                for b in &bounds[i + 1..] {
                    assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
                }
            }
        }
    }
}

#[test]
fn auto_range_contains_every_section() {
    let mut axis = SectionAxis::new();
    axis.set_margins(0.05, 0.1).unwrap();
    for (i, len) in [0.5, 3.0, 0.25, 7.0].into_iter().enumerate() {
        let label = String::from(["w", "x", "y", "z"][i]);
        axis.next_section_with_gap(label, len, 0.3 * i as f64).unwrap();
        let range = axis.range();
        for s in axis.sections() {
            assert!(range.encloses(&s.range()), "{range:?} misses {:?}", s.range());
        }
        assert_eq!(range, compute_range(axis.sections(), axis.auto_range_config()));
    }
}

#[test]
fn mapper_round_trips_across_the_axis() {
    let mut axis = SectionAxis::new();
    axis.next_section_with_length("a", 2.5).unwrap();
    axis.next_section_with_gap("b", 4.0, 1.0).unwrap();
    for inverted in [false, true] {
        axis.set_inverted(inverted);
        let range = axis.configure();
        for i in 0..=10 {
            let v = range.lower() + range.length() * f64::from(i) / 10.0;
            let p = axis
                .value_to_position(v, data_area(), AxisOrient::Left)
                .unwrap();
            let back = axis
                .position_to_value(p, data_area(), AxisOrient::Left)
                .unwrap();
            assert!((back - v).abs() < 1e-9);
        }
    }
}

#[test]
fn scale_value_round_trips_between_section_and_nested_range() {
    let section = Range::new(3.0, 3.75).unwrap();
    let nested = Range::new(-20.0, 80.0).unwrap();
    for i in 0..=25 {
        let v = -20.0 + 4.0 * f64::from(i);
        let projected = scale_value(v, nested, section).unwrap();
        assert!(section.contains(projected));
        let back = scale_value(projected, section, nested).unwrap();
        assert!((back - v).abs() < 1e-9);
    }
}

#[test]
fn sections_stay_ordered_and_disjoint() {
    let mut axis = SectionAxis::new();
    let mut accepted = 0;
    for (i, (len, gap)) in [(1.0, 0.0), (-2.0, 0.0), (0.5, 2.0), (1.0, -1.0), (0.1, 0.0)]
        .into_iter()
        .enumerate()
    {
        if axis
            .next_section_with_gap(std::format!("{i}"), len, gap)
            .is_ok()
        {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 3);
    let sections = axis.sections();
    for pair in sections.windows(2) {
        assert!(pair[0].central() < pair[1].central());
        assert!(!pair[0].range().intersects(&pair[1].range()));
    }
}
