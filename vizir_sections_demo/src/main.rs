// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectioned-axis demo for `vizir_sections`.
//!
//! Lays out a left and a right sectioned axis around one data area and writes the result to
//! `vizir_sections_demo.svg`. Set `RUST_LOG=vizir_sections=trace` to see layout decisions.

mod svg;

use std::error::Error;

use kurbo::{Insets, Line, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizir_sections::{
    AxisOrient, Range, RecordingSurface, SectionAxis, Surface, TickLabelStyle, TooltipMode,
};
use vizir_text::{HeuristicTextMeasurer, TextStyle};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let measurer = HeuristicTextMeasurer;
    let mut left = regions_axis()?;
    let mut right = depth_axis()?;
    left.configure();
    right.configure();

    let view = Rect::new(0.0, 0.0, 640.0, 480.0);
    let left_width = left.fixed_dimension(&measurer, AxisOrient::Left)?;
    let right_width = right.fixed_dimension(&measurer, AxisOrient::Right)?;
    let plot_area = view - Insets::new(10.0, 20.0, 10.0, 20.0);
    let data_area = plot_area - Insets::new(left_width, 0.0, right_width, 0.0);

    let mut surface = RecordingSurface::new();
    surface.fill_rect(view, &Brush::Solid(css::WHITE));
    left.draw_grid_bands(&mut surface, plot_area, data_area, AxisOrient::Left)?;
    draw_outline(&mut surface, data_area);
    for (axis, orient) in [(&left, AxisOrient::Left), (&right, AxisOrient::Right)] {
        let ticks = axis.refresh_ticks(&measurer, data_area, orient)?;
        axis.draw_ticks(&mut surface, &measurer, &ticks, data_area, orient)?;
        for region in axis.tick_label_regions(&measurer, &ticks, data_area, orient)? {
            tracing::info!(
                value = region.value,
                tooltip = %region.tooltip,
                bounds = ?region.bounds.bounding_box(),
                "tooltip region"
            );
        }
    }

    let svg = svg::to_svg_string(view, surface.commands());
    std::fs::write("vizir_sections_demo.svg", svg)?;
    println!("wrote vizir_sections_demo.svg");
    Ok(())
}

/// Regions of varying size, two of them with their own numeric sub-scale.
fn regions_axis() -> Result<SectionAxis, Box<dyn Error>> {
    let mut axis = SectionAxis::with_title("Region");
    axis.set_section_gap_default(0.1)?;
    axis.set_margins(0.02, 0.02)?;
    axis.set_tick_label_style(
        TickLabelStyle::default()
            .with_text(TextStyle::new(11.0))
            .with_max_length(Some(12))
            .with_tooltip_mode(TooltipMode::WhenTruncated),
    );
    axis.set_grid_band_paints(css::LIGHT_STEEL_BLUE, css::TRANSPARENT);

    axis.next_section("Coastal shelf")?
        .set_nested_number_range(Range::new(0.0, 200.0)?, true);
    axis.next_section_with_length("Slope", 0.5)?;
    axis.next_section_with_length("Rise", 0.05)?;
    axis.next_section_with_length("Abyssal plain and hills", 2.0)?
        .set_nested_number_range(Range::new(3000.0, 6000.0)?, true);
    axis.next_section_with_length("Trench", 0.75)?
        .set_grid_band_paint(Some(Brush::Solid(css::MISTY_ROSE)));
    Ok(axis)
}

/// The same layout with vertical labels on the other edge, sharing the left axis' range.
fn depth_axis() -> Result<SectionAxis, Box<dyn Error>> {
    let mut axis = SectionAxis::new();
    axis.set_section_gap_default(0.1)?;
    axis.set_margins(0.02, 0.02)?;
    axis.set_vertical_tick_labels(true);
    axis.set_tooltip_mode(TooltipMode::Always);
    for (label, length) in [
        ("epipelagic", 1.0),
        ("mesopelagic", 0.5),
        ("bathy", 0.05),
        ("abyssopelagic", 2.0),
        ("hadal", 0.75),
    ] {
        axis.next_section_with_length(label, length)?;
    }
    Ok(axis)
}

fn draw_outline(surface: &mut dyn Surface, area: Rect) {
    let stroke = Brush::Solid(css::DIM_GRAY);
    let corners = [
        (area.x0, area.y0),
        (area.x1, area.y0),
        (area.x1, area.y1),
        (area.x0, area.y1),
    ];
    for (&a, &b) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        surface.stroke_line(Line::new(a, b), &stroke, 1.0);
    }
}
