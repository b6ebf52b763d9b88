// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sectioned axis.
//!
//! A [`SectionAxis`] owns an append-only list of [`Section`]s and derives its overall range,
//! tick labels and grid bands from them. It is laid out along the left or right edge of a data
//! area; horizontal placement is rejected with [`AxisError::UnsupportedOrientation`].
//!
//! Layout is recomputed from scratch on every call. Mutators set a dirty flag that hosts can
//! poll with [`SectionAxis::is_dirty`] to decide when to run the next layout pass, and clear
//! with [`SectionAxis::configure`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use kurbo::{Insets, Line, Point, Rect};
use peniko::Brush;
use vizir_text::{TextAnchor, TextMeasurer, TextStyle, rotated_text_bounds};

use crate::auto_range::compute_range;
use crate::error::check_non_negative;
use crate::grid_band::fill_bands;
use crate::registry::DEFAULT_SECTION_LENGTH;
use crate::tick_layout::{LabelGeometry, TickPlacer};
use crate::{
    AutoRangeConfig, AxisError, AxisOrient, CoordinateMapper, GridBandStyle, LabelAnchors,
    Range, RangeAlign, Section, SectionRegistry, Surface, Tick, TickKind, TickLabelRegion,
    TickLabelStyle, TooltipMode,
};

/// An axis partitioned into labeled, non-overlapping sections.
#[derive(Debug)]
pub struct SectionAxis {
    registry: SectionRegistry,
    fixed_range: Option<Range>,
    auto_range: AutoRangeConfig,
    inverted: bool,
    section_gap_default: f64,
    tick_labels: TickLabelStyle,
    grid_bands: GridBandStyle,
    title: Option<String>,
    title_style: TextStyle,
    dirty: bool,
}

impl Default for SectionAxis {
    fn default() -> Self {
        Self {
            registry: SectionRegistry::new(),
            fixed_range: None,
            auto_range: AutoRangeConfig::default(),
            inverted: false,
            section_gap_default: 0.0,
            tick_labels: TickLabelStyle::default(),
            grid_bands: GridBandStyle::default(),
            title: None,
            title_style: TextStyle::new(11.0),
            dirty: true,
        }
    }
}

impl SectionAxis {
    /// Creates an empty axis with auto-range enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty axis with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    // Sections

    /// Appends a section of the default length, separated by the default gap.
    pub fn next_section(&mut self, label: impl Into<String>) -> Result<&mut Section, AxisError> {
        self.next_section_with_gap(label, DEFAULT_SECTION_LENGTH, self.section_gap_default)
    }

    /// Appends a section of `length`, separated by the default gap.
    pub fn next_section_with_length(
        &mut self,
        label: impl Into<String>,
        length: f64,
    ) -> Result<&mut Section, AxisError> {
        self.next_section_with_gap(label, length, self.section_gap_default)
    }

    /// Appends a section of `length` starting `gap` above the last section (or at 0).
    ///
    /// Fails with [`AxisError::InvalidArgument`] unless `length > 0` and `gap >= 0`; the axis
    /// is unchanged on failure.
    pub fn next_section_with_gap(
        &mut self,
        label: impl Into<String>,
        length: f64,
        gap: f64,
    ) -> Result<&mut Section, AxisError> {
        let section = self.registry.append(Some(label.into()), length, gap)?;
        self.dirty = true;
        Ok(section)
    }

    /// All sections in ascending order.
    pub fn sections(&self) -> &[Section] {
        self.registry.as_slice()
    }

    /// Mutable access to a section's label, paints and nested axis.
    ///
    /// Marks the axis dirty.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        let section = self.registry.get_mut(index)?;
        self.dirty = true;
        Some(section)
    }

    /// Sections intersecting `range`, ascending.
    pub fn sections_in_range(&self, range: Range) -> impl Iterator<Item = &Section> + '_ {
        self.registry.in_range(range)
    }

    /// Gap used by [`SectionAxis::next_section`] and [`SectionAxis::next_section_with_length`].
    pub fn section_gap_default(&self) -> f64 {
        self.section_gap_default
    }

    /// Sets the default gap, rejecting negative or non-finite values.
    pub fn set_section_gap_default(&mut self, gap: f64) -> Result<(), AxisError> {
        if !gap.is_finite() || gap < 0.0 {
            return Err(AxisError::invalid("gap", "must be non-negative and finite"));
        }
        self.section_gap_default = gap;
        self.dirty = true;
        Ok(())
    }

    // Range

    /// The overall range: the explicit range if one was set, the auto range otherwise.
    pub fn range(&self) -> Range {
        self.fixed_range
            .unwrap_or_else(|| compute_range(self.registry.as_slice(), &self.auto_range))
    }

    /// Uses `range` instead of the auto range.
    pub fn set_range(&mut self, range: Range) {
        self.fixed_range = Some(range);
        self.dirty = true;
    }

    /// Derives the range from the sections again.
    pub fn set_auto_range(&mut self) {
        self.fixed_range = None;
        self.dirty = true;
    }

    /// Whether the range is derived from the sections.
    pub fn is_auto_range(&self) -> bool {
        self.fixed_range.is_none()
    }

    /// The auto-range configuration.
    pub fn auto_range_config(&self) -> &AutoRangeConfig {
        &self.auto_range
    }

    /// Replaces the auto-range configuration.
    pub fn set_auto_range_config(&mut self, config: AutoRangeConfig) {
        self.auto_range = config;
        self.dirty = true;
    }

    /// Sets the auto-range margins as fractions of the range length.
    pub fn set_margins(&mut self, lower: f64, upper: f64) -> Result<(), AxisError> {
        self.auto_range = self.auto_range.clone().with_margins(lower, upper)?;
        self.dirty = true;
        Ok(())
    }

    /// Fixes the auto-range length and its alignment to the sections.
    pub fn set_fixed_auto_range(&mut self, length: f64, align: RangeAlign) -> Result<(), AxisError> {
        self.auto_range = self.auto_range.clone().with_fixed_length(length, align)?;
        self.dirty = true;
        Ok(())
    }

    /// Lets the auto range follow the sections' extent again.
    pub fn clear_fixed_auto_range(&mut self) {
        self.auto_range = self.auto_range.clone().without_fixed_length();
        self.dirty = true;
    }

    /// Sets the minimum auto-range length.
    pub fn set_minimum_range_length(&mut self, length: f64) -> Result<(), AxisError> {
        self.auto_range = self.auto_range.clone().with_minimum_length(length)?;
        self.dirty = true;
        Ok(())
    }

    /// Sets the auto range used while there are no sections.
    pub fn set_default_auto_range(&mut self, range: Range) {
        self.auto_range = self.auto_range.clone().with_default_range(range);
        self.dirty = true;
    }

    /// Whether the lower bound maps to the top of the data area.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Flips the direction of the axis.
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
        self.dirty = true;
    }

    // Styling

    /// Tick label styling.
    pub fn tick_label_style(&self) -> &TickLabelStyle {
        &self.tick_labels
    }

    /// Replaces the tick label styling.
    pub fn set_tick_label_style(&mut self, style: TickLabelStyle) {
        self.tick_labels = style;
        self.dirty = true;
    }

    /// Maximum displayed label length in characters; `None` disables truncation.
    pub fn set_tick_label_max_length(&mut self, max_length: Option<usize>) {
        self.tick_labels.max_length = max_length;
        self.dirty = true;
    }

    /// When tick labels carry tooltips.
    pub fn set_tooltip_mode(&mut self, mode: TooltipMode) {
        self.tick_labels.tooltip_mode = mode;
        self.dirty = true;
    }

    /// Rotates tick labels a quarter turn.
    pub fn set_vertical_tick_labels(&mut self, vertical: bool) {
        self.tick_labels.vertical = vertical;
        self.dirty = true;
    }

    /// Space around tick labels.
    pub fn set_tick_label_insets(&mut self, insets: Insets) {
        self.tick_labels.insets = insets;
        self.dirty = true;
    }

    /// Grid band styling.
    pub fn grid_band_style(&self) -> &GridBandStyle {
        &self.grid_bands
    }

    /// Replaces the grid band styling.
    pub fn set_grid_band_style(&mut self, style: GridBandStyle) {
        self.grid_bands = style;
        self.dirty = true;
    }

    /// Shows or hides grid bands.
    pub fn set_grid_bands_visible(&mut self, visible: bool) {
        self.grid_bands.visible = visible;
        self.dirty = true;
    }

    /// Default band paints for sections without their own.
    pub fn set_grid_band_paints(&mut self, paint: impl Into<Brush>, alternate: impl Into<Brush>) {
        self.grid_bands.paint = paint.into();
        self.grid_bands.alternate_paint = alternate.into();
        self.dirty = true;
    }

    /// Stroke width of the host's plot outline, kept clear of bands.
    pub fn set_outline_width(&mut self, width: f64) -> Result<(), AxisError> {
        self.grid_bands.outline_width = check_non_negative("outline_width", width)?;
        self.dirty = true;
        Ok(())
    }

    /// The axis title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets or clears the axis title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.dirty = true;
    }

    /// Sets the title font.
    pub fn set_title_style(&mut self, style: TextStyle) {
        self.title_style = style;
        self.dirty = true;
    }

    // Invalidation

    /// Whether anything changed since the last [`SectionAxis::configure`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Settles the axis before a layout pass and returns the range the pass will use.
    pub fn configure(&mut self) -> Range {
        let range = self.range();
        if self.dirty {
            tracing::debug!(
                ?range,
                sections = self.registry.len(),
                auto = self.is_auto_range(),
                "configured sectioned axis"
            );
        }
        self.dirty = false;
        range
    }

    // Layout

    /// The value/position mapping for the current range.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.range(), self.inverted)
    }

    /// Maps an axis value to a device y coordinate in `area`.
    pub fn value_to_position(
        &self,
        value: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<f64, AxisError> {
        let orient = orient.require_vertical()?;
        Ok(self.mapper().value_to_position(value, area, orient))
    }

    /// Maps a device y coordinate in `area` back to an axis value.
    pub fn position_to_value(
        &self,
        position: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<f64, AxisError> {
        let orient = orient.require_vertical()?;
        Ok(self.mapper().position_to_value(position, area, orient))
    }

    fn geometry<'a>(
        &'a self,
        measurer: &'a dyn TextMeasurer,
        data_area: Rect,
        orient: AxisOrient,
    ) -> LabelGeometry<'a> {
        let cursor = match orient {
            AxisOrient::Right => data_area.x1,
            _ => data_area.x0,
        };
        LabelGeometry {
            measurer,
            style: &self.tick_labels,
            mapper: self.mapper(),
            data_area,
            orient,
            cursor,
        }
    }

    /// Generates the ticks for one layout pass.
    ///
    /// Section label ticks come first, ascending; a label colliding with an earlier one is
    /// dropped. Then each section's nested ticks follow, ascending by section; a nested label
    /// colliding with an earlier one is removed but its tick is kept.
    pub fn refresh_ticks(
        &self,
        measurer: &dyn TextMeasurer,
        data_area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        let orient = orient.require_vertical()?;
        let sections = self.registry.as_slice();
        let mut placer = TickPlacer::new(self.geometry(measurer, data_area, orient));
        let mut ticks = placer.section_ticks(sections, self.range());
        ticks.extend(placer.nested_ticks(sections)?);
        Ok(ticks)
    }

    /// Label regions of the ticks that carry tooltips, for hit testing.
    pub fn tick_label_regions(
        &self,
        measurer: &dyn TextMeasurer,
        ticks: &[Tick],
        data_area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<TickLabelRegion>, AxisError> {
        let orient = orient.require_vertical()?;
        Ok(self
            .geometry(measurer, data_area, orient)
            .tooltip_regions(ticks))
    }

    /// Thickness the axis needs beside the data area.
    ///
    /// This is the widest section label (after truncation) plus tick length and label insets,
    /// plus one title line when a title is set.
    pub fn fixed_dimension(
        &self,
        measurer: &dyn TextMeasurer,
        orient: AxisOrient,
    ) -> Result<f64, AxisError> {
        let orient = orient.require_vertical()?;
        let style = &self.tick_labels;
        let anchors = LabelAnchors::for_orient(orient, style.vertical);
        let widest = self
            .registry
            .as_slice()
            .iter()
            .filter_map(Section::label)
            .map(|label| {
                let (text, _) = style.label_text(label);
                rotated_text_bounds(
                    measurer,
                    &text,
                    &style.text,
                    Point::ORIGIN,
                    anchors.text_anchor,
                    anchors.angle,
                    anchors.rotation_anchor,
                )
                .bounding_box()
                .width()
            })
            .fold(0.0_f64, f64::max);
        let mut dimension = widest + style.tick_length + style.insets.x0 + style.insets.x1;
        if let Some(title) = &self.title {
            dimension += measurer.measure(title, &self.title_style).line_height();
        }
        Ok(dimension)
    }

    // Drawing

    /// Fills one alternating band per section visible in the current range, clipped to the
    /// data area.
    ///
    /// Fails with [`AxisError::UnsupportedOrientation`] before touching the surface when
    /// `orient` is horizontal.
    pub fn draw_grid_bands(
        &self,
        surface: &mut dyn Surface,
        plot_area: Rect,
        data_area: Rect,
        orient: AxisOrient,
    ) -> Result<(), AxisError> {
        let orient = orient.require_vertical()?;
        if !self.grid_bands.visible {
            return Ok(());
        }
        let range = self.range();
        surface.push_clip(data_area.intersect(plot_area));
        let count = fill_bands(
            surface,
            self.registry.in_range(range),
            &self.mapper(),
            data_area,
            orient,
            &self.grid_bands,
        );
        surface.pop_clip();
        tracing::debug!(count, "drew grid bands");
        Ok(())
    }

    /// Draws the axis line, tick marks, tick labels and title.
    ///
    /// Minor tick marks are drawn at half length.
    pub fn draw_ticks(
        &self,
        surface: &mut dyn Surface,
        measurer: &dyn TextMeasurer,
        ticks: &[Tick],
        data_area: Rect,
        orient: AxisOrient,
    ) -> Result<(), AxisError> {
        let orient = orient.require_vertical()?;
        let geometry = self.geometry(measurer, data_area, orient);
        let style = &self.tick_labels;
        let outward = if orient == AxisOrient::Right { 1.0 } else { -1.0 };
        let x = geometry.cursor;

        surface.stroke_line(
            Line::new((x, data_area.y0), (x, data_area.y1)),
            &style.fill,
            1.0,
        );
        for tick in ticks {
            let y = geometry.anchor_point(tick.value).y;
            let length = match tick.kind {
                TickKind::Major => style.tick_length,
                TickKind::Minor => 0.5 * style.tick_length,
            };
            surface.stroke_line(
                Line::new((x, y), (x + outward * length, y)),
                &style.fill,
                1.0,
            );
            if let Some(text) = &tick.text {
                surface.draw_text(
                    text,
                    geometry.anchor_point(tick.value),
                    tick.text_anchor,
                    tick.angle,
                    &style.text,
                    &style.fill,
                );
            }
        }

        if let Some(title) = &self.title {
            let dimension = self.fixed_dimension(measurer, orient)?;
            let position = Point::new(x + outward * dimension, data_area.center().y);
            surface.draw_text(
                title,
                position,
                TextAnchor::TopCenter,
                outward * FRAC_PI_2,
                &self.title_style,
                &style.fill,
            );
        }
        Ok(())
    }
}
