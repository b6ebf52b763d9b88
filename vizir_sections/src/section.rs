// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A labeled sub-range of a sectioned axis.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use peniko::Brush;

use crate::{NestedAxis, NumberAxis, Range};

/// One labeled, non-overlapping sub-range owned by a [`SectionAxis`](crate::SectionAxis).
///
/// The range is fixed at creation. Label, grid band paints and the nested axis can be changed
/// through [`SectionAxis::section_mut`](crate::SectionAxis::section_mut), which invalidates
/// the owning axis.
#[derive(Debug)]
pub struct Section {
    range: Range,
    label: Option<String>,
    nested_axis: Option<Box<dyn NestedAxis>>,
    grid_band_paint: Option<Brush>,
    grid_band_alternate_paint: Option<Brush>,
}

impl Section {
    pub(crate) fn new(range: Range, label: Option<String>) -> Self {
        Self {
            range,
            label,
            nested_axis: None,
            grid_band_paint: None,
            grid_band_alternate_paint: None,
        }
    }

    /// The sub-range of the parent axis covered by this section.
    pub fn range(&self) -> Range {
        self.range
    }

    /// The ordering key of the section.
    pub fn central(&self) -> f64 {
        self.range.central()
    }

    /// The section label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the section label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Removes the section label.
    pub fn clear_label(&mut self) {
        self.label = None;
    }

    /// The section's own grid band paint, if set.
    pub fn grid_band_paint(&self) -> Option<&Brush> {
        self.grid_band_paint.as_ref()
    }

    /// Overrides the axis' default grid band paint for this section.
    pub fn set_grid_band_paint(&mut self, paint: Option<Brush>) {
        self.grid_band_paint = paint;
    }

    /// The section's alternate grid band paint.
    ///
    /// Falls back to [`Section::grid_band_paint`] when no alternate paint is set.
    pub fn grid_band_alternate_paint(&self) -> Option<&Brush> {
        self.grid_band_alternate_paint
            .as_ref()
            .or(self.grid_band_paint.as_ref())
    }

    /// Overrides the axis' default alternate grid band paint for this section.
    pub fn set_grid_band_alternate_paint(&mut self, paint: Option<Brush>) {
        self.grid_band_alternate_paint = paint;
    }

    /// The nested sub-axis whose ticks are projected into this section, if any.
    pub fn nested_axis(&self) -> Option<&dyn NestedAxis> {
        self.nested_axis.as_deref()
    }

    /// Installs (or removes) a nested sub-axis.
    pub fn set_nested_axis(&mut self, axis: Option<Box<dyn NestedAxis>>) {
        self.nested_axis = axis;
    }

    /// Installs a [`NumberAxis`] over `range` as the nested sub-axis.
    ///
    /// With `integer_ticks`, the nested axis only places ticks on whole numbers.
    pub fn set_nested_number_range(&mut self, range: Range, integer_ticks: bool) {
        let axis = NumberAxis::new(range).with_integer_ticks(integer_ticks);
        self.nested_axis = Some(Box::new(axis));
    }
}
