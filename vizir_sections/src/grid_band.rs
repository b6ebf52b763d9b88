// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternating background bands, one per section.

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::error::check_non_negative;
use crate::{AxisError, AxisOrient, CoordinateMapper, Section, Surface};

/// Default paints and geometry of grid bands.
#[derive(Clone, Debug, PartialEq)]
pub struct GridBandStyle {
    /// Whether bands are drawn at all.
    pub visible: bool,
    /// Paint of the first, third, ... band unless the section overrides it.
    pub paint: Brush,
    /// Paint of the second, fourth, ... band unless the section overrides it.
    pub alternate_paint: Brush,
    /// Stroke width of the host's plot outline; bands start this far inside the data area.
    pub outline_width: f64,
}

impl Default for GridBandStyle {
    fn default() -> Self {
        Self {
            visible: true,
            paint: Brush::Solid(Color::from_rgba8(232, 234, 232, 128)),
            alternate_paint: Brush::Solid(css::TRANSPARENT),
            outline_width: 1.0,
        }
    }
}

impl GridBandStyle {
    /// Shows or hides the bands.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the default paints.
    pub fn with_paints(mut self, paint: impl Into<Brush>, alternate: impl Into<Brush>) -> Self {
        self.paint = paint.into();
        self.alternate_paint = alternate.into();
        self
    }

    /// Sets the plot outline width, rejecting negative or non-finite widths.
    pub fn with_outline_width(mut self, width: f64) -> Result<Self, AxisError> {
        self.outline_width = check_non_negative("outline_width", width)?;
        Ok(self)
    }
}

/// Fills one band per section, alternating paints starting with the primary one.
///
/// `sections` must be ascending. The caller checks orientation and visibility and owns the
/// clip.
pub(crate) fn fill_bands<'a>(
    surface: &mut dyn Surface,
    sections: impl IntoIterator<Item = &'a Section>,
    mapper: &CoordinateMapper,
    data_area: Rect,
    orient: AxisOrient,
    style: &GridBandStyle,
) -> usize {
    let mut count = 0;
    for (i, section) in sections.into_iter().enumerate() {
        let paint = if i % 2 == 0 {
            section.grid_band_paint().unwrap_or(&style.paint)
        } else {
            section
                .grid_band_alternate_paint()
                .unwrap_or(&style.alternate_paint)
        };
        let (y0, y1) = mapper.pixel_span(section.range(), data_area, orient);
        let band = Rect::new(data_area.x0 + style.outline_width, y0, data_area.x1, y1);
        tracing::trace!(index = i, ?band, "grid band");
        surface.fill_rect(band, paint);
        count += 1;
    }
    count
}
