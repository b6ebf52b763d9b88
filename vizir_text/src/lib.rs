// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for guide layout.
//!
//! `VizIR` guides need to know where a tick label lands before anything is drawn, both to
//! reserve space for an axis and to keep labels from colliding. Shaping and glyph layout
//! stay downstream, so guide code depends on:
//! - a tiny measurement interface ([`TextMeasurer`]),
//! - a nine-point [`TextAnchor`] describing which part of a label sits on its anchor point, and
//! - [`TextBounds`], the (possibly rotated) quadrilateral a label occupies.
//!
//! This crate is `no_std`-friendly and renderer-agnostic: a shaping engine and a web canvas
//! can both implement the same trait.

#![no_std]

extern crate alloc;

mod anchor;
mod bounds;

use alloc::sync::Arc;

use kurbo::Point;

pub use anchor::TextAnchor;
pub use bounds::TextBounds;

/// A minimal text measurement interface used by guide generators.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart’s coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for tests, demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// Measures `text` and returns the region it covers once drawn.
///
/// The label is positioned so that its `text_anchor` lands on `anchor_point`, then rotated by
/// `angle` radians (clockwise in y-down coordinates) about its `rotation_anchor`.
///
/// Empty text yields [`TextBounds::EMPTY`], which never intersects anything.
pub fn rotated_text_bounds(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    anchor_point: Point,
    text_anchor: TextAnchor,
    angle: f64,
    rotation_anchor: TextAnchor,
) -> TextBounds {
    if text.is_empty() {
        return TextBounds::EMPTY;
    }
    let metrics = measurer.measure(text, style);
    let origin = anchor_point - text_anchor.offset(&metrics);
    let pivot = origin + rotation_anchor.offset(&metrics);
    TextBounds::from_baseline_box(origin, &metrics).rotated_about(angle, pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_char_count() {
        let m = HeuristicTextMeasurer.measure("abcd", &TextStyle::new(10.0));
        assert!((m.advance_width - 24.0).abs() < 1e-9);
        assert!((m.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn center_right_anchor_places_label_left_of_point() {
        let style = TextStyle::new(10.0);
        let b = rotated_text_bounds(
            &HeuristicTextMeasurer,
            "abc",
            &style,
            Point::new(100.0, 50.0),
            TextAnchor::CenterRight,
            0.0,
            TextAnchor::CenterRight,
        );
        let r = b.bounding_box();
        assert!((r.x1 - 100.0).abs() < 1e-9, "{r:?}");
        assert!((r.x0 - 82.0).abs() < 1e-9, "{r:?}");
        assert!((r.y0 - 45.0).abs() < 1e-9, "{r:?}");
        assert!((r.y1 - 55.0).abs() < 1e-9, "{r:?}");
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let style = TextStyle::new(10.0);
        let b = rotated_text_bounds(
            &HeuristicTextMeasurer,
            "abcd",
            &style,
            Point::new(0.0, 0.0),
            TextAnchor::BottomCenter,
            -core::f64::consts::FRAC_PI_2,
            TextAnchor::BottomCenter,
        );
        let r = b.bounding_box();
        assert!((r.width() - 10.0).abs() < 1e-9, "{r:?}");
        assert!((r.height() - 24.0).abs() < 1e-9, "{r:?}");
    }

    #[test]
    fn empty_text_has_empty_bounds() {
        let b = rotated_text_bounds(
            &HeuristicTextMeasurer,
            "",
            &TextStyle::default(),
            Point::ZERO,
            TextAnchor::Center,
            0.0,
            TextAnchor::Center,
        );
        assert!(b.is_empty());
    }
}
