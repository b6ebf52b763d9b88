// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick values, label styling and label text rules.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::FRAC_PI_2;

use kurbo::Insets;
use peniko::Brush;
use peniko::color::palette::css;
use vizir_text::{TextAnchor, TextStyle};

use crate::error::check_non_negative;
use crate::{AxisError, AxisOrient};

/// Whether a tick sits on a major or a minor gridline position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// A labeled, major position.
    #[default]
    Major,
    /// A minor position (section label ticks and nested minor ticks).
    Minor,
}

/// When a tick carries the full label text as a tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipMode {
    /// Never attach a tooltip.
    Never,
    /// Always attach the full label.
    Always,
    /// Attach the full label only when the displayed text was truncated.
    #[default]
    WhenTruncated,
}

/// One renderable mark plus optional label at an axis value.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Axis value of the tick.
    pub value: f64,
    /// Displayed label text.
    pub text: Option<String>,
    /// Hover text, usually the untruncated label.
    pub tooltip: Option<String>,
    /// Major or minor position.
    pub kind: TickKind,
    /// Which point of the label lands on the anchor point.
    pub text_anchor: TextAnchor,
    /// Point of the label the rotation is applied about.
    pub rotation_anchor: TextAnchor,
    /// Label rotation in radians.
    pub angle: f64,
}

impl Tick {
    /// Creates an unlabeled tick with centred anchors and no rotation.
    pub fn new(value: f64, kind: TickKind) -> Self {
        Self {
            value,
            text: None,
            tooltip: None,
            kind,
            text_anchor: TextAnchor::Center,
            rotation_anchor: TextAnchor::Center,
            angle: 0.0,
        }
    }

    /// Sets the displayed text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Applies label anchors.
    pub fn with_anchors(mut self, anchors: LabelAnchors) -> Self {
        self.text_anchor = anchors.text_anchor;
        self.rotation_anchor = anchors.rotation_anchor;
        self.angle = anchors.angle;
        self
    }

    /// Drops the label text and tooltip, keeping the mark.
    pub fn clear_label(&mut self) {
        self.text = None;
        self.tooltip = None;
    }
}

/// Text anchor, rotation anchor and angle for tick labels on one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchors {
    /// Label point placed on the anchor point.
    pub text_anchor: TextAnchor,
    /// Rotation pivot.
    pub rotation_anchor: TextAnchor,
    /// Rotation in radians.
    pub angle: f64,
}

impl LabelAnchors {
    /// Anchors for tick labels placed outside the data area on `orient`.
    ///
    /// Vertical labels read bottom-to-top on the left edge and top-to-bottom on the right.
    pub fn for_orient(orient: AxisOrient, vertical_labels: bool) -> Self {
        let (anchor, angle) = match (orient, vertical_labels) {
            (AxisOrient::Left, true) => (TextAnchor::BottomCenter, -FRAC_PI_2),
            (AxisOrient::Right, true) => (TextAnchor::BottomCenter, FRAC_PI_2),
            (AxisOrient::Left, false) => (TextAnchor::CenterRight, 0.0),
            (AxisOrient::Right, false) => (TextAnchor::CenterLeft, 0.0),
            (AxisOrient::Bottom, true) => (TextAnchor::CenterRight, -FRAC_PI_2),
            (AxisOrient::Top, true) => (TextAnchor::CenterLeft, -FRAC_PI_2),
            (AxisOrient::Bottom, false) => (TextAnchor::TopCenter, 0.0),
            (AxisOrient::Top, false) => (TextAnchor::BottomCenter, 0.0),
        };
        Self {
            text_anchor: anchor,
            rotation_anchor: anchor,
            angle,
        }
    }
}

/// Styling and text rules for tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabelStyle {
    /// Font used to measure (and draw) labels.
    pub text: TextStyle,
    /// Label fill.
    pub fill: Brush,
    /// Space around each label.
    pub insets: Insets,
    /// Length of the tick mark outside the data area.
    pub tick_length: f64,
    /// Rotate labels a quarter turn.
    pub vertical: bool,
    /// Maximum number of characters shown before truncation, `None` for unlimited.
    pub max_length: Option<usize>,
    /// When to attach the full label as tooltip.
    pub tooltip_mode: TooltipMode,
}

impl Default for TickLabelStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            fill: Brush::Solid(css::BLACK),
            insets: Insets::new(4.0, 2.0, 4.0, 2.0),
            tick_length: 2.0,
            vertical: false,
            max_length: None,
            tooltip_mode: TooltipMode::default(),
        }
    }
}

impl TickLabelStyle {
    /// Sets the label font.
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Sets the label fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the label insets.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets the outside tick mark length, rejecting negative or non-finite lengths.
    pub fn with_tick_length(mut self, length: f64) -> Result<Self, AxisError> {
        self.tick_length = check_non_negative("tick_length", length)?;
        Ok(self)
    }

    /// Rotates labels a quarter turn.
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Sets the truncation limit.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the tooltip policy.
    pub fn with_tooltip_mode(mut self, mode: TooltipMode) -> Self {
        self.tooltip_mode = mode;
        self
    }

    /// Applies truncation and the tooltip policy to a label.
    ///
    /// Returns `(text, tooltip)`. Labels longer than `max_length` characters keep their first
    /// `max_length` characters followed by `"..."`.
    pub fn label_text(&self, label: &str) -> (String, Option<String>) {
        let (text, truncated) = match self.max_length {
            Some(max) if label.chars().count() > max => {
                let mut text: String = label.chars().take(max).collect();
                text.push_str("...");
                (text, true)
            }
            _ => (String::from(label), false),
        };
        let tooltip = match self.tooltip_mode {
            TooltipMode::Never => None,
            TooltipMode::Always => Some(String::from(label)),
            TooltipMode::WhenTruncated => truncated.then(|| String::from(label)),
        };
        (text, tooltip)
    }
}
