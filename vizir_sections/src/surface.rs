// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing target for bands, tick marks and labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::Brush;
use vizir_text::{TextAnchor, TextStyle};

/// A 2D drawing surface supplied by the host.
///
/// Clips nest: every [`Surface::push_clip`] is matched by one [`Surface::pop_clip`].
pub trait Surface {
    /// Fills `rect` with `paint`.
    fn fill_rect(&mut self, rect: Rect, paint: &Brush);

    /// Strokes a straight line.
    fn stroke_line(&mut self, line: Line, paint: &Brush, width: f64);

    /// Draws `text` so that its `anchor` point lands on `position`, rotated by `angle`
    /// radians about that point.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        angle: f64,
        style: &TextStyle,
        fill: &Brush,
    );

    /// Restricts subsequent drawing to `rect`, intersected with any enclosing clip.
    fn push_clip(&mut self, rect: Rect);

    /// Removes the innermost clip.
    fn pop_clip(&mut self);
}

/// A recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// See [`Surface::fill_rect`].
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill paint.
        paint: Brush,
    },
    /// See [`Surface::stroke_line`].
    StrokeLine {
        /// Stroked line.
        line: Line,
        /// Stroke paint.
        paint: Brush,
        /// Stroke width.
        width: f64,
    },
    /// See [`Surface::draw_text`].
    Text {
        /// Label text.
        text: String,
        /// Anchor point.
        position: Point,
        /// Label point placed on `position`.
        anchor: TextAnchor,
        /// Rotation in radians.
        angle: f64,
        /// Font.
        style: TextStyle,
        /// Fill paint.
        fill: Brush,
    },
    /// See [`Surface::push_clip`].
    PushClip(Rect),
    /// See [`Surface::pop_clip`].
    PopClip,
}

/// A [`Surface`] that records every call, for tests and export backends.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, paint: &Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, line: Line, paint: &Brush, width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            line,
            paint: paint.clone(),
            width,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        angle: f64,
        style: &TextStyle,
        fill: &Brush,
    ) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            position,
            anchor,
            angle,
            style: style.clone(),
            fill: fill.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
