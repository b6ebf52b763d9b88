// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::AxisError;

/// Axis placement relative to the data area, matching Vega’s axis `orient` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the data area.
    Top,
    /// A horizontal axis placed below the data area.
    Bottom,
    /// A vertical axis placed to the left of the data area.
    Left,
    /// A vertical axis placed to the right of the data area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for `Left` and `Right`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Sectioned axes only support vertical placement.
    pub(crate) fn require_vertical(self) -> Result<Self, AxisError> {
        if self.is_vertical() {
            Ok(self)
        } else {
            Err(AxisError::UnsupportedOrientation(self))
        }
    }
}
