// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::TextMetrics;

/// The point of a text box that is aligned with an anchor point.
///
/// Offsets are measured from the left end of the baseline, with y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Top edge, left end.
    TopLeft,
    /// Top edge, horizontal middle.
    TopCenter,
    /// Top edge, right end.
    TopRight,
    /// Vertical middle, left end.
    CenterLeft,
    /// Middle of the box.
    Center,
    /// Vertical middle, right end.
    CenterRight,
    /// Bottom edge, left end.
    BottomLeft,
    /// Bottom edge, horizontal middle.
    BottomCenter,
    /// Bottom edge, right end.
    BottomRight,
}

impl TextAnchor {
    /// Offset of this anchor relative to the left end of the baseline.
    #[must_use]
    pub fn offset(self, metrics: &TextMetrics) -> Vec2 {
        let w = metrics.advance_width;
        let x = match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::Center | Self::BottomCenter => 0.5 * w,
            Self::TopRight | Self::CenterRight | Self::BottomRight => w,
        };
        let y = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => -metrics.ascent,
            Self::CenterLeft | Self::Center | Self::CenterRight => {
                0.5 * (metrics.descent - metrics.ascent)
            }
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => metrics.descent,
        };
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_center_is_below_baseline_midpoint() {
        let m = TextMetrics {
            advance_width: 20.0,
            ascent: 8.0,
            descent: 2.0,
            leading: 0.0,
        };
        assert_eq!(TextAnchor::BottomCenter.offset(&m), Vec2::new(10.0, 2.0));
        assert_eq!(TextAnchor::TopLeft.offset(&m), Vec2::new(0.0, -8.0));
        assert_eq!(TextAnchor::CenterRight.offset(&m), Vec2::new(20.0, -3.0));
    }
}
