// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::TextMetrics;

/// Tolerance used when deciding whether two regions genuinely overlap.
///
/// Regions that merely touch along an edge do not intersect.
const OVERLAP_EPSILON: f64 = 1e-9;

/// The region covered by a single line of (possibly rotated) text.
///
/// Stored as the four corners of the text box, in order around the box. An empty region
/// (no text, or zero extent) never intersects or contains anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBounds {
    corners: [Point; 4],
    empty: bool,
}

impl TextBounds {
    /// A region covering nothing.
    pub const EMPTY: Self = Self {
        corners: [Point::ZERO; 4],
        empty: true,
    };

    /// Builds an axis-aligned region from a rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Self::EMPTY;
        }
        Self {
            corners: [
                Point::new(rect.x0, rect.y0),
                Point::new(rect.x1, rect.y0),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x0, rect.y1),
            ],
            empty: false,
        }
    }

    /// The unrotated box of a text line whose baseline starts at `origin`.
    pub(crate) fn from_baseline_box(origin: Point, metrics: &TextMetrics) -> Self {
        Self::from_rect(Rect::new(
            origin.x,
            origin.y - metrics.ascent,
            origin.x + metrics.advance_width,
            origin.y + metrics.descent,
        ))
    }

    /// Returns this region rotated by `angle` radians about `pivot`.
    #[must_use]
    pub fn rotated_about(self, angle: f64, pivot: Point) -> Self {
        if self.empty || angle == 0.0 {
            return self;
        }
        let xf = Affine::rotate_about(angle, pivot);
        Self {
            corners: self.corners.map(|p| xf * p),
            empty: false,
        }
    }

    /// Returns `true` if this region covers nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The corners of the region, in order around its boundary.
    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// The smallest axis-aligned rectangle containing the region.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        if self.empty {
            return Rect::ZERO;
        }
        let first = Rect::from_points(self.corners[0], self.corners[0]);
        self.corners[1..]
            .iter()
            .fold(first, |acc, p| acc.union_pt(*p))
    }

    /// Returns `true` if the two regions share a positive-area overlap.
    ///
    /// Both regions are convex, so a separating-axis test over the edge normals of both
    /// boxes is exact.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        for corners in [&self.corners, &other.corners] {
            for i in 0..4 {
                let edge = corners[(i + 1) % 4] - corners[i];
                let axis = Vec2::new(-edge.y, edge.x);
                if axis.hypot2() == 0.0 {
                    continue;
                }
                let (a0, a1) = project(&self.corners, axis);
                let (b0, b1) = project(&other.corners, axis);
                let scale = axis.hypot();
                if (a1 - b0) / scale <= OVERLAP_EPSILON || (b1 - a0) / scale <= OVERLAP_EPSILON {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if `point` lies inside the region or on its boundary.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.empty {
            return false;
        }
        let mut left = false;
        let mut right = false;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            let cross = (b - a).cross(point - a);
            left |= cross > 0.0;
            right |= cross < 0.0;
        }
        !(left && right)
    }
}

fn project(corners: &[Point; 4], axis: Vec2) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in corners {
        let d = p.to_vec2().dot(axis);
        lo = lo.min(d);
        hi = hi.max(d);
    }
    (lo, hi)
}
