//! Geometric hit-testing primitives.

use serde::{Deserialize, Serialize};
use weft_types::{Scalar, Vec2};

/// Parametric line-segment intersection test.
///
/// Solves the 2×2 system via the cross-product determinant. A zero
/// determinant means the segments are parallel or collinear and is
/// treated as no intersection — overlapping collinear segments get no
/// special case. Otherwise the segments intersect iff both parameters
/// `ua` and `ub` lie in `[0, 1]`.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d = (a2.x - a1.x) * (b2.y - b1.y) - (a2.y - a1.y) * (b2.x - b1.x);
    if d == 0.0 {
        return false;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / d;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / d;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// An axis-aligned rectangle in screen space, used for UI hit regions
/// such as the reset button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: Scalar,
    /// Top edge.
    pub y: Scalar,
    /// Width.
    pub width: Scalar,
    /// Height.
    pub height: Scalar,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `p` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}
