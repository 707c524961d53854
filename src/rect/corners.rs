use crate::segment::Segment;
use crate::vec2::Vec2f;

use super::OrientedRect;

/// The four corners of a rectangle after rotation.
///
/// Ordered as the unrotated top-left, top-right, bottom-right, and
/// bottom-left corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub a: Vec2f,
    pub b: Vec2f,
    pub c: Vec2f,
    pub d: Vec2f,
}

impl Corners {
    /// Corners in construction order.
    pub fn points(&self) -> [Vec2f; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Edges walking the boundary: a-b, b-c, c-d, d-a.
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.d),
            Segment::new(self.d, self.a),
        ]
    }
}

/// Corners picked for the smallest or largest component on each axis.
///
/// These are the silhouette extremes of the rotated corner set, not support
/// points of the rectangle as a solid shape. Ties resolve to the later
/// corner in construction order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremePoints {
    pub leftmost: Vec2f,
    pub rightmost: Vec2f,
    pub topmost: Vec2f,
    pub bottommost: Vec2f,
}

impl OrientedRect {
    /// Computes the four corners after rotating the rectangle about its
    /// center.
    pub fn corners(&self) -> Corners {
        let center = self.center();
        let radians = self.rotation.to_radians();

        // Corners prior to rotation.
        let raw = [
            Vec2f(self.x, self.y),
            Vec2f(self.x + self.width, self.y),
            Vec2f(self.x + self.width, self.y + self.height),
            Vec2f(self.x, self.y + self.height),
        ];

        let [a, b, c, d] = raw.map(|p| (p - center).rotate(radians) + center);
        Corners { a, b, c, d }
    }

    /// Picks the extreme corner on each axis.
    pub fn extreme_points(&self) -> ExtremePoints {
        let points = self.corners().points();

        let mut extremes = ExtremePoints {
            leftmost: points[0],
            rightmost: points[1],
            topmost: points[2],
            bottommost: points[3],
        };

        for p in points {
            if p.0 <= extremes.leftmost.0 {
                extremes.leftmost = p;
            }
            if p.0 >= extremes.rightmost.0 {
                extremes.rightmost = p;
            }
            if p.1 <= extremes.topmost.1 {
                extremes.topmost = p;
            }
            if p.1 >= extremes.bottommost.1 {
                extremes.bottommost = p;
            }
        }

        extremes
    }
}
