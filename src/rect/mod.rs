mod collision;
mod corners;

pub use collision::Overlap;
pub use corners::{Corners, ExtremePoints};

use crate::box2d::Box2D;
use crate::vec2::Vec2f;

/// A rectangle rotated about its own center.
///
/// `(x, y)` is the top-left corner of the rectangle *before* rotation, so an
/// `OrientedRect` with rotation 0 lines up with an axis-aligned box at the
/// same position. Rotation is stored in degrees and may be any real value.
/// Dimensions are expected to be non-negative; nothing validates them, and a
/// zero width or height collapses the rectangle to a segment or point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32, // Degrees.
}

impl OrientedRect {
    pub const ZERO: OrientedRect = OrientedRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        rotation: 0.0,
    };

    /// Creates a new rectangle from its unrotated top-left corner, size, and
    /// rotation in degrees.
    pub fn new(x: f32, y: f32, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation,
        }
    }

    /// Top-left position before rotation.
    #[inline]
    pub fn position(&self) -> Vec2f {
        Vec2f(self.x, self.y)
    }

    /// Dimensions of the rectangle as a vector.
    #[inline]
    pub fn dimensions(&self) -> Vec2f {
        Vec2f(self.width, self.height)
    }

    /// Center of the rectangle. Rotation pivots here, so it never moves the
    /// center.
    #[inline]
    pub fn center(&self) -> Vec2f {
        self.position() + self.dimensions().scale(0.5)
    }

    /// Distance from the center to any corner.
    pub fn half_diagonal(&self) -> f32 {
        self.dimensions().scale(0.5).length()
    }

    /// Returns a copy moved by the given translation.
    pub fn translated(&self, delta: Vec2f) -> Self {
        Self {
            x: self.x + delta.0,
            y: self.y + delta.1,
            ..*self
        }
    }

    /// True when the rotation sits at an exact multiple of 90 degrees.
    #[inline]
    pub(crate) fn is_quarter_turn(&self) -> bool {
        self.rotation % 90.0 == 0.0
    }
}

impl From<Box2D> for OrientedRect {
    fn from(b: Box2D) -> OrientedRect {
        OrientedRect::new(b.position.0, b.position.1, b.width, b.height, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_half_diagonal() {
        let rect = OrientedRect::new(0.0, 0.0, 6.0, 8.0, 0.0);
        assert_eq!(rect.center(), Vec2f(3.0, 4.0));
        assert_eq!(rect.half_diagonal(), 5.0);
    }

    #[test]
    fn rotation_keeps_center() {
        let rect = OrientedRect::new(10.0, 20.0, 6.0, 8.0, 0.0);
        let spun = OrientedRect { rotation: 123.4, ..rect };
        assert_eq!(rect.center(), spun.center());
    }

    #[test]
    fn translated_moves_only_position() {
        let rect = OrientedRect::new(1.0, 2.0, 3.0, 4.0, 45.0);
        let moved = rect.translated(Vec2f(10.0, -2.0));
        assert_eq!(moved.position(), Vec2f(11.0, 0.0));
        assert_eq!(moved.dimensions(), rect.dimensions());
        assert_eq!(moved.rotation, rect.rotation);
    }

    #[test]
    fn quarter_turn_detection() {
        assert!(OrientedRect::new(0.0, 0.0, 1.0, 1.0, 0.0).is_quarter_turn());
        assert!(OrientedRect::new(0.0, 0.0, 1.0, 1.0, -90.0).is_quarter_turn());
        assert!(OrientedRect::new(0.0, 0.0, 1.0, 1.0, 450.0).is_quarter_turn());
        assert!(!OrientedRect::new(0.0, 0.0, 1.0, 1.0, 45.0).is_quarter_turn());
    }

    #[test]
    fn from_box2d() {
        let b = crate::box2d::Box2D::new(Vec2f(2.0, 3.0), 4.0, 5.0);
        let rect = OrientedRect::from(b);
        assert_eq!(rect.position(), Vec2f(2.0, 3.0));
        assert_eq!(rect.rotation, 0.0);
    }
}
