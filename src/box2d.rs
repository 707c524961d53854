use crate::vec2::Vec2f;

/// An axis-aligned 2D box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2D {
    pub position: Vec2f, // Top-left position.
    pub width: f32,      // Width (x-axis).
    pub height: f32,     // Height (y-axis).
}

impl Box2D {
    /// Creates a new 2D box from its top-left position and size.
    pub fn new(position: Vec2f, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    #[inline]
    fn max_x(&self) -> f32 {
        self.position.0 + self.width
    }

    #[inline]
    fn max_y(&self) -> f32 {
        self.position.1 + self.height
    }

    /// Returns the center point for the box.
    pub fn center(&self) -> Vec2f {
        self.position + Vec2f(self.width, self.height).scale(0.5)
    }

    /// Centers the box on the specified position.
    pub fn center_on(&mut self, position: Vec2f) {
        self.position = position - Vec2f(self.width, self.height).scale(0.5);
    }

    /// Checks if a given point is within the bounds of the box.
    pub fn contains(&self, point: Vec2f) -> bool {
        let within_x = point.0 >= self.position.0 && point.0 <= self.max_x();
        let within_y = point.1 >= self.position.1 && point.1 <= self.max_y();
        within_x && within_y
    }

    /// Checks if two boxes overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Box2D) -> bool {
        self.position.0 < other.max_x()
            && other.position.0 < self.max_x()
            && self.position.1 < other.max_y()
            && other.position.1 < self.max_y()
    }

    /// Restricts a position to within the bounds of the box.
    /// Ensures the returned point is always within the box, even if the input point is outside.
    pub fn clamp(&self, point: Vec2f) -> Vec2f {
        let x = point.0.clamp(self.position.0, self.max_x());
        let y = point.1.clamp(self.position.1, self.max_y());

        Vec2f(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_clamp() {
        let b = Box2D::new(Vec2f(10.0, 10.0), 20.0, 10.0);
        assert!(b.contains(Vec2f(15.0, 15.0)));
        assert!(b.contains(Vec2f(10.0, 10.0)));
        assert!(!b.contains(Vec2f(31.0, 15.0)));
        assert_eq!(b.clamp(Vec2f(0.0, 100.0)), Vec2f(10.0, 20.0));
    }

    #[test]
    fn center_round_trip() {
        let mut b = Box2D::new(Vec2f(0.0, 0.0), 10.0, 4.0);
        assert_eq!(b.center(), Vec2f(5.0, 2.0));
        b.center_on(Vec2f(20.0, 20.0));
        assert_eq!(b.position, Vec2f(15.0, 18.0));
        assert_eq!(b.center(), Vec2f(20.0, 20.0));
    }

    #[test]
    fn overlap_is_strict() {
        let a = Box2D::new(Vec2f(0.0, 0.0), 10.0, 10.0);
        let b = Box2D::new(Vec2f(5.0, 5.0), 10.0, 10.0);
        let touching = Box2D::new(Vec2f(10.0, 0.0), 10.0, 10.0);
        let apart = Box2D::new(Vec2f(100.0, 100.0), 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }
}
