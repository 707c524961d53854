use crate::vec2::Vec2f;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2f,
    pub end: Vec2f,
}

impl Segment {
    /// Creates a new segment between two points.
    pub fn new(start: Vec2f, end: Vec2f) -> Self {
        Self { start, end }
    }

    /// Vector from the start of the segment to its end.
    #[inline]
    fn delta(self) -> Vec2f {
        self.end - self.start
    }

    /// Checks whether two segments cross, endpoints included.
    pub fn crosses(self, other: Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Computes the crossing point of two segments.
    ///
    /// Parallel and collinear pairs report no intersection, even when they
    /// touch or overlap.
    pub fn intersection(self, other: Segment) -> Option<Vec2f> {
        let r = self.delta();
        let s = other.delta();

        let denom = r.cross(s);
        if denom == 0.0 {
            return None;
        }

        let offset = other.start - self.start;
        let t = offset.cross(s) / denom;
        let u = offset.cross(r) / denom;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.start + r.scale(t))
        } else {
            None
        }
    }
}
