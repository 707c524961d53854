use std::cmp::Ordering;

use crate::box2d::Box2D;
use crate::segment::Segment;
use crate::vec2::Vec2f;

use super::OrientedRect;

/// Rotation added to a rectangle sitting at an exact quarter turn before
/// running segment-based queries. Axis-aligned edges make the segment
/// crossing test degenerate, so those rectangles are tested slightly tilted.
const NUDGE_DEGREES: f32 = 0.02;

/// Collected vertices closer than this are treated as the same point.
const DUPLICATE_DISTANCE: f32 = 1e-3;

/// Most vertices the overlap of two convex quadrilaterals can have.
const MAX_VERTICES: usize = 8;

/// The overlap region of two rotated rectangles.
///
/// Vertices are sorted counterclockwise around their centroid, so walking
/// them in order traces a convex, non-self-intersecting boundary. Each
/// query builds a fresh `Overlap`; the vertex list is owned by the result
/// and shares no storage with other queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overlap {
    points: Vec<Vec2f>,
}

impl Overlap {
    /// An overlap with no vertices.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds an overlap from unordered vertices by sorting them
    /// counterclockwise around their centroid.
    fn from_points(mut points: Vec<Vec2f>) -> Self {
        let centroid = mean(&points);
        points.sort_by(|a, b| ccw_order(centroid, *a, *b));
        Self { points }
    }

    /// Vertices of the overlap boundary.
    pub fn points(&self) -> &[Vec2f] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the overlap has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the vertices, `Vec2f::ZERO` when empty.
    pub fn centroid(&self) -> Vec2f {
        mean(&self.points)
    }

    /// Area of the overlap via the shoelace formula.
    ///
    /// Returns 0 for fewer than three vertices. The vertex sort by ascending
    /// polar angle makes the result non-negative; on a y-down screen that
    /// order renders visually clockwise.
    pub fn area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let mut doubled = 0.0;
        for (i, point) in self.points.iter().enumerate() {
            let next = self.points[(i + 1) % self.points.len()];
            doubled += point.0 * next.1 - next.0 * point.1;
        }

        doubled * 0.5
    }
}

/// Arithmetic mean of a point set, `Vec2f::ZERO` when empty.
fn mean(points: &[Vec2f]) -> Vec2f {
    if points.is_empty() {
        return Vec2f::ZERO;
    }

    let mut sum = Vec2f::ZERO;
    for point in points {
        sum += *point;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f32;
    sum.scale(1.0 / count)
}

/// Orders two points by ascending polar angle around `centroid`. Points at
/// the same angle sort the farther one first.
fn ccw_order(centroid: Vec2f, a: Vec2f, b: Vec2f) -> Ordering {
    let angle_a = (a - centroid).angle();
    let angle_b = (b - centroid).angle();

    angle_a
        .total_cmp(&angle_b)
        .then_with(|| centroid.distance(b).total_cmp(&centroid.distance(a)))
}

/// Adds a vertex unless an equal one was already collected.
fn push_vertex(points: &mut Vec<Vec2f>, point: Vec2f) {
    let duplicate = points
        .iter()
        .any(|p| p.distance_squared(point) < DUPLICATE_DISTANCE * DUPLICATE_DISTANCE);

    if !duplicate {
        points.push(point);
    }
}

impl OrientedRect {
    /// Copy with the rotation pushed off an exact quarter turn. The caller's
    /// rectangle is never modified; the nudge lives only inside a query.
    fn nudged(&self) -> Self {
        if self.is_quarter_turn() {
            Self {
                rotation: self.rotation + NUDGE_DEGREES,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Axis-aligned bounds of a rectangle at an exact quarter turn. Odd
    /// quarter turns trade width and height about the center.
    #[allow(clippy::cast_possible_truncation)]
    fn quarter_turn_box(&self) -> Box2D {
        let quarter = (self.rotation / 90.0).round() as i64;
        if quarter % 2 == 0 {
            Box2D::new(self.position(), self.width, self.height)
        } else {
            let flipped = Vec2f(self.height, self.width);
            Box2D::new(self.center() - flipped.scale(0.5), flipped.0, flipped.1)
        }
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// The segment from the point to the rectangle's center is tested
    /// against each of the four edges; crossing any edge means the point is
    /// outside. The center of a convex rectangle is always interior, so a
    /// point is inside exactly when that segment crosses nothing. Points on
    /// the boundary count as outside.
    ///
    /// Unreliable at exact quarter-turn rotations, where edges go
    /// axis-aligned and the crossing test degenerates; `intersects` and
    /// `overlap` nudge such rectangles before calling this.
    pub fn contains_point(&self, point: Vec2f) -> bool {
        let spoke = Segment::new(point, self.center());
        self.corners().edges().iter().all(|edge| !edge.crosses(spoke))
    }

    /// Checks whether two rotated rectangles overlap.
    ///
    /// When both rectangles sit at exact quarter turns the test reduces to
    /// exact interval overlap. Otherwise quarter-turn rectangles are nudged
    /// (see `NUDGE_DEGREES`), then a corner of either rectangle contained in
    /// the other counts as an overlap, and failing that every edge pair is
    /// tested for a crossing.
    ///
    /// This is a corner-and-edge heuristic, not a separating-axis proof;
    /// exact tangency can go either way under floating point.
    pub fn intersects(&self, other: &OrientedRect) -> bool {
        if self.is_quarter_turn() && other.is_quarter_turn() {
            return self.quarter_turn_box().overlaps(&other.quarter_turn_box());
        }

        let a = self.nudged();
        let b = other.nudged();
        let a_corners = a.corners();
        let b_corners = b.corners();

        if a_corners.points().iter().any(|p| b.contains_point(*p))
            || b_corners.points().iter().any(|p| a.contains_point(*p))
        {
            return true;
        }

        a_corners
            .edges()
            .iter()
            .any(|edge_a| b_corners.edges().iter().any(|edge_b| edge_a.crosses(*edge_b)))
    }

    /// Computes the overlap polygon of two rectangles.
    ///
    /// Returns an empty overlap when the rectangles do not intersect, or
    /// when contact is detected but no vertex can be extracted. Otherwise
    /// the polygon is built from every corner of one rectangle contained in
    /// the other plus every edge-pair crossing point, deduplicated and
    /// sorted counterclockwise around the centroid. Two convex
    /// quadrilaterals admit at most eight true vertices.
    pub fn overlap(&self, other: &OrientedRect) -> Overlap {
        if !self.intersects(other) {
            return Overlap::empty();
        }

        if self.is_quarter_turn() && other.is_quarter_turn() {
            return self.quarter_turn_overlap(other);
        }

        // Same adjustment as `intersects`, so both queries agree on the
        // geometry they report on.
        let a = self.nudged();
        let b = other.nudged();
        let a_corners = a.corners();
        let b_corners = b.corners();

        let mut points: Vec<Vec2f> = Vec::with_capacity(MAX_VERTICES);

        for point in a_corners.points() {
            if b.contains_point(point) {
                push_vertex(&mut points, point);
            }
        }
        for point in b_corners.points() {
            if a.contains_point(point) {
                push_vertex(&mut points, point);
            }
        }

        for edge_a in a_corners.edges() {
            for edge_b in b_corners.edges() {
                if let Some(point) = edge_a.intersection(edge_b) {
                    push_vertex(&mut points, point);
                }
            }
        }

        // Contact without an extractable vertex, e.g. grazing at a corner.
        if points.is_empty() {
            return Overlap::empty();
        }

        debug_assert!(
            points.len() <= MAX_VERTICES,
            "overlap of two rectangles collected {} vertices",
            points.len()
        );

        Overlap::from_points(points)
    }

    /// Exact overlap of two axis-aligned rectangles: the intersection of
    /// their x and y intervals.
    fn quarter_turn_overlap(&self, other: &OrientedRect) -> Overlap {
        let a = self.quarter_turn_box();
        let b = other.quarter_turn_box();

        let left = a.position.0.max(b.position.0);
        let top = a.position.1.max(b.position.1);
        let right = (a.position.0 + a.width).min(b.position.0 + b.width);
        let bottom = (a.position.1 + a.height).min(b.position.1 + b.height);

        Overlap::from_points(vec![
            Vec2f(left, top),
            Vec2f(right, top),
            Vec2f(right, bottom),
            Vec2f(left, bottom),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 0.5;

    #[test]
    fn center_is_always_inside() {
        let rects = [
            OrientedRect::new(0.0, 0.0, 10.0, 10.0, 12.0),
            OrientedRect::new(-5.0, 3.0, 2.0, 40.0, 261.0),
            OrientedRect::new(100.0, 100.0, 1.0, 1.0, 45.0),
        ];

        for rect in rects {
            assert!(rect.contains_point(rect.center()), "{rect:?}");
        }
    }

    #[test]
    fn far_point_is_outside() {
        let rect = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 33.0);
        assert!(!rect.contains_point(Vec2f(500.0, 500.0)));
        assert!(!rect.contains_point(Vec2f(-500.0, 2.0)));
    }

    #[test]
    fn rotated_rect_containment() {
        // A 10x10 square about the origin spun 45 degrees: the diamond
        // contains (6, 0) but its unrotated corner region does not survive.
        let rect = OrientedRect::new(-5.0, -5.0, 10.0, 10.0, 45.0);
        assert!(rect.contains_point(Vec2f(6.0, 0.0)));
        assert!(!rect.contains_point(Vec2f(4.9, 4.9)));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = OrientedRect::new(100.0, 100.0, 10.0, 10.0, 0.0);

        assert!(!a.intersects(&b));
        assert!(a.overlap(&b).is_empty());
        assert_eq!(a.overlap(&b).area(), 0.0);
    }

    #[test]
    fn intersects_is_symmetric() {
        let pairs = [
            (
                OrientedRect::new(0.0, 0.0, 10.0, 10.0, 0.0),
                OrientedRect::new(5.0, 5.0, 10.0, 10.0, 0.0),
            ),
            (
                OrientedRect::new(0.0, 0.0, 10.0, 10.0, 30.0),
                OrientedRect::new(8.0, 2.0, 6.0, 12.0, 75.0),
            ),
            (
                OrientedRect::new(0.0, 0.0, 10.0, 10.0, 45.0),
                OrientedRect::new(40.0, 40.0, 10.0, 10.0, 10.0),
            ),
        ];

        for (a, b) in pairs {
            assert_eq!(a.intersects(&b), b.intersects(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn identical_axis_aligned_rects() {
        let a = OrientedRect::new(3.0, 4.0, 10.0, 6.0, 0.0);
        let b = a;

        assert!(a.intersects(&b));
        assert_eq!(a.overlap(&b).area(), 60.0);
    }

    #[test]
    fn identical_rotated_rects() {
        let a = OrientedRect::new(3.0, 4.0, 10.0, 6.0, 45.0);
        let b = a;

        assert!(a.intersects(&b));
        assert!((a.overlap(&b).area() - 60.0).abs() < TOLERANCE);
    }

    #[test]
    fn axis_aligned_overlap_area() {
        let a = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = OrientedRect::new(5.0, 5.0, 10.0, 10.0, 0.0);

        assert!(a.intersects(&b));
        let overlap = a.overlap(&b);
        assert_eq!(overlap.len(), 4);
        assert_eq!(overlap.area(), 25.0);
    }

    #[test]
    fn quarter_turn_swaps_the_footprint() {
        // A tall sliver lying on its side: at 90 degrees the 2x20 rectangle
        // occupies a 20x2 footprint and reaches a box it would miss upright.
        let sliver = OrientedRect::new(0.0, 0.0, 2.0, 20.0, 90.0);
        let target = OrientedRect::new(8.0, 9.0, 2.0, 2.0, 0.0);

        assert!(sliver.intersects(&target));
        assert!(!OrientedRect { rotation: 0.0, ..sliver }.intersects(&target));
    }

    #[test]
    fn rotated_over_axis_aligned_polygon() {
        // A 45-degree square over an equal axis-aligned square at the same
        // center: the overlap is a regular octagon.
        let square = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 0.0);
        let diamond = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 45.0);

        let overlap = square.overlap(&diamond);
        assert!((3..=8).contains(&overlap.len()));
        assert!(overlap.area() > 0.0);
        assert!(overlap.area() < 100.0);

        // Eight-sided with area 100 * (2*sqrt(2) - 2).
        assert_eq!(overlap.len(), 8);
        assert!((overlap.area() - 82.84).abs() < TOLERANCE);
    }

    #[test]
    fn overlap_area_is_symmetric() {
        let a = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 20.0);
        let b = OrientedRect::new(4.0, 3.0, 8.0, 8.0, 65.0);

        assert!((a.overlap(&b).area() - b.overlap(&a).area()).abs() < 1e-2);
    }

    #[test]
    fn nudge_does_not_mutate_the_caller() {
        let a = OrientedRect::new(0.0, 0.0, 10.0, 10.0, 90.0);
        let b = OrientedRect::new(5.0, 5.0, 10.0, 10.0, 45.0);

        let _ = a.intersects(&b);
        let _ = a.overlap(&b);
        assert_eq!(a.rotation, 90.0);
    }

    #[test]
    fn counterclockwise_sort_is_idempotent() {
        let points = vec![
            Vec2f(1.0, 0.0),
            Vec2f(0.0, 1.0),
            Vec2f(-1.0, 0.0),
            Vec2f(0.0, -1.0),
            Vec2f(0.7, 0.7),
        ];

        let sorted = Overlap::from_points(points);
        let resorted = Overlap::from_points(sorted.points().to_vec());
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn same_angle_sorts_farther_point_first() {
        let near = Vec2f(1.0, 1.0);
        let far = Vec2f(2.0, 2.0);
        let centroid = Vec2f::ZERO;

        assert_eq!(ccw_order(centroid, far, near), Ordering::Less);
        assert_eq!(ccw_order(centroid, near, far), Ordering::Greater);
    }

    #[test]
    fn duplicate_vertices_are_collapsed() {
        let mut points = Vec::new();
        push_vertex(&mut points, Vec2f(1.0, 1.0));
        push_vertex(&mut points, Vec2f(1.0, 1.0));
        push_vertex(&mut points, Vec2f(1.0001, 1.0));
        push_vertex(&mut points, Vec2f(2.0, 2.0));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn area_needs_three_vertices() {
        assert_eq!(Overlap::empty().area(), 0.0);
        assert_eq!(Overlap::from_points(vec![Vec2f(0.0, 0.0)]).area(), 0.0);
        assert_eq!(
            Overlap::from_points(vec![Vec2f(0.0, 0.0), Vec2f(4.0, 2.0)]).area(),
            0.0
        );
    }

    #[test]
    fn shoelace_of_a_known_triangle() {
        let triangle = Overlap::from_points(vec![
            Vec2f(0.0, 0.0),
            Vec2f(4.0, 0.0),
            Vec2f(0.0, 3.0),
        ]);
        assert!((triangle.area() - 6.0).abs() < 1e-5);
    }
}
