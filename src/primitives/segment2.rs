//! 2D line segment type.

use super::{Line2, Point2, Vec2};
use crate::bounds::Aabb2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Zero-length segments are allowed; every predicate in
/// [`crate::predicates`] gives a defined answer for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` (`0` is `start`, `1` is `end`).
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the infinite line through this segment.
    #[inline]
    pub fn line(self) -> Line2<F> {
        Line2::from_segment(&self)
    }

    /// Returns the axis-aligned box spanned by the endpoints.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// The footpoint on the segment's line is clamped to the segment, so a
    /// projection falling outside returns the nearer endpoint. Returns
    /// `(closest_point, t)` with `t` in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let t = match self.line().project(p) {
            Some(t) => t.max(F::zero()).min(F::one()),
            // Zero-length segment
            None => return (self.start, F::zero()),
        };

        // Exact endpoints when clamped, so callers can compare them
        if t == F::zero() {
            (self.start, t)
        } else if t == F::one() {
            (self.end, t)
        } else {
            (self.point_at(t), t)
        }
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Returns `true` if the segment has zero length within tolerance.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.line().is_degenerate()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

impl<F: Float> From<Segment2<F>> for Line2<F> {
    fn from(segment: Segment2<F>) -> Self {
        segment.line()
    }
}
