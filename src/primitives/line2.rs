//! 2D infinite line type.

use super::{Point2, Segment2, Vec2};
use crate::error::GeometryError;
use crate::tolerance;
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use planimetry::primitives::{Point2, Segment2};
///
/// let segment: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
/// let foot = segment.line().foot_point(Point2::new(2.0, 0.0)).unwrap();
/// assert_eq!(foot, Point2::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self {
            origin: p1,
            direction: p2 - p1,
        }
    }

    /// Creates a line from a segment (extending it infinitely).
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self::from_points(segment.start, segment.end)
    }

    /// Returns `true` if the direction vector has zero length within tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        tolerance::is_zero(self.direction.magnitude())
    }

    /// Returns the point on the line at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Projects `point` onto the line and returns the parameter of the
    /// projection, or `None` for a degenerate line.
    #[inline]
    pub fn project(&self, point: Point2<F>) -> Option<F> {
        if self.is_degenerate() {
            return None;
        }
        Some((point - self.origin).dot(self.direction) / self.direction.magnitude_squared())
    }

    /// Returns the footpoint: the orthogonal projection of `point` onto the line.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateInput`] if the line has no direction
    /// (built from a zero-length segment).
    pub fn foot_point(&self, point: Point2<F>) -> Result<Point2<F>, GeometryError> {
        let t = self.project(point).ok_or(GeometryError::DegenerateInput)?;
        Ok(self.point_at(t))
    }

    /// Returns the distance from `point` to the line.
    pub fn distance(&self, point: Point2<F>) -> Result<F, GeometryError> {
        self.foot_point(point).map(|foot| foot.distance(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_foot_point_diagonal() {
        let line: Line2<f64> = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let foot = line.foot_point(Point2::new(2.0, 0.0)).unwrap();
        assert_eq!(foot, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_foot_point_beyond_segment_range() {
        // The line is infinite: the footpoint is not clamped
        let line: Line2<f64> = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let foot = line.foot_point(Point2::new(5.0, 3.0)).unwrap();
        assert_relative_eq!(foot.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(foot.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_foot_point_degenerate() {
        let p = Point2::new(1.0_f64, 1.0);
        let line = Line2::from_points(p, p);
        assert!(line.is_degenerate());
        assert_eq!(
            line.foot_point(Point2::new(0.0, 0.0)),
            Err(GeometryError::DegenerateInput)
        );
    }

    #[test]
    fn test_short_line_is_not_degenerate() {
        let line: Line2<f64> = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(1e-6, 0.0));
        assert!(!line.is_degenerate());
        let foot = line.foot_point(Point2::new(5e-7, 1e-7)).unwrap();
        assert_relative_eq!(foot.x, 5e-7, epsilon = 1e-18);
        assert_relative_eq!(foot.y, 0.0, epsilon = 1e-18);
    }

    #[test]
    fn test_distance() {
        let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Vec2::new(3.0, 0.0));
        assert_relative_eq!(line.distance(Point2::new(7.0, 4.0)).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at() {
        let line: Line2<f64> = Line2::new(Point2::new(1.0, 1.0), Vec2::new(2.0, -1.0));
        assert_eq!(line.point_at(2.0), Point2::new(5.0, -1.0));
    }
}
