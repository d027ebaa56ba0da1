//! Point containment tests.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use crate::shapes::{Circle2, Edges, Rectangle2, Triangle2, Vertices};
use crate::tolerance;
use num_traits::Float;

/// Tests if a point lies on a segment, endpoints included.
///
/// True when the point equals an endpoint exactly, or lies inside the
/// segment's bounding box within tolerance of the segment's line. The
/// distance to the line is what gets compared, so the answer does not drift
/// with the scale of the coordinates.
/// Swapping the segment's endpoints never changes the answer.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_point_on_segment;
/// use planimetry::{Point2, Segment2};
///
/// let segment = Segment2::from_coords(0.0, 0.0, 4.0, 2.0);
/// assert!(is_point_on_segment(Point2::new(2.0, 1.0), segment));
/// assert!(!is_point_on_segment(Point2::new(6.0, 3.0), segment));
/// ```
pub fn is_point_on_segment<F: Float>(point: Point2<F>, segment: Segment2<F>) -> bool {
    if point == segment.start || point == segment.end {
        return true;
    }
    if !segment.bounds().contains_point(point) {
        return false;
    }
    // Nonzero length here: a point inside a zero-length segment's box is
    // one of its endpoints
    let along = segment.start - segment.end;
    tolerance::is_zero((point - segment.end).cross(along) / along.magnitude())
}

/// Tests if a point lies inside a triangle, boundary included.
///
/// The cross products of consecutive point-to-vertex vectors must agree in
/// sign; a product within tolerance of zero agrees with either sign.
pub fn is_point_in_triangle<F: Float>(point: Point2<F>, triangle: &Triangle2<F>) -> bool {
    let v = triangle.vertices();
    let pa = v[0] - point;
    let pb = v[1] - point;
    let pc = v[2] - point;

    let t1 = pa.cross(pb);
    let t2 = pb.cross(pc);
    let t3 = pc.cross(pa);

    tolerance::is_same_sign(t1, t2)
        && tolerance::is_same_sign(t2, t3)
        && tolerance::is_same_sign(t3, t1)
}

/// Tests if a point lies inside a rectangle, boundary included.
///
/// The point must lie between both pairs of opposite edges.
pub fn is_point_in_rectangle<F: Float>(point: Point2<F>, rectangle: &Rectangle2<F>) -> bool {
    let v = rectangle.vertices();
    let side = |from: Point2<F>, to: Point2<F>| (to - from).cross(point - from);

    let e01 = side(v[0], v[1]);
    let e23 = side(v[2], v[3]);
    let e12 = side(v[1], v[2]);
    let e30 = side(v[3], v[0]);

    tolerance::is_same_sign(e01, e23) && tolerance::is_same_sign(e12, e30)
}

/// Tests if a point lies inside an axis-aligned box, boundary included.
///
/// Plain interval containment, used as the cheap rejection test in front of
/// the polygon predicates.
#[inline]
pub fn is_point_in_bounds<F: Float>(point: Point2<F>, bounds: Aabb2<F>) -> bool {
    bounds.contains_point(point)
}

/// Tests if a point lies inside a polygon, boundary included.
///
/// Points outside the minimum bounding rectangle are rejected first. The
/// rest go through a ray-casting parity test against a vertical ray pointing
/// up from the point. Each edge spans a half-open x interval so that a
/// vertex shared by two edges is counted once.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_point_in_polygon;
/// use planimetry::{Point2, Polygon};
///
/// let notch = Polygon::from_coords(
///     &[0.0, 4.0, 4.0, 2.0, 2.0, 3.0, 1.0, 0.0],
///     &[0.0, 0.0, 4.0, 4.0, 3.0, 1.0, 2.0, 2.0],
/// ).unwrap();
/// assert!(!is_point_in_polygon(Point2::new(2.0, 1.51), &notch));
/// assert!(is_point_in_polygon(Point2::new(3.5, 3.5), &notch));
/// ```
pub fn is_point_in_polygon<F, S>(point: Point2<F>, polygon: &S) -> bool
where
    F: Float,
    S: Vertices<F> + ?Sized,
{
    point_in_ring(point, polygon.vertices())
}

/// Tests if a point lies inside or on a circle.
#[inline]
pub fn is_point_in_circle<F: Float>(point: Point2<F>, circle: &Circle2<F>) -> bool {
    tolerance::is_greater_or_equal(circle.radius(), point.distance(circle.center()))
}

/// Returns the minimum bounding rectangle of a vertex loop.
///
/// Returns `None` for an empty slice.
#[inline]
pub fn polygon_mbr<F: Float>(vertices: &[Point2<F>]) -> Option<Aabb2<F>> {
    Aabb2::from_points(vertices.iter().copied())
}

pub(crate) fn point_in_ring<F: Float>(point: Point2<F>, vertices: &[Point2<F>]) -> bool {
    match polygon_mbr(vertices) {
        Some(mbr) if is_point_in_bounds(point, mbr) => {}
        _ => return false,
    }

    let mut crossings = 0usize;
    for edge in Edges::new(vertices) {
        if is_point_on_segment(point, edge) {
            return true;
        }

        let (a, b) = (edge.start, edge.end);
        let in_span = (a.x <= point.x && point.x < b.x) || (b.x <= point.x && point.x < a.x);
        if !in_span {
            continue;
        }

        // a.x != b.x past the span test, so vertical edges never get here
        let slope = (b.y - a.y) / (b.x - a.x);
        if point.y < slope * (point.x - a.x) + a.y {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}
