//! Whole-polygon predicates.

use super::segment::{is_segment_intersection, segment_in_ring};
use crate::primitives::{Point2, Segment2};
use crate::shapes::Vertices;
use crate::tolerance;
use num_traits::Float;

/// Checks if any two non-adjacent edges of a polygon meet.
///
/// Crossing, touching and collinear overlap all count. Triangles never
/// self-intersect.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_self_intersected;
/// use planimetry::Polygon;
///
/// let bowtie = Polygon::from_coords(&[0.0, 2.0, 2.0, 0.0], &[0.0, 2.0, 0.0, 2.0]).unwrap();
/// assert!(is_self_intersected(&bowtie));
///
/// let square = Polygon::from_coords(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
/// assert!(!is_self_intersected(&square));
/// ```
pub fn is_self_intersected<F, S>(polygon: &S) -> bool
where
    F: Float,
    S: Vertices<F> + ?Sized,
{
    let vertices = polygon.vertices();
    let n = vertices.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let a = Segment2::new(vertices[i], vertices[(i + 1) % n]);

        for j in (i + 2)..n {
            // The last edge shares a vertex with the first
            let j_next = (j + 1) % n;
            if j_next == i {
                continue;
            }

            if is_segment_intersection(a, Segment2::new(vertices[j], vertices[j_next])) {
                return true;
            }
        }
    }

    false
}

/// Checks if a polygon is convex.
///
/// The turn at every vertex, closing vertices included, must go the same
/// way. Collinear turns are ignored, so a square with an extra vertex in the
/// middle of one side is still convex.
pub fn is_convex_polygon<F, S>(polygon: &S) -> bool
where
    F: Float,
    S: Vertices<F> + ?Sized,
{
    ring_is_convex(polygon.vertices())
}

pub(crate) fn ring_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let turn = (b - a).cross(c - b);
        if tolerance::is_zero(turn) {
            continue;
        }

        let is_left = turn > F::zero();
        match sign {
            None => sign = Some(is_left),
            Some(s) if s != is_left => return false,
            _ => {}
        }
    }

    true
}

/// Checks if every edge of `check` lies inside `polygon`.
///
/// Sharing boundary is allowed, so every simple polygon contains itself.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_polygon_in_polygon;
/// use planimetry::Polygon;
///
/// let outer = Polygon::from_coords(&[0.0, 4.0, 4.0, 0.0], &[0.0, 0.0, 4.0, 4.0]).unwrap();
/// let inner = Polygon::from_coords(&[1.0, 3.0, 2.0], &[1.0, 1.0, 3.0]).unwrap();
/// assert!(is_polygon_in_polygon(&inner, &outer));
/// assert!(!is_polygon_in_polygon(&outer, &inner));
/// ```
pub fn is_polygon_in_polygon<F, C, S>(check: &C, polygon: &S) -> bool
where
    F: Float,
    C: Vertices<F> + ?Sized,
    S: Vertices<F> + ?Sized,
{
    let ring = polygon.vertices();
    check.edges().all(|edge| segment_in_ring(edge, ring))
}
