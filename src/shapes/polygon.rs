//! Polygon type.

use super::traits::{boundary_length, signed_area};
use super::{ClosedShape, Vertices};
use crate::bounds::Aabb2;
use crate::error::GeometryError;
use crate::predicates::polygon_mbr;
use crate::primitives::Point2;
use num_traits::Float;
use tracing::debug;

/// A polygon represented as a sequence of at least three vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first)
/// and may wind either way. It is expected to be simple, but this is not
/// enforced; use [`crate::predicates::is_self_intersected`] to check.
///
/// # Example
///
/// ```
/// use planimetry::shapes::{ClosedShape, Polygon};
///
/// let square: Polygon<f64> = Polygon::from_coords(&[0.0, 2.0, 2.0, 0.0], &[0.0, 0.0, 2.0, 2.0]).unwrap();
/// assert_eq!(square.len(), 4);
/// assert!((square.area() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon taking ownership of `vertices`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::TooFewVertices`] for fewer than three vertices.
    pub fn new(vertices: Vec<Point2<F>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            debug!(found = vertices.len(), "rejected polygon with too few vertices");
            return Err(GeometryError::TooFewVertices {
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from a copy of the caller's vertices.
    #[inline]
    pub fn from_slice(vertices: &[Point2<F>]) -> Result<Self, GeometryError> {
        Self::new(vertices.to_vec())
    }

    /// Creates a polygon from parallel x and y coordinate arrays.
    ///
    /// # Errors
    ///
    /// [`GeometryError::LengthMismatch`] if the arrays differ in length, or
    /// [`GeometryError::TooFewVertices`] if they hold fewer than three values.
    pub fn from_coords(xs: &[F], ys: &[F]) -> Result<Self, GeometryError> {
        if xs.len() != ys.len() {
            debug!(xs = xs.len(), ys = ys.len(), "rejected mismatched coordinate arrays");
            return Err(GeometryError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Self::new(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Point2::new(x, y))
                .collect(),
        )
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a polygon holds at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the signed area (shoelace formula).
    ///
    /// Positive for CCW winding, negative for CW winding.
    #[inline]
    pub fn signed_area(&self) -> F {
        signed_area(&self.vertices)
    }

    /// Returns the minimum bounding rectangle.
    ///
    /// Always `Some` for a constructed polygon.
    #[inline]
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        polygon_mbr(&self.vertices)
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl<F: Float> Vertices<F> for Polygon<F> {
    #[inline]
    fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }
}

impl<F: Float> ClosedShape<F> for Polygon<F> {
    fn area(&self) -> F {
        self.signed_area().abs()
    }

    fn perimeter(&self) -> F {
        boundary_length(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_new() {
        let poly = square();
        assert_eq!(poly.len(), 4);
        assert!(!poly.is_empty());
        assert_eq!(poly.edges().count(), 4);
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Polygon::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)]);
        assert_eq!(result, Err(GeometryError::TooFewVertices { found: 2 }));
    }

    #[test]
    fn test_from_coords_mismatch() {
        let result = Polygon::from_coords(&[0.0_f64, 1.0, 1.0], &[0.0, 0.0]);
        assert_eq!(result, Err(GeometryError::LengthMismatch { xs: 3, ys: 2 }));
    }

    #[test]
    fn test_from_slice_copies() {
        let mut buffer = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let poly = Polygon::from_slice(&buffer).unwrap();
        buffer[0] = Point2::new(9.0, 9.0);
        assert_eq!(poly.vertices()[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_area_and_perimeter() {
        let poly = square();
        assert_relative_eq!(poly.area(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(poly.perimeter(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_area_winding() {
        let poly = square();
        assert!(poly.signed_area() > 0.0);
        assert!(poly.reversed().signed_area() < 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let poly = Polygon::new(vec![
            Point2::new(1.0_f64, 2.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
        ])
        .unwrap();
        let mbr = poly.bounding_box().unwrap();
        assert_eq!(Some(mbr), polygon_mbr(poly.vertices()));
        assert_eq!(mbr.min, Point2::new(1.0, 1.0));
        assert_eq!(mbr.max, Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> =
            Polygon::from_coords(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert!((poly.area() - 1.0).abs() < 0.001);
    }
}
