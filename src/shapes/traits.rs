//! Capabilities shared by the closed shapes.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A shape bounded by an ordered, implicitly closed sequence of vertices.
///
/// The predicate engine only needs this capability to walk a boundary, so
/// triangles, rectangles and general polygons are all accepted wherever a
/// boundary is expected.
pub trait Vertices<F: Float> {
    /// Returns the boundary vertices in order.
    fn vertices(&self) -> &[Point2<F>];

    /// Returns the boundary edges in order, ending with the closing edge
    /// from the last vertex back to the first.
    fn edges(&self) -> Edges<'_, F> {
        Edges::new(self.vertices())
    }
}

/// A shape enclosing a finite region.
pub trait ClosedShape<F: Float> {
    /// Area of the enclosed region.
    fn area(&self) -> F;

    /// Length of the boundary.
    fn perimeter(&self) -> F;
}

/// Iterator over the edges of a closed vertex loop.
#[derive(Debug, Clone)]
pub struct Edges<'a, F> {
    vertices: &'a [Point2<F>],
    index: usize,
}

impl<'a, F: Float> Edges<'a, F> {
    /// Creates an edge iterator over a closed loop of vertices.
    pub fn new(vertices: &'a [Point2<F>]) -> Self {
        Self { vertices, index: 0 }
    }
}

impl<F: Float> Iterator for Edges<'_, F> {
    type Item = Segment2<F>;

    fn next(&mut self) -> Option<Segment2<F>> {
        let n = self.vertices.len();
        if self.index >= n {
            return None;
        }
        let i = self.index;
        self.index += 1;
        Some(Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<F: Float> ExactSizeIterator for Edges<'_, F> {}

/// Signed area of a closed vertex loop (shoelace formula).
///
/// Positive for CCW winding, negative for CW winding.
pub(crate) fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let doubled = Edges::new(vertices).fold(F::zero(), |acc, edge| {
        acc + edge.start.to_vec().cross(edge.end.to_vec())
    });
    doubled / (F::one() + F::one())
}

/// Total length of the edges of a closed vertex loop.
pub(crate) fn boundary_length<F: Float>(vertices: &[Point2<F>]) -> F {
    Edges::new(vertices).fold(F::zero(), |acc, edge| acc + edge.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_edges_wrap_around() {
        let square = unit_square();
        let edges: Vec<_> = Edges::new(&square).collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Segment2::new(square[0], square[1]));
        assert_eq!(edges[3], Segment2::new(square[3], square[0]));
    }

    #[test]
    fn test_edges_exact_size() {
        let square = unit_square();
        let mut edges = Edges::new(&square);
        assert_eq!(edges.len(), 4);
        edges.next();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_edges_empty() {
        let none: Vec<Point2<f64>> = Vec::new();
        assert_eq!(Edges::new(&none).count(), 0);
    }

    #[test]
    fn test_signed_area_winding() {
        let mut square = unit_square();
        assert_relative_eq!(signed_area(&square), 1.0, epsilon = 1e-12);
        square.reverse();
        assert_relative_eq!(signed_area(&square), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boundary_length() {
        assert_relative_eq!(boundary_length(&unit_square()), 4.0, epsilon = 1e-12);
    }
}
