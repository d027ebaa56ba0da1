//! Orientation test with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

impl Orientation {
    /// Returns `true` if both orientations are strictly on the same side.
    ///
    /// `Collinear` never counts as a side.
    #[inline]
    pub fn same_strict_side(self, other: Self) -> bool {
        self != Orientation::Collinear && self == other
    }
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// `eps` is compared against the absolute value of the cross product
/// (twice the signed area).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient2d_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(orient2d(a, b, c, 1e-10), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orient2d_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, -1.0);
        assert_eq!(orient2d(a, b, c, 1e-10), Orientation::Clockwise);
    }

    #[test]
    fn test_orient2d_nearly_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-12);
        assert_eq!(orient2d(a, b, c, 1e-10), Orientation::Collinear);

        let c = Point2::new(0.5, 1e-8);
        assert_eq!(orient2d(a, b, c, 1e-10), Orientation::CounterClockwise);
    }

    #[test]
    fn test_same_strict_side() {
        use Orientation::*;
        assert!(Clockwise.same_strict_side(Clockwise));
        assert!(CounterClockwise.same_strict_side(CounterClockwise));
        assert!(!Clockwise.same_strict_side(CounterClockwise));
        assert!(!Collinear.same_strict_side(Collinear));
    }
}
