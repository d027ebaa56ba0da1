//! Error types for planimetry operations.

use thiserror::Error;

/// Errors that can occur when constructing shapes or running geometric queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Circle radius is zero, negative, or NaN.
    #[error("circle radius must be positive")]
    NonPositiveRadius,

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {found}")]
    TooFewVertices {
        /// Number of vertices supplied.
        found: usize,
    },

    /// Parallel coordinate arrays have different lengths.
    #[error("coordinate arrays differ in length: {xs} x values, {ys} y values")]
    LengthMismatch {
        /// Length of the x array.
        xs: usize,
        /// Length of the y array.
        ys: usize,
    },

    /// Input geometry is degenerate (zero area, zero length, coincident points).
    #[error("degenerate input geometry")]
    DegenerateInput,
}
