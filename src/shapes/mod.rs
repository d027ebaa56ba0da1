//! Shape entities consumed by the predicate engine.
//!
//! Shapes are immutable values that own their vertices. They carry no
//! predicate logic beyond trivial measurements; containment and
//! intersection live in [`crate::predicates`].

mod circle;
mod polygon;
mod rectangle;
mod traits;
mod triangle;

pub use circle::Circle2;
pub use polygon::Polygon;
pub use rectangle::Rectangle2;
pub use traits::{ClosedShape, Edges, Vertices};
pub use triangle::Triangle2;
