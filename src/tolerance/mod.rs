//! Epsilon-aware comparisons and orientation.
//!
//! Every floating comparison made by the predicate engine goes through this
//! module. The shorthand functions use [`DEFAULT_EPSILON`]; the `*_eps`
//! variants take the tolerance explicitly.

mod compare;
mod orient;

pub use compare::{
    default_epsilon, is_equal, is_equal_eps, is_greater_or_equal, is_greater_or_equal_eps,
    is_same_sign, is_same_sign_eps, is_zero, is_zero_eps, DEFAULT_EPSILON,
};
pub use orient::{orient2d, Orientation};
