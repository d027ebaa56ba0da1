//! Epsilon-aware scalar comparisons.

use num_traits::Float;

/// Tolerance used by every comparison in the predicate engine.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Returns [`DEFAULT_EPSILON`] converted to `F`.
///
/// For `f32` this rounds to the nearest representable value.
#[inline]
pub fn default_epsilon<F: Float>() -> F {
    F::from(DEFAULT_EPSILON).unwrap()
}

/// Returns `true` if `x` is within `eps` of zero.
#[inline]
pub fn is_zero_eps<F: Float>(x: F, eps: F) -> bool {
    x.abs() <= eps
}

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn is_equal_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if `a >= b`, allowing `a` to fall short of `b` by `eps`.
#[inline]
pub fn is_greater_or_equal_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    a >= b - eps
}

/// Returns `true` if `a` and `b` do not have strictly opposite signs.
///
/// A value within `eps` of zero is compatible with either sign.
#[inline]
pub fn is_same_sign_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    if is_zero_eps(a, eps) || is_zero_eps(b, eps) {
        return true;
    }
    (a > F::zero()) == (b > F::zero())
}

/// [`is_zero_eps`] with the default tolerance.
#[inline]
pub fn is_zero<F: Float>(x: F) -> bool {
    is_zero_eps(x, default_epsilon())
}

/// [`is_equal_eps`] with the default tolerance.
#[inline]
pub fn is_equal<F: Float>(a: F, b: F) -> bool {
    is_equal_eps(a, b, default_epsilon())
}

/// [`is_greater_or_equal_eps`] with the default tolerance.
#[inline]
pub fn is_greater_or_equal<F: Float>(a: F, b: F) -> bool {
    is_greater_or_equal_eps(a, b, default_epsilon())
}

/// [`is_same_sign_eps`] with the default tolerance.
#[inline]
pub fn is_same_sign<F: Float>(a: F, b: F) -> bool {
    is_same_sign_eps(a, b, default_epsilon())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0_f64));
        assert!(is_zero(1e-12_f64));
        assert!(is_zero(-1e-12_f64));
        assert!(!is_zero(1e-8_f64));
        assert!(!is_zero(f64::NAN));
    }

    #[test]
    fn test_is_zero_explicit_eps() {
        assert!(is_zero_eps(0.05_f64, 0.1));
        assert!(!is_zero_eps(0.5_f64, 0.1));
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal(1.0_f64, 1.0 + 1e-12));
        assert!(!is_equal(1.0_f64, 1.001));
        assert!(is_equal_eps(1.0_f64, 1.05, 0.1));
    }

    #[test]
    fn test_is_greater_or_equal() {
        assert!(is_greater_or_equal(2.0_f64, 1.0));
        assert!(is_greater_or_equal(1.0_f64, 1.0));
        assert!(is_greater_or_equal(1.0_f64 - 1e-12, 1.0));
        assert!(!is_greater_or_equal(0.5_f64, 1.0));
    }

    #[test]
    fn test_is_same_sign() {
        assert!(is_same_sign(1.0_f64, 2.0));
        assert!(is_same_sign(-1.0_f64, -2.0));
        assert!(!is_same_sign(-1.0_f64, 2.0));
        // Zero goes with anything
        assert!(is_same_sign(0.0_f64, -2.0));
        assert!(is_same_sign(3.0_f64, 1e-13));
    }

    #[test]
    fn test_default_epsilon_f32() {
        let eps: f32 = default_epsilon();
        assert!(eps > 0.0);
        assert!(is_zero(0.0_f32));
    }
}
