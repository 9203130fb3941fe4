//! Scalar expression helpers.

use crate::element::Element;
use crate::expr::{Expr, clamp, ln};

/// Clamps `value` into `[min, max]`, then rescales linearly to `[0, 1]`.
///
/// The caller guarantees `max > min`; otherwise the division degenerates
/// and the result propagates as the element type's ordinary
/// divide-by-zero (NaN/inf), not an error. Rescaling divides, so this is
/// only meaningful for floating-point element types, which is all
/// [`Element`] ships.
///
/// # Examples
///
/// ```
/// use lyre::env::Env;
/// use lyre::scalar::normalize;
///
/// let n = normalize(7.5f64, 5.0, 10.0);
/// assert_eq!(n.eval(&Env::new()), Ok(0.5));
/// ```
pub fn normalize<T: Element>(
    value: impl Into<Expr<T>>,
    min: impl Into<Expr<T>>,
    max: impl Into<Expr<T>>,
) -> Expr<T> {
    let min = min.into();
    let max = max.into();
    (clamp(value, min.clone(), max.clone()) - min.clone()) / (max - min)
}

/// Base-2 logarithm, defined as `ln(x) / ln(2)`.
///
/// Non-positive inputs behave however the natural-log primitive does;
/// no extra guarding.
pub fn log2<T: Element>(x: impl Into<Expr<T>>) -> Expr<T> {
    ln(x) / ln(T::from_index(2))
}

/// Base-10 logarithm, defined as `ln(x) / ln(10)`.
pub fn log10<T: Element>(x: impl Into<Expr<T>>) -> Expr<T> {
    ln(x) / ln(T::from_index(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(5.0f64, 5.0, 10.0).eval(&Env::new()), Ok(0.0));
        assert_eq!(normalize(10.0f64, 5.0, 10.0).eval(&Env::new()), Ok(1.0));
    }

    #[test]
    fn test_normalize_clamps_outside() {
        assert_eq!(normalize(-3.0f64, 5.0, 10.0).eval(&Env::new()), Ok(0.0));
        assert_eq!(normalize(42.0f64, 5.0, 10.0).eval(&Env::new()), Ok(1.0));
    }

    #[test]
    fn test_normalize_degenerate_range_is_nan() {
        // max == min: propagated as 0/0, not reported
        let v = normalize(1.0f64, 1.0, 1.0).eval(&Env::new()).unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_log_bases() {
        let v = log2(8.0f64).eval(&Env::new()).unwrap();
        assert!((v - 3.0).abs() < 1e-12);
        let v = log10(1000.0f64).eval(&Env::new()).unwrap();
        assert!((v - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_of_nonpositive_inherits_ln() {
        let v = log2(0.0f64).eval(&Env::new()).unwrap();
        assert_eq!(v, f64::NEG_INFINITY);
        let v = log2(-1.0f64).eval(&Env::new()).unwrap();
        assert!(v.is_nan());
    }
}
