//! Array combinators: pointwise recipes built from existing arrays.
//!
//! Each helper returns a scalar recipe over the given index variables;
//! callers attach it to a new [`Func`](crate::func::Func) of their own.
//! None of them validates shapes: an `extent` that does not match the
//! source array's logical length misplaces the seam, and out-of-range
//! source indices are the consumer's concern.

use crate::element::Element;
use crate::expr::{Expr, select};
use crate::func::Func;
use crate::index;
use crate::index::Var;

/// Cross product of two length-3 vectors, defined pointwise.
///
/// `result(i) = a((i+1) % 3) * b((i+2) % 3) - a((i+2) % 3) * b((i+1) % 3)`
///
/// Both inputs are assumed to hold exactly 3 elements; nothing is
/// enforced here.
///
/// # Examples
///
/// ```
/// use lyre::combinators::cross3;
/// use lyre::func::Func;
/// use lyre::index::Var;
///
/// let a = Func::from_values("a", &[1.0f64, 0.0, 0.0]);
/// let b = Func::from_values("b", &[0.0f64, 1.0, 0.0]);
/// let x = Var::new("x");
/// let mut c = Func::new("c", &[x.clone()]);
/// c.define(cross3(&a, &b, &x));
/// assert_eq!(c.realize(3).unwrap(), vec![0.0, 0.0, 1.0]);
/// ```
pub fn cross3<T: Element>(a: &Func<T>, b: &Func<T>, x: &Var) -> Expr<T> {
    let xe = index::Expr::from(x);
    a.at((xe.clone() + 1) % 3) * b.at((xe.clone() + 2) % 3)
        - a.at((xe.clone() + 2) % 3) * b.at((xe + 1) % 3)
}

/// Horizontal concatenation of two 1-D arrays.
///
/// Selects `a(x)` for `x < extent` and `b(x - extent)` past the seam.
/// `extent` must equal `a`'s logical length for the seam to land right.
///
/// Both branches clamp their index into `[0, extent - 1]` even though
/// only one value is selected: a consumer may evaluate both sides
/// unconditionally, and the non-selected branch must not read out of
/// bounds. Do not simplify the clamps away.
pub fn hstack1<T: Element>(
    a: &Func<T>,
    b: &Func<T>,
    extent: impl Into<index::Expr>,
    x: &Var,
) -> Expr<T> {
    let extent = extent.into();
    let xe = index::Expr::from(x);
    select(
        xe.clone().lt(extent.clone()),
        a.at(xe.clone().clamp(0, extent.clone() - 1)),
        b.at((xe - extent.clone()).clamp(0, extent - 1)),
    )
}

/// Horizontal concatenation of two 2-D arrays along the first axis;
/// `y` passes through unchanged. Same clamping contract as [`hstack1`].
pub fn hstack2<T: Element>(
    a: &Func<T>,
    b: &Func<T>,
    x_extent: impl Into<index::Expr>,
    x: &Var,
    y: &Var,
) -> Expr<T> {
    let x_extent = x_extent.into();
    let xe = index::Expr::from(x);
    let ye = index::Expr::from(y);
    select(
        xe.clone().lt(x_extent.clone()),
        a.at2(xe.clone().clamp(0, x_extent.clone() - 1), ye.clone()),
        b.at2((xe - x_extent.clone()).clamp(0, x_extent - 1), ye),
    )
}

/// Vertical concatenation of two 1-D rows: row `y == 0` reads `a`,
/// every other row reads `b`. `extent` is the row length, used only to
/// clamp `x` on both branches.
pub fn vstack1<T: Element>(
    a: &Func<T>,
    b: &Func<T>,
    extent: impl Into<index::Expr>,
    x: &Var,
    y: &Var,
) -> Expr<T> {
    let extent = extent.into();
    let xe = index::Expr::from(x);
    let ye = index::Expr::from(y);
    select(
        ye.eq_expr(0),
        a.at(xe.clone().clamp(0, extent.clone() - 1)),
        b.at(xe.clamp(0, extent - 1)),
    )
}

/// Vertical concatenation of two 2-D arrays along the second axis,
/// symmetric to [`hstack2`].
pub fn vstack2<T: Element>(
    a: &Func<T>,
    b: &Func<T>,
    y_extent: impl Into<index::Expr>,
    x: &Var,
    y: &Var,
) -> Expr<T> {
    let y_extent = y_extent.into();
    let xe = index::Expr::from(x);
    let ye = index::Expr::from(y);
    select(
        ye.clone().lt(y_extent.clone()),
        a.at2(xe.clone(), ye.clone().clamp(0, y_extent.clone() - 1)),
        b.at2(xe, (ye - y_extent.clone()).clamp(0, y_extent - 1)),
    )
}

/// Periodic tiling of a length-`extent_a` array:
/// `result(x) = a(x mod extent_a)`. The modulo already bounds the index,
/// so no clamp is needed.
pub fn repeat1<T: Element>(a: &Func<T>, extent_a: impl Into<index::Expr>, x: &Var) -> Expr<T> {
    a.at(index::Expr::from(x) % extent_a.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realized_1d(expr: Expr<f64>, x: &Var, n: usize) -> Vec<f64> {
        let mut f = Func::new("out", std::slice::from_ref(x));
        f.define(expr);
        f.realize(n).unwrap()
    }

    #[test]
    fn test_cross3_known_vectors() {
        let a = Func::from_values("a", &[1.0f64, 2.0, 3.0]);
        let b = Func::from_values("b", &[4.0f64, 5.0, 6.0]);
        let x = Var::new("x");
        assert_eq!(
            realized_1d(cross3(&a, &b, &x), &x, 3),
            vec![-3.0, 6.0, -3.0]
        );
    }

    #[test]
    fn test_hstack1_seam() {
        let a = Func::from_values("a", &[1.0f64, 2.0, 3.0]);
        let b = Func::from_values("b", &[4.0f64, 5.0]);
        let x = Var::new("x");
        assert_eq!(
            realized_1d(hstack1(&a, &b, 3, &x), &x, 5),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_repeat1_tiles() {
        let a = Func::from_values("a", &[7.0f64, 8.0]);
        let x = Var::new("x");
        assert_eq!(
            realized_1d(repeat1(&a, 2, &x), &x, 6),
            vec![7.0, 8.0, 7.0, 8.0, 7.0, 8.0]
        );
    }
}
