//! Reduction helpers.

use crate::element::Element;
use crate::expr::{Expr, sqrt};

/// Sum-reduction over the reduction variables carried by `body`.
///
/// The iteration range is recovered from the reduction variables free in
/// the body, in order of first appearance; there is no separate domain
/// argument.
pub fn sum<T: Element>(body: impl Into<Expr<T>>) -> Expr<T> {
    Expr::Sum(Box::new(body.into()))
}

/// Euclidean norm: `sqrt(sum(input * input))`.
///
/// The caller supplies a recipe whose reduction domain spans exactly the
/// elements to include; nothing is inferred beyond what `input` carries.
///
/// # Examples
///
/// ```
/// use lyre::env::Env;
/// use lyre::func::Func;
/// use lyre::rdom::RDom;
/// use lyre::reduce::norm;
///
/// let v = Func::from_values("v", &[3.0f64, 4.0, 0.0]);
/// let r = RDom::new(0, 3, "r");
/// let n = norm(v.at(&r));
/// assert_eq!(n.eval(&Env::new()), Ok(5.0));
/// ```
pub fn norm<T: Element>(input: impl Into<Expr<T>>) -> Expr<T> {
    let input = input.into();
    sqrt(sum(input.clone() * input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::func::Func;
    use crate::rdom::RDom;

    #[test]
    fn test_sum_of_squares() {
        let v = Func::from_values("v", &[1.0f64, 2.0, 3.0]);
        let r = RDom::new(0, 3, "r");
        let e = sum(v.at(&r) * v.at(&r));
        assert_eq!(e.eval(&Env::new()), Ok(14.0));
    }

    #[test]
    fn test_norm_345() {
        let v = Func::from_values("v", &[3.0f64, 4.0, 0.0]);
        let r = RDom::new(0, 3, "r");
        assert_eq!(norm(v.at(&r)).eval(&Env::new()), Ok(5.0));
    }

    #[test]
    fn test_norm_respects_supplied_domain() {
        // only the first two elements are spanned
        let v = Func::from_values("v", &[3.0f64, 4.0, 100.0]);
        let r = RDom::new(0, 2, "r");
        assert_eq!(norm(v.at(&r)).eval(&Env::new()), Ok(5.0));
    }
}
