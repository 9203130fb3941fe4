//! Deferred scalar value expressions.
//!
//! An [`Expr`] is a recipe for a scalar computation over index variables
//! and constants. Building one performs no numeric work; the tree is
//! walked by the reference evaluator (or handed to a consumer) later.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::element::Element;
use crate::env::Env;
use crate::error::EvalError;
use crate::func::Func;
use crate::index;

/// A deferred scalar expression over element type `T`.
///
/// # Examples
///
/// ```
/// use lyre::expr::Expr;
///
/// // Build a recipe for `a + 1.0`; nothing is computed yet.
/// let a = Expr::Const(2.0f64);
/// let b = a + 1.0;
/// assert_eq!(b.to_string(), "(2 + 1)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T: Element> {
    /// Constant element value
    Const(T),

    /// An integer index expression lifted into the element domain
    Index(index::Expr),

    /// Read another lazy array at computed indices.
    ///
    /// The callee is captured by value: definition stages attached to the
    /// original after the call was built are not visible through it.
    Call {
        func: Box<Func<T>>,
        args: Vec<index::Expr>,
    },

    // numeric ops
    Add(Box<Self>, Box<Self>),
    Sub(Box<Self>, Box<Self>),
    Mul(Box<Self>, Box<Self>),
    Div(Box<Self>, Box<Self>),
    Rem(Box<Self>, Box<Self>),
    Neg(Box<Self>),
    Ln(Box<Self>),
    Sqrt(Box<Self>),

    /// Restrict a value into `[min, max]`
    Clamp {
        value: Box<Self>,
        min: Box<Self>,
        max: Box<Self>,
    },

    /// Choose between two recipes on an integer predicate.
    ///
    /// Both branches are part of the recipe and may be evaluated by a
    /// consumer regardless of the predicate; their index expressions must
    /// stay in bounds on their own.
    Select {
        cond: index::Expr,
        on_true: Box<Self>,
        on_false: Box<Self>,
    },

    /// Sum-reduction over every reduction variable free in the body
    Sum(Box<Self>),
}

impl<T: Element> Expr<T> {
    /// Evaluates the recipe under concrete index bindings.
    ///
    /// Element arithmetic follows the element type: a float division by
    /// zero propagates as `inf`/`NaN` rather than an error. Only index
    /// arithmetic and missing definitions report [`EvalError`].
    pub fn eval(&self, env: &Env) -> Result<T, EvalError> {
        match self {
            Expr::Const(v) => Ok(*v),
            Expr::Index(e) => Ok(T::from_index(e.evaluate(env)?)),
            Expr::Call { func, args } => {
                let indices = args
                    .iter()
                    .map(|a| a.evaluate(env))
                    .collect::<Result<Vec<_>, _>>()?;
                func.eval_at(&indices, env)
            }
            Expr::Add(l, r) => Ok(l.eval(env)? + r.eval(env)?),
            Expr::Sub(l, r) => Ok(l.eval(env)? - r.eval(env)?),
            Expr::Mul(l, r) => Ok(l.eval(env)? * r.eval(env)?),
            Expr::Div(l, r) => Ok(l.eval(env)? / r.eval(env)?),
            Expr::Rem(l, r) => Ok(l.eval(env)? % r.eval(env)?),
            Expr::Neg(a) => Ok(-a.eval(env)?),
            Expr::Ln(a) => Ok(a.eval(env)?.ln()),
            Expr::Sqrt(a) => Ok(a.eval(env)?.sqrt()),
            Expr::Clamp { value, min, max } => {
                let v = value.eval(env)?;
                let lo = min.eval(env)?;
                let hi = max.eval(env)?;
                Ok(if v < lo {
                    lo
                } else if v > hi {
                    hi
                } else {
                    v
                })
            }
            Expr::Select {
                cond,
                on_true,
                on_false,
            } => {
                // Both branches are evaluated unconditionally, mirroring
                // consumers that compute each side before selecting. Branch
                // recipes must keep their own indices in bounds.
                let t = on_true.eval(env)?;
                let f = on_false.eval(env)?;
                Ok(if cond.evaluate(env)? != 0 { t } else { f })
            }
            Expr::Sum(body) => {
                let mut rvars = Vec::new();
                body.collect_rvars(&mut rvars);
                eval_sum(body, &rvars, env)
            }
        }
    }

    /// 式に含まれる自由な還元変数を出現順に収集する
    ///
    /// ネストした総和の本体はその総和が束縛するため探索しない。
    pub(crate) fn collect_rvars(&self, out: &mut Vec<(String, index::Expr, index::Expr)>) {
        match self {
            Expr::Const(_) => {}
            Expr::Index(e) => e.collect_rvars(out),
            Expr::Call { args, .. } => {
                for a in args {
                    a.collect_rvars(out);
                }
            }
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Rem(l, r) => {
                l.collect_rvars(out);
                r.collect_rvars(out);
            }
            Expr::Neg(a) | Expr::Ln(a) | Expr::Sqrt(a) => a.collect_rvars(out),
            Expr::Clamp { value, min, max } => {
                value.collect_rvars(out);
                min.collect_rvars(out);
                max.collect_rvars(out);
            }
            Expr::Select {
                cond,
                on_true,
                on_false,
            } => {
                cond.collect_rvars(out);
                on_true.collect_rvars(out);
                on_false.collect_rvars(out);
            }
            Expr::Sum(_) => {}
        }
    }
}

fn eval_sum<T: Element>(
    body: &Expr<T>,
    rvars: &[(String, index::Expr, index::Expr)],
    env: &Env,
) -> Result<T, EvalError> {
    match rvars.split_first() {
        None => body.eval(env),
        Some(((name, min, extent), rest)) => {
            let lo = min.evaluate(env)?;
            let n = extent.evaluate(env)?;
            if n < 0 {
                return Err(EvalError::NegativeExtent {
                    name: name.clone(),
                    value: n,
                });
            }
            let mut acc = T::ZERO;
            for i in lo..lo + n {
                let mut inner = env.clone();
                inner.bind(name.clone(), i);
                acc = acc + eval_sum(body, rest, &inner)?;
            }
            Ok(acc)
        }
    }
}

// Convenience free functions for expression construction

/// Macro to generate unary operation helper functions
macro_rules! impl_unary_helper {
    ($fn_name:ident, $variant:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $fn_name<T: Element>(a: impl Into<Expr<T>>) -> Expr<T> {
            Expr::$variant(Box::new(a.into()))
        }
    };
}

impl_unary_helper!(ln, Ln, "Create a natural logarithm node: ln(a)");
impl_unary_helper!(sqrt, Sqrt, "Create a square root node: sqrt(a)");

/// Create a clamp node restricting `value` into `[min, max]`
pub fn clamp<T: Element>(
    value: impl Into<Expr<T>>,
    min: impl Into<Expr<T>>,
    max: impl Into<Expr<T>>,
) -> Expr<T> {
    Expr::Clamp {
        value: Box::new(value.into()),
        min: Box::new(min.into()),
        max: Box::new(max.into()),
    }
}

/// Create a select node choosing on an integer predicate
pub fn select<T: Element>(
    cond: index::Expr,
    on_true: impl Into<Expr<T>>,
    on_false: impl Into<Expr<T>>,
) -> Expr<T> {
    Expr::Select {
        cond,
        on_true: Box::new(on_true.into()),
        on_false: Box::new(on_false.into()),
    }
}

impl<T: Element> Expr<T> {
    /// Lifts an index expression into the element domain.
    ///
    /// Accepts anything an index expression converts from: a
    /// [`Var`](crate::index::Var), an [`RDom`](crate::rdom::RDom) (meaning
    /// its reduction variable), or a built index expression.
    pub fn index(e: impl Into<index::Expr>) -> Self {
        Expr::Index(e.into())
    }
}

impl<T: Element> From<T> for Expr<T> {
    fn from(v: T) -> Self {
        Expr::Const(v)
    }
}

macro_rules! impl_value_binary_op {
    ($trait:ident, $fname:ident, $variant:ident) => {
        impl<T: Element, R: Into<Expr<T>>> $trait<R> for Expr<T> {
            type Output = Expr<T>;
            fn $fname(self, rhs: R) -> Self::Output {
                Expr::$variant(Box::new(self), Box::new(rhs.into()))
            }
        }
    };
}

impl_value_binary_op!(Add, add, Add);
impl_value_binary_op!(Sub, sub, Sub);
impl_value_binary_op!(Mul, mul, Mul);
impl_value_binary_op!(Div, div, Div);
impl_value_binary_op!(Rem, rem, Rem);

impl<T: Element> Neg for Expr<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Neg(Box::new(self))
    }
}

impl<T: Element> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(v) => write!(f, "{}", v),
            Expr::Index(e) => write!(f, "{}", e),
            Expr::Call { func, args } => {
                write!(f, "{}(", func.name())?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", a)?;
                }
                write!(f, ")")
            }
            Expr::Add(l, r) => write!(f, "({} + {})", l, r),
            Expr::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expr::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expr::Div(l, r) => write!(f, "({} / {})", l, r),
            Expr::Rem(l, r) => write!(f, "({} % {})", l, r),
            Expr::Neg(a) => write!(f, "(-{})", a),
            Expr::Ln(a) => write!(f, "ln({})", a),
            Expr::Sqrt(a) => write!(f, "sqrt({})", a),
            Expr::Clamp { value, min, max } => write!(f, "clamp({}, {}, {})", value, min, max),
            Expr::Select {
                cond,
                on_true,
                on_false,
            } => write!(f, "select({}, {}, {})", cond, on_true, on_false),
            Expr::Sum(body) => write!(f, "sum({})", body),
        }
    }
}
