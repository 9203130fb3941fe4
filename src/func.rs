//! Lazy array expressions with staged definitions.
//!
//! A [`Func`] is a named, unevaluated mapping from index variables to a
//! scalar recipe. Its definition is an ordered list of stages: a base case
//! over the whole domain, optional overrides on a reduction domain, and
//! optional single-site overrides. Later stages win on overlap, so the
//! list behaves like a tagged union of "default case" plus override
//! regions rather than mutation of earlier stages.
//!
//! Every constructor here is pure: helpers build new `Func`s and never
//! touch their inputs. Evaluation is on demand, through
//! [`Func::eval_at`] and the `realize` family.

use log::{debug, trace};

use crate::element::Element;
use crate::env::Env;
use crate::error::EvalError;
use crate::expr::Expr;
use crate::index;
use crate::index::Var;
use crate::rdom::RDom;

/// The sub-domain a definition stage applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// The base case: every index the array is asked for
    Everywhere,
    /// Indices of axis 0 covered by the reduction domain
    Domain(RDom),
    /// A single index tuple
    Point(Vec<index::Expr>),
}

/// One definition stage: a region and the recipe that applies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Def<T: Element> {
    pub region: Region,
    pub body: Expr<T>,
}

/// A lazy array expression.
///
/// # Examples
///
/// ```
/// use lyre::func::Func;
/// use lyre::index::Var;
/// use lyre::expr::Expr;
///
/// let x = Var::new("x");
/// let mut f = Func::new("double", &[x.clone()]);
/// f.define(Expr::<f64>::index(&x) * 2.0);
/// assert_eq!(f.realize(4).unwrap(), vec![0.0, 2.0, 4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Func<T: Element> {
    name: String,
    args: Vec<Var>,
    defs: Vec<Def<T>>,
}

impl<T: Element> Func<T> {
    /// Creates an empty lazy array over the given pure index variables.
    pub fn new(name: impl Into<String>, args: &[Var]) -> Self {
        Self {
            name: name.into(),
            args: args.to_vec(),
            defs: Vec::new(),
        }
    }

    /// Builds a 1-D array whose first stage defaults to the first value
    /// and whose remaining stages pin each site to its value.
    pub fn from_values(name: impl Into<String>, values: &[T]) -> Self {
        let x = Var::new("x");
        let mut f = Func::new(name, std::slice::from_ref(&x));
        f.define(values.first().copied().unwrap_or(T::ZERO));
        for (i, &v) in values.iter().enumerate() {
            f.define_at(&[index::Expr::from(i)], v);
        }
        f
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Var] {
        &self.args
    }

    pub fn defs(&self) -> &[Def<T>] {
        &self.defs
    }

    /// Attaches the base-case stage.
    pub fn define(&mut self, body: impl Into<Expr<T>>) {
        trace!("`{}`: base case", self.name);
        self.defs.push(Def {
            region: Region::Everywhere,
            body: body.into(),
        });
    }

    /// Attaches an override stage on the reduction domain (axis 0).
    ///
    /// The body may reference `r.idx()`; while the stage applies, the
    /// reduction variable is bound to the concrete index.
    pub fn define_over(&mut self, r: &RDom, body: impl Into<Expr<T>>) {
        trace!("`{}`: override on domain `{}`", self.name, r.name());
        self.defs.push(Def {
            region: Region::Domain(r.clone()),
            body: body.into(),
        });
    }

    /// Attaches an override stage at a single index tuple.
    pub fn define_at(&mut self, point: &[index::Expr], body: impl Into<Expr<T>>) {
        trace!("`{}`: override at point", self.name);
        self.defs.push(Def {
            region: Region::Point(point.to_vec()),
            body: body.into(),
        });
    }

    /// Reads this array at a computed 1-D index, as a new recipe node.
    pub fn at(&self, x: impl Into<index::Expr>) -> Expr<T> {
        self.call(vec![x.into()])
    }

    /// Reads this array at a computed 2-D index.
    pub fn at2(&self, x: impl Into<index::Expr>, y: impl Into<index::Expr>) -> Expr<T> {
        self.call(vec![x.into(), y.into()])
    }

    /// Reads this array at arbitrary computed indices.
    pub fn call(&self, args: Vec<index::Expr>) -> Expr<T> {
        Expr::Call {
            func: Box::new(self.clone()),
            args,
        }
    }

    /// Evaluates the array at a concrete index tuple.
    ///
    /// Stages are scanned from the most recent one back; the first whose
    /// region covers the index supplies the value. An index no stage
    /// covers is an error.
    pub fn eval_at(&self, indices: &[i64], env: &Env) -> Result<T, EvalError> {
        for def in self.defs.iter().rev() {
            match &def.region {
                Region::Everywhere => {
                    let inner = self.bind_args(indices, env);
                    return def.body.eval(&inner);
                }
                Region::Domain(r) => {
                    let Some(&x) = indices.first() else {
                        continue;
                    };
                    let lo = r.min().evaluate(env)?;
                    let n = r.extent().evaluate(env)?;
                    if lo <= x && x < lo + n {
                        let mut inner = self.bind_args(indices, env);
                        inner.bind(r.name(), x);
                        return def.body.eval(&inner);
                    }
                }
                Region::Point(coords) => {
                    if coords.len() != indices.len() {
                        continue;
                    }
                    let mut hit = true;
                    for (c, &i) in coords.iter().zip(indices) {
                        if c.evaluate(env)? != i {
                            hit = false;
                            break;
                        }
                    }
                    if hit {
                        let inner = self.bind_args(indices, env);
                        return def.body.eval(&inner);
                    }
                }
            }
        }
        Err(EvalError::Undefined {
            func: self.name.clone(),
            indices: indices.to_vec(),
        })
    }

    /// Evaluates every element of a 1-D grid `[0, extent)`.
    pub fn realize(&self, extent: usize) -> Result<Vec<T>, EvalError> {
        self.realize_with(&[extent], &Env::new())
    }

    /// Evaluates a 2-D grid, row-major with axis 0 fastest:
    /// element `(x, y)` lands at `y * width + x`.
    pub fn realize2(&self, width: usize, height: usize) -> Result<Vec<T>, EvalError> {
        self.realize_with(&[width, height], &Env::new())
    }

    /// Evaluates a grid under extra bindings, for symbolic sizes.
    pub fn realize_with(&self, extents: &[usize], env: &Env) -> Result<Vec<T>, EvalError> {
        debug!("realizing `{}` over {:?}", self.name, extents);
        let total: usize = extents.iter().product();
        let mut out = Vec::with_capacity(total);
        let mut idx = vec![0i64; extents.len()];
        for _ in 0..total {
            out.push(self.eval_at(&idx, env)?);
            // odometer increment, axis 0 fastest
            for (i, &e) in idx.iter_mut().zip(extents) {
                *i += 1;
                if (*i as usize) < e {
                    break;
                }
                *i = 0;
            }
        }
        Ok(out)
    }

    fn bind_args(&self, indices: &[i64], env: &Env) -> Env {
        let mut inner = env.clone();
        for (arg, &i) in self.args.iter().zip(indices) {
            inner.bind(arg.name(), i);
        }
        inner
    }
}
