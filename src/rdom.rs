//! Reduction domains.

use crate::index::Expr;

/// A bounded integer range `[min, min + extent)` with an index identity.
///
/// A reduction domain serves two purposes: it bounds an accumulation (a
/// sum iterates the range), and it indexes into arrays while a staged
/// definition overrides a sub-domain. The extent is an arbitrary index
/// expression; it is evaluated when a recipe is realized, never at
/// construction.
///
/// # Examples
///
/// ```
/// use lyre::rdom::RDom;
///
/// let r = RDom::new(0, 5, "r");
/// assert_eq!(r.extent().to_string(), "5");
/// assert_eq!(r.idx().to_string(), "r");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RDom {
    name: String,
    min: Expr,
    extent: Expr,
}

impl RDom {
    pub fn new(min: impl Into<Expr>, extent: impl Into<Expr>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: min.into(),
            extent: extent.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reduction variable, carrying its own bounds.
    pub fn idx(&self) -> Expr {
        Expr::RVar {
            name: self.name.clone(),
            min: Box::new(self.min.clone()),
            extent: Box::new(self.extent.clone()),
        }
    }

    pub fn min(&self) -> Expr {
        self.min.clone()
    }

    pub fn extent(&self) -> Expr {
        self.extent.clone()
    }
}

/// An `RDom` used directly as an index means its reduction variable.
impl From<&RDom> for Expr {
    fn from(r: &RDom) -> Self {
        r.idx()
    }
}

impl From<RDom> for Expr {
    fn from(r: RDom) -> Self {
        r.idx()
    }
}
