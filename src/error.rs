//! Error types for expression evaluation

use thiserror::Error;

/// Errors surfaced while evaluating a recipe.
///
/// Construction never fails: helpers attach definitions without validating
/// extents, shapes, or index ranges. Everything here is reported by the
/// reference evaluator when a recipe is actually walked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An index variable had no binding in the environment
    #[error("Unbound index variable: {0}")]
    UnboundVariable(String),

    /// Integer division or remainder by zero in an index expression
    #[error("Division by zero in index expression")]
    DivisionByZero,

    /// No definition stage of the array covers the requested index
    #[error("`{func}` has no definition covering index {indices:?}")]
    Undefined { func: String, indices: Vec<i64> },

    /// A reduction domain evaluated to a negative extent
    #[error("Reduction domain `{name}` has negative extent {value}")]
    NegativeExtent { name: String, value: i64 },
}
