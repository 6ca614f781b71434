//! Runtime errors raised by the evaluator.
//!
//! Every error aborts the current run and surfaces from `run`. Factory
//! functions are the construction API used inside the evaluator; match on
//! `EvalError` variants to tell failures apart.

use ember_ir::BinaryOp;

/// Result of evaluating a node.
pub type EvalResult = Result<i64, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("left side of `=` must be a plain identifier")]
    InvalidAssignmentTarget,

    #[error("{name} is not callable")]
    NotCallable { name: String },

    #[error("expected {expected} {}, got {got}", argument_word(.expected))]
    ArityMismatch { expected: usize, got: usize },

    #[error("maximum recursion depth exceeded (limit: {limit})")]
    RecursionLimitExceeded { limit: usize },

    /// An operator token reached the evaluator outside a binary expression.
    #[error("unexpected operator token `{symbol}`")]
    UnexpectedOperator { symbol: &'static str },
}

fn argument_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Reference to, or call of, an identifier with no binding.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::UnboundVariable {
        name: name.to_string(),
    }
}

/// Division by a runtime zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Assignment to something other than an identifier.
#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::InvalidAssignmentTarget
}

/// Call of a name bound to a non-function value.
#[cold]
pub fn not_callable(name: &str) -> EvalError {
    EvalError::NotCallable {
        name: name.to_string(),
    }
}

/// Argument count differs from parameter count.
#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch { expected, got }
}

/// Maximum call depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::RecursionLimitExceeded { limit }
}

/// A stray operator token.
#[cold]
pub fn unexpected_operator(op: BinaryOp) -> EvalError {
    EvalError::UnexpectedOperator {
        symbol: op.as_symbol(),
    }
}
