//! Evaluation policy.

/// Default bound on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Limits applied to one program run.
///
/// Ember has no loops, so runaway recursion is the only way a program fails
/// to terminate; the call-depth bound turns it into
/// `EvalError::RecursionLimitExceeded` instead of a crash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function calls.
    pub max_call_depth: usize,
}

impl EvalConfig {
    /// Config with a custom call-depth bound.
    #[must_use]
    pub const fn bounded(max_call_depth: usize) -> Self {
        EvalConfig { max_call_depth }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_CALL_DEPTH)
    }
}
