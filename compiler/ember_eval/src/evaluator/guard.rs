//! Recursion guards for the evaluator.
//!
//! Two bounds apply: `EvalConfig::max_call_depth` caps nested function calls,
//! and every node evaluation runs with enough native stack left, growing onto
//! a fresh segment when it runs low. The depth bound ends runaway recursion
//! with an error; the stack headroom lets bounded recursion finish.

use super::Evaluator;
use crate::errors::{recursion_limit_exceeded, EvalError};

impl Evaluator<'_> {
    /// Fail if one more nested call would exceed the configured depth.
    #[inline]
    pub(super) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        let limit = self.config.max_call_depth;
        if self.depth >= limit {
            return Err(recursion_limit_exceeded(limit));
        }
        Ok(())
    }
}

/// Run `f` with at least a red zone of stack available.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(super) fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 128 * 1024;
    const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// No `stacker` on wasm32; the closure runs on the current stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(super) fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
