#![deny(clippy::arithmetic_side_effects)]
//! Ember Eval - binding environment and evaluator for Ember programs.
//!
//! # Architecture
//!
//! - `Binding`: flat name → value map with insert-if-absent `merge`
//! - `Evaluator`: pattern-matched tree walker owning one `Binding`
//! - `evaluate_binary`: integer operator semantics
//! - `EvalError`: the runtime error taxonomy; every error aborts the run
//! - `PrintHandlerImpl`: where the built-in `print` writes
//!
//! Scoping is caller-inheriting: a function body sees the bindings visible
//! at its call site, with its own parameters taking precedence.

mod binding;
mod config;
pub mod errors;
mod evaluator;
mod operators;
mod print_handler;
mod value;

pub use binding::Binding;
pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH};
pub use errors::{EvalError, EvalResult};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

#[cfg(test)]
mod tests;
