//! Ember - a small expression language with integer values, first-class
//! function definitions and caller-inheriting scope.
//!
//! Parsing happens elsewhere: a grammar engine drives
//! [`AstBuilder`](ember_ir::AstBuilder) semantic actions and hands the
//! finished [`Program`] to [`run`].
//!
//! Enable debug output with `RUST_LOG=ember_eval=debug` after calling
//! [`init_tracing`].

use std::sync::Once;

pub use ember_eval::{
    buffer_handler, silent_handler, stdout_handler, Binding, EvalConfig, EvalError, EvalResult,
    Evaluator, EvaluatorBuilder, SharedPrintHandler, Value,
};
pub use ember_ir::{
    AstBuilder, BinaryOp, Block, BuildError, FunctionDef, Name, Node, Program, StringInterner,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Evaluate a program's root block under a fresh, empty binding.
///
/// `print` writes to stdout. Returns the value of the last top-level
/// statement (0 for an empty program) or the first runtime error.
pub fn run(program: &Program) -> EvalResult {
    run_with(program, EvalConfig::default(), stdout_handler())
}

/// Like [`run`], with explicit limits and print destination.
pub fn run_with(
    program: &Program,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
) -> EvalResult {
    tracing::debug!(
        statements = program.root.len(),
        max_call_depth = config.max_call_depth,
        "run start"
    );

    let mut evaluator = Evaluator::builder(&program.interner)
        .config(config)
        .print_handler(print_handler)
        .build();
    let result = evaluator.eval_block(&program.root);

    match &result {
        Ok(value) => tracing::debug!(value, "run finished"),
        Err(error) => tracing::debug!(%error, "run failed"),
    }
    result
}
