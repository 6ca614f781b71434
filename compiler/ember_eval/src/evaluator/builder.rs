//! `EvaluatorBuilder` for creating top-level evaluators.

use ember_ir::StringInterner;

use super::Evaluator;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Binding, EvalConfig};

/// Builder for creating Evaluator instances with various configurations.
///
/// Defaults: empty binding, `EvalConfig::default()`, stdout output, depth 0.
pub struct EvaluatorBuilder<'a> {
    interner: &'a StringInterner,
    binding: Option<Binding>,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            binding: None,
            config: EvalConfig::default(),
            print_handler: None,
        }
    }

    /// Set the evaluation limits.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn binding(mut self, binding: Binding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        Evaluator {
            interner: self.interner,
            binding: self.binding.unwrap_or_default(),
            config: self.config,
            depth: 0,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
