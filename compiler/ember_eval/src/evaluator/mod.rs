//! Tree-walking evaluator for Ember.
//!
//! # Architecture
//!
//! `Evaluator::eval` is a single `match` over the closed `Node` enum; every
//! node yields one `i64` (comparisons and conditions use 0/1). Each evaluator
//! owns exactly one `Binding`:
//!
//! - Blocks, assignments and conditionals run on that binding in place, so an
//!   assignment is visible to later statements of the same block.
//! - A function call builds a new binding (parameters first, then the
//!   caller's bindings merged underneath) and hands it to a nested evaluator
//!   one level deeper. The caller's binding is never written by the callee.
//!
//! Every node evaluation runs with native stack headroom, and nested calls
//! are bounded by `EvalConfig::max_call_depth` (see `guard`).

mod builder;
mod call;
mod guard;

pub use builder::EvaluatorBuilder;

use std::rc::Rc;

use ember_ir::{Block, FunctionDef, Name, Node, StringInterner};

use crate::errors::{invalid_assignment_target, unbound_variable, unexpected_operator, EvalResult};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{Binding, EvalConfig, Value};
use guard::with_stack_headroom;

/// Tree-walking evaluator holding one binding environment.
pub struct Evaluator<'a> {
    /// Resolves `Name`s for error messages.
    pub(crate) interner: &'a StringInterner,
    /// The environment this evaluator reads and writes.
    pub(crate) binding: Binding,
    /// Limits shared by every nested evaluator of a run.
    pub(crate) config: EvalConfig,
    /// Number of function calls between this evaluator and the top level.
    pub(crate) depth: usize,
    /// Destination for `print`, shared with nested evaluators.
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Evaluator<'a> {
    /// Create a top-level evaluator with an empty binding, default limits
    /// and stdout output.
    pub fn new(interner: &'a StringInterner) -> Self {
        EvaluatorBuilder::new(interner).build()
    }

    /// Create an evaluator builder for more configuration options.
    pub fn builder(interner: &'a StringInterner) -> EvaluatorBuilder<'a> {
        EvaluatorBuilder::new(interner)
    }

    /// Evaluate a node.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        with_stack_headroom(|| self.eval_node(node))
    }

    /// Evaluate statements in order on this evaluator's binding.
    ///
    /// Returns the last statement's value, or 0 for an empty block.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult {
        let mut result = 0;
        for stmt in &block.statements {
            result = self.eval(stmt)?;
        }
        Ok(result)
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult {
        tracing::trace!(kind = node.kind_name(), depth = self.depth, "eval");
        match node {
            Node::Int(value) => Ok(*value),
            Node::Ident(name) => self.eval_ident(*name),
            Node::Op(op) => Err(unexpected_operator(*op)),
            Node::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, *op)
            }
            Node::Assign { target, value } => self.eval_assign(target, value),
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch.as_deref()),
            Node::Block(block) => self.eval_block(block),
            // A function literal only becomes usable once bound by `=`.
            Node::FunctionDef(_) => Ok(0),
            Node::Call { callee, args } => self.eval_call(callee, args),
            Node::Print(args) => self.eval_print(args),
        }
    }

    fn eval_ident(&self, name: Name) -> EvalResult {
        self.binding
            .get(name)
            .map(Value::as_int)
            .ok_or_else(|| unbound_variable(self.interner.lookup(name)))
    }

    /// Bind `target` to the value of `value` and return that value.
    ///
    /// Function literals, and identifiers already bound to functions, bind
    /// the shared definition; everything else binds its integer result.
    ///
    /// The value is evaluated before the target shape is checked.
    fn eval_assign(&mut self, target: &Node, value: &Node) -> EvalResult {
        let bound = match self.function_value(value) {
            Some(def) => Value::Function(def),
            None => Value::Int(self.eval(value)?),
        };

        let Node::Ident(name) = target else {
            return Err(invalid_assignment_target());
        };
        let result = bound.as_int();
        tracing::trace!(name = self.interner.lookup(*name), value = %bound, "bind");
        self.binding.set(*name, bound);
        Ok(result)
    }

    fn function_value(&self, node: &Node) -> Option<Rc<FunctionDef>> {
        match node {
            Node::FunctionDef(def) => Some(Rc::clone(def)),
            Node::Ident(name) => self.binding.get(*name)?.as_function().cloned(),
            _ => None,
        }
    }

    fn eval_if(
        &mut self,
        cond: &Node,
        then_branch: &Node,
        else_branch: Option<&Node>,
    ) -> EvalResult {
        if self.eval(cond)? != 0 {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(0)
        }
    }

    fn eval_print(&mut self, args: &[Node]) -> EvalResult {
        let mut last = 0;
        for arg in args {
            last = self.eval(arg)?;
            self.print_handler.print_int(last);
        }
        Ok(last)
    }

    /// The binding this evaluator reads and writes.
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Consume the evaluator, keeping its final environment.
    pub fn into_binding(self) -> Binding {
        self.binding
    }

    /// Nested call depth (0 for the top-level evaluator).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get captured print output.
    ///
    /// Empty unless the evaluator was built with a buffer handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Clear captured print output.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

#[cfg(test)]
mod tests;
