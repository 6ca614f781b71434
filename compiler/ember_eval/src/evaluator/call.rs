//! Function call evaluation.

use std::rc::Rc;
use std::sync::Arc;

use ember_ir::{FunctionDef, Node};

use super::Evaluator;
use crate::errors::{not_callable, unbound_variable, wrong_function_args, EvalError, EvalResult};
use crate::{Binding, Value};

impl<'a> Evaluator<'a> {
    /// Evaluate `callee(args)`.
    ///
    /// Arguments are evaluated eagerly, left to right, in the caller's
    /// binding, before arity and depth are checked. The body runs in a nested
    /// evaluator whose binding holds the parameters with the caller's
    /// bindings merged underneath.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_call(&mut self, callee: &Node, args: &[Node]) -> EvalResult {
        let def = self.resolve_callee(callee)?;
        let arg_values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;

        if arg_values.len() != def.arity() {
            return Err(wrong_function_args(def.arity(), arg_values.len()));
        }
        self.check_recursion_limit()?;

        let call_binding = self.prepare_call_binding(&def, &arg_values);
        let mut call_evaluator = self.create_function_evaluator(call_binding);
        call_evaluator.eval_block(&def.body)
    }

    /// Find the function a call refers to.
    fn resolve_callee(&self, callee: &Node) -> Result<Rc<FunctionDef>, EvalError> {
        match callee {
            Node::Ident(name) => match self.binding.get(*name) {
                Some(Value::Function(def)) => Ok(Rc::clone(def)),
                Some(Value::Int(_)) => Err(not_callable(self.interner.lookup(*name))),
                None => Err(unbound_variable(self.interner.lookup(*name))),
            },
            Node::FunctionDef(def) => Ok(Rc::clone(def)),
            other => Err(not_callable(other.kind_name())),
        }
    }

    /// Parameters first, then merge the caller's bindings without overwriting.
    fn prepare_call_binding(&self, def: &FunctionDef, args: &[i64]) -> Binding {
        let mut call_binding: Binding = def
            .params
            .iter()
            .zip(args)
            .map(|(param, arg)| (*param, Value::Int(*arg)))
            .collect();
        call_binding.merge(&self.binding);

        tracing::debug!(
            depth = self.depth,
            params = def.arity(),
            visible = call_binding.len(),
            "prepared call binding"
        );
        call_binding
    }

    /// Nested evaluator for a function body, one level deeper than `self`.
    fn create_function_evaluator(&self, binding: Binding) -> Evaluator<'a> {
        Evaluator {
            interner: self.interner,
            binding,
            config: self.config,
            depth: self.depth.saturating_add(1),
            print_handler: Arc::clone(&self.print_handler),
        }
    }
}
