use super::*;
use crate::print_handler::buffer_handler;
use crate::EvalError;
use ember_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn evaluator(interner: &StringInterner) -> Evaluator<'_> {
    Evaluator::builder(interner)
        .print_handler(buffer_handler())
        .build()
}

fn block(statements: Vec<Node>) -> Block {
    Block::new(statements)
}

/// `f = fn(n) { if n <= 0 { 0 } else { n + f(n - 1) } }`
fn sum_to_zero(interner: &StringInterner) -> Node {
    let f = interner.intern("f");
    let n = interner.intern("n");
    Node::assign(
        Node::ident(f),
        Node::function(
            vec![n],
            block(vec![Node::if_else(
                Node::binary(Node::ident(n), BinaryOp::LtEq, Node::int(0)),
                Node::block(vec![Node::int(0)]),
                Some(Node::block(vec![Node::binary(
                    Node::ident(n),
                    BinaryOp::Add,
                    Node::call(
                        Node::ident(f),
                        vec![Node::binary(Node::ident(n), BinaryOp::Sub, Node::int(1))],
                    ),
                )])),
            )]),
        ),
    )
}

#[test]
fn integer_literal() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);
    assert_eq!(ev.eval(&Node::int(-12)), Ok(-12));
}

#[test]
fn unbound_reference_is_an_error() {
    let interner = StringInterner::new();
    let undefined = interner.intern("undefined");
    let mut ev = evaluator(&interner);

    assert_eq!(
        ev.eval(&Node::ident(undefined)),
        Err(EvalError::UnboundVariable {
            name: "undefined".to_string()
        })
    );
}

#[test]
fn binary_evaluates_both_operands_left_to_right() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let node = Node::binary(
        Node::print(vec![Node::int(8)]),
        BinaryOp::Div,
        Node::print(vec![Node::int(3)]),
    );

    assert_eq!(ev.eval(&node), Ok(2));
    assert_eq!(ev.get_print_output(), "8\n3\n");
}

#[test]
fn division_by_zero_at_runtime() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(Node::ident(x), Node::int(0)),
        Node::binary(Node::int(10), BinaryOp::Div, Node::ident(x)),
    ]);

    assert_eq!(ev.eval_block(&program), Err(EvalError::DivisionByZero));
}

#[test]
fn assignment_returns_value_and_rebinds() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut ev = evaluator(&interner);

    assert_eq!(ev.eval(&Node::assign(Node::ident(x), Node::int(1))), Ok(1));
    assert_eq!(ev.eval(&Node::assign(Node::ident(x), Node::int(2))), Ok(2));

    assert_eq!(ev.binding().get(x), Some(&Value::Int(2)));
    assert_eq!(ev.binding().len(), 1);
}

#[test]
fn assignment_to_non_identifier_fails_after_value() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let node = Node::assign(Node::int(5), Node::print(vec![Node::int(1)]));

    assert_eq!(ev.eval(&node), Err(EvalError::InvalidAssignmentTarget));
    assert_eq!(ev.get_print_output(), "1\n");
    assert!(ev.binding().is_empty());
}

#[test]
fn block_sequencing_sees_earlier_assignments() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(Node::ident(x), Node::int(1)),
        Node::assign(
            Node::ident(x),
            Node::binary(Node::ident(x), BinaryOp::Add, Node::int(1)),
        ),
        Node::ident(x),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(2));
}

#[test]
fn empty_block_is_zero() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(ev.eval_block(&Block::default()), Ok(0));
    assert_eq!(ev.eval(&Node::block(vec![])), Ok(0));
}

#[test]
fn conditional_short_circuits() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let node = Node::if_else(
        Node::int(0),
        Node::print(vec![Node::int(1)]),
        Some(Node::print(vec![Node::int(2)])),
    );

    assert_eq!(ev.eval(&node), Ok(2));
    assert_eq!(ev.get_print_output(), "2\n");
}

#[test]
fn conditional_any_nonzero_is_true() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let node = Node::if_else(Node::int(-5), Node::int(10), Some(Node::int(20)));
    assert_eq!(ev.eval(&node), Ok(10));
}

#[test]
fn conditional_without_else_skips_side_effects() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut ev = evaluator(&interner);

    let node = Node::if_else(
        Node::binary(Node::int(1), BinaryOp::Gt, Node::int(2)),
        Node::block(vec![Node::assign(Node::ident(x), Node::int(5))]),
        None,
    );

    assert_eq!(ev.eval(&node), Ok(0));
    assert!(!ev.binding().contains(x));
}

#[test]
fn function_definition_alone_is_zero() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(ev.eval(&Node::function(vec![], Block::default())), Ok(0));
    assert!(ev.binding().is_empty());
}

#[test]
fn assignment_binds_the_shared_definition() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let g = interner.intern("g");
    let mut ev = evaluator(&interner);

    let literal = Node::function(vec![], block(vec![Node::int(4)]));
    let Node::FunctionDef(def) = &literal else {
        panic!("expected function literal");
    };

    assert_eq!(ev.eval(&Node::assign(Node::ident(f), literal.clone())), Ok(0));
    assert_eq!(ev.eval(&Node::assign(Node::ident(g), Node::ident(f))), Ok(0));

    for name in [f, g] {
        let bound = ev.binding().get(name).and_then(Value::as_function);
        assert!(bound.is_some_and(|b| Rc::ptr_eq(b, def)));
    }
    assert_eq!(ev.eval(&Node::call(Node::ident(g), vec![])), Ok(4));
}

#[test]
fn function_reference_reads_as_zero() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut ev = evaluator(&interner);

    let literal = Node::function(vec![], Block::default());
    assert_eq!(ev.eval(&Node::assign(Node::ident(f), literal)), Ok(0));
    assert_eq!(
        ev.eval(&Node::binary(Node::ident(f), BinaryOp::Add, Node::int(3))),
        Ok(3)
    );
}

#[test]
fn recursive_call_terminates() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        sum_to_zero(&interner),
        Node::call(Node::ident(f), vec![Node::int(3)]),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(6));
}

#[test]
fn deep_recursion_within_default_limit() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        sum_to_zero(&interner),
        Node::call(Node::ident(f), vec![Node::int(5_000)]),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(12_502_500));
}

#[test]
fn unbounded_recursion_hits_the_limit() {
    let interner = StringInterner::new();
    let spin = interner.intern("spin");
    let n = interner.intern("n");
    let mut ev = Evaluator::builder(&interner)
        .config(EvalConfig::bounded(25))
        .print_handler(buffer_handler())
        .build();

    let program = block(vec![
        Node::assign(
            Node::ident(spin),
            Node::function(
                vec![n],
                block(vec![Node::call(Node::ident(spin), vec![Node::ident(n)])]),
            ),
        ),
        Node::call(Node::ident(spin), vec![Node::int(1)]),
    ]);

    assert_eq!(
        ev.eval_block(&program),
        Err(EvalError::RecursionLimitExceeded { limit: 25 })
    );
}

#[test]
fn parameter_shadows_caller_and_caller_is_untouched() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let g = interner.intern("g");
    let r = interner.intern("r");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(Node::ident(x), Node::int(100)),
        Node::assign(
            Node::ident(g),
            Node::function(
                vec![x],
                block(vec![
                    Node::assign(
                        Node::ident(x),
                        Node::binary(Node::ident(x), BinaryOp::Add, Node::int(1)),
                    ),
                    Node::ident(x),
                ]),
            ),
        ),
        Node::assign(Node::ident(r), Node::call(Node::ident(g), vec![Node::int(5)])),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(6));
    assert_eq!(ev.binding().get(x), Some(&Value::Int(100)));
    assert_eq!(ev.binding().get(r), Some(&Value::Int(6)));
}

#[test]
fn callee_sees_call_site_bindings() {
    let interner = StringInterner::new();
    let y = interner.intern("y");
    let a = interner.intern("a");
    let h = interner.intern("h");
    let mut ev = evaluator(&interner);

    // h is defined before y exists; y is visible because it is bound at the call site.
    let program = block(vec![
        Node::assign(
            Node::ident(h),
            Node::function(
                vec![a],
                block(vec![Node::binary(Node::ident(a), BinaryOp::Add, Node::ident(y))]),
            ),
        ),
        Node::assign(Node::ident(y), Node::int(10)),
        Node::call(Node::ident(h), vec![Node::int(1)]),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(11));
}

#[test]
fn callee_assignments_do_not_leak() {
    let interner = StringInterner::new();
    let k = interner.intern("k");
    let z = interner.intern("z");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(
            Node::ident(k),
            Node::function(
                vec![],
                block(vec![Node::assign(Node::ident(z), Node::int(9))]),
            ),
        ),
        Node::call(Node::ident(k), vec![]),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(9));
    assert!(!ev.binding().contains(z));
}

#[test]
fn arguments_are_evaluated_left_to_right_in_caller() {
    let interner = StringInterner::new();
    let sub = interner.intern("sub");
    let a = interner.intern("a");
    let b = interner.intern("b");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(
            Node::ident(sub),
            Node::function(
                vec![a, b],
                block(vec![Node::binary(Node::ident(a), BinaryOp::Sub, Node::ident(b))]),
            ),
        ),
        Node::call(
            Node::ident(sub),
            vec![Node::print(vec![Node::int(1)]), Node::print(vec![Node::int(2)])],
        ),
    ]);

    assert_eq!(ev.eval_block(&program), Ok(-1));
    assert_eq!(ev.get_print_output(), "1\n2\n");
}

#[test]
fn arity_mismatch() {
    let interner = StringInterner::new();
    let id = interner.intern("id");
    let a = interner.intern("a");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(
            Node::ident(id),
            Node::function(vec![a], block(vec![Node::ident(a)])),
        ),
        Node::call(
            Node::ident(id),
            vec![Node::print(vec![Node::int(1)]), Node::int(2)],
        ),
    ]);

    assert_eq!(
        ev.eval_block(&program),
        Err(EvalError::ArityMismatch {
            expected: 1,
            got: 2
        })
    );
    // Arguments run before the arity check
    assert_eq!(ev.get_print_output(), "1\n");
}

#[test]
fn arguments_run_before_the_depth_check() {
    let interner = StringInterner::new();
    let id = interner.intern("id");
    let a = interner.intern("a");
    let mut ev = Evaluator::builder(&interner)
        .config(EvalConfig::bounded(0))
        .print_handler(buffer_handler())
        .build();

    let program = block(vec![
        Node::assign(
            Node::ident(id),
            Node::function(vec![a], block(vec![Node::ident(a)])),
        ),
        Node::call(Node::ident(id), vec![Node::print(vec![Node::int(7)])]),
    ]);

    assert_eq!(
        ev.eval_block(&program),
        Err(EvalError::RecursionLimitExceeded { limit: 0 })
    );
    assert_eq!(ev.get_print_output(), "7\n");
}

#[test]
fn calling_an_integer_is_not_callable() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::assign(Node::ident(x), Node::int(1)),
        Node::call(Node::ident(x), vec![]),
    ]);

    assert_eq!(
        ev.eval_block(&program),
        Err(EvalError::NotCallable {
            name: "x".to_string()
        })
    );
}

#[test]
fn calling_an_unbound_name() {
    let interner = StringInterner::new();
    let nope = interner.intern("nope");
    let mut ev = evaluator(&interner);

    assert_eq!(
        ev.eval(&Node::call(Node::ident(nope), vec![])),
        Err(EvalError::UnboundVariable {
            name: "nope".to_string()
        })
    );
}

#[test]
fn calling_a_literal_function_directly() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let mut ev = evaluator(&interner);

    let node = Node::call(
        Node::function(
            vec![a],
            block(vec![Node::binary(Node::ident(a), BinaryOp::Mul, Node::int(2))]),
        ),
        vec![Node::int(21)],
    );

    assert_eq!(ev.eval(&node), Ok(42));
}

#[test]
fn calling_an_expression_is_not_callable() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(
        ev.eval(&Node::call(Node::int(3), vec![])),
        Err(EvalError::NotCallable {
            name: "integer".to_string()
        })
    );
}

#[test]
fn print_emits_each_argument_and_returns_last() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let node = Node::print(vec![
        Node::int(1),
        Node::binary(Node::int(2), BinaryOp::Mul, Node::int(3)),
        Node::binary(Node::int(2), BinaryOp::Eq, Node::int(3)),
    ]);

    assert_eq!(ev.eval(&node), Ok(0));
    assert_eq!(ev.get_print_output(), "1\n6\n0\n");
}

#[test]
fn print_without_arguments() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(ev.eval(&Node::print(vec![])), Ok(0));
    assert_eq!(ev.get_print_output(), "");
}

#[test]
fn first_error_aborts_the_block() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    let program = block(vec![
        Node::print(vec![Node::int(1)]),
        Node::binary(Node::int(1), BinaryOp::Div, Node::int(0)),
        Node::print(vec![Node::int(2)]),
    ]);

    assert_eq!(ev.eval_block(&program), Err(EvalError::DivisionByZero));
    assert_eq!(ev.get_print_output(), "1\n");
}

#[test]
fn stray_operator_token() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(
        ev.eval(&Node::Op(BinaryOp::Add)),
        Err(EvalError::UnexpectedOperator { symbol: "+" })
    );
}

#[test]
fn builder_seeds_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut seed = Binding::new();
    seed.set(x, Value::Int(41));

    let mut ev = Evaluator::builder(&interner)
        .binding(seed)
        .print_handler(buffer_handler())
        .build();

    assert_eq!(ev.depth(), 0);
    assert_eq!(ev.config(), EvalConfig::default());
    assert_eq!(
        ev.eval(&Node::binary(Node::ident(x), BinaryOp::Add, Node::int(1))),
        Ok(42)
    );
    assert_eq!(ev.into_binding().get(x), Some(&Value::Int(41)));
}

#[test]
fn clear_print_output() {
    let interner = StringInterner::new();
    let mut ev = evaluator(&interner);

    assert_eq!(ev.eval(&Node::print(vec![Node::int(1)])), Ok(1));
    ev.clear_print_output();
    assert_eq!(ev.eval(&Node::print(vec![Node::int(2)])), Ok(2));

    assert_eq!(ev.get_print_output(), "2\n");
}
