//! AST node model.
//!
//! A program is a `Block` of `Node`s. Children are owned by their parent;
//! the only sharing is `FunctionDef`, held behind an `Rc` so a function value
//! bound in the environment aliases the node the parser produced.

mod operators;

pub use operators::BinaryOp;

use std::rc::Rc;

use crate::Name;

/// An AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Integer literal.
    Int(i64),
    /// Reference to a bound identifier.
    Ident(Name),
    /// Operator token captured by the parser.
    ///
    /// Only appears inside the flat sequences handed to `AstBuilder`; a
    /// well-formed tree never contains one.
    Op(BinaryOp),
    /// `left op right`.
    Binary {
        left: Box<Node>,
        op: BinaryOp,
        right: Box<Node>,
    },
    /// `target = value`. The target must be an `Ident`.
    Assign { target: Box<Node>, value: Box<Node> },
    /// `if cond { then } else { else }`.
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    /// `{ stmt* }`.
    Block(Block),
    /// `fn(params) { body }`.
    FunctionDef(Rc<FunctionDef>),
    /// `callee(args)`.
    Call { callee: Box<Node>, args: Vec<Node> },
    /// `print(args)`.
    Print(Vec<Node>),
}

/// A sequence of statements evaluated in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn new(statements: Vec<Node>) -> Self {
        Block { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// A function literal: parameter names and a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub params: Vec<Name>,
    pub body: Block,
}

impl FunctionDef {
    pub fn new(params: Vec<Name>, body: Block) -> Self {
        FunctionDef { params, body }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// Constructors used by the builder and by hand-built trees in tests.
impl Node {
    pub fn int(value: i64) -> Self {
        Node::Int(value)
    }

    pub fn ident(name: Name) -> Self {
        Node::Ident(name)
    }

    pub fn binary(left: Node, op: BinaryOp, right: Node) -> Self {
        Node::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn assign(target: Node, value: Node) -> Self {
        Node::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn if_else(cond: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Node::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn block(statements: Vec<Node>) -> Self {
        Node::Block(Block::new(statements))
    }

    pub fn function(params: Vec<Name>, body: Block) -> Self {
        Node::FunctionDef(Rc::new(FunctionDef::new(params, body)))
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn print(args: Vec<Node>) -> Self {
        Node::Print(args)
    }

    /// Short kind label for traces and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Int(_) => "integer",
            Node::Ident(_) => "identifier",
            Node::Op(_) => "operator",
            Node::Binary { .. } => "binary expression",
            Node::Assign { .. } => "assignment",
            Node::If { .. } => "if expression",
            Node::Block(_) => "block",
            Node::FunctionDef(_) => "function definition",
            Node::Call { .. } => "call",
            Node::Print(_) => "print",
        }
    }
}
