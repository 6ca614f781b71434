//! Semantic actions for building the AST.
//!
//! A PEG front end matches a grammar rule and hands its action the rule's
//! child values as a flat sequence. `AstBuilder` turns those sequences into
//! nodes, one method per rule:
//!
//! | Rule | Sequence | Result |
//! |---|---|---|
//! | `number` | token text | `Int` |
//! | `identifier` / `variablereference` | token text | `Ident` |
//! | `add_op` / `mul_op` / `relop` | token text | `Op` |
//! | `arithmetic_expression` / `mult_term` | `[e, op, e, op, e…]` | left-nested `Binary` |
//! | `boolean_expression` | `[e, op, e]` | `Binary` |
//! | `assignment` / `vDec` | `[target, value]` | `Assign` |
//! | `ifexpression` | `[cond, then]` or `[cond, then, else]` | `If` |
//! | `block` / `program` | `[stmt…]` | `Block` |
//! | `function_definition` | `[ident…, block]` | `FunctionDef` |
//! | `functioncall` | `[callee, arg…]` | `Call`, or `Print` when the callee is `print` |

use crate::{BinaryOp, Block, FunctionDef, Name, Node, StringInterner};
use std::rc::Rc;

/// Malformed semantic-value sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("`{rule}` received no values")]
    EmptySequence { rule: &'static str },
    #[error("expected an operator, found {found}")]
    ExpectedOperator { found: &'static str },
    #[error("operator `{symbol}` is missing its right operand")]
    MissingOperand { symbol: &'static str },
    #[error("expected an identifier, found {found}")]
    ExpectedIdentifier { found: &'static str },
    #[error("expected a block, found {found}")]
    ExpectedBlock { found: &'static str },
    #[error("`{rule}` expects {expected} values, got {got}")]
    WrongArity {
        rule: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("invalid integer literal `{text}`")]
    InvalidInteger { text: String },
    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },
}

/// Builds AST nodes from semantic-value sequences.
///
/// Borrows the interner that will own every identifier in the tree.
pub struct AstBuilder<'a> {
    interner: &'a StringInterner,
}

impl<'a> AstBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstBuilder { interner }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// `number <- < ('-')? [0-9]+ >`
    pub fn number(&self, text: &str) -> Result<Node, BuildError> {
        text.trim()
            .parse::<i64>()
            .map(Node::Int)
            .map_err(|_| BuildError::InvalidInteger {
                text: text.to_string(),
            })
    }

    /// `identifier` and `variablereference`.
    pub fn identifier(&self, text: &str) -> Node {
        Node::Ident(self.interner.intern(text))
    }

    /// `add_op`, `mul_op` and `relop` tokens.
    pub fn operator(&self, symbol: &str) -> Result<Node, BuildError> {
        BinaryOp::from_symbol(symbol)
            .map(Node::Op)
            .ok_or_else(|| BuildError::UnknownOperator {
                symbol: symbol.to_string(),
            })
    }

    /// Fold `[e, op, e, op, e…]` left-associatively.
    ///
    /// A single operand is returned as-is, which is how a bare `primary`
    /// passes through the arithmetic rules.
    pub fn binary_chain(&self, values: Vec<Node>) -> Result<Node, BuildError> {
        let mut values = values.into_iter();
        let mut left = values.next().ok_or(BuildError::EmptySequence {
            rule: "binary_chain",
        })?;

        while let Some(op) = values.next() {
            let Node::Op(op) = op else {
                return Err(BuildError::ExpectedOperator {
                    found: op.kind_name(),
                });
            };
            let right = values.next().ok_or(BuildError::MissingOperand {
                symbol: op.as_symbol(),
            })?;
            left = Node::binary(left, op, right);
        }

        Ok(left)
    }

    /// `[target, value]`. The target shape is checked at evaluation time.
    pub fn assignment(&self, values: Vec<Node>) -> Result<Node, BuildError> {
        let got = values.len();
        let [target, value]: [Node; 2] =
            values.try_into().map_err(|_| BuildError::WrongArity {
                rule: "assignment",
                expected: "2",
                got,
            })?;
        Ok(Node::assign(target, value))
    }

    /// `[cond, then]` or `[cond, then, else]`.
    pub fn if_else(&self, values: Vec<Node>) -> Result<Node, BuildError> {
        let got = values.len();
        let mut values = values.into_iter();
        match (values.next(), values.next(), values.next(), values.next()) {
            (Some(cond), Some(then_branch), else_branch, None) => {
                Ok(Node::if_else(cond, then_branch, else_branch))
            }
            _ => Err(BuildError::WrongArity {
                rule: "ifexpression",
                expected: "2 or 3",
                got,
            }),
        }
    }

    /// `[stmt…]`. Empty blocks are allowed.
    pub fn block(&self, values: Vec<Node>) -> Node {
        Node::Block(Block::new(values))
    }

    /// `[ident…, block]`.
    pub fn function_def(&self, mut values: Vec<Node>) -> Result<Node, BuildError> {
        let body = match values.pop() {
            Some(Node::Block(body)) => body,
            Some(other) => {
                return Err(BuildError::ExpectedBlock {
                    found: other.kind_name(),
                })
            }
            None => {
                return Err(BuildError::EmptySequence {
                    rule: "function_definition",
                })
            }
        };

        let params = values
            .into_iter()
            .map(|param| match param {
                Node::Ident(name) => Ok(name),
                other => Err(BuildError::ExpectedIdentifier {
                    found: other.kind_name(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Node::FunctionDef(Rc::new(FunctionDef::new(params, body))))
    }

    /// `[callee, arg…]`. A callee named `print` produces the built-in print.
    pub fn call(&self, values: Vec<Node>) -> Result<Node, BuildError> {
        let mut values = values.into_iter();
        let callee = values.next().ok_or(BuildError::EmptySequence {
            rule: "functioncall",
        })?;
        let args: Vec<Node> = values.collect();

        if callee == Node::Ident(Name::PRINT) {
            Ok(Node::Print(args))
        } else {
            Ok(Node::call(callee, args))
        }
    }
}
