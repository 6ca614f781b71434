//! Ember IR - AST types for the Ember interpreter.
//!
//! This crate contains the data structures a front end hands to the evaluator:
//! - `Name` handles for interned identifiers
//! - `StringInterner` to produce and resolve them
//! - AST nodes (`Node`, `Block`, `FunctionDef`) and `BinaryOp`
//! - `AstBuilder`, the semantic actions a PEG front end fires to build nodes
//! - `Program`, a root block bundled with the interner that named it
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: strings become `Name(u32)` so environment keys
//!   compare and hash as integers.
//! - **Closed node set**: one tagged enum, matched exhaustively by the evaluator.
//! - **Immutable after construction**: function bodies are shared through `Rc`
//!   and never mutated, so aliasing a function value is free.

pub mod ast;
pub mod build;
mod interner;
mod name;
mod program;

pub use ast::{BinaryOp, Block, FunctionDef, Node};
pub use build::{AstBuilder, BuildError};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use program::Program;
