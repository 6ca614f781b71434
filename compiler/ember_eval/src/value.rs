//! Values stored in a binding environment.

use std::fmt;
use std::rc::Rc;

use ember_ir::FunctionDef;

/// A bound value: an evaluated integer or a shared function definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    /// Aliases the `FunctionDef` node the parser produced; never copied.
    Function(Rc<FunctionDef>),
}

impl Value {
    /// Integer view of the value. Functions read as 0.
    #[inline]
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(v) => *v,
            Value::Function(_) => 0,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<FunctionDef>> {
        match self {
            Value::Function(f) => Some(f),
            Value::Int(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Function(_) => "function",
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Rc<FunctionDef>> for Value {
    fn from(def: Rc<FunctionDef>) -> Self {
        Value::Function(def)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Function(def) => write!(f, "<fn/{}>", def.arity()),
        }
    }
}
