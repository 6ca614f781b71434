//! Binary operator implementations for the evaluator.
//!
//! Integers use two's-complement wraparound for `+ - *`. Division truncates
//! toward zero and is the only operator that can fail.

use ember_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};

/// Evaluate `left op right` on already-evaluated operands.
pub fn evaluate_binary(left: i64, right: i64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(division_by_zero());
            }
            // i64::MIN / -1 wraps back to i64::MIN
            left.wrapping_div(right)
        }
        BinaryOp::Eq => i64::from(left == right),
        BinaryOp::NotEq => i64::from(left != right),
        BinaryOp::Lt => i64::from(left < right),
        BinaryOp::LtEq => i64::from(left <= right),
        BinaryOp::Gt => i64::from(left > right),
        BinaryOp::GtEq => i64::from(left >= right),
    };
    Ok(value)
}
