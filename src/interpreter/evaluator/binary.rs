use tracing::warn;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::Value,
    },
};

/// Evaluates a binary expression.
///
/// The left operand is evaluated to completion before the right one begins.
/// When both operands are numbers the operator is applied; when either is
/// null the whole operation is null. Null absorbs, it never errors.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `op`: The operator.
/// - `right`: Right operand expression.
/// - `line`: Line number for diagnostics.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
pub fn eval_binary_expr(left: &Expr,
                        op: BinaryOperator,
                        right: &Expr,
                        line: usize)
                        -> EvalResult<Value> {
    let lhs = eval_expression(left)?;
    let rhs = eval_expression(right)?;

    match (lhs, rhs) {
        (Value::Number(lhs), Value::Number(rhs)) => {
            Ok(Value::Number(eval_numeric_binary(lhs, rhs, op, line)))
        },
        _ => Ok(Value::Null),
    }
}

/// Evaluates a numeric operation with a binary operator.
///
/// Plain IEEE-754 double arithmetic; `%` is the remainder operation, so the
/// result takes the sign of the dividend. Division by zero is reported once
/// as a warning and evaluation continues with the floating-point result
/// (`1/0` is infinite, `0/0` is NaN). Only `/` is checked; a zero right
/// operand of `%` produces NaN with no diagnostic.
pub fn eval_numeric_binary(lhs: f64, rhs: f64, op: BinaryOperator, line: usize) -> f64 {
    if matches!(op, BinaryOperator::Div) && rhs == 0.0 {
        warn!("Tried to divide by zero on line {line}.");
    }

    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::Mod => lhs % rhs,
    }
}
