use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary_expr, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program.
///
/// Body statements are evaluated in source order and the value of the last
/// one becomes the program's value. Values of earlier statements are
/// computed and discarded. An empty body evaluates to `Value::Null`.
///
/// # Errors
/// Propagates the first `RuntimeError` raised by any statement; nothing
/// after the failing statement is evaluated.
///
/// # Example
/// ```
/// use nulla::interpreter::{evaluator::core::eval_program, parser::core::produce_ast,
///                          value::Value};
///
/// let program = produce_ast("1 + 1 2 + 2").unwrap();
/// assert_eq!(eval_program(&program).unwrap(), Value::Number(4.0));
/// ```
pub fn eval_program(program: &Program) -> EvalResult<Value> {
    let mut last = Value::Null;
    for statement in &program.body {
        last = eval_statement(statement)?;
    }
    Ok(last)
}

/// Evaluates a single statement.
///
/// Every statement is currently an expression statement, so this forwards
/// to expression evaluation.
pub fn eval_statement(statement: &Statement) -> EvalResult<Value> {
    match statement {
        Statement::Expression(expr) => eval_expression(expr),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator is stateless; there is no environment and no bindings.
/// Dispatch is exhaustive over the expression kinds:
/// literals yield their value directly, binary expressions are delegated to
/// the operator evaluator, and identifiers have no evaluation rule without
/// an environment, so they raise `RuntimeError::UnsupportedNode`.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The freshly produced runtime [`Value`].
pub fn eval_expression(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
        Expr::NullLiteral { .. } => Ok(Value::Null),
        Expr::BinaryExpr { left, op, right, line } => eval_binary_expr(left, *op, right, *line),
        Expr::Identifier { symbol, line } => {
            Err(RuntimeError::UnsupportedNode { kind: format!("identifier '{symbol}'"),
                                                line: *line, })
        },
    }
}
