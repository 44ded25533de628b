//! # nulla
//!
//! nulla is a tiny arithmetic language interpreter written in Rust.
//! It tokenizes, parses, and evaluates programs made of integer literals,
//! `null`, the five binary operators, and parenthesized groupings. Null
//! absorbs every operation it takes part in instead of raising an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::eval_program, parser::core::produce_ast, value::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Fixes the set of node kinds as closed sum types.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Errors carry line numbers and enough context to print
/// a single self-contained diagnostic; no stage ever terminates the process
/// on its own.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the final evaluation result of a source text.
///
/// The source is run through the full pipeline: tokenized, parsed into a
/// program, and evaluated. The value of the program's last statement is
/// returned; an empty source yields `Value::Null`.
///
/// # Errors
/// Returns the first lexing, parsing, or evaluation error encountered. The
/// caller decides what to do with it; the single-shot command line driver
/// prints it and exits non-zero, the repl prints it and keeps the session.
///
/// # Examples
/// ```
/// use nulla::get_result;
///
/// let value = get_result("(2 + 3) * 4").unwrap();
/// assert_eq!(value.to_string(), "20");
///
/// // Null absorbs any operation it takes part in.
/// let value = get_result("null + 5").unwrap();
/// assert_eq!(value.to_string(), "null");
///
/// // A bare identifier has no evaluation rule without bindings.
/// assert!(get_result("x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let program = produce_ast(source)?;
    let value = eval_program(&program)?;

    Ok(value)
}
