/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens, and
/// any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. The only
/// failure mode of this evaluator is reaching an AST node that has no
/// evaluation rule.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
