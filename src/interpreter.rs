/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and produces runtime values. It is
/// stateless: there is no environment, no bindings, and no side effects
/// beyond the division-by-zero diagnostic.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies the null-absorption rule to binary operations.
/// - Reports the node kinds that have no evaluation rule.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator, or parenthesis. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Classifies digit runs, letter runs, and the reserved keywords.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST rooted at a `Program` node, applying operator
/// precedence and left-associative folding.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with line info.
/// - Resolves the three precedence tiers: additive, multiplicative, primary.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: numbers and
/// null. There is no promotion and no conversion; a value is what it is.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display formatting.
/// - Provides predicates for inspecting a value's kind.
pub mod value;
