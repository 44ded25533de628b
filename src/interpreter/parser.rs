/// Parser entry points and expression dispatch.
///
/// Contains the `produce_ast` driver that turns source text into a `Program`,
/// and the top of the expression-precedence chain.
pub mod core;

/// Statement parsing.
///
/// Turns the token stream into top-level statements. The grammar currently
/// has a single statement form, the expression statement.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative precedence
/// tiers and the token-to-operator mapping.
pub mod binary;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: literals, identifiers, and
/// parenthesized groupings.
pub mod primary;
