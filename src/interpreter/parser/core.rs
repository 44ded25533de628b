use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Produces the AST for a complete source text.
///
/// The source is tokenized in full, then statements are parsed one after the
/// other until the token sequence is exhausted. The parser walks the token
/// buffer through a read-only cursor, so each call starts from a fresh
/// buffer and calls never interfere with one another.
///
/// # Errors
/// Returns a `ParseError` if tokenization fails or any statement is
/// malformed. The first error aborts the whole parse.
///
/// # Example
/// ```
/// use nulla::interpreter::parser::core::produce_ast;
///
/// let program = produce_ast("1 + 2").unwrap();
/// assert_eq!(program.body.len(), 1);
///
/// assert!(produce_ast("(1 + 2").is_err());
/// ```
pub fn produce_ast(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut body = Vec::new();
    while iter.peek().is_some() {
        body.push(parse_statement(&mut iter)?);
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the additive tier, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens)
}
