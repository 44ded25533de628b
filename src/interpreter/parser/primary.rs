use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - the `null` literal
/// - identifiers
/// - parenthesized expressions
///
/// Any other token in primary position is a parse error; this is where the
/// reserved `let` and `=` tokens end up if they appear in source.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "null"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::NumericLiteral { value: *value,
                                                                        line:  *line, }),
        Some((Token::Null, line)) => Ok(Expr::NullLiteral { line: *line }),
        Some((Token::Identifier(symbol), line)) => Ok(Expr::Identifier { symbol: symbol.clone(),
                                                                         line:   *line, }),
        Some((Token::OpenParen, line)) => parse_grouping(tokens, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Called with the opening `(` already consumed. The enclosed expression is
/// parsed in full and the closing `)` is required; the grouping contributes
/// no node of its own.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned just past `(`.
/// - `line`: Line number of the opening parenthesis.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen`, reporting what was found
/// instead, when the `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::CloseParen, _)) => Ok(expr),
        Some((tok, l)) => Err(ParseError::ExpectedClosingParen { found: format!("{tok:?}"),
                                                                 line:  *l, }),
        None => Err(ParseError::ExpectedClosingParen { found: "end of input".to_string(),
                                                       line }),
    }
}
