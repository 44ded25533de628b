use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// The grammar has exactly one statement form today: an expression used as a
/// statement. The `let` keyword and `=` token are recognized by the lexer
/// but no declaration or assignment production consumes them; if they reach
/// the parser they surface as unexpected tokens.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    Ok(Statement::Expression(parse_expression(tokens)?))
}
