use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens: a maximal run of decimal digits, such as `42`.
    /// No decimal point and no sign; the literal text is carried as a double.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `let` (reserved; no statement form consumes it yet)
    #[token("let")]
    Let,
    /// `null`
    #[token("null")]
    Null,
    /// Identifier tokens; a maximal run of letters such as `x` or `foo`.
    /// Keyword literals above take priority over this class.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `=` (reserved; no production consumes it yet)
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,

    /// Newlines are whitespace here; they only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs. Nothing else is skippable.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts a source string into its full token sequence.
///
/// Tokens are paired with the line they were found on and returned in source
/// order; the sequence ends when the input is exhausted. Whitespace (space,
/// tab, newline) produces no token. Scanning is greedy and never backtracks:
/// digit runs and letter runs are always maximal.
///
/// # Errors
/// Returns `ParseError::UnrecognizedCharacter` for any character that matches
/// none of the token rules. No partial token sequence is returned.
///
/// # Example
/// ```
/// use nulla::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[1], (Token::Plus, 1)));
///
/// assert!(tokenize("1 + @").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let line = lexer.extras.line;
                return match lexer.slice().chars().next() {
                    Some(character) => {
                        Err(ParseError::UnrecognizedCharacter { character, line })
                    },
                    None => Err(ParseError::UnexpectedEndOfInput { line }),
                };
            },
        }
    }

    Ok(tokens)
}
