use std::fs;

use nulla::{
    ast::{BinaryOperator, Expr, Statement},
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::eval_program,
        lexer::{Token, tokenize},
        parser::core::produce_ast,
        value::Value,
    },
};
use walkdir::WalkDir;

fn eval(src: &str) -> Value {
    get_result(src).unwrap_or_else(|e| panic!("Script failed: {src}\nError: {e}"))
}

fn assert_number(src: &str, expected: f64) {
    assert_eq!(eval(src), Value::Number(expected), "source: {src}");
}

fn assert_null(src: &str) {
    assert!(eval(src).is_null(), "source: {src}");
}

#[test]
fn whitespace_does_not_change_the_token_sequence() {
    assert_eq!(tokenize("1+2").unwrap(), tokenize(" 1 + 2 ").unwrap());
    assert_eq!(tokenize("1+2").unwrap(), tokenize("\t1\t+\t2").unwrap());
}

#[test]
fn integer_literals_lex_to_a_single_number_token() {
    assert_eq!(tokenize("42").unwrap(), vec![(Token::Number(42.0), 1)]);
    assert_eq!(tokenize("007").unwrap(), vec![(Token::Number(7.0), 1)]);
    assert_eq!(tokenize("0").unwrap(), vec![(Token::Number(0.0), 1)]);
}

#[test]
fn keyword_lookup_beats_identifier_classification() {
    assert_eq!(tokenize("null").unwrap(), vec![(Token::Null, 1)]);
    assert_eq!(tokenize("let").unwrap(), vec![(Token::Let, 1)]);
    assert_eq!(tokenize("nullx").unwrap(),
               vec![(Token::Identifier("nullx".to_string()), 1)]);
}

#[test]
fn adjacent_runs_split_into_separate_tokens() {
    assert_eq!(tokenize("123abc").unwrap(),
               vec![(Token::Number(123.0), 1),
                    (Token::Identifier("abc".to_string()), 1)]);
}

#[test]
fn newlines_advance_the_line_counter() {
    assert_eq!(tokenize("1\n2").unwrap(),
               vec![(Token::Number(1.0), 1), (Token::Number(2.0), 2)]);
}

#[test]
fn unrecognized_character_aborts_tokenization() {
    assert!(matches!(tokenize("1+@"),
                     Err(ParseError::UnrecognizedCharacter { character: '@',
                                                             line:      1, })));
    // Carriage returns are not whitespace in this language.
    assert!(matches!(tokenize("1\r"),
                     Err(ParseError::UnrecognizedCharacter { character: '\r', .. })));
}

#[test]
fn subtraction_folds_left_associatively() {
    let program = produce_ast("10-3-2").unwrap();

    let expected = Expr::BinaryExpr {
        left:  Box::new(Expr::BinaryExpr {
            left:  Box::new(Expr::NumericLiteral { value: 10.0, line: 1 }),
            op:    BinaryOperator::Sub,
            right: Box::new(Expr::NumericLiteral { value: 3.0, line: 1 }),
            line:  1,
        }),
        op:    BinaryOperator::Sub,
        right: Box::new(Expr::NumericLiteral { value: 2.0, line: 1 }),
        line:  1,
    };
    assert_eq!(program.body, vec![Statement::Expression(expected)]);

    assert_number("10-3-2", 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = produce_ast("2+3*4").unwrap();

    let expected = Expr::BinaryExpr {
        left:  Box::new(Expr::NumericLiteral { value: 2.0, line: 1 }),
        op:    BinaryOperator::Add,
        right: Box::new(Expr::BinaryExpr {
            left:  Box::new(Expr::NumericLiteral { value: 3.0, line: 1 }),
            op:    BinaryOperator::Mul,
            right: Box::new(Expr::NumericLiteral { value: 4.0, line: 1 }),
            line:  1,
        }),
        line:  1,
    };
    assert_eq!(program.body, vec![Statement::Expression(expected)]);

    assert_number("2+3*4", 14.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_number("(2+3)*4", 20.0);
    assert_number("((((1))))", 1.0);
}

#[test]
fn null_absorbs_binary_operations() {
    assert_null("null+5");
    assert_null("5+null");
    assert_null("null*null");
    assert_null("(1+null)*3");
}

#[test]
fn division_by_zero_follows_floating_point_semantics() {
    assert_number("1/0", f64::INFINITY);
    assert_number("(0-1)/0", f64::NEG_INFINITY);

    match eval("0/0") {
        Value::Number(n) => assert!(n.is_nan()),
        other => panic!("Expected a number, got {other}"),
    }
}

#[test]
fn percent_is_remainder_not_modulo() {
    assert_number("7%2", 1.0);
    assert_number("17%5", 2.0);
    // The sign follows the dividend.
    assert_number("(0-7)%2", -1.0);
    assert_number("7%(0-2)", 1.0);
}

#[test]
fn unmatched_parenthesis_is_an_error() {
    assert!(matches!(produce_ast("(1+2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn trailing_operator_is_an_error() {
    assert!(matches!(produce_ast("1+"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn reserved_tokens_are_lexed_but_rejected_by_the_grammar() {
    assert_eq!(tokenize("let x = 5").unwrap(),
               vec![(Token::Let, 1),
                    (Token::Identifier("x".to_string()), 1),
                    (Token::Equals, 1),
                    (Token::Number(5.0), 1)]);

    assert!(matches!(produce_ast("let x = 5"),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn identifiers_parse_but_have_no_evaluation_rule() {
    let program = produce_ast("x").unwrap();
    assert!(matches!(eval_program(&program),
                     Err(RuntimeError::UnsupportedNode { .. })));
}

#[test]
fn empty_programs_evaluate_to_null() {
    assert_null("");
    assert_null("  \t\n  ");
}

#[test]
fn the_last_statement_wins() {
    assert_number("1 2 3", 3.0);
    assert_number("1+1 2+2", 4.0);
    assert_null("7*6 null");
}

#[test]
fn statements_continue_across_newlines() {
    assert_number("1\n+ 2", 3.0);
    assert_number("1 + 2\n3 + 4", 7.0);
}

#[test]
fn script_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "nulla")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&content) {
            panic!("Script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
