//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and type names
//! - Numeric literals (integers and floats)
//! - String literals
//! - Maximal-munch operators and punctuation
//! - Comments
//! - Error cases

use crate::errors::errors::Error;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, TokenValue},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(source, Some("test.soul".to_string()));
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_identifiers_and_types() {
    let (tokens, errors) = tokenize("foo bar2 Int MyType x", Some("test.soul".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "bar2");
    assert_eq!(tokens[2].kind, TokenKind::Type);
    assert_eq!(tokens[2].text(), "Int");
    assert_eq!(tokens[3].kind, TokenKind::Type);
    assert_eq!(tokens[3].text(), "MyType");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, errors) = tokenize("42 2.75 0 100.5 .5 7.", Some("test.soul".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, TokenValue::Int(42));
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, TokenValue::Float(2.75));
    assert_eq!(tokens[2].value, TokenValue::Int(0));
    assert_eq!(tokens[3].value, TokenValue::Float(100.5));
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].value, TokenValue::Float(0.5));
    assert_eq!(tokens[5].kind, TokenKind::Float);
    assert_eq!(tokens[5].value, TokenValue::Float(7.0));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integer_values() {
    for n in [0_i64, 1, 9, 10, 123, 65536, 9_223_372_036_854_775_807] {
        let (tokens, errors) = tokenize(&n.to_string(), None);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].value, TokenValue::Int(n));
    }
}

#[test]
fn test_tokenize_multiple_periods_is_invalid() {
    let (tokens, errors) = tokenize("1.2.3", Some("test.soul".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].text(), "1.2.3");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "InvalidNumberFormat");
    assert!(errors[0].message().starts_with("invalid number format"));
}

#[test]
fn test_tokenize_integer_overflow() {
    let (tokens, errors) = tokenize("99999999999999999999", None);

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_strings() {
    let (tokens, errors) = tokenize(r#""hello" "multiple words" """#, None);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text(), "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].text(), "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].text(), "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let (tokens, errors) = tokenize(r#"x "abc"#, Some("test.soul".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(), "abc");
    assert_eq!(tokens[2].kind, TokenKind::EOF);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    assert!(errors[0].message().starts_with("unterminated string literal"));
    assert_eq!(errors[0].get_position().0, 2);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let (tokens, errors) = tokenize("a ? b", Some("test.soul".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(), "?");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedToken");
    assert!(errors[0].message().starts_with("invalid token"));
}

#[test]
fn test_tokenize_binary_operators() {
    assert_eq!(
        kinds("= .. && || & | < > <= >= == != << >> <| |> + - * / % ** ."),
        vec![
            TokenKind::Assignment,
            TokenKind::DotDot,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::PipeLeft,
            TokenKind::PipeRight,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::StarStar,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    assert_eq!(
        kinds("+= -= *= /= %= &= |= ~= ^= **= <<= <|= ++ -- ->"),
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::AmpersandEquals,
            TokenKind::PipeEquals,
            TokenKind::TildeEquals,
            TokenKind::CaretEquals,
            TokenKind::StarStarEquals,
            TokenKind::ShiftLeftEquals,
            TokenKind::PipeLeftEquals,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_maximal_munch_without_spaces() {
    assert_eq!(
        kinds("a<<=b**c|>d"),
        vec![
            TokenKind::Identifier,
            TokenKind::ShiftLeftEquals,
            TokenKind::Identifier,
            TokenKind::StarStar,
            TokenKind::Identifier,
            TokenKind::PipeRight,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );

    // `***` is `**` followed by `*`
    assert_eq!(
        kinds("***"),
        vec![TokenKind::StarStar, TokenKind::Star, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , : # @ $ ' ! ~ ^"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Pound,
            TokenKind::At,
            TokenKind::Dollar,
            TokenKind::Apostrophe,
            TokenKind::Not,
            TokenKind::Tilde,
            TokenKind::Caret,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_adjacent_punctuation() {
    assert_eq!(
        kinds("f()"),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_dot_versus_number() {
    assert_eq!(
        kinds(".foo"),
        vec![TokenKind::Dot, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(kinds(".5"), vec![TokenKind::Float, TokenKind::EOF]);
    assert_eq!(
        kinds("a..b"),
        vec![
            TokenKind::Identifier,
            TokenKind::DotDot,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let (tokens, errors) = tokenize("x ; this is a comment\ny", None);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[1].text(), " this is a comment");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text(), "y");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        kinds("  \t x   =\r\n  42  "),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Int,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let (tokens, _) = tokenize("ab <<= 12", Some("test.soul".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(*tokens[2].span.start.1, "test.soul");
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x".chars(), None, Vec::<Error>::new());

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert!(lexer.sink().is_empty());
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new("".chars(), None, Vec::<Error>::new());
    assert_eq!(*lexer.file(), "shell");
}

#[test]
fn test_operator_ordinals_form_tiers() {
    assert_eq!(TokenKind::Assignment.ordinal(), 0);
    assert_eq!(TokenKind::And.ordinal() / 10 * 10, 20);
    assert_eq!(TokenKind::Or.ordinal() / 10 * 10, 20);
    assert_eq!(TokenKind::PipeRight.ordinal() / 10 * 10, 50);
    assert_eq!(TokenKind::Percent.ordinal() / 10 * 10, 70);
    assert_eq!(TokenKind::Dot.ordinal(), 90);
    assert!(TokenKind::Invalid.ordinal() > 90);
    assert!(TokenKind::String.ordinal() > 90);
}
