//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and the identifiers they overlap with
//! - Numeric, boolean and string literals
//! - Punctuation, arrows and operators
//! - Comments
//! - Error cases

use crate::errors::errors::{ErrorImpl, ErrorKind};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("if else while let return"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Let,
            TokenKind::Return
        ]
    );
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = tokenize("iffy lettuce returned whiles".to_string(), None).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Id));
    assert_eq!(tokens[0].value, "iffy");
    assert_eq!(tokens[3].value, "whiles");
}

#[test]
fn test_tokenize_booleans_before_identifiers() {
    let tokens = tokenize("true false truthy".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[2].kind, TokenKind::Id);
    assert_eq!(tokens[2].value, "truthy");
}

#[test]
fn test_tokenize_types_and_identifiers() {
    let tokens = tokenize("Int _tmp fooBar String2".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[1].kind, TokenKind::Id);
    assert_eq!(tokens[1].value, "_tmp");
    assert_eq!(tokens[2].kind, TokenKind::Id);
    assert_eq!(tokens[3].kind, TokenKind::Type);
    assert_eq!(tokens[3].value, "String2");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 123456789012345678901234567890".to_string(), None).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(tokens[2].value, "123456789012345678901234567890");
}

#[test]
fn test_number_needs_word_boundary() {
    let error = tokenize("12abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "with \"quotes\"""#.to_string(), None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, r#""with \"quotes\"""#);
}

#[test]
fn test_unterminated_string_fails() {
    let error = tokenize(r#"let s: String = "oops;"#.to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().0, 16);
}

#[test]
fn test_tokenize_punctuation_and_arrows() {
    assert_eq!(
        kinds("; : , -> => ( ) { }"),
        vec![
            TokenKind::Semicolon,
            TokenKind::TypeColon,
            TokenKind::Comma,
            TokenKind::TypeArrow,
            TokenKind::LambdaArrow,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("a + b == c <= d ++ e && !f".to_string(), None).unwrap();
    let operators: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Operator)
        .map(|token| token.value.as_str())
        .collect();

    assert_eq!(operators, vec!["+", "==", "<=", "++", "&&", "!"]);
}

#[test]
fn test_operator_runs_are_greedy() {
    let tokens = tokenize("x=-1".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "=-");
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("let // a comment\nx"),
        vec![TokenKind::Let, TokenKind::Id]
    );
}

#[test]
fn test_spans_track_offsets() {
    let tokens = tokenize("let  x".to_string(), Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(*tokens[1].span.start.1, "test.lang");
}

#[test]
fn test_empty_source() {
    assert!(kinds("   \n\t ").is_empty());
}

#[test]
fn test_unrecognised_token_carries_prefix() {
    let error = tokenize("let x = #oops".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "#oops".to_string()
        }
    );
    assert_eq!(error.get_position().0, 8);
}
