use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Punctuation
    Semicolon,
    TypeColon,
    Comma,
    TypeArrow,   // ->
    LambdaArrow, // =>
    CloseParen,
    OpenParen,
    CloseBrace,
    OpenBrace,

    // Reserved
    If,
    Else,
    While,
    Let,
    Return,

    // Literals
    Boolean,
    String,
    Number,

    Operator,
    Type,
    Id,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Whether this is an operator token spelling exactly `symbol`.
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == symbol
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
