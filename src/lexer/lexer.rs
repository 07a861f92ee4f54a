use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
    }
}

lazy_static! {
    /// Token patterns in the order they are tried. The first pattern matching
    /// at the current offset wins, so punctuation and arrows come before
    /// operators, keywords before booleans, and booleans before identifiers.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern(r"^:", MK_DEFAULT_HANDLER!(TokenKind::TypeColon)),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern(r"^->", MK_DEFAULT_HANDLER!(TokenKind::TypeArrow)),
        pattern(r"^=>", MK_DEFAULT_HANDLER!(TokenKind::LambdaArrow)),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseBrace)),
        pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenBrace)),
        pattern(r"^if\b", MK_DEFAULT_HANDLER!(TokenKind::If)),
        pattern(r"^else\b", MK_DEFAULT_HANDLER!(TokenKind::Else)),
        pattern(r"^while\b", MK_DEFAULT_HANDLER!(TokenKind::While)),
        pattern(r"^let\b", MK_DEFAULT_HANDLER!(TokenKind::Let)),
        pattern(r"^return\b", MK_DEFAULT_HANDLER!(TokenKind::Return)),
        pattern(r"^(true|false)\b", MK_DEFAULT_HANDLER!(TokenKind::Boolean)),
        // Printable ascii other than `"` and `\`, or an escaped `\"`.
        pattern(r#"^"([\x20\x21\x23-\x5b\x5d-\x7e]|\\")*""#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        pattern(r"^[0-9]+\b", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        pattern(r"^[!@$%\^&*<>?/|.=+\-]+", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        pattern(r"^[A-Z][A-Za-z0-9_]*", MK_DEFAULT_HANDLER!(TokenKind::Type)),
        pattern(r"^[a-z_][A-Za-z0-9_]*", MK_DEFAULT_HANDLER!(TokenKind::Id)),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes of input.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, lex.remainder()[..m.end()].to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched),
            None => {
                let prefix = lex.remainder().chars().take(40).collect::<String>();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: prefix },
                    lex.position(),
                ));
            }
        }
    }

    trace!(tokens = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
