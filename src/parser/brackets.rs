//! Bracket matching.
//!
//! Turns the flat token stream into a tree where every `( ... )` and
//! `{ ... }` pair becomes a [`Group`]. Bracket tokens themselves are not
//! kept as leaves; the group kind and span record them.

use std::fmt::Display;

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Top,
    Paren,
    Brace,
}

impl GroupKind {
    fn open(&self) -> &'static str {
        match self {
            GroupKind::Top => "",
            GroupKind::Paren => "(",
            GroupKind::Brace => "{",
        }
    }

    fn close(&self) -> &'static str {
        match self {
            GroupKind::Top => "",
            GroupKind::Paren => ")",
            GroupKind::Brace => "}",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: GroupKind,
    pub children: Vec<TokenTree>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    Token(Token),
    Group(Group),
}

impl TokenTree {
    pub fn get_span(&self) -> &Span {
        match self {
            TokenTree::Token(token) => &token.span,
            TokenTree::Group(group) => &group.span,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenTree::Token(token) => Some(token),
            TokenTree::Group(_) => None,
        }
    }

    pub fn is_token(&self, kind: TokenKind) -> bool {
        matches!(self, TokenTree::Token(token) if token.kind == kind)
    }

    pub fn as_group(&self, kind: GroupKind) -> Option<&Group> {
        match self {
            TokenTree::Group(group) if group.kind == kind => Some(group),
            _ => None,
        }
    }
}

impl Display for TokenTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenTree::Token(token) => write!(f, "{}", token),
            TokenTree::Group(group) => write!(
                f,
                "{}{}{}",
                group.kind.open(),
                render(&group.children),
                group.kind.close()
            ),
        }
    }
}

/// Renders a slice of trees back to approximate source text for diagnostics.
pub fn render(elements: &[TokenTree]) -> String {
    elements
        .iter()
        .map(|element| element.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Nests `tokens` by bracket structure under a single `Top` group.
///
/// Fails on a close bracket that does not match the innermost open group,
/// on groups left open at the end of input, and on nesting deeper than
/// `max_depth`.
pub fn match_brackets(tokens: Vec<Token>, max_depth: usize) -> Result<Group, Error> {
    let start = tokens
        .first()
        .map(|token| token.span.start.clone())
        .unwrap_or_else(Position::null);
    let end = tokens
        .last()
        .map(|token| token.span.end.clone())
        .unwrap_or_else(|| start.clone());

    let mut stack: Vec<Group> = vec![Group {
        kind: GroupKind::Top,
        children: vec![],
        span: Span { start, end },
    }];

    for token in tokens {
        let opened = match token.kind {
            TokenKind::OpenParen => Some(GroupKind::Paren),
            TokenKind::OpenBrace => Some(GroupKind::Brace),
            _ => None,
        };
        let closed = match token.kind {
            TokenKind::CloseParen => Some(GroupKind::Paren),
            TokenKind::CloseBrace => Some(GroupKind::Brace),
            _ => None,
        };

        if let Some(kind) = opened {
            if stack.len() > max_depth {
                return Err(Error::new(
                    ErrorImpl::NestingTooDeep { limit: max_depth },
                    token.span.start.clone(),
                ));
            }
            stack.push(Group {
                kind,
                children: vec![],
                span: token.span.clone(),
            });
        } else if let Some(kind) = closed {
            let innermost = stack.last().map(|group| group.kind).unwrap_or(GroupKind::Top);
            if innermost != kind {
                let expected = match innermost {
                    GroupKind::Top => "no closing bracket",
                    _ => innermost.close(),
                };
                return Err(Error::new(
                    ErrorImpl::MismatchedBracket {
                        expected: String::from(expected),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
            }

            // The innermost group is never `Top` here, so the stack keeps its root.
            if let Some(mut group) = stack.pop() {
                group.span.end = token.span.end.clone();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(TokenTree::Group(group));
                }
            }
        } else if let Some(current) = stack.last_mut() {
            current.children.push(TokenTree::Token(token));
        }
    }

    if stack.len() != 1 {
        let unclosed = &stack[stack.len() - 1];
        return Err(Error::new(
            ErrorImpl::UnclosedBracket {
                bracket: String::from(unclosed.kind.open()),
            },
            unclosed.span.start.clone(),
        ));
    }

    let top = stack.remove(0);
    trace!(children = top.children.len(), "matched brackets");
    Ok(top)
}
