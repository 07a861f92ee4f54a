//! Statement splitting.
//!
//! Walks the children of a bracket group and cuts them into pre-statements:
//! statements whose structure is known but whose expressions and type
//! signatures are still raw slices of the bracket tree. Nested `{ ... }`
//! bodies are split recursively.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::brackets::{render, Group, GroupKind, TokenTree};

/// The split statements of one block, with the span of that block.
#[derive(Debug, Clone, PartialEq)]
pub struct PreProgram<'a> {
    pub statements: Vec<PreStmt<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreStmt<'a> {
    Declare {
        target: String,
        type_sig: &'a [TokenTree],
        value: &'a [TokenTree],
        span: Span,
    },
    Assign {
        target: String,
        value: &'a [TokenTree],
        span: Span,
    },
    If {
        condition: &'a Group,
        then_body: PreProgram<'a>,
        else_body: PreProgram<'a>,
        span: Span,
    },
    While {
        condition: &'a Group,
        body: PreProgram<'a>,
        span: Span,
    },
    Return {
        value: Option<&'a [TokenTree]>,
        span: Span,
    },
    Expression {
        value: &'a [TokenTree],
        span: Span,
    },
}

impl PreStmt<'_> {
    pub fn get_span(&self) -> &Span {
        match self {
            PreStmt::Declare { span, .. }
            | PreStmt::Assign { span, .. }
            | PreStmt::If { span, .. }
            | PreStmt::While { span, .. }
            | PreStmt::Return { span, .. }
            | PreStmt::Expression { span, .. } => span,
        }
    }
}

type Split<'a, T> = Result<(T, &'a [TokenTree]), Error>;

/// Splits the children of `group` into pre-statements.
pub fn split_group(group: &Group) -> Result<PreProgram<'_>, Error> {
    Ok(PreProgram {
        statements: split_statements(&group.children)?,
        span: group.span.clone(),
    })
}

/// Splits `elements` into pre-statements until nothing remains.
pub fn split_statements(elements: &[TokenTree]) -> Result<Vec<PreStmt<'_>>, Error> {
    let mut statements = vec![];
    let mut remainder = elements;

    while !remainder.is_empty() {
        let (statement, rest) = split_first_statement(remainder)?;
        statements.push(statement);
        remainder = rest;
    }

    Ok(statements)
}

fn split_first_statement(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    if let TokenTree::Token(token) = &elements[0] {
        match token.kind {
            TokenKind::Let => return split_declare(elements),
            TokenKind::If => return split_if(elements),
            TokenKind::While => return split_while(elements),
            TokenKind::Return => return split_return(elements),
            _ => {}
        }
    }

    // A lone trailing element is accepted as an expression without `;`.
    if elements.len() == 1 {
        let statement = PreStmt::Expression {
            value: elements,
            span: elements[0].get_span().clone(),
        };
        return Ok((statement, &elements[1..]));
    }

    if let Some(token) = elements[1].as_token() {
        if token.is_operator("=") {
            return split_assign(elements);
        }
    }

    let (value, rest) = split_run(elements, &elements[0].get_span().start)?;
    let statement = PreStmt::Expression {
        span: span_of(elements, rest),
        value,
    };
    Ok((statement, rest))
}

fn split_declare(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    let target = match elements.get(1) {
        Some(TokenTree::Token(token)) if token.kind == TokenKind::Id => token.value.clone(),
        _ => return Err(unexpected(elements, 1, "expected identifier after `let`")),
    };

    if !elements.get(2).is_some_and(|colon| colon.is_token(TokenKind::TypeColon)) {
        return Err(unexpected(elements, 2, "expected `:` after variable name"));
    }

    let equals = elements
        .iter()
        .skip(3)
        .position(|element| matches!(element, TokenTree::Token(token) if token.is_operator("=")))
        .map(|index| index + 3)
        .ok_or_else(|| unexpected(elements, elements.len(), "expected `=` in declaration"))?;

    let (value, rest) = split_run(&elements[equals + 1..], &elements[equals].get_span().end)?;
    let statement = PreStmt::Declare {
        target,
        type_sig: &elements[3..equals],
        value,
        span: span_of(elements, rest),
    };
    Ok((statement, rest))
}

fn split_if(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    const SHAPE: &str = "expected `if (condition) { ... } else { ... }`";

    let condition = elements
        .get(1)
        .and_then(|element| element.as_group(GroupKind::Paren))
        .ok_or_else(|| unexpected(elements, 1, SHAPE))?;
    let then_body = elements
        .get(2)
        .and_then(|element| element.as_group(GroupKind::Brace))
        .ok_or_else(|| unexpected(elements, 2, SHAPE))?;
    if !elements.get(3).is_some_and(|element| element.is_token(TokenKind::Else)) {
        return Err(unexpected(elements, 3, SHAPE));
    }
    let else_body = elements
        .get(4)
        .and_then(|element| element.as_group(GroupKind::Brace))
        .ok_or_else(|| unexpected(elements, 4, SHAPE))?;

    let rest = &elements[5..];
    let statement = PreStmt::If {
        condition,
        then_body: split_group(then_body)?,
        else_body: split_group(else_body)?,
        span: span_of(elements, rest),
    };
    Ok((statement, rest))
}

fn split_while(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    const SHAPE: &str = "expected `while (condition) { ... }`";

    let condition = elements
        .get(1)
        .and_then(|element| element.as_group(GroupKind::Paren))
        .ok_or_else(|| unexpected(elements, 1, SHAPE))?;
    let body = elements
        .get(2)
        .and_then(|element| element.as_group(GroupKind::Brace))
        .ok_or_else(|| unexpected(elements, 2, SHAPE))?;

    let rest = &elements[3..];
    let statement = PreStmt::While {
        condition,
        body: split_group(body)?,
        span: span_of(elements, rest),
    };
    Ok((statement, rest))
}

fn split_return(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    match elements.get(1) {
        None => Err(Error::new(
            ErrorImpl::MissingSemicolon,
            elements[0].get_span().end.clone(),
        )),
        Some(next) if next.is_token(TokenKind::Semicolon) => {
            let rest = &elements[2..];
            Ok((
                PreStmt::Return {
                    value: None,
                    span: span_of(elements, rest),
                },
                rest,
            ))
        }
        Some(_) => {
            let (value, rest) = split_run(&elements[1..], &elements[0].get_span().end)?;
            Ok((
                PreStmt::Return {
                    value: Some(value),
                    span: span_of(elements, rest),
                },
                rest,
            ))
        }
    }
}

fn split_assign(elements: &[TokenTree]) -> Split<'_, PreStmt<'_>> {
    let target = match &elements[0] {
        TokenTree::Token(token) if token.kind == TokenKind::Id => token.value.clone(),
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    token: other.to_string(),
                },
                other.get_span().start.clone(),
            ))
        }
    };

    let (value, rest) = split_run(&elements[2..], &elements[1].get_span().end)?;
    let statement = PreStmt::Assign {
        target,
        value,
        span: span_of(elements, rest),
    };
    Ok((statement, rest))
}

/// Cuts an expression run off at the first `;`, which is consumed.
fn split_run<'a>(elements: &'a [TokenTree], after: &Position) -> Split<'a, &'a [TokenTree]> {
    match elements
        .iter()
        .position(|element| element.is_token(TokenKind::Semicolon))
    {
        Some(index) => Ok((&elements[..index], &elements[index + 1..])),
        None => {
            let position = elements
                .last()
                .map(|last| last.get_span().end.clone())
                .unwrap_or_else(|| after.clone());
            Err(Error::new(ErrorImpl::MissingSemicolon, position))
        }
    }
}

/// Span from the first element of `elements` to the last one not in `rest`.
fn span_of(elements: &[TokenTree], rest: &[TokenTree]) -> Span {
    let consumed = elements.len() - rest.len();
    let last = &elements[consumed.max(1) - 1];
    Span {
        start: elements[0].get_span().start.clone(),
        end: last.get_span().end.clone(),
    }
}

fn unexpected(elements: &[TokenTree], index: usize, message: &str) -> Error {
    match elements.get(index) {
        Some(element) => Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: element.to_string(),
                message: String::from(message),
            },
            element.get_span().start.clone(),
        ),
        None => {
            let last = &elements[elements.len() - 1];
            Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: render(&elements[elements.len() - 1..]),
                    message: format!("{} before end of block", message),
                },
                last.get_span().end.clone(),
            )
        }
    }
}
