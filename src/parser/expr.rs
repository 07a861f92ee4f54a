use num_bigint::BigInt;

use crate::{
    ast::{
        expressions::{
            BooleanExpr, CallExpr, Callee, Expr, FunctionExpr, NumberExpr, StringExpr, SymbolExpr,
        },
        operators::Operator,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    brackets::{render, Group, GroupKind, TokenTree},
    lookups::{binding_power, BindingPower, BINARY_LOOKUP, PREFIX_LOOKUP},
    parser::Parser,
    split::split_group,
};

/// Splits a group's children on top-level commas. No children means no segments.
pub fn split_commas(elements: &[TokenTree]) -> Vec<&[TokenTree]> {
    if elements.is_empty() {
        return vec![];
    }
    elements
        .split(|element| element.is_token(TokenKind::Comma))
        .collect()
}

fn span_between(first: &Span, last: &Span) -> Span {
    Span {
        start: first.start.clone(),
        end: last.end.clone(),
    }
}

impl Parser {
    /// Parses a slice of tokens and groups as one expression.
    ///
    /// `origin` locates the error when the slice is empty.
    pub fn parse_expr(&mut self, elements: &[TokenTree], origin: &Position) -> Result<Expr, Error> {
        let at = elements
            .first()
            .map(|element| element.get_span().start.clone())
            .unwrap_or_else(|| origin.clone());

        self.nested(&at, |parser| {
            if elements.is_empty() {
                return Err(Error::new(ErrorImpl::EmptyExpression, origin.clone()));
            }

            if elements.len() == 1 {
                return parser.parse_primary_expr(&elements[0]);
            }

            if let TokenTree::Token(token) = &elements[0] {
                if token.kind == TokenKind::Operator {
                    return parser.parse_prefix_expr(token, &elements[1..]);
                }
            }

            if elements.len() == 2 {
                let callable = elements[0].is_token(TokenKind::Id)
                    || elements[0].as_group(GroupKind::Paren).is_some();
                if let (true, Some(arguments)) = (callable, elements[1].as_group(GroupKind::Paren)) {
                    return parser.parse_call_expr(&elements[0], arguments);
                }
            }

            if elements.len() == 3 && elements[1].is_token(TokenKind::LambdaArrow) {
                if let (Some(parameters), Some(body)) = (
                    elements[0].as_group(GroupKind::Paren),
                    elements[2].as_group(GroupKind::Brace),
                ) {
                    return parser.parse_function_expr(parameters, body);
                }
            }

            parser.parse_binary_expr(elements)
        })
    }

    fn parse_primary_expr(&mut self, element: &TokenTree) -> Result<Expr, Error> {
        let token = match element {
            TokenTree::Group(group) if group.kind == GroupKind::Paren => {
                return self.parse_expr(&group.children, &group.span.start);
            }
            TokenTree::Group(_) => return Err(unrecognised(std::slice::from_ref(element))),
            TokenTree::Token(token) => token,
        };

        let span = token.span.clone();
        match token.kind {
            TokenKind::Id => Ok(Expr::Symbol(SymbolExpr {
                value: token.value.clone(),
                span,
            })),
            TokenKind::Boolean => Ok(Expr::Boolean(BooleanExpr {
                value: token.value == "true",
                span,
            })),
            TokenKind::Number => match token.value.parse::<BigInt>() {
                Ok(value) => Ok(Expr::Number(NumberExpr { value, span })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    span.start,
                )),
            },
            TokenKind::String => {
                let inner = &token.value[1..token.value.len() - 1];
                Ok(Expr::String(StringExpr {
                    value: inner.replace("\\\"", "\""),
                    span,
                }))
            }
            _ => Err(unrecognised(std::slice::from_ref(element))),
        }
    }

    fn parse_prefix_expr(&mut self, operator_token: &Token, rest: &[TokenTree]) -> Result<Expr, Error> {
        let operator = *PREFIX_LOOKUP
            .get(operator_token.value.as_str())
            .ok_or_else(|| unknown_operator(operator_token))?;

        let operand = self.parse_expr(rest, &operator_token.span.end)?;

        Ok(Expr::Call(CallExpr {
            span: span_between(&operator_token.span, operand.get_span()),
            callee: Callee::Operator(operator),
            arguments: vec![operand],
        }))
    }

    fn parse_call_expr(&mut self, callee: &TokenTree, arguments: &Group) -> Result<Expr, Error> {
        let callee_expr = self.parse_primary_expr(callee)?;

        let arguments_expr = split_commas(&arguments.children)
            .into_iter()
            .map(|argument| self.parse_expr(argument, &arguments.span.start))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expr::Call(CallExpr {
            span: span_between(callee.get_span(), &arguments.span),
            callee: Callee::Expr(Box::new(callee_expr)),
            arguments: arguments_expr,
        }))
    }

    fn parse_function_expr(&mut self, parameters: &Group, body: &Group) -> Result<Expr, Error> {
        let mut names = vec![];
        for parameter in split_commas(&parameters.children) {
            match parameter {
                [TokenTree::Token(token)] if token.kind == TokenKind::Id => {
                    names.push(token.value.clone());
                }
                _ => {
                    let position = parameter
                        .first()
                        .map(|element| element.get_span().start.clone())
                        .unwrap_or_else(|| parameters.span.start.clone());
                    let token = if parameter.is_empty() {
                        String::from(",")
                    } else {
                        render(parameter)
                    };
                    return Err(Error::new(ErrorImpl::InvalidParameterList { token }, position));
                }
            }
        }

        let pre_body = split_group(body)?;
        let body_program = self.parse_program(&pre_body)?;

        Ok(Expr::Function(FunctionExpr {
            parameters: names,
            body: body_program,
            span: span_between(&parameters.span, &body.span),
        }))
    }

    /// Splits at every top-level operator of the lowest precedence and folds
    /// the operands from the left, so chains associate to the left and a long
    /// chain costs one nesting level. An operator directly after another
    /// operator is a prefix operator and never a split point.
    fn parse_binary_expr(&mut self, elements: &[TokenTree]) -> Result<Expr, Error> {
        let mut candidates: Vec<(usize, Operator, BindingPower)> = vec![];
        let mut unknown: Option<&Token> = None;

        for (index, element) in elements.iter().enumerate().skip(1) {
            let TokenTree::Token(token) = element else {
                continue;
            };
            if token.kind != TokenKind::Operator || elements[index - 1].is_token(TokenKind::Operator) {
                continue;
            }

            let Some(operator) = BINARY_LOOKUP.get(token.value.as_str()) else {
                unknown = unknown.or(Some(token));
                continue;
            };
            if let Some(power) = binding_power(*operator) {
                candidates.push((index, *operator, power));
            }
        }

        let Some(lowest) = candidates.iter().map(|(_, _, power)| *power).min() else {
            return Err(match unknown {
                Some(token) => unknown_operator(token),
                None => unrecognised(elements),
            });
        };
        let splits = candidates
            .into_iter()
            .filter(|(_, _, power)| *power == lowest)
            .map(|(index, operator, _)| (index, operator))
            .collect::<Vec<_>>();

        let mut expr = self.parse_expr(&elements[..splits[0].0], &elements[0].get_span().start)?;
        for (position, (index, operator)) in splits.iter().enumerate() {
            let end = splits
                .get(position + 1)
                .map_or(elements.len(), |(next, _)| *next);
            let right = self.parse_expr(&elements[index + 1..end], &elements[*index].get_span().end)?;

            expr = Expr::Call(CallExpr {
                span: span_between(expr.get_span(), right.get_span()),
                callee: Callee::Operator(*operator),
                arguments: vec![expr, right],
            });
        }

        Ok(expr)
    }
}

fn unrecognised(elements: &[TokenTree]) -> Error {
    Error::new(
        ErrorImpl::UnrecognisedExpression {
            expression: render(elements),
        },
        elements[0].get_span().start.clone(),
    )
}

fn unknown_operator(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnknownOperator {
            operator: token.value.clone(),
        },
        token.span.start.clone(),
    )
}
