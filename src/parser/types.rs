//! Type signature parsing.
//!
//! A signature is either a single type name or the arrow form
//! `(A, B) -> R`. Function types must be parenthesized to be used as
//! parameters, and a parenthesized signature is the signature itself, so
//! `(Int)` and `((Int) -> Int)` are accepted.

use crate::{
    ast::types::TypeSignature,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    brackets::{render, GroupKind, TokenTree},
    expr::split_commas,
    parser::Parser,
};

impl Parser {
    /// Parses the raw slice of a declaration's type signature.
    pub fn parse_type_sig(
        &mut self,
        elements: &[TokenTree],
        origin: &Position,
    ) -> Result<TypeSignature, Error> {
        let at = elements
            .first()
            .map(|element| element.get_span().start.clone())
            .unwrap_or_else(|| origin.clone());

        self.nested(&at, |parser| match elements {
            [TokenTree::Token(token)] if token.kind == TokenKind::Type => {
                Ok(TypeSignature::Name(token.value.clone()))
            }
            [TokenTree::Group(group)] if group.kind == GroupKind::Paren => {
                parser.parse_type_sig(&group.children, &group.span.start)
            }
            [TokenTree::Group(group), arrow, return_type @ ..]
                if group.kind == GroupKind::Paren
                    && arrow.is_token(TokenKind::TypeArrow)
                    && !return_type.is_empty() =>
            {
                let parameters = split_commas(&group.children)
                    .into_iter()
                    .map(|parameter| parser.parse_type_sig(parameter, &group.span.start))
                    .collect::<Result<Vec<_>, _>>()?;
                let return_type = parser.parse_type_sig(return_type, &arrow.get_span().end)?;

                Ok(TypeSignature::function(parameters, return_type))
            }
            _ => Err(Error::new(
                ErrorImpl::InvalidTypeSignature {
                    signature: render(elements),
                },
                at.clone(),
            )),
        })
    }
}
