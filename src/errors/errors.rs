use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Bracket,
    StatementSplit,
    ExprParse,
    TypeSig,
    Type,
    Nesting,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            ErrorImpl::MismatchedBracket { .. } | ErrorImpl::UnclosedBracket { .. } => {
                ErrorKind::Bracket
            }
            ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::MissingSemicolon
            | ErrorImpl::InvalidAssignmentTarget { .. } => ErrorKind::StatementSplit,
            ErrorImpl::EmptyExpression
            | ErrorImpl::UnrecognisedExpression { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnknownOperator { .. }
            | ErrorImpl::InvalidParameterList { .. } => ErrorKind::ExprParse,
            ErrorImpl::InvalidTypeSignature { .. } => ErrorKind::TypeSig,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::UnexpectedArguments { .. }
            | ErrorImpl::MissingArguments { .. }
            | ErrorImpl::ArgumentTypeMatchError { .. }
            | ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::NotCallable { .. }
            | ErrorImpl::CannotInferFunction
            | ErrorImpl::ParameterCountMismatch { .. }
            | ErrorImpl::MultipleReturnTypes { .. }
            | ErrorImpl::ReturnTypeMismatch { .. } => ErrorKind::Type,
            ErrorImpl::NestingTooDeep { .. } => ErrorKind::Nesting,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MismatchedBracket { .. } => "MismatchedBracket",
            ErrorImpl::UnclosedBracket { .. } => "UnclosedBracket",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::MissingSemicolon => "MissingSemicolon",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::UnrecognisedExpression { .. } => "UnrecognisedExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::InvalidParameterList { .. } => "InvalidParameterList",
            ErrorImpl::InvalidTypeSignature { .. } => "InvalidTypeSignature",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::CannotInferFunction => "CannotInferFunction",
            ErrorImpl::ParameterCountMismatch { .. } => "ParameterCountMismatch",
            ErrorImpl::MultipleReturnTypes { .. } => "MultipleReturnTypes",
            ErrorImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MismatchedBracket { expected, found } => ErrorTip::Suggestion(format!(
                "Found `{}` while `{}` was still open",
                found, expected
            )),
            ErrorImpl::UnclosedBracket { bracket } => {
                ErrorTip::Suggestion(format!("`{}` is never closed", bracket))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::MissingSemicolon => {
                ErrorTip::Suggestion(String::from("Statements must end with `;`"))
            }
            ErrorImpl::InvalidAssignmentTarget { token } => ErrorTip::Suggestion(format!(
                "Only identifiers can be assigned to, found `{}`",
                token
            )),
            ErrorImpl::EmptyExpression => {
                ErrorTip::Suggestion(String::from("An expression was expected here"))
            }
            ErrorImpl::UnrecognisedExpression { expression } => {
                ErrorTip::Suggestion(format!("Could not parse `{}` as an expression", expression))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnknownOperator { operator } => {
                ErrorTip::Suggestion(format!("`{}` is not a known operator here", operator))
            }
            ErrorImpl::InvalidParameterList { token } => ErrorTip::Suggestion(format!(
                "Function parameters must be identifiers separated by commas, found `{}`",
                token
            )),
            ErrorImpl::InvalidTypeSignature { signature } => ErrorTip::Suggestion(format!(
                "`{}` is not a type, function types must be written `(A, B) -> C`",
                signature
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::NotCallable { type_ } => {
                ErrorTip::Suggestion(format!("Values of type `{}` cannot be called", type_))
            }
            ErrorImpl::CannotInferFunction => ErrorTip::Suggestion(String::from(
                "Function literals need a declared function type",
            )),
            ErrorImpl::ParameterCountMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Declared type takes {} parameters, function literal takes {}",
                    expected, received
                ))
            }
            ErrorImpl::MultipleReturnTypes { types } => {
                ErrorTip::Suggestion(format!("Block returns several types: {}", types.join(", ")))
            }
            ErrorImpl::ReturnTypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Function is declared to return `{}` but returns `{}`",
                expected, received
            )),
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!(
                    "Brackets, nested expressions and blocks may be at most {} levels deep",
                    limit
                ))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token at: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("mismatched brackets: expected {expected:?}, found {found:?}")]
    MismatchedBracket { expected: String, found: String },
    #[error("unclosed bracket {bracket:?}")]
    UnclosedBracket { bracket: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("missing semicolon")]
    MissingSemicolon,
    #[error("invalid assignment target: {token:?}")]
    InvalidAssignmentTarget { token: String },
    #[error("empty expression")]
    EmptyExpression,
    #[error("unrecognised expression: {expression:?}")]
    UnrecognisedExpression { expression: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown operator: {operator:?}")]
    UnknownOperator { operator: String },
    #[error("invalid parameter list near {token:?}")]
    InvalidParameterList { token: String },
    #[error("invalid type signature: {signature:?}")]
    InvalidTypeSignature { signature: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("argument types do not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMatchError { expected: String, received: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("type {type_} is not callable")]
    NotCallable { type_: String },
    #[error("cannot infer the type of a function literal")]
    CannotInferFunction,
    #[error("parameter count mismatch: expected {expected:?}, received {received:?}")]
    ParameterCountMismatch { expected: usize, received: usize },
    #[error("multiple return types: {types:?}")]
    MultipleReturnTypes { types: Vec<String> },
    #[error("return type mismatch: expected {expected:?}, received {received:?}")]
    ReturnTypeMismatch { expected: String, received: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
