//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_zero(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.lang".to_string())))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "else".to_string(),
            message: "expected `while (condition) { ... }`".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_bracket_error_kinds() {
    let mismatched = at_zero(ErrorImpl::MismatchedBracket {
        expected: "}".to_string(),
        found: ")".to_string(),
    });
    let unclosed = at_zero(ErrorImpl::UnclosedBracket {
        bracket: "(".to_string(),
    });

    assert_eq!(mismatched.get_kind(), ErrorKind::Bracket);
    assert_eq!(unclosed.get_kind(), ErrorKind::Bracket);
    assert_eq!(unclosed.get_error_name(), "UnclosedBracket");
}

#[test]
fn test_statement_split_error_kinds() {
    assert_eq!(at_zero(ErrorImpl::MissingSemicolon).get_kind(), ErrorKind::StatementSplit);
    assert_eq!(
        at_zero(ErrorImpl::InvalidAssignmentTarget {
            token: "1".to_string()
        })
        .get_kind(),
        ErrorKind::StatementSplit
    );
}

#[test]
fn test_expression_error_kinds() {
    assert_eq!(at_zero(ErrorImpl::EmptyExpression).get_kind(), ErrorKind::ExprParse);
    assert_eq!(
        at_zero(ErrorImpl::InvalidParameterList {
            token: "1".to_string()
        })
        .get_kind(),
        ErrorKind::ExprParse
    );
    assert_eq!(
        at_zero(ErrorImpl::InvalidTypeSignature {
            signature: "Int Int".to_string()
        })
        .get_kind(),
        ErrorKind::TypeSig
    );
}

#[test]
fn test_type_mismatch_error() {
    let error = at_zero(ErrorImpl::TypeMatchError {
        expected: "Int".to_string(),
        received: "Bool".to_string(),
    });

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.get_kind(), ErrorKind::Type);
    assert_eq!(error.get_tip().to_string(), "Expected type `Int`, received `Bool`");
}

#[test]
fn test_variable_not_declared_error() {
    let error = at_zero(ErrorImpl::VariableNotDeclared {
        variable: "foo".to_string(),
    });

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.to_string(), "variable \"foo\" not declared");
}

#[test]
fn test_multiple_return_types_tip() {
    let error = at_zero(ErrorImpl::MultipleReturnTypes {
        types: vec!["Int".to_string(), "Bool".to_string()],
    });

    assert_eq!(error.get_kind(), ErrorKind::Type);
    assert_eq!(error.get_tip().to_string(), "Block returns several types: Int, Bool");
}

#[test]
fn test_nesting_error_kind() {
    let error = at_zero(ErrorImpl::NestingTooDeep { limit: 4 });

    assert_eq!(error.get_kind(), ErrorKind::Nesting);
    assert_eq!(error.to_string(), "nesting deeper than 4 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "Brackets, nested expressions and blocks may be at most 4 levels deep"
    );
}

#[test]
fn test_error_tip_none() {
    let error = at_zero(ErrorImpl::UnrecognisedToken {
        token: "#".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = at_zero(ErrorImpl::MissingSemicolon);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Statements must end with `;`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_arity_errors() {
    let too_many = at_zero(ErrorImpl::UnexpectedArguments {
        expected: 1,
        received: 2,
    });
    let too_few = at_zero(ErrorImpl::MissingArguments {
        expected: 3,
        received: 1,
    });

    assert_eq!(too_many.get_error_name(), "UnexpectedArguments");
    assert_eq!(too_few.get_error_name(), "MissingArguments");
    assert_eq!(too_many.get_tip().to_string(), "Expected 1 arguments, received 2");
}
