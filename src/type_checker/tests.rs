use crate::{
    ast::types::TypeSignature,
    errors::errors::{Error, ErrorImpl, ErrorKind},
    parse_program,
};

use super::type_checker::{builtin_scope, infer_expr, type_check, TypeChecker};

fn check_source(source: &str) -> Result<(Vec<TypeSignature>, TypeChecker), Error> {
    let program = parse_program(source.to_string(), Some("test.lang".to_string()))?;
    let mut type_checker = builtin_scope();
    let return_types = type_check(&program, &mut type_checker)?;
    Ok((return_types, type_checker))
}

fn check_error(source: &str) -> ErrorImpl {
    check_source(source).unwrap_err().get_error().clone()
}

#[test]
fn test_infer_literals() {
    let program = parse_program("1; true; \"text\";".to_string(), None).unwrap();
    let mut type_checker = builtin_scope();

    let inferred = program
        .body
        .iter()
        .map(|stmt| match stmt {
            crate::ast::statements::Stmt::Expression(stmt) => {
                infer_expr(&mut type_checker, &stmt.expression).unwrap()
            }
            other => panic!("expected an expression statement, got {}", other),
        })
        .collect::<Vec<_>>();

    assert_eq!(
        inferred,
        vec![
            TypeSignature::int(),
            TypeSignature::bool(),
            TypeSignature::string()
        ]
    );
}

#[test]
fn test_declarations_are_bound() {
    let (return_types, type_checker) =
        check_source("let x: Int = 1 + 2; let s: String = \"a\" ++ \"b\";").unwrap();

    assert!(return_types.is_empty());
    assert_eq!(
        type_checker.fetch_variable_type("x"),
        Some(&TypeSignature::int())
    );
    assert_eq!(
        type_checker.fetch_variable_type("s"),
        Some(&TypeSignature::string())
    );
}

#[test]
fn test_undeclared_variable() {
    assert_eq!(
        check_error("y + 1;"),
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string()
        }
    );
    assert_eq!(
        check_error("y = 1;"),
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string()
        }
    );
}

#[test]
fn test_redeclaration() {
    assert_eq!(
        check_error("let x: Int = 1; let x: Int = 2;"),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_shadowing_in_nested_block() {
    let (_, type_checker) = check_source(
        "let x: Int = 1; if (true) { let x: Bool = false; } else { let x: String = \"s\"; }",
    )
    .unwrap();
    assert_eq!(
        type_checker.fetch_variable_type("x"),
        Some(&TypeSignature::int())
    );
}

#[test]
fn test_block_declarations_do_not_leak() {
    assert_eq!(
        check_error("if (true) { let y: Int = 1; } else { } y;"),
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string()
        }
    );
    assert_eq!(
        check_error("while (false) { let y: Int = 1; } y = 2;"),
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string()
        }
    );
}

#[test]
fn test_checker_recovers_environments_after_error() {
    let mut type_checker = builtin_scope();
    let program = parse_program("if (true) { y; } else { }".to_string(), None).unwrap();
    assert!(type_check(&program, &mut type_checker).is_err());
    assert_eq!(type_checker.environments.len(), 1);
}

#[test]
fn test_assignment_type_mismatch() {
    let error = check_source("let x: Int = 1; x = true;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::TypeMatchError {
            expected: "Int".to_string(),
            received: "Bool".to_string()
        }
    );
    assert_eq!(error.get_kind(), ErrorKind::Type);
    assert_eq!(error.get_position().0, 20);
}

#[test]
fn test_declaration_type_mismatch() {
    assert_eq!(
        check_error("let s: String = 1;"),
        ErrorImpl::TypeMatchError {
            expected: "String".to_string(),
            received: "Int".to_string()
        }
    );
}

#[test]
fn test_condition_must_be_bool() {
    assert_eq!(
        check_error("if (1) { } else { }"),
        ErrorImpl::TypeMatchError {
            expected: "Bool".to_string(),
            received: "Int".to_string()
        }
    );
    assert_eq!(
        check_error("while (\"yes\") { }"),
        ErrorImpl::TypeMatchError {
            expected: "Bool".to_string(),
            received: "String".to_string()
        }
    );
}

#[test]
fn test_operator_signatures() {
    assert!(check_source("let b: Bool = 1 < 2 && !false || 3 >= 4;").is_ok());
    assert!(check_source("let n: Int = -(1 + 2) * 3 % 4 / 5;").is_ok());

    assert_eq!(
        check_error("1 + true;"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "Int".to_string(),
            received: "Bool".to_string()
        }
    );
    assert_eq!(
        check_error("!1;"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "Bool".to_string(),
            received: "Int".to_string()
        }
    );
    assert_eq!(
        check_error("\"a\" ++ 1;"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "String".to_string(),
            received: "Int".to_string()
        }
    );
}

#[test]
fn test_equality() {
    assert!(check_source("let b: Bool = 1 == 2;").is_ok());
    assert!(check_source("let b: Bool = \"a\" != \"b\";").is_ok());
    assert!(check_source("let b: Bool = true == false;").is_ok());
    assert_eq!(
        check_error("1 == true;"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "Int".to_string(),
            received: "Bool".to_string()
        }
    );
}

#[test]
fn test_equality_over_functions() {
    let source = "let f: (Int) -> Int = (n) => { return n; }; \
                  let g: (Int) -> Int = f; \
                  let same: Bool = f == g;";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_return_types_unify() {
    let (return_types, _) =
        check_source("if (true) { return 1; } else { return 2; }").unwrap();
    assert_eq!(return_types, vec![TypeSignature::int()]);

    let (return_types, _) = check_source("return;").unwrap();
    assert_eq!(return_types, vec![TypeSignature::void()]);
}

#[test]
fn test_multiple_return_types() {
    assert_eq!(
        check_error("if (true) { return 1; } else { return false; }"),
        ErrorImpl::MultipleReturnTypes {
            types: vec!["Int".to_string(), "Bool".to_string()]
        }
    );
    assert!(matches!(
        check_error("return 1; return \"s\";"),
        ErrorImpl::MultipleReturnTypes { .. }
    ));
}

#[test]
fn test_function_branches_return_different_types() {
    let error = check_source(
        "let f: (Bool) -> Int = (b) => { if (b) { return 1; } else { return false; } };",
    )
    .unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::MultipleReturnTypes {
            types: vec!["Int".to_string(), "Bool".to_string()]
        }
    );
    assert_eq!(error.get_kind(), ErrorKind::Type);

    let (_, type_checker) = check_source(
        "let f: (Bool) -> Int = (b) => { if (b) { return 1; } else { return 2; } };",
    )
    .unwrap();
    assert_eq!(
        type_checker.fetch_variable_type("f").map(|ty| ty.to_string()),
        Some("(Bool) -> Int".to_string())
    );
}

#[test]
fn test_call_arity() {
    let source = "let f: (Int) -> Int = (n) => { return n; };";

    assert_eq!(
        check_error(&format!("{} f(1, 2);", source)),
        ErrorImpl::UnexpectedArguments {
            expected: 1,
            received: 2
        }
    );
    assert_eq!(
        check_error(&format!("{} f();", source)),
        ErrorImpl::MissingArguments {
            expected: 1,
            received: 0
        }
    );
}

#[test]
fn test_call_argument_type() {
    assert_eq!(
        check_error("let f: (Int) -> Int = (n) => { return n; }; f(true);"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "Int".to_string(),
            received: "Bool".to_string()
        }
    );
}

#[test]
fn test_call_result_type() {
    let (_, type_checker) = check_source(
        "let f: (Int, Int) -> Bool = (a, b) => { return a < b; }; let r: Bool = f(1, 2);",
    )
    .unwrap();
    assert_eq!(
        type_checker.fetch_variable_type("r"),
        Some(&TypeSignature::bool())
    );
}

#[test]
fn test_not_callable() {
    assert_eq!(
        check_error("let x: Int = 1; x(2);"),
        ErrorImpl::NotCallable {
            type_: "Int".to_string()
        }
    );
}

#[test]
fn test_cannot_infer_function() {
    assert_eq!(
        check_error("(n) => { return n; };"),
        ErrorImpl::CannotInferFunction
    );
    assert_eq!(
        check_error("return () => { };"),
        ErrorImpl::CannotInferFunction
    );
}

#[test]
fn test_function_literal_against_non_function() {
    assert!(matches!(
        check_error("let x: Int = (n) => { return n; };"),
        ErrorImpl::TypeMatchError { .. }
    ));
}

#[test]
fn test_parameter_count_mismatch() {
    assert_eq!(
        check_error("let f: (Int, Int) -> Int = (n) => { return n; };"),
        ErrorImpl::ParameterCountMismatch {
            expected: 2,
            received: 1
        }
    );
}

#[test]
fn test_duplicate_parameters() {
    assert_eq!(
        check_error("let f: (Int, Int) -> Int = (n, n) => { return n; };"),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "n".to_string()
        }
    );
}

#[test]
fn test_return_type_mismatch() {
    assert_eq!(
        check_error("let f: (Int) -> Bool = (n) => { return n; };"),
        ErrorImpl::ReturnTypeMismatch {
            expected: "Bool".to_string(),
            received: "Int".to_string()
        }
    );
}

#[test]
fn test_function_without_return() {
    assert!(check_source("let f: (Int) -> Int = (n) => { n + 1; };").is_ok());
}

#[test]
fn test_parameters_do_not_leak() {
    assert_eq!(
        check_error("let f: (Int) -> Int = (n) => { return n; }; n;"),
        ErrorImpl::VariableNotDeclared {
            variable: "n".to_string()
        }
    );
}

#[test]
fn test_higher_order_function() {
    let source = "let apply: ((Int) -> Int, Int) -> Int = (f, x) => { return f(x); }; \
                  let r: Int = apply((n) => { return n * 2; }, 21);";
    let (_, type_checker) = check_source(source).unwrap();
    assert_eq!(
        type_checker.fetch_variable_type("apply").map(|ty| ty.to_string()),
        Some("((Int) -> Int, Int) -> Int".to_string())
    );
}

#[test]
fn test_closure_captures_outer_scope() {
    let source = "let k: Int = 10; let add: (Int) -> Int = (n) => { return n + k; };";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_declaration_not_visible_in_own_initializer() {
    let source = "let f: (Int) -> Int = (n) => { if (n < 1) { return 1; } else { return n * f(n - 1); } };";
    assert_eq!(
        check_error(source),
        ErrorImpl::VariableNotDeclared {
            variable: "f".to_string()
        }
    );
}
