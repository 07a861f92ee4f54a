use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        expressions::{CallExpr, Callee, Expr, FunctionExpr},
        operators::Operator,
        statements::{Program, Stmt},
        types::{dedup_types, type_equal, FunctionType, TypeSignature},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// One scope frame: the names declared directly in one program.
#[derive(Debug)]
pub struct Environment {
    pub variable_lookup: HashMap<String, TypeSignature>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: TypeSignature,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&TypeSignature> {
        self.variable_lookup.get(variable_name)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// How a built-in operator is typed.
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorSignature {
    Fixed(FunctionType),
    /// `T, T -> Bool` for any `T`, function types included.
    Equality,
}

/// The scope chain. Environments form a stack: each one's parent is the one
/// below it, entering a nested program pushes a frame and leaving pops it.
#[derive(Debug)]
pub struct TypeChecker {
    pub built_in_operators: HashMap<Operator, OperatorSignature>,
    pub environments: Vec<Environment>,
}

impl TypeChecker {
    /// A checker with a single, empty root environment and no operators.
    pub fn new() -> Self {
        TypeChecker {
            built_in_operators: HashMap::new(),
            environments: vec![Environment::new()],
        }
    }

    pub fn add_environment(&mut self) {
        self.environments.push(Environment::new());
    }

    /// Runs `check` inside a fresh child environment that is dropped afterwards.
    pub fn with_environment<T>(
        &mut self,
        check: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.add_environment();
        let result = check(self);
        self.environments.pop();
        result
    }

    pub fn get_current_environment(&mut self) -> &mut Environment {
        let last = self.environments.len() - 1;
        &mut self.environments[last]
    }

    /// Looks `variable` up from the innermost environment outwards.
    pub fn fetch_variable_type(&self, variable: &str) -> Option<&TypeSignature> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(variable))
    }

    pub fn operator_signature(&self, operator: Operator) -> Option<&OperatorSignature> {
        self.built_in_operators.get(&operator)
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// A checker whose root scope knows every built-in operator.
pub fn builtin_scope() -> TypeChecker {
    let (boolean, integer, string) = (
        TypeSignature::bool(),
        TypeSignature::int(),
        TypeSignature::string(),
    );
    let fixed = |parameters: Vec<&TypeSignature>, return_type: &TypeSignature| {
        OperatorSignature::Fixed(FunctionType {
            parameters: parameters.into_iter().cloned().collect(),
            return_type: Box::new(return_type.clone()),
        })
    };

    let mut type_checker = TypeChecker::new();
    let operators = &mut type_checker.built_in_operators;

    operators.insert(Operator::Or, fixed(vec![&boolean, &boolean], &boolean));
    operators.insert(Operator::And, fixed(vec![&boolean, &boolean], &boolean));
    operators.insert(Operator::Equals, OperatorSignature::Equality);
    operators.insert(Operator::NotEquals, OperatorSignature::Equality);
    for operator in [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
    ] {
        operators.insert(operator, fixed(vec![&integer, &integer], &integer));
    }
    for operator in [
        Operator::Less,
        Operator::Greater,
        Operator::LessEquals,
        Operator::GreaterEquals,
    ] {
        operators.insert(operator, fixed(vec![&integer, &integer], &boolean));
    }
    operators.insert(Operator::Concat, fixed(vec![&string, &string], &string));
    operators.insert(Operator::Not, fixed(vec![&boolean], &boolean));
    operators.insert(Operator::Negate, fixed(vec![&integer], &integer));

    type_checker
}

/// Infers the type of `expr` bottom-up.
pub fn infer_expr(type_checker: &mut TypeChecker, expr: &Expr) -> Result<TypeSignature, Error> {
    match expr {
        Expr::Number(_) => Ok(TypeSignature::int()),
        Expr::Boolean(_) => Ok(TypeSignature::bool()),
        Expr::String(_) => Ok(TypeSignature::string()),
        Expr::Symbol(symbol) => type_checker
            .fetch_variable_type(&symbol.value)
            .cloned()
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: symbol.value.clone(),
                    },
                    symbol.span.start.clone(),
                )
            }),
        Expr::Call(call) => infer_call(type_checker, call),
        Expr::Function(function) => Err(Error::new(
            ErrorImpl::CannotInferFunction,
            function.span.start.clone(),
        )),
    }
}

/// Checks `expr` against `expected` and returns the agreed type.
pub fn check_expr(
    type_checker: &mut TypeChecker,
    expr: &Expr,
    expected: &TypeSignature,
) -> Result<TypeSignature, Error> {
    if let Expr::Function(function) = expr {
        return check_function(type_checker, function, expected);
    }

    let inferred = infer_expr(type_checker, expr)?;
    if type_equal(&inferred, expected) {
        Ok(inferred)
    } else {
        Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: expected.to_string(),
                received: inferred.to_string(),
            },
            expr.get_span().start.clone(),
        ))
    }
}

fn infer_call(type_checker: &mut TypeChecker, call: &CallExpr) -> Result<TypeSignature, Error> {
    let function = match &call.callee {
        Callee::Operator(operator) => match type_checker.operator_signature(*operator).cloned() {
            Some(OperatorSignature::Fixed(function)) => function,
            Some(OperatorSignature::Equality) => {
                check_arity(call, 2)?;
                let operand = infer_expr(type_checker, &call.arguments[0])?;
                check_argument(type_checker, &call.arguments[1], &operand)?;
                return Ok(TypeSignature::bool());
            }
            None => {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: operator.name(),
                    },
                    call.span.start.clone(),
                ))
            }
        },
        Callee::Expr(callee) => match infer_expr(type_checker, callee)? {
            TypeSignature::Function(function) => function,
            other => {
                return Err(Error::new(
                    ErrorImpl::NotCallable {
                        type_: other.to_string(),
                    },
                    callee.get_span().start.clone(),
                ))
            }
        },
    };

    check_arity(call, function.parameters.len())?;
    for (argument, parameter) in call.arguments.iter().zip(function.parameters.iter()) {
        check_argument(type_checker, argument, parameter)?;
    }

    Ok(*function.return_type)
}

fn check_arity(call: &CallExpr, expected: usize) -> Result<(), Error> {
    let received = call.arguments.len();

    if received > expected {
        Err(Error::new(
            ErrorImpl::UnexpectedArguments { expected, received },
            call.arguments[expected].get_span().start.clone(),
        ))
    } else if received < expected {
        Err(Error::new(
            ErrorImpl::MissingArguments { expected, received },
            call.span.end.clone(),
        ))
    } else {
        Ok(())
    }
}

fn check_argument(
    type_checker: &mut TypeChecker,
    argument: &Expr,
    parameter: &TypeSignature,
) -> Result<(), Error> {
    if let Expr::Function(function) = argument {
        check_function(type_checker, function, parameter)?;
        return Ok(());
    }

    let received = infer_expr(type_checker, argument)?;
    if type_equal(&received, parameter) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorImpl::ArgumentTypeMatchError {
                expected: parameter.to_string(),
                received: received.to_string(),
            },
            argument.get_span().start.clone(),
        ))
    }
}

/// Parameters and body share one new environment.
fn check_function(
    type_checker: &mut TypeChecker,
    function: &FunctionExpr,
    expected: &TypeSignature,
) -> Result<TypeSignature, Error> {
    let Some(function_type) = expected.as_function() else {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: expected.to_string(),
                received: format!("function of {} parameters", function.parameters.len()),
            },
            function.span.start.clone(),
        ));
    };

    if function_type.parameters.len() != function.parameters.len() {
        return Err(Error::new(
            ErrorImpl::ParameterCountMismatch {
                expected: function_type.parameters.len(),
                received: function.parameters.len(),
            },
            function.span.start.clone(),
        ));
    }

    let return_types = type_checker.with_environment(|type_checker| {
        for (name, parameter) in function.parameters.iter().zip(function_type.parameters.iter()) {
            type_checker.get_current_environment().declare_variable(
                name.clone(),
                parameter.clone(),
                function.span.start.clone(),
            )?;
        }
        type_check_program(type_checker, &function.body)
    })?;

    if let Some(returned) = return_types.first() {
        if !type_equal(returned, &function_type.return_type) {
            return Err(Error::new(
                ErrorImpl::ReturnTypeMismatch {
                    expected: function_type.return_type.to_string(),
                    received: returned.to_string(),
                },
                function.body.span.start.clone(),
            ));
        }
    }

    Ok(expected.clone())
}

/// Checks one statement in the current environment and returns the types it
/// may return.
pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    stmt: &Stmt,
) -> Result<Vec<TypeSignature>, Error> {
    trace!(statement = stmt.get_stmt_type(), "type checking statement");

    match stmt {
        Stmt::Declare(declare) => {
            if type_checker
                .get_current_environment()
                .get_variable(&declare.identifier)
                .is_some()
            {
                return Err(Error::new(
                    ErrorImpl::VariableAlreadyDeclared {
                        variable: declare.identifier.clone(),
                    },
                    declare.span.start.clone(),
                ));
            }

            check_expr(type_checker, &declare.value, &declare.type_signature)?;
            type_checker.get_current_environment().declare_variable(
                declare.identifier.clone(),
                declare.type_signature.clone(),
                declare.span.start.clone(),
            )?;
            Ok(vec![])
        }
        Stmt::Assign(assign) => {
            let bound = type_checker
                .fetch_variable_type(&assign.identifier)
                .cloned()
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: assign.identifier.clone(),
                        },
                        assign.span.start.clone(),
                    )
                })?;

            check_expr(type_checker, &assign.value, &bound)?;
            Ok(vec![])
        }
        Stmt::If(if_stmt) => {
            check_expr(type_checker, &if_stmt.condition, &TypeSignature::bool())?;
            let mut return_types = type_checker
                .with_environment(|type_checker| type_check_program(type_checker, &if_stmt.then_body))?;
            return_types.extend(
                type_checker
                    .with_environment(|type_checker| type_check_program(type_checker, &if_stmt.else_body))?,
            );
            Ok(dedup_types(return_types))
        }
        Stmt::While(while_stmt) => {
            check_expr(type_checker, &while_stmt.condition, &TypeSignature::bool())?;
            type_checker.with_environment(|type_checker| type_check_program(type_checker, &while_stmt.body))
        }
        Stmt::Return(return_stmt) => match &return_stmt.value {
            Some(value) => Ok(vec![infer_expr(type_checker, value)?]),
            None => Ok(vec![TypeSignature::void()]),
        },
        Stmt::Expression(expression) => {
            infer_expr(type_checker, &expression.expression)?;
            Ok(vec![])
        }
    }
}

/// Checks every statement of `program` in the current environment. At most
/// one distinct return type may surface from it.
pub fn type_check_program(
    type_checker: &mut TypeChecker,
    program: &Program,
) -> Result<Vec<TypeSignature>, Error> {
    let mut return_types = vec![];
    for stmt in &program.body {
        return_types.extend(type_check_stmt(type_checker, stmt)?);
    }

    let return_types = dedup_types(return_types);
    if return_types.len() > 1 {
        return Err(Error::new(
            ErrorImpl::MultipleReturnTypes {
                types: return_types.iter().map(|ty| ty.to_string()).collect(),
            },
            program.span.start.clone(),
        ));
    }

    Ok(return_types)
}

/// Type checks a whole program in the checker's current environment, which
/// keeps the top-level bindings afterwards.
pub fn type_check(
    program: &Program,
    type_checker: &mut TypeChecker,
) -> Result<Vec<TypeSignature>, Error> {
    let return_types = type_check_program(type_checker, program)?;
    debug!(
        bindings = type_checker.get_current_environment().variable_lookup.len(),
        returns = return_types.len(),
        "type checked program"
    );
    Ok(return_types)
}
