use std::fmt::Display;

use num_bigint::BigInt;

use crate::Span;

use super::{operators::Operator, statements::Program};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Boolean(BooleanExpr),
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Call(CallExpr),
    Function(FunctionExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Boolean(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
        }
    }
}

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

/// Integer literals are arbitrary precision.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: BigInt,
    pub span: Span,
}

/// The unquoted, unescaped contents of a string literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Symbol Expression
/// A reference to a variable or function by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    Operator(Operator),
    Expr(Box<Expr>),
}

/// Call Expression
/// Both calls to user functions and operator applications.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Callee,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Function Expression
/// A lambda `(a, b) => { ... }`. Parameter types come from the expected
/// type it is checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<String>,
    pub body: Program,
    pub span: Span,
}

impl Display for Callee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callee::Operator(operator) => write!(f, "{}", operator),
            Callee::Expr(expr) => match expr.as_ref() {
                Expr::Symbol(_) => write!(f, "{}", expr),
                _ => write!(f, "({})", expr),
            },
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Boolean(expr) => write!(f, "{}", expr.value),
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::String(expr) => write!(f, "{:?}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
            Expr::Call(expr) => {
                let arguments = expr
                    .arguments
                    .iter()
                    .map(|argument| argument.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", expr.callee, arguments)
            }
            Expr::Function(expr) => {
                write!(f, "({}) => {{ {} }}", expr.parameters.join(", "), expr.body)
            }
        }
    }
}
