use std::fmt::Display;

use crate::Span;

use super::{expressions::Expr, types::TypeSignature};

/// An ordered sequence of statements: a whole source file, a branch, a loop
/// body or a function body.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare(DeclareStmt),
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Declare(stmt) => &stmt.span,
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }

    pub fn get_stmt_type(&self) -> &'static str {
        match self {
            Stmt::Declare(_) => "declare",
            Stmt::Assign(_) => "assign",
            Stmt::If(_) => "if",
            Stmt::While(_) => "while",
            Stmt::Return(_) => "return",
            Stmt::Expression(_) => "expression",
        }
    }
}

/// `let identifier: type_signature = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareStmt {
    pub identifier: String,
    pub type_signature: TypeSignature,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub identifier: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Program,
    pub else_body: Program,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Program,
    pub span: Span,
}

/// `return;` has no value and returns `Void`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .body
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", body)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Declare(stmt) => write!(
                f,
                "let {}: {} = {};",
                stmt.identifier, stmt.type_signature, stmt.value
            ),
            Stmt::Assign(stmt) => write!(f, "{} = {};", stmt.identifier, stmt.value),
            Stmt::If(stmt) => write!(
                f,
                "if ({}) {{ {} }} else {{ {} }}",
                stmt.condition, stmt.then_body, stmt.else_body
            ),
            Stmt::While(stmt) => write!(f, "while ({}) {{ {} }}", stmt.condition, stmt.body),
            Stmt::Return(ReturnStmt { value: Some(value), .. }) => write!(f, "return {};", value),
            Stmt::Return(ReturnStmt { value: None, .. }) => write!(f, "return;"),
            Stmt::Expression(stmt) => write!(f, "{};", stmt.expression),
        }
    }
}
