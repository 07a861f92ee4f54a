use crate::{
    ast::statements::{
        AssignStmt, DeclareStmt, ExpressionStmt, IfStmt, Program, ReturnStmt, Stmt, WhileStmt,
    },
    errors::errors::Error,
};

use super::{
    parser::Parser,
    split::{PreProgram, PreStmt},
};

impl Parser {
    /// Parses every pre-statement of a block, one nesting level deeper.
    pub fn parse_program(&mut self, pre_program: &PreProgram) -> Result<Program, Error> {
        self.nested(&pre_program.span.start, |parser| {
            let body = pre_program
                .statements
                .iter()
                .map(|statement| parser.parse_stmt(statement))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Program {
                body,
                span: pre_program.span.clone(),
            })
        })
    }

    pub fn parse_stmt(&mut self, pre_stmt: &PreStmt) -> Result<Stmt, Error> {
        let span = pre_stmt.get_span().clone();

        match pre_stmt {
            PreStmt::Declare {
                target,
                type_sig,
                value,
                ..
            } => Ok(Stmt::Declare(DeclareStmt {
                identifier: target.clone(),
                type_signature: self.parse_type_sig(type_sig, &span.start)?,
                value: self.parse_expr(value, &span.end)?,
                span,
            })),
            PreStmt::Assign { target, value, .. } => Ok(Stmt::Assign(AssignStmt {
                identifier: target.clone(),
                value: self.parse_expr(value, &span.end)?,
                span,
            })),
            PreStmt::If {
                condition,
                then_body,
                else_body,
                ..
            } => Ok(Stmt::If(IfStmt {
                condition: self.parse_expr(&condition.children, &condition.span.start)?,
                then_body: self.parse_program(then_body)?,
                else_body: self.parse_program(else_body)?,
                span,
            })),
            PreStmt::While {
                condition, body, ..
            } => Ok(Stmt::While(WhileStmt {
                condition: self.parse_expr(&condition.children, &condition.span.start)?,
                body: self.parse_program(body)?,
                span,
            })),
            PreStmt::Return { value, .. } => Ok(Stmt::Return(ReturnStmt {
                value: match value {
                    Some(value) => Some(self.parse_expr(value, &span.end)?),
                    None => None,
                },
                span,
            })),
            PreStmt::Expression { value, .. } => Ok(Stmt::Expression(ExpressionStmt {
                expression: self.parse_expr(value, &span.start)?,
                span,
            })),
        }
    }
}
