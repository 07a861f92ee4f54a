//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a flat stream of tokens
//! into a [`Program`](crate::ast::statements::Program). It handles:
//!
//! - Bracket matching into a tree of `( ... )` and `{ ... }` groups
//! - Statement splitting into pre-statements (declarations, assignments,
//!   conditionals, loops, returns and bare expressions)
//! - Expression parsing by splitting at the lowest-precedence operator, with
//!   calls and function literals recognised by shape
//! - Type signature parsing for declarations
//!
//! Operators are desugared into calls whose callee is an operator tag.

pub mod brackets;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod split;
pub mod stmt;
pub mod types;
