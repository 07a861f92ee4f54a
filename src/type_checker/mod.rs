//! Type checking and semantic analysis module.
//!
//! This module performs bidirectional type checking on the AST:
//!
//! - Inferring the type of literals, variables and calls
//! - Checking expressions against an expected type, which is the only way a
//!   function literal can be typed
//! - Resolving variables through a stack of nested environments
//! - Checking call arity and argument types, operators included
//! - Collecting the return types of every program and requiring them to agree
//!
//! Every nested program (branch, loop or function body) gets its own
//! environment, so declarations never leak out of the block they appear in.

pub mod type_checker;

#[cfg(test)]
mod tests;
