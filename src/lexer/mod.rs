//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat stream of tokens. It handles:
//!
//! - Tokenization by trying regex patterns in a fixed priority order
//! - Recognition of keywords, literals, operators, type names and identifiers
//! - Token position tracking for error reporting
//! - Line comments and whitespace

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
