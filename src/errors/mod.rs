//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each stage (lexing, bracket matching,
//!   statement splitting, expression and type signature parsing, type checking)
//! - Error formatting and helpful suggestions

pub mod errors;

#[cfg(test)]
mod tests;
