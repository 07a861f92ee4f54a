/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Literals, symbols, calls and function literals
/// - operators: The built-in operator tags used as call targets
/// - statements: Statements and the `Program` sequence
/// - types: Type signatures and structural equality
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod types;
