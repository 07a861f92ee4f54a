//! Parser implementation for building the Abstract Syntax Tree.
//!
//! Parsing runs in three passes over the token stream:
//!
//! 1. Bracket matching nests `( ... )` and `{ ... }` groups into a tree
//! 2. Statement splitting cuts each block into pre-statements
//! 3. Pre-statements are parsed into statements, with expressions parsed by
//!    splitting at the lowest-precedence operator and type signatures parsed
//!    from their raw slices
//!
//! The `Parser` carries the state shared by the recursive passes: the source
//! file name for positions and the current nesting depth.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position, MAX_NESTING_DEPTH,
};

use super::{brackets::match_brackets, split::split_group};

/// The parsing state shared by the recursive passes.
pub struct Parser {
    /// The name of the source file being parsed
    file: Rc<String>,
    /// How many nested expressions and bodies are currently being parsed
    depth: usize,
    /// Nesting limit for brackets, expressions and bodies
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser with the default nesting limit.
    pub fn new(file: Rc<String>) -> Self {
        Self::with_max_depth(file, MAX_NESTING_DEPTH)
    }

    pub fn with_max_depth(file: Rc<String>, max_depth: usize) -> Self {
        Parser {
            file,
            depth: 0,
            max_depth,
        }
    }

    /// A position at the start of the file, used when there is no token to point at.
    pub fn get_position(&self) -> Position {
        Position(0, Rc::clone(&self.file))
    }

    /// Runs `parse` one nesting level deeper, failing once the limit is exceeded.
    pub fn nested<T>(
        &mut self,
        at: &Position,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                at.clone(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses a whole token stream into a [`Program`].
    pub fn parse_tokens(&mut self, tokens: Vec<Token>) -> Result<Program, Error> {
        let top = match_brackets(tokens, self.max_depth)?;
        let mut pre_program = split_group(&top)?;
        if top.children.is_empty() {
            pre_program.span.start = self.get_position();
            pre_program.span.end = self.get_position();
        }

        let program = self.parse_program(&pre_program)?;
        debug!(statements = program.body.len(), file = %self.file, "parsed program");
        Ok(program)
    }
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing: it matches brackets, splits
/// statements and parses every statement with the default nesting limit.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    Parser::new(file).parse_tokens(tokens)
}
