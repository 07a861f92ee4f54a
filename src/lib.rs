#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::{statements::Program, types::TypeSignature},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::{builtin_scope, type_check, TypeChecker},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Maximum bracket and parser recursion depth accepted by default.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// The result of running the whole front end over a source text.
#[derive(Debug)]
pub struct CheckedProgram {
    pub program: Program,
    pub type_checker: TypeChecker,
    pub return_types: Vec<TypeSignature>,
}

/// Lexes, bracket-matches, splits and parses `source` into a [`Program`].
pub fn parse_program(source: String, file: Option<String>) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, file)?;
    parse(tokens, file_name)
}

/// Parses `source` and type checks it against a fresh builtin scope.
pub fn type_check_source(source: String, file: Option<String>) -> Result<CheckedProgram, Error> {
    let program = parse_program(source, file)?;
    let mut type_checker = builtin_scope();
    let return_types = type_check(&program, &mut type_checker)?;

    Ok(CheckedProgram {
        program,
        type_checker,
        return_types,
    })
}

/// Finds the 1-based line containing byte offset `position`, the line text and
/// the offset within that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // Offset at end of input points just past the last line.
    let last = source.split_inclusive('\n').last()?;
    Some((source.split_inclusive('\n').count(), last.to_string(), last.len()))
}


pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        error: message
        -> final.lang
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        println!("   {}", error);
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}
