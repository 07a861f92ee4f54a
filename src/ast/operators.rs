//! Built-in operators.
//!
//! Operator applications are represented as calls whose callee is one of
//! these tags, so the type checker handles them on the same path as calls
//! to user functions.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Binary
    Or,
    And,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Concat,

    // Prefix
    Not,
    Negate,
}

impl Operator {
    pub const BINARY: [Operator; 14] = [
        Operator::Or,
        Operator::And,
        Operator::Equals,
        Operator::NotEquals,
        Operator::Less,
        Operator::Greater,
        Operator::LessEquals,
        Operator::GreaterEquals,
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
        Operator::Concat,
    ];

    pub const PREFIX: [Operator; 2] = [Operator::Not, Operator::Negate];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Or => "||",
            Operator::And => "&&",
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEquals => "<=",
            Operator::GreaterEquals => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Concat => "++",
            Operator::Not => "!",
            Operator::Negate => "-",
        }
    }

    /// The synthesized function name, e.g. `operator+`.
    pub fn name(&self) -> String {
        format!("operator{}", self.symbol())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
