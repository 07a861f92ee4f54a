use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::operators::Operator;

/// Binary operator precedence; higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Logical = 10,
    Relational = 20,
    Additive = 30,
    Multiplicative = 40,
}

pub fn binding_power(operator: Operator) -> Option<BindingPower> {
    match operator {
        Operator::Or | Operator::And => Some(BindingPower::Logical),
        Operator::Equals
        | Operator::NotEquals
        | Operator::Less
        | Operator::Greater
        | Operator::LessEquals
        | Operator::GreaterEquals => Some(BindingPower::Relational),
        Operator::Plus | Operator::Minus | Operator::Concat => Some(BindingPower::Additive),
        Operator::Star | Operator::Slash | Operator::Percent => Some(BindingPower::Multiplicative),
        Operator::Not | Operator::Negate => None,
    }
}

lazy_static! {
    pub static ref BINARY_LOOKUP: HashMap<&'static str, Operator> = Operator::BINARY
        .iter()
        .map(|operator| (operator.symbol(), *operator))
        .collect();
    pub static ref PREFIX_LOOKUP: HashMap<&'static str, Operator> = Operator::PREFIX
        .iter()
        .map(|operator| (operator.symbol(), *operator))
        .collect();
}
