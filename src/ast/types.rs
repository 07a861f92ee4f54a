//! Type signatures.
//!
//! The language has two shapes of type:
//!
//! - Nominal atoms such as `Int`, `Bool`, `String` and `Void`
//! - Function types with an ordered parameter list and one return type
//!
//! Equality is structural: atoms compare by name, function types compare
//! parameter lists pairwise and then their return types. There is no
//! subtyping or variance.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    Name(String),
    Function(FunctionType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<TypeSignature>,
    pub return_type: Box<TypeSignature>,
}

impl TypeSignature {
    pub fn name(name: &str) -> Self {
        TypeSignature::Name(String::from(name))
    }

    pub fn function(parameters: Vec<TypeSignature>, return_type: TypeSignature) -> Self {
        TypeSignature::Function(FunctionType {
            parameters,
            return_type: Box::new(return_type),
        })
    }

    pub fn int() -> Self {
        Self::name("Int")
    }

    pub fn bool() -> Self {
        Self::name("Bool")
    }

    pub fn string() -> Self {
        Self::name("String")
    }

    pub fn void() -> Self {
        Self::name("Void")
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            TypeSignature::Function(function) => Some(function),
            TypeSignature::Name(_) => None,
        }
    }
}

/// Structural equality over type signatures. Mismatched shapes are unequal.
pub fn type_equal(a: &TypeSignature, b: &TypeSignature) -> bool {
    match (a, b) {
        (TypeSignature::Name(a), TypeSignature::Name(b)) => a == b,
        (TypeSignature::Function(a), TypeSignature::Function(b)) => {
            a.parameters.len() == b.parameters.len()
                && a.parameters
                    .iter()
                    .zip(b.parameters.iter())
                    .all(|(a, b)| type_equal(a, b))
                && type_equal(&a.return_type, &b.return_type)
        }
        _ => false,
    }
}

/// Removes structurally equal duplicates, keeping first occurrences in order.
pub fn dedup_types(types: Vec<TypeSignature>) -> Vec<TypeSignature> {
    let mut unique: Vec<TypeSignature> = Vec::with_capacity(types.len());
    for ty in types {
        if !unique.iter().any(|seen| type_equal(seen, &ty)) {
            unique.push(ty);
        }
    }
    unique
}

impl Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSignature::Name(name) => write!(f, "{}", name),
            TypeSignature::Function(function) => write!(f, "{}", function),
        }
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({}) -> {}", parameters, self.return_type)
    }
}
