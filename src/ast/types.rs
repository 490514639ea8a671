use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Ownership and mutability qualifiers that may prefix a type.
///
/// Qualifiers combine freely; exclusivity rules belong to later passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeModifier {
    Linear,
    Final,
    Unique,
    Shared,
}

impl TypeModifier {
    pub fn from_token(kind: TokenKind) -> Option<TypeModifier> {
        match kind {
            TokenKind::Linear => Some(TypeModifier::Linear),
            TokenKind::Final => Some(TypeModifier::Final),
            TokenKind::Unique => Some(TypeModifier::Unique),
            TokenKind::Shared => Some(TypeModifier::Shared),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            TypeModifier::Linear => "linear",
            TypeModifier::Final => "final",
            TypeModifier::Unique => "unique",
            TypeModifier::Shared => "shared",
        }
    }
}

impl Display for TypeModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A declared type: a name with the modifiers written before it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    pub modifiers: Vec<TypeModifier>,
    pub name: String,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Type {
            modifiers: vec![],
            name: name.into(),
        }
    }

    pub fn with_modifiers(modifiers: Vec<TypeModifier>, name: impl Into<String>) -> Self {
        Type {
            modifiers,
            name: name.into(),
        }
    }

    pub fn has_modifier(&self, modifier: TypeModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_linear(&self) -> bool {
        self.has_modifier(TypeModifier::Linear)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{}", self.name)
    }
}
