//! Type parsing: zero or more modifier keywords followed by a type name.

use crate::{
    ast::types::{Type, TypeModifier},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses `modifier* Identifier`, failing softly if no type name follows.
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let mut modifiers = vec![];
    while let Some(modifier) = TypeModifier::from_token(parser.current_token_kind()) {
        modifiers.push(modifier);
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(Error::failure(
            ErrorImpl::TypeExpected {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    }

    let name = parser.advance().value.clone();
    Ok(Type::with_modifiers(modifiers, name))
}
