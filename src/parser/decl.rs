use crate::{
    ast::{
        ast::{ContractDecl, Declaration, FieldDecl, FuncDecl, StateDecl, TransactionDecl},
        statements::{Statement, VariableDecl},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_block, types::parse_type};

/// Parses declarations until one fails to start, e.g. at the scope's `}`.
pub fn parse_decls(parser: &mut Parser) -> Result<Vec<Declaration>, Error> {
    let mut declarations = vec![];
    while let Some(declaration) = parser.attempt(parse_decl)? {
        declarations.push(declaration);
    }

    Ok(declarations)
}

pub fn parse_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    if let Some(handler) = parser.get_decl_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_field_decl(parser)
}

/// `modifier* Type name;`, committed once the type has been read.
pub fn parse_field_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect_committed(TokenKind::Identifier)?.value;
    parser.expect_committed(TokenKind::Semicolon)?;

    Ok(Declaration::Field(FieldDecl { ty, name }))
}

pub fn parse_func_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::Function)?;
    let (name, params, body) = parse_invokable(parser)?;

    Ok(Declaration::Func(FuncDecl { name, params, body }))
}

pub fn parse_transaction_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::Transaction)?;
    let (name, params, body) = parse_invokable(parser)?;

    Ok(Declaration::Transaction(TransactionDecl { name, params, body }))
}

/// The `name(params) { body }` shared by functions and transactions.
fn parse_invokable(
    parser: &mut Parser,
) -> Result<(String, Vec<VariableDecl>, Vec<Statement>), Error> {
    let name = parser.expect_committed(TokenKind::Identifier)?.value;

    parser.expect_committed(TokenKind::OpenParen)?;
    let params = parse_params(parser)?;
    parser.expect_committed(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok((name, params, body))
}

/// Parses a possibly empty, comma-separated list of `Type name` parameters.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<VariableDecl>, Error> {
    let mut params = vec![];

    let Some(first) = parser.attempt(parse_param)? else {
        return Ok(params);
    };
    params.push(first);

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        params.push(parser.committed(parse_param)?);
    }

    Ok(params)
}

pub fn parse_param(parser: &mut Parser) -> Result<VariableDecl, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(VariableDecl::new(ty, name))
}

pub fn parse_state_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::State)?;
    let name = parser.expect_committed(TokenKind::Identifier)?.value;

    parser.expect_committed(TokenKind::OpenCurly)?;
    let declarations = parser.nested(parse_decls)?;
    parser.expect_committed(TokenKind::CloseCurly)?;

    Ok(Declaration::State(StateDecl { name, declarations }))
}

pub fn parse_contract_decl(parser: &mut Parser) -> Result<ContractDecl, Error> {
    parser.expect(TokenKind::Contract)?;
    let name = parser.expect_committed(TokenKind::Identifier)?.value;

    parser.expect_committed(TokenKind::OpenCurly)?;
    let declarations = parse_decls(parser)?;
    parser.expect_committed(TokenKind::CloseCurly)?;

    Ok(ContractDecl { name, declarations })
}
