use crate::{
    ast::{
        expressions::Expression,
        statements::{Statement, SwitchCase, VariableDecl},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser, types::parse_type};

/// Parses statements until one fails to start, e.g. at the block's `}`.
pub fn parse_body(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    let mut body = vec![];
    while let Some(statements) = parser.attempt(parse_stmt)? {
        body.extend(statements);
    }

    Ok(body)
}

/// Parses one statement unit. A unit may lower to several statements.
pub fn parse_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    if let Some(statements) = parser.attempt(parse_var_decl_stmt)? {
        return Ok(statements);
    }

    parse_expression_stmt(parser)
}

/// Parses `{ body }`, committed throughout.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect_committed(TokenKind::OpenCurly)?;
    let body = parser.nested(parse_body)?;
    parser.expect_committed(TokenKind::CloseCurly)?;

    Ok(body)
}

/// `Type name;` or `Type name = expr;`.
///
/// The initialised form lowers to the declaration followed by an assignment
/// to the new variable.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parser.committed(parse_expr)?)
    } else {
        None
    };

    parser.expect_committed(TokenKind::Semicolon)?;

    let mut statements = vec![Statement::VariableDecl(VariableDecl::new(ty, name.clone()))];
    if let Some(value) = initializer {
        statements.push(Statement::Assignment(Expression::Variable(name), value));
    }

    Ok(statements)
}

/// `expr;` or `target = value;`.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    let expr = parse_expr(parser)?;

    let statement = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        let value = parser.committed(parse_expr)?;
        Statement::Assignment(expr, value)
    } else {
        Statement::Expression(expr)
    };

    parser.expect_committed(TokenKind::Semicolon)?;

    Ok(vec![statement])
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::Return)?;

    let value = parser.attempt(parse_expr)?;

    parser.expect_committed(TokenKind::Semicolon)?;

    Ok(vec![match value {
        Some(value) => Statement::ReturnExpr(value),
        None => Statement::Return,
    }])
}

pub fn parse_transition_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::Arrow)?;
    let state = parser.expect_committed(TokenKind::Identifier)?.value;
    parser.expect_committed(TokenKind::Semicolon)?;

    Ok(vec![Statement::Transition(state)])
}

pub fn parse_throw_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::Throw)?;
    parser.expect_committed(TokenKind::Semicolon)?;

    Ok(vec![Statement::Throw])
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parser.committed(parse_expr)?;
    let then_body = parse_block(parser)?;

    if parser.current_token_kind() != TokenKind::Else {
        return Ok(vec![Statement::If(condition, then_body)]);
    }

    parser.advance();
    let else_body = parse_block(parser)?;

    Ok(vec![Statement::IfThenElse(condition, then_body, else_body)])
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::Switch)?;

    let expr = parser.committed(parse_expr)?;
    parser.expect_committed(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    while let Some(case) = parser.attempt(parse_switch_case)? {
        cases.push(case);
    }

    parser.expect_committed(TokenKind::CloseCurly)?;

    Ok(vec![Statement::Switch(expr, cases)])
}

pub fn parse_switch_case(parser: &mut Parser) -> Result<SwitchCase, Error> {
    parser.expect(TokenKind::Case)?;
    let state_name = parser.expect_committed(TokenKind::Identifier)?.value;
    let body = parse_block(parser)?;

    Ok(SwitchCase { state_name, body })
}

/// `try { ... } catch { ... }`; the catch clause is mandatory.
pub fn parse_try_catch_stmt(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::Try)?;
    let try_body = parse_block(parser)?;

    parser.expect_committed(TokenKind::Catch)?;
    let catch_body = parse_block(parser)?;

    Ok(vec![Statement::TryCatch(try_body, catch_body)])
}
