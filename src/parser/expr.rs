use crate::{
    ast::expressions::Expression,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BinaryConstructor, BindingPower},
    parser::Parser,
};

/// Parses a full expression, starting at the loosest tier.
pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_binary_expr(parser, BindingPower::Conjunction)
}

/// Parses one precedence tier.
///
/// Operands come from the next tighter tier. Operators of this tier are
/// collected in a loop and folded from the right, so `a + b + c` is
/// `Add(a, Add(b, c))`. When no operand follows an operator, the operator is
/// left unconsumed.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    if bp == BindingPower::Unary {
        return parse_unary_expr(parser);
    }

    let mut right = parse_binary_expr(parser, bp.tighter())?;

    // (operator, left operand) pairs still waiting for their right side
    let mut pending: Vec<(BinaryConstructor, Expression)> = vec![];
    while let Some(constructor) = parser.get_binary_constructor(bp, parser.current_token_kind()) {
        let operand = parser.attempt(|parser| {
            parser.advance();
            parse_binary_expr(parser, bp.tighter())
        })?;

        let Some(operand) = operand else {
            break;
        };
        pending.push((constructor, right));
        right = operand;
    }

    Ok(pending
        .into_iter()
        .rev()
        .fold(right, |acc, (constructor, left)| {
            constructor(Box::new(left), Box::new(acc))
        }))
}

/// Parses `not* postfix`. The innermost `not` is applied first.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let mut negations = 0;
    while parser.current_token_kind() == TokenKind::Not {
        parser.advance();
        negations += 1;
    }

    let inner = parse_postfix_expr(parser)?;

    Ok((0..negations).fold(inner, |expr, _| {
        Expression::LogicalNegation(Box::new(expr))
    }))
}

/// A `.name` or `.name(args)` suffix, before it is attached to its base.
#[derive(Debug, Clone, PartialEq)]
pub enum Suffix {
    Field(String),
    Call(String, Vec<Expression>),
}

impl Suffix {
    fn apply(self, base: Expression) -> Expression {
        match self {
            Suffix::Field(name) => Expression::Dereference(Box::new(base), name),
            Suffix::Call(name, args) => Expression::Invocation(Box::new(base), name, args),
        }
    }
}

/// Parses a primary expression and its whole suffix run, then folds the
/// suffixes onto it left to right.
pub fn parse_postfix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let base = parse_primary_expr(parser)?;
    let suffixes = parse_suffixes(parser)?;

    Ok(suffixes.into_iter().fold(base, |acc, suffix| suffix.apply(acc)))
}

/// Parses zero or more `.name` / `.name(args)` suffixes.
pub fn parse_suffixes(parser: &mut Parser) -> Result<Vec<Suffix>, Error> {
    let mut suffixes = vec![];

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let name = parser.expect_committed(TokenKind::Identifier)?.value;

        if parser.current_token_kind() == TokenKind::OpenParen {
            suffixes.push(Suffix::Call(name, parse_args(parser)?));
        } else {
            suffixes.push(Suffix::Field(name));
        }
    }

    Ok(suffixes)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::New => parse_construction_expr(parser),
        TokenKind::Identifier if parser.peek_kind(1) == TokenKind::OpenParen => {
            let name = parser.advance().value.clone();
            Ok(Expression::LocalInvocation(name, parse_args(parser)?))
        }
        TokenKind::Number => {
            let token = parser.current_token().value.clone();
            match token.parse::<i64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expression::NumLiteral(value))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Identifier => Ok(Expression::Variable(parser.advance().value.clone())),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(Error::failure(
            ErrorImpl::ExpressionExpected {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parser.nested(|parser| parser.committed(parse_expr))?;
    parser.expect_committed(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_construction_expr(parser: &mut Parser) -> Result<Expression, Error> {
    // new Wallet(owner, 10)
    parser.expect(TokenKind::New)?;
    let type_name = parser.expect_committed(TokenKind::Identifier)?.value;
    let args = parse_args(parser)?;

    Ok(Expression::Construction(type_name, args))
}

/// Parses `( expr, ... )`. Everything from the opening parenthesis on is
/// committed.
pub fn parse_args(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    parser.expect_committed(TokenKind::OpenParen)?;

    let args = parser.nested(|parser| {
        let mut args = vec![];
        if parser.current_token_kind() != TokenKind::CloseParen {
            args.push(parser.committed(parse_expr)?);

            while parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                args.push(parser.committed(parse_expr)?);
            }
        }
        Ok(args)
    })?;

    parser.expect_committed(TokenKind::CloseParen)?;

    Ok(args)
}
