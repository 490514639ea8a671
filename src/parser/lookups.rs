use std::collections::HashMap;

use crate::{
    ast::{ast::Declaration, expressions::Expression, statements::Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::*, parser::Parser, stmt::*};

/// Precedence tiers, loosest first.
///
/// Each binary tier parses the next tighter tier for its operands.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum BindingPower {
    Conjunction,
    Disjunction,
    Relational,
    Additive,
    Subtractive,
    Multiplicative,
    Divisive,
    Unary,
}

impl BindingPower {
    /// The next tighter tier. `Unary` is the tightest.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Conjunction => BindingPower::Disjunction,
            BindingPower::Disjunction => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Subtractive,
            BindingPower::Subtractive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Divisive,
            BindingPower::Divisive | BindingPower::Unary => BindingPower::Unary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Vec<Statement>, Error>;
pub type DeclHandler = fn(&mut Parser) -> Result<Declaration, Error>;
pub type BinaryConstructor = fn(Box<Expression>, Box<Expression>) -> Expression;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(TokenKind::And, BindingPower::Conjunction, Expression::Conjunction);
    parser.binary(TokenKind::Or, BindingPower::Disjunction, Expression::Disjunction);

    // Relational, in trial order
    parser.binary(TokenKind::Equals, BindingPower::Relational, Expression::Equals);
    parser.binary(TokenKind::NotEquals, BindingPower::Relational, Expression::NotEquals);
    parser.binary(TokenKind::Greater, BindingPower::Relational, Expression::GreaterThan);
    parser.binary(TokenKind::Less, BindingPower::Relational, Expression::LessThan);
    parser.binary(TokenKind::LessEquals, BindingPower::Relational, Expression::LessThanOrEquals);
    parser.binary(TokenKind::GreaterEquals, BindingPower::Relational, Expression::GreaterThanOrEquals);

    // Arithmetic
    parser.binary(TokenKind::Plus, BindingPower::Additive, Expression::Add);
    parser.binary(TokenKind::Dash, BindingPower::Subtractive, Expression::Subtract);
    parser.binary(TokenKind::Star, BindingPower::Multiplicative, Expression::Multiply);
    parser.binary(TokenKind::Slash, BindingPower::Divisive, Expression::Divide);

    // Statements
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Arrow, parse_transition_stmt);
    parser.stmt(TokenKind::Throw, parse_throw_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Switch, parse_switch_stmt);
    parser.stmt(TokenKind::Try, parse_try_catch_stmt);

    // Declarations
    parser.decl(TokenKind::Function, parse_func_decl);
    parser.decl(TokenKind::Transaction, parse_transaction_decl);
    parser.decl(TokenKind::State, parse_state_decl);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type BinaryLookup = HashMap<BindingPower, Vec<(TokenKind, BinaryConstructor)>>;
