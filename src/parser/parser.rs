//! Parser state and the top-level driver.
//!
//! The `Parser` is a cursor over an immutable token vector. Grammar rules are
//! plain functions over `&mut Parser` returning `Result<T, Error>`:
//!
//! - a soft failure (`Error::failure`) means the rule did not match here and
//!   an enclosing rule may try another alternative via [`Parser::attempt`],
//!   which rewinds the cursor;
//! - a committed error (`Error::new`, or a failure passed through
//!   [`Parser::committed`]) means a construct was recognised by its leading
//!   token but is malformed, and it aborts the whole parse.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    decl::parse_contract_decl,
    lookups::{
        create_token_lookups, BinaryConstructor, BinaryLookup, BindingPower, DeclHandler,
        DeclLookup, StmtHandler, StmtLookup,
    },
};

/// How many blocks, state bodies, parentheses and argument lists may
/// enclose one another before the parse is abandoned.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Number of nested constructs currently open
    depth: usize,
    /// Keyword-led statement handlers
    stmt_lookup: StmtLookup,
    /// Keyword-led declaration handlers
    decl_lookup: DeclLookup,
    /// Binary operators of each precedence tier, in trial order
    binary_lookup: BinaryLookup,
}

impl Parser {
    /// Creates a parser over `tokens` with all lookup tables registered.
    ///
    /// An `EOF` token is appended if the stream does not already end in one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span { start: end, end },
            });
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            decl_lookup: HashMap::new(),
            binary_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `offset` places ahead, saturating at `EOF`.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        self.tokens[index].kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Index of the current token.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// The first token the parse left unconsumed, if any.
    ///
    /// An `EOF` before the end of the stream does not end the input: the
    /// token after it is reported instead.
    pub fn leftover_token(&self) -> Option<&Token> {
        if self.has_tokens() {
            return Some(self.current_token());
        }
        self.tokens.get(self.pos + 1)
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    fn unexpected(&self, expected_kind: TokenKind) -> ErrorImpl {
        ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            found: self.current_token().describe(),
        }
    }

    /// Consumes a token of the given kind, or fails softly.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::failure(
                self.unexpected(expected_kind),
                self.get_position(),
            ));
        }
        Ok(self.advance().clone())
    }

    /// Consumes a token of the given kind, or raises a committed error.
    pub fn expect_committed(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect(expected_kind).map_err(Error::commit)
    }

    /// Runs `rule`, rewinding the cursor if it fails softly.
    ///
    /// Returns `Ok(None)` on a soft failure; committed errors propagate.
    pub fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<Option<T>, Error> {
        let start = self.pos;
        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(error) if !error.is_committed() => {
                self.pos = start;
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Runs `rule` with no way back: a soft failure becomes a committed error.
    pub fn committed<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        rule(self).map_err(|error| {
            if !error.is_committed() {
                log::trace!("committing failure at {}: {}", error.get_position(), error);
            }
            error.commit()
        })
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Exceeding [`MAX_NESTING_DEPTH`] is a committed error at the current
    /// token.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_decl_handler(&self, kind: TokenKind) -> Option<DeclHandler> {
        self.decl_lookup.get(&kind).copied()
    }

    /// Finds the constructor for `kind` among the operators of tier `bp`.
    pub fn get_binary_constructor(
        &self,
        bp: BindingPower,
        kind: TokenKind,
    ) -> Option<BinaryConstructor> {
        self.binary_lookup
            .get(&bp)?
            .iter()
            .find(|(operator, _)| *operator == kind)
            .map(|(_, constructor)| *constructor)
    }

    /// Registers a binary operator at the end of tier `bp`'s trial order.
    pub fn binary(&mut self, kind: TokenKind, bp: BindingPower, constructor: BinaryConstructor) {
        self.binary_lookup
            .entry(bp)
            .or_default()
            .push((kind, constructor));
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a declaration handler for a leading keyword.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }
}

/// Parses a stream of tokens into a Program.
///
/// The stream must hold one or more contracts and nothing else. No contract
/// at all is a soft failure; tokens left over after the last contract, even
/// behind a stray `EOF`, are a committed error at the first of them.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    log::debug!("parsing {} tokens", tokens.len());
    let mut parser = Parser::new(tokens);
    let program = parse_program(&mut parser)?;
    log::debug!("parsed {} contracts", program.contracts.len());
    Ok(program)
}

pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let mut contracts = vec![];
    while let Some(contract) = parser.attempt(parse_contract_decl)? {
        contracts.push(contract);
    }

    if contracts.is_empty() {
        return Err(Error::failure(
            ErrorImpl::ContractExpected {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    }

    if let Some(token) = parser.leftover_token() {
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                found: token.describe(),
            },
            token.span.start,
        ));
    }

    Ok(Program { contracts })
}
