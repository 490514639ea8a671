use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A lexing or parsing error with the position it was raised at.
///
/// Soft failures mean "this alternative did not match here" and may be
/// recovered from by trying another alternative. Committed errors abort the
/// whole parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    committed: bool,
}

impl Error {
    /// Creates a committed error.
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            committed: true,
        }
    }

    /// Creates a soft failure.
    pub fn failure(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            committed: false,
        }
    }

    /// Promotes a soft failure to a committed error, keeping its position.
    pub fn commit(self) -> Self {
        Error {
            committed: true,
            ..self
        }
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpressionExpected { .. } => "ExpressionExpected",
            ErrorImpl::TypeExpected { .. } => "TypeExpected",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ContractExpected { .. } => "ContractExpected",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.committed {
            write!(f, "Error: {} at {}", self.internal_error, self.position)
        } else {
            write!(f, "FAILURE: {}", self.internal_error)
        }
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character `{token}`")]
    UnrecognisedToken { token: String },
    #[error("{expected} expected but {found} found")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("expression expected but {found} found")]
    ExpressionExpected { found: String },
    #[error("type expected but {found} found")]
    TypeExpected { found: String },
    #[error("invalid number literal `{token}`")]
    NumberParseError { token: String },
    #[error("contract declaration expected but {found} found")]
    ContractExpected { found: String },
    #[error("end of input expected but {found} found")]
    TrailingInput { found: String },
    #[error("constructs nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
