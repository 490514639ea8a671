#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::tokenize};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column pair in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position of the first character of a source file.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a complete program.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string())?;
    parser::parser::parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::{parse_source, Position};

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(Position::start().to_string(), "1:1");
    }

    #[test]
    fn test_parse_source() {
        let program = parse_source("contract C { }").unwrap();
        assert_eq!(program.contracts.len(), 1);
        assert_eq!(program.contracts[0].name, "C");
    }

    #[test]
    fn test_parse_source_reports_lexer_errors() {
        let error = parse_source("contract C { # }").unwrap_err();
        assert!(error.is_committed());
        assert_eq!(*error.get_position(), Position::new(1, 14));
    }
}
