//! Lexical analysis module.
//!
//! Converts source text into the token stream consumed by the parser.
//! Tokens carry 1-based line/column spans; whitespace and `//` comments are
//! skipped.

pub mod lexer;
pub mod tokens;
