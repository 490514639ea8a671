//! Parser module for building the AST from a token stream.
//!
//! A hand-written recursive-descent parser with ordered alternatives and
//! explicit commit points:
//!
//! - Expressions: a chain of precedence tiers sharing one binary rule that
//!   nests to the right, unary `not`, then postfix `.field` / `.method(args)` runs
//!   folded onto a primary expression
//! - Statements: keyword dispatch, declarations (with initializer lowering)
//!   and expression/assignment statements
//! - Declarations: fields, functions, transactions, states and contracts

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
