//! Error types for lexing and parsing.
//!
//! Every error carries the position of the first unconsumed token at the
//! point of failure and is either a soft failure, which lets the parser try
//! another alternative, or a committed error, which ends the parse.

pub mod errors;
