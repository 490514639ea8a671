use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("contract", TokenKind::Contract);
        map.insert("state", TokenKind::State);
        map.insert("function", TokenKind::Function);
        map.insert("transaction", TokenKind::Transaction);
        map.insert("return", TokenKind::Return);
        map.insert("throw", TokenKind::Throw);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("try", TokenKind::Try);
        map.insert("catch", TokenKind::Catch);
        map.insert("new", TokenKind::New);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("linear", TokenKind::Linear);
        map.insert("final", TokenKind::Final);
        map.insert("unique", TokenKind::Unique);
        map.insert("shared", TokenKind::Shared);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Semicolon,
    Dot,
    Arrow, // ->

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Contract,
    State,
    Function,
    Transaction,
    Return,
    Throw,
    If,
    Else,
    Switch,
    Case,
    Try,
    Catch,
    New,
    And,
    Or,
    Not,

    // Type modifiers
    Linear,
    Final,
    Unique,
    Shared,
}

impl TokenKind {
    /// The fixed spelling of the token, if it has one.
    pub fn lexeme(&self) -> Option<&'static str> {
        let lexeme = match self {
            TokenKind::EOF | TokenKind::Number | TokenKind::Identifier => return None,
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Arrow => "->",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Contract => "contract",
            TokenKind::State => "state",
            TokenKind::Function => "function",
            TokenKind::Transaction => "transaction",
            TokenKind::Return => "return",
            TokenKind::Throw => "throw",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::New => "new",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Linear => "linear",
            TokenKind::Final => "final",
            TokenKind::Unique => "unique",
            TokenKind::Shared => "shared",
        };
        Some(lexeme)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.lexeme()) {
            (_, Some(lexeme)) => write!(f, "`{}`", lexeme),
            (TokenKind::Identifier, None) => write!(f, "identifier"),
            (TokenKind::Number, None) => write!(f, "number"),
            _ => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Builds a token from its kind and payload.
    ///
    /// Fixed-spelling tokens take their lexeme as value; the span is a
    /// single point at `position`.
    pub fn new(kind: TokenKind, value: impl Into<String>, position: crate::Position) -> Self {
        Token {
            kind,
            value: value.into(),
            span: Span {
                start: position,
                end: position,
            },
        }
    }

    /// How the token is named in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            _ => format!("`{}`", self.value),
        }
    }
}
