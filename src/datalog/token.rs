//! Rule token definitions
//!
//! This module defines all tokens that can appear in rule text.

use std::fmt;

/// Rule token types
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // ========== Literals ==========
    /// Identifier (relation name or variable)
    Identifier(String),
    /// String literal (single-quoted)
    StringLiteral(String),
    /// Integer literal
    IntegerLiteral(i64),

    // ========== Operators ==========
    /// =
    Eq,
    /// :-
    Implies,

    // ========== Delimiters ==========
    /// (
    LParen,
    /// )
    RParen,
    /// ,
    Comma,
    /// .
    Dot,

    // ========== Special ==========
    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(s) => write!(f, "{}", s),
            Token::StringLiteral(s) => write!(f, "'{}'", s),
            Token::IntegerLiteral(n) => write!(f, "{}", n),
            Token::Eq => write!(f, "="),
            Token::Implies => write!(f, ":-"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
            Token::Eof => write!(f, "EOF"),
        }
    }
}
