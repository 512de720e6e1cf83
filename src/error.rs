//! Error types for QuarryDB
//!
//! This module defines all error types used throughout the query engine.

use thiserror::Error;

/// The main error type for QuarryDB
#[derive(Error, Debug)]
pub enum Error {
    // ========== Lexer Errors ==========
    #[error("Lexer error: unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),

    #[error("Lexer error: unterminated string literal starting at position {0}")]
    UnterminatedString(usize),

    #[error("Lexer error: invalid number format at position {0}")]
    InvalidNumber(usize),

    // ========== Parser Errors ==========
    #[error("Parse error: unexpected token '{found}', expected {expected}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Parse error: unexpected end of input, expected {0}")]
    UnexpectedEof(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Parse error: rule body must contain at least one atom")]
    EmptyRuleBody,

    // ========== Compile Errors ==========
    #[error("Compile error: relation '{0}' not found")]
    UnknownRelation(String),

    #[error("Compile error: head variable '{0}' is never bound in the rule body")]
    UnboundHeadVariable(String),

    #[error("Compile error: atom for '{relation}' has {found} arguments, relation has {expected}")]
    ArityMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },

    #[error("Compile error: constant for column {column} of '{relation}' does not match column type {expected}")]
    ConstantTypeMismatch {
        relation: String,
        column: usize,
        expected: String,
    },

    // ========== Load Errors ==========
    #[error("Load error: database image '{0}' not found")]
    ImageNotFound(String),

    #[error("Load error: malformed manifest - {0}")]
    MalformedManifest(String),

    #[error("Load error: relation '{0}' appears more than once in the image")]
    DuplicateRelation(String),

    #[error("Load error: row {line} of '{relation}' has {found} fields, expected {expected}")]
    RowArityMismatch {
        relation: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Load error: row {line} of '{relation}' has a non-integer field in an integer column")]
    BadIntegerField { relation: String, line: usize },

    // ========== Result Errors ==========
    #[error("Result error: no result named '{0}'")]
    UnknownQuery(String),

    #[error("Result error: row index {index} out of range for table with {len} rows")]
    RowIndexOutOfRange { index: usize, len: usize },

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // ========== Internal Errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for QuarryDB operations
pub type Result<T> = std::result::Result<T, Error>;
