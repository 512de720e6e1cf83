//! Column types for QuarryDB
//!
//! This module defines the column types a relation can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column types
///
/// Every column of a relation holds either native 64-bit integers or
/// interned string literals (URIs, names). The type is fixed per column
/// when the relation is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit integer column
    Integer,
    /// Interned string literal column
    Literal,
}

impl ColumnType {
    /// Check if this is the integer type
    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Integer)
    }

    /// Check if this is the literal type
    pub fn is_literal(&self) -> bool {
        matches!(self, ColumnType::Literal)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Literal => write!(f, "LITERAL"),
        }
    }
}
