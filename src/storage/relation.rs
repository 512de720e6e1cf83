//! Relation type for QuarryDB
//!
//! A relation is a named collection of same-arity tuples with a fixed
//! per-column type. Relations are populated by the loader and read-only
//! at query time.

use crate::catalog::ColumnType;
use crate::error::{Error, Result};
use crate::storage::tuple::{Tuple, Value};

/// A named, typed, in-memory relation
#[derive(Debug, Clone)]
pub struct Relation {
    /// Relation name
    name: String,
    /// Per-column types; the length is the relation's arity
    columns: Vec<ColumnType>,
    /// Tuples, in load order
    tuples: Vec<Tuple>,
}

impl Relation {
    /// Create a new empty relation
    pub fn new(name: impl Into<String>, columns: Vec<ColumnType>) -> Self {
        Self {
            name: name.into(),
            columns,
            tuples: Vec::new(),
        }
    }

    /// Get the relation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the per-column types
    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Get the number of columns
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Get the tuples in load order
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Get the number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Check if the relation has no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Append a tuple, enforcing arity and column types
    pub fn push(&mut self, tuple: Tuple) -> Result<()> {
        if tuple.len() != self.arity() {
            return Err(Error::Internal(format!(
                "tuple with {} fields pushed into relation '{}' of arity {}",
                tuple.len(),
                self.name,
                self.arity()
            )));
        }
        for (i, (value, column)) in tuple.values().iter().zip(&self.columns).enumerate() {
            let ok = match column {
                ColumnType::Integer => matches!(value, Value::Integer(_)),
                ColumnType::Literal => matches!(value, Value::Literal(_)),
            };
            if !ok {
                return Err(Error::Internal(format!(
                    "{} value in column {} of relation '{}', expected {}",
                    value.type_name(),
                    i,
                    self.name,
                    column
                )));
            }
        }
        self.tuples.push(tuple);
        Ok(())
    }
}
