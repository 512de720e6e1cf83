//! Result table for QuarryDB
//!
//! This module materializes executor output into the table handed to the
//! caller. Interned literals are resolved back to strings here, at the
//! boundary, and nowhere earlier; integer columns stay native. Row order
//! is the executor's discovery order.

use crate::catalog::LiteralCatalog;
use crate::error::{Error, Result};
use crate::storage::{Tuple, Value};

/// An ordered, indexable query result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    /// Output column names (head variable order)
    columns: Vec<String>,
    /// Result rows, in discovery order
    rows: Vec<Tuple>,
}

impl ResultTable {
    /// Materialize executor rows, resolving literal cells to strings
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Tuple>,
        literals: &LiteralCatalog,
    ) -> Result<Self> {
        let mut materialized = Vec::with_capacity(rows.len());
        for row in rows {
            let mut values = Vec::with_capacity(row.len());
            for value in row.into_values() {
                let value = match value {
                    Value::Literal(id) => {
                        let s = literals.resolve(id).ok_or_else(|| {
                            Error::Internal(format!("unresolvable literal id {}", id))
                        })?;
                        Value::String(s.to_string())
                    }
                    other => other,
                };
                values.push(value);
            }
            materialized.push(Tuple::new(values));
        }

        Ok(Self {
            columns,
            rows: materialized,
        })
    }

    /// Get the output column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Result<&[Value]> {
        self.rows
            .get(index)
            .map(|t| t.values())
            .ok_or(Error::RowIndexOutOfRange {
                index,
                len: self.rows.len(),
            })
    }

    /// Get all rows
    pub fn rows(&self) -> &[Tuple] {
        &self.rows
    }
}
