//! Catalog module
//!
//! This module contains the literal catalog and the column type vocabulary.

pub mod literals;
pub mod types;

pub use literals::{LiteralCatalog, LiteralId};
pub use types::ColumnType;
