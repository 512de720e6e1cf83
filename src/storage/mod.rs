//! Relation storage module
//!
//! This module contains the in-memory relation storage:
//! - Value and tuple representation
//! - Typed, immutable relations
//! - The relation store
//! - The database image loader

pub mod loader;
pub mod relation;
pub mod store;
pub mod tuple;

pub use loader::load_image;
pub use relation::Relation;
pub use store::RelationStore;
pub use tuple::{Tuple, Value};
