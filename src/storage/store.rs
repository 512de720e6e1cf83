//! Relation store for QuarryDB
//!
//! The store owns every loaded relation. It is populated by the loader and
//! read-only afterwards; queries resolve relation names against it.

use crate::error::{Error, Result};
use crate::storage::relation::Relation;
use indexmap::IndexMap;

/// Relation store - owns all loaded relations
///
/// Relations keep their insertion order, so enumeration and scans are
/// deterministic across runs of the same image.
#[derive(Debug, Default)]
pub struct RelationStore {
    /// Relations by name, in load order
    relations: IndexMap<String, Relation>,
}

impl RelationStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            relations: IndexMap::new(),
        }
    }

    /// Insert a relation
    pub fn insert(&mut self, relation: Relation) -> Result<()> {
        if self.relations.contains_key(relation.name()) {
            return Err(Error::DuplicateRelation(relation.name().to_string()));
        }
        self.relations
            .insert(relation.name().to_string(), relation);
        Ok(())
    }

    /// Get a relation by name
    pub fn get(&self, name: &str) -> Result<&Relation> {
        self.relations
            .get(name)
            .ok_or_else(|| Error::UnknownRelation(name.to_string()))
    }

    /// Check if a relation exists
    pub fn contains(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// List all relation names in load order
    pub fn relation_names(&self) -> Vec<&str> {
        self.relations.keys().map(|s| s.as_str()).collect()
    }

    /// Number of relations
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
