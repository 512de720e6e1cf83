//! Database image loader for QuarryDB
//!
//! A database image is a directory holding a `manifest.json` that names
//! each relation, its column types, and its data file, plus one
//! tab-separated data file per relation. Integer fields are parsed as
//! `i64`; literal fields are interned into the catalog as they are read.

use crate::catalog::{ColumnType, LiteralCatalog};
use crate::error::{Error, Result};
use crate::storage::relation::Relation;
use crate::storage::store::RelationStore;
use crate::storage::tuple::{Tuple, Value};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Manifest file name inside an image directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Database image manifest
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageManifest {
    /// Relations in the image, in load order
    pub relations: Vec<RelationEntry>,
}

/// One relation entry in the manifest
#[derive(Debug, Serialize, Deserialize)]
pub struct RelationEntry {
    /// Relation name
    pub name: String,
    /// Per-column types
    pub columns: Vec<ColumnType>,
    /// Data file name, relative to the image directory
    pub file: String,
}

/// Load a database image into a fresh relation store
///
/// Literal fields are interned into `literals`. The returned store is
/// complete or the call fails; a failed load leaves no half-built store
/// behind.
pub fn load_image(path: impl AsRef<Path>, literals: &mut LiteralCatalog) -> Result<RelationStore> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(Error::ImageNotFound(path.display().to_string()));
    }

    let manifest_path = path.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(Error::ImageNotFound(manifest_path.display().to_string()));
    }
    let manifest_text = fs::read_to_string(&manifest_path)?;
    let manifest: ImageManifest =
        serde_json::from_str(&manifest_text).map_err(|e| Error::MalformedManifest(e.to_string()))?;

    let mut store = RelationStore::new();
    for entry in &manifest.relations {
        let relation = load_relation(path, entry, literals)?;
        debug!(
            relation = %relation.name(),
            rows = relation.len(),
            "loaded relation"
        );
        store.insert(relation)?;
    }

    info!(
        image = %path.display(),
        relations = store.len(),
        literals = literals.len(),
        "database image loaded"
    );
    Ok(store)
}

fn load_relation(
    image_dir: &Path,
    entry: &RelationEntry,
    literals: &mut LiteralCatalog,
) -> Result<Relation> {
    let data_path = image_dir.join(&entry.file);
    if !data_path.is_file() {
        return Err(Error::ImageNotFound(data_path.display().to_string()));
    }
    let data = fs::read_to_string(&data_path)?;

    let mut relation = Relation::new(&entry.name, entry.columns.clone());
    for (index, line) in data.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != entry.columns.len() {
            return Err(Error::RowArityMismatch {
                relation: entry.name.clone(),
                line: line_no,
                expected: entry.columns.len(),
                found: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for (field, column) in fields.iter().zip(&entry.columns) {
            let value = match column {
                ColumnType::Integer => {
                    let n = field.parse::<i64>().map_err(|_| Error::BadIntegerField {
                        relation: entry.name.clone(),
                        line: line_no,
                    })?;
                    Value::Integer(n)
                }
                ColumnType::Literal => Value::Literal(literals.intern(field)),
            };
            values.push(value);
        }
        relation.push(Tuple::new(values))?;
    }

    Ok(relation)
}
