//! Stream schema templates.
//!
//! A schema file is a JSON document describing the structure a stream is
//! deployed under. Contents are treated as opaque by the migration pipeline:
//! nothing here validates tables or procedures, it only carries them to the
//! deploy call.

use crate::error::{ClientError, ClientErrorExt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed schema definition, deployed under a per-stream name.
///
/// Templates are immutable once parsed: [`StreamSchema::with_name`] returns
/// a fresh renamed copy for each target stream, so deployments never share a
/// mutated instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSchema {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<SchemaTable>,
    #[serde(default)]
    pub procedures: Vec<SchemaProcedure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTable {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<SchemaColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProcedure {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub body: String,
}

impl StreamSchema {
    /// Returns a copy of this template deployed under `name`.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }
}

/// Reads and parses a schema template from a JSON file.
///
/// # Errors
/// * [`ClientError::SchemaFile`] if the file cannot be read.
/// * [`ClientError::Json`] if the document does not deserialize into a
///   [`StreamSchema`].
pub fn read_schema(path: impl AsRef<Path>) -> Result<StreamSchema, ClientError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .context(format!("Reading schema file {}", path.display()))?;
    let schema: StreamSchema = serde_json::from_slice(&bytes)
        .context(format!("Parsing schema file {}", path.display()))?;
    Ok(schema)
}
