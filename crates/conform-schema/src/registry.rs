//! # Schema Registry
//!
//! Loads the `*.schema.json` corpus from a directory at construction
//! time, failing fast on any schema that cannot be parsed or is
//! malformed, and offers validation against schemas by filename.
//!
//! ## Thread Safety
//!
//! `SchemaRegistry` is `Send + Sync` — schemas are immutable after
//! loading and validation borrows them without coordination.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use conform_core::ValidationReport;

use crate::error::SchemaError;
use crate::model::RootSchema;

/// A registry of parsed schema documents, indexed by filename.
///
/// One schema file corresponds to one HTTP resource/verb combination of
/// the remote API (e.g. `customers.get.schema.json` for `GET /customers`).
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Root directory containing the schema files.
    schema_dir: PathBuf,
    /// Map from schema filename (e.g. "customers.get.schema.json") to parsed schema.
    schemas: HashMap<String, RootSchema>,
}

impl SchemaRegistry {
    /// Load every `*.schema.json` file in the given directory.
    ///
    /// A schema that fails to parse, or parses but is malformed, fails
    /// the whole load: a bad schema is a configuration error, surfaced
    /// immediately rather than at first use.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] naming the offending file, or
    /// [`SchemaError::Io`] if the directory cannot be read.
    pub fn load(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = HashMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| SchemaError::Load {
            name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".schema.json") {
                continue;
            }

            let content = std::fs::read_to_string(&path)?;
            let schema = RootSchema::from_json_str(&content).map_err(|e| SchemaError::Load {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

            tracing::debug!(schema = %name, "loaded schema");
            schemas.insert(name.to_string(), schema);
        }

        tracing::debug!(
            count = schemas.len(),
            dir = %schema_dir.display(),
            "schema registry loaded"
        );

        Ok(Self { schema_dir, schemas })
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Returns the number of loaded schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the names of all loaded schemas, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Look up a loaded schema by filename.
    pub fn get(&self, name: &str) -> Option<&RootSchema> {
        self.schemas.get(name)
    }

    /// Validate a parsed JSON value against a named schema.
    ///
    /// Violations ride in the `Ok` report; `Err` is reserved for
    /// configuration problems (here: an unknown schema name).
    pub fn validate_document(
        &self,
        schema_name: &str,
        instance: &Value,
    ) -> Result<ValidationReport, SchemaError> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| SchemaError::NotFound(schema_name.to_string()))?;
        Ok(schema.validate(instance))
    }

    /// Validate a JSON document loaded from a file path against a named schema.
    ///
    /// # Errors
    ///
    /// [`SchemaError::DocumentLoad`] if the file cannot be read or is not
    /// JSON; [`SchemaError::NotFound`] for an unknown schema name.
    pub fn validate_file(
        &self,
        schema_name: &str,
        document_path: &Path,
    ) -> Result<ValidationReport, SchemaError> {
        let content =
            std::fs::read_to_string(document_path).map_err(|e| SchemaError::DocumentLoad {
                path: document_path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            })?;

        let instance: Value =
            serde_json::from_str(&content).map_err(|e| SchemaError::DocumentLoad {
                path: document_path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;

        self.validate_document(schema_name, &instance)
    }
}
