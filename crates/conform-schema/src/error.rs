//! # Schema Errors
//!
//! Configuration errors raised while loading and checking schemas.
//! These are strictly distinct from validation failure: a document that
//! does not conform to a well-formed schema produces a
//! [`conform_core::ValidationReport`], never a [`SchemaError`].

use thiserror::Error;

/// Error raised by schema loading, parsing, or well-formedness checking.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema text could not be parsed into the draft-03 model.
    #[error("schema parse error: {reason}")]
    Parse {
        /// Reason the schema could not be parsed.
        reason: String,
    },

    /// The schema parsed, but is not a usable draft-03 schema.
    #[error("malformed schema at {pointer}: {reason}")]
    Malformed {
        /// JSON Pointer to the offending schema node.
        pointer: String,
        /// Reason the schema is unusable.
        reason: String,
    },

    /// A schema file could not be loaded into the registry.
    #[error("schema load error for '{name}': {reason}")]
    Load {
        /// Schema filename.
        name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The requested schema is not in the registry.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// The candidate document could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error reading a schema or document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
