//! # conform-schema — Draft-03 Schema Model, Validation & Registry
//!
//! The accounting API corpus describes each HTTP resource/verb
//! combination with one JSON Schema **draft-03** document
//! (`customers.get.schema.json`, `customers.customerNumber.contacts.
//! contactNumber.get.schema.json`, ...). This crate turns that corpus
//! into a working toolkit:
//!
//! - [`model`] — typed draft-03 schema representation, including the
//!   per-property `required: true` marker and the informational
//!   `sortable` / `filterable` / `readOnly` / `restdocs` keywords.
//! - [`validate`] — the validation engine: [`RootSchema::validate`]
//!   walks a candidate document and produces a
//!   [`conform_core::ValidationReport`].
//! - [`registry`] — [`SchemaRegistry`] loads a `schemas/` directory,
//!   failing fast on malformed schema files.
//! - [`fields`] — [`FieldCatalog`] flattens a schema into per-field
//!   metadata rows for documentation tooling.
//!
//! ## Crate Policy
//!
//! - Depends only on `conform-core` internally.
//! - Schema problems are configuration errors ([`SchemaError`]);
//!   document non-conformance is a result, never an error.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod fields;
pub mod model;
pub mod registry;
pub mod validate;

pub use error::SchemaError;
pub use fields::{FieldCatalog, FieldSpec};
pub use model::{AdditionalProperties, InstanceType, OneOrMany, RootSchema, SchemaObject};
pub use registry::SchemaRegistry;
