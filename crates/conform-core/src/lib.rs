//! # conform-core — Foundational Types for Conform
//!
//! This crate defines the result vocabulary shared by every other crate
//! in the workspace: paths into candidate documents, individual constraint
//! violations, and the reports that collect them. It depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Non-conformance is data, not an error.** A document that fails
//!    validation produces a [`ValidationReport`] carrying [`Violation`]s.
//!    Error types are reserved for configuration problems (malformed
//!    schemas, unreadable files), which live in `conform-schema`.
//!
//! 2. **Paths are structured.** [`InstancePath`] is a list of key/index
//!    segments, rendered as an RFC 6901 JSON Pointer. No bare strings
//!    concatenated during the validation walk.
//!
//! 3. **Deterministic reports.** Violations are appended in walk order,
//!    and the walk order is deterministic, so validating the same
//!    (schema, instance) pair twice yields identical reports.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `conform-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod path;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use path::{InstancePath, PathParseError, PathSegment};
pub use report::{ConstraintKind, ValidationReport, Violation};
