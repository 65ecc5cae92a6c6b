//! # conform-cli — Schema Corpus Command-Line Interface
//!
//! Thin command layer over `conform-schema`. Each subcommand module
//! carries its clap `Args` struct and a `run` function; `main` only
//! parses and dispatches.
//!
//! ## Subcommands
//!
//! - `list` — List the schemas in the registry.
//! - `describe` — Show the field catalog for one schema.
//! - `validate` — Validate a JSON document against a named schema.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from validation logic.
//! - Handler functions delegate to `conform-schema` — no schema logic here.
//! - Exit codes: 0 conformant, 1 violations found, 2 configuration error.

pub mod describe;
pub mod list;
pub mod validate;
