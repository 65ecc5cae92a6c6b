//! # Describe Subcommand
//!
//! Prints the field catalog of one schema: every declared field with its
//! type, constraints, and the sortable/filterable/read-only markers the
//! API documents but the validator never enforces.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use conform_schema::{FieldCatalog, SchemaRegistry};

/// Arguments for the describe subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Schema filename to describe (e.g. "customers.get.schema.json").
    pub schema: String,

    /// Directory containing the *.schema.json corpus.
    #[arg(long, default_value = "schemas")]
    pub schema_dir: PathBuf,
}

pub fn run(args: &DescribeArgs) -> anyhow::Result<()> {
    let registry = SchemaRegistry::load(&args.schema_dir)
        .with_context(|| format!("loading schemas from {}", args.schema_dir.display()))?;

    let Some(schema) = registry.get(&args.schema) else {
        bail!(
            "schema '{}' not found in {}",
            args.schema,
            args.schema_dir.display()
        );
    };

    if let Some(title) = schema.title() {
        println!("{title}");
    }
    if let Some(restdocs) = schema.restdocs.as_deref() {
        println!("restdocs: {restdocs}");
    }

    let catalog = FieldCatalog::from_schema(schema);
    for field in catalog.fields() {
        println!("  {field}");
    }
    println!(
        "{} field(s), {} sortable, {} filterable",
        catalog.len(),
        catalog.sortable_fields().len(),
        catalog.filterable_fields().len()
    );
    Ok(())
}
