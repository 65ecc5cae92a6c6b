//! # List Subcommand
//!
//! Prints the schemas in the registry with their titles and restdocs
//! links, one block per resource/verb combination.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use conform_schema::SchemaRegistry;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing the *.schema.json corpus.
    #[arg(long, default_value = "schemas")]
    pub schema_dir: PathBuf,
}

pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    let registry = SchemaRegistry::load(&args.schema_dir)
        .with_context(|| format!("loading schemas from {}", args.schema_dir.display()))?;

    for name in registry.schema_names() {
        println!("{name}");
        if let Some(schema) = registry.get(name) {
            if let Some(title) = schema.title() {
                println!("  title:    {title}");
            }
            if let Some(restdocs) = schema.restdocs.as_deref() {
                println!("  restdocs: {restdocs}");
            }
        }
    }
    println!("{} schema(s)", registry.schema_count());
    Ok(())
}
