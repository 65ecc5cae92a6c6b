//! # Validate Subcommand
//!
//! Validates a JSON document against a named schema from the corpus and
//! prints the violations, if any. Non-conformance is reported through
//! the exit code, not as an error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use conform_core::ValidationReport;
use conform_schema::SchemaRegistry;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema filename to validate against (e.g. "customers.get.schema.json").
    pub schema: String,

    /// Path to the JSON document to validate.
    pub document: PathBuf,

    /// Directory containing the *.schema.json corpus.
    #[arg(long, default_value = "schemas")]
    pub schema_dir: PathBuf,
}

pub fn run(args: &ValidateArgs) -> anyhow::Result<ExitCode> {
    let registry = SchemaRegistry::load(&args.schema_dir)
        .with_context(|| format!("loading schemas from {}", args.schema_dir.display()))?;
    tracing::debug!(schemas = registry.schema_count(), "registry ready");

    let report = registry.validate_file(&args.schema, &args.document)?;
    print_outcome(&args.schema, &report);

    if report.is_conformant() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_outcome(schema_name: &str, report: &ValidationReport) {
    if report.is_conformant() {
        println!("{schema_name}: document conforms");
    } else {
        println!("{schema_name}: {} violation(s)", report.len());
        println!("{report}");
    }
}
