//! # conform CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Conform — schema conformance toolkit for the accounting API corpus.
///
/// Loads the draft-03 resource schemas, reports on the fields they
/// declare, and validates candidate JSON documents against them.
#[derive(Parser, Debug)]
#[command(name = "conform", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the schemas in the registry.
    List(conform_cli::list::ListArgs),
    /// Show the field catalog for one schema.
    Describe(conform_cli::describe::DescribeArgs),
    /// Validate a JSON document against a named schema.
    Validate(conform_cli::validate::ValidateArgs),
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::List(args) => conform_cli::list::run(&args).map(|()| ExitCode::SUCCESS),
        Commands::Describe(args) => conform_cli::describe::run(&args).map(|()| ExitCode::SUCCESS),
        Commands::Validate(args) => conform_cli::validate::run(&args),
    };

    match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}
