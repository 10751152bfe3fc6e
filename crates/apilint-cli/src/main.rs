//! # apilint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apilint_cli::validate::{run_validate, ValidateArgs};
use apilint_cli::validate_examples::{run_validate_examples, ValidateExamplesArgs};

/// Lint a tree of OpenAPI JSON documents.
///
/// Validates referenced examples against their referenced schemas and
/// checks embedded JSON Schemas for structural validity.
#[derive(Parser, Debug)]
#[command(name = "apilint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print findings as a JSON array instead of one per line.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate if an example matches the schema defined in the API spec.
    ValidateExamples(ValidateExamplesArgs),

    /// Validate all JSON Schemas found in the JSON files of a directory.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries findings only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::ValidateExamples(args) => run_validate_examples(&args, cli.json),
        Commands::Validate(args) => run_validate(&args, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
