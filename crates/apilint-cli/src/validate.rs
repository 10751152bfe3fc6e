//! # Validate Subcommand
//!
//! Checks that the schema objects embedded in every `*.json` document under
//! a directory are structurally valid JSON Schemas. Fragment files are
//! included.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use apilint_scan::check_directory;

use crate::output::print_report;

/// Arguments for the `apilint validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory to scan recursively for `*.json` documents.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every schema is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, json: bool) -> Result<u8> {
    crate::ensure_directory(&args.dir)?;

    let report = check_directory(&args.dir);
    print_report(&report, json)?;

    tracing::info!(errors = report.len(), "schema validation finished");

    if report.is_success() {
        Ok(0)
    } else {
        Ok(1)
    }
}
