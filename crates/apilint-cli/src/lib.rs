//! # apilint-cli — Command-Line Interface
//!
//! Provides the `apilint` binary.
//!
//! ## Subcommands
//!
//! - `apilint validate-examples <DIR>` — validate every example referenced
//!   from the documents under `DIR` against its referenced schema.
//! - `apilint validate <DIR>` — check that the schema objects embedded in
//!   every document under `DIR` are valid JSON Schemas.
//!
//! Findings go to stdout, one per line (or a JSON array with `--json`).
//! Diagnostics go to stderr through `tracing`. Both subcommands exit with
//! 0 when nothing was found, 1 when there are findings and 2 when the run
//! could not start.

pub mod output;
pub mod validate;
pub mod validate_examples;

use std::path::Path;

use anyhow::{bail, Result};

/// Fail early when the scan root is not a directory.
///
/// Discovery itself treats a missing root as empty; at the command line that
/// is almost always a typo, so it is reported as an operational error.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }
    Ok(())
}
