//! # Validate-Examples Subcommand
//!
//! Validates every example referenced from the documents under a directory
//! against the schema referenced next to it.
//!
//! Configuration is layered: built-in defaults, then `APILINT_*` environment
//! variables, then command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use apilint_scan::{ArrayMode, ScanOptions, Scanner};

use crate::output::print_report;

/// Arguments for the `apilint validate-examples` subcommand.
#[derive(Args, Debug)]
pub struct ValidateExamplesArgs {
    /// Directory to scan recursively for `*.json` documents.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Path substring marking fragment-only files, which are not scanned.
    #[arg(long, value_name = "MARKER")]
    pub fragment_marker: Option<String>,

    /// Handling of whole-document violations for array examples
    /// (`lenient` or `strict`).
    #[arg(long, value_name = "MODE")]
    pub array_mode: Option<ArrayMode>,
}

impl ValidateExamplesArgs {
    /// Overlay the flags on options loaded from the environment.
    pub fn scan_options(&self) -> Result<ScanOptions> {
        let mut options = ScanOptions::from_env().context("invalid APILINT_* environment")?;
        if let Some(marker) = &self.fragment_marker {
            options = options.with_fragment_marker(marker.as_str())?;
        }
        if let Some(mode) = self.array_mode {
            options = options.with_array_mode(mode);
        }
        Ok(options)
    }
}

/// Execute the validate-examples subcommand.
///
/// Returns exit code: 0 when every example is valid, 1 otherwise.
pub fn run_validate_examples(args: &ValidateExamplesArgs, json: bool) -> Result<u8> {
    crate::ensure_directory(&args.dir)?;
    let options = args.scan_options()?;
    tracing::debug!(
        dir = %args.dir.display(),
        fragment_marker = %options.fragment_marker,
        array_mode = %options.array_mode,
        "validating examples"
    );

    let report = Scanner::new(options).scan(&args.dir);
    print_report(&report.errors, json)?;

    tracing::info!(
        files = report.files_scanned,
        bindings = report.bindings_checked,
        errors = report.errors.len(),
        "example validation finished"
    );

    if report.is_success() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(dir: PathBuf) -> ValidateExamplesArgs {
        ValidateExamplesArgs {
            dir,
            fragment_marker: None,
            array_mode: None,
        }
    }

    #[test]
    fn missing_directory_is_an_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_validate_examples(&args(dir.path().join("absent")), false).is_err());
    }

    #[test]
    fn clean_tree_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.json"), "{}").unwrap();
        assert_eq!(run_validate_examples(&args(dir.path().to_path_buf()), false).unwrap(), 0);
    }

    #[test]
    fn findings_exit_one() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("doc.json"),
            r#"{"example": {"$ref": "x.json"}}"#,
        )
        .unwrap();
        assert_eq!(run_validate_examples(&args(dir.path().to_path_buf()), true).unwrap(), 1);
    }

    #[test]
    fn flags_override_defaults() {
        let mut a = args(PathBuf::from("."));
        a.fragment_marker = Some(".shared.json".to_string());
        a.array_mode = Some(ArrayMode::Strict);
        let options = a.scan_options().unwrap();
        assert_eq!(options.fragment_marker, ".shared.json");
        assert_eq!(options.array_mode, ArrayMode::Strict);
    }

    #[test]
    fn empty_marker_flag_is_rejected() {
        let mut a = args(PathBuf::from("."));
        a.fragment_marker = Some(String::new());
        assert!(a.scan_options().is_err());
    }
}
