//! # Document Loader
//!
//! Reads a file and parses it into a [`serde_json::Value`] tree. Any JSON
//! value is accepted at the root; a failure is returned as a finding for
//! the caller to aggregate, never raised past the file.

use std::path::Path;

use apilint_core::LintError;
use serde_json::Value;

/// Read and parse one JSON document.
///
/// # Errors
///
/// Returns `LintError::FileRead` if the file cannot be read and
/// `LintError::Parse` if its contents are not valid JSON.
pub fn load_document(path: &Path) -> Result<Value, LintError> {
    let bytes = std::fs::read(path).map_err(|source| LintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LintError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
