//! # Directory Schema Check
//!
//! The structural sibling of the example pipeline: every `*.json` document
//! under a directory, fragments included, is walked and each of its
//! schema-bearing objects is checked against the JSON Schema meta-schema.

use std::path::Path;

use apilint_core::{LintError, Report};
use apilint_schema::check_document;

use crate::discovery::discover_documents;
use crate::loader::load_document;

/// Check every document under `root`.
///
/// Each `(file, location)` pair is reported at most once.
pub fn check_directory(root: &Path) -> Report {
    let mut report = Report::new();

    // An empty marker disables fragment exclusion.
    for path in discover_documents(root, "") {
        let document = match load_document(&path) {
            Ok(document) => document,
            Err(e) => {
                report.push(e);
                continue;
            }
        };

        let findings = check_document(&document);
        tracing::debug!(path = %path.display(), findings = findings.len(), "checked schemas");
        report.extend(findings.into_iter().map(|finding| LintError::InvalidSchema {
            path: path.clone(),
            location: finding.location,
            message: finding.message,
        }));
    }

    report
}
