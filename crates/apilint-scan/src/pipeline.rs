//! # Scan Pipeline
//!
//! Drives discovery, loading, location, resolution and validation for a
//! directory tree. Each file is processed to completion before the next one
//! starts and returns its findings as a value; [`Scanner::scan`] appends
//! them to the run's [`Report`] in file order.
//!
//! Nothing here aborts a run. A bad file, an unresolvable reference or an
//! uncompilable schema becomes a finding and the scan moves on.

use std::path::{Path, PathBuf};

use apilint_core::{LintError, Report};
use apilint_schema::validate_example;

use crate::config::ScanOptions;
use crate::discovery::discover_documents;
use crate::loader::load_document;
use crate::locator::{locate_examples, ExampleBinding, Located};
use crate::resolver::resolve_reference;

/// Summary of a completed scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Every finding, in production order.
    pub errors: Report,
    /// Number of documents discovered and scanned.
    pub files_scanned: usize,
    /// Number of example bindings that reached validation or resolution.
    pub bindings_checked: usize,
}

impl ScanReport {
    /// Returns true if the scan produced no findings.
    pub fn is_success(&self) -> bool {
        self.errors.is_success()
    }
}

/// Findings and binding count for one file.
#[derive(Debug, Default)]
struct FileOutcome {
    errors: Vec<LintError>,
    bindings: usize,
}

/// Example validation pipeline over a directory tree.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with the given options.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan every document under `root`.
    pub fn scan(&self, root: &Path) -> ScanReport {
        let files = discover_documents(root, &self.options.fragment_marker);
        let mut report = ScanReport {
            files_scanned: files.len(),
            ..ScanReport::default()
        };

        for path in &files {
            let outcome = self.scan_document(path);
            report.bindings_checked += outcome.bindings;
            report.errors.extend(outcome.errors);
        }

        tracing::info!(
            files = report.files_scanned,
            bindings = report.bindings_checked,
            errors = report.errors.len(),
            "scan complete"
        );
        report
    }

    /// Scan a single document, returning its findings.
    pub fn scan_file(&self, path: &Path) -> Vec<LintError> {
        self.scan_document(path).errors
    }

    fn scan_document(&self, path: &Path) -> FileOutcome {
        let document = match load_document(path) {
            Ok(document) => document,
            Err(e) => {
                return FileOutcome {
                    errors: vec![e],
                    bindings: 0,
                }
            }
        };

        let located = match locate_examples(&document) {
            Ok(located) => located,
            Err(source) => {
                return FileOutcome {
                    errors: vec![LintError::Canonicalization {
                        path: path.to_path_buf(),
                        source,
                    }],
                    bindings: 0,
                }
            }
        };

        let mut outcome = FileOutcome::default();
        for item in located {
            match item {
                Located::Missing(missing) => outcome.errors.push(LintError::ReferenceMissing {
                    path: path.to_path_buf(),
                    location: missing.location,
                    kind: missing.kind,
                }),
                Located::Binding(binding) => {
                    outcome.bindings += 1;
                    outcome.errors.extend(self.check_binding(path, &binding));
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            bindings = outcome.bindings,
            errors = outcome.errors.len(),
            "scanned document"
        );
        outcome
    }

    fn check_binding(&self, path: &Path, binding: &ExampleBinding) -> Vec<LintError> {
        let resolution_error = |reason: String| LintError::ReferenceResolution {
            example_ref: binding.example_ref.clone(),
            schema_ref: binding.schema_ref.clone(),
            reason,
        };

        let example = match resolve_reference(&binding.example_ref, path) {
            Ok(resolved) => resolved,
            Err(e) => return vec![resolution_error(e.to_string())],
        };
        let schema = match resolve_reference(&binding.schema_ref, path) {
            Ok(resolved) => resolved,
            Err(e) => return vec![resolution_error(e.to_string())],
        };

        match validate_example(&schema.value, &example.value, self.options.array_mode) {
            Ok(outcome) => outcome
                .violations
                .into_iter()
                .map(|v| LintError::Validation {
                    example_ref: binding.example_ref.clone(),
                    location: v.instance_path,
                    message: v.message,
                })
                .collect(),
            Err(e) => vec![LintError::Engine {
                example_ref: binding.example_ref.clone(),
                reason: e.to_string(),
            }],
        }
    }
}

/// Scan `root` with default options.
pub fn scan_directory(root: impl Into<PathBuf>) -> ScanReport {
    Scanner::default().scan(&root.into())
}
