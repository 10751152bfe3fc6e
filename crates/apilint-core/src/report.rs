//! # Report — Ordered Error Aggregation
//!
//! A [`Report`] accumulates every [`LintError`] of a run in the order the
//! pipeline produced them. The run succeeds iff the report is empty.

use std::fmt;

use serde::Serialize;

use crate::error::LintError;

/// Render a JSON Pointer location for humans: the empty pointer is `(root)`.
pub fn display_location(location: &str) -> &str {
    if location.is_empty() {
        "(root)"
    } else {
        location
    }
}

/// The shared `{origin, location, message}` error shape.
///
/// `origin` is a file path for document-level findings and the example
/// reference for binding-level findings. `location` holds the raw location
/// inside the origin (the empty string is the root) and is `None` when the
/// finding concerns the origin as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// File path or example reference the finding is attributed to.
    pub origin: String,
    /// Raw location inside the origin, if the finding has one.
    pub location: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl ErrorRecord {
    /// Build a record for a finding about the origin as a whole.
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            location: None,
            message: message.into(),
        }
    }

    /// Build a record for a finding at a location inside the origin.
    pub fn at(
        origin: impl Into<String>,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::new(origin, message)
        }
    }

    /// Deduplication key.
    pub fn key(&self) -> (&str, Option<&str>) {
        (&self.origin, self.location.as_deref())
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            None => write!(f, "{}: {}", self.origin, self.message),
            Some(location) => write!(
                f,
                "{}: {}: {}",
                self.origin,
                display_location(location),
                self.message
            ),
        }
    }
}

/// Ordered collection of every finding of a run.
#[derive(Debug, Default)]
pub struct Report {
    errors: Vec<LintError>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding.
    pub fn push(&mut self, error: LintError) {
        self.errors.push(error);
    }

    /// Returns the number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// A run succeeds iff it produced no findings.
    pub fn is_success(&self) -> bool {
        self.is_empty()
    }

    /// Returns a slice of all findings, in production order.
    pub fn errors(&self) -> &[LintError] {
        &self.errors
    }

    /// Project every finding onto the shared record shape.
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.errors.iter().map(LintError::record).collect()
    }

}

impl Extend<LintError> for Report {
    fn extend<I: IntoIterator<Item = LintError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}
