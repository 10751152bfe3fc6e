//! # Error Types — Run-Level Error Taxonomy
//!
//! Every finding a scan produces is a [`LintError`]. Findings are recovered
//! at the smallest meaningful granularity (one file or one example binding)
//! and appended to a [`crate::Report`]; none of them aborts a run.
//!
//! Lower-level errors ([`CanonicalizationError`], [`PathQueryError`]) stay
//! local to the operation that raises them and are converted at the
//! pipeline boundary.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::report::{display_location, ErrorRecord};

/// Why a `schema`/`example` pair could not be turned into a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReferenceKind {
    /// `example.$ref` is present but `schema` is absent.
    MissingSchema,
    /// `schema` or `example` is present but is not `{"$ref": <string>}`.
    InlineUnsupported,
}

impl fmt::Display for MissingReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSchema => f.write_str("missing schema for example"),
            Self::InlineUnsupported => {
                f.write_str("inline objects unsupported, reference required")
            }
        }
    }
}

/// A single finding produced anywhere in a scan.
#[derive(Error, Debug)]
pub enum LintError {
    /// The document file could not be read.
    #[error("{}: cannot read file: {source}", path.display())]
    FileRead {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document file is not valid JSON.
    #[error("{}: invalid JSON: {reason}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// A node carries an incomplete or inline `schema`/`example` pair.
    #[error("{}: {}: {kind}", path.display(), display_location(location))]
    ReferenceMissing {
        /// Document the node was found in.
        path: PathBuf,
        /// JSON Pointer of the offending node.
        location: String,
        /// What is wrong with the pair.
        kind: MissingReferenceKind,
    },

    /// One side of a binding could not be resolved to a document.
    #[error("[example={example_ref}, schema={schema_ref}] {reason}")]
    ReferenceResolution {
        /// Example reference of the binding, verbatim.
        example_ref: String,
        /// Schema reference of the binding, verbatim.
        schema_ref: String,
        /// What failed: unreadable file or unresolved path query.
        reason: String,
    },

    /// The example violates its schema.
    #[error("{example_ref}: {}: {message}", display_location(location))]
    Validation {
        /// Example reference the violation is attributed to.
        example_ref: String,
        /// JSON Pointer of the violating value inside the example.
        location: String,
        /// Engine message.
        message: String,
    },

    /// The validation engine could not compile or run the schema.
    #[error("{example_ref}: {reason}")]
    Engine {
        /// Example reference of the binding being validated.
        example_ref: String,
        /// Engine diagnostic.
        reason: String,
    },

    /// An object in a document is not a structurally valid JSON Schema.
    #[error("{}: {}: {message}", path.display(), display_location(location))]
    InvalidSchema {
        /// Document the object was found in.
        path: PathBuf,
        /// Dotted location of the object inside the document.
        location: String,
        /// Meta-schema diagnostic.
        message: String,
    },

    /// A document node could not be rendered canonically for ordering.
    #[error("{}: {source}", path.display())]
    Canonicalization {
        /// Document being ordered.
        path: PathBuf,
        /// Underlying rendering failure.
        #[source]
        source: CanonicalizationError,
    },
}

impl LintError {
    /// Project the error onto the shared `{origin, location, message}` shape.
    pub fn record(&self) -> ErrorRecord {
        match self {
            Self::FileRead { path, source } => ErrorRecord::new(
                path.display().to_string(),
                format!("cannot read file: {source}"),
            ),
            Self::Parse { path, reason } => ErrorRecord::new(
                path.display().to_string(),
                format!("invalid JSON: {reason}"),
            ),
            Self::ReferenceMissing {
                path,
                location,
                kind,
            } => ErrorRecord::at(path.display().to_string(), location, kind.to_string()),
            Self::ReferenceResolution {
                example_ref,
                schema_ref,
                reason,
            } => ErrorRecord::new(
                example_ref,
                format!("cannot resolve binding with schema {schema_ref}: {reason}"),
            ),
            Self::Validation {
                example_ref,
                location,
                message,
            } => ErrorRecord::at(example_ref, location, message),
            Self::Engine {
                example_ref,
                reason,
            } => ErrorRecord::new(example_ref, reason),
            Self::InvalidSchema {
                path,
                location,
                message,
            } => ErrorRecord::at(path.display().to_string(), location, message),
            Self::Canonicalization { path, source } => {
                ErrorRecord::new(path.display().to_string(), source.to_string())
            }
        }
    }
}

/// Error while rendering a JSON node in canonical form.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JCS serialization failed.
    #[error("canonical rendering failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error while parsing a path query string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathQueryError {
    /// The query does not start at the document root (`$`).
    #[error("path query must start with '$': {0}")]
    MissingRoot(String),

    /// A dotted field access has no name.
    #[error("empty field name at offset {offset} in '{query}'")]
    EmptyField {
        /// Full query text.
        query: String,
        /// Byte offset of the empty field.
        offset: usize,
    },

    /// A quoted key access is not closed with `"]`.
    #[error("unterminated key access at offset {offset} in '{query}'")]
    UnterminatedKey {
        /// Full query text.
        query: String,
        /// Byte offset of the opening bracket.
        offset: usize,
    },

    /// A character that starts neither a field nor a key access.
    #[error("unexpected '{found}' at offset {offset} in '{query}'")]
    Unexpected {
        /// Full query text.
        query: String,
        /// Byte offset of the character.
        offset: usize,
        /// The character found.
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_kind_messages() {
        assert_eq!(
            MissingReferenceKind::MissingSchema.to_string(),
            "missing schema for example"
        );
        assert_eq!(
            MissingReferenceKind::InlineUnsupported.to_string(),
            "inline objects unsupported, reference required"
        );
    }

    #[test]
    fn validation_display_uses_root_marker() {
        let err = LintError::Validation {
            example_ref: "example.json#rootobject1/aaa/bbb".to_string(),
            location: String::new(),
            message: "\"exampleField\" is a required property".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "example.json#rootobject1/aaa/bbb: (root): \"exampleField\" is a required property"
        );
    }

    #[test]
    fn resolution_display_names_both_refs() {
        let err = LintError::ReferenceResolution {
            example_ref: "ex.json".to_string(),
            schema_ref: "schema.json#/a".to_string(),
            reason: "cannot find the path".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("example=ex.json"));
        assert!(display.contains("schema=schema.json#/a"));
    }

    #[test]
    fn validation_record_keeps_raw_root_location() {
        let err = LintError::Validation {
            example_ref: "example.json".to_string(),
            location: String::new(),
            message: "bad".to_string(),
        };
        let record = err.record();
        assert_eq!(record.location.as_deref(), Some(""));
        assert_eq!(record.to_string(), "example.json: (root): bad");
        assert_eq!(record.to_string(), err.to_string());
    }

    #[test]
    fn record_projection_keeps_location() {
        let err = LintError::ReferenceMissing {
            path: PathBuf::from("api/spec.json"),
            location: "/paths/~1pets/get".to_string(),
            kind: MissingReferenceKind::MissingSchema,
        };
        let record = err.record();
        assert_eq!(record.origin, "api/spec.json");
        assert_eq!(record.location.as_deref(), Some("/paths/~1pets/get"));
        assert_eq!(record.message, "missing schema for example");
    }

    #[test]
    fn file_read_record_has_no_location() {
        let err = LintError::FileRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let record = err.record();
        assert!(record.location.is_none());
        assert!(record.message.contains("gone"));
    }
}
