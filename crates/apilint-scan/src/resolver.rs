//! # Reference Resolver
//!
//! Turns a `$ref` string into an in-memory document. The file part is
//! resolved against the directory of the referencing document; the
//! fragment, if any, is translated into a [`PathQuery`] and evaluated
//! against the loaded file. Extracted values are never written back to
//! disk.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use apilint_core::{LintError, PathQuery, Reference};
use serde_json::Value;
use thiserror::Error;

use crate::loader::load_document;

/// A value extracted from a referenced file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDocument {
    /// File the value was loaded from.
    pub source: PathBuf,
    /// Query applied to the file, or `None` for the whole file.
    pub query: Option<PathQuery>,
    /// The extracted value.
    pub value: Value,
}

/// Failure to resolve one reference.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("can't load the path: {query}: {source}")]
    Load {
        query: PathQuery,
        #[source]
        source: LintError,
    },

    #[error("can't find the path: {query}: {shape}")]
    PathNotFound { query: PathQuery, shape: String },
}

/// Resolve `raw` relative to the document at `current_document`.
///
/// A reference with an empty file part addresses the referencing document
/// itself and resolves to the whole of it.
///
/// # Errors
///
/// Returns `ResolveError::Load` if the target file cannot be read or parsed
/// and `ResolveError::PathNotFound` if the fragment does not resolve.
pub fn resolve_reference(
    raw: &str,
    current_document: &Path,
) -> Result<ResolvedDocument, ResolveError> {
    let reference = Reference::parse(raw);
    let source = if reference.is_local() {
        current_document.to_path_buf()
    } else {
        current_document
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(reference.file_part())
    };
    let query = reference.path_query();

    let document = load_document(&source).map_err(|source| ResolveError::Load {
        query: query.clone().unwrap_or_default(),
        source,
    })?;

    let value = match &query {
        None => document,
        Some(q) => match q.evaluate(&document) {
            Some(found) => found.clone(),
            None => {
                return Err(ResolveError::PathNotFound {
                    query: q.clone(),
                    shape: shape_of(&document),
                })
            }
        },
    };

    tracing::debug!(reference = raw, source = %source.display(), "resolved reference");
    Ok(ResolvedDocument {
        source,
        query,
        value,
    })
}

/// One-level shape summary of a value, for diagnostics.
///
/// Objects list their keys with the kind of each value:
/// `{"a": object, "b": array[2], "c": string}`.
pub fn shape_of(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut out = String::from("{");
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: {}", Value::String(key.clone()), kind_of(child));
            }
            out.push('}');
            out
        }
        other => kind_of(other),
    }
}

fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array[{}]", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
