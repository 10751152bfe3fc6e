//! # Schema-Validity Checker
//!
//! Walks a document and checks that the objects holding leaf values are
//! structurally valid JSON Schemas, i.e. that they compile against the
//! meta-schema of their declared draft.
//!
//! Traversal: an object at location `L` is checked once as soon as one of
//! its values is not an object; object values are descended into with
//! location `L.key`. Keys are visited in sorted order and each location is
//! reported at most once.

use std::collections::BTreeSet;

use jsonschema::{Retrieve, Uri};
use serde_json::{Map, Value};

/// Retriever for structural checking.
///
/// Cross-document references are out of scope for a structural check, so
/// every retrieval resolves to the permissive schema `{}` and never
/// touches the network.
struct PermissiveRetriever;

impl Retrieve for PermissiveRetriever {
    fn retrieve(
        &self,
        _uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Ok(serde_json::json!({}))
    }
}

/// One object that failed the structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFinding {
    /// Dotted location of the object; empty for the document root.
    pub location: String,
    /// Meta-schema diagnostic.
    pub message: String,
}

/// Check that a single object is a structurally valid JSON Schema.
///
/// # Errors
///
/// Returns the engine's diagnostic if the object does not compile.
pub fn check_schema(schema: &Value) -> Result<(), String> {
    let mut opts = jsonschema::options();
    opts.with_retriever(PermissiveRetriever);
    opts.build(schema).map(|_| ()).map_err(|e| e.to_string())
}

/// Check every schema-bearing object of a document.
///
/// Returns findings ordered by traversal. A document whose root is not an
/// object has nothing to check.
pub fn check_document(document: &Value) -> Vec<SchemaFinding> {
    let mut findings = Vec::new();
    let mut checked = BTreeSet::new();
    if let Some(root) = document.as_object() {
        walk(root, String::new(), &mut checked, &mut findings);
    }
    findings
}

fn walk(
    object: &Map<String, Value>,
    location: String,
    checked: &mut BTreeSet<String>,
    findings: &mut Vec<SchemaFinding>,
) {
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();

    for key in keys {
        match &object[key.as_str()] {
            Value::Object(child) => {
                walk(child, format!("{location}.{key}"), checked, findings);
            }
            _ => {
                if checked.insert(location.clone()) {
                    let candidate = Value::Object(object.clone());
                    if let Err(message) = check_schema(&candidate) {
                        tracing::debug!(%location, "object is not a valid JSON Schema");
                        findings.push(SchemaFinding {
                            location: location.clone(),
                            message,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_has_no_findings() {
        assert!(check_document(&json!({})).is_empty());
    }

    #[test]
    fn valid_root_schema() {
        let doc = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "properties": { "evilfield": { "type": "boolean" } }
        });
        assert!(check_document(&doc).is_empty());
    }

    #[test]
    fn invalid_root_schema_is_reported_once() {
        let doc = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "description": "x",
            "properties": { "evilfield": { "type": "unsupported error" } }
        });
        let findings = check_document(&doc);
        // The root holds a leaf ("$schema") and is invalid through its
        // nested property. The nested object is checked on its own too.
        let locations: Vec<&str> = findings.iter().map(|f| f.location.as_str()).collect();
        assert_eq!(locations, ["", ".properties.evilfield"]);
    }

    #[test]
    fn sibling_objects_are_checked_separately() {
        let doc = json!({
            "200": { "type": "string" },
            "400": { "type": "nope" }
        });
        let findings = check_document(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location, ".400");
    }

    #[test]
    fn non_object_root_is_skipped() {
        assert!(check_document(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn check_schema_accepts_unknown_keywords() {
        assert!(check_schema(&json!({ "openapi": "3.0.0", "info": { "title": "x" } })).is_ok());
    }
}
