//! # Canonical Ordering — Deterministic Node Enumeration
//!
//! The example locator must classify candidate nodes in an order that does
//! not depend on how the host map type iterates its keys. Every node of a
//! document (the root included, scalars included) is rendered with
//! `serde_jcs` (RFC 8785: sorted keys, compact separators) and the whole
//! candidate set is sorted lexicographically by that rendering.
//!
//! Identical subtrees render identically, so the node's JSON Pointer is used
//! as the tie-breaker. Duplicates are kept, not collapsed.

use serde_json::Value;

use crate::error::CanonicalizationError;

/// Render a JSON value in JCS-canonical form.
pub fn canonical_string(value: &Value) -> Result<String, CanonicalizationError> {
    Ok(serde_jcs::to_string(value)?)
}

/// A document node together with its location and canonical rendering.
#[derive(Debug, Clone)]
pub struct CandidateNode<'a> {
    /// RFC 6901 JSON Pointer of the node; empty for the root.
    pub pointer: String,
    /// The node itself.
    pub value: &'a Value,
    /// JCS rendering used as the primary sort key.
    pub canonical: String,
}

/// Enumerate every node of `root` and sort by canonical rendering.
///
/// # Errors
///
/// Returns `CanonicalizationError` if any node cannot be rendered.
pub fn canonical_order(root: &Value) -> Result<Vec<CandidateNode<'_>>, CanonicalizationError> {
    let mut nodes = Vec::new();
    collect_descendants(root, String::new(), &mut nodes);

    let mut candidates = nodes
        .into_iter()
        .map(|(pointer, value)| {
            Ok(CandidateNode {
                canonical: canonical_string(value)?,
                pointer,
                value,
            })
        })
        .collect::<Result<Vec<_>, CanonicalizationError>>()?;

    candidates.sort_by(|a, b| {
        a.canonical
            .cmp(&b.canonical)
            .then_with(|| a.pointer.cmp(&b.pointer))
    });
    Ok(candidates)
}

fn collect_descendants<'a>(value: &'a Value, pointer: String, acc: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Object(map) => {
            acc.push((pointer.clone(), value));
            for (key, child) in map {
                collect_descendants(child, format!("{pointer}/{}", escape_token(key)), acc);
            }
        }
        Value::Array(items) => {
            acc.push((pointer.clone(), value));
            for (index, child) in items.iter().enumerate() {
                collect_descendants(child, format!("{pointer}/{index}"), acc);
            }
        }
        _ => acc.push((pointer, value)),
    }
}

fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
