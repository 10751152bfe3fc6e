//! # Example Locator
//!
//! Finds the `schema`/`example` reference pairs of a document. Every node of
//! the document is enumerated and sorted by its canonical rendering before
//! any classification happens, so the output order depends only on document
//! content and never on map iteration order.
//!
//! Classification of an object node, by the shape of its two slots:
//!
//! | `schema`   | `example`  | outcome                   |
//! |------------|------------|---------------------------|
//! | `$ref`     | `$ref`     | binding                   |
//! | absent     | `$ref`     | missing schema            |
//! | absent     | inline     | skipped                   |
//! | any        | absent     | skipped                   |
//! | inline     | present    | inline unsupported        |
//! | present    | inline     | inline unsupported        |
//!
//! Inline schemas and inline examples on their own are ordinary OpenAPI
//! content; only a node carrying both keys is held to the reference form.

use apilint_core::{canonical_order, CanonicalizationError, MissingReferenceKind};
use serde_json::{Map, Value};

const SCHEMA_KEY: &str = "schema";
const EXAMPLE_KEY: &str = "example";
const REF_KEY: &str = "$ref";

/// A schema reference paired with the example that claims to satisfy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBinding {
    /// `schema.$ref`, verbatim.
    pub schema_ref: String,
    /// `example.$ref`, verbatim.
    pub example_ref: String,
}

/// A node whose pair could not be turned into a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// JSON Pointer of the node; empty for the document root.
    pub location: String,
    /// What is wrong with the pair.
    pub kind: MissingReferenceKind,
}

/// Outcome of classifying one candidate node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Binding(ExampleBinding),
    Missing(MissingReference),
}

enum Slot<'a> {
    Absent,
    Ref(&'a str),
    Inline,
}

fn slot<'a>(node: &'a Map<String, Value>, key: &str) -> Slot<'a> {
    match node.get(key) {
        None => Slot::Absent,
        Some(Value::Object(inner)) => match inner.get(REF_KEY) {
            Some(Value::String(reference)) => Slot::Ref(reference),
            _ => Slot::Inline,
        },
        Some(_) => Slot::Inline,
    }
}

fn classify(node: &Map<String, Value>) -> Option<Located> {
    let missing = |kind| {
        Some(Located::Missing(MissingReference {
            location: String::new(),
            kind,
        }))
    };
    match (slot(node, SCHEMA_KEY), slot(node, EXAMPLE_KEY)) {
        (Slot::Ref(schema), Slot::Ref(example)) => Some(Located::Binding(ExampleBinding {
            schema_ref: schema.to_string(),
            example_ref: example.to_string(),
        })),
        (Slot::Absent, Slot::Ref(_)) => missing(MissingReferenceKind::MissingSchema),
        (Slot::Absent, _) | (_, Slot::Absent) => None,
        (Slot::Inline, _) | (_, Slot::Inline) => missing(MissingReferenceKind::InlineUnsupported),
    }
}

/// Locate every example binding of a document, in canonical order.
///
/// # Errors
///
/// Returns `CanonicalizationError` if a node cannot be rendered canonically.
pub fn locate_examples(document: &Value) -> Result<Vec<Located>, CanonicalizationError> {
    let located = canonical_order(document)?
        .into_iter()
        .filter_map(|candidate| {
            let node = candidate.value.as_object()?;
            match classify(node)? {
                Located::Missing(missing) => Some(Located::Missing(MissingReference {
                    location: candidate.pointer,
                    ..missing
                })),
                binding => Some(binding),
            }
        })
        .collect();
    Ok(located)
}
