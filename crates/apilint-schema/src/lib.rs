//! # apilint-schema — Schema Validation Integration
//!
//! Wraps the `jsonschema` engine behind the two contracts apilint needs.
//!
//! ## Example Validation (`engine`, `example`)
//!
//! [`CompiledSchema`] compiles an already-resolved schema and reports
//! structured [`Violation`]s. [`validate_example`] layers the array-mode
//! fallback on top: an example that is an array of instances, checked
//! against an object schema, is re-validated element by element.
//!
//! ## Schema-Validity Checking (`checker`)
//!
//! [`check_document`] walks a document and reports every object that is
//! not a structurally valid JSON Schema.
//!
//! ## Crate Policy
//!
//! - The engine never resolves cross-file references. Callers resolve
//!   every `$ref` pair before invoking it; anything left over fails
//!   compilation instead of reaching the network or the filesystem.
//! - Depends only on `jsonschema`/`serde_json` for values; no file I/O.

pub mod checker;
pub mod engine;
pub mod example;

pub use checker::{check_document, check_schema, SchemaFinding};
pub use engine::{CompiledSchema, EngineError, Violation, ViolationKind};
pub use example::{validate_example, ArrayMode, ExampleOutcome, ParseArrayModeError};
