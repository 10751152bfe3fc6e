//! # apilint-core — Foundational Types for apilint
//!
//! This crate defines the value-level primitives shared by every other
//! crate in the workspace. It performs no file I/O and depends on nothing
//! internal.
//!
//! ## Contents
//!
//! - [`Reference`] — a `$ref` string split into file part and fragment.
//! - [`PathQuery`] — a fragment translated into the `$.a["200"].b` query
//!   dialect, evaluable against a [`serde_json::Value`].
//! - [`canonical`] — canonical string rendering of JSON nodes and the
//!   deterministic candidate ordering used by the example locator.
//! - [`LintError`] / [`Report`] — the run-level error taxonomy and the
//!   ordered aggregator every stage appends to.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `apilint-*` crates (this is the leaf of the DAG).
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Numeric fragment segments always address object keys, never array indices.

pub mod canonical;
pub mod error;
pub mod path_query;
pub mod reference;
pub mod report;

pub use canonical::{canonical_order, canonical_string, CandidateNode};
pub use error::{CanonicalizationError, LintError, MissingReferenceKind, PathQueryError};
pub use path_query::{PathQuery, PathSegment};
pub use reference::{normalize_separators, Reference};
pub use report::{display_location, ErrorRecord, Report};
