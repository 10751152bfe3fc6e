//! # apilint-scan — Example Validation Pipeline
//!
//! Turns a directory of OpenAPI-style JSON documents into an ordered list
//! of findings. Components, leaves first:
//!
//! - [`discovery`] — enumerates `*.json` files, skipping fragment-only files.
//! - [`loader`] — reads and parses one document.
//! - [`locator`] — finds `schema`/`example` reference pairs in a document,
//!   in canonical order.
//! - [`resolver`] — resolves a reference to an in-memory sub-document.
//! - [`pipeline`] — drives the stages for every file and binding and
//!   aggregates findings into a [`apilint_core::Report`].
//! - [`schema_check`] — the sibling structural schema check over a directory.
//!
//! ## Concurrency
//!
//! The pipeline is sequential: one file at a time, one binding at a time.
//! Per-file work returns its findings as a value, so nothing is shared
//! across files except the final report.

pub mod config;
pub mod discovery;
pub mod loader;
pub mod locator;
pub mod pipeline;
pub mod resolver;
pub mod schema_check;

pub use config::{ArrayMode, ConfigError, ScanOptions, DEFAULT_FRAGMENT_MARKER};
pub use discovery::discover_documents;
pub use loader::load_document;
pub use locator::{locate_examples, ExampleBinding, Located, MissingReference};
pub use pipeline::{scan_directory, ScanReport, Scanner};
pub use resolver::{resolve_reference, shape_of, ResolveError, ResolvedDocument};
pub use schema_check::check_directory;
