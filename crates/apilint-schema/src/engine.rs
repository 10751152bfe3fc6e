//! # Validation Engine
//!
//! Compiles a resolved schema with the `jsonschema` crate and converts its
//! errors into [`Violation`]s. Each violation is classified at conversion
//! time: the engine's "expected object, got array" error at the instance
//! root is the structural signal that drives array mode, so it is matched
//! on the engine's error kind rather than on message text or keyword
//! location. The `type` keyword may sit behind `$ref` or `allOf`.

use std::fmt;

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::primitive_type::PrimitiveType;
use jsonschema::{Retrieve, Uri, ValidationError, Validator};
use serde_json::Value;
use thiserror::Error;

/// Retriever for example validation.
///
/// References must be resolved before the engine runs, so any retrieval
/// request is an error that fails compilation.
struct LocalOnlyRetriever;

impl Retrieve for LocalOnlyRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("unresolved external reference '{}'", uri.as_str()).into())
    }
}

/// Error raised when the engine cannot run at all.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The schema could not be compiled (malformed, or has unresolved `$ref`s).
    #[error("cannot compile schema: {0}")]
    Compile(String),

    /// Array mode was entered but the example is not an array.
    #[error("can't unpack example array")]
    NotAnArray,
}

/// How a violation relates to the shape of the example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The schema expects an object at the root but the example is an array.
    ObjectExpectedArrayGiven,
    /// Any other constraint failure.
    Content,
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Engine message.
    pub message: String,
    /// Structural classification.
    pub kind: ViolationKind,
}

impl Violation {
    /// Re-anchor a violation found in one element of an example array.
    pub fn within_element(self, index: usize) -> Self {
        Self {
            instance_path: format!("/{index}{}", self.instance_path),
            ..self
        }
    }

    fn from_engine(error: &ValidationError<'_>) -> Self {
        let instance_path = error.instance_path.to_string();
        let schema_path = error.schema_path.to_string();
        let kind = if instance_path.is_empty()
            && error.instance.is_array()
            && expects_object(&error.kind)
        {
            ViolationKind::ObjectExpectedArrayGiven
        } else {
            ViolationKind::Content
        };
        Self {
            instance_path,
            schema_path,
            message: error.to_string(),
            kind,
        }
    }
}

/// True for a `type` failure whose expected types admit `object`.
fn expects_object(kind: &ValidationErrorKind) -> bool {
    match kind {
        ValidationErrorKind::Type {
            kind: TypeKind::Single(expected),
        } => *expected == PrimitiveType::Object,
        ValidationErrorKind::Type {
            kind: TypeKind::Multiple(expected),
        } => (*expected).into_iter().any(|t| t == PrimitiveType::Object),
        _ => false,
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A schema compiled once and reusable across instances.
pub struct CompiledSchema<'s> {
    schema: &'s Value,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("schema", self.schema)
            .finish_non_exhaustive()
    }
}

impl<'s> CompiledSchema<'s> {
    /// Compile a resolved schema document.
    ///
    /// The draft is taken from the schema's `$schema` keyword when present.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Compile` if the schema is malformed or still
    /// contains references to other documents.
    pub fn compile(schema: &'s Value) -> Result<Self, EngineError> {
        let mut opts = jsonschema::options();
        opts.with_retriever(LocalOnlyRetriever);
        let validator = opts
            .build(schema)
            .map_err(|e| EngineError::Compile(e.to_string()))?;
        Ok(Self { schema, validator })
    }

    /// Validate one instance, returning every violation in engine order.
    pub fn check(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation::from_engine(&e))
            .collect()
    }
}
