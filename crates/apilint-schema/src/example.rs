//! # Example Validation With Array Mode
//!
//! An example may hold a single instance or an array of instances meant to
//! be checked one by one against the same object schema. The first pass
//! validates the example as a whole. If it reports the root-level
//! "expected object, got array" mismatch, array mode is entered:
//! every element is validated independently and violations are re-anchored
//! at the element's index.
//!
//! In array mode the mismatch itself is always suppressed. What happens to
//! the remaining whole-document violations depends on [`ArrayMode`].

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::engine::{CompiledSchema, EngineError, Violation, ViolationKind};

/// Policy for whole-document violations once array mode is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayMode {
    /// Report per-element violations followed by every other whole-document
    /// violation. Overlap between the two passes is not deduplicated.
    #[default]
    Lenient,
    /// Report per-element violations only.
    Strict,
}

impl fmt::Display for ArrayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Error parsing an [`ArrayMode`] name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown array mode '{0}' (expected 'lenient' or 'strict')")]
pub struct ParseArrayModeError(pub String);

impl FromStr for ArrayMode {
    type Err = ParseArrayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseArrayModeError(s.to_string())),
        }
    }
}

/// Result of validating one example against its schema.
#[derive(Debug, Clone, Default)]
pub struct ExampleOutcome {
    /// Violations to report, in emission order.
    pub violations: Vec<Violation>,
    /// Whether the example was validated element by element.
    pub array_mode: bool,
}

impl ExampleOutcome {
    /// Returns true if the example satisfied its schema.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate a resolved example against a resolved schema.
///
/// # Errors
///
/// Returns `EngineError` if the schema cannot be compiled.
pub fn validate_example(
    schema: &Value,
    example: &Value,
    mode: ArrayMode,
) -> Result<ExampleOutcome, EngineError> {
    let compiled = CompiledSchema::compile(schema)?;
    let whole = compiled.check(example);

    // The engine orders keyword checks by name, so the mismatch is not
    // guaranteed to be the first violation.
    let entered_array_mode = whole
        .iter()
        .any(|v| v.kind == ViolationKind::ObjectExpectedArrayGiven);
    if !entered_array_mode {
        return Ok(ExampleOutcome {
            violations: whole,
            array_mode: false,
        });
    }

    let elements = example.as_array().ok_or(EngineError::NotAnArray)?;
    tracing::debug!(elements = elements.len(), %mode, "validating example in array mode");

    let mut violations: Vec<Violation> = elements
        .iter()
        .enumerate()
        .flat_map(|(index, element)| {
            compiled
                .check(element)
                .into_iter()
                .map(move |v| v.within_element(index))
        })
        .collect();

    if mode == ArrayMode::Lenient {
        violations.extend(
            whole
                .into_iter()
                .filter(|v| v.kind != ViolationKind::ObjectExpectedArrayGiven),
        );
    }

    Ok(ExampleOutcome {
        violations,
        array_mode: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pet_schema() -> Value {
        json!({
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "integer", "minimum": 0 }
            }
        })
    }

    #[test]
    fn single_valid_instance() {
        let outcome =
            validate_example(&pet_schema(), &json!({ "name": "rex" }), ArrayMode::Lenient).unwrap();
        assert!(outcome.is_valid());
        assert!(!outcome.array_mode);
    }

    #[test]
    fn single_invalid_instance_reports_every_violation() {
        let outcome =
            validate_example(&pet_schema(), &json!({ "age": -1 }), ArrayMode::Lenient).unwrap();
        assert_eq!(outcome.violations.len(), 2);
        assert!(!outcome.array_mode);
    }

    #[test]
    fn array_with_one_bad_element_reports_exactly_one_violation() {
        let example = json!([
            { "name": "rex" },
            { "name": "tom", "age": -3 },
            { "name": "kit" }
        ]);
        let outcome = validate_example(&pet_schema(), &example, ArrayMode::Lenient).unwrap();
        assert!(outcome.array_mode);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].instance_path, "/1/age");
        assert_eq!(outcome.violations[0].kind, ViolationKind::Content);
    }

    #[test]
    fn array_mode_through_ref_schema() {
        let definitions = json!({ "Pet": pet_schema() });
        let via_ref = json!({ "$ref": "#/definitions/Pet", "definitions": definitions.clone() });
        let via_all_of = json!({
            "allOf": [{ "$ref": "#/definitions/Pet" }],
            "definitions": definitions
        });
        let example = json!([{ "name": "rex" }, { "name": 3 }, { "name": "kit" }]);

        for schema in [via_ref, via_all_of] {
            let outcome = validate_example(&schema, &example, ArrayMode::Lenient).unwrap();
            assert!(outcome.array_mode, "{schema}");
            assert_eq!(outcome.violations.len(), 1, "{schema}");
            assert_eq!(outcome.violations[0].instance_path, "/1/name");
        }
    }

    #[test]
    fn valid_array_produces_no_violations() {
        let example = json!([{ "name": "rex" }, { "name": "kit" }]);
        let outcome = validate_example(&pet_schema(), &example, ArrayMode::Strict).unwrap();
        assert!(outcome.array_mode);
        assert!(outcome.is_valid());
    }

    #[test]
    fn lenient_keeps_other_whole_document_violations() {
        // The array itself violates maxItems; elements are fine.
        let schema = json!({ "type": "object", "maxItems": 1 });
        let example = json!([{}, {}]);

        let lenient = validate_example(&schema, &example, ArrayMode::Lenient).unwrap();
        let strict = validate_example(&schema, &example, ArrayMode::Strict).unwrap();

        assert!(lenient.array_mode && strict.array_mode);
        assert!(strict.is_valid());
        assert!(lenient
            .violations
            .iter()
            .all(|v| v.kind != ViolationKind::ObjectExpectedArrayGiven));
        assert_eq!(lenient.violations.len(), 1);
        assert_eq!(lenient.violations[0].schema_path, "/maxItems");
    }

    #[test]
    fn non_object_schema_never_enters_array_mode() {
        let schema = json!({ "type": "string" });
        let outcome = validate_example(&schema, &json!(["a", "b"]), ArrayMode::Lenient).unwrap();
        assert!(!outcome.array_mode);
        assert_eq!(outcome.violations.len(), 1);
    }

    #[test]
    fn malformed_schema_is_an_engine_error() {
        let schema = json!({ "type": 12 });
        let err = validate_example(&schema, &json!({}), ArrayMode::Lenient).unwrap_err();
        assert!(matches!(err, EngineError::Compile(_)));
    }

    #[test]
    fn array_mode_parses_case_insensitively() {
        assert_eq!("Strict".parse::<ArrayMode>().unwrap(), ArrayMode::Strict);
        assert_eq!(" lenient ".parse::<ArrayMode>().unwrap(), ArrayMode::Lenient);
        assert!("loose".parse::<ArrayMode>().is_err());
    }
}
