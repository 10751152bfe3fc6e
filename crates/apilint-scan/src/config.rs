//! Scan configuration.
//!
//! Defaults match the `.partial.json` naming convention. Override via environment
//! variables or explicit construction; CLI flags take precedence over both.

pub use apilint_schema::ArrayMode;
use apilint_schema::ParseArrayModeError;

/// Files whose path contains this marker are reusable fragments: they are
/// valid reference targets but are never scanned as top-level documents.
pub const DEFAULT_FRAGMENT_MARKER: &str = ".partial.json";

const FRAGMENT_MARKER_VAR: &str = "APILINT_FRAGMENT_MARKER";
const ARRAY_MODE_VAR: &str = "APILINT_ARRAY_MODE";

/// Options controlling a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Path substring identifying fragment-only files.
    pub fragment_marker: String,
    /// Policy for whole-document violations in array mode.
    pub array_mode: ArrayMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            fragment_marker: DEFAULT_FRAGMENT_MARKER.to_string(),
            array_mode: ArrayMode::default(),
        }
    }
}

impl ScanOptions {
    /// Load options from environment variables.
    ///
    /// Variables:
    /// - `APILINT_FRAGMENT_MARKER` (default: `.partial.json`)
    /// - `APILINT_ARRAY_MODE` — `lenient` or `strict` (default: `lenient`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load options from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fragment_marker = match lookup(FRAGMENT_MARKER_VAR) {
            Some(marker) if marker.is_empty() => {
                return Err(ConfigError::EmptyFragmentMarker(FRAGMENT_MARKER_VAR.to_string()))
            }
            Some(marker) => marker,
            None => defaults.fragment_marker,
        };

        let array_mode = match lookup(ARRAY_MODE_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.array_mode,
        };

        Ok(Self {
            fragment_marker,
            array_mode,
        })
    }

    /// Replace the fragment marker.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyFragmentMarker` for an empty marker, which
    /// would exclude every file.
    pub fn with_fragment_marker(mut self, marker: impl Into<String>) -> Result<Self, ConfigError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(ConfigError::EmptyFragmentMarker("--fragment-marker".to_string()));
        }
        self.fragment_marker = marker;
        Ok(self)
    }

    /// Replace the array-mode policy.
    pub fn with_array_mode(mut self, array_mode: ArrayMode) -> Self {
        self.array_mode = array_mode;
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("fragment marker from {0} must not be empty")]
    EmptyFragmentMarker(String),
    #[error(transparent)]
    InvalidArrayMode(#[from] ParseArrayModeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let options = ScanOptions::from_lookup(lookup(&[])).unwrap();
        assert_eq!(options, ScanOptions::default());
        assert_eq!(options.fragment_marker, ".partial.json");
        assert_eq!(options.array_mode, ArrayMode::Lenient);
    }

    #[test]
    fn environment_overrides_defaults() {
        let options = ScanOptions::from_lookup(lookup(&[
            ("APILINT_FRAGMENT_MARKER", ".fragment."),
            ("APILINT_ARRAY_MODE", "strict"),
        ]))
        .unwrap();
        assert_eq!(options.fragment_marker, ".fragment.");
        assert_eq!(options.array_mode, ArrayMode::Strict);
    }

    #[test]
    fn invalid_array_mode_is_rejected() {
        let err = ScanOptions::from_lookup(lookup(&[("APILINT_ARRAY_MODE", "sloppy")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArrayMode(_)));
    }

    #[test]
    fn empty_marker_is_rejected() {
        let err =
            ScanOptions::from_lookup(lookup(&[("APILINT_FRAGMENT_MARKER", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFragmentMarker(_)));
        assert!(ScanOptions::default().with_fragment_marker("").is_err());
    }

    #[test]
    fn builder_methods_override() {
        let options = ScanOptions::default()
            .with_fragment_marker(".shared.json")
            .unwrap()
            .with_array_mode(ArrayMode::Strict);
        assert_eq!(options.fragment_marker, ".shared.json");
        assert_eq!(options.array_mode, ArrayMode::Strict);
    }
}
