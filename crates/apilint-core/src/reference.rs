//! # References — `$ref` Strings Split Into File and Fragment
//!
//! A reference names another document and optionally a location inside it:
//! `schemas/pet.json#/definitions/Pet`. Parsing is total; every string is a
//! valid reference. Degenerate forms fall back to addressing a whole file:
//!
//! - no `#` at all: the whole file;
//! - empty file part (`#/a/b`): the whole referencing document;
//! - empty fragment (`pet.json#`): the whole file.
//!
//! Backslashes are normalized to forward slashes before splitting so that
//! references written on Windows resolve identically everywhere.

use std::fmt;

use crate::path_query::PathQuery;

/// Replace platform backslashes with forward slashes.
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// A parsed `$ref` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    raw: String,
    file: String,
    fragment: Option<String>,
}

impl Reference {
    /// Parse a reference string. Splits on the first `#`.
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_separators(raw);
        let (file, fragment) = match normalized.split_once('#') {
            None => (normalized.clone(), None),
            Some((file, fragment)) if file.is_empty() || fragment.is_empty() => {
                (file.to_string(), None)
            }
            Some((file, fragment)) => (file.to_string(), Some(fragment.to_string())),
        };
        Self {
            raw: raw.to_string(),
            file,
            fragment,
        }
    }

    /// The reference exactly as written in the document.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Path of the referenced file; empty means the referencing document.
    pub fn file_part(&self) -> &str {
        &self.file
    }

    /// The fragment after `#`, if the reference addresses a sub-document.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if the reference points into the referencing document.
    pub fn is_local(&self) -> bool {
        self.file.is_empty()
    }

    /// The path query addressing the target inside the file, or `None` for
    /// whole-file references.
    pub fn path_query(&self) -> Option<PathQuery> {
        self.fragment.as_deref().map(PathQuery::from_fragment)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_reference() {
        let reference = Reference::parse("file.json");
        assert_eq!(reference.file_part(), "file.json");
        assert_eq!(reference.fragment(), None);
        assert!(reference.path_query().is_none());
    }

    #[test]
    fn file_with_fragment() {
        let reference = Reference::parse("file.json#/a/b");
        assert_eq!(reference.file_part(), "file.json");
        assert_eq!(reference.fragment(), Some("/a/b"));
        assert_eq!(reference.path_query().unwrap().to_string(), "$.a.b");
    }

    #[test]
    fn splits_on_first_hash_only() {
        let reference = Reference::parse("file.json#/a#b");
        assert_eq!(reference.fragment(), Some("/a#b"));
    }

    #[test]
    fn empty_fragment_falls_back_to_whole_file() {
        let reference = Reference::parse("file.json#");
        assert_eq!(reference.file_part(), "file.json");
        assert!(reference.path_query().is_none());
    }

    #[test]
    fn empty_file_part_falls_back_to_whole_document() {
        let reference = Reference::parse("#/definitions/Pet");
        assert!(reference.is_local());
        assert!(reference.path_query().is_none());
    }

    #[test]
    fn backslashes_are_normalized() {
        let reference = Reference::parse(r"schemas\pet.json#/definitions/Pet");
        assert_eq!(reference.file_part(), "schemas/pet.json");
        assert_eq!(reference.raw(), r"schemas\pet.json#/definitions/Pet");
    }
}
