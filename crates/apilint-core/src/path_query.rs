//! # Path Queries — Fragment Translation and Evaluation
//!
//! A reference fragment such as `/paths/~1pets/get/responses/200` is
//! translated into a path query anchored at the document root:
//!
//! ```text
//! /documents/request              ->  $.documents.request
//! /documents/request/200          ->  $.documents.request["200"]
//! /documents/request/200/headers  ->  $.documents.request["200"].headers
//! ```
//!
//! Purely numeric segments become quoted key accesses. OpenAPI uses
//! numeric object keys for HTTP status codes, so a numeric segment never
//! indexes an array. Empty segments are dropped. JSON Pointer escapes
//! (`~1` for `/`, `~0` for `~`) are decoded in segment names.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::PathQueryError;

/// One step of a [`PathQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Dotted field access: `.name`.
    Field(String),
    /// Quoted key access: `["200"]`.
    Key(String),
}

impl PathSegment {
    /// The object key this segment addresses.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Key(name) => name,
        }
    }
}

/// A parsed path query anchored at the document root (`$`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathQuery {
    segments: Vec<PathSegment>,
}

impl PathQuery {
    /// The query addressing the whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Translate a reference fragment into a path query.
    pub fn from_fragment(fragment: &str) -> Self {
        let segments = fragment
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let name = unescape_token(part);
                if is_numeric(part) {
                    PathSegment::Key(name)
                } else {
                    PathSegment::Field(name)
                }
            })
            .collect();
        Self { segments }
    }

    /// Returns the segments of the query, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if the query addresses the whole document.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Evaluate the query against a document.
    ///
    /// Every segment must address a key of an object; returns `None` as soon
    /// as a step lands on a non-object or a missing key.
    pub fn evaluate<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(document, |current, segment| {
                current.as_object()?.get(segment.name())
            })
    }
}

/// Integer test matching the classic `Atoi` acceptance: optional sign, digits.
fn is_numeric(segment: &str) -> bool {
    segment.parse::<i64>().is_ok()
}

fn unescape_token(token: &str) -> String {
    if token.contains('~') {
        token.replace("~1", "/").replace("~0", "~")
    } else {
        token.to_string()
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Key(name) => write!(f, "[\"{name}\"]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for PathQuery {
    type Err = PathQueryError;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let rest = query
            .strip_prefix('$')
            .ok_or_else(|| PathQueryError::MissingRoot(query.to_string()))?;

        let mut segments = Vec::new();
        let mut offset = 1;
        let mut remaining = rest;

        while let Some(first) = remaining.chars().next() {
            match first {
                '.' => {
                    let body = &remaining[1..];
                    let end = body.find(['.', '[']).unwrap_or(body.len());
                    if end == 0 {
                        return Err(PathQueryError::EmptyField {
                            query: query.to_string(),
                            offset,
                        });
                    }
                    segments.push(PathSegment::Field(body[..end].to_string()));
                    remaining = &body[end..];
                    offset += end + 1;
                }
                '[' => {
                    let unterminated = || PathQueryError::UnterminatedKey {
                        query: query.to_string(),
                        offset,
                    };
                    let body = remaining[1..].strip_prefix('"').ok_or_else(unterminated)?;
                    let end = body.find("\"]").ok_or_else(unterminated)?;
                    segments.push(PathSegment::Key(body[..end].to_string()));
                    remaining = &body[end + 2..];
                    offset += end + 4;
                }
                other => {
                    return Err(PathQueryError::Unexpected {
                        query: query.to_string(),
                        offset,
                        found: other,
                    });
                }
            }
        }

        Ok(Self { segments })
    }
}
