//! # File Discovery
//!
//! Enumerates candidate documents under a root directory with the
//! recursive pattern `<root>/**/*.json`. Paths containing the fragment
//! marker are skipped: those files exist only to be referenced.
//!
//! An invalid pattern yields an empty list rather than an error, and
//! unreadable entries are skipped with a warning.

use std::path::{Path, PathBuf};

use apilint_core::normalize_separators;

/// Discover every `*.json` document under `root`, in path order.
pub fn discover_documents(root: &Path, fragment_marker: &str) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/**/*.json",
        glob::Pattern::escape(&root.to_string_lossy())
    );

    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(%pattern, error = %e, "invalid discovery pattern");
            return Vec::new();
        }
    };

    let mut documents = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !fragment_marker.is_empty()
            && normalize_separators(&path.to_string_lossy()).contains(fragment_marker)
        {
            tracing::debug!(path = %path.display(), "skipping fragment-only file");
            continue;
        }
        if path.is_dir() {
            continue;
        }
        documents.push(path);
    }

    tracing::info!(root = %root.display(), documents = documents.len(), "discovered documents");
    documents
}
