//! Search index generation.
//!
//! Walks each configured collection in order, turns every markup file into an
//! [`IndexEntry`], and serializes the lot as one JSON document:
//!
//! ```json
//! { "generated": "2024-06-15T14:30:45.000Z", "entries": [ { "id": "blog/my-post", ... } ] }
//! ```
//!
//! Entries keep traversal order. Nothing is sorted by date.

mod entry;
mod error;

#[cfg(test)]
mod tests;

pub use entry::{EntryLimits, IndexEntry, slug_from_path};
pub use error::IndexError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::content::{WalkStats, walk_collection};
use crate::debug;
use crate::utils::date::DateTimeUtc;

/// Everything the indexer needs, resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Directory holding one subdirectory per collection.
    pub content_dir: PathBuf,
    /// Collection names, walked in this order.
    pub collections: Vec<String>,
    /// Recognized markup extensions, without the dot.
    pub extensions: Vec<String>,
    pub limits: EntryLimits,
}

/// The serialized artifact.
#[derive(Debug, Clone, Serialize)]
pub struct SearchIndex {
    /// RFC 3339 timestamp of this run.
    pub generated: String,
    pub entries: Vec<IndexEntry>,
}

/// Per-collection counts for the console summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub name: String,
    pub entries: usize,
    pub errors: usize,
}

/// Build the search index for every collection in `options`.
///
/// Fails only when the content root itself is missing. Missing collections
/// contribute nothing, and unreadable files are skipped.
pub fn build_index(
    options: &IndexOptions,
    generated: DateTimeUtc,
) -> Result<(SearchIndex, Vec<CollectionReport>), IndexError> {
    if !options.content_dir.is_dir() {
        return Err(IndexError::MissingContentRoot(options.content_dir.clone()));
    }

    let mut entries = Vec::new();
    let mut reports = Vec::with_capacity(options.collections.len());

    for name in &options.collections {
        let dir = options.content_dir.join(name);
        let before = entries.len();

        let WalkStats { errors, .. } = walk_collection(&dir, &options.extensions, |path, source| {
            let slug = slug_from_path(path);
            debug!("index"; "{} -> {}/{}", path.display(), name, slug);
            entries.push(IndexEntry::from_source(name, &slug, source, options.limits));
        });

        reports.push(CollectionReport {
            name: name.clone(),
            entries: entries.len() - before,
            errors,
        });
    }

    let index = SearchIndex {
        generated: generated.to_rfc3339(),
        entries,
    };
    Ok((index, reports))
}

/// Write `index` as pretty JSON, replacing any previous file at `path`.
pub fn write_index(index: &SearchIndex, path: &Path) -> Result<(), IndexError> {
    let json = serde_json::to_string_pretty(index)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| IndexError::Write(path.to_path_buf(), err))?;
    }
    fs::write(path, json).map_err(|err| IndexError::Write(path.to_path_buf(), err))
}
