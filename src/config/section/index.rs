//! `[index]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [index]
//! content = "src/content"              # Content root, relative to project root
//! output = "public/search-index.json"  # Generated index file
//! collections = ["blog", "docs"]       # Walked in this order
//! extensions = ["md", "mdx"]           # Recognized markup files
//! excerpt_length = 200                 # Generated excerpt cap (characters)
//! content_length = 1000                # Indexed text cap (characters)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::index::EntryLimits;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub content: PathBuf,
    pub output: PathBuf,
    pub collections: Vec<String>,
    pub extensions: Vec<String>,
    pub excerpt_length: usize,
    pub content_length: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        let limits = EntryLimits::default();
        Self {
            content: "src/content".into(),
            output: "public/search-index.json".into(),
            collections: vec!["blog".into(), "docs".into()],
            extensions: vec!["md".into(), "mdx".into()],
            excerpt_length: limits.excerpt_length,
            content_length: limits.content_length,
        }
    }
}

impl IndexConfig {
    pub const COLLECTIONS: FieldPath = FieldPath::new("index.collections");
    pub const EXTENSIONS: FieldPath = FieldPath::new("index.extensions");
    pub const EXCERPT_LENGTH: FieldPath = FieldPath::new("index.excerpt_length");
    pub const CONTENT_LENGTH: FieldPath = FieldPath::new("index.content_length");

    pub const fn limits(&self) -> EntryLimits {
        EntryLimits {
            excerpt_length: self.excerpt_length,
            content_length: self.content_length,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.collections.is_empty() {
            diag.error(Self::COLLECTIONS, "at least one collection is required");
        }
        for name in &self.collections {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                diag.error_with_hint(
                    Self::COLLECTIONS,
                    format!("invalid collection name `{name}`"),
                    "use the name of a directory directly under `index.content`",
                );
            }
        }

        if self.extensions.is_empty() {
            diag.error(Self::EXTENSIONS, "at least one extension is required");
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.starts_with('.')) {
            diag.error_with_hint(
                Self::EXTENSIONS,
                format!("extension `{ext}` starts with a dot"),
                format!("write `{}`", ext.trim_start_matches('.')),
            );
        }

        if self.excerpt_length == 0 {
            diag.error(Self::EXCERPT_LENGTH, "must be greater than 0");
        }
        if self.content_length == 0 {
            diag.error(Self::CONTENT_LENGTH, "must be greater than 0");
        }
    }
}
