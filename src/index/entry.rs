//! One search index record per content file.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::content::{excerpt, extract_text, split_frontmatter, truncate_chars};

/// `YYYYMMDD-` filename prefix used to order posts on disk.
static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}-").unwrap());

/// Character caps applied while building entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLimits {
    /// Generated excerpt length, before the `...` marker.
    pub excerpt_length: usize,
    /// Indexed full-text length.
    pub content_length: usize,
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            excerpt_length: 200,
            content_length: 1000,
        }
    }
}

/// A single searchable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// `collection/slug`
    pub id: String,
    pub collection: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub date: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Plain text of the body, capped at [`EntryLimits::content_length`].
    pub content: String,
}

impl IndexEntry {
    /// Build an entry from a document's raw source.
    ///
    /// Frontmatter fields win over derived values. `title` falls back to the
    /// slug, `description` to `summary`, `excerpt` to the start of the body.
    /// `tags`/`categories` are only taken when they really are sequences.
    pub fn from_source(collection: &str, slug: &str, source: &str, limits: EntryLimits) -> Self {
        let doc = split_frontmatter(source);
        let fm = &doc.frontmatter;
        let text = extract_text(doc.body);

        let list = |key: &str| fm.list(key).map(<[String]>::to_vec).unwrap_or_default();

        Self {
            id: format!("{collection}/{slug}"),
            collection: collection.to_string(),
            slug: slug.to_string(),
            title: fm.text("title").unwrap_or(slug).to_string(),
            description: fm
                .text("description")
                .or_else(|| fm.text("summary"))
                .unwrap_or_default()
                .to_string(),
            excerpt: match fm.text("excerpt") {
                Some(excerpt) => excerpt.to_string(),
                None => excerpt(&text, limits.excerpt_length).into_owned(),
            },
            date: fm.text("date").unwrap_or_default().to_string(),
            tags: list("tags"),
            categories: list("categories"),
            content: truncate_chars(&text, limits.content_length).to_string(),
        }
    }
}

/// Derive a slug from a content file path.
///
/// The file stem with any `YYYYMMDD-` prefix removed:
/// `20230101-my-post.md` -> `my-post`.
pub fn slug_from_path(path: &Path) -> String {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    DATE_PREFIX.replace(&stem, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> IndexEntry {
        IndexEntry::from_source("blog", "my-post", source, EntryLimits::default())
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path(Path::new("blog/20230101-my-post.md")), "my-post");
        assert_eq!(slug_from_path(Path::new("docs/getting-started.md")), "getting-started");
        assert_eq!(slug_from_path(Path::new("2023-my-post.md")), "2023-my-post");
        assert_eq!(slug_from_path(Path::new("20230101my-post.md")), "20230101my-post");
        assert_eq!(slug_from_path(Path::new("post-20230101-x.mdx")), "post-20230101-x");
    }

    #[test]
    fn test_full_frontmatter() {
        let entry = build(
            "---\ntitle: \"Hello\"\ndescription: Desc\nexcerpt: Custom excerpt\ndate: 2023-01-01\ntags:\n  - a\n  - b\ncategories:\n  - Development\n---\nBody **text**.",
        );

        assert_eq!(entry.id, "blog/my-post");
        assert_eq!(entry.collection, "blog");
        assert_eq!(entry.slug, "my-post");
        assert_eq!(entry.title, "Hello");
        assert_eq!(entry.description, "Desc");
        assert_eq!(entry.excerpt, "Custom excerpt");
        assert_eq!(entry.date, "2023-01-01");
        assert_eq!(entry.tags, ["a", "b"]);
        assert_eq!(entry.categories, ["Development"]);
        assert_eq!(entry.content, "Body text.");
    }

    #[test]
    fn test_empty_document() {
        let entry = build("");
        assert_eq!(entry.title, "my-post");
        assert_eq!(entry.content, "");
        assert_eq!(entry.excerpt, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.date, "");
        assert!(entry.tags.is_empty());
        assert!(entry.categories.is_empty());
    }

    #[test]
    fn test_description_falls_back_to_summary() {
        let entry = build("---\nsummary: From summary\n---\nBody");
        assert_eq!(entry.description, "From summary");

        let entry = build("---\ndescription: \"\"\nsummary: From summary\n---\nBody");
        assert_eq!(entry.description, "From summary");
    }

    #[test]
    fn test_excerpt_generated_from_body() {
        let body = "word ".repeat(100);
        let entry = build(&format!("---\ntitle: T\n---\n{body}"));
        assert!(entry.excerpt.ends_with("..."));
        assert!(entry.excerpt.chars().count() <= 203);
        assert!(entry.content.starts_with("word word"));
    }

    #[test]
    fn test_content_capped() {
        let body = "abcdefghij".repeat(150);
        let entry = build(&body);
        assert_eq!(entry.content.chars().count(), 1000);
        assert!(!entry.content.ends_with("..."));
    }

    #[test]
    fn test_custom_limits() {
        let limits = EntryLimits {
            excerpt_length: 5,
            content_length: 8,
        };
        let entry = IndexEntry::from_source("docs", "x", "Hello wonderful world", limits);
        assert_eq!(entry.excerpt, "Hello...");
        assert_eq!(entry.content, "Hello wo");
    }

    #[test]
    fn test_scalar_tags_are_dropped() {
        let entry = build("---\ntags: rust, cli\ncategories: Development\n---\n");
        assert!(entry.tags.is_empty());
        assert!(entry.categories.is_empty());
    }

    #[test]
    fn test_list_title_falls_back_to_slug() {
        let entry = build("---\ntitle:\n---\nBody");
        assert_eq!(entry.title, "my-post");
    }

    #[test]
    fn test_malformed_frontmatter_uses_filename_identity() {
        let entry = build("---\ntitle Hello\nthis is: \n---\nBody");
        assert_eq!(entry.title, "my-post");
        assert_eq!(entry.content, "Body");
    }

    #[test]
    fn test_serialized_shape() {
        let entry = build("---\ntitle: T\n---\nBody");
        let json = serde_json::to_value(&entry).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "id",
                "collection",
                "slug",
                "title",
                "description",
                "excerpt",
                "date",
                "tags",
                "categories",
                "content"
            ]
        );
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
