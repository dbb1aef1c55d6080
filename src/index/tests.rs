use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tempfile::TempDir;

use super::*;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn options(content_dir: &Path, collections: &[&str]) -> IndexOptions {
    IndexOptions {
        content_dir: content_dir.to_path_buf(),
        collections: collections.iter().map(|s| s.to_string()).collect(),
        extensions: vec!["md".to_string()],
        limits: EntryLimits::default(),
    }
}

fn fixed_time() -> DateTimeUtc {
    DateTimeUtc::from_unix_millis(1_700_000_000_000)
}

fn ids(index: &SearchIndex) -> Vec<&str> {
    index.entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_collections_in_configured_order() {
    let temp = TempDir::new().unwrap();
    let content = temp.path();
    write(content, "docs/intro.md", "---\ntitle: Intro\n---\nDocs body");
    write(content, "blog/20230101-first.md", "---\ntitle: First\n---\nOne");
    write(content, "blog/20220101-older.md", "Two");

    let (index, reports) = build_index(&options(content, &["blog", "docs"]), fixed_time()).unwrap();

    // Name order on disk, not date order
    assert_eq!(ids(&index), ["blog/older", "blog/first", "docs/intro"]);
    assert_eq!(
        reports,
        [
            CollectionReport { name: "blog".into(), entries: 2, errors: 0 },
            CollectionReport { name: "docs".into(), entries: 1, errors: 0 },
        ]
    );
    assert_eq!(index.generated, "2023-11-14T22:13:20.000Z");
}

#[test]
fn test_missing_collection_is_skipped() {
    let temp = TempDir::new().unwrap();
    let content = temp.path();
    write(content, "blog/post.md", "Hello");

    let (index, reports) = build_index(&options(content, &["blog", "docs"]), fixed_time()).unwrap();

    assert_eq!(ids(&index), ["blog/post"]);
    assert_eq!(reports[1].name, "docs");
    assert_eq!(reports[1].entries, 0);
    assert_eq!(reports[1].errors, 0);
}

#[test]
fn test_missing_content_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("src/content");

    let err = build_index(&options(&missing, &["blog"]), fixed_time()).unwrap_err();
    assert!(matches!(err, IndexError::MissingContentRoot(ref p) if *p == missing));
}

#[test]
fn test_nested_directories_share_collection() {
    let temp = TempDir::new().unwrap();
    let content = temp.path();
    write(content, "docs/guide/setup.md", "---\ntitle: Setup\n---\n");
    write(content, "docs/guide/deep/faq.md", "FAQ");

    let (index, _) = build_index(&options(content, &["docs"]), fixed_time()).unwrap();

    assert_eq!(ids(&index), ["docs/faq", "docs/setup"]);
    assert!(index.entries.iter().all(|e| e.collection == "docs"));
}

#[test]
fn test_unreadable_file_does_not_stop_collection() {
    let temp = TempDir::new().unwrap();
    let content = temp.path();
    fs::create_dir_all(content.join("blog")).unwrap();
    fs::write(content.join("blog/a-binary.md"), [0xc3, 0x28]).unwrap();
    write(content, "blog/b-text.md", "ok");

    let (index, reports) = build_index(&options(content, &["blog"]), fixed_time()).unwrap();

    assert_eq!(ids(&index), ["blog/b-text"]);
    assert_eq!(reports[0].errors, 1);
}

#[test]
fn test_extensions_filter() {
    let temp = TempDir::new().unwrap();
    let content = temp.path();
    write(content, "blog/a.md", "a");
    write(content, "blog/b.mdx", "b");
    write(content, "blog/c.txt", "c");

    let (index, _) = build_index(&options(content, &["blog"]), fixed_time()).unwrap();
    assert_eq!(ids(&index), ["blog/a"]);

    let mut opts = options(content, &["blog"]);
    opts.extensions.push("mdx".to_string());
    let (index, _) = build_index(&opts, fixed_time()).unwrap();
    assert_eq!(ids(&index), ["blog/a", "blog/b"]);
}

#[test]
fn test_write_index_replaces_previous_output() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("content");
    write(&content, "blog/20230101-my-post.md", "---\ntitle: \"Hello\"\ntags:\n  - a\n  - b\n---\nBody **text**.");
    let output = temp.path().join("public/nested/search-index.json");

    write(temp.path(), "public/nested/search-index.json", "stale");

    let (index, _) = build_index(&options(&content, &["blog"]), fixed_time()).unwrap();
    write_index(&index, &output).unwrap();

    let json: JsonValue = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["generated"], "2023-11-14T22:13:20.000Z");

    let entry = &json["entries"][0];
    assert_eq!(entry["id"], "blog/my-post");
    assert_eq!(entry["slug"], "my-post");
    assert_eq!(entry["title"], "Hello");
    assert_eq!(entry["tags"], serde_json::json!(["a", "b"]));
    assert_eq!(entry["categories"], serde_json::json!([]));
    assert_eq!(entry["content"], "Body text.");
    assert_eq!(entry["excerpt"], "Body text.");
}

#[test]
fn test_empty_tree_writes_empty_index() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("search-index.json");

    let (index, reports) = build_index(&options(temp.path(), &["blog", "docs"]), fixed_time()).unwrap();
    write_index(&index, &output).unwrap();

    assert!(reports.iter().all(|r| r.entries == 0));
    let json: JsonValue = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["entries"], serde_json::json!([]));
}
