//! Markdown → plain text reduction for indexing.
//!
//! The rules run in a fixed order so that later rules never see syntax an
//! earlier rule already consumed. Code goes first, so a `# comment` inside a
//! fence is never read as a heading.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Appended to excerpts that were cut short.
pub const TRUNCATION_MARKER: &str = "...";

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_]{1,2}([^*_]+)[*_]{1,2}").unwrap());
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip Markdown syntax from `markdown`, leaving single-spaced prose.
///
/// # Example
/// ```ignore
/// assert_eq!(extract_text("# Title\n\nSome **bold** [link](/x)."), "Title Some bold link.");
/// ```
pub fn extract_text(markdown: &str) -> String {
    let text = FENCED_CODE.replace_all(markdown, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "${1}");
    let text = LINK.replace_all(&text, "${1}");
    let text = HEADING.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "${1}");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}

/// Cut `text` to at most `max_chars` characters, appending [`TRUNCATION_MARKER`]
/// when anything was dropped.
///
/// The kept prefix is trimmed before the marker goes on, so the result is
/// never longer than `max_chars + 3` characters.
pub fn excerpt(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", text[..cut].trim())),
    }
}

/// First `max_chars` characters of `text`, without a marker.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        None => text,
        Some((cut, _)) => &text[..cut],
    }
}
