//! Lenient `---` frontmatter scanner.
//!
//! Understands a narrow YAML subset: `key: value` scalars and `key:` followed
//! by `- item` lines. Anything else inside the block is skipped, so a
//! malformed header never stops a document from being indexed.

use serde::Serialize;

/// Line that opens and closes a frontmatter block.
const DELIMITER: &str = "---";

/// Prefix of a sequence item line (after trimming).
const LIST_ITEM: &str = "- ";

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }
}

/// Ordered key/value mapping read from a frontmatter block.
///
/// Keys are unique. Re-binding a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Non-empty scalar value for `key`.
    ///
    /// Sequences and empty strings (`title: ""`) read as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(FieldValue::as_scalar)
            .filter(|s| !s.is_empty())
    }

    /// Sequence value for `key`. A scalar stored under `key` reads as absent.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FieldValue::as_list)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn push_item(&mut self, key: &str, item: String) {
        if let Some((_, FieldValue::List(items))) = self.fields.iter_mut().find(|(k, _)| k == key) {
            items.push(item);
        }
    }
}

/// A document split into its metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    pub frontmatter: Frontmatter,
    pub body: &'a str,
}

/// Split `content` into frontmatter and body.
///
/// A block exists only when the very first line is `---` and a later line is
/// `---` as well. The body after a block is trimmed. Without a block the
/// frontmatter is empty and the body is `content`, untouched.
pub fn split_frontmatter(content: &str) -> SplitDocument<'_> {
    match locate_block(content) {
        Some((block, rest)) => SplitDocument {
            frontmatter: parse_block(block),
            body: rest.trim(),
        },
        None => SplitDocument {
            frontmatter: Frontmatter::new(),
            body: content,
        },
    }
}

/// Find the block between the opening and closing delimiter lines.
///
/// Returns `(block, rest)` where `rest` starts after the closing line.
fn locate_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if !is_delimiter(opening) {
        return None;
    }

    let start = opening.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

#[inline]
fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

/// Scan block lines into a [`Frontmatter`], ignoring anything unrecognized.
fn parse_block(block: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();
    // Key whose sequence is receiving `- item` lines
    let mut open_list: Option<String> = None;

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(item) = line.strip_prefix(LIST_ITEM) {
            if let Some(key) = &open_list {
                frontmatter.push_item(key, item.trim().to_string());
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let key = key.trim();
        let value = value.trim();
        if value.is_empty() {
            frontmatter.insert(key, FieldValue::List(Vec::new()));
            open_list = Some(key.to_string());
        } else {
            frontmatter.insert(key, FieldValue::Scalar(unquote(value).to_string()));
            open_list = None;
        }
    }

    frontmatter
}

/// Remove one leading and one trailing quote, each independently.
///
/// `"Hello` reads as `Hello` and a lone `"` as the empty string.
fn unquote(value: &str) -> &str {
    const QUOTES: [char; 2] = ['"', '\''];
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}
