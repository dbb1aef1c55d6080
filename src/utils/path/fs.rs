//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Paths that do not exist yet (an output file, a missing collection)
/// take the fallback branch.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render `path` relative to `root` for log lines, or in full when it lies outside.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/search-index.json");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/search-index.json"));
    }

    #[test]
    fn test_display_relative() {
        let root = Path::new("/site");
        assert_eq!(
            display_relative(Path::new("/site/src/content/blog/a.md"), root),
            "src/content/blog/a.md"
        );
        assert_eq!(display_relative(Path::new("/elsewhere/b.md"), root), "/elsewhere/b.md");
    }
}
