//! Sequential, depth-first traversal of a collection directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use crate::{debug, log};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Outcome counters for one collection walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files read and handed to the visitor.
    pub files: usize,
    /// Subtrees or files that could not be read.
    pub errors: usize,
}

/// Check whether `path` has one of `extensions` (case-insensitive, no dot).
pub fn has_markup_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Read every markup file under `dir` and pass it to `visit`.
///
/// Files are visited one at a time, depth first, siblings in name order.
/// A missing `dir` yields nothing. Unreadable subtrees and files are logged,
/// counted in [`WalkStats::errors`], and skipped.
pub fn walk_collection<F>(dir: &Path, extensions: &[String], mut visit: F) -> WalkStats
where
    F: FnMut(&Path, &str),
{
    let mut stats = WalkStats::default();

    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            log!("warning"; "{} is not a directory, skipping", dir.display());
            return stats;
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("walk"; "{} does not exist, skipping", dir.display());
            return stats;
        }
        Err(err) => {
            log!("error"; "failed to read {}: {}", dir.display(), err);
            stats.errors += 1;
            return stats;
        }
    }

    let walker = WalkDir::new(dir)
        .sort(true)
        .skip_hidden(false)
        .parallelism(Parallelism::Serial);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log!("error"; "failed to traverse {}: {}", dir.display(), err);
                stats.errors += 1;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }

        let path = entry.path();
        if !has_markup_extension(&path, extensions) {
            continue;
        }

        match fs::read_to_string(&path) {
            Ok(source) => {
                stats.files += 1;
                visit(&path, &source);
            }
            Err(err) => {
                log!("error"; "failed to read {}: {}", path.display(), err);
                stats.errors += 1;
            }
        }
    }

    stats
}
