//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start_dir`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/src/content/blog/  ← start_dir
/// /home/user/site/blogdex.toml        ← found!
/// ```
pub fn find_config_file(start_dir: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start_dir;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
