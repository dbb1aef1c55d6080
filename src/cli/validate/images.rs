//! Image reference checks.
//!
//! Every `![alt](path)` in a content file is resolved. `http://` and
//! `https://` targets are external and never fetched. Anything else must
//! exist under `validate.images.public`, with one leading `/` dropped.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::report::ImageReport;
use crate::config::SiteConfig;
use crate::content::walk_collection;
use crate::log;
use crate::utils::path::display_relative;
use crate::utils::plural_s;

static IMAGE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://"];

/// Where one image reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTarget {
    External,
    /// Present under the public directory.
    Local,
    /// Not found. Holds the path that was checked.
    Missing(PathBuf),
}

/// Targets of every `![alt](path)` in `source`, in document order.
///
/// A link title (`![a](/x.png "Title")`) is not part of the target.
pub fn image_references(source: &str) -> impl Iterator<Item = &str> {
    IMAGE_REF
        .captures_iter(source)
        .filter_map(|caps| caps.get(2))
        .filter_map(|m| m.as_str().split_whitespace().next())
}

/// Resolve `reference` against the public directory.
pub fn resolve_image(reference: &str, public: &Path) -> ImageTarget {
    if EXTERNAL_SCHEMES.iter().any(|scheme| reference.starts_with(scheme)) {
        return ImageTarget::External;
    }

    let path = reference.split(['?', '#']).next().unwrap_or_default();
    let expected = public.join(path.strip_prefix('/').unwrap_or(path));
    if expected.exists() {
        ImageTarget::Local
    } else {
        ImageTarget::Missing(expected)
    }
}

/// Check every content file and return the number of missing images.
pub fn validate_images(config: &SiteConfig) -> usize {
    log!(
        "validate";
        "checking image references against {}",
        config.root_relative(&config.validate.images.public).display()
    );

    let report = collect_image_report(config);
    report.print();
    log!("validate"; "{}", report);
    report.missing_count()
}

/// Scan the whole content root, not only the indexed collections.
fn collect_image_report(config: &SiteConfig) -> ImageReport {
    let public = &config.validate.images.public;
    let mut report = ImageReport::default();

    let stats = walk_collection(&config.index.content, &config.index.extensions, |path, source| {
        let file = display_relative(path, &config.root);
        for reference in image_references(source) {
            match resolve_image(reference, public) {
                ImageTarget::External => report.external += 1,
                ImageTarget::Local => report.local += 1,
                ImageTarget::Missing(expected) => report.add_missing(
                    file.clone(),
                    reference.to_string(),
                    display_relative(&expected, &config.root),
                ),
            }
        }
    });
    report.files = stats.files;

    if stats.errors > 0 {
        log!(
            "validate";
            "{} unreadable file{} skipped",
            stats.errors,
            plural_s(stats.errors)
        );
    }

    report
}
