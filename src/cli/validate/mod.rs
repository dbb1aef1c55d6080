//! `blogdex validate`: meta description lengths and image references.
//!
//! The description a page would publish is `description`, falling back to
//! `summary` and then `excerpt`. Its length in characters is compared with
//! the `[validate]` thresholds:
//!
//! ```text
//!   0 ........ min_length ........ recommended_min ........ recommended_max ........
//!   too short    |      short       |          ok           |        long
//!   (error)      |    (warning)     |                       |      (warning)
//! ```
//!
//! Image references are checked by [`images`].

mod images;
mod report;

use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::ValidateArgs;
use crate::config::{SiteConfig, ValidateConfig};
use crate::content::{Frontmatter, split_frontmatter, walk_collection};
use crate::index::IndexError;
use crate::log;
use crate::utils::path::display_relative;
use crate::utils::{plural_count, plural_s};

use images::validate_images;
use report::{DescriptionReport, Finding};

/// Where a description length falls relative to the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStatus {
    /// Below `min_length`.
    TooShort,
    /// Below `recommended_min`.
    Short,
    Ok,
    /// Above `recommended_max`. Still valid.
    Long,
}

impl LengthStatus {
    pub fn classify(length: usize, thresholds: &ValidateConfig) -> Self {
        if length < thresholds.min_length {
            Self::TooShort
        } else if length < thresholds.recommended_min {
            Self::Short
        } else if length > thresholds.recommended_max {
            Self::Long
        } else {
            Self::Ok
        }
    }
}

/// The description a page publishes, or `""` when it has none.
pub fn effective_description(fm: &Frontmatter) -> &str {
    fm.text("description")
        .filter(|d| !d.trim().is_empty())
        .or_else(|| fm.text("summary"))
        .or_else(|| fm.text("excerpt"))
        .unwrap_or_default()
}

/// Run the enabled checks, then fail if any of them found errors.
pub fn run_validate(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let check_descriptions = args.descriptions.unwrap_or(true);
    let check_images = args.images.unwrap_or(config.validate.images.enable);
    if !check_descriptions && !check_images {
        log!("validate"; "no checks enabled");
        return Ok(());
    }

    if !config.index.content.is_dir() {
        bail!(IndexError::MissingContentRoot(config.index.content.clone()));
    }

    let mut failures = Vec::new();
    if check_descriptions {
        let count = validate_descriptions(config);
        if count > 0 {
            failures.push(format!(
                "{} shorter than {} characters",
                plural_count(count, "description"),
                config.validate.min_length
            ));
        }
    }
    if check_images {
        let count = validate_images(config);
        if count > 0 {
            failures.push(format!("{} missing", plural_count(count, "image")));
        }
    }

    if !failures.is_empty() {
        bail!("validation failed: {}", failures.join(", "));
    }
    Ok(())
}

/// Check every description and return how many are too short.
fn validate_descriptions(config: &SiteConfig) -> usize {
    let options = config.index_options();
    log!(
        "validate";
        "checking meta descriptions in {}",
        config.root_relative(&options.content_dir).display()
    );

    let report = collect_report(config, &options.collections, &options.extensions);
    report.print(&config.validate);
    log!("validate"; "{}", report);
    report.error_count()
}

fn collect_report(config: &SiteConfig, collections: &[String], extensions: &[String]) -> DescriptionReport {
    let mut report = DescriptionReport::default();

    for name in collections {
        let dir = config.index.content.join(name);
        let stats = walk_collection(&dir, extensions, |path, source| {
            let doc = split_frontmatter(source);
            let finding = Finding::new(
                display_name(&doc.frontmatter, path),
                display_relative(path, &config.root),
                effective_description(&doc.frontmatter),
            );
            let status = LengthStatus::classify(finding.length, &config.validate);
            report.add(finding, status);
        });

        if stats.errors > 0 {
            log!(
                "validate";
                "{}: {} unreadable file{} skipped",
                name,
                stats.errors,
                plural_s(stats.errors)
            );
        }
    }

    report
}

/// `permalink` from frontmatter, else the file stem.
fn display_name(fm: &Frontmatter, path: &Path) -> String {
    match fm.text("permalink") {
        Some(permalink) => permalink.to_string(),
        None => path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned(),
    }
}
