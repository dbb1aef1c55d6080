//! `blogdex index`: generate the search index file.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::index::{build_index, write_index};
use crate::log;
use crate::utils::date::DateTimeUtc;
use crate::utils::plural_count;

/// Walk every configured collection and write the index.
///
/// A missing content root aborts before anything is written.
pub fn run_index(config: &SiteConfig) -> Result<()> {
    let options = config.index_options();
    log!(
        "index";
        "generating search index from {}",
        config.root_relative(&options.content_dir).display()
    );

    let (index, reports) = build_index(&options, DateTimeUtc::now())?;

    for report in &reports {
        if report.errors > 0 {
            log!(
                "index";
                "{}: processed {}, skipped {}",
                report.name,
                plural_count(report.entries, "document"),
                plural_count(report.errors, "unreadable file")
            );
        } else {
            log!("index"; "{}: processed {}", report.name, plural_count(report.entries, "document"));
        }
    }

    write_index(&index, &config.index.output)?;
    log!(
        "index";
        "wrote {} to {}",
        plural_count(index.entries.len(), "document"),
        config.root_relative(&config.index.output).display()
    );

    Ok(())
}
