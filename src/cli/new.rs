//! `blogdex new`: scaffold a dated post.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::cli::NewArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::date::DateTimeUtc;
use crate::utils::slug::slugify;

const PLACEHOLDER_DESCRIPTION: &str = "Write a brief description for SEO and social sharing";
const PLACEHOLDER_SUMMARY: &str = "Write a 1-2 sentence summary of the post";
const PLACEHOLDER_EXCERPT: &str = "Write a brief excerpt (can be same as description)";

const BODY_SKELETON: &str = "\
<!-- Write your post here -->

## Introduction

Start with a hook that draws readers in.

## Main Content

Add your main content sections here.

## Conclusion

Wrap up with key takeaways.
";

/// Everything that goes into a new post file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTemplate {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub tags: Vec<String>,
    pub date: DateTimeUtc,
}

impl PostTemplate {
    /// `{YYYYMMDD}-{slug}.md`
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date.compact_date(), self.slug)
    }

    /// Frontmatter plus section skeleton.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: \"{}\"\n", self.title));
        out.push_str(&format!("date: {}\n", self.date.to_midnight_rfc3339()));
        out.push_str(&format!("permalink: {}\n", self.slug));
        out.push_str(&format!("description: \"{PLACEHOLDER_DESCRIPTION}\"\n"));
        out.push_str(&format!("summary: \"{PLACEHOLDER_SUMMARY}\"\n"));
        out.push_str(&format!("excerpt: \"{PLACEHOLDER_EXCERPT}\"\n"));
        out.push_str("tags:\n");
        for tag in &self.tags {
            out.push_str(&format!("  - {tag}\n"));
        }
        out.push_str("categories:\n");
        out.push_str(&format!("  - {}\n", self.category));
        out.push_str("---\n\n");
        out.push_str(BODY_SKELETON);
        out
    }
}

/// Create the post described by `args`, dated today (UTC).
pub fn new_post(args: &NewArgs, config: &SiteConfig) -> Result<PathBuf> {
    let template = build_template(args, config, DateTimeUtc::now())?;
    let path = write_post(&template, args.force, config)?;

    log!("new"; "created {}", config.root_relative(&path).display());
    Ok(path)
}

/// Resolve title, slug, category and tags into a template.
fn build_template(args: &NewArgs, config: &SiteConfig, date: DateTimeUtc) -> Result<PostTemplate> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("title is required");
    }
    if title.contains(['\n', '\r']) {
        bail!("title must be a single line");
    }

    let slug = slugify(args.slug.as_deref().unwrap_or(title));
    if slug.is_empty() {
        bail!("cannot derive a slug from `{title}`, pass one with --slug");
    }

    let Some(category) = config.new.resolve_category(args.category.as_deref()) else {
        bail!(
            "unknown category `{}`, expected one of: {}",
            args.category.as_deref().unwrap_or_default(),
            config.new.categories.join(", ")
        );
    };

    let tags = args
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    Ok(PostTemplate {
        title: title.to_string(),
        slug,
        category: category.to_string(),
        tags,
        date,
    })
}

fn write_post(template: &PostTemplate, force: bool, config: &SiteConfig) -> Result<PathBuf> {
    let dir = config.index.content.join(&config.new.collection);
    let path = dir.join(template.file_name());

    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            config.root_relative(&path).display()
        );
    }

    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(&path, template.render())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
