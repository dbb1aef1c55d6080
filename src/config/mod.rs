//! Project configuration from `blogdex.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [index], [validate], [new]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # Config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The file is optional. Without one every section takes its defaults and
//! the working directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{IndexConfig, NewConfig, ValidateConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, IndexArgs},
    debug,
    index::IndexOptions,
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blogdex.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Search index generation
    #[serde(default)]
    pub index: IndexConfig,

    /// Description thresholds and image checks
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Post scaffolding
    #[serde(default)]
    pub new: NewConfig,
}

impl SiteConfig {
    /// Load configuration for the parsed command line.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let (mut config, root) = match find_config_file(cwd, &cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(normalize_path(&path));
                (config, root)
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                (Self::default(), cwd.to_path_buf())
            }
        };

        config.finalize(cli, &root);
        config.validate(&cli.command)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root, apply CLI overrides and make every path absolute.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        if let Commands::Index { args } = &cli.command {
            self.apply_index_args(args);
        }

        self.root = normalize_path(root);
        self.index.content = normalize_path(&self.root.join(&self.index.content));
        self.index.output = normalize_path(&self.root.join(&self.index.output));
        self.validate.images.public = normalize_path(&self.root.join(&self.validate.images.public));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_index_args(&mut self, args: &IndexArgs) {
        Self::update_option(&mut self.index.content, args.content.as_ref());
        Self::update_option(&mut self.index.output, args.output.as_ref());
        if !args.collection.is_empty() {
            self.index.collections = args.collection.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Options for one indexing run.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            content_dir: self.index.content.clone(),
            collections: self.index.collections.clone(),
            extensions: self.index.extensions.clone(),
            limits: self.index.limits(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    fn validate(&self, command: &Commands) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.index.validate(&mut diag);
        self.validate.validate(&mut diag);
        if let Commands::New { .. } = command {
            self.new.validate(&self.index.collections, &mut diag);
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("blogdex").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[index\ncontent = \"x\"").is_err());
    }

    #[test]
    fn test_wrong_type_is_error() {
        let err = SiteConfig::parse_with_ignored("[index]\ncollections = \"blog\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[index]\ncontent = \"content\"\nexcerpt = 3\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.index.content, PathBuf::from("content"));
        assert!(ignored.iter().any(|f| f == "index.excerpt"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[index]\ncollections = [\"blog\"]").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_without_config_uses_cwd() {
        let temp = TempDir::new().unwrap();
        let cwd = normalize_path(temp.path());

        let config = SiteConfig::load_from(&cli(&["index"]), &cwd).unwrap();

        assert!(config.config_path.is_none());
        assert_eq!(config.root, cwd);
        assert_eq!(config.index.content, cwd.join("src/content"));
        assert_eq!(config.index.output, cwd.join("public/search-index.json"));
        assert_eq!(config.validate.images.public, cwd.join("public"));
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let root = normalize_path(temp.path());
        fs::write(
            root.join("blogdex.toml"),
            "[index]\ncontent = \"content\"\noutput = \"dist/index.json\"\n",
        )
        .unwrap();
        let nested = root.join("content/blog");
        fs::create_dir_all(&nested).unwrap();

        let config = SiteConfig::load_from(&cli(&["index"]), &nested).unwrap();

        assert_eq!(config.config_path, Some(root.join("blogdex.toml")));
        assert_eq!(config.root, root);
        assert_eq!(config.index.content, root.join("content"));
        assert_eq!(config.index.output, root.join("dist/index.json"));
        assert_eq!(config.root_relative(&config.index.output), PathBuf::from("dist/index.json"));
    }

    #[test]
    fn test_index_args_override_config() {
        let temp = TempDir::new().unwrap();
        let root = normalize_path(temp.path());
        fs::write(root.join("blogdex.toml"), "[index]\ncollections = [\"blog\", \"docs\"]\n").unwrap();

        let args = ["index", "-c", "site", "-o", "out.json", "--collection", "docs"];
        let config = SiteConfig::load_from(&cli(&args), &root).unwrap();

        assert_eq!(config.index.content, root.join("site"));
        assert_eq!(config.index.output, root.join("out.json"));
        assert_eq!(config.index.collections, ["docs"]);

        let options = config.index_options();
        assert_eq!(options.content_dir, root.join("site"));
        assert_eq!(options.collections, ["docs"]);
    }

    #[test]
    fn test_custom_config_name() {
        let temp = TempDir::new().unwrap();
        let root = normalize_path(temp.path());
        fs::write(root.join("search.toml"), "[index]\ncollections = [\"notes\"]\n").unwrap();

        let config = SiteConfig::load_from(&cli(&["-C", "search.toml", "index"]), &root).unwrap();
        assert_eq!(config.index.collections, ["notes"]);
    }

    #[test]
    fn test_invalid_config_reports_all_errors() {
        let temp = TempDir::new().unwrap();
        let root = normalize_path(temp.path());
        fs::write(
            root.join("blogdex.toml"),
            "[index]\ncollections = []\nextensions = []\n\n[validate]\nmin_length = 200\n",
        )
        .unwrap();

        let err = SiteConfig::load_from(&cli(&["validate"]), &root).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_new_collection_checked_only_for_new() {
        let temp = TempDir::new().unwrap();
        let root = normalize_path(temp.path());
        fs::write(root.join("blogdex.toml"), "[new]\ncollection = \"notes\"\n").unwrap();

        assert!(SiteConfig::load_from(&cli(&["index"]), &root).is_ok());
        assert!(SiteConfig::load_from(&cli(&["new", "Hello"]), &root).is_err());
    }
}
