//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Search index generator for Markdown blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file name, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "blogdex.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the search index
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Check meta description lengths and image references
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Create a new dated post
    #[command(visible_alias = "n")]
    New {
        #[command(flatten)]
        args: NewArgs,
    },
}

/// Index command arguments. Each one overrides `[index]` in the config.
#[derive(clap::Args, Debug, Clone)]
pub struct IndexArgs {
    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Output file path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Collection to index (repeatable, replaces the configured list)
    #[arg(long, value_name = "NAME")]
    pub collection: Vec<String>,
}

/// Validate command arguments. Each check runs unless turned off.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Check meta description lengths
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub descriptions: Option<bool>,

    /// Check that image references resolve (overrides `validate.images.enable`)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub images: Option<bool>,
}

/// New post arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NewArgs {
    /// Post title
    pub title: String,

    /// Permalink slug (default: derived from the title)
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Category (default: the first configured one)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
