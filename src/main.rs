//! Blogdex - search index generator for Markdown blogs.

mod cli;
mod config;
mod content;
mod index;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Index { .. } => cli::index::run_index(&config),
        Commands::Validate { args } => cli::validate::run_validate(args, &config),
        Commands::New { args } => cli::new::new_post(args, &config).map(|_| ()),
    }
}
