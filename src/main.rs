//! Taxon - stable URL slugs for non-Latin author and category names.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod logger;
mod taxonomy;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::TaxonConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = TaxonConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate => cli::generate::generate_registry(&config),
        Commands::Validate { .. } => cli::validate::validate_taxonomy(&config),
        Commands::Lookup { args } => cli::lookup::lookup(&config, args),
        Commands::Migrate { path } => cli::migrate::migrate(&config, path),
    }
}
