//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Stable URL slugs for non-Latin author and category names
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: taxon.toml)
    #[arg(short = 'C', long, global = true, default_value = "taxon.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Registry file path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub registry: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan content and add slugs for newly seen names
    #[command(visible_alias = "g")]
    Generate,

    /// Check that every referenced name has a registry entry
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Look up slugs by name or names by slug
    #[command(visible_alias = "l")]
    Lookup {
        #[command(flatten)]
        args: LookupArgs,
    },

    /// Import a legacy TypeScript registry module
    #[command(visible_alias = "m")]
    Migrate {
        /// Path to the legacy module (e.g. src/lib/taxonomy.ts)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Treat missing entries as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Never file a remediation issue, even when credentials are present
    #[arg(long)]
    pub no_issue: bool,
}

/// Lookup command arguments. Exactly one query is accepted.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    /// Slug for an author name
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Slug for a category name
    #[arg(short = 'k', long, value_name = "NAME")]
    pub category: Option<String>,

    /// Author name registered under a slug
    #[arg(long, value_name = "SLUG")]
    pub author_slug: Option<String>,

    /// Category name registered under a slug
    #[arg(long, value_name = "SLUG")]
    pub category_slug: Option<String>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate)
    }
    pub const fn is_validate(&self) -> bool {
        matches!(self.command, Commands::Validate { .. })
    }
    pub const fn is_lookup(&self) -> bool {
        matches!(self.command, Commands::Lookup { .. })
    }
    pub const fn is_migrate(&self) -> bool {
        matches!(self.command, Commands::Migrate { .. })
    }
}
