//! Project configuration for `taxon.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [content]
//! │   ├── issue      # [issue]
//! │   ├── registry   # [registry]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # TaxonConfig (this file)
//! ```
//!
//! The config file is optional. Without one, defaults apply and the
//! project root is the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ContentConfig, IssueConfig, RegistryConfig, ValidateConfig, ValidateLevel};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    log,
    taxonomy::TomlStore,
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

/// Root configuration structure representing taxon.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content discovery settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Registry file settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Remediation issue settings
    #[serde(default)]
    pub issue: IssueConfig,
}

impl TaxonConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when none exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path) = match find_config_file(&cwd, &cli.config) {
            Some(path) => (Self::from_path(&path)?, Some(path)),
            None => {
                crate::debug!("config"; "{} not found, using defaults", cli.config.display());
                (Self::default(), None)
            }
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);

        config.config_path = config_path.as_deref().map(normalize_path);
        config.finalize(cli, &root);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI overrides and resolve paths against `root`.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        Self::update_option(&mut self.registry.path, cli.registry.as_ref());

        if let Commands::Validate { args } = &cli.command {
            self.apply_validate_args(args);
        }

        self.normalize_paths(root);
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

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Registry store backed by `registry.path`.
    pub fn store(&self) -> TomlStore {
        TomlStore::new(&self.registry.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        if args.warn_only {
            self.validate.level = ValidateLevel::Warn;
        }
        if args.no_issue {
            self.issue.enable = false;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);

        self.content.dir = normalize_path(&root.join(&self.content.dir));
        self.registry.path = normalize_path(&root.join(&self.registry.path));
        self.issue.normalize_token_path(&root);

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);
        self.registry.validate(&mut diag);
        self.issue.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> TaxonConfig {
    let (parsed, ignored) = TaxonConfig::parse_with_ignored(extra).unwrap();
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

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = TaxonConfig::parse_with_ignored("[content\ndir = \"posts\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_config_default() {
        let config = TaxonConfig::default();

        assert!(config.config_path.is_none());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.registry.path, PathBuf::from("taxonomy.toml"));
        assert!(config.validate.level.is_error());
        assert!(config.issue.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[content]\ndir = \"posts\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = TaxonConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.content.dir, PathBuf::from("posts"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[registry]\npath = \"src/lib/taxonomy.toml\"\n[validate]\nlevel = \"warn\"";
        let (_, ignored) = TaxonConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_cli_overrides_and_paths() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("posts")).unwrap();

        let cli = Cli::parse_from([
            "taxon",
            "-c",
            "posts",
            "-r",
            "data/reg.toml",
            "validate",
            "--warn-only",
            "--no-issue",
        ]);

        let mut config = test_parse_config("[issue]\ntoken_path = \"secret\"");
        config.finalize(&cli, root);

        let root = normalize_path(root);
        assert_eq!(config.get_root(), root);
        assert_eq!(config.content.dir, root.join("posts"));
        assert_eq!(config.registry.path, root.join("data/reg.toml"));
        assert_eq!(config.issue.token_path, Some(root.join("secret")));
        assert_eq!(config.validate.level, ValidateLevel::Warn);
        assert!(!config.issue.enable);
        assert_eq!(
            config.root_relative(&config.registry.path),
            PathBuf::from("data/reg.toml")
        );
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = test_parse_config("[content]\nextensions = []\n[issue]\ntimeout = 0");
        config.content.dir = std::env::temp_dir();

        let err = config.validate().unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(diag.len(), 2);
    }
}
