//! `[issue]` section configuration.
//!
//! Filing a remediation issue when `taxon validate` finds missing entries.
//! Nothing is sent unless both the repository and a token are available.
//!
//! # Example
//!
//! ```toml
//! [issue]
//! enable = true
//! api = "https://api.github.com"     # API base URL
//! repo_env = "GITHUB_REPOSITORY"     # Env var holding `owner/repo`
//! token_env = "GITHUB_TOKEN"         # Env var holding the access token
//! token_path = "~/.github-token"     # Optional: token file fallback
//! labels = ["taxonomy", "bug"]
//! timeout = 10                       # HTTP timeout in seconds
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueConfig {
    /// File an issue on validation failure (when credentials exist).
    pub enable: bool,

    /// API base URL.
    pub api: String,

    /// Name of the env var holding the `owner/repo` slug.
    pub repo_env: String,

    /// Name of the env var holding the access token.
    pub token_env: String,

    /// Path to a file containing the access token.
    ///
    /// Only read when the token env var is unset. Keep it outside the
    /// repository.
    pub token_path: Option<PathBuf>,

    /// Labels attached to the issue.
    pub labels: Vec<String>,

    /// HTTP request timeout in seconds.
    pub timeout: u64,
}

impl IssueConfig {
    pub const API: FieldPath = FieldPath::new("issue.api");
    pub const TOKEN_PATH: FieldPath = FieldPath::new("issue.token_path");
    pub const LABELS: FieldPath = FieldPath::new("issue.labels");
    pub const TIMEOUT: FieldPath = FieldPath::new("issue.timeout");

    /// Validate issue configuration.
    ///
    /// # Checks
    /// - `api` must be an http(s) URL.
    /// - `labels` must not contain empty strings.
    /// - `timeout` must be positive.
    /// - `token_path`, if set, should point at a file (warning only).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        match url::Url::parse(&self.api) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => diag.error_with_hint(
                Self::API,
                format!("invalid API URL: `{}`", self.api),
                "api = \"https://api.github.com\"",
            ),
        }

        if self.labels.iter().any(|l| l.trim().is_empty()) {
            diag.error(Self::LABELS, "labels must not be empty strings");
        }

        if self.timeout == 0 {
            diag.error(Self::TIMEOUT, "timeout must be greater than 0");
        }

        if let Some(path) = &self.token_path
            && !path.is_file()
        {
            diag.warn(
                Self::TOKEN_PATH,
                format!("token file not found: {}", path.display()),
            );
        }
    }

    /// Expand `~` and resolve a relative token path against `root`.
    pub fn normalize_token_path(&mut self, root: &Path) {
        if let Some(path) = self.token_path.take() {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            let path = PathBuf::from(expanded);
            self.token_path = Some(if path.is_relative() {
                root.join(path)
            } else {
                path
            });
        }
    }
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            enable: true,
            api: "https://api.github.com".to_string(),
            repo_env: "GITHUB_REPOSITORY".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            token_path: None,
            labels: vec!["taxonomy".to_string(), "bug".to_string()],
            timeout: 10,
        }
    }
}
