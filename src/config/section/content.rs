//! `[content]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content"              # Directory scanned for documents
//! extensions = ["md", "mdx"]   # File extensions treated as documents
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory (relative to the project root).
    pub dir: PathBuf,

    /// Document file extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl ContentConfig {
    pub const DIR: FieldPath = FieldPath::new("content.dir");
    pub const EXTENSIONS: FieldPath = FieldPath::new("content.extensions");

    /// Validate content configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error_with_hint(
                Self::EXTENSIONS,
                "no document extensions configured",
                "extensions = [\"md\", \"mdx\"]",
            );
        }
        if self
            .extensions
            .iter()
            .any(|e| e.is_empty() || e.starts_with('.'))
        {
            diag.error(
                Self::EXTENSIONS,
                "extensions must be non-empty and written without a leading dot",
            );
        }
        if !self.dir.is_dir() {
            diag.warn(
                Self::DIR,
                format!("content directory not found: {}", self.dir.display()),
            );
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
        }
    }
}
