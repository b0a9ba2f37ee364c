//! `[registry]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [registry]
//! path = "src/lib/taxonomy.toml"   # Persisted name → slug registry
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry file (relative to the project root).
    pub path: PathBuf,
}

impl RegistryConfig {
    pub const PATH: FieldPath = FieldPath::new("registry.path");

    /// Validate registry configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_dir() {
            diag.error_with_hint(
                Self::PATH,
                format!("registry path is a directory: {}", self.path.display()),
                "point it at a file, e.g. path = \"taxonomy.toml\"",
            );
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: "taxonomy.toml".into(),
        }
    }
}
