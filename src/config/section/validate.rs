//! `[validate]` section configuration.
//!
//! Configuration for the `taxon validate` command.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! level = "error"     # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// How to treat missing registry entries: "error" or "warn".
    pub level: ValidateLevel,
}

/// How validation failures affect the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Fail the run (default).
    #[default]
    Error,
    /// Report only.
    Warn,
}

impl ValidateLevel {
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_level() {
        let config = test_parse_config("");
        assert_eq!(config.validate.level, ValidateLevel::Error);
        assert!(config.validate.level.is_error());
    }

    #[test]
    fn test_level_parsing() {
        for (input, expected) in [("error", ValidateLevel::Error), ("warn", ValidateLevel::Warn)] {
            let config = test_parse_config(&format!("[validate]\nlevel = \"{input}\""));
            assert_eq!(config.validate.level, expected, "level failed for {input}");
        }
    }
}
