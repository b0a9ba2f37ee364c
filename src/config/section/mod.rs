//! Configuration section definitions.
//!
//! Each module corresponds to a section in `taxon.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `content`  | `[content]`    | Content directory and extensions  |
//! | `issue`    | `[issue]`      | Remediation issue filing          |
//! | `registry` | `[registry]`   | Registry file location            |
//! | `validate` | `[validate]`   | Validation failure level          |

mod content;
mod issue;
mod registry;
mod validate;

pub use content::ContentConfig;
pub use issue::IssueConfig;
pub use registry::RegistryConfig;
pub use validate::{ValidateConfig, ValidateLevel};
