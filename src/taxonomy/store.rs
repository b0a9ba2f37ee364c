//! Persisted registry.
//!
//! The on-disk form is a TOML document with one table per namespace:
//!
//! ```toml
//! [authors]
//! "করিম" = "slug-18z3d6"
//! "Zara 2" = "zara-2-qvn7p4"
//!
//! [categories]
//! "খবর" = "slug-1g8t6"
//! ```
//!
//! Entries are written in display order so diffs stay readable. A missing
//! or unparsable file loads as an empty registry; saving overwrites the
//! whole file and is not atomic.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use super::Taxonomy;
use crate::log;

/// Comment written at the top of the registry file.
const HEADER: &str = "\
# Generated by `taxon generate`.
# Existing entries are never rewritten; review new slugs before committing.
";

/// Registry persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error when accessing registry `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to serialize registry")]
    Serialize(#[from] toml::ser::Error),
}

/// Load/save access to the persisted registry.
pub trait TaxonomyStore {
    /// Load the registry. Missing or unparsable data yields an empty one.
    fn load(&self) -> Result<Taxonomy, StoreError>;

    /// Overwrite the persisted registry.
    fn save(&self, taxonomy: &Taxonomy) -> Result<(), StoreError>;

    /// Human-readable location, for logs and reports.
    fn location(&self) -> String;
}

// ============================================================================
// TomlStore
// ============================================================================

/// Registry stored as a TOML file.
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse registry text.
    pub fn parse(content: &str) -> Result<Taxonomy, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render registry text in display order.
    pub fn render(taxonomy: &Taxonomy) -> Result<String, StoreError> {
        let body = toml::to_string(&taxonomy.sorted())?;
        Ok(format!("{HEADER}\n{body}"))
    }
}

impl TaxonomyStore for TomlStore {
    fn load(&self) -> Result<Taxonomy, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log!("registry"; "no registry at {}, starting empty", self.path.display());
                return Ok(Taxonomy::new());
            }
            Err(err) => return Err(StoreError::Io(self.path.clone(), err)),
        };

        match Self::parse(&content) {
            Ok(taxonomy) => Ok(taxonomy),
            Err(err) => {
                log!("registry"; "could not parse {}, starting empty", self.path.display());
                crate::debug!("registry"; "{}", err.message());
                Ok(Taxonomy::new())
            }
        }
    }

    fn save(&self, taxonomy: &Taxonomy) -> Result<(), StoreError> {
        let content = Self::render(taxonomy)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io(parent.to_path_buf(), err))?;
        }

        fs::write(&self.path, content).map_err(|err| StoreError::Io(self.path.clone(), err))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory registry, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    taxonomy: Mutex<Option<Taxonomy>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy: Mutex::new(Some(taxonomy)),
        }
    }

    /// Last saved (or seeded) registry, if any.
    pub fn snapshot(&self) -> Option<Taxonomy> {
        self.taxonomy.lock().clone()
    }
}

impl TaxonomyStore for MemoryStore {
    fn load(&self) -> Result<Taxonomy, StoreError> {
        Ok(self.taxonomy.lock().clone().unwrap_or_default())
    }

    fn save(&self, taxonomy: &Taxonomy) -> Result<(), StoreError> {
        *self.taxonomy.lock() = Some(taxonomy.sorted());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
