//! Name → slug registry for authors and categories.
//!
//! # Module Structure
//!
//! ```text
//! taxonomy/
//! ├── slug       # Deterministic slug generator
//! ├── collate    # Display ordering for names
//! ├── store      # Persisted registry (load/save)
//! ├── legacy     # Import of the old TypeScript registry module
//! ├── builder    # Merge discovered names into the registry
//! ├── validator  # Check documents against the registry
//! └── lookup     # Forward/reverse slug queries
//! ```
//!
//! The registry is append-only: once a `(name, slug)` pair is persisted,
//! later runs never change or drop it.

pub mod builder;
pub mod collate;
pub mod legacy;
pub mod lookup;
pub mod slug;
pub mod store;
pub mod validator;

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use builder::{BuildOutcome, build};
pub use lookup::SlugLookup;
pub use store::{MemoryStore, StoreError, TaxonomyStore, TomlStore};
pub use validator::{MissingEntries, validate};

// ============================================================================
// Namespace
// ============================================================================

/// One of the two independent mapping domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Authors,
    Categories,
}

impl Namespace {
    pub const ALL: [Self; 2] = [Self::Authors, Self::Categories];

    /// Plural noun used in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Categories => "categories",
        }
    }

    /// Singular noun used in logs and reports.
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Authors => "author",
            Self::Categories => "category",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SlugMap
// ============================================================================

/// Insertion-ordered `name → slug` mapping for one namespace.
///
/// Equality compares entries, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlugMap(IndexMap<String, String>);

impl SlugMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Insert a pair unless the name is already present.
    ///
    /// Returns `true` if the entry was added. Existing slugs are never
    /// overwritten.
    pub fn insert_new(&mut self, name: impl Into<String>, slug: impl Into<String>) -> bool {
        match self.0.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(slug.into());
                true
            }
        }
    }

    /// First name mapped to `slug`, scanning in order.
    pub fn name_for(&self, slug: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, s)| s.as_str() == slug)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.0.values().any(|s| s == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Reorder entries by display collation.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, _, b, _| collate::compare(a, b));
    }

    /// Slugs shared by more than one name, with the names sharing them.
    pub fn collisions(&self) -> Vec<(String, Vec<String>)> {
        let mut by_slug: FxHashMap<&str, Vec<String>> = FxHashMap::default();
        for (name, slug) in &self.0 {
            by_slug.entry(slug.as_str()).or_default().push(name.clone());
        }

        let mut shared: Vec<_> = by_slug
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(slug, names)| (slug.to_string(), names))
            .collect();
        shared.sort_by(|a, b| a.0.cmp(&b.0));
        shared
    }
}

impl<N: Into<String>, S: Into<String>> FromIterator<(N, S)> for SlugMap {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, s)| (n.into(), s.into()))
                .collect(),
        )
    }
}

// ============================================================================
// Taxonomy
// ============================================================================

/// The registry: one slug map per namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub authors: SlugMap,
    pub categories: SlugMap,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn get(&self, ns: Namespace) -> &SlugMap {
        match ns {
            Namespace::Authors => &self.authors,
            Namespace::Categories => &self.categories,
        }
    }

    pub fn get_mut(&mut self, ns: Namespace) -> &mut SlugMap {
        match ns {
            Namespace::Authors => &mut self.authors,
            Namespace::Categories => &mut self.categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.categories.is_empty()
    }

    /// Sort both namespaces by display collation.
    pub fn sort(&mut self) {
        self.authors.sort();
        self.categories.sort();
    }

    /// Return a sorted copy.
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// Add every entry of `other` whose name is not yet present.
    ///
    /// Returns the number of entries added per namespace.
    pub fn absorb(&mut self, other: &Self) -> (usize, usize) {
        let mut added = [0usize; 2];
        for (i, ns) in Namespace::ALL.into_iter().enumerate() {
            let target = self.get_mut(ns);
            for (name, slug) in other.get(ns).iter() {
                if target.insert_new(name, slug) {
                    added[i] += 1;
                }
            }
        }
        (added[0], added[1])
    }

    /// Slug collisions per namespace (empty namespaces omitted).
    pub fn collisions(&self) -> Vec<(Namespace, Vec<(String, Vec<String>)>)> {
        Namespace::ALL
            .into_iter()
            .map(|ns| (ns, self.get(ns).collisions()))
            .filter(|(_, c)| !c.is_empty())
            .collect()
    }
}
