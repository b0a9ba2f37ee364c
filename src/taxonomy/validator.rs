//! Check that every name referenced by documents has a registry entry.

use std::collections::BTreeSet;

use super::{Namespace, Taxonomy};
use crate::content::Document;

/// Names referenced by documents but absent from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingEntries {
    pub authors: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl MissingEntries {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.categories.is_empty()
    }

    /// Total number of missing names across both namespaces.
    pub fn len(&self) -> usize {
        self.authors.len() + self.categories.len()
    }

    pub const fn get(&self, ns: Namespace) -> &BTreeSet<String> {
        match ns {
            Namespace::Authors => &self.authors,
            Namespace::Categories => &self.categories,
        }
    }
}

/// Collect every referenced name that has no registry entry.
///
/// Read-only: the registry is never modified.
pub fn validate(documents: &[Document], taxonomy: &Taxonomy) -> MissingEntries {
    let mut missing = MissingEntries::default();

    for doc in documents {
        if let Some(author) = &doc.author
            && !taxonomy.authors.contains(author)
        {
            missing.authors.insert(author.clone());
        }

        for category in &doc.categories {
            if !taxonomy.categories.contains(category) {
                missing.categories.insert(category.clone());
            }
        }
    }

    missing
}
