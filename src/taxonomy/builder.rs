//! Merge names discovered in documents into the registry.
//!
//! Building only ever adds: existing names keep their slugs, new names
//! get a generated slug, and the result is re-sorted for display.

use std::collections::BTreeSet;

use super::{Namespace, SlugMap, Taxonomy, collate, slug};
use crate::content::Document;
use crate::log;

/// Distinct names referenced by a document set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredNames {
    pub authors: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl DiscoveredNames {
    /// Collect distinct author and category names (set semantics).
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut names = Self::default();
        for doc in documents {
            if let Some(author) = &doc.author {
                names.authors.insert(author.clone());
            }
            names.categories.extend(doc.categories.iter().cloned());
        }
        names
    }

    pub const fn get(&self, ns: Namespace) -> &BTreeSet<String> {
        match ns {
            Namespace::Authors => &self.authors,
            Namespace::Categories => &self.categories,
        }
    }
}

/// Counts for one namespace after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamespaceStats {
    /// Entries carried over from the existing registry.
    pub existing: usize,
    /// Entries added by this build.
    pub added: usize,
}

impl NamespaceStats {
    pub const fn total(&self) -> usize {
        self.existing + self.added
    }
}

/// Result of a build run.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    /// The merged, sorted registry.
    pub taxonomy: Taxonomy,
    pub authors: NamespaceStats,
    pub categories: NamespaceStats,
    /// Newly assigned `(namespace, name, slug)` entries, in insertion order.
    pub added: Vec<(Namespace, String, String)>,
}

impl BuildOutcome {
    pub const fn stats(&self, ns: Namespace) -> NamespaceStats {
        match ns {
            Namespace::Authors => self.authors,
            Namespace::Categories => self.categories,
        }
    }

    /// Whether the build added anything.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
    }
}

/// Merge the names referenced by `documents` into `existing`.
///
/// Existing entries are never changed or removed.
pub fn build(documents: &[Document], existing: &Taxonomy) -> BuildOutcome {
    let discovered = DiscoveredNames::from_documents(documents);
    let mut outcome = BuildOutcome {
        taxonomy: existing.clone(),
        ..Default::default()
    };

    for ns in Namespace::ALL {
        let map = outcome.taxonomy.get_mut(ns);
        let existing_count = map.len();

        let mut new_names: Vec<&String> = discovered
            .get(ns)
            .iter()
            .filter(|name| !map.contains(name))
            .collect();
        collate::sort(&mut new_names);

        for name in new_names {
            let slug = assign_slug(map, ns, name);
            map.insert_new(name.as_str(), slug.as_str());
            outcome.added.push((ns, name.clone(), slug));
        }

        let stats = NamespaceStats {
            existing: existing_count,
            added: map.len() - existing_count,
        };
        match ns {
            Namespace::Authors => outcome.authors = stats,
            Namespace::Categories => outcome.categories = stats,
        }
    }

    outcome.taxonomy.sort();
    outcome
}

/// Generate a slug for `name` that no other name in `map` uses yet.
///
/// The generated slug is used as-is unless it collides, in which case a
/// numeric suffix (`-2`, `-3`, ...) is appended.
fn assign_slug(map: &SlugMap, ns: Namespace, name: &str) -> String {
    let base = slug::generate(name);
    if !map.contains_slug(&base) {
        return base;
    }

    let mut n = 2usize;
    loop {
        let candidate = format!("{base}-{n}");
        if !map.contains_slug(&candidate) {
            let owner = map.name_for(&base).unwrap_or_default();
            log!("warning"; "{} slug `{}` already used by \"{}\", assigned `{}` to \"{}\"",
                ns.singular(), base, owner, candidate, name);
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(author: Option<&str>, categories: &[&str]) -> Document {
        Document {
            path: Default::default(),
            author: author.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn existing() -> Taxonomy {
        let mut t = Taxonomy::new();
        t.authors.insert_new("করিম", "karim-ab12cd");
        t.categories.insert_new("খবর", "news");
        t
    }

    #[test]
    fn test_discovered_categories_are_distinct() {
        let docs = [doc(None, &["খবর"]), doc(None, &["খবর", "মতামত"])];
        let outcome = build(&docs, &Taxonomy::new());

        assert_eq!(outcome.taxonomy.categories.len(), 2);
        assert_eq!(outcome.categories.added, 2);
        assert_eq!(outcome.taxonomy.categories.get("খবর"), Some("slug-1g8t6"));
        assert_eq!(outcome.taxonomy.categories.get("মতামত"), Some("slug-vxcxhe"));
    }

    #[test]
    fn test_existing_slugs_are_stable() {
        let docs = [doc(Some("করিম"), &["খবর", "মতামত"]), doc(Some("Zara 2"), &[])];
        let before = existing();
        let outcome = build(&docs, &before);

        for ns in Namespace::ALL {
            for (name, slug) in before.get(ns).iter() {
                assert_eq!(outcome.taxonomy.get(ns).get(name), Some(slug));
            }
        }
        assert_eq!(outcome.taxonomy.authors.get("Zara 2"), Some("zara-2-qvn7p4"));
    }

    #[test]
    fn test_monotonic_even_without_documents() {
        let before = existing();
        let outcome = build(&[], &before);
        assert_eq!(outcome.taxonomy, before);
        assert!(outcome.is_unchanged());
        assert_eq!(outcome.authors.existing, 1);
        assert_eq!(outcome.authors.total(), 1);
    }

    #[test]
    fn test_idempotent() {
        let docs = [
            doc(Some("করিম"), &["খবর"]),
            doc(Some("রহিম"), &["মতামত", "খেলা"]),
            doc(None, &[]),
        ];
        let once = build(&docs, &existing()).taxonomy;
        let twice = build(&docs, &once);
        assert_eq!(twice.taxonomy, once);
        assert!(twice.is_unchanged());
    }

    #[test]
    fn test_stats_and_added_entries() {
        let docs = [doc(Some("করিম"), &[]), doc(Some("Zara 2"), &["খবর"])];
        let outcome = build(&docs, &existing());

        assert_eq!(outcome.authors, NamespaceStats { existing: 1, added: 1 });
        assert_eq!(outcome.categories, NamespaceStats { existing: 1, added: 0 });
        assert_eq!(
            outcome.added,
            vec![(
                Namespace::Authors,
                "Zara 2".to_string(),
                "zara-2-qvn7p4".to_string()
            )]
        );
    }

    #[test]
    fn test_result_is_sorted() {
        let docs = [doc(Some("beta"), &[]), doc(Some("Alpha"), &[])];
        let outcome = build(&docs, &Taxonomy::new());
        let names: Vec<_> = outcome.taxonomy.authors.names().collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_collision_gets_suffix() {
        // A hand-edited entry already owns the slug "karim" would get
        let mut before = Taxonomy::new();
        before.authors.insert_new("someone else", slug::generate("করিম"));

        let outcome = build(&[doc(Some("করিম"), &[])], &before);
        let assigned = outcome.taxonomy.authors.get("করিম").unwrap();
        assert_eq!(assigned, format!("{}-2", slug::generate("করিম")));
        assert!(outcome.taxonomy.authors.collisions().is_empty());
    }

    #[test]
    fn test_namespaces_are_independent() {
        // Same name as author and category gets an entry in each
        let outcome = build(&[doc(Some("খবর"), &["খবর"])], &Taxonomy::new());
        assert_eq!(outcome.taxonomy.authors.get("খবর"), Some("slug-1g8t6"));
        assert_eq!(outcome.taxonomy.categories.get("খবর"), Some("slug-1g8t6"));
    }
}
