//! Name ↔ slug queries used at render time.
//!
//! Reverse lookups scan the namespace linearly. Registries hold tens to a
//! few hundred entries; build an index first if that stops being true.

use super::{Namespace, Taxonomy};

/// Read-only query view over a loaded registry.
#[derive(Debug, Clone, Copy)]
pub struct SlugLookup<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> SlugLookup<'a> {
    pub const fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Slug for `name`, or `name` itself when unregistered.
    pub fn slug_for<'n>(&self, ns: Namespace, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.taxonomy.get(ns).get(name).unwrap_or(name)
    }

    /// Name registered under `slug`, if any.
    pub fn name_for(&self, ns: Namespace, slug: &str) -> Option<&'a str> {
        self.taxonomy.get(ns).name_for(slug)
    }

    pub fn slug_for_author<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.slug_for(Namespace::Authors, name)
    }

    pub fn slug_for_category<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.slug_for(Namespace::Categories, name)
    }

    pub fn author_for_slug(&self, slug: &str) -> Option<&'a str> {
        self.name_for(Namespace::Authors, slug)
    }

    pub fn category_for_slug(&self, slug: &str) -> Option<&'a str> {
        self.name_for(Namespace::Categories, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        let mut t = Taxonomy::new();
        t.authors.insert_new("করিম", "karim-ab12cd");
        t.categories.insert_new("খবর", "slug-1g8t6");
        t
    }

    #[test]
    fn test_forward_lookup() {
        let t = taxonomy();
        let lookup = SlugLookup::new(&t);
        assert_eq!(lookup.slug_for_author("করিম"), "karim-ab12cd");
        assert_eq!(lookup.slug_for_category("খবর"), "slug-1g8t6");
    }

    #[test]
    fn test_forward_lookup_falls_back_to_input() {
        let t = taxonomy();
        let lookup = SlugLookup::new(&t);
        assert_eq!(lookup.slug_for_author("অচেনা"), "অচেনা");
        // Namespaces are independent
        assert_eq!(lookup.slug_for_category("করিম"), "করিম");
    }

    #[test]
    fn test_reverse_lookup() {
        let t = taxonomy();
        let lookup = SlugLookup::new(&t);
        assert_eq!(lookup.author_for_slug("karim-ab12cd"), Some("করিম"));
        assert_eq!(lookup.category_for_slug("slug-1g8t6"), Some("খবর"));
        assert_eq!(lookup.author_for_slug("slug-1g8t6"), None);
        assert_eq!(lookup.category_for_slug("nope"), None);
    }
}
