//! `taxon lookup`: forward and reverse slug queries.

use std::fmt;

use anyhow::{Result, bail};

use crate::cli::LookupArgs;
use crate::config::TaxonConfig;
use crate::taxonomy::{Namespace, SlugLookup, Taxonomy, TaxonomyStore};

/// A single lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query<'a> {
    /// Name → slug.
    Slug(Namespace, &'a str),
    /// Slug → name.
    Name(Namespace, &'a str),
}

impl<'a> Query<'a> {
    fn from_args(args: &'a LookupArgs) -> Option<Self> {
        let LookupArgs {
            author,
            category,
            author_slug,
            category_slug,
        } = args;

        if let Some(name) = author {
            Some(Self::Slug(Namespace::Authors, name))
        } else if let Some(name) = category {
            Some(Self::Slug(Namespace::Categories, name))
        } else if let Some(slug) = author_slug {
            Some(Self::Name(Namespace::Authors, slug))
        } else {
            category_slug
                .as_deref()
                .map(|slug| Self::Name(Namespace::Categories, slug))
        }
    }

    /// Answer against `taxonomy`.
    ///
    /// Unregistered names resolve to themselves; unknown slugs resolve to
    /// nothing.
    fn run(&self, taxonomy: &'a Taxonomy) -> Option<&'a str> {
        let lookup = SlugLookup::new(taxonomy);
        match *self {
            Self::Slug(ns, name) => Some(lookup.slug_for(ns, name)),
            Self::Name(ns, slug) => lookup.name_for(ns, slug),
        }
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slug(ns, name) => write!(f, "{} \"{}\"", ns.singular(), name),
            Self::Name(ns, slug) => write!(f, "{} slug `{}`", ns.singular(), slug),
        }
    }
}

/// Print the answer to stdout, one line, suitable for scripts.
pub fn lookup(config: &TaxonConfig, args: &LookupArgs) -> Result<()> {
    let Some(query) = Query::from_args(args) else {
        bail!("nothing to look up");
    };

    let taxonomy = config.store().load()?;
    if let Query::Slug(ns, name) = query
        && !taxonomy.get(ns).contains(name)
    {
        crate::debug!("lookup"; "{} is not registered", query);
    }

    match query.run(&taxonomy) {
        Some(answer) => {
            println!("{answer}");
            Ok(())
        }
        None => bail!("no entry registered for {}", query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LookupArgs {
        LookupArgs {
            author: None,
            category: None,
            author_slug: None,
            category_slug: None,
        }
    }

    fn taxonomy() -> Taxonomy {
        let mut t = Taxonomy::new();
        t.authors.insert_new("করিম", "slug-18z3d6");
        t.categories.insert_new("খবর", "slug-1g8t6");
        t
    }

    #[test]
    fn test_query_from_args() {
        let a = LookupArgs {
            author: Some("করিম".to_string()),
            ..args()
        };
        assert_eq!(
            Query::from_args(&a),
            Some(Query::Slug(Namespace::Authors, "করিম"))
        );

        let a = LookupArgs {
            category_slug: Some("slug-1g8t6".to_string()),
            ..args()
        };
        assert_eq!(
            Query::from_args(&a),
            Some(Query::Name(Namespace::Categories, "slug-1g8t6"))
        );

        assert_eq!(Query::from_args(&args()), None);
    }

    #[test]
    fn test_query_display() {
        assert_eq!(
            Query::Name(Namespace::Categories, "x").to_string(),
            "category slug `x`"
        );
        assert_eq!(
            Query::Slug(Namespace::Authors, "করিম").to_string(),
            "author \"করিম\""
        );
    }

    #[test]
    fn test_run() {
        let t = taxonomy();
        assert_eq!(
            Query::Slug(Namespace::Authors, "করিম").run(&t),
            Some("slug-18z3d6")
        );
        assert_eq!(Query::Slug(Namespace::Authors, "অচেনা").run(&t), Some("অচেনা"));
        assert_eq!(
            Query::Name(Namespace::Categories, "slug-1g8t6").run(&t),
            Some("খবর")
        );
        assert_eq!(Query::Name(Namespace::Authors, "slug-1g8t6").run(&t), None);
    }
}
