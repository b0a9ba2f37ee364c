//! Import of the legacy TypeScript registry module.
//!
//! Older sites kept the registry as generated source:
//!
//! ```text
//! export const authors: Record<string, string> = {
//!     "করিম": "slug-18z3d6",
//! };
//!
//! export const categories: Record<string, string> = {
//!     "খবর": "slug-1g8t6",
//! };
//! ```
//!
//! Only the two object literals are read; slugs are imported verbatim.

use std::sync::LazyLock;

use regex::Regex;

use super::{Namespace, SlugMap, Taxonomy};

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*:\s*"([^"]+)""#).expect("valid entry pattern"));

/// Pattern matching `export const <name> ... = { ... }`.
fn object_pattern(export: &str) -> Regex {
    let pattern = format!(r"(?s)export\s+const\s+{export}\b[^=]*=\s*\{{([^}}]*)\}}");
    Regex::new(&pattern).expect("valid export pattern")
}

static AUTHORS: LazyLock<Regex> = LazyLock::new(|| object_pattern(Namespace::Authors.name()));
static CATEGORIES: LazyLock<Regex> =
    LazyLock::new(|| object_pattern(Namespace::Categories.name()));

/// Parse a legacy registry module. Missing exports yield empty namespaces.
pub fn parse(source: &str) -> Taxonomy {
    Taxonomy {
        authors: parse_object(&AUTHORS, source),
        categories: parse_object(&CATEGORIES, source),
    }
}

fn parse_object(pattern: &Regex, source: &str) -> SlugMap {
    let Some(body) = pattern.captures(source).and_then(|c| c.get(1)) else {
        return SlugMap::new();
    };

    let mut map = SlugMap::new();
    for caps in ENTRY.captures_iter(body.as_str()) {
        map.insert_new(&caps[1], &caps[2]);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r#"export const authors: Record<string, string> = {
	"Zara 2": "zara-2-qvn7p4",
	"করিম": "karim-ab12cd"
};

export const categories: Record<string, string> = {
	"খবর": "slug-1g8t6",
	"মতামত": "slug-vxcxhe"
};
"#;

    #[test]
    fn test_parse_legacy_module() {
        let taxonomy = parse(LEGACY);
        assert_eq!(taxonomy.authors.len(), 2);
        assert_eq!(taxonomy.authors.get("করিম"), Some("karim-ab12cd"));
        assert_eq!(taxonomy.categories.get("খবর"), Some("slug-1g8t6"));
        assert_eq!(taxonomy.categories.get("মতামত"), Some("slug-vxcxhe"));
    }

    #[test]
    fn test_missing_export() {
        let source = "export const authors = {\n\t\"a\": \"b\"\n};\n";
        let taxonomy = parse(source);
        assert_eq!(taxonomy.authors.get("a"), Some("b"));
        assert!(taxonomy.categories.is_empty());
    }

    #[test]
    fn test_empty_objects() {
        let source = "export const authors: Record<string, string> = {\n\n};\nexport const categories: Record<string, string> = {\n};\n";
        assert!(parse(source).is_empty());
    }

    #[test]
    fn test_garbage() {
        assert!(parse("not a module").is_empty());
    }

    #[test]
    fn test_authors_prefix_does_not_match_other_exports() {
        let source = "export const authorsLegacy = {\"x\": \"y\"};";
        assert!(parse(source).authors.is_empty());
    }
}
