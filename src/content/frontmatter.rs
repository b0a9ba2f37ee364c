//! Author and category extraction from document frontmatter.
//!
//! Two block styles are recognized, both of which must open on the very
//! first line of the document:
//!
//! ```text
//! ---                          +++
//! author: "করিম"               author = "করিম"
//! categories:                  categories = ["খবর"]
//!   - "খবর"                    +++
//!   - "মতামত"
//! ---
//! ```
//!
//! The YAML-like block is read with a small line scanner rather than a
//! full YAML parser. Only two top-level keys matter here and everything
//! else is skipped, so malformed input degrades to "no value" instead of
//! failing the document.

/// Names declared by one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub author: Option<String>,
    pub categories: Vec<String>,
}

/// Extract the author and categories from a document's text.
///
/// Never fails: a missing block, missing keys or malformed lists all
/// produce empty values.
pub fn extract(text: &str) -> FrontMatter {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match detect(text) {
        Some(Block::Yaml(body)) => parse_yaml_like(body),
        Some(Block::Toml(body)) => parse_toml(&body),
        None => FrontMatter::default(),
    }
}

// ============================================================================
// Block detection
// ============================================================================

enum Block<'a> {
    Yaml(Vec<&'a str>),
    Toml(String),
}

/// Find the delimited block at the start of the document.
fn detect(text: &str) -> Option<Block<'_>> {
    let mut lines = text.lines().map(|l| l.strip_suffix('\r').unwrap_or(l));
    let marker = lines.next()?.trim_end();

    if marker != "---" && marker != "+++" {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if line.trim_end() == marker {
            return Some(if marker == "---" {
                Block::Yaml(body)
            } else {
                Block::Toml(body.join("\n"))
            });
        }
        body.push(line);
    }

    // Unterminated block
    None
}

// ============================================================================
// YAML-like scanner
// ============================================================================

/// Scan `key: value` lines for `author` and `categories`.
fn parse_yaml_like(lines: Vec<&str>) -> FrontMatter {
    let mut meta = FrontMatter::default();
    let mut seen_categories = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        // Only top-level keys count
        if line.starts_with(char::is_whitespace) || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim_end() {
            "author" if meta.author.is_none() => {
                meta.author = non_empty(scalar(value));
            }
            "categories" if !seen_categories => {
                seen_categories = true;
                if value.is_empty() || value.starts_with('#') {
                    while let Some(line) = lines.get(i) {
                        let trimmed = line.trim();
                        if trimmed.is_empty() || trimmed.starts_with('#') {
                            i += 1;
                            continue;
                        }
                        let Some(item) = list_item(line) else {
                            break;
                        };
                        i += 1;
                        meta.categories.extend(non_empty(scalar(item)));
                    }
                } else {
                    meta.categories.extend(flow_list(value));
                }
            }
            _ => {}
        }
    }

    meta
}

/// Return the item text of a `- item` line.
fn list_item(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('-').map(str::trim)
}

/// Parse an inline `["a", "b"]` list.
///
/// Commas inside quotes belong to the item. Anything after the closing
/// bracket is ignored, and a list that never closes yields nothing.
fn flow_list(value: &str) -> Vec<String> {
    let Some(inner) = value.strip_prefix('[') else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut start = 0;
    let mut quote = None;

    for (at, c) in inner.char_indices() {
        match (quote, c) {
            (Some(open), _) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ',') => {
                items.push(&inner[start..at]);
                start = at + 1;
            }
            (None, ']') => {
                items.push(&inner[start..at]);
                return items
                    .into_iter()
                    .filter_map(|item| non_empty(scalar(item)))
                    .collect();
            }
            _ => {}
        }
    }

    Vec::new()
}

/// Read one scalar value.
///
/// A quoted value ends at its closing quote and the rest of the line is
/// dropped. A plain value ends at a ` #` comment.
fn scalar(value: &str) -> &str {
    let value = value.trim();

    if let Some(quote) = value.chars().next().filter(|&c| matches!(c, '"' | '\'')) {
        let rest = &value[1..];
        return match rest.find(quote) {
            Some(end) => rest[..end].trim(),
            // Unbalanced quote
            None => rest.trim(),
        };
    }

    if value.starts_with('#') {
        return "";
    }
    let value = value.find(" #").map_or(value, |at| &value[..at]);
    value.trim_matches(|c| c == '"' || c == '\'').trim()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// TOML block
// ============================================================================

/// Parse a `+++` block.
///
/// Invalid TOML yields empty values. Each key is read on its own, so a
/// wrongly typed `categories` does not cost the author and vice versa.
fn parse_toml(body: &str) -> FrontMatter {
    let Ok(table) = body.parse::<toml::Table>() else {
        return FrontMatter::default();
    };

    let author = table
        .get("author")
        .and_then(toml::Value::as_str)
        .and_then(|a| non_empty(a.trim()));

    let categories = table
        .get("categories")
        .and_then(toml::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(toml::Value::as_str)
                .filter_map(|c| non_empty(c.trim()))
                .collect()
        })
        .unwrap_or_default();

    FrontMatter { author, categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(author: Option<&str>, categories: &[&str]) -> FrontMatter {
        FrontMatter {
            author: author.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_author_without_categories() {
        let text = "---\nauthor: \"করিম\"\n---\n\nBody";
        assert_eq!(extract(text), fm(Some("করিম"), &[]));
    }

    #[test]
    fn test_author_and_category_list() {
        let text = "---\ntitle: Hello\nauthor: 'রহিম'\ncategories:\n  - \"খবর\"\n  - 'মতামত'\ndate: 2024-01-01\n---\n";
        assert_eq!(extract(text), fm(Some("রহিম"), &["খবর", "মতামত"]));
    }

    #[test]
    fn test_unquoted_author_is_trimmed() {
        let text = "---\nauthor:    Zara 2   \n---\n";
        assert_eq!(extract(text).author.as_deref(), Some("Zara 2"));
    }

    #[test]
    fn test_empty_author_is_absent() {
        assert_eq!(extract("---\nauthor: \"  \"\n---\n").author, None);
        assert_eq!(extract("---\nauthor:\n---\n").author, None);
    }

    #[test]
    fn test_first_author_wins() {
        let text = "---\nauthor: A\nauthor: B\n---\n";
        assert_eq!(extract(text).author.as_deref(), Some("A"));
    }

    #[test]
    fn test_nested_keys_are_ignored() {
        let text = "---\nseo:\n  author: Nested\n---\n";
        assert_eq!(extract(text).author, None);
    }

    #[test]
    fn test_empty_list_items_are_dropped() {
        let text = "---\ncategories:\n  - \"\"\n  - \"খবর\"\n  - ' '\n---\n";
        assert_eq!(extract(text).categories, vec!["খবর"]);
    }

    #[test]
    fn test_list_ends_at_next_key() {
        let text = "---\ncategories:\n  - \"খবর\"\nauthor: X\n  - \"not a category\"\n---\n";
        let meta = extract(text);
        assert_eq!(meta.categories, vec!["খবর"]);
        assert_eq!(meta.author.as_deref(), Some("X"));
    }

    #[test]
    fn test_bare_list_items() {
        let text = "---\ncategories:\n- খবর\n- মতামত\n---\n";
        assert_eq!(extract(text).categories, vec!["খবর", "মতামত"]);
    }

    #[test]
    fn test_inline_flow_list() {
        let text = "---\ncategories: [\"খবর\", 'মতামত', \"\"]\n---\n";
        assert_eq!(extract(text).categories, vec!["খবর", "মতামত"]);
    }

    #[test]
    fn test_malformed_inline_value_degrades() {
        let text = "---\ncategories: খবর\n---\n";
        assert!(extract(text).categories.is_empty());
    }

    #[test]
    fn test_no_frontmatter() {
        assert_eq!(extract("# Just content\nauthor: X"), FrontMatter::default());
        assert_eq!(extract(""), FrontMatter::default());
    }

    #[test]
    fn test_block_must_open_first_line() {
        let text = "\n---\nauthor: X\n---\n";
        assert_eq!(extract(text), FrontMatter::default());
    }

    #[test]
    fn test_unterminated_block() {
        let text = "---\nauthor: X\n";
        assert_eq!(extract(text), FrontMatter::default());
    }

    #[test]
    fn test_crlf_and_bom() {
        let text = "\u{feff}---\r\nauthor: \"করিম\"\r\ncategories:\r\n  - \"খবর\"\r\n---\r\nBody";
        assert_eq!(extract(text), fm(Some("করিম"), &["খবর"]));
    }

    #[test]
    fn test_toml_block() {
        let text = "+++\ntitle = \"Hi\"\nauthor = \"করিম\"\ncategories = [\"খবর\", \" \"]\n+++\nBody";
        assert_eq!(extract(text), fm(Some("করিম"), &["খবর"]));
    }

    #[test]
    fn test_invalid_toml_block_degrades() {
        let text = "+++\nauthor = \n+++\n";
        assert_eq!(extract(text), FrontMatter::default());
    }

    #[test]
    fn test_trailing_comments_after_quoted_values() {
        let text = "---\nauthor: \"করিম\" # staff writer\ncategories:\n  - \"খবর\" # news\n  - মতামত # opinion\n---\n";
        assert_eq!(extract(text), fm(Some("করিম"), &["খবর", "মতামত"]));
    }

    #[test]
    fn test_plain_value_comment() {
        let text = "---\nauthor: Zara 2 # guest\n---\n";
        assert_eq!(extract(text).author.as_deref(), Some("Zara 2"));
        assert_eq!(extract("---\nauthor: # todo\n---\n").author, None);
    }

    #[test]
    fn test_flow_list_keeps_quoted_commas() {
        let text = "---\ncategories: [\"খবর, মতামত\", 'খেলা'] # two\n---\n";
        assert_eq!(extract(text).categories, vec!["খবর, মতামত", "খেলা"]);
    }

    #[test]
    fn test_unclosed_flow_list_degrades() {
        let text = "---\ncategories: [\"খবর\", \"খেলা\"\n---\n";
        assert!(extract(text).categories.is_empty());
    }

    #[test]
    fn test_list_skips_blank_and_comment_lines() {
        let text = "---\ncategories: # sections\n\n  - \"খবর\"\n  # archived\n\n  - \"মতামত\"\n\ntitle: X\n  - \"not a category\"\n---\n";
        assert_eq!(extract(text).categories, vec!["খবর", "মতামত"]);
    }

    #[test]
    fn test_toml_wrong_type_drops_only_that_key() {
        let text = "+++\nauthor = \"করিম\"\ncategories = \"খবর\"\n+++\n";
        assert_eq!(extract(text), fm(Some("করিম"), &[]));

        let text = "+++\nauthor = 7\ncategories = [\"খবর\", 3]\n+++\n";
        assert_eq!(extract(text), fm(None, &["খবর"]));
    }

    #[test]
    fn test_case_sensitive_keys() {
        let text = "---\nAuthor: X\n---\n";
        assert_eq!(extract(text).author, None);
    }
}
