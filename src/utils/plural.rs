//! Pluralization utilities.

/// Format count with noun, handling pluralization
///
/// Nouns ending in consonant + `y` take `ies`.
///
/// # Examples
///
/// - `plural_count(0, "author")` -> `"0 authors"`
/// - `plural_count(1, "category")` -> `"1 category"`
/// - `plural_count(5, "category")` -> `"5 categories"`
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("1 {noun}");
    }
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{count} {stem}ies"),
        _ => format!("{count} {noun}s"),
    }
}
