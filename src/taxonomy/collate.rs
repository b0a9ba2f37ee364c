//! Display ordering for registry names.
//!
//! The registry file is meant to be read by people, so names are listed
//! the way a reader expects rather than by raw byte value: letter case is
//! folded first and only used to break ties. Ordering carries no meaning
//! beyond readability.
//!
//! This is not locale collation. Names are compared by Unicode scalar
//! value after case folding, so accented Latin letters sort after `z`
//! (`"école"` follows `"zebra"`) where a locale-aware sort would put them
//! with their base letter.

use std::cmp::Ordering;

/// Compare two names for display ordering.
///
/// Case-insensitive comparison over Unicode scalar values, falling back to
/// a case-sensitive comparison so the order is total and deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| a.cmp(b))
}

/// Sort a slice of names in display order.
pub fn sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}
