//! Deterministic slug generation for display names.
//!
//! Names are mostly non-Latin script, which we do not transliterate.
//! Instead a slug is derived from a 32-bit polynomial rolling hash of the
//! name, optionally prefixed with any ASCII words or numbers the name
//! already contains:
//!
//! ```text
//! "করিম"      → "slug-18z3d6"
//! "Zara 2"    → "zara-2-qvn7p4"
//! ""          → "slug-0"
//! ```
//!
//! The hash must stay bit-for-bit identical across releases: slugs already
//! persisted in a registry were produced by it.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix used when a name has no ASCII letters or digits.
const FALLBACK_PREFIX: &str = "slug";

/// Number of hash characters appended after the ASCII parts.
const SHORT_HASH_LEN: usize = 6;

/// Maximal runs of ASCII letters and digits.
static ASCII_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("valid ascii run pattern"));

/// Generate the slug for a display name.
///
/// Total and deterministic: every input (including the empty string)
/// yields a non-empty slug matching `^[a-z0-9-]+$`.
pub fn generate(name: &str) -> String {
    let hash = to_base36(hash_code(name).unsigned_abs());

    let parts: Vec<&str> = ASCII_RUN.find_iter(name).map(|m| m.as_str()).collect();
    if parts.is_empty() {
        return format!("{FALLBACK_PREFIX}-{hash}");
    }

    let ascii = parts.join("-").to_ascii_lowercase();
    let short = &hash[..hash.len().min(SHORT_HASH_LEN)];
    format!("{ascii}-{short}")
}

/// 32-bit signed polynomial rolling hash (`h = h * 31 + c`, wrapping).
///
/// Iterates UTF-16 code units so names outside the Basic Multilingual
/// Plane hash the same way they did when the registry was first seeded.
pub fn hash_code(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

/// Render an unsigned value in lowercase base-36.
pub fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(7);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    // Only ASCII digits were pushed
    String::from_utf8(buf).unwrap_or_default()
}

/// Check that a slug only uses lowercase ASCII letters, digits and `-`.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
