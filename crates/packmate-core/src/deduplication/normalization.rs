//! Name normalization for duplicate comparison

use unicode_normalization::UnicodeNormalization;

/// Canonicalize an item name for comparison.
///
/// - NFKD-folds accented characters to their ASCII base letter
/// - Keeps only ASCII alphanumerics, underscore, and whitespace
/// - Lowercases
/// - Collapses whitespace runs to a single space and trims
///
/// The output contains only `[a-z0-9_ ]`, so its byte length equals its
/// character count. Idempotent: normalizing a normalized name is a no-op.
pub fn normalize_name(input: &str) -> String {
    let filtered: String = input
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_ascii_whitespace())
        .collect();

    collapse_whitespace(&filtered.to_lowercase())
        .trim()
        .to_string()
}

/// Collapse multiple whitespace characters into a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_ascii_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}
