//! Similarity scoring over normalized names

use super::distance::levenshtein;
use super::normalization::normalize_name;

/// Score how similar two item names are, in `[0, 1]`.
///
/// Both names are normalized first; equal normalized forms (including two
/// names that normalize to empty) score exactly 1. Otherwise the score is
/// `1 - distance / max(len)`, which stays in `[0, 1]` because the distance
/// never exceeds the longer length.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    score_normalized(&normalize_name(a), &normalize_name(b))
}

/// Score two already-normalized names.
pub(crate) fn score_normalized(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let max_len = a.len().max(b.len());
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}
