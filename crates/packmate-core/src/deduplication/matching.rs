//! Layered duplicate-candidate matching
//!
//! A proposed item name is compared against every existing item with a union
//! of four rules; an item matching any rule is returned as a duplicate
//! candidate. The item-creation UI owns the accept / use-existing / cancel
//! decision.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::distance::levenshtein;
use super::normalization::normalize_name;
use super::SimilarityTarget;

/// Default edit-distance threshold for [`MatchRule::EditDistance`].
pub const DEFAULT_EDIT_DISTANCE: usize = 2;

/// Candidates at or below this normalized length skip the edit-distance and
/// substring rules; short names would match almost anything.
const SHORT_NAME_LEN: usize = 3;

/// Words at or below this length are ignored by the word-overlap rule.
const SHORT_WORD_LEN: usize = 2;

/// The rule that flagged an existing item as a likely duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    /// Normalized names are identical.
    Exact,
    /// Edit distance between normalized names is within the threshold.
    EditDistance,
    /// One normalized name contains the other.
    Substring,
    /// Every word of the smaller word set contains, or is contained by, a
    /// word of the larger set.
    WordOverlap,
}

/// Find existing items whose names look like duplicates of `candidate_name`.
///
/// Returns references into `items`, in input order, each at most once. A
/// candidate that normalizes to empty matches nothing.
pub fn find_potential_duplicates<'a, T: SimilarityTarget>(
    items: &'a [T],
    candidate_name: &str,
    max_distance: usize,
) -> Vec<&'a T> {
    let candidate = normalize_name(candidate_name);
    if candidate.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| {
            classify_normalized(&candidate, &normalize_name(item.name()), max_distance).is_some()
        })
        .collect()
}

/// Explain why `existing` looks like a duplicate of `candidate`, if it does.
///
/// Rules are evaluated in a fixed order (exact, edit distance, substring,
/// word overlap) and the first that fires is reported.
pub fn classify_match(candidate: &str, existing: &str, max_distance: usize) -> Option<MatchRule> {
    let candidate = normalize_name(candidate);
    if candidate.is_empty() {
        return None;
    }
    classify_normalized(&candidate, &normalize_name(existing), max_distance)
}

fn classify_normalized(
    candidate: &str,
    existing: &str,
    max_distance: usize,
) -> Option<MatchRule> {
    if candidate == existing {
        return Some(MatchRule::Exact);
    }

    if candidate.len() > SHORT_NAME_LEN {
        if levenshtein(candidate, existing) <= max_distance {
            return Some(MatchRule::EditDistance);
        }
        if candidate.contains(existing) || existing.contains(candidate) {
            return Some(MatchRule::Substring);
        }
    }

    if word_overlap(candidate, existing) {
        return Some(MatchRule::WordOverlap);
    }

    None
}

/// Word-overlap rule over normalized names.
///
/// Words of length <= 2 are dropped; both remaining sets must be non-empty.
/// The smaller set (by word count; the candidate side on ties) must have
/// every word contain, or be contained by, some word of the larger set.
fn word_overlap(candidate: &str, existing: &str) -> bool {
    let candidate_words: HashSet<&str> = significant_words(candidate);
    let existing_words: HashSet<&str> = significant_words(existing);

    if candidate_words.is_empty() || existing_words.is_empty() {
        return false;
    }

    let (smaller, larger) = if candidate_words.len() <= existing_words.len() {
        (&candidate_words, &existing_words)
    } else {
        (&existing_words, &candidate_words)
    };

    smaller
        .iter()
        .all(|s| larger.iter().any(|l| s.contains(l) || l.contains(s)))
}

fn significant_words(name: &str) -> HashSet<&str> {
    name.split_whitespace()
        .filter(|w| w.len() > SHORT_WORD_LEN)
        .collect()
}
