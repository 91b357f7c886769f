//! Duplicate detection for packing-list items
//!
//! The item-creation flow calls [`find_potential_duplicates`] with a proposed
//! name and the list's current items; list cleanup calls
//! [`group_similar_items`] for batch review. All operations are deterministic
//! pure functions over caller-supplied collections — nothing here allocates
//! shared state or mutates its inputs.

mod distance;
mod grouping;
mod matching;
mod normalization;
mod similarity;

pub use distance::levenshtein;
pub use grouping::{group_similar_items, DEFAULT_GROUPING_THRESHOLD};
pub use matching::{
    classify_match, find_potential_duplicates, MatchRule, DEFAULT_EDIT_DISTANCE,
};
pub use normalization::normalize_name;
pub use similarity::similarity_score;

use packmate_domain::PackingItem;

/// Minimal view of an item the deduplication routines read.
///
/// Keeps the library decoupled from the full application item shape; anything
/// with an identifier and a display name can be matched and grouped.
pub trait SimilarityTarget {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl SimilarityTarget for PackingItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DeduplicationError {
    #[error("similarity threshold must be within [0.0, 1.0], got {0}")]
    ThresholdOutOfRange(f64),
}
