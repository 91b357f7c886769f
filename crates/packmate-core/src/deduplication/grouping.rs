//! Greedy clustering of similar items for list cleanup

use std::collections::HashSet;

use super::normalization::normalize_name;
use super::similarity::score_normalized;
use super::{DeduplicationError, SimilarityTarget};

/// Default similarity threshold for [`group_similar_items`].
pub const DEFAULT_GROUPING_THRESHOLD: f64 = 0.7;

/// Partition `items` into groups of similar names.
///
/// Greedy single pass in input order: each unprocessed item opens a group and
/// pulls in every later unprocessed item whose similarity score reaches
/// `threshold`. Groups of one are dropped — a singleton is not similar to
/// anything. Membership and ordering are fully determined by input order and
/// pairwise scores.
///
/// `threshold` outside `[0, 1]` (including NaN) is a caller bug and returns
/// [`DeduplicationError::ThresholdOutOfRange`].
pub fn group_similar_items<T: SimilarityTarget>(
    items: &[T],
    threshold: f64,
) -> Result<Vec<Vec<&T>>, DeduplicationError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(DeduplicationError::ThresholdOutOfRange(threshold));
    }

    // Normalized once per call; every pair comparison reuses these.
    let normalized: Vec<String> = items.iter().map(|i| normalize_name(i.name())).collect();

    let mut processed: HashSet<&str> = HashSet::new();
    let mut groups: Vec<Vec<&T>> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        if processed.contains(item.id()) {
            continue;
        }
        processed.insert(item.id());

        let mut group = vec![item];
        for (j, other) in items.iter().enumerate().skip(i + 1) {
            if processed.contains(other.id()) {
                continue;
            }
            if score_normalized(&normalized[i], &normalized[j]) >= threshold {
                group.push(other);
                processed.insert(other.id());
            }
        }

        if group.len() > 1 {
            groups.push(group);
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packmate_domain::PackingItem;

    fn items(names: &[&str]) -> Vec<PackingItem> {
        names.iter().map(|n| PackingItem::new(n)).collect()
    }

    #[test]
    fn groups_identical_variants() {
        let items = items(&["T-shirt", "T-Shirt", "Sunscreen"]);
        let groups = group_similar_items(&items, DEFAULT_GROUPING_THRESHOLD).unwrap();
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["T-shirt", "T-Shirt"]);
    }

    #[test]
    fn empty_and_singleton_lists() {
        let none: Vec<PackingItem> = Vec::new();
        assert!(group_similar_items(&none, 0.7).unwrap().is_empty());

        let one = items(&["Tent"]);
        assert!(group_similar_items(&one, 0.7).unwrap().is_empty());
    }

    #[test]
    fn dissimilar_items_yield_no_groups() {
        let items = items(&["Tent", "Sunscreen", "Passport"]);
        assert!(group_similar_items(&items, 0.7).unwrap().is_empty());
    }

    #[test]
    fn grouping_is_deterministic() {
        let items = items(&["Wool Socks", "Wool Sock", "Sunscreen", "Wool Socks (2)"]);
        let first = group_similar_items(&items, 0.7).unwrap();
        let second = group_similar_items(&items, 0.7).unwrap();
        let names =
            |gs: &Vec<Vec<&PackingItem>>| -> Vec<Vec<String>> {
                gs.iter()
                    .map(|g| g.iter().map(|i| i.name.clone()).collect())
                    .collect()
            };
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].len(), 3);
    }

    #[test]
    fn threshold_validation() {
        let items = items(&["Tent", "Tent"]);
        assert_eq!(
            group_similar_items(&items, 1.5),
            Err(DeduplicationError::ThresholdOutOfRange(1.5))
        );
        assert_eq!(
            group_similar_items(&items, -0.1),
            Err(DeduplicationError::ThresholdOutOfRange(-0.1))
        );
        assert!(group_similar_items(&items, f64::NAN).is_err());
    }

    #[test]
    fn boundary_thresholds_accepted() {
        let items = items(&["Tent", "Tarp"]);
        // 0.0 groups everything together
        let all = group_similar_items(&items, 0.0).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].len(), 2);
        // 1.0 only groups normalized-identical names
        assert!(group_similar_items(&items, 1.0).unwrap().is_empty());
    }
}
