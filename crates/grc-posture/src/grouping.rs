//! Generic group-by-and-count reduction
//!
//! The same shape recurs for risks by category, findings by source, and
//! controls by domain: bucket a flat list by a string key, then count how
//! many records in each bucket satisfy each named predicate. Factored out
//! once here instead of re-deriving it per entity.

use grc_common::domain_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate for one grouping key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub total: usize,
    /// Per-classifier counts, keyed by classifier name
    pub counts: BTreeMap<String, usize>,
}

/// Group `items` by `key_fn` and count classifier hits per group.
///
/// Empty keys collapse to the `"General"` sentinel. Output is ordered by
/// key, lexicographically ascending. Every classifier name appears in
/// every group's counts, zero-filled when nothing matched.
pub fn group_and_count<T>(
    items: &[T],
    key_fn: impl Fn(&T) -> String,
    classifiers: &[(&str, &dyn Fn(&T) -> bool)],
) -> Vec<GroupCount> {
    let mut groups: BTreeMap<String, GroupCount> = BTreeMap::new();

    for item in items {
        let key = domain_key(&key_fn(item));
        let group = groups.entry(key.clone()).or_insert_with(|| GroupCount {
            key,
            total: 0,
            counts: classifiers
                .iter()
                .map(|(name, _)| (name.to_string(), 0))
                .collect(),
        });
        group.total += 1;
        for (name, classifier) in classifiers {
            if classifier(item) {
                if let Some(count) = group.counts.get_mut(*name) {
                    *count += 1;
                }
            }
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_sorted_by_key() {
        let items = vec!["Security", "Security", "Legal"];
        let groups = group_and_count(&items, |s| s.to_string(), &[]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "Legal");
        assert_eq!(groups[0].total, 1);
        assert_eq!(groups[1].key, "Security");
        assert_eq!(groups[1].total, 2);
    }

    #[test]
    fn test_classifier_counts_zero_filled() {
        let items = vec![3u32, 7, 10];
        let groups = group_and_count(
            &items,
            |n| if *n < 5 { "small".into() } else { "big".into() },
            &[
                ("even", &|n: &u32| n % 2 == 0),
                ("huge", &|n: &u32| *n > 100),
            ],
        );

        assert_eq!(groups[0].key, "big");
        assert_eq!(groups[0].counts["even"], 1);
        assert_eq!(groups[0].counts["huge"], 0);
        assert_eq!(groups[1].key, "small");
        assert_eq!(groups[1].counts["even"], 0);
    }

    #[test]
    fn test_empty_key_maps_to_general() {
        let items = vec!["", "Ops"];
        let groups = group_and_count(&items, |s| s.to_string(), &[]);
        assert_eq!(groups[0].key, "General");
        assert_eq!(groups[1].key, "Ops");
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let items: Vec<&str> = Vec::new();
        assert!(group_and_count(&items, |s| s.to_string(), &[]).is_empty());
    }
}
