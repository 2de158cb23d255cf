//! Frequency ranking.
//!
//! Counts occurrences and orders keys by descending count. Ties keep the
//! order in which keys were first encountered, so repeated runs over the
//! same input always agree.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A key with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Rank every distinct key, most frequent first.
pub fn rank_all<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    // key -> (count, first position)
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (position, key) in items.into_iter().enumerate() {
        counts.entry(key).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(key, (count, first))| (key, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(key, count, _)| (key, count))
        .collect()
}

/// The `n` most frequent keys, ties broken by first-encountered order.
pub fn top_n<K, I>(items: I, n: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut ranked = rank_all(items);
    ranked.truncate(n);
    ranked
}

/// [`top_n`] over string-like keys, producing owned entries.
pub fn top_n_entries<'a, I>(items: I, n: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    top_n(items, n)
        .into_iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ties_follow_first_encounter() {
        let ranked = top_n(["a", "c", "b", "a", "b"], 2);
        assert_eq!(ranked, vec![("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_tie_order_depends_on_first_sighting_not_last() {
        let ranked = rank_all(["b", "a", "a", "b", "c"]);
        assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_descending_counts() {
        let ranked = rank_all(["x", "y", "y", "z", "z", "z"]);
        assert_eq!(ranked, vec![("z", 3), ("y", 2), ("x", 1)]);
    }

    #[test]
    fn test_n_larger_than_distinct() {
        let ranked = top_n(["only"], 15);
        assert_eq!(ranked, vec![("only", 1)]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = top_n(Vec::<&str>::new(), 15);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_top_n_entries() {
        let entries = top_n_entries(["/a", "/b", "/a"], 15);
        assert_eq!(
            entries,
            vec![RankedEntry::new("/a", 2), RankedEntry::new("/b", 1)]
        );
    }

    proptest! {
        #[test]
        fn prop_ranking_is_idempotent(keys in prop::collection::vec("[a-e]", 0..50), n in 1usize..8) {
            let first = top_n(keys.iter().map(String::as_str), n);
            let second = top_n(keys.iter().map(String::as_str), n);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_full_ranking_preserves_total(keys in prop::collection::vec("[a-e]", 0..50)) {
            let ranked = rank_all(keys.iter().map(String::as_str));
            let total: usize = ranked.iter().map(|(_, c)| c).sum();
            prop_assert_eq!(total, keys.len());
            prop_assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        }

        #[test]
        fn prop_equal_counts_keep_first_seen_order(keys in prop::collection::vec("[a-e]", 1..50)) {
            let ranked = rank_all(keys.iter().map(String::as_str));
            let first_seen = |k: &str| keys.iter().position(|x| x == k).unwrap();
            for pair in ranked.windows(2) {
                if pair[0].1 == pair[1].1 {
                    prop_assert!(first_seen(pair[0].0) < first_seen(pair[1].0));
                }
            }
        }
    }
}
