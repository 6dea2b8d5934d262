//! Deduplication that keeps each value at its *last* occurrence.
//!
//! Given `[1, 2, 3, 1, 3, 4, 5, 3, 2]` the result is `[1, 4, 5, 3, 2]`: every
//! distinct value appears once, and the output order is the order in which
//! the values make their final appearance in the input.

use anyhow::anyhow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::str::FromStr;

/// Deduplicate `items`, keeping every value at its last occurrence.
pub fn dedupe_keep_last<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    keep_last_reverse_scan(items)
}

/// Single backward pass. Unseen values are pushed while walking from the
/// back and the result is reversed once at the end.
pub fn keep_last_reverse_scan<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut result = Vec::new();
    for item in items.iter().rev() {
        if seen.insert(item) {
            result.push(item.to_owned());
        }
    }
    result.reverse();
    result
}

/// Two forward passes: count every value, then emit a value once its running
/// count reaches the total.
pub fn keep_last_counted<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let totals = frequency_map(items);
    let mut running: HashMap<&T, usize> = HashMap::with_capacity(totals.len());
    let mut result = Vec::with_capacity(totals.len());
    for item in items {
        let count = running.entry(item).or_insert(0);
        *count += 1;
        if *count == totals[item] {
            result.push(item.to_owned());
        }
    }
    result
}

pub(crate) fn frequency_map<T>(items: &[T]) -> HashMap<&T, usize>
where
    T: Eq + Hash,
{
    let mut map = HashMap::new();
    items.iter().for_each(|item| {
        *map.entry(item).or_insert(0) += 1;
    });
    map
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    ReverseScan,
    Counted,
}

impl Strategy {
    pub fn apply<T>(self, items: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        match self {
            Strategy::ReverseScan => keep_last_reverse_scan(items),
            Strategy::Counted => keep_last_counted(items),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::ReverseScan
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse-scan" => Ok(Strategy::ReverseScan),
            "counted" => Ok(Strategy::Counted),
            _ => Err(anyhow!(
                "unknown strategy `{}` (available: reverse-scan, counted)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop, prop_assert, prop_assert_eq, proptest};
    use rstest::rstest;

    fn last_index<T: PartialEq>(items: &[T], value: &T) -> usize {
        items.iter().rposition(|x| x == value).unwrap()
    }

    #[rstest(
        input,
        expected,
        case(vec![1, 2, 3, 1, 3, 4, 5, 3, 2], vec![1, 4, 5, 3, 2]),
        case(vec![], vec![]),
        case(vec![5, 3, 1], vec![5, 3, 1]),
        case(vec![7, 7, 7], vec![7]),
        case(vec![1, 2, 1, 2], vec![1, 2]),
        case(vec![2, 1, 2, 1, 3], vec![2, 1, 3])
    )]
    fn keeps_last_occurrence(input: Vec<i32>, expected: Vec<i32>) {
        assert_eq!(keep_last_reverse_scan(&input), expected);
        assert_eq!(keep_last_counted(&input), expected);
        assert_eq!(dedupe_keep_last(&input), expected);
    }

    #[test]
    fn history_lines() {
        let history = vec!["ls", "cd /tmp", "ls", "make", "cd /tmp"];
        assert_eq!(dedupe_keep_last(&history), ["ls", "make", "cd /tmp"]);
    }

    #[rstest(
        name,
        expected,
        case("reverse-scan", Strategy::ReverseScan),
        case("counted", Strategy::Counted)
    )]
    fn strategy_from_str(name: &str, expected: Strategy) {
        assert_eq!(name.parse::<Strategy>().unwrap(), expected);
    }

    #[test]
    fn strategy_from_str_rejects_unknown() {
        assert!("deque".parse::<Strategy>().is_err());
    }

    proptest! {
        #[test]
        fn strategies_agree(items in prop::collection::vec(0u8..16, 0..64)) {
            prop_assert_eq!(keep_last_reverse_scan(&items), keep_last_counted(&items));
        }

        #[test]
        fn strategies_agree_on_strings(items in prop::collection::vec("[a-c]{0,2}", 0..32)) {
            prop_assert_eq!(
                Strategy::ReverseScan.apply(&items),
                Strategy::Counted.apply(&items)
            );
        }

        #[test]
        fn one_entry_per_distinct_value(items in prop::collection::vec(0u8..16, 0..64)) {
            let distinct: HashSet<_> = items.iter().collect();
            prop_assert_eq!(dedupe_keep_last(&items).len(), distinct.len());
        }

        #[test]
        fn ordered_by_last_index(items in prop::collection::vec(0u8..16, 0..64)) {
            let result = dedupe_keep_last(&items);
            for pair in result.windows(2) {
                prop_assert!(last_index(&items, &pair[0]) < last_index(&items, &pair[1]));
            }
        }

        #[test]
        fn idempotent(items in prop::collection::vec(0u8..16, 0..64)) {
            let once = dedupe_keep_last(&items);
            prop_assert_eq!(dedupe_keep_last(&once), once);
        }

        #[test]
        fn unchanged_without_duplicates(items in prop::collection::hash_set(any::<u16>(), 0..32)) {
            let items: Vec<u16> = items.into_iter().collect();
            prop_assert_eq!(keep_last_reverse_scan(&items), items.clone());
            prop_assert_eq!(keep_last_counted(&items), items);
        }
    }
}
