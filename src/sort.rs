use crate::dedup::{frequency_map, Strategy};
use anyhow::anyhow;
use itertools::Itertools;
use std::cmp::Reverse;
use std::hash::Hash;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    Last,
    First,
    Frequency,
}

impl Order {
    pub fn apply<T>(self, history: &[T], strategy: Strategy) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        match self {
            Order::Last => strategy.apply(history),
            Order::First => history.iter().cloned().unique().collect(),
            Order::Frequency => by_frequency(history, strategy),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::Last
    }
}

impl FromStr for Order {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(Order::Last),
            "first" => Ok(Order::First),
            "frequency" => Ok(Order::Frequency),
            _ => Err(anyhow!(
                "unknown order `{}` (available: last, first, frequency)",
                s
            )),
        }
    }
}

/// Most used first. Ties go to the entry whose last occurrence is later.
pub fn by_frequency<T>(history: &[T], strategy: Strategy) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let freq_map = frequency_map(history);
    let mut commands = strategy.apply(history);
    commands.reverse();
    // stable, so equal counts stay newest first
    commands.sort_by_key(|c| Reverse(freq_map[c]));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn frequency() {
        let vec = vec![3, 2, 4, 6, 2, 4, 3, 3, 4, 5, 6, 3, 2, 4, 5, 5, 3];
        let sorted_vec = by_frequency(&vec, Strategy::ReverseScan);
        assert_eq!(sorted_vec, [3, 4, 5, 2, 6]);
    }

    #[rstest(
        order,
        expected,
        case(Order::Last, vec![1, 4, 5, 3, 2]),
        case(Order::First, vec![1, 2, 3, 4, 5]),
        case(Order::Frequency, vec![3, 2, 1, 5, 4])
    )]
    fn apply(order: Order, expected: Vec<i32>) {
        let history = vec![1, 2, 3, 1, 3, 4, 5, 3, 2];
        assert_eq!(order.apply(&history, Strategy::ReverseScan), expected);
        assert_eq!(order.apply(&history, Strategy::Counted), expected);
    }

    #[rstest(
        name,
        expected,
        case("last", Order::Last),
        case("first", Order::First),
        case("frequency", Order::Frequency)
    )]
    fn order_from_str(name: &str, expected: Order) {
        assert_eq!(name.parse::<Order>().unwrap(), expected);
    }

    #[test]
    fn order_from_str_rejects_unknown() {
        assert!("recent".parse::<Order>().is_err());
    }
}
