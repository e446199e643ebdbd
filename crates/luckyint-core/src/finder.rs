//! Largest lucky integer search.
//!
//! A value `v` is lucky when it occurs in the input exactly `v` times. Counts
//! are never negative and a value that is present has a count of at least one,
//! so only positive values can qualify.

use std::collections::BTreeMap;

/// Returned when the input holds no lucky integer.
pub const NO_LUCKY_INTEGER: i64 = -1;

/// Occurrence count of every distinct value in an input sequence.
///
/// Keys are ordered, so iteration and [`FrequencyTable::lucky_values`] are
/// deterministic regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<i64, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count occurrences of every value in `values`.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        let mut counts = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0usize) += 1;
        }
        Self {
            counts,
            total: values.len(),
        }
    }

    /// Number of times `value` occurred (0 if absent).
    #[must_use]
    pub fn count(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of values counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Every value whose count equals the value itself, ascending.
    #[must_use]
    pub fn lucky_values(&self) -> Vec<i64> {
        self.iter()
            .filter(|&(value, count)| is_lucky(value, count))
            .map(|(value, _)| value)
            .collect()
    }

    /// The largest lucky value, if any.
    #[must_use]
    pub fn largest_lucky(&self) -> Option<i64> {
        // Keys are ascending: walk from the top and stop at the first hit.
        self.iter()
            .rev()
            .find(|&(value, count)| is_lucky(value, count))
            .map(|(value, _)| value)
    }
}

fn is_lucky(value: i64, count: usize) -> bool {
    i64::try_from(count).is_ok_and(|count| count == value)
}

/// Stateless finder for the largest lucky integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuckyIntegerFinder;

impl LuckyIntegerFinder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The largest value that occurs exactly as many times as its value.
    #[must_use]
    pub fn find(&self, values: &[i64]) -> Option<i64> {
        FrequencyTable::from_values(values).largest_lucky()
    }

    /// Same as [`LuckyIntegerFinder::find`], with [`NO_LUCKY_INTEGER`] for none.
    #[must_use]
    pub fn find_or_sentinel(&self, values: &[i64]) -> i64 {
        self.find(values).unwrap_or(NO_LUCKY_INTEGER)
    }
}

/// Largest lucky integer in `values`, or `-1` when there is none.
#[must_use]
pub fn find_largest_lucky_integer(values: &[i64]) -> i64 {
    LuckyIntegerFinder::new().find_or_sentinel(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_sentinel() {
        assert_eq!(find_largest_lucky_integer(&[]), NO_LUCKY_INTEGER);
        assert_eq!(LuckyIntegerFinder::new().find(&[]), None);
    }

    #[test]
    fn single_pair_is_lucky() {
        assert_eq!(find_largest_lucky_integer(&[2, 2, 3, 4]), 2);
    }

    #[test]
    fn largest_of_several_lucky_values_wins() {
        assert_eq!(find_largest_lucky_integer(&[1, 2, 2, 3, 3, 3]), 3);
    }

    #[test]
    fn mismatched_counts_are_not_lucky() {
        assert_eq!(find_largest_lucky_integer(&[2, 2, 2, 3, 3]), -1);
    }

    #[test]
    fn lone_value_above_one_is_not_lucky() {
        assert_eq!(find_largest_lucky_integer(&[5]), -1);
    }

    #[test]
    fn lone_one_is_lucky() {
        assert_eq!(find_largest_lucky_integer(&[1]), 1);
        assert_eq!(find_largest_lucky_integer(&[7, 1, 9]), 1);
    }

    #[test]
    fn zero_and_negatives_never_qualify() {
        assert_eq!(find_largest_lucky_integer(&[0, 0, -1, -1, -1]), -1);
        assert_eq!(find_largest_lucky_integer(&[-2, -2]), -1);
        assert_eq!(find_largest_lucky_integer(&[0]), -1);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        assert_eq!(find_largest_lucky_integer(&[3, 1, 3, 2, 3, 2]), 3);
        assert_eq!(find_largest_lucky_integer(&[2, 3, 3, 3, 1, 2]), 3);
    }

    #[test]
    fn frequency_table_counts_each_value() {
        let table = FrequencyTable::from_values(&[4, -1, 4, 0, 4, 4]);
        assert_eq!(table.count(4), 4);
        assert_eq!(table.count(-1), 1);
        assert_eq!(table.count(0), 1);
        assert_eq!(table.count(9), 0);
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.total(), 6);
        assert!(!table.is_empty());
        assert_eq!(table.lucky_values(), vec![4]);
    }

    #[test]
    fn lucky_values_are_ascending() {
        let table = FrequencyTable::from_values(&[3, 2, 1, 3, 2, 3]);
        assert_eq!(table.lucky_values(), vec![1, 2, 3]);
        assert_eq!(table.largest_lucky(), Some(3));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let values = [i64::MAX, i64::MIN, i64::MIN, 1];
        assert_eq!(find_largest_lucky_integer(&values), 1);
    }

    #[test]
    fn repeated_calls_agree() {
        let finder = LuckyIntegerFinder::new();
        let values = [2, 2, 3, 3, 3, 4];
        let first = finder.find_or_sentinel(&values);
        let second = finder.find_or_sentinel(&values);
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }
}
