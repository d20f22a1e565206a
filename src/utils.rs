//! Slice-level helpers shared by the sequence sandboxes and the map.
//!
//! Nothing in here allocates a container that outlives the call except the
//! returned query results.

use crate::types::{Histogram, IntRange};

/// Reverse a string by `char`, not by byte.
///
/// "cat" → "tac", "añb" → "bña".
pub fn reverse_chars(value: &str) -> String {
    value.chars().rev().collect()
}

/// Convert a decimal to an integer by truncating toward zero.
///
/// 3.67 → 3, -3.67 → -3. Values outside the `i32` range saturate and NaN maps
/// to 0, which is what an `as` cast does.
pub fn truncate_toward_zero(value: f64) -> i32 {
    value as i32
}

/// Case-insensitive substring test.
///
/// `needle_lower` must already be lower-cased so callers scanning a whole
/// sequence fold it only once.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Count elements containing `needle`, ignoring case.
pub fn count_containing_ignore_case<S: AsRef<str>>(items: &[S], needle: &str) -> usize {
    let needle_lower = needle.to_lowercase();
    items
        .iter()
        .filter(|item| contains_ignore_case(item.as_ref(), &needle_lower))
        .count()
}

/// Build a value → count histogram.
pub fn histogram_of(values: &[i32]) -> Histogram {
    let mut histogram = Histogram::new();
    for &value in values {
        *histogram.entry(value).or_insert(0) += 1;
    }
    histogram
}

/// Number of distinct values appearing more than once.
pub fn count_repeated(values: &[i32]) -> usize {
    histogram_of(values)
        .values()
        .filter(|&&count| count > 1)
        .count()
}

/// Minimum and maximum, seeded from the first element.
pub fn range_of(values: &[i32]) -> Option<IntRange> {
    let (&first, rest) = values.split_first()?;
    let mut range = IntRange::single(first);
    for &value in rest {
        range.include(value);
    }
    Some(range)
}

/// Indices of every element equal to `target`, in ascending order.
pub fn positions_of(values: &[i32], target: i32) -> impl Iterator<Item = usize> + '_ {
    values
        .iter()
        .enumerate()
        .filter(move |&(_, &value)| value == target)
        .map(|(index, _)| index)
}

/// Selection sort, ascending.
///
/// Quadratic, but it never moves an element more than once per pass and needs
/// no scratch space.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }
        items.swap(i, min_index);
    }
}

/// Insertion sort, ascending. Stable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
