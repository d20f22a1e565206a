//! Runtime contracts for the sandbox invariants.
//!
//! Every check here is a `debug_assert!`: it costs nothing in release builds
//! and fails fast in tests and debug runs. The sandboxes call them right after
//! the mutation that is supposed to establish the property.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                      | Established by                               |
//! |-------------------------------|----------------------------------------------|
//! | `check_length_delta`          | every fixed-store reallocation               |
//! | `check_sorted_ascending`      | fixed integer sort, fixed/dynamic text sort  |
//! | `check_sorted_descending`     | dynamic integer sort                         |
//! | `check_non_negative`          | sign normalization                           |
//! | `check_histogram_total`       | histogram construction                       |
//! | `check_reversal_pair`         | map insertion                                |
//! | `check_within_range`          | regeneration                                 |

use crate::types::{Histogram, IntRange};
use crate::utils::reverse_chars;

// ============================================================================
// STRUCTURAL CONTRACTS
// ============================================================================

/// Check that a structural change moved the length by exactly `delta`.
#[inline]
pub fn check_length_delta(old_len: usize, new_len: usize, delta: isize) {
    debug_assert!(
        old_len as isize + delta == new_len as isize,
        "Contract violation: length went from {} to {}, expected change of {}",
        old_len,
        new_len,
        delta
    );
}

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that a slice is in non-decreasing order.
#[inline]
pub fn check_sorted_ascending<T: Ord + std::fmt::Debug>(items: &[T]) {
    for i in 1..items.len() {
        debug_assert!(
            items[i - 1] <= items[i],
            "Contract violation: ascending order broken at {}: {:?} > {:?}",
            i,
            items[i - 1],
            items[i]
        );
    }
}

/// Check that a slice is in non-increasing order.
#[inline]
pub fn check_sorted_descending<T: Ord + std::fmt::Debug>(items: &[T]) {
    for i in 1..items.len() {
        debug_assert!(
            items[i - 1] >= items[i],
            "Contract violation: descending order broken at {}: {:?} < {:?}",
            i,
            items[i - 1],
            items[i]
        );
    }
}

// ============================================================================
// VALUE CONTRACTS
// ============================================================================

/// Check that no element is negative.
///
/// `i32::MIN` has no additive inverse, so sign normalization saturates it to
/// `i32::MAX`; this check covers that case too.
#[inline]
pub fn check_non_negative(values: &[i32]) {
    let first_negative = values.iter().position(|&value| value < 0);
    debug_assert!(
        first_negative.is_none(),
        "Contract violation: negative value at {:?} after normalization",
        first_negative
    );
}

/// Check that histogram counts add up to the sequence length.
#[inline]
pub fn check_histogram_total(histogram: &Histogram, len: usize) {
    let total: usize = histogram.values().sum();
    debug_assert!(
        total == len,
        "Contract violation: histogram counts sum to {} but sequence has {} elements",
        total,
        len
    );
    debug_assert!(
        histogram.values().all(|&count| count > 0),
        "Contract violation: histogram holds an entry with zero occurrences"
    );
}

/// Check that every regenerated value falls inside the sampling range.
#[inline]
pub fn check_within_range(values: &[i32], range: IntRange) {
    for (i, &value) in values.iter().enumerate() {
        debug_assert!(
            range.contains(value),
            "Contract violation: value {} at {} outside [{}, {}]",
            value,
            i,
            range.min,
            range.max
        );
    }
}

/// Check that `key` is the character reversal of `value`.
#[inline]
pub fn check_reversal_pair(key: &str, value: &str) {
    debug_assert!(
        reverse_chars(value) == key,
        "Contract violation: key '{}' is not the reversal of '{}'",
        key,
        value
    );
}
