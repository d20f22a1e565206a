//! Dynamic-sequence sandbox: the fixed-array operations over growable vectors.
//!
//! The external contracts match [`FixedArraySandbox`](crate::FixedArraySandbox)
//! with one deliberate exception: `sort_integers` orders **descending**
//! here, while the fixed sandbox sorts ascending. Callers comparing the two
//! sandboxes must account for it.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DESCENDING_SORT**: `sort_integers` leaves the integers largest first
//! 2. **CLAMPED_INSERT**: `insert_integer` always grows the sequence by exactly one
//! 3. **COPIES_ARE_OWNED**: every copy accessor returns fresh storage

use std::fmt::Display;

use log::debug;

use crate::contracts::{
    check_histogram_total, check_length_delta, check_non_negative, check_sorted_ascending,
    check_sorted_descending, check_within_range,
};
use crate::error::SandboxError;
use crate::fixed::FixedSeq;
use crate::types::{Histogram, IntRange};
use crate::utils::{
    count_containing_ignore_case, count_repeated, histogram_of, positions_of, range_of,
    truncate_toward_zero,
};

/// Integer and text sequences backed by `Vec`.
#[derive(Debug, Clone)]
pub struct DynamicSandbox {
    integers: Vec<i32>,
    texts: Vec<String>,
    rng: fastrand::Rng,
}

impl Default for DynamicSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicSandbox {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            integers: Vec::new(),
            texts: Vec::new(),
            rng,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn integers_copy(&self) -> Vec<i32> {
        self.integers.clone()
    }

    pub fn texts_copy(&self) -> Vec<String> {
        self.texts.clone()
    }

    /// The integers as an independent exact-length array.
    pub fn integers_as_array(&self) -> FixedSeq<i32> {
        FixedSeq::from(self.integers.as_slice())
    }

    pub fn integers(&self) -> &[i32] {
        &self.integers
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn integer_count(&self) -> usize {
        self.integers.len()
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    // ========================================================================
    // STRUCTURAL MUTATIONS
    // ========================================================================

    pub fn append_integer(&mut self, value: i32) {
        self.integers.push(value);
    }

    pub fn append_text(&mut self, value: impl Into<String>) {
        self.texts.push(value.into());
    }

    /// Remove every occurrence of `value`, keeping the order of the rest.
    pub fn remove_integer(&mut self, value: i32) {
        self.integers.retain(|&item| item != value);
    }

    /// Remove every text equal to `value`.
    pub fn remove_text(&mut self, value: &str) {
        self.texts.retain(|item| item != value);
    }

    /// Insert `value` at `position`: negative goes to the front, at or past the
    /// end goes to the back.
    pub fn insert_integer(&mut self, value: i32, position: isize) {
        let old_len = self.integers.len();
        let index = usize::try_from(position).map_or(0, |index| index.min(old_len));
        self.integers.insert(index, value);
        check_length_delta(old_len, self.integers.len(), 1);
    }

    /// Remove the integer at `position`; out-of-range positions are ignored.
    pub fn remove_integer_at(&mut self, position: isize) {
        match usize::try_from(position) {
            Ok(index) if index < self.integers.len() => {
                self.integers.remove(index);
            }
            _ => {}
        }
    }

    /// Replace the integers with `values` truncated toward zero.
    pub fn reset_integers(&mut self, values: &[f64]) {
        self.integers = values
            .iter()
            .map(|&value| truncate_toward_zero(value))
            .collect();
        debug!("dynamic integers reset to {} values", self.integers.len());
    }

    /// Replace the texts with the `Display` form of each object.
    pub fn reset_texts<I>(&mut self, objects: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.texts = objects.into_iter().map(|object| object.to_string()).collect();
        debug!("dynamic texts reset to {} values", self.texts.len());
    }

    /// Replace the integers with `count` samples uniform over `[min, max]`.
    pub fn regenerate(&mut self, count: usize, min: i32, max: i32) -> Result<(), SandboxError> {
        if min > max {
            return Err(SandboxError::EmptyRange { min, max });
        }
        let rng = &mut self.rng;
        self.integers = (0..count).map(|_| rng.i32(min..=max)).collect();
        check_within_range(&self.integers, IntRange { min, max });
        debug!("dynamic integers regenerated: {} values in [{}, {}]", count, min, max);
        Ok(())
    }

    // ========================================================================
    // IN-PLACE MUTATIONS
    // ========================================================================

    /// Replace every negative integer with its additive inverse.
    ///
    /// `i32::MIN` saturates to `i32::MAX`.
    pub fn make_positive(&mut self) {
        for value in &mut self.integers {
            *value = value.saturating_abs();
        }
        check_non_negative(&self.integers);
    }

    /// Sort the integers **descending**.
    pub fn sort_integers(&mut self) {
        self.integers.sort_unstable_by(|a, b| b.cmp(a));
        check_sorted_descending(self.integers.as_slice());
    }

    /// Sort the texts in code-point order.
    pub fn sort_texts(&mut self) {
        self.texts.sort();
        check_sorted_ascending(self.texts.as_slice());
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// How many integers equal `value`.
    pub fn count_integer(&self, value: i32) -> usize {
        self.integers.iter().filter(|&&item| item == value).count()
    }

    /// How many texts contain `value`, ignoring case.
    pub fn count_text(&self, value: &str) -> usize {
        count_containing_ignore_case(self.texts.as_slice(), value)
    }

    /// Every index holding `value`, ascending. Empty if there is none.
    pub fn find_integer(&self, value: i32) -> Vec<usize> {
        positions_of(&self.integers, value).collect()
    }

    /// Minimum and maximum, or `None` when there are no integers.
    pub fn integer_range(&self) -> Option<IntRange> {
        range_of(&self.integers)
    }

    /// Value → occurrence count over the integers.
    pub fn histogram(&self) -> Histogram {
        let histogram = histogram_of(&self.integers);
        check_histogram_total(&histogram, self.integers.len());
        histogram
    }

    /// Number of distinct integers that appear more than once.
    pub fn count_repeated_integers(&self) -> usize {
        count_repeated(&self.integers)
    }

    /// Positional comparison against an external array.
    pub fn equals_ordered(&self, other: &[i32]) -> bool {
        self.integers.as_slice() == other
    }

    /// Same values with the same multiplicities, in any order.
    pub fn same_integers(&self, other: &[i32]) -> bool {
        if self.integers.len() != other.len() {
            return false;
        }
        let mut ours = self.integers.clone();
        let mut theirs = other.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}
