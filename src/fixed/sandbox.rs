// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-array sandbox: an integer and a text sequence with manual capacity.
//!
//! Every operation that changes a length goes through a [`FixedSeq`]
//! reallocation, so append is O(n) by construction and there is never an
//! unused slot. Queries read the slots directly.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NO_EMPTY_SLOTS**: both sequences hold only valid values at all times
//! 2. **COPIES_ARE_OWNED**: `integers_copy`/`texts_copy` never alias internal storage
//! 3. **ASCENDING_SORT**: `sort_integers` leaves the integers in ascending order
//! 4. **CLAMPED_INSERT**: `insert_integer` always grows the sequence by exactly one

use std::fmt::Display;

use log::debug;

use crate::contracts::{
    check_histogram_total, check_non_negative, check_sorted_ascending, check_within_range,
};
use crate::error::SandboxError;
use crate::fixed::FixedSeq;
use crate::types::{Histogram, IntRange};
use crate::utils::{
    count_containing_ignore_case, count_repeated, histogram_of, insertion_sort, positions_of,
    range_of, selection_sort, truncate_toward_zero,
};

/// Integer and text sequences backed by exact-length stores.
#[derive(Debug, Clone)]
pub struct FixedArraySandbox {
    integers: FixedSeq<i32>,
    texts: FixedSeq<String>,
    rng: fastrand::Rng,
}

impl Default for FixedArraySandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedArraySandbox {
    /// Both sequences empty; regeneration seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Both sequences empty; regeneration is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            integers: FixedSeq::new(),
            texts: FixedSeq::new(),
            rng,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Independent copy of the integer sequence.
    pub fn integers_copy(&self) -> FixedSeq<i32> {
        self.integers.clone()
    }

    /// Independent copy of the text sequence.
    pub fn texts_copy(&self) -> FixedSeq<String> {
        self.texts.clone()
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
    // STRUCTURAL MUTATIONS (each one reallocates)
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

    /// Remove every text equal to `value` (content equality, case-sensitive).
    pub fn remove_text(&mut self, value: &str) {
        self.texts.retain(|item| item != value);
    }

    /// Insert `value` at `position`, clamped into the sequence.
    ///
    /// A negative position inserts at the front; a position at or past the end
    /// appends.
    pub fn insert_integer(&mut self, value: i32, position: isize) {
        let len = self.integers.len();
        let index = if position < 0 {
            0
        } else {
            (position as usize).min(len)
        };
        self.integers.insert(index, value);
    }

    /// Remove the integer at `position`; out-of-range positions are ignored.
    pub fn remove_integer_at(&mut self, position: isize) {
        if let Ok(index) = usize::try_from(position) {
            self.integers.remove(index);
        }
    }

    /// Replace the integers with `values` truncated toward zero.
    pub fn reset_integers(&mut self, values: &[f64]) {
        self.integers
            .replace_with(values.iter().map(|&value| truncate_toward_zero(value)));
        debug!("fixed integers reset to {} values", self.integers.len());
    }

    /// Replace the texts with the `Display` form of each object.
    pub fn reset_texts<I>(&mut self, objects: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.texts
            .replace_with(objects.into_iter().map(|object| object.to_string()));
        debug!("fixed texts reset to {} values", self.texts.len());
    }

    /// Replace the integers with `count` samples uniform over `[min, max]`.
    ///
    /// Returns [`SandboxError::EmptyRange`] and leaves the sequence untouched
    /// when `min > max`.
    pub fn regenerate(&mut self, count: usize, min: i32, max: i32) -> Result<(), SandboxError> {
        if min > max {
            return Err(SandboxError::EmptyRange { min, max });
        }
        let rng = &mut self.rng;
        self.integers
            .replace_with((0..count).map(|_| rng.i32(min..=max)));
        check_within_range(&self.integers, IntRange { min, max });
        debug!("fixed integers regenerated: {} values in [{}, {}]", count, min, max);
        Ok(())
    }

    // ========================================================================
    // IN-PLACE MUTATIONS (length unchanged)
    // ========================================================================

    /// Replace every negative integer with its additive inverse.
    ///
    /// `i32::MIN` saturates to `i32::MAX`.
    pub fn make_positive(&mut self) {
        for value in self.integers.as_mut_slice() {
            if *value < 0 {
                *value = value.saturating_neg();
            }
        }
        check_non_negative(&self.integers);
    }

    /// Sort the integers ascending (selection sort).
    pub fn sort_integers(&mut self) {
        selection_sort(self.integers.as_mut_slice());
        check_sorted_ascending(self.integers.as_slice());
    }

    /// Sort the texts in code-point order (insertion sort).
    pub fn sort_texts(&mut self) {
        insertion_sort(self.texts.as_mut_slice());
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
    pub fn find_integer(&self, value: i32) -> FixedSeq<usize> {
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

    /// Same length and same value at every position.
    pub fn equals_ordered(&self, other: &[i32]) -> bool {
        self.integers.as_slice() == other
    }

    /// Same values with the same multiplicities, in any order.
    pub fn same_integers(&self, other: &[i32]) -> bool {
        if self.integers.len() != other.len() {
            return false;
        }
        let mut ours = self.integers.clone();
        let mut theirs = FixedSeq::from(other);
        selection_sort(ours.as_mut_slice());
        selection_sort(theirs.as_mut_slice());
        ours == theirs
    }
}
