// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-length owned store that is rebuilt on every size change.
//!
//! A `FixedSeq` never carries spare capacity: `len()` is the number of slots
//! that exist. Growing or shrinking allocates a fresh store of the new size and
//! moves the surviving elements across, so every structural change is O(n).
//! Slots can still be rewritten in place (sorting, sign flips) because that
//! does not change the length.
//!
//! # INVARIANTS
//!
//! 1. **EXACT_LENGTH**: the backing store holds exactly `len()` initialized slots
//! 2. **WHOLESALE_REPLACEMENT**: push/insert/remove/retain/replace install a new store
//! 3. **NO_ALIASING**: `clone()` and `to_vec()` produce independent storage

use std::ops::Deref;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contracts::check_length_delta;

/// A fixed-capacity sequence: exact length, reallocated on every resize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixedSeq<T> {
    slots: Box<[T]>,
}

impl<T> Default for FixedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FixedSeq<T> {
    /// Empty sequence (length 0, no allocation).
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of the existing slots. The length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }

    /// Append `value` by rebuilding the store at `len + 1`.
    pub fn push(&mut self, value: T) {
        let old = self.take_slots();
        let old_len = old.len();

        let mut fresh = Vec::with_capacity(old_len + 1);
        fresh.extend(old.into_vec());
        fresh.push(value);

        self.install(fresh, old_len, 1);
    }

    /// Insert `value` so that it ends up at `index`, shifting later slots right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len(),
            "insert index {} out of bounds for length {}",
            index,
            self.len()
        );
        let old = self.take_slots();
        let old_len = old.len();

        let mut fresh = Vec::with_capacity(old_len + 1);
        let mut survivors = old.into_vec().into_iter();
        fresh.extend(survivors.by_ref().take(index));
        fresh.push(value);
        fresh.extend(survivors);

        self.install(fresh, old_len, 1);
    }

    /// Remove the slot at `index`, shifting later slots left.
    ///
    /// Returns `None` and leaves the store untouched if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let old = self.take_slots();
        let old_len = old.len();

        let mut fresh = Vec::with_capacity(old_len - 1);
        let mut removed = None;
        for (i, value) in old.into_vec().into_iter().enumerate() {
            if i == index {
                removed = Some(value);
            } else {
                fresh.push(value);
            }
        }

        self.install(fresh, old_len, -1);
        removed
    }

    /// Keep only the slots for which `keep` returns true, preserving order.
    ///
    /// `keep` runs exactly once per slot, in order. Survivors are decided
    /// first so the new store is allocated at its final size. Returns the
    /// number of slots dropped. Nothing is reallocated when every slot
    /// survives.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mask: Vec<bool> = self.slots.iter().map(&mut keep).collect();
        let survivors = mask.iter().filter(|&&kept| kept).count();
        let dropped = self.len() - survivors;
        if dropped == 0 {
            return 0;
        }

        let old = self.take_slots();
        let old_len = old.len();

        let mut fresh = Vec::with_capacity(survivors);
        fresh.extend(
            old.into_vec()
                .into_iter()
                .zip(mask)
                .filter_map(|(value, kept)| kept.then_some(value)),
        );

        self.install(fresh, old_len, -(dropped as isize));
        dropped
    }

    /// Replace the whole content with the items of `values`.
    pub fn replace_with<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let old_len = self.len();
        let fresh: Vec<T> = values.into_iter().collect();
        let new_len = fresh.len();
        self.slots = fresh.into_boxed_slice();
        trace!("fixed store replaced: {} -> {} slots", old_len, new_len);
    }

    fn take_slots(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.slots)
    }

    fn install(&mut self, fresh: Vec<T>, old_len: usize, delta: isize) {
        // into_boxed_slice sheds any spare capacity so the store stays exact
        self.slots = fresh.into_boxed_slice();
        check_length_delta(old_len, self.slots.len(), delta);
        trace!(
            "fixed store reallocated: {} -> {} slots",
            old_len,
            self.slots.len()
        );
    }
}

impl<T: Clone> FixedSeq<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.slots.to_vec()
    }
}

impl<T> Deref for FixedSeq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> AsRef<[T]> for FixedSeq<T> {
    fn as_ref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> From<Vec<T>> for FixedSeq<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_boxed_slice(),
        }
    }
}

impl<T: Clone> From<&[T]> for FixedSeq<T> {
    fn from(values: &[T]) -> Self {
        Self {
            slots: values.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSeq<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            slots: Box::new(values),
        }
    }
}

impl<T> FromIterator<T> for FixedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.replace_with(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a FixedSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<T> IntoIterator for FixedSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_vec().into_iter()
    }
}
