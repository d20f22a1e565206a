//! Value types returned by sandbox queries.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Occurrence count per distinct integer value.
///
/// Ordered by value so that iteration is deterministic. Values that do not
/// occur have no entry.
pub type Histogram = BTreeMap<i32, usize>;

/// Minimum and maximum of a non-empty integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    /// Range covering a single value.
    pub fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range to include `value`.
    pub fn include(&mut self, value: i32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// `[min, max]` as a two-element array.
    pub fn to_array(self) -> [i32; 2] {
        [self.min, self.max]
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}
