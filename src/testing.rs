//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::dynamic::DynamicSandbox;
use crate::fixed::FixedArraySandbox;
use crate::reversal_map::ReversalMap;

/// Seed used by every fixture so regeneration is reproducible.
pub const FIXTURE_SEED: u64 = 0x5eed_cafe;

/// Fixed sandbox holding `integers` and `texts`, appended in order.
pub fn fixed_with(integers: &[i32], texts: &[&str]) -> FixedArraySandbox {
    let mut sandbox = FixedArraySandbox::with_seed(FIXTURE_SEED);
    for &value in integers {
        sandbox.append_integer(value);
    }
    for &text in texts {
        sandbox.append_text(text);
    }
    sandbox
}

/// Dynamic sandbox holding `integers` and `texts`, appended in order.
pub fn dynamic_with(integers: &[i32], texts: &[&str]) -> DynamicSandbox {
    let mut sandbox = DynamicSandbox::with_seed(FIXTURE_SEED);
    for &value in integers {
        sandbox.append_integer(value);
    }
    for &text in texts {
        sandbox.append_text(text);
    }
    sandbox
}

/// Map built through the reversal-preserving insertion path.
pub fn map_with(values: &[&str]) -> ReversalMap {
    let mut map = ReversalMap::new();
    for &value in values {
        map.insert(value);
    }
    map
}
