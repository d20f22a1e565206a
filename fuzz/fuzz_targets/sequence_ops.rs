// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target driving random operation sequences through both sequence
//! sandboxes.
//!
//! The fixed and dynamic sandboxes must hold identical integers after every
//! step. The one exception is the integer sort, which runs in opposite
//! directions, so after a sort the fixed side is compared against the reversed
//! dynamic side and then resynchronised.

#![no_main]

use arbitrary::Arbitrary;
use container_sandbox::{DynamicSandbox, FixedArraySandbox};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(i32),
    Insert(i32, i16),
    RemoveAt(i16),
    RemoveValue(i32),
    Reset(Vec<f64>),
    MakePositive,
    Sort,
    Regenerate(u8, i32, i32),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut fixed = FixedArraySandbox::with_seed(1);
    let mut dynamic = DynamicSandbox::with_seed(1);

    for op in ops {
        match op {
            Op::Append(value) => {
                let before = fixed.integer_count();
                fixed.append_integer(value);
                dynamic.append_integer(value);
                assert_eq!(fixed.integer_count(), before + 1);
            }
            Op::Insert(value, position) => {
                let before = fixed.integer_count();
                fixed.insert_integer(value, position as isize);
                dynamic.insert_integer(value, position as isize);
                assert_eq!(fixed.integer_count(), before + 1);
            }
            Op::RemoveAt(position) => {
                fixed.remove_integer_at(position as isize);
                dynamic.remove_integer_at(position as isize);
            }
            Op::RemoveValue(value) => {
                fixed.remove_integer(value);
                dynamic.remove_integer(value);
                assert_eq!(fixed.count_integer(value), 0);
            }
            Op::Reset(values) => {
                fixed.reset_integers(&values);
                dynamic.reset_integers(&values);
            }
            Op::MakePositive => {
                fixed.make_positive();
                dynamic.make_positive();
            }
            Op::Sort => {
                fixed.sort_integers();
                dynamic.sort_integers();
                let mut reversed = dynamic.integers_copy();
                reversed.reverse();
                assert_eq!(fixed.integers(), reversed.as_slice());
                let ascending: Vec<f64> = reversed.iter().map(|&v| f64::from(v)).collect();
                dynamic.reset_integers(&ascending);
            }
            Op::Regenerate(count, a, b) => {
                let (min, max) = (a.min(b), a.max(b));
                // unwrap: bounds are ordered
                fixed.regenerate(count as usize, min, max).unwrap();
                dynamic.reset_integers(
                    &fixed.integers().iter().map(|&v| f64::from(v)).collect::<Vec<_>>(),
                );
                assert!(fixed.integers().iter().all(|v| (min..=max).contains(v)));
            }
        }

        assert_eq!(fixed.integers(), dynamic.integers());
        assert_eq!(fixed.histogram(), dynamic.histogram());
        assert_eq!(fixed.integer_range(), dynamic.integer_range());
    }
});
