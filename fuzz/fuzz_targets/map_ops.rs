// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the reversal-keyed map.
//!
//! Arbitrary strings (any Unicode) go through every mutation. As long as only
//! `insert` and `remove_*` run, the reversal rule must keep holding.

#![no_main]

use arbitrary::Arbitrary;
use container_sandbox::ReversalMap;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(String),
    RemoveKey(String),
    RemoveValue(String),
    Reset(Vec<String>),
    UppercaseKeys,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut map = ReversalMap::new();
    let mut reversal_holds = true;

    for op in ops {
        match op {
            Op::Insert(value) => map.insert(value),
            Op::RemoveKey(key) => map.remove_by_key(&key),
            Op::RemoveValue(value) => {
                map.remove_by_value(&value);
                assert!(!map.values_sorted().contains(&value));
            }
            Op::Reset(objects) => {
                map.reset_from(&objects);
                reversal_holds = false;
            }
            Op::UppercaseKeys => {
                let before = map.len();
                map.uppercase_keys();
                assert!(map.len() <= before);
                reversal_holds = false;
            }
        }

        if reversal_holds {
            assert!(map.verify_reversal().is_ok());
        }
        assert_eq!(map.values_sorted().len(), map.len());
        assert_eq!(map.keys_uppercased().len(), map.len());
        assert_eq!(map.first(), map.values_sorted().first().cloned());
    }
});
