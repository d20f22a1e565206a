//! Fixed-array sandbox behaviour, one operation at a time.

use super::common::{assert_histogram_consistent, assert_removed_at, fixed_with};
use container_sandbox::{FixedArraySandbox, FixedSeq, IntRange, SandboxError};

// ============================================================================
// COPIES AND LENGTHS
// ============================================================================

#[test]
fn copies_are_independent_of_the_sandbox() {
    let sandbox = fixed_with(&[1, 2, 3], &["a", "b"]);

    let mut integers = sandbox.integers_copy();
    let mut texts = sandbox.texts_copy();
    integers.as_mut_slice()[0] = 99;
    integers.push(4);
    texts.as_mut_slice()[1].push_str("!!");

    assert_eq!(sandbox.integers(), &[1, 2, 3]);
    assert_eq!(sandbox.texts(), &["a".to_string(), "b".to_string()]);
    assert_eq!(integers.len(), 4);
}

#[test]
fn lengths_are_tracked_independently() {
    let mut sandbox = FixedArraySandbox::new();
    sandbox.append_integer(1);
    sandbox.append_integer(2);
    sandbox.append_text("x");
    assert_eq!(sandbox.integer_count(), 2);
    assert_eq!(sandbox.text_count(), 1);
}

// ============================================================================
// STRUCTURAL MUTATIONS
// ============================================================================

#[test]
fn append_places_value_last() {
    let mut sandbox = fixed_with(&[4, 5], &[]);
    sandbox.append_integer(6);
    assert_eq!(sandbox.integers(), &[4, 5, 6]);
}

#[test]
fn remove_text_matches_content_exactly() {
    let mut sandbox = fixed_with(&[], &["pear", "Pear", "pear", "apple"]);
    sandbox.remove_text("pear");
    assert_eq!(sandbox.texts(), &["Pear".to_string(), "apple".to_string()]);
}

#[test]
fn remove_absent_value_leaves_sequence_alone() {
    let mut sandbox = fixed_with(&[1, 2], &[]);
    sandbox.remove_integer(7);
    assert_eq!(sandbox.integers(), &[1, 2]);
}

#[test]
fn insert_at_exact_length_appends() {
    let mut sandbox = fixed_with(&[1, 2], &[]);
    sandbox.insert_integer(3, 2);
    assert_eq!(sandbox.integers(), &[1, 2, 3]);
}

#[test]
fn insert_into_empty_sequence() {
    let mut sandbox = FixedArraySandbox::new();
    sandbox.insert_integer(5, 10);
    sandbox.insert_integer(4, -10);
    assert_eq!(sandbox.integers(), &[4, 5]);
}

#[test]
fn remove_at_valid_position_shifts_left() {
    let before = [10, 20, 30, 40];
    let mut sandbox = fixed_with(&before, &[]);
    sandbox.remove_integer_at(1);
    assert_removed_at(&before, sandbox.integers(), 1);
}

// ============================================================================
// BULK RESET
// ============================================================================

#[test]
fn reset_integers_truncates_toward_zero() {
    let mut sandbox = fixed_with(&[1, 2, 3, 4, 5], &[]);
    sandbox.reset_integers(&[3.67, -3.67, 0.2, -0.9, 8.0]);
    assert_eq!(sandbox.integers(), &[3, -3, 0, 0, 8]);
}

#[test]
fn reset_texts_uses_display_form() {
    let mut sandbox = fixed_with(&[], &["old"]);
    sandbox.reset_texts([1.5, 2.0]);
    assert_eq!(sandbox.texts(), &["1.5".to_string(), "2".to_string()]);

    sandbox.reset_texts(Vec::<String>::new());
    assert_eq!(sandbox.text_count(), 0);
}

// ============================================================================
// NORMALIZATION AND SORTING
// ============================================================================

#[test]
fn make_positive_flips_only_negatives() {
    let mut sandbox = fixed_with(&[-1, 2, -3, 0], &[]);
    sandbox.make_positive();
    assert_eq!(sandbox.integers(), &[1, 2, 3, 0]);
}

#[test]
fn integer_sort_is_ascending_and_idempotent() {
    let mut sandbox = fixed_with(&[5, -2, 9, 3, 3], &[]);
    sandbox.sort_integers();
    assert_eq!(sandbox.integers(), &[-2, 3, 3, 5, 9]);

    let once = sandbox.integers_copy();
    sandbox.sort_integers();
    assert_eq!(sandbox.integers_copy(), once);
}

#[test]
fn text_sort_uses_code_point_order() {
    let mut sandbox = fixed_with(&[], &["pear", "Apple", "apple", "Zoo"]);
    sandbox.sort_texts();
    // upper case sorts before lower case in code-point order
    assert_eq!(
        sandbox.texts(),
        &[
            "Apple".to_string(),
            "Zoo".to_string(),
            "apple".to_string(),
            "pear".to_string()
        ]
    );
}

// ============================================================================
// QUERIES
// ============================================================================

#[test]
fn count_text_is_substring_and_case_insensitive() {
    let sandbox = fixed_with(&[], &["Apple", "banana", "APPLE PIE"]);
    assert_eq!(sandbox.count_text("apple"), 2);
    assert_eq!(sandbox.count_text("AN"), 1);
}

#[test]
fn find_integer_returns_every_position() {
    let sandbox = fixed_with(&[4, 1, 4, 2, 4], &[]);
    assert_eq!(sandbox.find_integer(4), FixedSeq::from(vec![0, 2, 4]));
    assert!(sandbox.find_integer(8).is_empty());
}

#[test]
fn range_examples() {
    assert_eq!(fixed_with(&[], &[]).integer_range(), None);
    assert_eq!(
        fixed_with(&[5, 1, 9, 3], &[]).integer_range(),
        Some(IntRange { min: 1, max: 9 })
    );
}

/// Regression: a zero-seeded maximum would report 0 here.
#[test]
fn range_of_all_negative_sequence() {
    let sandbox = fixed_with(&[-5, -2, -8], &[]);
    assert_eq!(
        sandbox.integer_range(),
        Some(IntRange { min: -8, max: -2 })
    );
}

/// Regression: a large-constant minimum would ignore values above it.
#[test]
fn range_of_large_values() {
    let sandbox = fixed_with(&[150_000, 200_000], &[]);
    assert_eq!(
        sandbox.integer_range(),
        Some(IntRange {
            min: 150_000,
            max: 200_000
        })
    );
}

#[test]
fn histogram_and_repeated_values() {
    let values = [3, 1, 3, 2, 3, 1];
    let sandbox = fixed_with(&values, &[]);
    let histogram = sandbox.histogram();

    assert_eq!(histogram.get(&3), Some(&3));
    assert_eq!(histogram.get(&7), None);
    assert_eq!(sandbox.count_repeated_integers(), 2);
    assert_histogram_consistent(&values, &histogram, sandbox.count_repeated_integers());
}

#[test]
fn ordered_and_multiset_equality() {
    let sandbox = fixed_with(&[1, 2, 3], &[]);
    assert!(sandbox.equals_ordered(&[1, 2, 3]));
    assert!(!sandbox.equals_ordered(&[3, 1, 2]));
    assert!(!sandbox.equals_ordered(&[1, 2]));
    assert!(sandbox.same_integers(&[3, 1, 2]));
    assert!(!sandbox.same_integers(&[3, 1, 1]));
}

// ============================================================================
// REGENERATION
// ============================================================================

#[test]
fn regenerate_stays_within_closed_bounds() {
    let mut sandbox = FixedArraySandbox::with_seed(42);
    sandbox.regenerate(200, -3, 3).unwrap();
    assert_eq!(sandbox.integer_count(), 200);
    assert!(sandbox.integers().iter().all(|v| (-3..=3).contains(v)));
    // both endpoints are reachable
    assert!(sandbox.integers().contains(&-3));
    assert!(sandbox.integers().contains(&3));
}

#[test]
fn regenerate_is_reproducible_for_a_seed() {
    let mut a = FixedArraySandbox::with_seed(9);
    let mut b = FixedArraySandbox::with_seed(9);
    a.regenerate(16, 0, 1000).unwrap();
    b.regenerate(16, 0, 1000).unwrap();
    assert_eq!(a.integers(), b.integers());
}

#[test]
fn regenerate_zero_count_empties_sequence() {
    let mut sandbox = fixed_with(&[1, 2, 3], &[]);
    sandbox.regenerate(0, 1, 5).unwrap();
    assert_eq!(sandbox.integer_count(), 0);
}

#[test]
fn regenerate_with_inverted_bounds_fails() {
    let mut sandbox = FixedArraySandbox::new();
    let err = sandbox.regenerate(3, 10, 0).unwrap_err();
    assert_eq!(err, SandboxError::EmptyRange { min: 10, max: 0 });
}

#[cfg(feature = "serde")]
#[test]
fn fixed_seq_serializes_as_plain_array() {
    let sandbox = fixed_with(&[1, -2], &[]);
    let json = serde_json::to_string(&sandbox.integers_copy()).unwrap();
    assert_eq!(json, "[1,-2]");

    let range = sandbox.integer_range().unwrap();
    assert_eq!(
        serde_json::to_string(&range).unwrap(),
        r#"{"min":-2,"max":1}"#
    );
}
