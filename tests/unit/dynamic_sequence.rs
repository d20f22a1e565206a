//! Dynamic-sequence sandbox behaviour.

use super::common::{assert_histogram_consistent, assert_removed_at, dynamic_with};
use container_sandbox::{DynamicSandbox, IntRange, SandboxError};

#[test]
fn starts_empty() {
    let sandbox = DynamicSandbox::new();
    assert_eq!(sandbox.integer_count(), 0);
    assert_eq!(sandbox.text_count(), 0);
    assert!(sandbox.integers_as_array().is_empty());
}

#[test]
fn copies_are_independent() {
    let sandbox = dynamic_with(&[1, 2], &["x"]);
    let mut integers = sandbox.integers_copy();
    let mut texts = sandbox.texts_copy();
    integers.clear();
    texts[0].push('y');
    assert_eq!(sandbox.integers(), &[1, 2]);
    assert_eq!(sandbox.texts(), &["x".to_string()]);
}

#[test]
fn append_grows_by_one() {
    let mut sandbox = dynamic_with(&[1], &["a"]);
    sandbox.append_integer(2);
    sandbox.append_text("b");
    assert_eq!(sandbox.integer_count(), 2);
    assert_eq!(sandbox.texts(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn remove_text_removes_every_match() {
    let mut sandbox = dynamic_with(&[], &["a", "a", "b", "a"]);
    sandbox.remove_text("a");
    assert_eq!(sandbox.texts(), &["b".to_string()]);
}

#[test]
fn insert_in_middle_shifts_right() {
    let mut sandbox = dynamic_with(&[1, 3], &[]);
    sandbox.insert_integer(2, 1);
    assert_eq!(sandbox.integers(), &[1, 2, 3]);
}

#[test]
fn remove_at_position() {
    let before = [7, 8, 9];
    let mut sandbox = dynamic_with(&before, &[]);
    sandbox.remove_integer_at(2);
    assert_removed_at(&before, sandbox.integers(), 2);
}

#[test]
fn reset_integers_truncates() {
    let mut sandbox = DynamicSandbox::new();
    sandbox.reset_integers(&[1.99, -1.99, 42.5]);
    assert_eq!(sandbox.integers(), &[1, -1, 42]);
}

#[test]
fn reset_texts_from_mixed_display_values() {
    let mut sandbox = dynamic_with(&[], &["stale"]);
    sandbox.reset_texts(["alpha", "7", "true"]);
    assert_eq!(sandbox.text_count(), 3);
    sandbox.reset_texts([true, false]);
    assert_eq!(sandbox.texts(), &["true".to_string(), "false".to_string()]);
}

#[test]
fn make_positive() {
    let mut sandbox = dynamic_with(&[-4, 4, 0, i32::MIN], &[]);
    sandbox.make_positive();
    assert_eq!(sandbox.integers(), &[4, 4, 0, i32::MAX]);
}

#[test]
fn integer_sort_orders_largest_first() {
    let mut sandbox = dynamic_with(&[2, -7, 11, 2], &[]);
    sandbox.sort_integers();
    assert_eq!(sandbox.integers(), &[11, 2, 2, -7]);
}

#[test]
fn text_sort_is_ascending() {
    let mut sandbox = dynamic_with(&[], &["delta", "alpha", "charlie", "bravo"]);
    sandbox.sort_texts();
    assert_eq!(
        sandbox.texts(),
        &[
            "alpha".to_string(),
            "bravo".to_string(),
            "charlie".to_string(),
            "delta".to_string()
        ]
    );
}

#[test]
fn count_queries() {
    let sandbox = dynamic_with(&[1, 1, 2], &["Apple", "banana", "APPLE PIE"]);
    assert_eq!(sandbox.count_integer(1), 2);
    assert_eq!(sandbox.count_integer(5), 0);
    assert_eq!(sandbox.count_text("apple"), 2);
}

#[test]
fn positions_and_range() {
    let sandbox = dynamic_with(&[5, 1, 9, 3, 1], &[]);
    assert_eq!(sandbox.find_integer(1), vec![1, 4]);
    assert_eq!(sandbox.integer_range(), Some(IntRange { min: 1, max: 9 }));
    assert_eq!(dynamic_with(&[], &[]).integer_range(), None);
}

#[test]
fn histogram_is_consistent() {
    let values = [0, 0, 0, 5, 6, 6];
    let sandbox = dynamic_with(&values, &[]);
    assert_eq!(sandbox.count_repeated_integers(), 2);
    assert_histogram_consistent(&values, &sandbox.histogram(), sandbox.count_repeated_integers());
}

#[test]
fn compare_with_external_array() {
    let sandbox = dynamic_with(&[1, 2, 3], &[]);
    assert!(sandbox.equals_ordered(&[1, 2, 3]));
    assert!(!sandbox.equals_ordered(&[1, 2, 4]));
    assert!(!sandbox.equals_ordered(&[1, 2, 3, 4]));
    assert!(sandbox.same_integers(&[2, 3, 1]));
    assert!(!sandbox.same_integers(&[2, 3]));
}

#[test]
fn integers_as_array_matches_sequence() {
    let sandbox = dynamic_with(&[4, 2], &[]);
    let array = sandbox.integers_as_array();
    assert_eq!(array.as_slice(), sandbox.integers());
}

#[test]
fn regenerate_degenerate_and_invalid_ranges() {
    let mut sandbox = DynamicSandbox::with_seed(5);
    sandbox.regenerate(5, 2, 2).unwrap();
    assert_eq!(sandbox.integers(), &[2, 2, 2, 2, 2]);

    assert_eq!(
        sandbox.regenerate(1, 3, 2),
        Err(SandboxError::EmptyRange { min: 3, max: 2 })
    );
    assert_eq!(sandbox.integer_count(), 5);
}
