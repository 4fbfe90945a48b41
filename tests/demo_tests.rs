//! Summation, set and short-circuit tests against the public API.

use proptest::prelude::*;
use rps_lab::demos::{and_value, or_value, sum, total, DemoSet};
use rps_lab::RpsError;
use std::cell::Cell;

proptest! {
    #[test]
    fn prop_total_is_start_plus_sum(items in prop::collection::vec(-1_000i64..1_000, 0..50), k in -1_000i64..1_000) {
        prop_assert_eq!(total(items.clone(), k), k + total(items, 0));
    }

    #[test]
    fn prop_empty_total_is_start(k in any::<i64>()) {
        prop_assert_eq!(total(Vec::<i64>::new(), k), k);
    }

    #[test]
    fn prop_duplicate_add_keeps_size(items in prop::collection::vec(0u8..20, 1..30)) {
        let mut set = DemoSet::new();
        for &i in &items {
            set.add(i);
        }
        let before = set.len();
        prop_assert!(!set.add(items[0]));
        prop_assert_eq!(set.len(), before);
    }

    #[test]
    fn prop_remove_present_shrinks_by_one(items in prop::collection::vec(0u8..20, 1..30)) {
        let mut set = DemoSet::new();
        for &i in &items {
            set.add(i);
        }
        let before = set.len();
        set.remove(&items[0]).unwrap();
        prop_assert_eq!(set.len(), before - 1);
    }
}

/// Test the documented summation scenarios.
#[test]
fn test_sum_scenarios() {
    assert_eq!(sum(vec![1, 2, 3, 4, 5]), 15);
    assert_eq!(total(vec![1, 2, 3, 4, 5], 10), 25);
    assert_eq!(total(Vec::<i32>::new(), 5), 5);
}

/// Removing an absent element is an error the caller must handle.
#[test]
fn test_remove_absent() {
    let mut set: DemoSet<i32> = DemoSet::new();
    set.add(1);
    assert!(matches!(set.remove(&2), Err(RpsError::NotFound(_))));
    assert_eq!(set.len(), 1);
}

/// `False or side_effect()` runs the side effect and yields its value.
#[test]
fn test_false_or_side_effect() {
    let calls = Cell::new(0);
    let result = or_value(false, || {
        calls.set(calls.get() + 1);
        true
    });
    assert!(result);
    assert_eq!(calls.get(), 1);
}

/// `True or side_effect()` skips the side effect and yields `true`.
#[test]
fn test_true_or_side_effect() {
    let calls = Cell::new(0);
    let result = or_value(true, || {
        calls.set(calls.get() + 1);
        false
    });
    assert!(result);
    assert_eq!(calls.get(), 0);
}

/// Falsy left operands pass through `and` untouched.
#[test]
fn test_and_passthrough() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(and_value(empty.clone(), || vec![1, 2]), empty);
    assert_eq!(and_value(vec![3], || vec![1, 2]), vec![1, 2]);
    assert_eq!(and_value(String::new(), || "unused".to_string()), "");
}
