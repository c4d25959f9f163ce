//! Property-based tests for the binary searches.
//!
//! - **Ordering**: `sorted_index <= sorted_last_index`
//! - **Insertion**: inserting the target at either index keeps the sequence
//!   ascending
//! - **Bracketing**: the span between the two indices holds exactly the
//!   elements equal to the target

use proptest::prelude::*;
use underbar::iteratee::IterateeSpec;
use underbar::search::{sorted_index, sorted_last_index};
use underbar::value::Value;

fn ascending() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40).prop_map(|mut numbers| {
        numbers.sort_unstable();
        numbers
    })
}

fn is_ascending(numbers: &[i32]) -> bool {
    numbers.windows(2).all(|pair| pair[0] <= pair[1])
}

// =============================================================================
// sorted_index / sorted_last_index
// =============================================================================

proptest! {
    /// The first insertion point never comes after the last one
    #[test]
    fn prop_first_index_precedes_last(numbers in ascending(), target in -60i32..60) {
        let sequence = Value::from(numbers);
        let target = Value::from(target);
        let low = sorted_index(&sequence, &target, IterateeSpec::Identity);
        let high = sorted_last_index(&sequence, &target, IterateeSpec::Identity);
        prop_assert!(low <= high);
    }

    /// Inserting at either index preserves ascending order
    #[test]
    fn prop_insertion_keeps_order(numbers in ascending(), target in -60i32..60) {
        let sequence = Value::from(numbers.clone());
        let value = Value::from(target);
        for index in [
            sorted_index(&sequence, &value, IterateeSpec::Identity),
            sorted_last_index(&sequence, &value, IterateeSpec::Identity),
        ] {
            let mut inserted = numbers.clone();
            inserted.insert(index, target);
            prop_assert!(is_ascending(&inserted), "{inserted:?} after inserting at {index}");
        }
    }

    /// Exactly the elements equal to the target lie between the two indices
    #[test]
    fn prop_indices_bracket_equal_run(numbers in ascending(), target in -60i32..60) {
        let sequence = Value::from(numbers.clone());
        let value = Value::from(target);
        let low = sorted_index(&sequence, &value, IterateeSpec::Identity);
        let high = sorted_last_index(&sequence, &value, IterateeSpec::Identity);
        let equal = numbers.iter().filter(|&&number| number == target).count();
        prop_assert_eq!(high - low, equal);
    }
}
