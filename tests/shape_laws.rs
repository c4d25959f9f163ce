//! Property-based tests for shape invariance.
//!
//! - **Traversal**: `each` over an array and over the equivalent
//!   `{ "0": .., "1": .., "length": n }` object sees the same keys and values
//! - **Mapping**: `map` produces the same results for both shapes
//! - **Folding**: `reduce` and `reduce_right` fold both shapes identically

use proptest::prelude::*;
use underbar::collection::{each, map};
use underbar::fold::{reduce, reduce_right};
use underbar::iteratee::IterateeSpec;
use underbar::value::{Function, Key, Object, Value};

fn pseudo_array(numbers: &[i32]) -> Value {
    let mut object = Object::default();
    for (index, number) in numbers.iter().enumerate() {
        object.insert(index.to_string(), Value::from(*number));
    }
    object.insert("length".to_owned(), Value::from(numbers.len()));
    Value::object(object)
}

fn trace(memo: Value, value: &Value, key: &Key, _: &Value) -> Value {
    Value::from(format!("{memo}{key}={value};"))
}

fn visits(collection: &Value) -> Vec<(Key, Value)> {
    let mut seen = Vec::new();
    each(collection, |value, key, _| seen.push((key.clone(), value.clone())));
    seen
}

// =============================================================================
// Array versus pseudo-array
// =============================================================================

proptest! {
    /// each visits the same keys and values in the same order
    #[test]
    fn prop_each_ignores_shape(numbers in prop::collection::vec(-1000i32..1000, 0..30)) {
        let array = Value::from(numbers.clone());
        prop_assert_eq!(visits(&array), visits(&pseudo_array(&numbers)));
    }

    /// map sees the same arguments, so it yields the same results
    #[test]
    fn prop_map_ignores_shape(numbers in prop::collection::vec(-1000i32..1000, 0..30)) {
        let describe = || {
            IterateeSpec::from(Function::binary(|value, key| {
                Value::from(format!("{key}:{}", value.to_number() * 3.0))
            }))
        };
        let array = Value::from(numbers.clone());
        prop_assert_eq!(map(&array, describe()), map(&pseudo_array(&numbers), describe()));
    }

    /// Seeded and unseeded folds in both directions agree across shapes
    #[test]
    fn prop_reduce_ignores_shape(numbers in prop::collection::vec(-1000i32..1000, 0..30)) {
        let array = Value::from(numbers.clone());
        let pseudo = pseudo_array(&numbers);
        prop_assert_eq!(reduce(&array, trace, None), reduce(&pseudo, trace, None));
        prop_assert_eq!(
            reduce(&array, trace, Some(Value::from(""))),
            reduce(&pseudo, trace, Some(Value::from("")))
        );
        prop_assert_eq!(
            reduce_right(&array, trace, Some(Value::from(""))),
            reduce_right(&pseudo, trace, Some(Value::from("")))
        );
    }
}
