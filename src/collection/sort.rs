//! Stable sorting and de-duplication.

use crate::iteratee::IterateeSpec;
use crate::search::SearchPredicate;
use crate::value::{Value, natural_cmp};

use super::traverse::map;
use super::shape::to_array;

/// Returns the values of `collection` sorted by the natural order of their
/// mapped criteria.
///
/// The sort is stable: elements with equal criteria keep their traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::sort_by;
/// use underbar::value::Value;
///
/// let stooges = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "larry", "age" => 50 },
///     object! { "name" => "curly", "age" => 40 },
/// ];
/// let names: Vec<String> = sort_by(&stooges, "age")
///     .iter()
///     .map(|stooge| stooge.property(&"name".into()).to_key_string())
///     .collect();
/// assert_eq!(names, vec!["moe", "curly", "larry"]);
/// ```
pub fn sort_by(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    let criteria = map(collection, iteratee);
    let mut decorated: Vec<(Value, Value)> = criteria
        .into_iter()
        .zip(to_array(collection))
        .collect();
    decorated.sort_by(|(left, _), (right, _)| natural_cmp(left, right));
    decorated.into_iter().map(|(_, value)| value).collect()
}

/// Returns a duplicate-free copy of `sequence`, keeping first occurrences.
///
/// Elements are compared by strict equality of their mapped values, except
/// that `NaN` matches `NaN`. When `is_sorted` is set and no iteratee is
/// given, only adjacent elements are compared, strictly.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::uniq;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::value::Value;
///
/// assert_eq!(
///     uniq(&array![1, 2, 1, 3, 1], false, IterateeSpec::Identity),
///     vec![Value::from(1), Value::from(2), Value::from(3)]
/// );
/// assert_eq!(
///     uniq(&array![1, 1, 2, 2, 3], true, IterateeSpec::Identity),
///     vec![Value::from(1), Value::from(2), Value::from(3)]
/// );
/// ```
pub fn uniq(sequence: &Value, is_sorted: bool, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    let spec = iteratee.into();
    let adjacent_only = is_sorted && matches!(spec, IterateeSpec::Identity);
    let computed = map(sequence, spec);
    let mut results = Vec::new();
    let mut seen: Vec<Value> = Vec::new();
    for (value, criterion) in to_array(sequence).into_iter().zip(computed) {
        let duplicate = if adjacent_only {
            seen.last().is_some_and(|last| last.strict_equals(&criterion))
        } else {
            let target = SearchPredicate::equals(criterion.clone());
            seen.iter().any(|previous| target.accepts(previous))
        };
        if !duplicate {
            results.push(value);
            seen.push(criterion);
        }
    }
    results
}
