//! Search primitives: linear scans and binary insertion search.
//!
//! All index-returning searches report `None` where a miss would
//! traditionally be `-1`.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array;
//! use underbar::iteratee::IterateeSpec;
//! use underbar::search::{SearchMode, find_index, index_of, sorted_index};
//! use underbar::value::Value;
//!
//! let numbers = array![10, 20, 30, 40];
//! assert_eq!(sorted_index(&numbers, &Value::from(35), IterateeSpec::Identity), 3);
//! assert_eq!(index_of(&numbers, &Value::from(30), SearchMode::AssumeSorted), Some(2));
//! assert_eq!(
//!     find_index(&numbers, IterateeSpec::unary(|value| Value::from(value.to_number() > 15.0))),
//!     Some(1)
//! );
//! ```

use crate::collection::{Direction, Entries, is_array_like, keys, walk};
use crate::iteratee::{Iteratee, IterateeSpec};
use crate::value::{Key, Value};

/// What a linear search is looking for.
#[derive(Clone, Debug)]
pub enum SearchPredicate {
    /// The first element for which the iteratee is truthy.
    Matches(Iteratee),
    /// The first element strictly equal to the target.
    Equals(Value),
    /// The first `NaN`.
    IsNaN,
}

impl SearchPredicate {
    /// Searches for a literal target.
    ///
    /// A `NaN` target becomes [`SearchPredicate::IsNaN`], since `NaN` is never
    /// strictly equal to itself.
    pub fn equals(target: Value) -> Self {
        if target.is_nan() {
            Self::IsNaN
        } else {
            Self::Equals(target)
        }
    }

    /// Tests one value outside of any traversal.
    pub(crate) fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Matches(iteratee) => iteratee.apply(value).is_truthy(),
            Self::Equals(target) => value.strict_equals(target),
            Self::IsNaN => value.is_nan(),
        }
    }

    fn test(&self, value: &Value, key: &Key, collection: &Value) -> bool {
        match self {
            Self::Matches(iteratee) => iteratee.call(value, key, collection).is_truthy(),
            literal => literal.accepts(value),
        }
    }
}

/// How [`index_of`] should interpret its control argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Scan the whole sequence.
    #[default]
    Default,
    /// Start scanning at this index; negative values count from the end.
    StartAt(isize),
    /// The sequence is sorted ascending: use binary search.
    AssumeSorted,
}

/// Scans `entries` one position at a time, stopping at the first position
/// where `predicate` holds.
///
/// A missing `start` begins at the first (forward) or last (backward)
/// position. A negative `start` is resolved relative to the end.
pub(crate) fn scan<P>(
    entries: &Entries<'_>,
    direction: Direction,
    start: Option<isize>,
    mut predicate: P,
) -> Option<usize>
where
    P: FnMut(&Value, &Key) -> bool,
{
    let length = isize::try_from(entries.len()).unwrap_or(isize::MAX);
    let mut index = match (start, direction) {
        (None, Direction::Forward) => 0,
        (None, Direction::Backward) => length - 1,
        (Some(start), Direction::Forward) if start < 0 => (start + length).max(0),
        (Some(start), Direction::Backward) if start < 0 => start + length,
        (Some(start), Direction::Forward) => start,
        (Some(start), Direction::Backward) => start.min(length - 1),
    };
    while (0..length).contains(&index) {
        let position = index.unsigned_abs();
        if predicate(&entries.value(position), &entries.key(position)) {
            return Some(position);
        }
        index += direction.step();
    }
    None
}

/// Walks the array-like `sequence` from `start` in `direction`, returning the
/// first index where `predicate` holds.
///
/// Map-likes have no length and are never searched.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::Direction;
/// use underbar::search::{SearchPredicate, linear_search};
/// use underbar::value::Value;
///
/// let letters = array!["a", "b", "a", "b"];
/// let target = SearchPredicate::equals(Value::from("a"));
/// assert_eq!(linear_search(&letters, &target, Direction::Forward, None), Some(0));
/// assert_eq!(linear_search(&letters, &target, Direction::Backward, None), Some(2));
/// assert_eq!(linear_search(&letters, &target, Direction::Forward, Some(-2)), Some(2));
/// ```
pub fn linear_search(
    sequence: &Value,
    predicate: &SearchPredicate,
    direction: Direction,
    start: Option<isize>,
) -> Option<usize> {
    let entries = Entries::of(sequence);
    if !entries.is_array_like() {
        return None;
    }
    scan(&entries, direction, start, |value, key| {
        predicate.test(value, key, sequence)
    })
}

/// Returns the first index of an array-like for which the predicate is
/// truthy.
pub fn find_index(sequence: &Value, predicate: impl Into<IterateeSpec>) -> Option<usize> {
    let predicate = SearchPredicate::Matches(predicate.into().resolve());
    linear_search(sequence, &predicate, Direction::Forward, None)
}

/// Returns the last index of an array-like for which the predicate is
/// truthy.
pub fn find_last_index(sequence: &Value, predicate: impl Into<IterateeSpec>) -> Option<usize> {
    let predicate = SearchPredicate::Matches(predicate.into().resolve());
    linear_search(sequence, &predicate, Direction::Backward, None)
}

/// Returns the first key of `collection` for which the predicate is truthy.
pub fn find_key(collection: &Value, predicate: impl Into<IterateeSpec>) -> Option<String> {
    let predicate = predicate.into().resolve();
    keys(collection).into_iter().find(|name| {
        let key = Key::Name(name.clone());
        predicate
            .call(&collection.property(&key), &key, collection)
            .is_truthy()
    })
}

/// Returns every key of `collection` for which the predicate is truthy.
pub fn find_keys(collection: &Value, predicate: impl Into<IterateeSpec>) -> Vec<String> {
    let predicate = predicate.into().resolve();
    keys(collection)
        .into_iter()
        .filter(|name| {
            let key = Key::Name(name.clone());
            predicate
                .call(&collection.property(&key), &key, collection)
                .is_truthy()
        })
        .collect()
}

/// Returns the first value for which the predicate is truthy, or
/// `undefined`.
///
/// Array-likes are searched by index and map-likes by key; later elements
/// are never visited once a match is found.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::iteratee::IterateeSpec;
/// use underbar::search::find;
/// use underbar::value::Value;
///
/// let even = IterateeSpec::unary(|value| Value::from(value.to_number() % 2.0 == 0.0));
/// assert_eq!(find(&array![1, 3, 4, 6], even.clone()), Value::from(4));
/// assert_eq!(find(&object! { "a" => 1, "b" => 2 }, even.clone()), Value::from(2));
/// assert!(find(&array![1, 3], even).is_undefined());
/// ```
pub fn find(collection: &Value, predicate: impl Into<IterateeSpec>) -> Value {
    let predicate = predicate.into().resolve();
    walk(collection, Direction::Forward, |value, key, collection| {
        predicate.call(value, key, collection).is_truthy()
    })
    .map(|(_, value)| value)
    .unwrap_or_default()
}

/// Returns the insertion index that keeps `sequence` ordered under `less`.
///
/// Both the target and every visited element are mapped through `iteratee`
/// before comparison. `sequence` must already be ordered under the same
/// comparison; this is not checked.
pub fn binary_search<L>(sequence: &Value, target: &Value, iteratee: &Iteratee, less: L) -> usize
where
    L: Fn(&Value, &Value) -> bool,
{
    let entries = Entries::of(sequence);
    let sought = iteratee.apply(target);
    let mut low = 0;
    let mut high = if entries.is_array_like() { entries.len() } else { 0 };
    while low < high {
        let middle = low + (high - low) / 2;
        if less(&iteratee.apply(&entries.value(middle)), &sought) {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

/// Returns the smallest index at which `target` can be inserted while
/// keeping `sequence` sorted (ties go before equal elements).
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::search::{sorted_index, sorted_last_index};
/// use underbar::iteratee::IterateeSpec;
/// use underbar::value::Value;
///
/// let numbers = array![10, 20, 20, 30];
/// assert_eq!(sorted_index(&numbers, &Value::from(20), IterateeSpec::Identity), 1);
/// assert_eq!(sorted_last_index(&numbers, &Value::from(20), IterateeSpec::Identity), 3);
///
/// let stooges = array![object! { "age" => 30 }, object! { "age" => 50 }];
/// let sought = object! { "age" => 40 };
/// assert_eq!(sorted_index(&stooges, &sought, IterateeSpec::from("age")), 1);
/// ```
pub fn sorted_index(sequence: &Value, target: &Value, iteratee: impl Into<IterateeSpec>) -> usize {
    binary_search(sequence, target, &iteratee.into().resolve(), Value::loose_less_than)
}

/// Returns the greatest index at which `target` can be inserted while
/// keeping `sequence` sorted (ties go after equal elements).
pub fn sorted_last_index(
    sequence: &Value,
    target: &Value,
    iteratee: impl Into<IterateeSpec>,
) -> usize {
    binary_search(sequence, target, &iteratee.into().resolve(), Value::loose_less_equal)
}

/// Returns the first index holding an element strictly equal to `item`.
///
/// With [`SearchMode::AssumeSorted`] the sequence is binary searched and the
/// insertion slot is reported only when it holds `item`.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::search::{SearchMode, index_of, last_index_of};
/// use underbar::value::Value;
///
/// let numbers = array![1, 2, 3, 1, 2, 3];
/// assert_eq!(index_of(&numbers, &Value::from(2), SearchMode::Default), Some(1));
/// assert_eq!(index_of(&numbers, &Value::from(2), SearchMode::StartAt(2)), Some(4));
/// assert_eq!(index_of(&numbers, &Value::from(2), SearchMode::StartAt(-1)), None);
/// assert_eq!(last_index_of(&numbers, &Value::from(1), SearchMode::Default), Some(3));
/// assert_eq!(last_index_of(&numbers, &Value::from(1), SearchMode::StartAt(2)), Some(0));
/// ```
pub fn index_of(sequence: &Value, item: &Value, mode: SearchMode) -> Option<usize> {
    locate(sequence, item, mode, Direction::Forward)
}

/// Returns the last index holding an element strictly equal to `item`.
///
/// [`SearchMode::AssumeSorted`] has no backward counterpart and scans the
/// whole sequence.
pub fn last_index_of(sequence: &Value, item: &Value, mode: SearchMode) -> Option<usize> {
    locate(sequence, item, mode, Direction::Backward)
}

fn locate(sequence: &Value, item: &Value, mode: SearchMode, direction: Direction) -> Option<usize> {
    if !is_array_like(sequence) {
        return None;
    }
    let start = match mode {
        SearchMode::StartAt(start) => Some(start),
        SearchMode::AssumeSorted if direction == Direction::Forward => {
            let slot = binary_search(sequence, item, &Iteratee::identity(), Value::loose_less_than);
            let found = sequence.property(&Key::Index(slot));
            return (slot < Entries::of(sequence).len() && found.strict_equals(item)).then_some(slot);
        }
        SearchMode::AssumeSorted | SearchMode::Default => None,
    };
    linear_search(sequence, &SearchPredicate::equals(item.clone()), direction, start)
}
