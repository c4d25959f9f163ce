//! The aggregate engine behind `group_by`, `count_by`, `index_by` and
//! `partition`.
//!
//! Each operation computes a key per element through the iteratee and hands
//! `(container, value, key)` to a placement behavior. Group keys are the
//! string form of the computed key, so `1` and `"1"` share a bucket.
//! Buckets are ordered by first appearance, and elements inside a bucket
//! keep traversal order.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array;
//! use underbar::group::{count_by, group_by};
//! use underbar::iteratee::IterateeSpec;
//! use underbar::value::Value;
//!
//! let parity = IterateeSpec::unary(|value| Value::from(value.to_number() % 2.0));
//!
//! let groups = group_by(&array![1, 2, 3, 4, 5, 6], parity.clone());
//! assert_eq!(groups["1"], vec![Value::from(1), Value::from(3), Value::from(5)]);
//! assert_eq!(groups["0"], vec![Value::from(2), Value::from(4), Value::from(6)]);
//!
//! let counts = count_by(&array![1, 2, 3], parity);
//! assert_eq!(counts["1"], 2);
//! ```

use indexmap::IndexMap;

use crate::collection::each;
use crate::iteratee::IterateeSpec;
use crate::value::{Object, ObjectHasher, Value};

/// Buckets produced by [`group_by`].
///
/// Iterating a `Groups` yields the buckets in the order their keys first
/// appeared. Once wrapped as a [`Value::Object`], the buckets follow
/// [`keys`](crate::collection::keys) order instead: integer-like keys
/// ascending, then the rest in first-appearance order.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::keys;
/// use underbar::group::group_by;
/// use underbar::value::Value;
///
/// let groups = group_by(&array!["ccc", "a", "bb"], "length");
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["3", "1", "2"]);
///
/// let wrapped = Value::from(groups);
/// assert_eq!(keys(&wrapped), vec!["1", "2", "3"]);
/// ```
pub type Groups = IndexMap<String, Vec<Value>, ObjectHasher>;

/// Tallies produced by [`count_by`].
pub type Counts = IndexMap<String, usize, ObjectHasher>;

/// Runs one grouping pass.
///
/// The iteratee is resolved once, the collection traversed once, and
/// `place_into(&mut container, value, key)` called for every element with
/// the computed key.
pub fn group<C, P>(
    collection: &Value,
    iteratee: impl Into<IterateeSpec>,
    mut container: C,
    mut place_into: P,
) -> C
where
    P: FnMut(&mut C, &Value, Value),
{
    let iteratee = iteratee.into().resolve();
    each(collection, |value, key, collection| {
        let computed = iteratee.call(value, key, collection);
        place_into(&mut container, value, computed);
    });
    container
}

/// Groups elements by the string form of the computed key.
pub fn group_by(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Groups {
    group(collection, iteratee, Groups::default(), |groups, value, key| {
        groups
            .entry(key.to_key_string())
            .or_default()
            .push(value.clone());
    })
}

/// Counts elements per computed key.
pub fn count_by(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Counts {
    group(collection, iteratee, Counts::default(), |counts, _, key| {
        *counts.entry(key.to_key_string()).or_default() += 1;
    })
}

/// Maps each computed key to the element that produced it; when keys
/// collide the last element wins.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::group::index_by;
/// use underbar::value::Value;
///
/// let stooges = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "larry", "age" => 50 },
/// ];
/// let by_age = index_by(&stooges, "age");
/// assert_eq!(by_age["50"], object! { "name" => "larry", "age" => 50 });
/// ```
pub fn index_by(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Object {
    group(collection, iteratee, Object::default(), |index, value, key| {
        index.insert(key.to_key_string(), value.clone());
    })
}

/// Splits elements into those whose predicate result is truthy and those
/// whose result is falsy.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::group::partition;
/// use underbar::iteratee::IterateeSpec;
///
/// let (truthy, falsy) = partition(&array![0, 1, "", "a"], IterateeSpec::Identity);
/// assert_eq!(truthy.len(), 2);
/// assert_eq!(falsy.len(), 2);
/// ```
pub fn partition(
    collection: &Value,
    predicate: impl Into<IterateeSpec>,
) -> (Vec<Value>, Vec<Value>) {
    group(
        collection,
        predicate,
        (Vec::new(), Vec::new()),
        |(pass, fail), value, verdict| {
            if verdict.is_truthy() {
                pass.push(value.clone());
            } else {
                fail.push(value.clone());
            }
        },
    )
}
