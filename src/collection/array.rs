//! Positional helpers over array-likes.
//!
//! Map-likes have no positions: every helper here treats them, along with
//! `null`, `undefined` and scalars, as empty.

use crate::extremum::max;
use crate::iteratee::IterateeSpec;
use crate::value::Value;

use super::shape::is_array_like;
use super::traverse::{contains, pluck};
use super::{Entries, to_array};

fn elements(sequence: &Value) -> Vec<Value> {
    if is_array_like(sequence) {
        to_array(sequence)
    } else {
        Vec::new()
    }
}

/// Returns the first element, or `undefined` when there is none.
pub fn first(sequence: &Value) -> Value {
    let entries = Entries::of(sequence);
    if entries.is_array_like() && entries.len() > 0 {
        entries.value(0)
    } else {
        Value::Undefined
    }
}

/// Returns up to `count` leading elements.
pub fn first_n(sequence: &Value, count: usize) -> Vec<Value> {
    elements(sequence).into_iter().take(count).collect()
}

/// Returns the last element, or `undefined` when there is none.
pub fn last(sequence: &Value) -> Value {
    let entries = Entries::of(sequence);
    match entries.len().checked_sub(1) {
        Some(position) if entries.is_array_like() => entries.value(position),
        _ => Value::Undefined,
    }
}

/// Returns up to `count` trailing elements, in order.
pub fn last_n(sequence: &Value, count: usize) -> Vec<Value> {
    let all = elements(sequence);
    let skip = all.len().saturating_sub(count);
    all.into_iter().skip(skip).collect()
}

/// Splits an array-like into arrays of `count` elements; the final chunk
/// holds the remainder. A `count` of zero yields no chunks.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::chunk;
///
/// assert_eq!(chunk(&array![1, 2, 3, 4, 5], 2), vec![array![1, 2], array![3, 4], array![5]]);
/// assert!(chunk(&array![1, 2], 0).is_empty());
/// ```
pub fn chunk(sequence: &Value, count: usize) -> Vec<Value> {
    if count == 0 {
        return Vec::new();
    }
    elements(sequence)
        .chunks(count)
        .map(|part| Value::array(part.to_vec()))
        .collect()
}

/// Flattens nested arrays, completely or (`shallow`) by a single level.
///
/// Only real arrays are opened; strings and pseudo-arrays nested inside are
/// kept as elements.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::flatten;
/// use underbar::value::Value;
///
/// let nested = array![1, array![2], array![3, array![array![4]]]];
/// assert_eq!(flatten(&nested, false), vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
/// assert_eq!(flatten(&nested, true), vec![Value::from(1), Value::from(2), Value::from(3), array![array![4]]]);
/// ```
pub fn flatten(sequence: &Value, shallow: bool) -> Vec<Value> {
    let depth = if shallow { Some(1) } else { None };
    let mut output = Vec::new();
    flatten_into(elements(sequence), depth, &mut output);
    output
}

fn flatten_into(input: Vec<Value>, depth: Option<usize>, output: &mut Vec<Value>) {
    for value in input {
        match (&value, depth) {
            (Value::Array(nested), Some(1)) => output.extend(nested.iter().cloned()),
            (Value::Array(nested), _) => {
                flatten_into(nested.to_vec(), depth.map(|depth| depth - 1), output);
            }
            _ => output.push(value),
        }
    }
}

/// Returns the distinct elements of `first` that every other collection
/// also contains.
///
/// Membership uses [`contains`], so `NaN` matches `NaN` and map-likes are
/// searched through their values.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::intersection;
/// use underbar::value::Value;
///
/// let shared = intersection(&array![1, 2, 3, 2], &[array![101, 2, 1, 10], array![2, 1]]);
/// assert_eq!(shared, vec![Value::from(1), Value::from(2)]);
/// ```
pub fn intersection(first: &Value, others: &[Value]) -> Vec<Value> {
    let mut result = Vec::new();
    for item in elements(first) {
        let seen = Value::array(result.clone());
        if contains(&seen, &item, None) {
            continue;
        }
        if others.iter().all(|other| contains(other, &item, None)) {
            result.push(item);
        }
    }
    result
}

/// Regroups an array of arrays by position: the `n`-th output array holds
/// the `n`-th element of every input, `undefined` where an input is short.
///
/// The output length is the longest input length.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::collection::unzip;
///
/// let columns = unzip(&array![array!["moe", 30], array!["larry", 40, true]]);
/// assert_eq!(columns[0], array!["moe", "larry"]);
/// assert_eq!(columns[2], array![underbar::value::Value::Undefined, true]);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unzip(sequence: &Value) -> Vec<Value> {
    let longest = max(
        sequence,
        IterateeSpec::unary(|element| Value::from(element.length())),
    );
    let length = longest.length().map_or(0, |length| length as usize);
    (0..length)
        .map(|index| Value::array(pluck(sequence, index)))
        .collect()
}

/// Calls the iteratee with each index in `0..count` and collects the results.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::times;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::value::Value;
///
/// let squares = times(3, IterateeSpec::unary(|index| Value::from(index.to_number().powi(2))));
/// assert_eq!(squares, vec![Value::from(0), Value::from(1), Value::from(4)]);
/// ```
pub fn times(count: usize, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    let iteratee = iteratee.into().resolve();
    (0..count)
        .map(|index| iteratee.apply(&Value::from(index)))
        .collect()
}
