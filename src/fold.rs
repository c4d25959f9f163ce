//! The generalised fold engine behind `reduce` and `reduce_right`.
//!
//! A fold visits every element once, in either direction, threading a memo
//! through `step(memo, value, key, collection)`.
//!
//! - With a seed, every element goes through `step`. A seed of
//!   `undefined` still counts as a seed.
//! - Without a seed, the first visited element becomes the memo and `step`
//!   starts at the second element. Folding an empty collection without a
//!   seed is an error.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array;
//! use underbar::fold::{reduce, reduce_right};
//! use underbar::value::{Key, Value};
//!
//! let add = |memo: Value, value: &Value, _: &Key, _: &Value| {
//!     Value::from(memo.to_number() + value.to_number())
//! };
//! assert_eq!(reduce(&array![1, 2, 3], add, Some(Value::from(0))), Ok(Value::from(6)));
//!
//! let concatenate = |memo: Value, value: &Value, _: &Key, _: &Value| {
//!     Value::from(format!("{memo}{value}"))
//! };
//! assert_eq!(reduce_right(&array!["a", "b", "c"], concatenate, None), Ok(Value::from("cba")));
//! ```

use crate::collection::{Direction, walk};
use crate::error::CollectionError;
use crate::value::{Function, Key, Value};

/// Folds `collection` in `direction`.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] when `seed` is `None` and the
/// collection has no elements.
pub fn fold<F>(
    collection: &Value,
    mut step: F,
    seed: Option<Value>,
    direction: Direction,
) -> Result<Value, CollectionError>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Value,
{
    let mut memo = seed;
    walk(collection, direction, |value, key, collection| {
        memo = Some(match memo.take() {
            Some(accumulated) => step(accumulated, value, key, collection),
            None => value.clone(),
        });
        false
    });
    memo.ok_or(CollectionError::EmptyReduce)
}

/// Folds left to right.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] for an empty collection without
/// a seed.
pub fn reduce<F>(collection: &Value, step: F, seed: Option<Value>) -> Result<Value, CollectionError>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Value,
{
    fold(collection, step, seed, Direction::Forward)
}

/// Folds right to left.
///
/// Map-likes are folded in reverse [`keys`](crate::collection::keys) order,
/// so integer keys come last and in descending order.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] for an empty collection without
/// a seed.
pub fn reduce_right<F>(
    collection: &Value,
    step: F,
    seed: Option<Value>,
) -> Result<Value, CollectionError>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Value,
{
    fold(collection, step, seed, Direction::Backward)
}

/// Like [`reduce`], with a dynamic function invoked as
/// `step(memo, value, key, collection)`.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] for an empty collection without
/// a seed.
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::fold::reduce_with;
/// use underbar::value::{Function, Value};
///
/// let keys = Function::new(|_, arguments| {
///     Value::from(format!("{}{}", arguments[0], arguments[2]))
/// });
/// let folded = reduce_with(&object! { "a" => 1, "b" => 2 }, &keys, Some(Value::from(""))).unwrap();
/// assert_eq!(folded, Value::from("ab"));
/// ```
pub fn reduce_with(
    collection: &Value,
    step: &Function,
    seed: Option<Value>,
) -> Result<Value, CollectionError> {
    fold(collection, dynamic_step(step), seed, Direction::Forward)
}

/// Like [`reduce_right`], with a dynamic function invoked as
/// `step(memo, value, key, collection)`.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] for an empty collection without
/// a seed.
pub fn reduce_right_with(
    collection: &Value,
    step: &Function,
    seed: Option<Value>,
) -> Result<Value, CollectionError> {
    fold(collection, dynamic_step(step), seed, Direction::Backward)
}

fn dynamic_step(step: &Function) -> impl FnMut(Value, &Value, &Key, &Value) -> Value + '_ {
    move |memo, value, key, collection| {
        step.invoke(&[memo, value.clone(), key.to_value(), collection.clone()])
    }
}
