//! The extremum algorithm behind `max` and `min`.
//!
//! [`extremum`] is a single fold carrying two accumulators: the raw element
//! and its mapped value. The first element seeds both; afterwards an element
//! replaces both when its mapped value is more extreme than the current one.
//! The final pair is passed through a `decide` adapter, which lets
//! [`max`] and [`min`] force a numeric answer.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{array, object};
//! use underbar::extremum::{max, min};
//! use underbar::iteratee::IterateeSpec;
//! use underbar::value::Value;
//!
//! assert_eq!(max(&array![10, 5, 100, 2, 1000], IterateeSpec::Identity), Value::from(1000));
//! assert_eq!(min(&array![10, 5, 100, 2, 1000], IterateeSpec::Identity), Value::from(2));
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "curly", "age" => 60 },
//! ];
//! assert_eq!(max(&stooges, "age"), object! { "name" => "curly", "age" => 60 });
//!
//! assert_eq!(max(&array![], IterateeSpec::Identity), Value::from(f64::NEG_INFINITY));
//! ```

use crate::collection::{Direction, walk};
use crate::iteratee::IterateeSpec;
use crate::value::{Key, Value};

/// Finds the element whose mapped value is most extreme.
///
/// `is_more_extreme(candidate, current)` compares mapped values. `decide`
/// receives the final `(raw, mapped)` pair, which is
/// `(undefined, undefined)` for an empty collection.
pub fn extremum<C, D>(
    collection: &Value,
    is_more_extreme: C,
    iteratee: impl Into<IterateeSpec>,
    decide: D,
) -> Value
where
    C: Fn(&Value, &Value) -> bool,
    D: FnOnce(Value, Value) -> Value,
{
    let spec = guard(collection, iteratee.into());
    let iteratee = spec.resolve();
    let mut best: Option<(Value, Value)> = None;
    walk(collection, Direction::Forward, |value, key, collection| {
        let mapped = iteratee.call(value, key, collection);
        if best
            .as_ref()
            .is_none_or(|(_, current)| is_more_extreme(&mapped, current))
        {
            best = Some((value.clone(), mapped));
        }
        false
    });
    let (raw, mapped) = best.unwrap_or_default();
    decide(raw, mapped)
}

/// Treats a numeric property spec as identity when the first element is not
/// an object.
///
/// This keeps `max`/`min` usable as a callback of `map`, where the element
/// index arrives in the iteratee position.
pub(crate) fn guard(collection: &Value, spec: IterateeSpec) -> IterateeSpec {
    match &spec {
        IterateeSpec::Property(path)
            if matches!(path.as_slice(), [Key::Index(_)])
                && !collection.property(&Key::Index(0)).is_object_type() =>
        {
            IterateeSpec::Identity
        }
        _ => spec,
    }
}

/// Returns the element with the largest mapped value.
///
/// Null, undefined and `NaN` mapped values are displaced by anything.
/// When no element maps to a number, returns `-Infinity`.
pub fn max(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Value {
    extremum(
        collection,
        |candidate, current| {
            current.is_nullish()
                || current.to_number().is_nan()
                || (!candidate.is_nullish() && candidate.to_number() > current.to_number())
        },
        iteratee,
        decide_numeric(f64::NEG_INFINITY),
    )
}

/// Returns the element with the smallest mapped value.
///
/// Null, undefined and `NaN` mapped values are displaced by anything.
/// When no element maps to a number, returns `Infinity`.
pub fn min(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Value {
    extremum(
        collection,
        |candidate, current| {
            current.is_nullish()
                || current.to_number().is_nan()
                || (!candidate.is_nullish() && candidate.to_number() < current.to_number())
        },
        iteratee,
        decide_numeric(f64::INFINITY),
    )
}

fn decide_numeric(fallback: f64) -> impl FnOnce(Value, Value) -> Value {
    move |raw, mapped| {
        if mapped.to_number().is_nan() {
            Value::from(fallback)
        } else {
            raw
        }
    }
}
