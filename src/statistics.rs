//! Descriptive statistics over collections.
//!
//! Every function accepts `(collection, iteratee)`: elements are first
//! mapped through the resolved iteratee, then numerically coerced where
//! arithmetic is needed. A numeric property spec applied to a collection of
//! scalars is treated as identity, as in [`max`].
//!
//! Degenerate input yields neutral results rather than errors: the sum and
//! mean of nothing are `0`, the median of nothing is `undefined`. The only
//! errors are asking for the mode of nothing and passing a non-numeric
//! percentile.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array;
//! use underbar::iteratee::IterateeSpec;
//! use underbar::statistics::{mean, median, standard_deviation, variance};
//! use underbar::value::Value;
//!
//! let data = array![0, 1, 2, 3, 4];
//! assert_eq!(mean(&data, IterateeSpec::Identity), 2.0);
//! assert_eq!(median(&data, IterateeSpec::Identity), Value::from(2));
//! assert_eq!(variance(&data, IterateeSpec::Identity), 2.0);
//! assert_eq!(standard_deviation(&data, IterateeSpec::Identity), std::f64::consts::SQRT_2);
//! ```

use crate::collection::{map, size, sort_by};
use crate::error::CollectionError;
use crate::extremum::{guard, max, min};
use crate::fold::reduce;
use crate::iteratee::IterateeSpec;
use crate::value::Value;

fn mapped(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    map(collection, guard(collection, iteratee.into()))
}

fn sorted(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    sort_by(&Value::array(mapped(collection, iteratee)), IterateeSpec::Identity)
}

fn total(numbers: Vec<Value>) -> f64 {
    reduce(
        &Value::array(numbers),
        |memo, value, _, _| Value::from(memo.to_number() + value.to_number()),
        Some(Value::from(0)),
    )
    .map_or(0.0, |sum| sum.to_number())
}

#[allow(clippy::cast_precision_loss)]
fn count(collection: &Value) -> f64 {
    size(collection) as f64
}

/// Returns the sum of the mapped values; `0` for an empty collection.
///
/// Values that do not coerce to numbers make the sum `NaN`.
pub fn sum(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    total(mapped(collection, iteratee))
}

/// Returns the arithmetic mean of the mapped values; `0` for an empty
/// collection.
///
/// The divisor is [`size`], so a pseudo-array with a fractional `length`
/// divides by that length rounded up, the same count of elements the sum
/// visits.
pub fn mean(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    if size(collection) == 0 {
        return 0.0;
    }
    sum(collection, iteratee) / count(collection)
}

/// Returns the middle of the naturally sorted mapped values.
///
/// For an even count the two middle values are averaged when both are
/// numbers; otherwise the lower one is returned. An empty collection has
/// an `undefined` median.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::statistics::median;
/// use underbar::value::Value;
///
/// assert_eq!(median(&array![4, 1, 3, 2], IterateeSpec::Identity), Value::from(2.5));
/// assert_eq!(median(&array!["b", "a", "d", "c"], IterateeSpec::Identity), Value::from("b"));
/// assert!(median(&array![], IterateeSpec::Identity).is_undefined());
/// ```
pub fn median(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Value {
    let values = sorted(collection, iteratee);
    let middle = values.len() / 2;
    if values.len() % 2 == 1 {
        return values[middle].clone();
    }
    match (middle.checked_sub(1).and_then(|lower| values.get(lower)), values.get(middle)) {
        (Some(Value::Number(lower)), Some(Value::Number(upper))) => Value::from((lower + upper) / 2.0),
        (Some(lower), _) => lower.clone(),
        _ => Value::Undefined,
    }
}

/// Returns the most frequent mapped value.
///
/// The mapped values are sorted, and the value of the longest run of
/// strictly equal neighbours wins; among runs of equal length the first
/// wins.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyMode`] for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::statistics::mode;
/// use underbar::value::Value;
///
/// assert_eq!(mode(&array![3, 1, 3, 2, 1, 3], IterateeSpec::Identity), Ok(Value::from(3)));
/// assert_eq!(mode(&array![2, 1], IterateeSpec::Identity), Ok(Value::from(1)));
/// ```
pub fn mode(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Result<Value, CollectionError> {
    longest_run(sorted(collection, iteratee))
}

/// Like [`mode`] for collections whose mapped values are already sorted;
/// runs are counted in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyMode`] for an empty collection.
pub fn mode_sorted(
    collection: &Value,
    iteratee: impl Into<IterateeSpec>,
) -> Result<Value, CollectionError> {
    longest_run(mapped(collection, iteratee))
}

fn longest_run(values: Vec<Value>) -> Result<Value, CollectionError> {
    let mut values = values.into_iter();
    let first = values.next().ok_or(CollectionError::EmptyMode)?;
    let mut best = (first.clone(), 1_usize);
    let mut current = (first, 1_usize);
    for value in values {
        if value.strict_equals(&current.0) {
            current.1 += 1;
            continue;
        }
        if current.1 > best.1 {
            best = current;
        }
        current = (value, 1);
    }
    Ok(if current.1 > best.1 { current.0 } else { best.0 })
}

/// Returns the population variance of the mapped values; `0` for an empty
/// collection.
pub fn variance(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    let numbers = mapped(collection, iteratee);
    if numbers.is_empty() {
        return 0.0;
    }
    let numbers = Value::array(numbers);
    let average = mean(&numbers, IterateeSpec::Identity);
    mean(
        &numbers,
        IterateeSpec::unary(move |value| {
            let difference = value.to_number() - average;
            Value::from(difference * difference)
        }),
    )
}

/// Returns the square root of [`variance`].
pub fn standard_deviation(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    variance(collection, iteratee).sqrt()
}

/// Returns `sqrt(variance / (count - 1))`; `0` for an empty collection.
///
/// A single element divides by zero and yields `NaN`.
pub fn standard_error(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    if size(collection) == 0 {
        return 0.0;
    }
    (variance(collection, iteratee) / (count(collection) - 1.0)).sqrt()
}

/// Returns the distance between the numeric [`max`] and [`min`] of the
/// mapped values.
///
/// An empty collection yields `-Infinity - Infinity`, i.e. `-Infinity`.
pub fn stat_range(collection: &Value, iteratee: impl Into<IterateeSpec>) -> f64 {
    let numbers = Value::array(mapped(collection, iteratee));
    max(&numbers, IterateeSpec::Identity).to_number()
        - min(&numbers, IterateeSpec::Identity).to_number()
}

/// Returns the `rank`-th percentile of the naturally sorted values.
///
/// `rank <= 0` selects the smallest value and `rank >= 100` the largest;
/// ranks in between interpolate linearly at position
/// `rank / 100 * (count - 1)`. An empty collection yields `0`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidPercentile`] when `rank` is not a
/// number, or is `NaN`.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::statistics::percentile;
/// use underbar::value::Value;
///
/// let data = array![4, 0, 3, 1, 2];
/// assert_eq!(percentile(&data, 75), Ok(Value::from(3)));
/// assert_eq!(percentile(&data, 10), Ok(Value::from(0.4)));
/// assert_eq!(percentile(&data, 100), Ok(Value::from(4)));
/// assert!(percentile(&data, "half").is_err());
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn percentile(collection: &Value, rank: impl Into<Value>) -> Result<Value, CollectionError> {
    let values = sorted(collection, IterateeSpec::Identity);
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return Ok(Value::from(0));
    };
    let rank = rank.into();
    let rank = match rank.as_number() {
        Some(number) if !number.is_nan() => number,
        _ => {
            return Err(CollectionError::InvalidPercentile {
                found: rank.type_name(),
            });
        }
    };
    if rank <= 0.0 {
        return Ok(first.clone());
    }
    if rank >= 100.0 {
        return Ok(last.clone());
    }
    let position = rank / 100.0 * (values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let weight = position.fract();
    Ok(match (values.get(lower), values.get(lower + 1)) {
        (Some(below), Some(above)) => {
            Value::from(below.to_number().mul_add(1.0 - weight, above.to_number() * weight))
        }
        (Some(below), None) => below.clone(),
        _ => Value::Undefined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn test_mean_divides_by_rounded_up_length() {
        let pseudo = object! { "0" => 1, "1" => 2, "length" => 1.5 };
        assert!((mean(&pseudo, IterateeSpec::Identity) - 1.5).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(array![1, 2, 3], 6.0)]
    #[case(array![], 0.0)]
    #[case(array!["1", true, Value::Null], 2.0)]
    #[case(object! { "a" => 1.5, "b" => 2.5 }, 4.0)]
    fn test_sum(#[case] collection: Value, #[case] expected: f64) {
        assert!((sum(&collection, IterateeSpec::Identity) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_sum_with_property() {
        let items = array![object! { "price" => 2 }, object! { "price" => 3 }];
        assert!((sum(&items, "price") - 5.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_sum_of_text_is_nan() {
        assert!(sum(&array!["a", 1], IterateeSpec::Identity).is_nan());
    }

    #[rstest]
    fn test_mean_of_empty_is_zero() {
        assert!(mean(&Value::Null, IterateeSpec::Identity).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_median_mixed_middle_returns_lower() {
        assert_eq!(median(&array![1, "x"], IterateeSpec::Identity), Value::from(1));
    }

    #[rstest]
    fn test_mode_first_run_wins_ties() {
        assert_eq!(mode(&array!["b", "a", "b", "a"], IterateeSpec::Identity), Ok(Value::from("a")));
        assert_eq!(mode(&array![7], IterateeSpec::Identity), Ok(Value::from(7)));
        assert_eq!(mode(&array![], IterateeSpec::Identity), Err(CollectionError::EmptyMode));
    }

    #[rstest]
    fn test_mode_sorted_uses_traversal_order() {
        assert_eq!(mode_sorted(&array![2, 1, 1, 2], IterateeSpec::Identity), Ok(Value::from(1)));
    }

    #[rstest]
    fn test_standard_error() {
        assert!(standard_error(&array![], IterateeSpec::Identity).abs() < f64::EPSILON);
        assert!(standard_error(&array![5], IterateeSpec::Identity).is_nan());
        let error = standard_error(&array![0, 1, 2, 3, 4], IterateeSpec::Identity);
        assert!((error - (2.0_f64 / 4.0).sqrt()).abs() < 1e-12);
    }

    #[rstest]
    fn test_stat_range() {
        assert!((stat_range(&array![3, 9, 1], IterateeSpec::Identity) - 8.0).abs() < f64::EPSILON);
        assert_eq!(stat_range(&array![], IterateeSpec::Identity), f64::NEG_INFINITY);
    }

    #[rstest]
    fn test_variance_guard_treats_index_as_identity() {
        assert!((variance(&array![0, 1, 2, 3, 4], 0_usize) - 2.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_percentile_rejects_nan() {
        assert_eq!(
            percentile(&array![1], f64::NAN),
            Err(CollectionError::InvalidPercentile { found: "number" })
        );
        assert_eq!(percentile(&array![], "x"), Ok(Value::from(0)));
    }

    #[rstest]
    fn test_percentile_boundaries_use_sorted_values() {
        assert_eq!(percentile(&array![9, 1, 5], -5), Ok(Value::from(1)));
        assert_eq!(percentile(&array![9, 1, 5], 250), Ok(Value::from(9)));
    }
}
