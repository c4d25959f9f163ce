//! The natural ordering used for sorting.

use std::cmp::Ordering;

use super::Value;

/// Compares two values under the natural ordering.
///
/// The ordering is total, so it can drive `slice::sort_by` safely even on
/// mixed input:
///
/// 1. Numbers, booleans and `null` (compared numerically, `NaN` last)
/// 2. Strings (compared lexically)
/// 3. Arrays, objects and functions (compared by their string form)
/// 4. `undefined`
///
/// On homogeneous numeric or string input this agrees with `<`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use underbar::value::{Value, natural_cmp};
///
/// assert_eq!(natural_cmp(&Value::from(2), &Value::from(10)), Ordering::Less);
/// assert_eq!(natural_cmp(&Value::from("10"), &Value::from("2")), Ordering::Less);
/// assert_eq!(natural_cmp(&Value::Undefined, &Value::from(1)), Ordering::Greater);
/// assert_eq!(natural_cmp(&Value::from(f64::NAN), &Value::from(1)), Ordering::Greater);
/// ```
pub fn natural_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = class_rank(left).cmp(&class_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }
    match (left, right) {
        (Value::Undefined, Value::Undefined) => Ordering::Equal,
        (Value::String(left), Value::String(right)) => left.cmp(right),
        (left, right) if class_rank(left) == NUMERIC => {
            compare_numbers(left.to_number(), right.to_number())
        }
        (left, right) => left.to_key_string().cmp(&right.to_key_string()),
    }
}

const NUMERIC: u8 = 0;

const fn class_rank(value: &Value) -> u8 {
    match value {
        Value::Null | Value::Boolean(_) | Value::Number(_) => NUMERIC,
        Value::String(_) => 1,
        Value::Array(_) | Value::Object(_) | Value::Function(_) => 2,
        Value::Undefined => 3,
    }
}

fn compare_numbers(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(1), Value::from(2), Ordering::Less)]
    #[case(Value::from(-0.0), Value::from(0.0), Ordering::Equal)]
    #[case(Value::from(true), Value::from(1), Ordering::Equal)]
    #[case(Value::Null, Value::from(-1), Ordering::Greater)]
    #[case(Value::from(100), Value::from("1"), Ordering::Less)]
    #[case(Value::from("b"), Value::from("a"), Ordering::Greater)]
    #[case(array![1], Value::from("z"), Ordering::Greater)]
    #[case(Value::Undefined, array![1], Ordering::Greater)]
    fn test_natural_cmp(#[case] left: Value, #[case] right: Value, #[case] expected: Ordering) {
        assert_eq!(natural_cmp(&left, &right), expected);
        assert_eq!(natural_cmp(&right, &left), expected.reverse());
    }

    #[rstest]
    fn test_sorting_mixed_values_is_stable() {
        let mut values = vec![
            Value::Undefined,
            Value::from("b"),
            Value::from(3),
            Value::from(f64::NAN),
            Value::from("a"),
            Value::from(1),
        ];
        values.sort_by(natural_cmp);
        assert_eq!(
            values,
            vec![
                Value::from(1),
                Value::from(3),
                Value::from(f64::NAN),
                Value::from("a"),
                Value::from("b"),
                Value::Undefined,
            ]
        );
    }
}
