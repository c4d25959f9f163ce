//! The `partial!` macro.

/// Partially applies a dynamic [`Function`](crate::value::Function).
///
/// Use `__` (double underscore) for slots left open; every other argument is
/// converted with `Value::from` and fixed. Expands to a call to
/// [`partial`](crate::compose::partial).
///
/// **Important**: `__` is matched as a literal token and is not an item of
/// this crate.
///
/// # Examples
///
/// ```
/// use underbar::partial;
/// use underbar::value::{Function, Value};
///
/// let divide = Function::binary(|left, right| Value::from(left.to_number() / right.to_number()));
///
/// let half = partial!(divide, __, 2);
/// assert_eq!(half.invoke(&[Value::from(10)]), Value::from(5));
///
/// let reciprocal = partial!(divide, 1);
/// assert_eq!(reciprocal.invoke(&[Value::from(4)]), Value::from(0.25));
/// ```
#[macro_export]
macro_rules! partial {
    (@collect $function:expr; [$($collected:expr),*];) => {
        $crate::compose::partial(&$function, ::std::vec![$($collected),*])
    };
    (@collect $function:expr; [$($collected:expr),*]; __ $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @collect $function;
            [$($collected,)* $crate::compose::PartialArgument::Placeholder];
            $($($rest)*)?
        )
    };
    (@collect $function:expr; [$($collected:expr),*]; $argument:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @collect $function;
            [$($collected,)* $crate::compose::PartialArgument::Bound($crate::value::Value::from($argument))];
            $($($rest)*)?
        )
    };
    ($function:expr $(, $($arguments:tt)*)?) => {
        $crate::partial!(@collect $function; []; $($($arguments)*)?)
    };
}

#[cfg(test)]
mod tests {
    use crate::value::{Function, Value};
    use rstest::rstest;

    fn concatenate() -> Function {
        Function::new(|_, arguments| {
            Value::from(arguments.iter().map(Value::to_key_string).collect::<String>())
        })
    }

    #[rstest]
    fn test_partial_with_leading_placeholder() {
        let function = concatenate();
        let suffixed = partial!(function, __, "!");
        assert_eq!(suffixed.invoke(&[Value::from("hi")]), Value::from("hi!"));
    }

    #[rstest]
    fn test_partial_with_trailing_comma() {
        let function = concatenate();
        let prefixed = partial!(function, "a", __,);
        assert_eq!(prefixed.invoke(&[Value::from("b"), Value::from("c")]), Value::from("abc"));
    }

    #[rstest]
    fn test_partial_without_arguments() {
        let function = concatenate();
        let same = partial!(function);
        assert_eq!(same.invoke(&[Value::from(1), Value::from(2)]), Value::from("12"));
    }
}
