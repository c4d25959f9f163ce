//! Literal construction macros for [`Value`](super::Value).

/// Builds an array [`Value`](crate::value::Value) from a list of expressions.
///
/// Each element is converted with `Value::from`.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::value::Value;
///
/// let values = array![1, "two", array![3]];
/// assert_eq!(values.length(), Some(3.0));
/// assert_eq!(array![], Value::array(Vec::new()));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::array(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::array(::std::vec![$($crate::value::Value::from($element)),+])
    };
}

/// Builds an object [`Value`](crate::value::Value) from `key => value` pairs.
///
/// Keys are converted with `String::from`, values with `Value::from`.
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::value::{Key, Value};
///
/// let stooge = object! { "name" => "curly", "age" => 60 };
/// assert_eq!(stooge.property(&Key::from("name")), Value::from("curly"));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Value::object($crate::value::Object::default())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::value::Object::default();
        $(
            object.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        $crate::value::Value::object(object)
    }};
}
