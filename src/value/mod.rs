//! Dynamic values shared by every collection operation.
//!
//! Collections in this crate are dynamically shaped: the same operation has
//! to accept a sequence, a string, a key/value bag, or an "arguments"-like
//! object that merely carries a `length` property. [`Value`] models all of
//! them with a single enum, together with the coercion rules the operations
//! rely on:
//!
//! - [`Value::to_number`]: numeric coercion (`+value`)
//! - [`Value::is_truthy`]: boolean coercion
//! - [`Value::to_key_string`]: string coercion, used for group keys
//! - [`Value::strict_equals`]: strict (`===`) equality
//! - [`Value::loose_less_than`] / [`Value::loose_less_equal`]: relational
//!   comparison
//! - [`natural_cmp`]: a total order used for sorting
//!
//! Arrays, objects and strings are reference counted, so cloning a `Value`
//! never copies its contents. Strict equality on arrays, objects and
//! functions compares identity; `PartialEq` compares structure.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{array, object};
//! use underbar::value::Value;
//!
//! let numbers = array![1, 2, 3];
//! assert_eq!(numbers.length(), Some(3.0));
//!
//! let person = object! { "name" => "moe", "age" => 40 };
//! assert_eq!(person.property(&"age".into()), Value::from(40));
//!
//! assert_eq!(Value::from("42").to_number(), 42.0);
//! assert!(Value::from(f64::NAN).to_number().is_nan());
//! ```

mod function;
mod key;
mod macros;
mod ordering;
#[cfg(feature = "serde")]
mod serialization;

use std::fmt;

use indexmap::IndexMap;

pub use function::{Function, ThreadSafety};
pub use key::{Key, Path};
pub use ordering::natural_cmp;

pub(crate) use key::canonical_index;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which makes [`Value`] `Send + Sync`.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Object Type
// =============================================================================

/// Hasher used by [`Object`].
#[cfg(feature = "fxhash")]
pub type ObjectHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`Object`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type ObjectHasher = ahash::RandomState;

/// Hasher used by [`Object`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type ObjectHasher = std::collections::hash_map::RandomState;

/// A string-keyed property bag.
///
/// The map remembers insertion order. Traversal does not use the raw
/// insertion order directly: integer-index keys (`"0"`, `"1"`, ...) are
/// enumerated first in ascending numeric order, followed by every other key
/// in insertion order. See [`crate::collection::keys`].
///
/// Always build objects with `Object::default()`, which works for every
/// hasher selected through the crate features.
pub type Object = IndexMap<String, Value, ObjectHasher>;

/// Largest length an array-like may report (`2^53 - 1`).
pub const MAX_INDEX: u64 = (1 << 53) - 1;

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed value.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::value::Value;
///
/// let values = array![1, "two", true, Value::Null];
/// assert_eq!(values.to_key_string(), "1,two,true,");
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(ReferenceCounter<str>),
    /// An ordered sequence.
    Array(ReferenceCounter<Vec<Self>>),
    /// A key/value bag.
    Object(ReferenceCounter<Object>),
    /// A callable value.
    Function(Function),
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Value: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    /// Creates an array value.
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(ReferenceCounter::new(elements))
    }

    /// Creates an object value.
    pub fn object(object: Object) -> Self {
        Self::Object(ReferenceCounter::new(object))
    }

    /// Creates a string value.
    pub fn string(text: impl AsRef<str>) -> Self {
        Self::String(ReferenceCounter::from(text.as_ref()))
    }

    /// Returns the name of the value's type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for `undefined`.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `undefined` and `null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` for numbers, including `NaN`.
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for the `NaN` number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(number) if number.is_nan())
    }

    /// Returns `true` for callable values.
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns `true` where `typeof value == "object"` would hold:
    /// `null`, arrays and objects.
    pub const fn is_object_type(&self) -> bool {
        matches!(self, Self::Null | Self::Array(_) | Self::Object(_))
    }

    /// Returns the number if this is a number.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the map if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function if this is callable.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the value's `length` property when it is a number.
    ///
    /// Arrays report their element count, strings their character count and
    /// objects whatever number is stored under `"length"`.
    #[allow(clippy::cast_precision_loss)]
    pub fn length(&self) -> Option<f64> {
        match self {
            Self::Array(elements) => Some(elements.len() as f64),
            Self::String(text) => Some(text.chars().count() as f64),
            Self::Object(object) => object.get("length").and_then(Self::as_number),
            _ => None,
        }
    }

    /// Looks up a single property, returning `undefined` when it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{array, object};
    /// use underbar::value::{Key, Value};
    ///
    /// let list = array![10, 20];
    /// assert_eq!(list.property(&Key::Index(1)), Value::from(20));
    /// assert_eq!(list.property(&Key::from("length")), Value::from(2));
    /// assert!(list.property(&Key::Index(5)).is_undefined());
    ///
    /// let pseudo = object! { "0" => "a", "length" => 1 };
    /// assert_eq!(pseudo.property(&Key::Index(0)), Value::from("a"));
    /// ```
    pub fn property(&self, key: &Key) -> Self {
        match (self, key) {
            (Self::Array(elements), Key::Index(index)) => {
                elements.get(*index).cloned().unwrap_or_default()
            }
            (Self::Array(elements), Key::Name(name)) => {
                if name == "length" {
                    Self::from(elements.len())
                } else {
                    canonical_index(name)
                        .and_then(|index| elements.get(index).cloned())
                        .unwrap_or_default()
                }
            }
            (Self::String(text), Key::Index(index)) => {
                text.chars().nth(*index).map(Self::from).unwrap_or_default()
            }
            (Self::String(text), Key::Name(name)) => {
                if name == "length" {
                    Self::from(text.chars().count())
                } else {
                    canonical_index(name)
                        .and_then(|index| text.chars().nth(index))
                        .map(Self::from)
                        .unwrap_or_default()
                }
            }
            (Self::Object(object), key) => object.get(&*key.as_name()).cloned().unwrap_or_default(),
            _ => Self::Undefined,
        }
    }

    /// Returns `true` when the property exists (`key in value`).
    pub fn has_property(&self, key: &Key) -> bool {
        match (self, key) {
            (Self::Array(elements), Key::Index(index)) => *index < elements.len(),
            (Self::Array(elements), Key::Name(name)) => {
                name == "length" || canonical_index(name).is_some_and(|index| index < elements.len())
            }
            (Self::String(text), key) => match key {
                Key::Index(index) => *index < text.chars().count(),
                Key::Name(name) => {
                    name == "length"
                        || canonical_index(name).is_some_and(|index| index < text.chars().count())
                }
            },
            (Self::Object(object), key) => object.contains_key(&*key.as_name()),
            _ => false,
        }
    }

    /// Boolean coercion.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and the empty string are
    /// falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Numeric coercion (`+value`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::array;
    /// use underbar::value::Value;
    ///
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert_eq!(Value::from(true).to_number(), 1.0);
    /// assert_eq!(Value::from(" 12.5 ").to_number(), 12.5);
    /// assert_eq!(Value::from("").to_number(), 0.0);
    /// assert_eq!(array![7].to_number(), 7.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// assert!(Value::from("abc").to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Object(_) | Self::Function(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Boolean(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Array(_) => parse_number(&self.to_key_string()),
        }
    }

    /// String coercion (`String(value)`).
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Boolean(flag) => flag.to_string(),
            Self::Number(number) => format_number(*number),
            Self::String(text) => text.to_string(),
            Self::Array(elements) => elements
                .iter()
                .map(|element| {
                    if element.is_nullish() {
                        String::new()
                    } else {
                        element.to_key_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => "[object Object]".to_owned(),
            Self::Function(_) => "function".to_owned(),
        }
    }

    /// Strict equality (`===`).
    ///
    /// Primitives compare by value (`NaN` is never equal to itself and
    /// `0 === -0`); arrays, objects and functions compare by identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::array;
    /// use underbar::value::Value;
    ///
    /// assert!(Value::from(1).strict_equals(&Value::from(1.0)));
    /// assert!(!Value::from(1).strict_equals(&Value::from("1")));
    /// assert!(!Value::from(f64::NAN).strict_equals(&Value::from(f64::NAN)));
    ///
    /// let list = array![1];
    /// assert!(list.strict_equals(&list.clone()));
    /// assert!(!list.strict_equals(&array![1]));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Object(left), Self::Object(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Relational comparison (`self < other`).
    ///
    /// Two strings compare lexically; any other pair compares numerically.
    /// Comparisons involving `NaN` are `false`.
    pub fn loose_less_than(&self, other: &Self) -> bool {
        matches!(self.relate(other), Some(std::cmp::Ordering::Less))
    }

    /// Relational comparison (`self <= other`).
    pub fn loose_less_equal(&self, other: &Self) -> bool {
        matches!(
            self.relate(other),
            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        )
    }

    fn relate(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = self.to_primitive();
        let right = other.to_primitive();
        if let (Self::String(left), Self::String(right)) = (&left, &right) {
            return Some(left.cmp(right));
        }
        left.to_number().partial_cmp(&right.to_number())
    }

    fn to_primitive(&self) -> Self {
        match self {
            Self::Array(_) | Self::Object(_) | Self::Function(_) => Self::string(self.to_key_string()),
            primitive => primitive.clone(),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        #[allow(clippy::cast_precision_loss)]
        return u64::from_str_radix(&trimmed[2..], radix).map_or(f64::NAN, |number| number as f64);
    }
    // Rust accepts spellings such as "inf" and "nan" that are not numbers here.
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.contains("inf") || lowered.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number the way `Number.prototype.toString` does: the shortest
/// digits that round-trip, positional inside `1e-6..1e21`, exponential
/// outside it.
#[allow(clippy::float_cmp)]
fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if number == 0.0 {
        return "0".to_owned();
    }
    let scientific = format!("{number:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return number.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return number.to_string();
    };
    let magnitude = number.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return if exponent < 0 {
            scientific
        } else {
            format!("{mantissa}e+{exponent}")
        };
    }
    let (sign, mantissa) = mantissa
        .strip_prefix('-')
        .map_or(("", mantissa), |unsigned| ("-", unsigned));
    let digits = mantissa.replace('.', "");
    // Digits before the decimal point; zero or negative for magnitudes below 1.
    let integral = exponent + 1;
    match usize::try_from(integral) {
        Ok(integral) if integral >= digits.len() => {
            format!("{sign}{digits}{}", "0".repeat(integral - digits.len()))
        }
        Ok(integral) if integral > 0 => {
            format!("{sign}{}.{}", &digits[..integral], &digits[integral..])
        }
        _ => format!("{sign}0.{}{digits}", "0".repeat(integral.unsigned_abs() as usize)),
    }
}

// =============================================================================
// Equality and Display
// =============================================================================

impl PartialEq for Value {
    /// Structural equality.
    ///
    /// Unlike [`Value::strict_equals`], arrays and objects compare by content
    /// and `NaN` equals `NaN`. Functions still compare by identity.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => {
                left == right || (left.is_nan() && right.is_nan())
            }
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_key_string())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        let mut buffer = [0; 4];
        Self::string(character.encode_utf8(&mut buffer))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::string(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(ReferenceCounter::from(text))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        key.to_value()
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::array(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<V: Into<Self>> From<IndexMap<String, V, ObjectHasher>> for Value {
    fn from(map: IndexMap<String, V, ObjectHasher>) -> Self {
        Self::object(map.into_iter().map(|(key, value)| (key, value.into())).collect())
    }
}

impl<L: Into<Self>, R: Into<Self>> From<(L, R)> for Value {
    fn from((left, right): (L, R)) -> Self {
        Self::array(vec![left.into(), right.into()])
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::array(iterator.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
