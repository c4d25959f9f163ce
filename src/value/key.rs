//! Keys reported to callbacks and used for property lookup.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::{MAX_INDEX, Value};

/// The position of an element inside a collection.
///
/// Array-likes report [`Key::Index`]; map-likes report [`Key::Name`].
/// Lookups accept either form on either shape: `Key::Index(1)` finds the
/// `"1"` entry of an object, and `Key::from("1")` finds the second element of
/// an array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A zero-based position.
    Index(usize),
    /// A property name.
    Name(String),
}

/// A pre-split property path used for nested lookups.
pub type Path = SmallVec<[Key; 4]>;

impl Key {
    /// Converts the key into the value handed to dynamic callbacks.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Index(index) => Value::from(*index),
            Self::Name(name) => Value::string(name),
        }
    }

    /// Builds a key from a dynamic value.
    ///
    /// Non-negative integral numbers become indices; everything else becomes a
    /// name through string coercion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::{Key, Value};
    ///
    /// assert_eq!(Key::from_value(&Value::from(2)), Key::Index(2));
    /// assert_eq!(Key::from_value(&Value::from(1.5)), Key::from("1.5"));
    /// assert_eq!(Key::from_value(&Value::from("name")), Key::from("name"));
    /// ```
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(number)
                if *number >= 0.0 && number.fract() == 0.0 && *number <= MAX_INDEX as f64 =>
            {
                Self::Index(*number as usize)
            }
            other => Self::Name(other.to_key_string()),
        }
    }

    /// Returns the key as a property name.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Self::Index(index) => Cow::Owned(index.to_string()),
            Self::Name(name) => Cow::Borrowed(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Parses a canonical array index (`"0"`, `"17"`, but not `"01"` or `"+1"`).
pub(crate) fn canonical_index(name: &str) -> Option<usize> {
    let index = name.parse::<usize>().ok()?;
    (index.to_string() == name).then_some(index)
}
