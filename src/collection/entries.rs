//! A positional view over any collection.
//!
//! [`Entries`] performs the single shape dispatch every traversal needs and
//! then exposes the collection as `len()` positions, each with a key and a
//! value. Array-likes map positions to indices; map-likes map positions to
//! their ordered keys.

use crate::value::{Key, MAX_INDEX, Object, Value};

use super::shape::ordered_keys;

pub(crate) enum Entries<'a> {
    Slice(&'a [Value]),
    Characters(Vec<Value>),
    Indexed { object: &'a Object, length: usize },
    Keyed { object: &'a Object, keys: Vec<String> },
    Empty,
}

impl<'a> Entries<'a> {
    pub(crate) fn of(collection: &'a Value) -> Self {
        match collection {
            Value::Array(elements) => Self::Slice(elements),
            Value::String(text) => Self::Characters(text.chars().map(Value::from).collect()),
            Value::Object(object) => match array_like_length(collection) {
                Some(length) => Self::Indexed { object, length },
                None => Self::Keyed {
                    object,
                    keys: ordered_keys(object),
                },
            },
            _ => Self::Empty,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Slice(elements) => elements.len(),
            Self::Characters(characters) => characters.len(),
            Self::Indexed { length, .. } => *length,
            Self::Keyed { keys, .. } => keys.len(),
            Self::Empty => 0,
        }
    }

    pub(crate) const fn is_array_like(&self) -> bool {
        matches!(
            self,
            Self::Slice(_) | Self::Characters(_) | Self::Indexed { .. }
        )
    }

    pub(crate) fn value(&self, position: usize) -> Value {
        match self {
            Self::Slice(elements) => elements.get(position).cloned().unwrap_or_default(),
            Self::Characters(characters) => characters.get(position).cloned().unwrap_or_default(),
            Self::Indexed { object, .. } => object
                .get(position.to_string().as_str())
                .cloned()
                .unwrap_or_default(),
            Self::Keyed { object, keys } => keys
                .get(position)
                .and_then(|key| object.get(key))
                .cloned()
                .unwrap_or_default(),
            Self::Empty => Value::Undefined,
        }
    }

    pub(crate) fn key(&self, position: usize) -> Key {
        match self {
            Self::Keyed { keys, .. } => keys
                .get(position)
                .map_or(Key::Index(position), |key| Key::Name(key.clone())),
            _ => Key::Index(position),
        }
    }
}

/// Returns the element count of an array-like, or `None` for anything else.
///
/// Objects qualify when their `"length"` property is a number within
/// `0..=MAX_INDEX`; a fractional length covers every index below it.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn array_like_length(collection: &Value) -> Option<usize> {
    match collection {
        Value::Array(elements) => Some(elements.len()),
        Value::String(text) => Some(text.chars().count()),
        Value::Object(object) => match object.get("length") {
            Some(Value::Number(length)) if (0.0..=MAX_INDEX as f64).contains(length) => {
                Some(length.ceil() as usize)
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn test_entries_of_array() {
        let collection = array![10, 20];
        let entries = Entries::of(&collection);
        assert!(entries.is_array_like());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.value(1), Value::from(20));
        assert_eq!(entries.key(1), Key::Index(1));
        assert!(entries.value(2).is_undefined());
    }

    #[rstest]
    fn test_entries_of_sparse_pseudo_array() {
        let collection = object! { "0" => "a", "2" => "c", "length" => 3 };
        let entries = Entries::of(&collection);
        assert!(entries.is_array_like());
        assert_eq!(entries.len(), 3);
        assert!(entries.value(1).is_undefined());
        assert_eq!(entries.value(2), Value::from("c"));
    }

    #[rstest]
    fn test_entries_of_object_orders_integer_keys_first() {
        let collection = object! { "b" => 1, "10" => 2, "a" => 3, "2" => 4 };
        let entries = Entries::of(&collection);
        assert!(!entries.is_array_like());
        let keys: Vec<Key> = (0..entries.len()).map(|position| entries.key(position)).collect();
        assert_eq!(
            keys,
            vec![Key::from("2"), Key::from("10"), Key::from("b"), Key::from("a")]
        );
    }

    #[rstest]
    #[case(object! { "length" => -1 }, None)]
    #[case(object! { "length" => "3" }, None)]
    #[case(object! { "length" => 2.5 }, Some(3))]
    #[case(Value::from("abc"), Some(3))]
    #[case(Value::Null, None)]
    fn test_array_like_length(#[case] collection: Value, #[case] expected: Option<usize>) {
        assert_eq!(array_like_length(&collection), expected);
    }
}
