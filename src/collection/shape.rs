//! Shape probing and the basic views derived from it.

use crate::value::{Key, Object, Value, canonical_index};

use super::entries::{Entries, array_like_length};

/// The two ways a collection can be traversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Ordered, index-addressed elements with the given length.
    ArrayLike(usize),
    /// A bag of named properties, enumerated by [`keys`].
    MapLike,
}

/// Determines how `collection` will be traversed.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::{Shape, shape};
/// use underbar::value::Value;
///
/// assert_eq!(shape(&array![1, 2]), Shape::ArrayLike(2));
/// assert_eq!(shape(&object! { "length" => 4 }), Shape::ArrayLike(4));
/// assert_eq!(shape(&object! { "a" => 1 }), Shape::MapLike);
/// assert_eq!(shape(&Value::Null), Shape::MapLike);
/// ```
pub fn shape(collection: &Value) -> Shape {
    array_like_length(collection).map_or(Shape::MapLike, Shape::ArrayLike)
}

/// Returns `true` when `collection` has a usable numeric length.
///
/// Functions, `null` and `undefined` are never array-like.
pub fn is_array_like(collection: &Value) -> bool {
    array_like_length(collection).is_some()
}

/// Returns the number of elements: the length of an array-like, the number
/// of keys of a map-like, and `0` for anything else.
pub fn size(collection: &Value) -> usize {
    Entries::of(collection).len()
}

/// Returns the own enumerable keys of `collection`.
///
/// Arrays report their indices as strings. Objects report integer-index keys
/// in ascending numeric order first, then the remaining keys in insertion
/// order. Every other value has no keys.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::keys;
///
/// assert_eq!(keys(&array!["a", "b"]), vec!["0", "1"]);
/// assert_eq!(keys(&object! { "z" => 1, "1" => 2, "0" => 3 }), vec!["0", "1", "z"]);
/// ```
pub fn keys(collection: &Value) -> Vec<String> {
    match collection {
        Value::Array(elements) => (0..elements.len()).map(|index| index.to_string()).collect(),
        Value::Object(object) => ordered_keys(object),
        _ => Vec::new(),
    }
}

/// Returns the values of `collection` in [`keys`] order.
pub fn values(collection: &Value) -> Vec<Value> {
    keys(collection)
        .into_iter()
        .map(|key| collection.property(&Key::Name(key)))
        .collect()
}

/// Copies any collection into a plain vector.
///
/// Array-likes keep their element order (strings split into characters);
/// map-likes contribute their [`values`].
pub fn to_array(collection: &Value) -> Vec<Value> {
    let entries = Entries::of(collection);
    if entries.is_array_like() {
        (0..entries.len()).map(|position| entries.value(position)).collect()
    } else {
        values(collection)
    }
}

const MAX_ORDERED_INDEX: usize = u32::MAX as usize - 1;

pub(crate) fn ordered_keys(object: &Object) -> Vec<String> {
    let mut indices = Vec::new();
    let mut names = Vec::new();
    for key in object.keys() {
        match canonical_index(key) {
            Some(index) if index <= MAX_ORDERED_INDEX => indices.push((index, key)),
            _ => names.push(key),
        }
    }
    if indices.is_empty() {
        return names.into_iter().cloned().collect();
    }
    indices.sort_unstable_by_key(|(index, _)| *index);
    indices
        .into_iter()
        .map(|(_, key)| key)
        .chain(names)
        .cloned()
        .collect()
}
