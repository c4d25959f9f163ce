//! Property accessors and attribute matchers.

use crate::value::{Key, Object, Path, ReferenceCounter, Value, canonical_index};

use super::{Iteratee, IterateeSpec};

/// Follows `path` through nested properties of `value`.
///
/// Returns `undefined` as soon as an intermediate value is `null` or
/// `undefined`, and for an empty path.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::iteratee::deep_get;
/// use underbar::value::{Key, Value};
///
/// let tree = object! { "a" => object! { "b" => array![1, 2] } };
/// let path = [Key::from("a"), Key::from("b"), Key::Index(1)];
/// assert_eq!(deep_get(&tree, &path), Value::from(2));
/// assert!(deep_get(&tree, &[Key::from("x"), Key::from("y")]).is_undefined());
/// assert!(deep_get(&tree, &[]).is_undefined());
/// ```
pub fn deep_get(value: &Value, path: &[Key]) -> Value {
    if path.is_empty() {
        return Value::Undefined;
    }
    let mut current = value.clone();
    for key in path {
        if current.is_nullish() {
            return Value::Undefined;
        }
        current = current.property(key);
    }
    current
}

/// Returns a copy of `value` with the property at `path` replaced by
/// `replacement`.
///
/// Missing or non-container intermediates are created: an array when the
/// following key is an index, an object otherwise. Existing arrays and
/// objects along the path are kept. Writing past the end of an array pads it
/// with `undefined`.
///
/// `value` is returned unchanged when it is not an array or object, when
/// `path` is empty, or when a name that is not an index addresses an array.
/// Untouched branches stay shared with `value`.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::iteratee::{deep_get, set};
/// use underbar::value::{Key, Value};
///
/// let path = [Key::from("a"), Key::Index(1), Key::from("b")];
/// let updated = set(&object! {}, &path, Value::from(7));
/// assert_eq!(deep_get(&updated, &path), Value::from(7));
/// assert_eq!(updated, object! { "a" => array![Value::Undefined, object! { "b" => 7 }] });
///
/// assert_eq!(set(&Value::from(1), &path, Value::Null), Value::from(1));
/// ```
pub fn set(value: &Value, path: &[Key], replacement: Value) -> Value {
    let Some((last, parents)) = path.split_last() else {
        return value.clone();
    };
    if !matches!(value, Value::Array(_) | Value::Object(_)) {
        return value.clone();
    }
    let mut root = value.clone();
    let mut cursor = &mut root;
    for (position, key) in parents.iter().enumerate() {
        let Some(slot) = slot_mut(cursor, key) else {
            return value.clone();
        };
        if !matches!(slot, Value::Array(_) | Value::Object(_)) {
            *slot = match path.get(position + 1) {
                Some(Key::Index(_)) => Value::array(Vec::new()),
                _ => Value::object(Object::default()),
            };
        }
        cursor = slot;
    }
    match slot_mut(cursor, last) {
        Some(slot) => *slot = replacement,
        None => return value.clone(),
    }
    root
}

/// Returns a mutable slot for `key` inside an array or object, unsharing the
/// container first.
fn slot_mut<'a>(container: &'a mut Value, key: &Key) -> Option<&'a mut Value> {
    match container {
        Value::Array(elements) => {
            let index = match key {
                Key::Index(index) => *index,
                Key::Name(name) => canonical_index(name)?,
            };
            let elements = ReferenceCounter::make_mut(elements);
            if index >= elements.len() {
                elements.resize(index.checked_add(1)?, Value::Undefined);
            }
            elements.get_mut(index)
        }
        Value::Object(object) => Some(
            ReferenceCounter::make_mut(object)
                .entry(key.as_name().into_owned())
                .or_default(),
        ),
        _ => None,
    }
}

/// Returns an iteratee reading a single property of each element.
pub fn property(key: impl Into<Key>) -> Iteratee {
    let key = key.into();
    Iteratee::new(move |value, _, _| value.property(&key))
}

/// Returns an iteratee reading a nested property of each element.
pub fn property_path(path: impl Into<Path>) -> Iteratee {
    let path = path.into();
    if let [key] = path.as_slice() {
        return property(key.clone());
    }
    Iteratee::new(move |value, _, _| deep_get(value, &path))
}

/// Returns an iteratee answering whether each element contains every
/// key/value pair of `attributes`.
pub fn matcher(attributes: &Value) -> Iteratee {
    IterateeSpec::matcher(attributes).resolve()
}

/// Returns `true` when every own key of `attributes` is present on `value`
/// with a strictly equal value.
///
/// Empty attributes match anything, including `null`.
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::iteratee::is_match;
/// use underbar::value::Value;
///
/// let moe = object! { "name" => "moe", "age" => 32 };
/// assert!(is_match(&moe, &object! { "age" => 32 }));
/// assert!(!is_match(&moe, &object! { "hair" => Value::Undefined }));
/// assert!(is_match(&Value::Null, &object! {}));
/// assert!(!is_match(&Value::Null, &object! { "age" => 32 }));
/// ```
pub fn is_match(value: &Value, attributes: &Value) -> bool {
    match IterateeSpec::matcher(attributes) {
        IterateeSpec::Matcher(attributes) => matches_object(value, &attributes),
        _ => false,
    }
}

pub(crate) fn matches_object(value: &Value, attributes: &Object) -> bool {
    if attributes.is_empty() {
        return true;
    }
    if value.is_nullish() {
        return false;
    }
    attributes.iter().all(|(name, expected)| {
        let key = Key::Name(name.clone());
        value.has_property(&key) && value.property(&key).strict_equals(expected)
    })
}
