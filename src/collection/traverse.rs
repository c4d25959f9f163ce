//! The linear traversal primitive and the operations derived from it.

use smallvec::smallvec;

use crate::compose::negate;
use crate::iteratee::{Iteratee, IterateeSpec};
use crate::search::{SearchMode, find, index_of, scan};
use crate::iteratee::deep_get;
use crate::value::{Function, Key, Object, Path, Value};

use super::shape::{is_array_like, keys, to_array};
use super::{Direction, Entries};

/// Walks `collection` in `direction` until `predicate` returns `true`.
///
/// Returns the key and value the walk stopped at, or `None` when every
/// element was visited.
pub(crate) fn walk<P>(collection: &Value, direction: Direction, mut predicate: P) -> Option<(Key, Value)>
where
    P: FnMut(&Value, &Key, &Value) -> bool,
{
    let entries = Entries::of(collection);
    scan(&entries, direction, None, |value, key| predicate(value, key, collection))
        .map(|position| (entries.key(position), entries.value(position)))
}

/// Calls `visit(value, key, collection)` for every element and returns the
/// collection.
///
/// Array-likes are visited by ascending index and map-likes in
/// [`keys`](super::keys) order. `null` and `undefined` are visited zero
/// times.
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::collection::each;
///
/// let mut names = Vec::new();
/// each(&object! { "one" => 1, "two" => 2 }, |_, key, _| names.push(key.to_string()));
/// assert_eq!(names, vec!["one", "two"]);
/// ```
pub fn each<F>(collection: &Value, mut visit: F) -> &Value
where
    F: FnMut(&Value, &Key, &Value),
{
    walk(collection, Direction::Forward, |value, key, collection| {
        visit(value, key, collection);
        false
    });
    collection
}

/// Like [`each`], visiting elements in strictly reverse order.
pub fn each_right<F>(collection: &Value, mut visit: F) -> &Value
where
    F: FnMut(&Value, &Key, &Value),
{
    walk(collection, Direction::Backward, |value, key, collection| {
        visit(value, key, collection);
        false
    });
    collection
}

/// Returns the results of applying the iteratee to each element.
pub fn map(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Vec<Value> {
    let iteratee = iteratee.into().resolve();
    let mut results = Vec::new();
    each(collection, |value, key, collection| {
        results.push(iteratee.call(value, key, collection));
    });
    results
}

/// Returns every element for which the predicate is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::filter;
/// use underbar::value::Value;
///
/// let stooges = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "larry", "age" => 50 },
/// ];
/// let older = filter(&stooges, object! { "age" => 50 });
/// assert_eq!(older, vec![object! { "name" => "larry", "age" => 50 }]);
/// ```
pub fn filter(collection: &Value, predicate: impl Into<IterateeSpec>) -> Vec<Value> {
    select(collection, &predicate.into().resolve())
}

/// Returns every element for which the predicate is falsy.
pub fn reject(collection: &Value, predicate: impl Into<IterateeSpec>) -> Vec<Value> {
    select(collection, &negate(predicate))
}

fn select(collection: &Value, predicate: &Iteratee) -> Vec<Value> {
    let mut results = Vec::new();
    each(collection, |value, key, collection| {
        if predicate.call(value, key, collection).is_truthy() {
            results.push(value.clone());
        }
    });
    results
}

/// Returns `true` when the predicate is truthy for any element.
///
/// Stops at the first match; later elements are never visited.
pub fn some(collection: &Value, predicate: impl Into<IterateeSpec>) -> bool {
    any(collection, &predicate.into().resolve())
}

/// Returns `true` when the predicate is truthy for every element.
///
/// Stops at the first failure; an empty collection passes.
pub fn every(collection: &Value, predicate: impl Into<IterateeSpec>) -> bool {
    !any(collection, &negate(predicate))
}

fn any(collection: &Value, predicate: &Iteratee) -> bool {
    walk(collection, Direction::Forward, |value, key, collection| {
        predicate.call(value, key, collection).is_truthy()
    })
    .is_some()
}

/// Returns `true` when `item` is strictly equal to some element.
///
/// Map-likes are searched through their values. `from_index` may be negative
/// to count from the end.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::contains;
/// use underbar::value::Value;
///
/// assert!(contains(&array![1, 2, 3], &Value::from(3), None));
/// assert!(!contains(&array![1, 2, 3], &Value::from(1), Some(1)));
/// assert!(contains(&object! { "a" => "x" }, &Value::from("x"), None));
/// assert!(contains(&array![f64::NAN], &Value::from(f64::NAN), None));
/// ```
pub fn contains(collection: &Value, item: &Value, from_index: Option<isize>) -> bool {
    let mode = SearchMode::StartAt(from_index.unwrap_or(0));
    if is_array_like(collection) {
        index_of(collection, item, mode).is_some()
    } else {
        index_of(&Value::array(to_array(collection)), item, mode).is_some()
    }
}

/// Extracts one property from every element.
pub fn pluck(collection: &Value, key: impl Into<Key>) -> Vec<Value> {
    map(collection, IterateeSpec::Property(smallvec![key.into()]))
}

/// Returns the elements that contain every key/value pair of `attributes`.
pub fn where_(collection: &Value, attributes: &Value) -> Vec<Value> {
    filter(collection, IterateeSpec::matcher(attributes))
}

/// Returns the first element that contains every key/value pair of
/// `attributes`, or `undefined`.
pub fn find_where(collection: &Value, attributes: &Value) -> Value {
    find(collection, IterateeSpec::matcher(attributes))
}

/// Like [`map`], keeping the keys of the collection.
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::collection::map_object;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::value::Value;
///
/// let scaled = map_object(
///     &object! { "start" => 5, "end" => 12 },
///     IterateeSpec::unary(|value| Value::from(value.to_number() + 5.0)),
/// );
/// assert_eq!(Value::object(scaled), object! { "start" => 10, "end" => 17 });
/// ```
pub fn map_object(collection: &Value, iteratee: impl Into<IterateeSpec>) -> Object {
    let iteratee = iteratee.into().resolve();
    let mut results = Object::default();
    for name in keys(collection) {
        let key = Key::Name(name.clone());
        let value = collection.property(&key);
        results.insert(name, iteratee.call(&value, &key, collection));
    }
    results
}

/// What [`invoke`] calls on each element.
#[derive(Clone, Debug)]
pub enum Method {
    /// Called with the element as receiver.
    Function(Function),
    /// Looked up on the element; every key but the last selects the receiver.
    Path(Path),
}

impl From<Function> for Method {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Path> for Method {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        Self::Path(smallvec![Key::from(name)])
    }
}

/// Calls `method` on every element with `arguments` and collects the results.
///
/// A path whose receiver is `null` or `undefined` yields `undefined`. A
/// missing method yields the missing value itself (`null` or `undefined`),
/// and a method that is present but not callable yields `undefined`.
///
/// # Examples
///
/// ```rust
/// use underbar::{array, object};
/// use underbar::collection::invoke;
/// use underbar::value::{Function, Value};
///
/// let greet = Function::new(|receiver, arguments| {
///     Value::from(format!("{}{}", arguments[0], receiver.property(&"name".into())))
/// });
/// let people = array![object! { "name" => "moe", "greet" => greet }];
/// assert_eq!(invoke(&people, "greet", &[Value::from("hi ")]), vec![Value::from("hi moe")]);
/// ```
pub fn invoke(collection: &Value, method: impl Into<Method>, arguments: &[Value]) -> Vec<Value> {
    let method = method.into();
    let mut results = Vec::new();
    each(collection, |element, _, _| {
        results.push(invoke_one(element, &method, arguments));
    });
    results
}

fn invoke_one(element: &Value, method: &Method, arguments: &[Value]) -> Value {
    let (receiver, name) = match method {
        Method::Function(function) => return function.call(element, arguments),
        Method::Path(path) => match path.split_last() {
            Some((name, [])) => (element.clone(), name),
            Some((name, parents)) => (deep_get(element, parents), name),
            None => return Value::Undefined,
        },
    };
    if receiver.is_nullish() {
        return Value::Undefined;
    }
    match receiver.property(name) {
        Value::Function(function) => function.call(&receiver, arguments),
        missing @ (Value::Null | Value::Undefined) => missing,
        _ => Value::Undefined,
    }
}
