//! Callback normalisation.
//!
//! Every higher-order operation accepts its callback as an
//! [`IterateeSpec`], a closed description of what to compute for each
//! element, and turns it into an [`Iteratee`] exactly once through
//! [`IterateeSpec::resolve`].
//!
//! | Spec | Computes |
//! |------|----------|
//! | [`IterateeSpec::Identity`] | the element itself |
//! | [`IterateeSpec::Callable`] | `function.call(context, [value, key, collection])` |
//! | [`IterateeSpec::Property`] | the property (or nested property path) of the element |
//! | [`IterateeSpec::Matcher`] | whether the element contains every given key/value pair |
//!
//! Dynamic values are classified by `IterateeSpec::from(Value)`:
//! `null`/`undefined` select identity, functions are called, plain objects
//! become matchers, and anything else (strings, numbers, arrays of keys) is
//! a property path.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{array, object};
//! use underbar::collection::map;
//! use underbar::iteratee::IterateeSpec;
//! use underbar::value::Value;
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "larry", "age" => 50 },
//! ];
//!
//! assert_eq!(map(&stooges, "name"), vec![Value::from("moe"), Value::from("larry")]);
//! assert_eq!(
//!     map(&stooges, object! { "age" => 50 }),
//!     vec![Value::from(false), Value::from(true)]
//! );
//! assert_eq!(map(&array![1, 2], Value::Null), vec![Value::from(1), Value::from(2)]);
//! ```

mod path;

use std::fmt;

use smallvec::smallvec;

use crate::collection::keys;
use crate::value::{Function, Key, Object, Path, ReferenceCounter, ThreadSafety, Value};

pub use path::{deep_get, is_match, matcher, property, property_path, set};

pub(crate) use path::matches_object;

// =============================================================================
// IterateeSpec
// =============================================================================

/// A description of the per-element computation of a higher-order
/// operation.
#[derive(Clone, Debug, Default)]
pub enum IterateeSpec {
    /// Returns the element unchanged.
    #[default]
    Identity,
    /// Invokes a dynamic function with `(value, key, collection)`.
    Callable {
        /// The function to call.
        function: Function,
        /// The receiver; `undefined` when absent.
        context: Option<Value>,
    },
    /// Reads a property, or a nested property for paths longer than one key.
    Property(Path),
    /// Tests whether the element contains every key/value pair.
    Matcher(Object),
}

impl IterateeSpec {
    /// Wraps a native closure over the element as a callable spec.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::iteratee::IterateeSpec;
    /// use underbar::value::Value;
    ///
    /// let square = IterateeSpec::unary(|value| Value::from(value.to_number().powi(2))).resolve();
    /// assert_eq!(square.apply(&Value::from(3)), Value::from(9));
    /// ```
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(&Value) -> Value + ThreadSafety + 'static,
    {
        Self::Callable {
            function: Function::unary(body),
            context: None,
        }
    }

    /// Builds a matcher from the own keys of `attributes`.
    ///
    /// Values without keys produce an empty matcher, which accepts
    /// everything.
    pub fn matcher(attributes: &Value) -> Self {
        let mut object = Object::default();
        for name in keys(attributes) {
            let value = attributes.property(&Key::Name(name.clone()));
            object.insert(name, value);
        }
        Self::Matcher(object)
    }

    /// Fixes the receiver of a callable spec; other specs are unchanged.
    #[must_use]
    pub fn with_context(self, context: Value) -> Self {
        match self {
            Self::Callable { function, .. } => Self::Callable {
                function,
                context: Some(context),
            },
            other => other,
        }
    }

    /// Turns the description into a callable [`Iteratee`].
    pub fn resolve(self) -> Iteratee {
        match self {
            Self::Identity => Iteratee::identity(),
            Self::Callable { function, context } => {
                let receiver = context.unwrap_or_default();
                Iteratee::new(move |value, key, collection| {
                    function.call(&receiver, &[value.clone(), key.clone(), collection.clone()])
                })
            }
            Self::Property(path) => property_path(path),
            Self::Matcher(attributes) => {
                Iteratee::new(move |value, _, _| Value::from(matches_object(value, &attributes)))
            }
        }
    }
}

impl From<Value> for IterateeSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => Self::Identity,
            Value::Function(function) => Self::Callable {
                function,
                context: None,
            },
            Value::Object(object) => Self::Matcher((*object).clone()),
            Value::Array(elements) => Self::Property(elements.iter().map(Key::from_value).collect()),
            other => Self::Property(smallvec![Key::from_value(&other)]),
        }
    }
}

impl From<&Value> for IterateeSpec {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<Function> for IterateeSpec {
    fn from(function: Function) -> Self {
        Self::Callable {
            function,
            context: None,
        }
    }
}

impl From<Key> for IterateeSpec {
    fn from(key: Key) -> Self {
        Self::Property(smallvec![key])
    }
}

impl From<&str> for IterateeSpec {
    fn from(name: &str) -> Self {
        Self::from(Key::from(name))
    }
}

impl From<String> for IterateeSpec {
    fn from(name: String) -> Self {
        Self::from(Key::from(name))
    }
}

impl From<usize> for IterateeSpec {
    fn from(index: usize) -> Self {
        Self::from(Key::Index(index))
    }
}

impl From<Path> for IterateeSpec {
    fn from(path: Path) -> Self {
        Self::Property(path)
    }
}

impl From<Vec<&str>> for IterateeSpec {
    fn from(path: Vec<&str>) -> Self {
        Self::Property(path.into_iter().map(Key::from).collect())
    }
}

impl From<Object> for IterateeSpec {
    fn from(attributes: Object) -> Self {
        Self::Matcher(attributes)
    }
}

impl<T: Into<Self>> From<Option<T>> for IterateeSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map_or(Self::Identity, Into::into)
    }
}

// =============================================================================
// Iteratee
// =============================================================================

#[cfg(feature = "arc")]
type Callback = dyn Fn(&Value, &Value, &Value) -> Value + Send + Sync;

#[cfg(not(feature = "arc"))]
type Callback = dyn Fn(&Value, &Value, &Value) -> Value;

/// A resolved per-element callback.
///
/// Cloning is cheap: the callback is reference counted.
#[derive(Clone)]
pub struct Iteratee {
    callback: ReferenceCounter<Callback>,
    identity: bool,
}

impl Iteratee {
    /// Wraps a callback receiving `(value, key, collection)`, with the key
    /// already converted to a value.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> Value + ThreadSafety + 'static,
    {
        let callback: ReferenceCounter<Callback> = ReferenceCounter::new(callback);
        Self {
            callback,
            identity: false,
        }
    }

    /// The iteratee that returns each element unchanged.
    pub fn identity() -> Self {
        let callback: ReferenceCounter<Callback> =
            ReferenceCounter::new(|value: &Value, _: &Value, _: &Value| value.clone());
        Self {
            callback,
            identity: true,
        }
    }

    /// Returns `true` for [`Iteratee::identity`], letting callers skip the
    /// call entirely.
    pub const fn is_identity(&self) -> bool {
        self.identity
    }

    /// Invokes the callback for one visited element.
    pub fn call(&self, value: &Value, key: &Key, collection: &Value) -> Value {
        if self.identity {
            return value.clone();
        }
        (self.callback)(value, &key.to_value(), collection)
    }

    /// Invokes the callback with a key that is already a value.
    pub fn call_with(&self, value: &Value, key: &Value, collection: &Value) -> Value {
        (self.callback)(value, key, collection)
    }

    /// Invokes the callback outside of any traversal: key and collection are
    /// `undefined`.
    pub fn apply(&self, value: &Value) -> Value {
        self.call_with(value, &Value::Undefined, &Value::Undefined)
    }
}

impl fmt::Debug for Iteratee {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iteratee")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
