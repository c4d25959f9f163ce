//! Callable values.
//!
//! A [`Function`] receives a receiver (`this`) and a slice of arguments and
//! returns a [`Value`]. Missing arguments read as `undefined`, so a function
//! written for one argument can be used wherever three are passed.

use std::fmt;

use super::{ReferenceCounter, Value};

/// Marker for the thread-safety requirements placed on function bodies.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise it is
/// implemented for every type.
#[cfg(feature = "arc")]
pub trait ThreadSafety: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync> ThreadSafety for T {}

/// Marker for the thread-safety requirements placed on function bodies.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise it is
/// implemented for every type.
#[cfg(not(feature = "arc"))]
pub trait ThreadSafety {}

#[cfg(not(feature = "arc"))]
impl<T> ThreadSafety for T {}

#[cfg(feature = "arc")]
type Body = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

#[cfg(not(feature = "arc"))]
type Body = dyn Fn(&Value, &[Value]) -> Value;

/// A reference-counted callable value.
///
/// # Examples
///
/// ```rust
/// use underbar::value::{Function, Value};
///
/// let add = Function::binary(|left, right| Value::from(left.to_number() + right.to_number()));
/// assert_eq!(add.invoke(&[Value::from(2), Value::from(3)]), Value::from(5));
///
/// // Missing arguments are undefined.
/// assert!(add.invoke(&[Value::from(2)]).is_nan());
/// ```
#[derive(Clone)]
pub struct Function {
    body: ReferenceCounter<Body>,
}

impl Function {
    /// Creates a function from a body taking the receiver and the arguments.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + ThreadSafety + 'static,
    {
        let body: ReferenceCounter<Body> = ReferenceCounter::new(body);
        Self { body }
    }

    /// Creates a function that only looks at its first argument.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(&Value) -> Value + ThreadSafety + 'static,
    {
        Self::new(move |_, arguments| body(arguments.first().unwrap_or(&Value::Undefined)))
    }

    /// Creates a function that only looks at its first two arguments.
    pub fn binary<F>(body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + ThreadSafety + 'static,
    {
        Self::new(move |_, arguments| {
            let undefined = Value::Undefined;
            body(
                arguments.first().unwrap_or(&undefined),
                arguments.get(1).unwrap_or(&undefined),
            )
        })
    }

    /// Calls the function with an explicit receiver.
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Value {
        (self.body)(receiver, arguments)
    }

    /// Calls the function with an `undefined` receiver.
    pub fn invoke(&self, arguments: &[Value]) -> Value {
        self.call(&Value::Undefined, arguments)
    }

    /// Returns a function whose receiver is fixed to `receiver`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::object;
    /// use underbar::value::{Function, Key, Value};
    ///
    /// let read_scale = Function::new(|receiver, _| receiver.property(&Key::from("scale")));
    /// let bound = read_scale.bind(object! { "scale" => 3 });
    /// assert_eq!(bound.invoke(&[]), Value::from(3));
    /// ```
    #[must_use]
    pub fn bind(&self, receiver: Value) -> Self {
        let function = self.clone();
        Self::new(move |_, arguments| function.call(&receiver, arguments))
    }

    /// Returns `true` when both handles point at the same body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function")
    }
}
