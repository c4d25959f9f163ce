//! The placeholder sentinel and predicate negation.

use crate::iteratee::{Iteratee, IterateeSpec};
use crate::value::Value;

/// Marks an argument slot left open by [`partial`](super::partial).
///
/// The [`partial!`](crate::partial) macro accepts the literal token `__` in
/// its place.
///
/// # Examples
///
/// ```
/// use underbar::compose::{PLACEHOLDER, PartialArgument, partial};
/// use underbar::value::{Function, Value};
///
/// let subtract = Function::binary(|left, right| Value::from(left.to_number() - right.to_number()));
/// let minus_five = partial(&subtract, vec![PLACEHOLDER.into(), Value::from(5).into()]);
/// assert_eq!(minus_five.invoke(&[Value::from(20)]), Value::from(15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder value for [`partial`](super::partial).
pub const PLACEHOLDER: Placeholder = Placeholder;

/// Returns an iteratee whose result is the logical negation of the given
/// predicate's result.
///
/// # Examples
///
/// ```
/// use underbar::array;
/// use underbar::compose::negate;
/// use underbar::iteratee::IterateeSpec;
/// use underbar::value::Value;
///
/// let is_odd = negate(IterateeSpec::unary(|value| Value::from(value.to_number() % 2.0 == 0.0)));
/// assert_eq!(is_odd.apply(&Value::from(3)), Value::from(true));
/// assert_eq!(is_odd.apply(&Value::from(4)), Value::from(false));
/// ```
pub fn negate(predicate: impl Into<IterateeSpec>) -> Iteratee {
    let predicate = predicate.into().resolve();
    Iteratee::new(move |value, key, collection| {
        Value::from(!predicate.call_with(value, key, collection).is_truthy())
    })
}
