//! Partial application of dynamic functions.

use crate::value::{Function, Value};

use super::utils::Placeholder;

/// One pre-filled argument slot.
#[derive(Clone, Debug, PartialEq)]
pub enum PartialArgument {
    /// A fixed argument.
    Bound(Value),
    /// A slot filled from the call arguments.
    Placeholder,
}

impl From<Value> for PartialArgument {
    fn from(value: Value) -> Self {
        Self::Bound(value)
    }
}

impl From<Placeholder> for PartialArgument {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

/// Pre-fills some arguments of `function`.
///
/// When the returned function is called, placeholder slots are filled from
/// the call arguments left to right, and call arguments left over are
/// appended. Placeholders with no call argument left receive `undefined`.
/// The receiver is passed through unchanged.
///
/// # Examples
///
/// ```
/// use underbar::compose::{PartialArgument, partial};
/// use underbar::value::{Function, Value};
///
/// let join = Function::new(|_, arguments| {
///     Value::from(arguments.iter().map(Value::to_key_string).collect::<Vec<_>>().join("-"))
/// });
/// let framed = partial(
///     &join,
///     vec![Value::from("a").into(), PartialArgument::Placeholder, Value::from("c").into()],
/// );
/// assert_eq!(framed.invoke(&[Value::from("b"), Value::from("d")]), Value::from("a-b-c-d"));
/// ```
pub fn partial(function: &Function, bound: Vec<PartialArgument>) -> Function {
    let function = function.clone();
    Function::new(move |receiver, arguments| {
        let mut remaining = arguments.iter();
        let mut filled: Vec<Value> = bound
            .iter()
            .map(|slot| match slot {
                PartialArgument::Bound(value) => value.clone(),
                PartialArgument::Placeholder => remaining.next().cloned().unwrap_or_default(),
            })
            .collect();
        filled.extend(remaining.cloned());
        function.call(receiver, &filled)
    })
}
