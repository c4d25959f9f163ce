//! Function adapters over dynamic [`Function`](crate::value::Function)
//! values.
//!
//! # Overview
//!
//! - [`partial`] / [`partial!`]: pre-fill arguments, leaving
//!   [`Placeholder`] slots open
//! - [`negate`]: invert the truthiness of a predicate
//!
//! # Partial Application
//!
//! ```text
//! partial(f, [a, _])(b, c) = f(a, b, c)
//! ```
//!
//! Placeholders are filled from the call arguments left to right; leftover
//! call arguments are appended.
//!
//! ```
//! use underbar::partial;
//! use underbar::value::{Function, Value};
//!
//! let subtract = Function::binary(|left, right| Value::from(left.to_number() - right.to_number()));
//! let from_ten = partial!(subtract, 10, __);
//! assert_eq!(from_ten.invoke(&[Value::from(3)]), Value::from(7));
//! ```
//!
//! # Laws
//!
//! - **Double negation**: `negate(negate(p))` agrees with the truthiness of `p`
//! - **Empty partial**: `partial(f, [])` behaves like `f`

mod application;
mod partial_macro;
mod utils;

pub use application::{PartialArgument, partial};
pub use utils::{PLACEHOLDER, Placeholder, negate};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::partial;
