//! Shape probing, traversal and sorting over dynamic collections.
//!
//! Every operation in this crate starts here. A collection is any
//! [`Value`](crate::value::Value):
//!
//! - **Array-likes** (arrays, strings, and objects with a numeric `length`)
//!   are visited by ascending index.
//! - **Map-likes** (every other object) are visited by [`keys`] order.
//! - `null`, `undefined` and scalars behave as empty collections.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array;
//! use underbar::collection::{each, map};
//! use underbar::iteratee::IterateeSpec;
//! use underbar::value::Value;
//!
//! let mut seen = Vec::new();
//! each(&array![1, 2, 3], |value, _, _| seen.push(value.clone()));
//! assert_eq!(seen.len(), 3);
//!
//! let doubled = map(&array![1, 2, 3], IterateeSpec::unary(|value| Value::from(value.to_number() * 2.0)));
//! assert_eq!(doubled, vec![Value::from(2), Value::from(4), Value::from(6)]);
//! ```

mod array;
mod entries;
mod shape;
mod sort;
mod traverse;

pub(crate) use entries::Entries;

pub use array::{chunk, first, first_n, flatten, intersection, last, last_n, times, unzip};
pub use shape::{Shape, is_array_like, keys, shape, size, to_array, values};
pub use sort::{sort_by, uniq};
pub use traverse::{
    Method, contains, each, each_right, every, filter, find_where, invoke, map, map_object, pluck,
    reject, some, where_,
};

pub(crate) use traverse::walk;

/// Traversal direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending index / key order.
    #[default]
    Forward,
    /// Descending index / reverse key order.
    Backward,
}

impl Direction {
    pub(crate) const fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}
