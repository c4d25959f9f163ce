//! # underbar
//!
//! Uniform iteration, searching, grouping and statistics over dynamically
//! shaped collections.
//!
//! ## Overview
//!
//! Every operation accepts any [`Value`](value::Value) as its collection and
//! behaves the same way whatever its shape:
//!
//! - **Array-likes**: arrays, strings, and objects carrying a numeric
//!   `length` (arguments-like pseudo-arrays), visited by ascending index
//! - **Map-likes**: every other object, visited by key
//! - **Nothing**: `null`, `undefined` and scalars act as empty collections
//!
//! Callbacks are given as an [`IterateeSpec`](iteratee::IterateeSpec): the
//! identity, a function, a property name or path, or an attribute matcher.
//!
//! - **Traversal**: `each`, `map`, `filter`, `some`, `every`, ... ([`collection`])
//! - **Positions**: `first`, `last`, `chunk`, `flatten`, `unzip`, ... ([`collection`])
//! - **Search**: `find`, `find_index`, `index_of`, `sorted_index`, ... ([`search`])
//! - **Folds**: `reduce`, `reduce_right` ([`fold`])
//! - **Grouping**: `group_by`, `count_by`, `index_by`, `partition` ([`group`])
//! - **Extremes**: `max`, `min` ([`extremum`])
//! - **Statistics**: `sum`, `mean`, `median`, `mode`, `variance`,
//!   `percentile`, ... (`statistics`)
//! - **Chaining**: `chain(value).filter(..).map(..).value()` (`chain`)
//!
//! ## Feature Flags
//!
//! - `statistics` (default): descriptive statistics
//! - `chain` (default): the fluent chain wrapper
//! - `arc`: share values through `Arc` instead of `Rc`, making them
//!   `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for `Value`
//! - `fxhash` / `ahash`: alternative hashers for object properties
//! - `full`: `statistics`, `chain` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//! use underbar::{array, object};
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "larry", "age" => 50 },
//!     object! { "name" => "curly", "age" => 60 },
//! ];
//!
//! assert_eq!(pluck(&stooges, "name").len(), 3);
//! assert_eq!(max(&stooges, "age"), object! { "name" => "curly", "age" => 60 });
//! assert_eq!(find_index(&stooges, object! { "name" => "larry" }), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation together with the value model.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::compose::*;
    pub use crate::error::*;
    pub use crate::extremum::*;
    pub use crate::fold::*;
    pub use crate::group::*;
    pub use crate::iteratee::*;
    pub use crate::search::*;
    pub use crate::value::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

pub mod collection;
pub mod compose;
pub mod error;
pub mod extremum;
pub mod fold;
pub mod group;
pub mod iteratee;
pub mod search;
pub mod value;

#[cfg(feature = "statistics")]
pub mod statistics;

#[cfg(feature = "chain")]
pub mod chain;
