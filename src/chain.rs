//! Fluent chaining over the collection operations.
//!
//! [`chain`] wraps a value; every method applies the operation of the same
//! name to the wrapped value and wraps the result again, until
//! [`Chain::value`] unwraps it. Operations that can fail return
//! `Result<Chain, CollectionError>` so `?` composes with the chain.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{array, object};
//! use underbar::chain::chain;
//! use underbar::value::Value;
//!
//! let stooges = array![
//!     object! { "name" => "curly", "age" => 25 },
//!     object! { "name" => "moe", "age" => 21 },
//!     object! { "name" => "larry", "age" => 23 },
//! ];
//! let youngest = chain(stooges).sort_by("age").pluck("name").value();
//! assert_eq!(youngest, array!["moe", "larry", "curly"]);
//! ```

use crate::collection::{
    Method, chunk, contains, each, every, filter, find_where, first, flatten, invoke, keys, last,
    map, map_object, pluck, reject, size, some, sort_by, to_array, uniq, values, where_,
};
use crate::error::CollectionError;
use crate::extremum::{max, min};
use crate::fold::{reduce, reduce_right};
use crate::group::{count_by, group_by, index_by, partition};
use crate::iteratee::IterateeSpec;
use crate::search::find;
use crate::value::{Key, Value};

/// A wrapped value awaiting further operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    wrapped: Value,
}

/// Starts a chain.
pub fn chain(value: impl Into<Value>) -> Chain {
    Chain {
        wrapped: value.into(),
    }
}

impl Chain {
    fn wrap(value: impl Into<Value>) -> Self {
        chain(value)
    }

    /// Ends the chain, returning the wrapped value.
    pub fn value(self) -> Value {
        self.wrapped
    }

    /// Borrows the wrapped value.
    pub const fn as_value(&self) -> &Value {
        &self.wrapped
    }

    /// Visits every element and keeps the same wrapped value.
    #[must_use]
    pub fn each<F>(self, visit: F) -> Self
    where
        F: FnMut(&Value, &Key, &Value),
    {
        each(&self.wrapped, visit);
        self
    }

    /// See [`map`].
    #[must_use]
    pub fn map(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(map(&self.wrapped, iteratee))
    }

    /// See [`map_object`].
    #[must_use]
    pub fn map_object(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(Value::object(map_object(&self.wrapped, iteratee)))
    }

    /// See [`filter`].
    #[must_use]
    pub fn filter(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(filter(&self.wrapped, predicate))
    }

    /// See [`reject`].
    #[must_use]
    pub fn reject(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(reject(&self.wrapped, predicate))
    }

    /// See [`where_`].
    #[must_use]
    pub fn where_(self, attributes: &Value) -> Self {
        Self::wrap(where_(&self.wrapped, attributes))
    }

    /// See [`find`].
    #[must_use]
    pub fn find(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(find(&self.wrapped, predicate))
    }

    /// See [`find_where`].
    #[must_use]
    pub fn find_where(self, attributes: &Value) -> Self {
        Self::wrap(find_where(&self.wrapped, attributes))
    }

    /// See [`some`].
    #[must_use]
    pub fn some(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(some(&self.wrapped, predicate))
    }

    /// See [`every`].
    #[must_use]
    pub fn every(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(every(&self.wrapped, predicate))
    }

    /// See [`contains`].
    #[must_use]
    pub fn contains(self, item: &Value, from_index: Option<isize>) -> Self {
        Self::wrap(contains(&self.wrapped, item, from_index))
    }

    /// See [`pluck`].
    #[must_use]
    pub fn pluck(self, key: impl Into<Key>) -> Self {
        Self::wrap(pluck(&self.wrapped, key))
    }

    /// See [`invoke`].
    #[must_use]
    pub fn invoke(self, method: impl Into<Method>, arguments: &[Value]) -> Self {
        Self::wrap(invoke(&self.wrapped, method, arguments))
    }

    /// See [`first`].
    #[must_use]
    pub fn first(self) -> Self {
        Self::wrap(first(&self.wrapped))
    }

    /// See [`last`].
    #[must_use]
    pub fn last(self) -> Self {
        Self::wrap(last(&self.wrapped))
    }

    /// See [`chunk`].
    #[must_use]
    pub fn chunk(self, count: usize) -> Self {
        Self::wrap(chunk(&self.wrapped, count))
    }

    /// See [`flatten`].
    #[must_use]
    pub fn flatten(self, shallow: bool) -> Self {
        Self::wrap(flatten(&self.wrapped, shallow))
    }

    /// See [`sort_by`].
    #[must_use]
    pub fn sort_by(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(sort_by(&self.wrapped, iteratee))
    }

    /// See [`uniq`].
    #[must_use]
    pub fn uniq(self, is_sorted: bool, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(uniq(&self.wrapped, is_sorted, iteratee))
    }

    /// See [`group_by`].
    #[must_use]
    pub fn group_by(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(group_by(&self.wrapped, iteratee))
    }

    /// See [`count_by`].
    #[must_use]
    pub fn count_by(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(count_by(&self.wrapped, iteratee))
    }

    /// See [`index_by`].
    #[must_use]
    pub fn index_by(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(Value::object(index_by(&self.wrapped, iteratee)))
    }

    /// See [`partition`]; wraps `[passing, failing]`.
    #[must_use]
    pub fn partition(self, predicate: impl Into<IterateeSpec>) -> Self {
        Self::wrap(partition(&self.wrapped, predicate))
    }

    /// See [`max`].
    #[must_use]
    pub fn max(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(max(&self.wrapped, iteratee))
    }

    /// See [`min`].
    #[must_use]
    pub fn min(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(min(&self.wrapped, iteratee))
    }

    /// See [`reduce`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyReduce`] for an empty collection
    /// without a seed.
    pub fn reduce<F>(self, step: F, seed: Option<Value>) -> Result<Self, CollectionError>
    where
        F: FnMut(Value, &Value, &Key, &Value) -> Value,
    {
        reduce(&self.wrapped, step, seed).map(Self::wrap)
    }

    /// See [`reduce_right`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyReduce`] for an empty collection
    /// without a seed.
    pub fn reduce_right<F>(self, step: F, seed: Option<Value>) -> Result<Self, CollectionError>
    where
        F: FnMut(Value, &Value, &Key, &Value) -> Value,
    {
        reduce_right(&self.wrapped, step, seed).map(Self::wrap)
    }

    /// See [`keys`].
    #[must_use]
    pub fn keys(self) -> Self {
        Self::wrap(keys(&self.wrapped))
    }

    /// See [`values`].
    #[must_use]
    pub fn values(self) -> Self {
        Self::wrap(values(&self.wrapped))
    }

    /// See [`to_array`].
    #[must_use]
    pub fn to_array(self) -> Self {
        Self::wrap(to_array(&self.wrapped))
    }

    /// See [`size`].
    #[must_use]
    pub fn size(self) -> Self {
        Self::wrap(size(&self.wrapped))
    }
}

#[cfg(feature = "statistics")]
impl Chain {
    /// See [`sum`](crate::statistics::sum).
    #[must_use]
    pub fn sum(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::sum(&self.wrapped, iteratee))
    }

    /// See [`mean`](crate::statistics::mean).
    #[must_use]
    pub fn mean(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::mean(&self.wrapped, iteratee))
    }

    /// See [`median`](crate::statistics::median).
    #[must_use]
    pub fn median(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::median(&self.wrapped, iteratee))
    }

    /// See [`mode`](crate::statistics::mode).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyMode`] for an empty collection.
    pub fn mode(self, iteratee: impl Into<IterateeSpec>) -> Result<Self, CollectionError> {
        crate::statistics::mode(&self.wrapped, iteratee).map(Self::wrap)
    }

    /// See [`variance`](crate::statistics::variance).
    #[must_use]
    pub fn variance(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::variance(&self.wrapped, iteratee))
    }

    /// See [`standard_deviation`](crate::statistics::standard_deviation).
    #[must_use]
    pub fn standard_deviation(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::standard_deviation(&self.wrapped, iteratee))
    }

    /// See [`standard_error`](crate::statistics::standard_error).
    #[must_use]
    pub fn standard_error(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::standard_error(&self.wrapped, iteratee))
    }

    /// See [`stat_range`](crate::statistics::stat_range).
    #[must_use]
    pub fn stat_range(self, iteratee: impl Into<IterateeSpec>) -> Self {
        Self::wrap(crate::statistics::stat_range(&self.wrapped, iteratee))
    }

    /// See [`percentile`](crate::statistics::percentile).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidPercentile`] for a non-numeric rank.
    pub fn percentile(self, rank: impl Into<Value>) -> Result<Self, CollectionError> {
        crate::statistics::percentile(&self.wrapped, rank).map(Self::wrap)
    }
}
