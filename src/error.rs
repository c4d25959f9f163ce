//! Error types for collection operations.
//!
//! Only misuse is reported as an error. Degenerate input (empty
//! collections, missing properties, non-numeric data) produces documented
//! sentinel results such as `0`, `undefined` or `±Infinity` instead.

/// Represents a usage error raised by a collection operation.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::error::CollectionError;
/// use underbar::fold::reduce;
///
/// let error = reduce(&array![], |memo, _, _, _| memo, None).unwrap_err();
/// assert_eq!(error, CollectionError::EmptyReduce);
/// assert_eq!(
///     format!("{error}"),
///     "reduce of empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A fold without a seed visited no element.
    EmptyReduce,
    /// The mode of an empty collection was requested.
    EmptyMode,
    /// A percentile was requested with something other than a number.
    InvalidPercentile {
        /// The type name of the rejected argument.
        found: &'static str,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReduce => formatter.write_str("reduce of empty collection with no initial value"),
            Self::EmptyMode => formatter.write_str("mode requires at least one data point"),
            Self::InvalidPercentile { found } => write!(
                formatter,
                "percentile must be a number between 0 and 100, found {found}"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CollectionError::EmptyMode, "mode requires at least one data point")]
    #[case(
        CollectionError::InvalidPercentile { found: "string" },
        "percentile must be a number between 0 and 100, found string"
    )]
    fn test_collection_error_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_collection_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(CollectionError::EmptyReduce);
        assert!(error.source().is_none());
    }
}
