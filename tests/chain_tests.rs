#![cfg(feature = "chain")]

//! Integration tests for the fluent wrapper.

use rstest::rstest;
use underbar::chain::chain;
use underbar::error::CollectionError;
use underbar::iteratee::IterateeSpec;
use underbar::value::{Key, Value};
use underbar::{array, object};

fn stooges() -> Value {
    array![
        object! { "name" => "moe", "age" => 40 },
        object! { "name" => "larry", "age" => 50 },
        object! { "name" => "curly", "age" => 60 },
    ]
}

// =============================================================================
// Pipelines
// =============================================================================

#[rstest]
fn test_sort_map_first_pipeline() {
    let youngest = chain(stooges())
        .sort_by("age")
        .map(IterateeSpec::unary(|stooge| {
            Value::from(format!("{} is {}", stooge.property(&"name".into()), stooge.property(&"age".into())))
        }))
        .to_array()
        .value();
    assert_eq!(youngest.property(&Key::Index(0)), Value::from("moe is 40"));
}

#[rstest]
fn test_where_then_pluck() {
    let names = chain(stooges()).where_(&object! { "age" => 50 }).pluck("name").value();
    assert_eq!(names, array!["larry"]);
}

#[rstest]
fn test_partition_wraps_pair() {
    let split = chain(array![1, 2, 3])
        .partition(IterateeSpec::unary(|value| Value::from(value.to_number() > 1.0)))
        .value();
    assert_eq!(split, array![array![2, 3], array![1]]);
}

#[rstest]
fn test_count_by_and_size() {
    let counts = chain(array!["a", "b", "a"]).count_by(IterateeSpec::Identity).value();
    assert_eq!(counts, object! { "a" => 2, "b" => 1 });
    assert_eq!(chain(counts).size().value(), Value::from(2));
}

#[rstest]
fn test_uniq_then_contains() {
    let found = chain(array![1, 1, 2, 3, 3])
        .uniq(true, IterateeSpec::Identity)
        .contains(&Value::from(3), None)
        .value();
    assert_eq!(found, Value::from(true));
}

#[rstest]
fn test_max_on_empty_object() {
    assert_eq!(chain(object! {}).max(IterateeSpec::Identity).value(), Value::from(f64::NEG_INFINITY));
}

#[rstest]
fn test_reduce_right_into_string() -> Result<(), CollectionError> {
    let reversed = chain(array!["a", "b", "c"])
        .reduce_right(|memo, value, _, _| Value::from(format!("{memo}{value}")), None)?
        .value();
    assert_eq!(reversed, Value::from("cba"));
    Ok(())
}

#[rstest]
fn test_keys_of_object() {
    let keys = chain(object! { "one" => 1, "two" => 2 }).keys().value();
    assert_eq!(keys, array!["one", "two"]);
}

// =============================================================================
// Statistics
// =============================================================================

#[cfg(feature = "statistics")]
#[rstest]
fn test_pluck_then_statistics() -> Result<(), CollectionError> {
    let ages = chain(stooges()).pluck("age");
    assert_eq!(ages.clone().mean(IterateeSpec::Identity).value(), Value::from(50));
    assert_eq!(ages.clone().median(IterateeSpec::Identity).value(), Value::from(50));
    assert_eq!(ages.clone().stat_range(IterateeSpec::Identity).value(), Value::from(20));
    assert_eq!(ages.mode(IterateeSpec::Identity)?.value(), Value::from(40));
    Ok(())
}

#[cfg(feature = "statistics")]
#[rstest]
fn test_percentile_error_surfaces() {
    assert_eq!(
        chain(array![1]).percentile("top"),
        Err(CollectionError::InvalidPercentile { found: "string" })
    );
}
