//! Integration tests for shape probing and linear traversal.

use rstest::rstest;
use underbar::collection::{
    Shape, chunk, contains, each, each_right, every, filter, first, first_n, flatten, intersection,
    invoke, keys, last, last_n, map, map_object, pluck, reject, shape, size, some, sort_by, times,
    to_array, uniq, unzip, values, where_,
};
use underbar::iteratee::IterateeSpec;
use underbar::value::{Function, Key, Value};
use underbar::{array, object};

fn stooges() -> Value {
    array![
        object! { "name" => "moe", "age" => 40 },
        object! { "name" => "larry", "age" => 50 },
        object! { "name" => "curly", "age" => 60 },
    ]
}

// =============================================================================
// Shape probing
// =============================================================================

#[rstest]
#[case(array![1, 2, 3], Shape::ArrayLike(3))]
#[case(Value::from("abc"), Shape::ArrayLike(3))]
#[case(object! { "0" => "a", "length" => 1 }, Shape::ArrayLike(1))]
#[case(object! { "length" => "1" }, Shape::MapLike)]
#[case(object! { "length" => 9_007_199_254_740_992.0 }, Shape::MapLike)]
#[case(Value::Undefined, Shape::MapLike)]
fn test_shape(#[case] collection: Value, #[case] expected: Shape) {
    assert_eq!(shape(&collection), expected);
}

#[rstest]
fn test_size_of_map_like_counts_keys() {
    assert_eq!(size(&object! { "one" => 1, "two" => 2, "three" => 3 }), 3);
}

#[rstest]
fn test_keys_and_values_agree() {
    let collection = object! { "b" => 2, "7" => 7, "a" => 1, "3" => 3 };
    assert_eq!(keys(&collection), vec!["3", "7", "b", "a"]);
    assert_eq!(
        values(&collection),
        vec![Value::from(3), Value::from(7), Value::from(2), Value::from(1)]
    );
}

#[rstest]
fn test_to_array_of_scalar_is_empty() {
    assert!(to_array(&Value::from(true)).is_empty());
}

// =============================================================================
// each / each_right
// =============================================================================

#[rstest]
fn test_each_on_pseudo_array_reports_indices() {
    let arguments = object! { "0" => "x", "1" => "y", "length" => 2 };
    let mut keys_seen = Vec::new();
    each(&arguments, |_, key, _| keys_seen.push(key.clone()));
    assert_eq!(keys_seen, vec![Key::Index(0), Key::Index(1)]);
}

#[rstest]
fn test_each_passes_collection() {
    let collection = array![1, 2];
    let mut same = true;
    each(&collection, |_, _, passed| same &= passed.strict_equals(&collection));
    assert!(same);
}

#[rstest]
fn test_each_right_on_array() {
    let mut seen = Vec::new();
    each_right(&array![1, 2, 3], |value, key, _| seen.push((key.clone(), value.clone())));
    assert_eq!(
        seen,
        vec![
            (Key::Index(2), Value::from(3)),
            (Key::Index(1), Value::from(2)),
            (Key::Index(0), Value::from(1)),
        ]
    );
}

// =============================================================================
// Derived operations
// =============================================================================

#[rstest]
fn test_map_with_function_receives_keys() {
    let keyed = Function::new(|_, arguments| {
        Value::from(format!("{}={}", arguments[1], arguments[0]))
    });
    assert_eq!(
        map(&object! { "a" => 1, "b" => 2 }, keyed),
        vec![Value::from("a=1"), Value::from("b=2")]
    );
}

#[rstest]
fn test_map_with_context() {
    let offset = Function::new(|receiver, arguments| {
        Value::from(arguments[0].to_number() + receiver.to_number())
    });
    let spec = IterateeSpec::from(offset).with_context(Value::from(100));
    assert_eq!(map(&array![1, 2], spec), vec![Value::from(101), Value::from(102)]);
}

#[rstest]
fn test_filter_reject_with_matcher() {
    let fifty = object! { "age" => 50 };
    assert_eq!(filter(&stooges(), fifty.clone()).len(), 1);
    assert_eq!(reject(&stooges(), fifty).len(), 2);
}

#[rstest]
fn test_some_and_every_with_property() {
    let flags = array![object! { "on" => true }, object! { "on" => false }];
    assert!(some(&flags, "on"));
    assert!(!every(&flags, "on"));
    assert!(every(&Value::Null, "on"));
}

#[rstest]
#[case(array![1, 2, 3], Value::from(2), None, true)]
#[case(array![1, 2, 3], Value::from(1), Some(1), false)]
#[case(array![1, 2, 3], Value::from(3), Some(-1), true)]
#[case(array![1, 2, 3], Value::from("1"), None, false)]
#[case(object! { "a" => 1, "b" => 2 }, Value::from(2), Some(1), true)]
#[case(Value::from("abc"), Value::from("b"), None, true)]
fn test_contains(
    #[case] collection: Value,
    #[case] item: Value,
    #[case] from_index: Option<isize>,
    #[case] expected: bool,
) {
    assert_eq!(contains(&collection, &item, from_index), expected);
}

#[rstest]
fn test_pluck_missing_property() {
    assert_eq!(
        pluck(&array![object! { "a" => 1 }, object! {}], "a"),
        vec![Value::from(1), Value::Undefined]
    );
}

#[rstest]
fn test_where_with_several_attributes() {
    let found = where_(&stooges(), &object! { "name" => "moe", "age" => 40 });
    assert_eq!(found, vec![object! { "name" => "moe", "age" => 40 }]);
    assert!(where_(&stooges(), &object! { "name" => "moe", "age" => 50 }).is_empty());
}

#[rstest]
fn test_map_object_keeps_keys() {
    let doubled = map_object(
        &object! { "x" => 1, "y" => 2 },
        IterateeSpec::unary(|value| Value::from(value.to_number() * 2.0)),
    );
    assert_eq!(Value::object(doubled), object! { "x" => 2, "y" => 4 });
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
fn test_sort_by_descending_age() {
    let sorted = sort_by(
        &stooges(),
        IterateeSpec::unary(|stooge| Value::from(-stooge.property(&"age".into()).to_number())),
    );
    assert_eq!(sorted[0].property(&"name".into()), Value::from("curly"));
}

#[rstest]
fn test_uniq_with_function() {
    let unique = uniq(
        &array![1, 2, 3, 4],
        false,
        IterateeSpec::unary(|value| Value::from(value.to_number() % 2.0)),
    );
    assert_eq!(unique, vec![Value::from(1), Value::from(2)]);
}

// =============================================================================
// Positional helpers
// =============================================================================

#[rstest]
fn test_first_and_last_of_arguments_object() {
    let arguments = object! { "0" => "a", "1" => "b", "2" => "c", "length" => 3 };
    assert_eq!(first(&arguments), Value::from("a"));
    assert_eq!(last(&arguments), Value::from("c"));
    assert_eq!(first_n(&arguments, 2), vec![Value::from("a"), Value::from("b")]);
    assert_eq!(last_n(&arguments, 2), vec![Value::from("b"), Value::from("c")]);
}

#[rstest]
#[case(3, vec![array![1, 2, 3], array![4, 5, 6], array![7]])]
#[case(7, vec![array![1, 2, 3, 4, 5, 6, 7]])]
#[case(0, vec![])]
fn test_chunk(#[case] count: usize, #[case] expected: Vec<Value>) {
    assert_eq!(chunk(&array![1, 2, 3, 4, 5, 6, 7], count), expected);
}

#[rstest]
fn test_flatten_of_map_like_is_empty() {
    assert!(flatten(&object! { "a" => array![1] }, false).is_empty());
    assert_eq!(
        flatten(&array![array![array![]], array![1]], false),
        vec![Value::from(1)]
    );
}

#[rstest]
fn test_intersection_of_stooges() {
    let shared = intersection(
        &array!["moe", "curly", "larry"],
        &[array!["moe", "groucho"], object! { "a" => "moe" }],
    );
    assert_eq!(shared, vec![Value::from("moe")]);
}

#[rstest]
fn test_unzip_of_rows() {
    let columns = unzip(&array![
        array!["moe", 30, true],
        array!["larry", 40, false],
        array!["curly", 50, false],
    ]);
    assert_eq!(
        columns,
        vec![
            array!["moe", "larry", "curly"],
            array![30, 40, 50],
            array![true, false, false],
        ]
    );
}

#[rstest]
fn test_times_passes_indices() {
    let indices = times(3, IterateeSpec::Identity);
    assert_eq!(indices, vec![Value::from(0), Value::from(1), Value::from(2)]);
    assert!(times(0, IterateeSpec::Identity).is_empty());
}

#[rstest]
fn test_invoke_on_each_stooge() {
    let describe = Function::new(|receiver, arguments| {
        let name = receiver.property(&Key::from("name"));
        Value::from(format!("{name}{}", arguments[0]))
    });
    let people = array![
        object! { "name" => "moe", "describe" => describe.clone() },
        object! { "name" => "larry", "describe" => describe },
    ];
    assert_eq!(
        invoke(&people, "describe", &[Value::from("!")]),
        vec![Value::from("moe!"), Value::from("larry!")]
    );
}
