//! Integration tests for callback normalisation.

use rstest::rstest;
use smallvec::smallvec;
use underbar::collection::{filter, map};
use underbar::iteratee::{
    IterateeSpec, deep_get, is_match, matcher, property, property_path, set,
};
use underbar::value::{Function, Key, Path, Value};
use underbar::{array, object};

// =============================================================================
// Four-way resolution
// =============================================================================

#[rstest]
fn test_every_operation_accepts_every_spec_form() {
    let items = array![
        object! { "kind" => "a", "size" => 1 },
        object! { "kind" => "b", "size" => 2 },
    ];

    assert_eq!(map(&items, Value::Undefined), map(&items, IterateeSpec::Identity));
    assert_eq!(map(&items, "kind"), vec![Value::from("a"), Value::from("b")]);
    assert_eq!(
        map(&items, Value::from("size")),
        vec![Value::from(1), Value::from(2)]
    );
    assert_eq!(filter(&items, object! { "kind" => "b" }).len(), 1);

    let double = Function::unary(|value| Value::from(value.property(&"size".into()).to_number() * 2.0));
    assert_eq!(map(&items, Value::from(double)), vec![Value::from(2), Value::from(4)]);
}

#[rstest]
fn test_array_spec_is_a_path_not_a_matcher() {
    let nested = array![object! { "a" => object! { "b" => 1 } }];
    assert_eq!(map(&nested, array!["a", "b"]), vec![Value::from(1)]);
}

#[rstest]
fn test_path_spec_from_strings() {
    let nested = array![object! { "a" => object! { "b" => "deep" } }];
    assert_eq!(map(&nested, vec!["a", "b"]), vec![Value::from("deep")]);
}

#[rstest]
fn test_resolve_then_call_with_keys() {
    let spy = Function::new(|_, arguments| Value::from(arguments.len()));
    let iteratee = IterateeSpec::from(spy).resolve();
    assert_eq!(
        iteratee.call(&Value::from(1), &Key::from("k"), &object! { "k" => 1 }),
        Value::from(3)
    );
}

// =============================================================================
// Property accessors
// =============================================================================

#[rstest]
fn test_property_reads_string_length() {
    assert_eq!(property("length").apply(&Value::from("four")), Value::from(4));
}

#[rstest]
fn test_property_path_of_one_key_matches_property() {
    let path: Path = smallvec![Key::from("x")];
    let element = object! { "x" => 7 };
    assert_eq!(property_path(path).apply(&element), property("x").apply(&element));
}

#[rstest]
#[case(Value::Null)]
#[case(Value::Undefined)]
#[case(Value::from(5))]
fn test_deep_get_through_non_objects(#[case] intermediate: Value) {
    let root = object! { "a" => intermediate };
    assert!(deep_get(&root, &[Key::from("a"), Key::from("b")]).is_undefined());
}

#[rstest]
fn test_set_then_deep_get() {
    let path: Path = smallvec![Key::from("users"), Key::Index(1), Key::from("name")];
    let updated = set(&object! { "users" => array![] }, &path, Value::from("larry"));
    assert_eq!(deep_get(&updated, &path), Value::from("larry"));
    assert_eq!(
        updated,
        object! { "users" => array![Value::Undefined, object! { "name" => "larry" }] }
    );
}

// =============================================================================
// Matchers
// =============================================================================

#[rstest]
fn test_matcher_requires_presence() {
    let wants_undefined = matcher(&object! { "x" => Value::Undefined });
    assert_eq!(wants_undefined.apply(&object! {}), Value::from(false));
    assert_eq!(wants_undefined.apply(&object! { "x" => Value::Undefined }), Value::from(true));
}

#[rstest]
fn test_is_match_on_strings() {
    assert!(is_match(&Value::from("abc"), &object! { "length" => 3 }));
    assert!(!is_match(&Value::from("abc"), &object! { "length" => "3" }));
}

#[rstest]
fn test_empty_matcher_matches_everything() {
    let anything = IterateeSpec::matcher(&object! {}).resolve();
    assert_eq!(anything.apply(&Value::Null), Value::from(true));
    assert_eq!(anything.apply(&Value::from(0)), Value::from(true));
}
