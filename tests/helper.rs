use ordmap_kit::{Array, Key, Value, array, helper};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn key(k: &str) -> Key {
    Key::from(k)
}

fn foo_baz() -> Array {
    array! { "foo" => "bar", "baz" => "qux" }
}

fn foo_baz_quux() -> Array {
    array! { "foo" => "bar", "baz" => "qux", "quux" => "corge" }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[test]
fn get_value() {
    let map = foo_baz();
    assert_eq!(helper::get_value(&key("foo"), &map), Some(&Value::from("bar")));
    assert_eq!(helper::get_value(&key("baz"), &map), Some(&Value::from("qux")));
    assert_eq!(helper::get_value(&key("nonexistent"), &map), None);
}

#[test]
fn get_value_or_default() {
    let map = foo_baz();
    let fallback = Value::from("default");
    assert_eq!(helper::get_value_or(&key("foo"), &map, &fallback), &Value::from("bar"));
    assert_eq!(helper::get_value_or(&key("nonexistent"), &map, &fallback), &fallback);
}

#[test]
fn get_int_or_null() {
    let map = array! { "foo" => 42, "baz" => "qux", "num" => " 17 ", "float" => 3.0 };
    assert_eq!(helper::get_int_or_null(&key("foo"), &map), Some(42));
    assert_eq!(helper::get_int_or_null(&key("baz"), &map), None);
    assert_eq!(helper::get_int_or_null(&key("num"), &map), Some(17));
    assert_eq!(helper::get_int_or_null(&key("float"), &map), Some(3));
    assert_eq!(helper::get_int_or_null(&key("nonexistent"), &map), None);
}

#[test]
fn get_bool_or_null() {
    let map = array! { "foo" => true, "baz" => "qux", "off" => "off" };
    assert_eq!(helper::get_bool_or_null(&key("foo"), &map), Some(true));
    assert_eq!(helper::get_bool_or_null(&key("baz"), &map), None);
    assert_eq!(helper::get_bool_or_null(&key("off"), &map), Some(false));
    assert_eq!(helper::get_bool_or_null(&key("nonexistent"), &map), None);
}

// ─── Position ────────────────────────────────────────────────────────────────

#[test]
fn get_first_and_last_value() {
    let map = foo_baz();
    assert_eq!(helper::get_first_value(&map), Some(&Value::from("bar")));
    assert_eq!(helper::get_last_value(&map), Some(&Value::from("qux")));

    let empty = array! {};
    assert_eq!(helper::get_first_value(&empty), None);
    assert_eq!(helper::get_last_value(&empty), None);
}

#[test]
fn first_and_last_ignore_numeric_gaps() {
    let mut map = array! { 10 => "ten", 2 => "two", 7 => "seven" };
    assert_eq!(helper::get_first_index(&map), Some(&Key::from(10)));
    assert_eq!(helper::get_last_index(&map), Some(&Key::from(7)));

    map.remove(&Key::from(10));
    assert_eq!(helper::get_first_value(&map), Some(&Value::from("two")));
}

#[test]
fn get_first_values() {
    let map = foo_baz_quux();
    assert_eq!(helper::get_first_values(&map, 2), array! { "foo" => "bar", "baz" => "qux" });
    assert_eq!(helper::get_first_values(&map, 1), array! { "foo" => "bar" });
    assert_eq!(helper::get_first_values(&map, 0), array! {});
    assert_eq!(helper::get_first_values(&map, 10), map);
}

#[test]
fn get_last_values() {
    let map = foo_baz_quux();
    assert_eq!(helper::get_last_values(&map, 2), array! { "baz" => "qux", "quux" => "corge" });
    assert_eq!(helper::get_last_values(&map, 1), array! { "quux" => "corge" });
    assert_eq!(helper::get_last_values(&map, 0), array! {});
    assert_eq!(helper::get_last_values(&map, 10), map);
}

// ─── Extremum ────────────────────────────────────────────────────────────────

#[test]
fn min_and_max() {
    let map = array! { "foo" => 42, "baz" => 24 };
    assert_eq!(helper::get_min_index(&map), Some(&key("baz")));
    assert_eq!(helper::get_max_index(&map), Some(&key("foo")));
    assert_eq!(helper::get_min_value(&map), Some(&Value::from(24)));
    assert_eq!(helper::get_max_value(&map), Some(&Value::from(42)));

    let empty = array! {};
    assert_eq!(helper::get_min_index(&empty), None);
    assert_eq!(helper::get_max_index(&empty), None);
    assert_eq!(helper::get_min_value(&empty), None);
    assert_eq!(helper::get_max_value(&empty), None);
}

#[test]
fn extremum_mixes_ints_and_floats() {
    let map = array! { "a" => 1, "b" => 2.5, "c" => -0.5, "d" => 2 };
    assert_eq!(helper::get_max_index(&map), Some(&key("b")));
    assert_eq!(helper::get_min_index(&map), Some(&key("c")));
}

// ─── Mutation ────────────────────────────────────────────────────────────────

#[test]
fn move_value_swaps_existing_entries() {
    let mut map = array! { "a" => 1, "b" => 2 };
    assert!(helper::move_value(&mut map, &key("a"), key("b")));
    assert_eq!(map, array! { "a" => 2, "b" => 1 });
}

#[test]
fn move_value_copies_into_new_key() {
    let mut map = array! { "a" => 1 };
    assert!(helper::move_value(&mut map, &key("a"), key("c")));
    assert_eq!(map, array! { "a" => 1, "c" => 1 });
}

#[test]
fn move_value_from_missing_key() {
    let mut map = array! { "a" => 1 };
    assert!(!helper::move_value(&mut map, &key("x"), key("a")));
    assert_eq!(map, array! { "a" => 1 });
}

#[test]
fn remove_value() {
    let mut map = foo_baz();
    assert!(helper::remove_value(&mut map, &Value::from("bar")));
    assert_eq!(map, array! { "baz" => "qux" });
    assert!(!helper::remove_value(&mut map, &Value::from("nonexistent")));
    assert_eq!(map, array! { "baz" => "qux" });
}

#[test]
fn remove_first_and_last() {
    let mut map = foo_baz_quux();
    assert!(helper::remove_first(&mut map));
    assert!(helper::remove_last(&mut map));
    assert_eq!(map, array! { "baz" => "qux" });
    assert!(helper::remove_last(&mut map));
    assert!(!helper::remove_first(&mut map));
    assert!(!helper::remove_last(&mut map));
}

#[test]
fn remove_by_keys() {
    let mut map = foo_baz_quux();
    assert!(helper::remove_by_keys(&mut map, &[key("foo"), key("quux"), key("missing")]));
    assert_eq!(map, array! { "baz" => "qux" });
    assert!(!helper::remove_by_keys::<_, _, Key>(&mut map, &[]));
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

#[test]
fn get_keys_and_values() {
    let map = foo_baz();
    assert_eq!(helper::get_keys(&map), [key("foo"), key("baz")]);
    assert_eq!(helper::get_values(&map), [Value::from("bar"), Value::from("qux")]);
    assert_eq!(helper::get_keys(&array! {}), Vec::<Key>::new());
    assert_eq!(helper::get_values(&array! {}), Vec::<Value>::new());
}

#[test]
fn get_keys_of_modified_values() {
    let before = array! { "a" => 1, "b" => 2, "c" => 3 };
    let after = array! { "c" => 3, "b" => "2" };
    assert_eq!(helper::get_keys_of_modified_values(&before, &after), [key("a"), key("b")]);
}

#[test]
fn array_contains() {
    let map = array! { "foo" => "bar", "baz" => array! { "qux" => "corge" } };
    assert!(helper::array_contains(&array! { "qux" => "corge" }, &map));
    assert!(!helper::array_contains(&array! { "qux" => "wrong" }, &map));
}

#[test]
fn is_empty() {
    assert!(!helper::is_empty(&foo_baz()));
    assert!(helper::is_empty(&array! {}));
    assert!(helper::is_empty(&array! { "foo" => Value::Null, "baz" => "" }));
}

#[test]
fn is_equal_loosely() {
    let a = array! { "x" => 1, "y" => "two" };
    let b = array! { 0 => "two", 1 => 1.0, 2 => "1" };
    assert!(helper::is_equal(&a, &b));
    assert!(!helper::is_equal(&a, &array! { 0 => 1 }));
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1e6f64..1e6).prop_map(Value::Float),
        "[a-z0-9]{0,4}".prop_map(Value::Str),
    ]
}

fn flat_array_strategy() -> impl Strategy<Value = Array> {
    proptest::collection::vec(("[a-z]{1,3}", scalar_strategy()), 0..40)
        .prop_map(|entries| entries.into_iter().map(|(k, v)| (Key::Str(k), v)).collect())
}

proptest! {
    /// The first `k` entries and the last `len - k` entries partition the map.
    #[test]
    fn first_and_last_values_partition(map in flat_array_strategy(), k in 0usize..50) {
        let k = k.min(map.len());
        let mut rejoined = helper::get_first_values(&map, k);
        rejoined.extend(helper::get_last_values(&map, map.len() - k));
        prop_assert_eq!(rejoined, map);
    }

    /// Flattening a flat map yields its values unchanged.
    #[test]
    fn flattening_flat_maps_is_identity(map in flat_array_strategy()) {
        prop_assert_eq!(helper::get_simple_array(&map), helper::get_values(&map));
    }

    /// Removing every present key through `remove_by_keys` empties the map.
    #[test]
    fn removing_all_keys_empties(map in flat_array_strategy()) {
        let mut map = map;
        let keys = helper::get_keys(&map);
        prop_assert_eq!(helper::remove_by_keys(&mut map, &keys), !keys.is_empty());
        prop_assert!(map.is_empty());
    }

    /// A map is loosely equal to itself and to its reversal.
    #[test]
    fn is_equal_ignores_order(map in flat_array_strategy()) {
        let reversed: Array = map.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert!(helper::is_equal(&map, &map));
        prop_assert!(helper::is_equal(&map, &reversed));
    }
}
