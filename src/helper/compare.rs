use alloc::vec::Vec;

use crate::{Array, OrderedMap, Value};

/// Returns the map's keys in insertion order.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper, Key};
///
/// let map = array! { "foo" => "bar", "baz" => "qux" };
/// assert_eq!(helper::get_keys(&map), [Key::from("foo"), Key::from("baz")]);
/// ```
#[must_use]
pub fn get_keys<K: Clone, V>(map: &OrderedMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns the map's values in insertion order.
#[must_use]
pub fn get_values<K, V: Clone>(map: &OrderedMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Returns the keys of `a` whose value is not strictly equal to the value under the
/// same key in `b`, including keys that `b` lacks. Keys only in `b` are ignored.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let before = OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]);
/// let after = OrderedMap::from([("z", 3), ("y", 20), ("w", 0)]);
/// assert_eq!(helper::get_keys_of_modified_values(&before, &after), ["x", "y"]);
/// ```
#[must_use]
pub fn get_keys_of_modified_values<K, V>(a: &OrderedMap<K, V>, b: &OrderedMap<K, V>) -> Vec<K>
where
    K: Ord + Clone,
    V: PartialEq,
{
    a.iter().filter(|&(k, v)| b.get(k) != Some(v)).map(|(k, _)| k.clone()).collect()
}

/// Flattens nested arrays into their leaf values, depth first, in insertion order.
///
/// Keys are dropped. Empty nested arrays contribute nothing.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper, Value};
///
/// let map = array! {
///     "a" => 1,
///     "b" => array! { "c" => 2, "d" => array! { "e" => 3 } },
///     "f" => 4,
/// };
/// assert_eq!(helper::get_simple_array(&map), [Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
/// ```
#[must_use]
pub fn get_simple_array(map: &Array) -> Vec<Value> {
    fn collect_leaves(map: &Array, leaves: &mut Vec<Value>) {
        for value in map.values() {
            match value {
                Value::Map(nested) => collect_leaves(nested, leaves),
                leaf => leaves.push(leaf.clone()),
            }
        }
    }

    let mut leaves = Vec::with_capacity(map.len());
    collect_leaves(map, &mut leaves);
    leaves
}

/// Returns `true` if some array nested anywhere inside `map` equals `sub`.
///
/// Equality is structural and strict: same keys, same values, same order. `map`
/// itself is not compared against `sub`, only its nested arrays.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper};
///
/// let map = array! { "foo" => "bar", "baz" => array! { "qux" => "corge" } };
/// assert!(helper::array_contains(&array! { "qux" => "corge" }, &map));
/// assert!(!helper::array_contains(&array! { "qux" => "wrong" }, &map));
/// ```
#[must_use]
pub fn array_contains(sub: &Array, map: &Array) -> bool {
    map.values().any(|value| match value {
        Value::Map(nested) => nested == sub || array_contains(sub, nested),
        _ => false,
    })
}

/// Returns `true` if no value in the map is truthy.
///
/// An empty map is empty; so is one holding only `Null`, `false`, `0`, `0.0`, `""`,
/// `"0"` or empty arrays. See [`Value::is_truthy`].
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper, Value};
///
/// assert!(helper::is_empty(&array! {}));
/// assert!(helper::is_empty(&array! { "foo" => Value::Null, "baz" => "" }));
/// assert!(!helper::is_empty(&array! { "foo" => "bar" }));
/// ```
#[must_use]
pub fn is_empty(map: &Array) -> bool {
    !map.values().any(Value::is_truthy)
}

/// Returns `true` if every value of each map loosely equals some value of the other.
///
/// Keys and positions are ignored, and so is multiplicity: `{a: 1, b: 1}` equals `{c: "1"}`.
/// See [`Value::loose_eq`] for the equality used.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper};
///
/// assert!(helper::is_equal(&array! { "a" => 1, "b" => "x" }, &array! { 0 => "x", 1 => "1" }));
/// assert!(!helper::is_equal(&array! { "a" => 1 }, &array! { "a" => 1, "b" => 2 }));
/// ```
#[must_use]
pub fn is_equal(a: &Array, b: &Array) -> bool {
    fn covered(from: &Array, by: &Array) -> bool {
        from.values().all(|x| by.values().any(|y| x.loose_eq(y)))
    }

    covered(a, b) && covered(b, a)
}
