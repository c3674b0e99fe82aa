use core::borrow::Borrow;

use crate::{Array, Key, OrderedMap};

/// Returns the value stored under `index`, or `None` if the key is absent.
///
/// Presence is structural: a key holding [`Value::Null`](crate::Value::Null) is present.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, helper, Key, Value};
///
/// let map = array! { "foo" => "bar", "nothing" => Value::Null };
/// assert_eq!(helper::get_value(&Key::from("foo"), &map), Some(&Value::from("bar")));
/// assert_eq!(helper::get_value(&Key::from("nothing"), &map), Some(&Value::Null));
/// assert_eq!(helper::get_value(&Key::from("nonexistent"), &map), None);
/// ```
#[must_use]
pub fn get_value<'a, K, V, Q>(index: &Q, map: &'a OrderedMap<K, V>) -> Option<&'a V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    map.get(index)
}

/// Returns the value stored under `index`, or `default` if the key is absent.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([("a", 1)]);
/// assert_eq!(*helper::get_value_or(&"a", &map, &0), 1);
/// assert_eq!(*helper::get_value_or(&"b", &map, &0), 0);
/// ```
#[must_use]
pub fn get_value_or<'a, K, V, Q>(index: &Q, map: &'a OrderedMap<K, V>, default: &'a V) -> &'a V
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    map.get(index).unwrap_or(default)
}

/// Returns the value under `index` coerced to an integer.
///
/// `None` if the key is absent or the value does not coerce; see [`Value::to_int`](crate::Value::to_int).
#[must_use]
pub fn get_int_or_null(index: &Key, map: &Array) -> Option<i64> {
    map.get(index)?.to_int()
}

/// Returns the value under `index` coerced to a boolean.
///
/// `None` if the key is absent or the value does not coerce; see [`Value::to_bool`](crate::Value::to_bool).
#[must_use]
pub fn get_bool_or_null(index: &Key, map: &Array) -> Option<bool> {
    map.get(index)?.to_bool()
}

/// Returns the key of the first inserted entry, whatever its value.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([(5, "five"), (0, "zero")]);
/// assert_eq!(helper::get_first_index(&map), Some(&5));
/// ```
#[must_use]
pub fn get_first_index<K, V>(map: &OrderedMap<K, V>) -> Option<&K> {
    map.first_key_value().map(|(k, _)| k)
}

/// Returns the key of the last inserted entry.
#[must_use]
pub fn get_last_index<K, V>(map: &OrderedMap<K, V>) -> Option<&K> {
    map.last_key_value().map(|(k, _)| k)
}

/// Returns the value of the first inserted entry, independent of numeric key gaps.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let mut map = OrderedMap::from([(3, "c"), (1, "a")]);
/// assert_eq!(helper::get_first_value(&map), Some(&"c"));
///
/// map.remove(&3);
/// assert_eq!(helper::get_first_value(&map), Some(&"a"));
/// ```
#[must_use]
pub fn get_first_value<K, V>(map: &OrderedMap<K, V>) -> Option<&V> {
    map.first_key_value().map(|(_, v)| v)
}

/// Returns the value of the last inserted entry.
#[must_use]
pub fn get_last_value<K, V>(map: &OrderedMap<K, V>) -> Option<&V> {
    map.last_key_value().map(|(_, v)| v)
}

/// Copies the first `count` entries into a new map, keys and order preserved.
///
/// A `count` larger than the map yields a copy of the whole map.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([("foo", "bar"), ("baz", "qux"), ("quux", "corge")]);
/// let first = helper::get_first_values(&map, 2);
/// assert!(first.iter().eq([(&"foo", &"bar"), (&"baz", &"qux")]));
/// assert!(helper::get_first_values(&map, 0).is_empty());
/// ```
#[must_use]
pub fn get_first_values<K, V>(map: &OrderedMap<K, V>, count: usize) -> OrderedMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    map.iter().take(count).map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Copies the last `count` entries into a new map, keys and order preserved.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([("foo", "bar"), ("baz", "qux"), ("quux", "corge")]);
/// let last = helper::get_last_values(&map, 2);
/// assert!(last.values().eq([&"qux", &"corge"]));
/// assert_eq!(helper::get_last_values(&map, 10), map);
/// ```
#[must_use]
pub fn get_last_values<K, V>(map: &OrderedMap<K, V>, count: usize) -> OrderedMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    map.iter()
        .skip(map.len().saturating_sub(count))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
