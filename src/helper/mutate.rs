use core::borrow::Borrow;

use crate::OrderedMap;

/// Moves the value at `index_from` onto `index_to`.
///
/// - If `index_from` is absent nothing changes and `false` is returned.
/// - If `index_to` exists, the two entries swap values; both keys keep their positions.
/// - If `index_to` is absent, a new entry `index_to` is appended holding a copy of the
///   value at `index_from`, and `index_from` keeps its value.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
/// assert!(helper::move_value(&mut map, &"a", "b"));
/// assert_eq!(map, OrderedMap::from([("a", 2), ("b", 1)]));
///
/// assert!(helper::move_value(&mut map, &"a", "c"));
/// assert_eq!(map, OrderedMap::from([("a", 2), ("b", 1), ("c", 2)]));
///
/// assert!(!helper::move_value(&mut map, &"z", "a"));
/// ```
pub fn move_value<K, V>(map: &mut OrderedMap<K, V>, index_from: &K, index_to: K) -> bool
where
    K: Ord + Clone,
    V: Clone,
{
    let Some(value) = map.get(index_from) else {
        log::debug!("move_value: source key is absent, map left untouched");
        return false;
    };

    if !map.contains_key(&index_to) {
        let value = value.clone();
        map.insert(index_to, value);
        return true;
    }
    map.swap_values(index_from, &index_to)
}

/// Removes the first inserted entry. Returns `false` on an empty map.
pub fn remove_first<K: Ord, V>(map: &mut OrderedMap<K, V>) -> bool {
    map.pop_first().is_some()
}

/// Removes the last inserted entry. Returns `false` on an empty map.
pub fn remove_last<K: Ord, V>(map: &mut OrderedMap<K, V>) -> bool {
    map.pop_last().is_some()
}

/// Removes every entry whose value is strictly equal (`==`) to `value`.
///
/// Returns `true` if at least one entry was removed, `false` otherwise (which
/// includes every call on an empty map). For [`Value`](crate::Value) maps the
/// comparison is type-exact: removing `Value::Int(1)` leaves `Value::Float(1.0)`
/// and `Value::Str("1")` alone.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let mut map = OrderedMap::from([("foo", "bar"), ("baz", "qux"), ("x", "bar")]);
/// assert!(helper::remove_value(&mut map, &"bar"));
/// assert_eq!(map, OrderedMap::from([("baz", "qux")]));
/// assert!(!helper::remove_value(&mut map, &"nonexistent"));
/// ```
pub fn remove_value<K: Ord, V: PartialEq>(map: &mut OrderedMap<K, V>, value: &V) -> bool {
    if map.is_empty() {
        return false;
    }

    let before = map.len();
    map.retain(|_, v| v != value);
    map.len() < before
}

/// Removes every entry whose key appears in `keys`.
///
/// Returns `false` without touching the map if the map or `keys` is empty,
/// `true` otherwise, whether or not any key matched.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let mut map = OrderedMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// assert!(helper::remove_by_keys(&mut map, &[1, 3, 9]));
/// assert_eq!(map, OrderedMap::from([(2, "b")]));
/// assert!(!helper::remove_by_keys::<_, _, i32>(&mut map, &[]));
/// ```
pub fn remove_by_keys<K, V, Q>(map: &mut OrderedMap<K, V>, keys: &[Q]) -> bool
where
    K: Borrow<Q> + Ord,
    Q: Ord,
{
    if map.is_empty() || keys.is_empty() {
        log::debug!(
            "remove_by_keys: nothing to do ({} entries, {} keys)",
            map.len(),
            keys.len()
        );
        return false;
    }

    for key in keys {
        map.remove(key);
    }
    true
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{Key, Value, array};

    #[test]
    fn move_onto_itself_is_a_no_op() {
        let mut map = array! { "a" => 1 };
        assert!(move_value(&mut map, &Key::from("a"), Key::from("a")));
        assert_eq!(map, array! { "a" => 1 });
    }

    #[test]
    fn move_to_new_key_copies() {
        let mut map = array! { 0 => "x", 5 => "y" };
        assert!(move_value(&mut map, &Key::from(0), Key::from(9)));
        assert_eq!(map, array! { 0 => "x", 5 => "y", 9 => "x" });
    }

    #[test]
    fn move_from_absent_key_fails() {
        let mut map = array! { "a" => 1 };
        assert!(!move_value(&mut map, &Key::from("missing"), Key::from("a")));
        assert_eq!(map, array! { "a" => 1 });
    }

    #[test]
    fn move_from_null_value_still_moves() {
        let mut map = array! { "a" => Value::Null, "b" => 2 };
        assert!(move_value(&mut map, &Key::from("a"), Key::from("b")));
        assert_eq!(map, array! { "a" => 2, "b" => Value::Null });
    }

    #[test]
    fn remove_ends() {
        let mut map = array! { "a" => 1, "b" => 2, "c" => 3 };
        assert!(remove_first(&mut map));
        assert!(remove_last(&mut map));
        assert_eq!(map, array! { "b" => 2 });
        assert!(remove_last(&mut map));
        assert!(!remove_first(&mut map));
        assert!(!remove_last(&mut map));
    }

    #[test]
    fn remove_value_is_type_exact() {
        let mut map = array! { "i" => 1, "f" => 1.0, "s" => "1", "j" => 1 };
        assert!(remove_value(&mut map, &Value::from(1)));
        assert_eq!(map, array! { "f" => 1.0, "s" => "1" });
    }

    #[test]
    fn remove_value_on_empty_map() {
        let mut map = array! {};
        assert!(!remove_value(&mut map, &Value::Null));
    }

    #[test]
    fn remove_by_keys_reports_true_without_matches() {
        let mut map = array! { "a" => 1 };
        assert!(remove_by_keys(&mut map, &[Key::from("zzz")]));
        assert_eq!(map.len(), 1);

        let mut empty = array! {};
        assert!(!remove_by_keys(&mut empty, &[Key::from("a")]));
    }
}
