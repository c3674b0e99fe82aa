use core::cmp::Ordering;

use crate::OrderedMap;

/// Walks the map in insertion order and keeps the first entry that no later entry beats.
/// Incomparable values never replace the current pick.
fn extremum<K, V: PartialOrd>(map: &OrderedMap<K, V>, wanted: Ordering) -> Option<(&K, &V)> {
    let mut entries = map.iter();
    let mut best = entries.next()?;
    for candidate in entries {
        if candidate.1.partial_cmp(best.1) == Some(wanted) {
            best = candidate;
        }
    }
    Some(best)
}

/// Returns the key of the largest value. Among equal maxima the earliest inserted wins.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([("foo", 42), ("baz", 24), ("qux", 42)]);
/// assert_eq!(helper::get_max_index(&map), Some(&"foo"));
/// assert_eq!(helper::get_max_index(&OrderedMap::<&str, i32>::new()), None);
/// ```
#[must_use]
pub fn get_max_index<K, V: PartialOrd>(map: &OrderedMap<K, V>) -> Option<&K> {
    extremum(map, Ordering::Greater).map(|(k, _)| k)
}

/// Returns the key of the smallest value. Among equal minima the earliest inserted wins.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{helper, OrderedMap};
///
/// let map = OrderedMap::from([("foo", 42), ("baz", 24)]);
/// assert_eq!(helper::get_min_index(&map), Some(&"baz"));
/// ```
#[must_use]
pub fn get_min_index<K, V: PartialOrd>(map: &OrderedMap<K, V>) -> Option<&K> {
    extremum(map, Ordering::Less).map(|(k, _)| k)
}

#[must_use]
pub fn get_max_value<K, V: PartialOrd>(map: &OrderedMap<K, V>) -> Option<&V> {
    extremum(map, Ordering::Greater).map(|(_, v)| v)
}

#[must_use]
pub fn get_min_value<K, V: PartialOrd>(map: &OrderedMap<K, V>) -> Option<&V> {
    extremum(map, Ordering::Less).map(|(_, v)| v)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{Key, Value, array};

    #[test]
    fn ties_go_to_the_earliest_entry() {
        let map = OrderedMap::from([(3, 1), (1, 7), (2, 7), (0, 1)]);
        assert_eq!(get_max_index(&map), Some(&1));
        assert_eq!(get_min_index(&map), Some(&3));
    }

    #[test]
    fn nan_never_wins() {
        let map = OrderedMap::from([("a", f64::NAN), ("b", 2.0), ("c", 1.0)]);
        assert_eq!(get_max_index(&map), Some(&"b"));
        assert_eq!(get_min_index(&map), Some(&"c"));
    }

    #[test]
    fn dynamic_values_use_natural_ordering() {
        let map = array! { "foo" => 42, "baz" => 24.5, "s" => "100" };
        assert_eq!(get_max_index(&map), Some(&Key::from("s")));
        assert_eq!(get_min_value(&map), Some(&Value::from(24.5)));

        let words = array! { 0 => "pear", 1 => "apple", 2 => "zucchini" };
        assert_eq!(get_max_value(&words), Some(&Value::from("zucchini")));
        assert_eq!(get_min_index(&words), Some(&Key::from(1)));
    }

    #[test]
    fn empty_map_has_no_extremum() {
        let map = array! {};
        assert_eq!(get_max_index(&map), None);
        assert_eq!(get_min_index(&map), None);
        assert_eq!(get_max_value(&map), None);
        assert_eq!(get_min_value(&map), None);
    }
}
