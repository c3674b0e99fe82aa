use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OrderedMap;
use crate::Position;

impl<K, V> OrderedMap<K, V> {
    /// Returns the key-value pair at zero-based insertion-order `position`.
    ///
    /// The position counts live entries only: gaps in integer keys, or entries
    /// removed earlier, do not shift it.
    ///
    /// Returns `None` if `position` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(1) on a map with no pending holes, O(n) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(5, "a");
    /// map.insert(9, "b");
    /// map.insert(0, "c");
    ///
    /// assert_eq!(map.get_by_position(1), Some((&9, &"b")));
    /// assert!(map.get_by_position(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_position(&self, position: usize) -> Option<(&K, &V)> {
        self.raw.by_position(position).map(|b| (&b.key, &b.value))
    }

    /// Returns the key and a mutable reference to the value at zero-based
    /// insertion-order `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(10, "a");
    /// map.insert(5, "b");
    ///
    /// if let Some((key, value)) = map.get_by_position_mut(0) {
    ///     assert_eq!(*key, 10);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&10), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_position_mut(&mut self, position: usize) -> Option<(&K, &mut V)> {
        self.raw.by_position_mut(position).map(|b| (&b.key, &mut b.value))
    }

    /// Returns the zero-based insertion-order position of `key`, or `None` if
    /// the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(20, "a");
    /// map.insert(10, "b");
    ///
    /// assert_eq!(map.position_of(&10), Some(1));
    /// assert_eq!(map.position_of(&15), None);
    /// ```
    #[must_use]
    pub fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.position_of(key)
    }
}

/// Indexes into the map by insertion-order position.
///
/// # Panics
///
/// Panics if `position` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{OrderedMap, Position};
///
/// let mut map = OrderedMap::new();
/// map.insert("b", 1);
/// map.insert("a", 2);
///
/// assert_eq!(map[Position(0)], 1);
/// ```
impl<K, V> Index<Position> for OrderedMap<K, V> {
    type Output = V;

    fn index(&self, position: Position) -> &Self::Output {
        self.get_by_position(position.0).map(|(_, v)| v).expect("position out of bounds")
    }
}

/// Mutably indexes into the map by insertion-order position.
///
/// # Panics
///
/// Panics if `position` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{OrderedMap, Position};
///
/// let mut map = OrderedMap::from([("b", 1), ("a", 2)]);
/// map[Position(1)] = 5;
///
/// assert_eq!(map.get(&"a"), Some(&5));
/// ```
impl<K, V> IndexMut<Position> for OrderedMap<K, V> {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        self.get_by_position_mut(position.0).map(|(_, v)| v).expect("position out of bounds")
    }
}
