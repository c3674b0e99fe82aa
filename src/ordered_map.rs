use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;
use core::slice;

use alloc::vec;

use crate::raw::{Bucket, RawOrderedMap};

mod capacity;
mod position;

pub use crate::Position;

/// A map that remembers the order in which its keys were first inserted.
///
/// Iterators obtained from functions such as [`OrderedMap::iter`], [`OrderedMap::into_iter`],
/// [`OrderedMap::values`], or [`OrderedMap::keys`] produce their items in insertion order.
/// Inserting a key that is already present replaces its value and keeps its position.
/// Removing a key keeps the relative order of every other entry.
///
/// Keys must implement [`Ord`] (and [`Clone`] for insertion): lookups go through a
/// sorted index, iteration goes through the insertion-ordered storage.
///
/// "First" and "last" always refer to insertion order, never to key order:
///
/// ```
/// use ordmap_kit::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(10, "ten");
/// map.insert(3, "three");
/// map.insert(7, "seven");
///
/// assert_eq!(map.first_key_value(), Some((&10, &"ten")));
/// assert_eq!(map.last_key_value(), Some((&7, &"seven")));
///
/// map.remove(&3);
/// assert!(map.keys().eq([10, 7].iter()));
/// ```
///
/// An `OrderedMap` with a known list of items can be initialized from an array:
///
/// ```
/// use ordmap_kit::OrderedMap;
///
/// let planets = OrderedMap::from([
///     ("Venus", 0.7),
///     ("Mercury", 0.4),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(planets.keys().copied().collect::<Vec<_>>(), ["Venus", "Mercury", "Mars"]);
/// ```
///
/// # Storage
///
/// Entries live in a vector in insertion order. A removal leaves a hole behind instead of
/// shifting its successors, and the vector is compacted once holes outnumber live entries.
/// Key lookups use a sorted index from key to storage slot and take O(log n). Positional
/// lookups ([`OrderedMap::get_by_position`]) are O(1) on a map without holes and O(n)
/// otherwise.
pub struct OrderedMap<K, V> {
    raw: RawOrderedMap<K, V>,
}

/// An iterator over the entries of an `OrderedMap`.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use ordmap_kit::OrderedMap;
///
/// let map = OrderedMap::from([(2, "b"), (1, "a")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Option<Bucket<K, V>>>,
    remaining: usize,
}

/// A mutable iterator over the entries of an `OrderedMap`.
///
/// This `struct` is created by the [`iter_mut`] method on [`OrderedMap`].
///
/// [`iter_mut`]: OrderedMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Option<Bucket<K, V>>>,
    remaining: usize,
}

/// An owning iterator over the entries of an `OrderedMap`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values_mut`] method on [`OrderedMap`].
///
/// [`values_mut`]: OrderedMap::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            raw: RawOrderedMap::new(),
        }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).map(|b| &b.value)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).map(|b| (&b.key, &b.value))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).map(|b| &mut b.value)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// A key mapped to a "null-like" value is still contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, None::<&str>);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Returns the first inserted key-value pair still in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first_key_value(), Some((&2, &"b")));
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|b| (&b.key, &b.value))
    }

    /// Returns the last inserted key-value pair still in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.last_key_value(), Some((&1, &"a")));
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|b| (&b.key, &b.value))
    }

    /// Removes and returns the first inserted entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("z", 1), ("a", 2)]);
    /// assert_eq!(map.pop_first(), Some(("z", 1)));
    /// assert_eq!(map.pop_first(), Some(("a", 2)));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)>
    where
        K: Ord,
    {
        self.raw.pop_first()
    }

    /// Removes and returns the last inserted entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("z", 1), ("a", 2)]);
    /// assert_eq!(map.pop_last(), Some(("a", 2)));
    /// assert_eq!(map.pop_last(), Some(("z", 1)));
    /// assert_eq!(map.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)>
    where
        K: Ord,
    {
        self.raw.pop_last()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, the pair is appended and `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place, the key keeps
    /// its position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// map.insert("b", 2);
    /// assert_eq!(map.insert("a", 3), Some(1));
    /// assert_eq!(map.first_key_value(), Some((&"a", &3)));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n), amortized.
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord + Clone,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. The remaining entries keep their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)` returns `false`.
    /// The elements are visited in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = (0..8).rev().map(|x| (x, x * 10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.into_iter().eq(vec![(6, 60), (4, 40), (2, 20), (0, 0)]));
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&K, &mut V) -> bool,
    {
        self.raw.retain(f);
    }

    /// Exchanges the values stored under `a` and `b`.
    ///
    /// Both keys keep their positions. Returns `false`, leaving the map untouched,
    /// if either key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert!(map.swap_values(&"a", &"b"));
    /// assert!(map.iter().eq([(&"a", &2), (&"b", &1)]));
    /// assert!(!map.swap_values(&"a", &"c"));
    /// ```
    pub fn swap_values<Q>(&mut self, a: &Q, b: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.swap_values(a, b)
    }

    /// Creates a consuming iterator visiting all the keys, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<i32> = a.into_keys().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (3, "c"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.raw.buckets().iter(),
            remaining: self.raw.len(),
        }
    }

    /// Gets a mutable iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // add 10 to the value if the key isn't "a"
    /// for (key, value) in map.iter_mut() {
    ///     if key != &"a" {
    ///         *value += 10;
    ///     }
    /// }
    /// assert!(map.values().eq([1, 12, 13].iter()));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let remaining = self.raw.len();
        IterMut {
            inner: self.raw.buckets_mut().iter_mut(),
            remaining,
        }
    }

    /// Gets an iterator over the keys of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, String::from("hello"));
    /// a.insert(2, String::from("goodbye"));
    ///
    /// for value in a.values_mut() {
    ///     value.push_str("!");
    /// }
    ///
    /// let values: Vec<String> = a.values().cloned().collect();
    /// assert_eq!(values, [String::from("hello!"), String::from("goodbye!")]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap {
            raw: self.raw.clone(),
        }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

/// Two maps are equal when they hold the same pairs in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((2, "b")));
    /// assert_eq!(iter.next_back(), Some((1, "a")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_pairs().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `OrderedMap`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord + Clone, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let bucket = self.inner.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some((&bucket.key, &bucket.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let bucket = self.inner.by_ref().rev().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some((&bucket.key, &bucket.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty `ordered_map::Iter`.
    ///
    /// ```
    /// # use ordmap_kit::ordered_map;
    /// let iter: ordered_map::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: slice::Iter::default(),
            remaining: 0,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let bucket = self.inner.by_ref().find_map(Option::as_mut)?;
        self.remaining -= 1;
        Some((&bucket.key, &mut bucket.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let bucket = self.inner.by_ref().rev().find_map(Option::as_mut)?;
        self.remaining -= 1;
        Some((&bucket.key, &mut bucket.value))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish()
    }
}

impl<K, V> Default for IterMut<'_, K, V> {
    /// Creates an empty `ordered_map::IterMut`.
    ///
    /// ```
    /// # use ordmap_kit::ordered_map;
    /// let iter: ordered_map::IterMut<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IterMut {
            inner: slice::IterMut::default(),
            remaining: 0,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `ordered_map::IntoIter`.
    ///
    /// ```
    /// # use ordmap_kit::ordered_map;
    /// let iter: ordered_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::IntoIter::default(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Keys<'_, K, V> {
    fn default() -> Self {
        Keys {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Values<'_, K, V> {
    fn default() -> Self {
        Values {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.remaining).finish()
    }
}

impl<K, V> Default for ValuesMut<'_, K, V> {
    fn default() -> Self {
        ValuesMut {
            inner: IterMut::default(),
        }
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Default for IntoKeys<K, V> {
    fn default() -> Self {
        IntoKeys {
            inner: IntoIter::default(),
        }
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}

impl<K, V> Default for IntoValues<K, V> {
    fn default() -> Self {
        IntoValues {
            inner: IntoIter::default(),
        }
    }
}
