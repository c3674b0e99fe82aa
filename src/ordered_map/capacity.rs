use super::OrderedMap;
use crate::raw::RawOrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// its storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_kit::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            raw: RawOrderedMap::with_capacity(capacity),
        }
    }

    /// Returns how many entries the storage holds before it reallocates.
    ///
    /// Holes left by removals count against the capacity until the storage is compacted.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
