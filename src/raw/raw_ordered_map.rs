use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::borrow::Borrow;

use super::slot::Slot;
use super::slots::Slots;

/// Holes below this count are never compacted away.
const MIN_HOLES_TO_COMPACT: usize = 16;

/// A key-value pair as stored in slot order.
#[derive(Clone, Debug)]
pub(crate) struct Bucket<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Storage behind `OrderedMap`.
///
/// `entries` holds the pairs in insertion order (with holes left by removals),
/// `index` maps every live key to its slot. Both always describe the same set
/// of keys.
#[derive(Clone)]
pub(crate) struct RawOrderedMap<K, V> {
    entries: Slots<Bucket<K, V>>,
    index: BTreeMap<K, Slot>,
}

impl<K, V> RawOrderedMap<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Slots::new(),
            index: BTreeMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slots::with_capacity(capacity),
            index: BTreeMap::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub(crate) fn buckets(&self) -> &[Option<Bucket<K, V>>] {
        self.entries.as_slice()
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [Option<Bucket<K, V>>] {
        self.entries.as_mut_slice()
    }

    pub(crate) fn into_pairs(self) -> Vec<(K, V)> {
        self.entries.into_vec().into_iter().map(|b| (b.key, b.value)).collect()
    }

    pub(crate) fn first(&self) -> Option<&Bucket<K, V>> {
        self.entries.first().map(|slot| self.entries.get(slot))
    }

    pub(crate) fn last(&self) -> Option<&Bucket<K, V>> {
        self.entries.last().map(|slot| self.entries.get(slot))
    }

    pub(crate) fn by_position(&self, position: usize) -> Option<&Bucket<K, V>> {
        self.entries.nth(position).map(|slot| self.entries.get(slot))
    }

    pub(crate) fn by_position_mut(&mut self, position: usize) -> Option<&mut Bucket<K, V>> {
        self.entries.nth(position).map(|slot| self.entries.get_mut(slot))
    }
}

impl<K: Ord, V> RawOrderedMap<K, V> {
    fn slot_of<Q>(&self, key: &Q) -> Option<Slot>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.index.get(key).copied()
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&Bucket<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.slot_of(key).map(|slot| self.entries.get(slot))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Bucket<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.slot_of(key).map(|slot| self.entries.get_mut(slot))
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.index.contains_key(key)
    }

    pub(crate) fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.slot_of(key).map(|slot| self.entries.rank(slot))
    }

    /// Replaces the value of an existing key in place, or appends a new entry.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        if let Some(slot) = self.slot_of(&key) {
            return Some(core::mem::replace(&mut self.entries.get_mut(slot).value, value));
        }

        let slot = self.entries.push(Bucket {
            key: key.clone(),
            value,
        });
        self.index.insert(key, slot);
        None
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let slot = self.index.remove(key)?;
        let bucket = self.entries.take(slot);
        self.compact_if_sparse();
        Some((bucket.key, bucket.value))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let slot = self.entries.first()?;
        Some(self.take(slot))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let slot = self.entries.last()?;
        Some(self.take(slot))
    }

    fn take(&mut self, slot: Slot) -> (K, V) {
        let bucket = self.entries.take(slot);
        self.index.remove(&bucket.key);
        self.compact_if_sparse();
        (bucket.key, bucket.value)
    }

    /// Exchanges the values stored under two keys. Both keys keep their positions.
    pub(crate) fn swap_values<Q>(&mut self, a: &Q, b: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (Some(slot_a), Some(slot_b)) = (self.slot_of(a), self.slot_of(b)) else {
            return false;
        };
        if slot_a != slot_b {
            let (left, right) = self.entries.pair_mut(slot_a, slot_b);
            core::mem::swap(&mut left.value, &mut right.value);
        }
        true
    }

    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let doomed: Vec<Slot> = self
            .entries
            .occupied_mut()
            .filter_map(|(slot, bucket)| (!f(&bucket.key, &mut bucket.value)).then_some(slot))
            .collect();

        for slot in doomed {
            let bucket = self.entries.take(slot);
            self.index.remove(&bucket.key);
        }
        self.compact_if_sparse();
    }

    fn compact_if_sparse(&mut self) {
        let holes = self.entries.holes();
        if holes < MIN_HOLES_TO_COMPACT || holes <= self.entries.len() {
            return;
        }

        log::trace!("compacting ordered map storage: {holes} holes, {} live entries", self.entries.len());
        self.entries.compact();
        for (slot, bucket) in self.entries.occupied() {
            if let Some(indexed) = self.index.get_mut(&bucket.key) {
                *indexed = slot;
            }
        }
    }
}
