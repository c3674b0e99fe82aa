use alloc::vec::Vec;

use super::slot::Slot;

/// Append-only element storage that remembers insertion order.
///
/// Taking an element leaves a hole so every other element keeps its slot.
/// Holes are only reclaimed by [`Slots::compact`], which renumbers the slots.
#[derive(Clone)]
pub(crate) struct Slots<T> {
    slots: Vec<Option<T>>,
    holes: usize,
}

impl<T> Slots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            holes: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            holes: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.holes
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) const fn holes(&self) -> usize {
        self.holes
    }

    pub(crate) fn push(&mut self, element: T) -> Slot {
        assert!(
            self.slots.len() <= Slot::MAX,
            "`Slots::push()` - storage is at maximum capacity ({})",
            Slot::MAX
        );
        let slot = Slot::new(self.slots.len());
        self.slots.push(Some(element));
        slot
    }

    #[inline]
    pub(crate) fn get(&self, slot: Slot) -> &T {
        self.slots[slot.index()].as_ref().expect("`Slots::get()` - `slot` is a hole!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: Slot) -> &mut T {
        self.slots[slot.index()].as_mut().expect("`Slots::get_mut()` - `slot` is a hole!")
    }

    /// Returns mutable references to two distinct occupied slots, in argument order.
    pub(crate) fn pair_mut(&mut self, a: Slot, b: Slot) -> (&mut T, &mut T) {
        let (i, j) = (a.index(), b.index());
        assert_ne!(i, j, "`Slots::pair_mut()` - `a` and `b` are the same slot!");

        let (low, high) = (i.min(j), i.max(j));
        let (head, tail) = self.slots.split_at_mut(high);
        let low_ref = head[low].as_mut().expect("`Slots::pair_mut()` - slot is a hole!");
        let high_ref = tail[0].as_mut().expect("`Slots::pair_mut()` - slot is a hole!");

        if i < j { (low_ref, high_ref) } else { (high_ref, low_ref) }
    }

    pub(crate) fn take(&mut self, slot: Slot) -> T {
        let element = self.slots[slot.index()].take().expect("`Slots::take()` - `slot` is a hole!");
        self.holes += 1;
        element
    }

    pub(crate) fn first(&self) -> Option<Slot> {
        self.slots.iter().position(Option::is_some).map(Slot::new)
    }

    pub(crate) fn last(&self) -> Option<Slot> {
        self.slots.iter().rposition(Option::is_some).map(Slot::new)
    }

    /// Returns the slot of the `n`th live element.
    pub(crate) fn nth(&self, n: usize) -> Option<Slot> {
        if self.holes == 0 {
            return (n < self.slots.len()).then(|| Slot::new(n));
        }
        self.occupied().nth(n).map(|(slot, _)| slot)
    }

    /// Returns how many live elements precede `slot`.
    pub(crate) fn rank(&self, slot: Slot) -> usize {
        if self.holes == 0 {
            return slot.index();
        }
        self.slots[..slot.index()].iter().filter(|s| s.is_some()).count()
    }

    pub(crate) fn occupied(&self) -> impl DoubleEndedIterator<Item = (Slot, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, element)| element.as_ref().map(|e| (Slot::new(index), e)))
    }

    pub(crate) fn occupied_mut(&mut self) -> impl DoubleEndedIterator<Item = (Slot, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, element)| element.as_mut().map(|e| (Slot::new(index), e)))
    }

    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Drops every hole. Live elements keep their relative order but get new slots.
    pub(crate) fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.holes = 0;
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.holes = 0;
    }
}
