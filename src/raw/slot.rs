use core::num::NonZero;

#[cfg(test)]
type RawSlot = u16;
#[cfg(not(test))]
type RawSlot = u32;

/// Index of an entry inside [`Slots`](super::slots::Slots).
///
/// Stored off by one so that `Option<Slot>` is the same size as `Slot`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Slot(NonZero<RawSlot>);

impl Slot {
    pub(crate) const MAX: usize = (RawSlot::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Slot::new()` - `index` > `Slot::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as RawSlot) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Slot, Option<Slot>);
    assert_eq_size!(Slot, RawSlot);

    #[test]
    #[should_panic(expected = "`Slot::new()` - `index` > `Slot::MAX`!")]
    fn slot_past_max() {
        let _ = Slot::new(Slot::MAX + 1);
    }

    #[test]
    fn slots_order_by_index() {
        assert!(Slot::new(0) < Slot::new(1));
        assert_eq!(Slot::new(7).index(), 7);
    }

    proptest! {
        #[test]
        fn slot_keeps_index(index in 0..=Slot::MAX) {
            prop_assert_eq!(Slot::new(index).index(), index);
        }
    }
}
