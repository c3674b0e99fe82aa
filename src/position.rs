/// A zero-based position in the insertion order of an [`OrderedMap`](crate::OrderedMap).
///
/// Positions ignore key values entirely: the entry inserted first is at
/// `Position(0)` whether its key is `0`, `42` or `"foo"`.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{OrderedMap, Position};
///
/// let mut map = OrderedMap::new();
/// map.insert(7, "a");
/// map.insert(3, "b");
///
/// assert_eq!(map[Position(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(pub usize);
