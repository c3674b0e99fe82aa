use alloc::string::String;
use core::fmt;

/// A key of a dynamic [`Array`](crate::Array): either an integer or a string.
///
/// Keys are totally ordered so they can index an [`OrderedMap`](crate::OrderedMap):
/// every `Int` sorts before every `Str`, integers compare numerically and strings
/// lexicographically. That order only drives lookups; iteration always follows
/// insertion order.
///
/// String keys are kept as given, so `Key::from("1")` and `Key::from(1)` are
/// different keys.
///
/// # Examples
///
/// ```
/// use ordmap_kit::Key;
///
/// assert_eq!(Key::from(3), Key::Int(3));
/// assert_eq!(Key::from("foo").as_str(), Some("foo"));
/// assert!(Key::from(100) < Key::from("0"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(String::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn ints_sort_before_strings() {
        let mut keys = [Key::from("b"), Key::from(10), Key::from("a"), Key::from(-1)];
        keys.sort();
        assert_eq!(keys, [Key::Int(-1), Key::Int(10), Key::from("a"), Key::from("b")]);
    }

    #[test]
    fn numeric_strings_stay_strings() {
        assert_ne!(Key::from("1"), Key::from(1));
        assert_eq!(Key::from("1").as_int(), None);
        assert_eq!(Key::from(1).as_int(), Some(1));
        assert_eq!(Key::from(1).as_str(), None);
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(Key::from(42).to_string(), "42");
        assert_eq!(Key::from("foo").to_string(), "foo");
    }
}
