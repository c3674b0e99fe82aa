use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

use crate::{Key, OrderedMap};

/// A dynamic ordered array: integer or string keys, [`Value`] values, insertion order kept.
pub type Array = OrderedMap<Key, Value>;

/// A dynamically typed value stored in an [`Array`].
///
/// `Value::Map` nests another array. Every recursive helper matches on this
/// variant explicitly rather than probing types at runtime.
///
/// # Equality
///
/// Two equality policies are available and each helper documents which one it uses:
///
/// - `==` ([`PartialEq`]) is strict: same variant, same payload. `Int(1) != Float(1.0)`,
///   and nested maps must hold the same pairs in the same order.
/// - [`Value::loose_eq`] compares across types: numbers by value, numeric strings as
///   numbers, `Null`/`Bool` by truthiness, nested maps by key regardless of order.
///
/// # Ordering
///
/// [`Value::loose_cmp`] is the natural ordering used by the extremum helpers.
/// `PartialOrd` follows it, except that values which are loosely but not strictly
/// equal (say `Int(1)` and `Float(1.0)`) are reported as incomparable.
///
/// # Examples
///
/// ```
/// use ordmap_kit::Value;
///
/// assert_eq!(Value::from(42), Value::Int(42));
/// assert_ne!(Value::from(1), Value::from(1.0));
/// assert!(Value::from(1).loose_eq(&Value::from("1.0")));
/// assert!(Value::from(2) > Value::from(1.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(Array),
}

impl Value {
    /// Returns a short name for the variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Map(_) => "array",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Array> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns whether the value counts as "set".
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty array are falsy,
    /// everything else is truthy.
    ///
    /// ```
    /// use ordmap_kit::{array, Value};
    ///
    /// assert!(!Value::from("0").is_truthy());
    /// assert!(Value::from("0.0").is_truthy());
    /// assert!(!Value::from(array! {}).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Map(map) => !map.is_empty(),
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Integers pass through, booleans become `0`/`1`, integral floats and strings
    /// holding an integral number are converted. Anything else, including
    /// non-numeric strings, `Null` and arrays, yields `None`.
    ///
    /// ```
    /// use ordmap_kit::Value;
    ///
    /// assert_eq!(Value::from(" 42 ").to_int(), Some(42));
    /// assert_eq!(Value::from(3.0).to_int(), Some(3));
    /// assert_eq!(Value::from(3.5).to_int(), None);
    /// assert_eq!(Value::from("qux").to_int(), None);
    /// ```
    #[must_use]
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Float(f) => integral(*f),
            Value::Str(s) => {
                let trimmed = s.trim();
                trimmed.parse::<i64>().ok().or_else(|| parse_numeric(trimmed).and_then(integral))
            }
            Value::Null | Value::Map(_) => None,
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Booleans pass through, `Null` is `false`, `0`/`1` (integer or float) map to
    /// `false`/`true`, and the strings `"1"`, `"true"`, `"on"`, `"yes"` / `"0"`, `"false"`,
    /// `"off"`, `"no"`, `""` are recognized case-insensitively. Anything else yields `None`.
    ///
    /// ```
    /// use ordmap_kit::Value;
    ///
    /// assert_eq!(Value::from("Yes").to_bool(), Some(true));
    /// assert_eq!(Value::from(0).to_bool(), Some(false));
    /// assert_eq!(Value::Null.to_bool(), Some(false));
    /// assert_eq!(Value::from("qux").to_bool(), None);
    /// ```
    #[must_use]
    pub fn to_bool(&self) -> Option<bool> {
        const TRUE: [&str; 4] = ["1", "true", "on", "yes"];
        const FALSE: [&str; 5] = ["0", "false", "off", "no", ""];

        match self {
            Value::Bool(b) => Some(*b),
            Value::Null | Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            Value::Float(f) if *f == 0.0 => Some(false),
            Value::Float(f) if *f == 1.0 => Some(true),
            Value::Str(s) => {
                let s = s.trim();
                if TRUE.iter().any(|t| t.eq_ignore_ascii_case(s)) {
                    Some(true)
                } else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(s)) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns the value as a number if it is a number or a numeric string.
    fn to_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Loose equality: compares across types the way a weakly typed language would.
    ///
    /// - `Null` equals `Null`, `false`, `0`, `0.0`, `""` and the empty array.
    /// - A `Bool` equals anything with the same truthiness.
    /// - Numbers and numeric strings compare by numeric value.
    /// - Other strings compare byte for byte.
    /// - Arrays are equal when they hold loosely equal values under the same keys,
    ///   in any order. An array never equals a number or string.
    ///
    /// ```
    /// use ordmap_kit::{array, Value};
    ///
    /// assert!(Value::Null.loose_eq(&Value::from("")));
    /// assert!(!Value::Null.loose_eq(&Value::from("0")));
    /// assert!(Value::from("10").loose_eq(&Value::from("1e1")));
    /// assert!(Value::from(array! {"a" => 1, "b" => 2}).loose_eq(&Value::from(array! {"b" => "2", "a" => 1})));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(b), v) | (v, Value::Bool(b)) => *b == v.is_truthy(),
            (Value::Null, v) | (v, Value::Null) => match v {
                Value::Str(s) => s.is_empty(),
                _ => !v.is_truthy(),
            },
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, va)| b.get(k).is_some_and(|vb| va.loose_eq(vb)))
            }
            (Value::Map(_), _) | (_, Value::Map(_)) => false,
            _ => self.loose_cmp(other) == Some(Ordering::Equal),
        }
    }

    /// The natural ordering of values.
    ///
    /// - Integers compare exactly, other numbers and numeric strings compare numerically.
    /// - Non-numeric strings compare lexicographically; against a number, the number's
    ///   decimal form is compared instead.
    /// - `Null` and `Bool` compare by truthiness against anything.
    /// - Arrays compare by length first, then by the values at each of the left array's
    ///   keys; a key missing from the right array makes them incomparable. An array is
    ///   greater than any scalar.
    ///
    /// Returns `None` for incomparable values, such as `NaN`.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use ordmap_kit::Value;
    ///
    /// assert_eq!(Value::from(10).loose_cmp(&Value::from("9")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("10").loose_cmp(&Value::from("9a")), Some(Ordering::Less));
    /// ```
    #[must_use]
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
                Some(self.is_truthy().cmp(&other.is_truthy()))
            }
            (Value::Map(a), Value::Map(b)) => compare_maps(a, b),
            (Value::Map(_), _) => Some(Ordering::Greater),
            (_, Value::Map(_)) => Some(Ordering::Less),
            _ => match (self.to_number(), other.to_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => Some(scalar_text(self).cmp(&scalar_text(other))),
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.loose_cmp(other)? {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

fn compare_maps(a: &Array, b: &Array) -> Option<Ordering> {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ordering => return Some(ordering),
    }
    for (key, left) in a {
        match left.loose_cmp(b.get(key)?)? {
            Ordering::Equal => {}
            ordering => return Some(ordering),
        }
    }
    Some(Ordering::Equal)
}

/// Textual form of a number or string for mixed comparisons.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Int(i) => format!("{i}"),
        Value::Float(f) => format!("{f}"),
        Value::Str(s) => s.clone(),
        _ => String::new(),
    }
}

/// Parses a decimal number written in plain or exponent notation, ignoring
/// surrounding whitespace. Words such as `inf` or `NaN` are not numbers here.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (in_range && (f as i64) as f64 == f).then_some(f as i64)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Array> for Value {
    fn from(map: Array) -> Self {
        Value::Map(map)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
