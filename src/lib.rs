//! Insertion-ordered maps, array helpers and descriptive statistics.
//!
//! This crate provides [`OrderedMap`], a map that iterates in insertion order, and two
//! collections of free functions built on it:
//!
//! - [`helper`] - positional access ("real" first/last entry regardless of key gaps),
//!   extremum queries, in-place mutation (move, remove by key or value), flattening,
//!   nested search and value comparison.
//! - [`stats`] - sum, average, median, mode, range, population variance and standard
//!   deviation over a map's values.
//!
//! Dynamic, loosely typed arrays are modelled as [`Array`] = `OrderedMap<Key, Value>`, where
//! [`Key`] is an integer or a string and [`Value`] is a tagged union that may nest further
//! arrays. The [`array!`] macro builds one literally.
//!
//! # Example
//!
//! ```
//! use ordmap_kit::{array, helper, stats, Key, Value};
//!
//! let mut scores = array! {
//!     "alice" => 42,
//!     "bob" => 24,
//!     "carol" => 42,
//! };
//!
//! assert_eq!(helper::get_first_value(&scores), Some(&Value::from(42)));
//! assert_eq!(helper::get_min_index(&scores), Some(&Key::from("bob")));
//! assert_eq!(stats::get_mode(&scores), Some(&Value::from(42)));
//! assert_eq!(stats::get_sum(&scores), Ok(108.0));
//!
//! assert!(helper::remove_value(&mut scores, &Value::from(42)));
//! assert_eq!(helper::get_keys(&scores), [Key::from("bob")]);
//! ```
//!
//! # Features
//!
//! - **`std`** (default) - enables the [`stats`] module. Without it the crate is
//!   `no_std` and only needs `alloc`.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; the crate never
//! installs a logger of its own.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod key;
mod numeric;
mod position;
mod raw;
mod total_ord;
mod value;

pub mod error;
pub mod helper;
pub mod ordered_map;
#[cfg(feature = "std")]
pub mod stats;

pub use error::{Error, Result};
pub use key::Key;
pub use numeric::Numeric;
pub use ordered_map::OrderedMap;
pub use position::Position;
pub use total_ord::TotalOrd;
pub use value::{Array, Value};

/// Builds an [`Array`] from `key => value` pairs, in the order written.
///
/// Keys go through [`Key::from`] and values through [`Value::from`], so nested
/// `array!` invocations become [`Value::Map`]. A repeated key keeps its first
/// position and its last value.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, Key, Value};
///
/// let config = array! {
///     "name" => "demo",
///     7 => 1.5,
///     "nested" => array! { "enabled" => true },
/// };
///
/// assert_eq!(config.len(), 3);
/// assert_eq!(config[&Key::from(7)], Value::Float(1.5));
/// assert!(config[&Key::from("nested")].is_map());
/// assert!(array! {}.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(
            array.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        array
    }};
}
