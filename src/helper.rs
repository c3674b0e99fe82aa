//! Free functions over [`OrderedMap`](crate::OrderedMap) and [`Array`](crate::Array).
//!
//! All functions take the map by reference and never keep it past the call.
//! Absence is never an error: lookups return `None`, mutators return `false`.
//!
//! | Group | Functions |
//! |---|---|
//! | Lookup | [`get_value`], [`get_value_or`], [`get_int_or_null`], [`get_bool_or_null`] |
//! | Position | [`get_first_index`], [`get_last_index`], [`get_first_value`], [`get_last_value`], [`get_first_values`], [`get_last_values`] |
//! | Extremum | [`get_max_index`], [`get_min_index`], [`get_max_value`], [`get_min_value`] |
//! | Mutation | [`move_value`], [`remove_first`], [`remove_last`], [`remove_value`], [`remove_by_keys`] |
//! | Aggregation | [`get_keys`], [`get_values`], [`get_keys_of_modified_values`], [`get_simple_array`], [`array_contains`], [`is_empty`], [`is_equal`] |

mod access;
mod compare;
mod extremum;
mod mutate;

pub use access::{
    get_bool_or_null, get_first_index, get_first_value, get_first_values, get_int_or_null, get_last_index,
    get_last_value, get_last_values, get_value, get_value_or,
};
pub use compare::{
    array_contains, get_keys, get_keys_of_modified_values, get_simple_array, get_values, is_empty, is_equal,
};
pub use extremum::{get_max_index, get_max_value, get_min_index, get_min_value};
pub use mutate::{move_value, remove_by_keys, remove_first, remove_last, remove_value};
