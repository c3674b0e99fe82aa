//! Descriptive statistics over the values of an [`OrderedMap`].
//!
//! Keys are ignored. Every function reads the values through [`Numeric`], so a map
//! of plain numbers works as well as an [`Array`](crate::Array) holding
//! [`Value::Int`](crate::Value::Int) and [`Value::Float`](crate::Value::Float).
//! Any other value, or a NaN or infinite number, fails the whole computation with
//! an [`Error`] naming the insertion-order position at fault. Finite inputs whose
//! statistic would not be finite (say the sum of two values near `f64::MAX`) fail
//! with [`Error::Overflow`] instead of returning an infinity or a NaN.
//!
//! # Algorithms
//!
//! - **Sum / average**: Kahan-Babuska (Neumaier) compensated summation.
//! - **Variance / standard deviation**: Welford's online update, divisor `n`.
//! - **Median**: sort a copy, take the middle value or the mean of the two middle ones.
//! - **Mode**: sort positions by [`TotalOrd`] and count runs of equal values.
//!
//! # Examples
//!
//! ```
//! use ordmap_kit::{array, stats};
//!
//! let map = array! { "foo" => 42, "baz" => 24 };
//!
//! assert_eq!(stats::get_sum(&map), Ok(66.0));
//! assert_eq!(stats::get_average(&map), Ok(Some(33.0)));
//! assert_eq!(stats::get_median(&map), Ok(Some(33.0)));
//! assert_eq!(stats::get_range(&map), Ok(18.0));
//! assert_eq!(stats::get_variance(&map), Ok(Some(81.0)));
//! assert_eq!(stats::get_standard_deviation(&map), Ok(Some(9.0)));
//! ```

use alloc::vec::Vec;

use crate::{Error, Numeric, OrderedMap, Result, TotalOrd};

/// Reads every value as a finite `f64`, in insertion order.
fn numbers<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<Vec<f64>> {
    map.values()
        .enumerate()
        .map(|(position, value)| match value.to_f64() {
            Some(x) if x.is_finite() => Ok(x),
            Some(_) => Err(Error::NotFinite { position }),
            None => Err(Error::NotNumeric { position, found: value.kind() }),
        })
        .collect()
}

/// Reads a finished statistic, failing if it left the finite range.
fn finite(statistic: &'static str, x: f64) -> Result<f64> {
    if x.is_finite() { Ok(x) } else { Err(Error::Overflow { statistic }) }
}

/// Neumaier summation. Once the running sum overflows it is returned as is, so
/// the compensation term never turns an infinity into a NaN.
fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if !t.is_finite() {
            return t;
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Running mean and sum of squared deviations.
#[derive(Debug, Default)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    #[allow(clippy::cast_precision_loss)]
    fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }
}

/// Returns the sum of the values, `0.0` for an empty map.
///
/// # Errors
///
/// Fails if a value is not numeric or not finite.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{stats, Error, OrderedMap};
///
/// assert_eq!(stats::get_sum(&OrderedMap::from([("a", 0.1), ("b", 0.2), ("c", 0.3)])), Ok(0.6));
/// assert_eq!(stats::get_sum(&OrderedMap::<&str, i32>::new()), Ok(0.0));
/// assert_eq!(stats::get_sum(&OrderedMap::from([("a", f64::NAN)])), Err(Error::NotFinite { position: 0 }));
/// ```
pub fn get_sum<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<f64> {
    finite("sum", kahan_sum(&numbers(map)?))
}

/// Returns the arithmetic mean of the values, `None` for an empty map.
///
/// # Errors
///
/// Fails if a value is not numeric or not finite.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{stats, OrderedMap};
///
/// let map = OrderedMap::from([("a", 1e308), ("b", 1e308)]);
/// assert_eq!(stats::get_average(&map), Ok(Some(1e308)));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn get_average<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<Option<f64>> {
    let data = numbers(map)?;
    if data.is_empty() {
        return Ok(None);
    }
    let n = data.len() as f64;
    let sum = kahan_sum(&data);
    if sum.is_finite() {
        return Ok(Some(sum / n));
    }
    // Scaled terms keep every partial sum within the largest magnitude.
    let scaled: Vec<f64> = data.iter().map(|x| x / n).collect();
    finite("average", kahan_sum(&scaled)).map(Some)
}

/// Returns the median of the values, `None` for an empty map.
///
/// With an even count the median is the mean of the two middle values.
///
/// # Errors
///
/// Fails if a value is not numeric or not finite.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, stats};
///
/// assert_eq!(stats::get_median(&array! { 0 => 3, 1 => 1, 2 => 2 }), Ok(Some(2.0)));
/// assert_eq!(stats::get_median(&array! { 0 => 4, 1 => 1, 2 => 2, 3 => 3 }), Ok(Some(2.5)));
/// assert_eq!(stats::get_median(&array! {}), Ok(None));
/// ```
pub fn get_median<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<Option<f64>> {
    let mut sorted = numbers(map)?;
    if sorted.is_empty() {
        return Ok(None);
    }
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(Some(sorted[n / 2]))
    } else {
        Ok(Some(sorted[n / 2 - 1] / 2.0 + sorted[n / 2] / 2.0))
    }
}

/// Returns the most frequent value, `None` for an empty map.
///
/// Among values with the same frequency the one that occurs first in insertion
/// order wins. Values are grouped with [`TotalOrd`], which agrees with `==`, so no
/// value has to be numeric. Runs in O(n log n).
///
/// # Examples
///
/// ```
/// use ordmap_kit::{array, stats, Value};
///
/// assert_eq!(stats::get_mode(&array! { 0 => 42, 1 => 24, 2 => 42 }), Some(&Value::from(42)));
/// assert_eq!(stats::get_mode(&array! { 0 => "b", 1 => "a" }), Some(&Value::from("b")));
/// ```
#[must_use]
pub fn get_mode<K, V: TotalOrd>(map: &OrderedMap<K, V>) -> Option<&V> {
    let mut sorted: Vec<(usize, &V)> = map.values().enumerate().collect();
    // Stable, so each run of equal values starts with its earliest position.
    sorted.sort_by(|(_, a), (_, b)| a.cmp_total(b));

    sorted
        .chunk_by(|(_, a), (_, b)| a.cmp_total(b).is_eq())
        .map(|run| (run.len(), run[0]))
        .max_by(|(count_a, (first_a, _)), (count_b, (first_b, _))| {
            count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
        })
        .map(|(_, (_, value))| value)
}

/// Returns the largest value minus the smallest, `0.0` for an empty map.
///
/// # Errors
///
/// Fails if a value is not numeric or not finite, or if the difference overflows.
pub fn get_range<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<f64> {
    let data = numbers(map)?;
    let Some((&first, rest)) = data.split_first() else {
        return Ok(0.0);
    };
    let (min, max) = rest.iter().fold((first, first), |(min, max), &x| (min.min(x), max.max(x)));
    finite("range", max - min)
}

/// Returns the population variance of the values (divisor `n`), `None` for an
/// empty map.
///
/// # Errors
///
/// Fails if a value is not numeric or not finite, or if the spread of the values
/// overflows.
///
/// # Examples
///
/// ```
/// use ordmap_kit::{stats, OrderedMap};
///
/// let map: OrderedMap<usize, i32> = [2, 4, 4, 4, 5, 5, 7, 9].into_iter().enumerate().collect();
/// let variance = stats::get_variance(&map).unwrap().unwrap();
/// assert!((variance - 4.0).abs() < 1e-12);
/// ```
pub fn get_variance<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<Option<f64>> {
    let mut acc = Welford::default();
    for x in numbers(map)? {
        acc.update(x);
    }
    acc.population_variance()
        .map(|variance| finite("variance", variance))
        .transpose()
}

/// Returns the population standard deviation of the values, `None` for an empty
/// map.
///
/// # Errors
///
/// Fails like [`get_variance`].
pub fn get_standard_deviation<K, V: Numeric>(map: &OrderedMap<K, V>) -> Result<Option<f64>> {
    Ok(get_variance(map)?.map(f64::sqrt))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{Value, array};

    #[test]
    fn kahan_sum_recovers_lost_bits() {
        let data = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(kahan_sum(&data), 2.0);
        assert_eq!(kahan_sum(&[]), 0.0);
    }

    #[test]
    fn kahan_sum_stops_at_overflow() {
        assert_eq!(kahan_sum(&[1e308, 1e308, -1e308]), f64::INFINITY);
        assert_eq!(kahan_sum(&[-1e308, -1e308]), f64::NEG_INFINITY);
    }

    #[test]
    fn welford_matches_two_pass() {
        let data = [1.5, -3.0, 8.25, 0.0, 4.0];
        let mut acc = Welford::default();
        data.iter().for_each(|&x| acc.update(x));
        #[allow(clippy::cast_precision_loss)]
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let expected = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!((acc.population_variance().unwrap() - expected).abs() < 1e-12);
        assert_eq!(Welford::default().population_variance(), None);
    }

    #[test]
    fn non_numeric_values_are_reported_by_position() {
        let map = array! { "a" => 1, "b" => "2", "c" => 3 };
        assert_eq!(get_sum(&map), Err(Error::NotNumeric { position: 1, found: "string" }));
        assert_eq!(
            get_median(&array! { 0 => 1, 1 => Value::Null }),
            Err(Error::NotNumeric { position: 1, found: "null" })
        );
    }

    #[test]
    fn infinities_are_rejected() {
        let map = array! { "a" => 1, "b" => f64::INFINITY };
        assert_eq!(get_range(&map), Err(Error::NotFinite { position: 1 }));
        assert_eq!(get_variance(&map), Err(Error::NotFinite { position: 1 }));
    }

    #[test]
    fn single_value_has_zero_spread() {
        let map = array! { "only" => 7 };
        assert_eq!(get_range(&map), Ok(0.0));
        assert_eq!(get_variance(&map), Ok(Some(0.0)));
        assert_eq!(get_standard_deviation(&map), Ok(Some(0.0)));
        assert_eq!(get_median(&map), Ok(Some(7.0)));
    }

    #[test]
    fn empty_map() {
        let map = array! {};
        assert_eq!(get_sum(&map), Ok(0.0));
        assert_eq!(get_average(&map), Ok(None));
        assert_eq!(get_median(&map), Ok(None));
        assert_eq!(get_mode(&map), None);
        assert_eq!(get_range(&map), Ok(0.0));
        assert_eq!(get_variance(&map), Ok(None));
        assert_eq!(get_standard_deviation(&map), Ok(None));
    }

    #[test]
    fn mode_is_type_exact() {
        let map = array! { 0 => 1, 1 => 1.0, 2 => 1.0 };
        assert_eq!(get_mode(&map), Some(&Value::Float(1.0)));
    }

    #[test]
    fn mode_tie_goes_to_earliest() {
        let map = array! { 0 => 3, 1 => 5, 2 => 5, 3 => 3 };
        assert_eq!(get_mode(&map), Some(&Value::Int(3)));
    }
}
