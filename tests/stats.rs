use ordmap_kit::{Error, OrderedMap, Value, array, stats};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("a value for a non-empty map");
    assert!((actual - expected).abs() < EPSILON, "{actual} != {expected}");
}

#[test]
fn two_value_fixture() {
    let map = array! { "foo" => 42, "baz" => 24 };
    assert_eq!(stats::get_sum(&map), Ok(66.0));
    assert_eq!(stats::get_average(&map), Ok(Some(33.0)));
    assert_eq!(stats::get_median(&map), Ok(Some(33.0)));
    assert_eq!(stats::get_range(&map), Ok(18.0));
    assert_eq!(stats::get_variance(&map), Ok(Some(81.0)));
    assert_eq!(stats::get_standard_deviation(&map), Ok(Some(9.0)));
}

#[test]
fn mode() {
    let map = array! { "foo" => 42, "baz" => 24, "qux" => 42 };
    assert_eq!(stats::get_mode(&map), Some(&Value::from(42)));
    assert_eq!(stats::get_mode(&array! {}), None);
}

#[test]
fn empty_maps() {
    let map = array! {};
    assert_eq!(stats::get_sum(&map), Ok(0.0));
    assert_eq!(stats::get_average(&map), Ok(None));
    assert_eq!(stats::get_median(&map), Ok(None));
    assert_eq!(stats::get_range(&map), Ok(0.0));
    assert_eq!(stats::get_variance(&map), Ok(None));
    assert_eq!(stats::get_standard_deviation(&map), Ok(None));
}

#[test]
fn textbook_dataset() {
    let map: OrderedMap<usize, f64> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().enumerate().collect();
    assert_eq!(stats::get_sum(&map), Ok(40.0));
    assert_eq!(stats::get_average(&map), Ok(Some(5.0)));
    assert_eq!(stats::get_median(&map), Ok(Some(4.5)));
    assert_eq!(stats::get_range(&map), Ok(7.0));
    assert_close(stats::get_variance(&map).unwrap(), 4.0);
    assert_close(stats::get_standard_deviation(&map).unwrap(), 2.0);
    assert_eq!(stats::get_mode(&map), Some(&4.0));
}

#[test]
fn ints_and_floats_mix() {
    let map = array! { "a" => 1, "b" => 2.5, "c" => -0.5 };
    assert_eq!(stats::get_sum(&map), Ok(3.0));
    assert_eq!(stats::get_median(&map), Ok(Some(1.0)));
    assert_eq!(stats::get_range(&map), Ok(3.0));
}

#[test]
fn statistics_do_not_depend_on_keys_or_order() {
    let a = array! { "x" => 3, "y" => 1, "z" => 2 };
    let b = array! { 9 => 2, 0 => 3, 4 => 1 };
    assert_eq!(stats::get_median(&a), stats::get_median(&b));
    assert_eq!(stats::get_variance(&a), stats::get_variance(&b));
}

#[test]
fn non_numeric_values_are_errors() {
    let map = array! { "a" => 1, "b" => array! { "c" => 2 } };
    let expected = Err(Error::NotNumeric { position: 1, found: "array" });
    assert_eq!(stats::get_sum(&map), expected);
    assert_eq!(stats::get_average(&map).map(|_| 0.0), expected);
    assert_eq!(stats::get_standard_deviation(&map).map(|_| 0.0), expected);
}

#[test]
fn numeric_strings_are_not_numbers() {
    let map = array! { "a" => "42" };
    assert_eq!(stats::get_sum(&map), Err(Error::NotNumeric { position: 0, found: "string" }));
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::NotNumeric { position: 3, found: "bool" }.to_string(),
        "value at position 3 is not numeric (found bool)"
    );
    assert_eq!(Error::NotFinite { position: 0 }.to_string(), "value at position 0 is not a finite number");
    assert_eq!(Error::Overflow { statistic: "sum" }.to_string(), "sum overflows the range of f64");
}

#[test]
fn overflowing_results_are_errors() {
    let same = array! { "a" => 1e308, "b" => 1e308 };
    assert_eq!(stats::get_sum(&same), Err(Error::Overflow { statistic: "sum" }));
    assert_eq!(stats::get_average(&same), Ok(Some(1e308)));
    assert_eq!(stats::get_median(&same), Ok(Some(1e308)));
    assert_eq!(stats::get_variance(&same), Ok(Some(0.0)));
    assert_eq!(stats::get_range(&same), Ok(0.0));

    let opposite = array! { "a" => 1e308, "b" => -1e308 };
    assert_eq!(stats::get_sum(&opposite), Ok(0.0));
    assert_eq!(stats::get_average(&opposite), Ok(Some(0.0)));
    assert_eq!(stats::get_median(&opposite), Ok(Some(0.0)));
    assert_eq!(stats::get_range(&opposite), Err(Error::Overflow { statistic: "range" }));
    assert_eq!(stats::get_variance(&opposite), Err(Error::Overflow { statistic: "variance" }));
    assert_eq!(stats::get_standard_deviation(&opposite), Err(Error::Overflow { statistic: "variance" }));
}

#[test]
fn mode_over_many_distinct_values() {
    let mut map: OrderedMap<usize, Value> = (0..60_000).map(|i| (i, Value::Int(i as i64))).collect();
    assert_eq!(stats::get_mode(&map), Some(&Value::Int(0)));

    map.insert(60_000, Value::Int(59_999));
    map.insert(60_001, Value::Float(7.0));
    assert_eq!(stats::get_mode(&map), Some(&Value::Int(59_999)));
}

#[test]
fn mode_does_not_need_numbers() {
    let map = array! { 0 => "a", 1 => Value::Null, 2 => Value::Null, 3 => "a", 4 => "a" };
    assert_eq!(stats::get_mode(&map), Some(&Value::from("a")));
}

proptest! {
    /// Values are bounded so that every statistic stays comfortably finite.
    #[test]
    fn ordering_invariants(values in proptest::collection::vec(-1e6f64..1e6, 1..200)) {
        let map: OrderedMap<usize, f64> = values.iter().copied().enumerate().collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let average = stats::get_average(&map).unwrap().unwrap();
        let median = stats::get_median(&map).unwrap().unwrap();
        prop_assert!(min - 1e-6 <= average && average <= max + 1e-6);
        prop_assert!(min <= median && median <= max);
        prop_assert_eq!(stats::get_range(&map).unwrap(), max - min);
        prop_assert!(stats::get_variance(&map).unwrap().unwrap() >= 0.0);
    }
}
