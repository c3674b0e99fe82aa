use alloc::string::String;
use core::cmp::Ordering;

use crate::{Key, Value};

/// A total order that agrees with `==` on ordinary values, used to group equal
/// values by sorting.
///
/// Floats follow [`f64::total_cmp`], so `-0.0` sorts before `0.0` and every `NaN`
/// has a place. [`Value`] orders variants `Null < Bool < Int < Float < Str < Map`
/// first and payloads second, so `Int(1)` and `Float(1.0)` stay apart, exactly as
/// under `==`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use ordmap_kit::{TotalOrd, Value};
///
/// assert_eq!(Value::from(1).cmp_total(&Value::from(1.0)), Ordering::Less);
/// assert_eq!(f64::NAN.cmp_total(&f64::NAN), Ordering::Equal);
/// ```
pub trait TotalOrd {
    fn cmp_total(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrd for $t {
                fn cmp_total(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_total_ord_via_ord!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char, str, String, Key);

impl TotalOrd for f32 {
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrd for f64 {
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrd for Value {
    fn cmp_total(&self, other: &Self) -> Ordering {
        const fn rank(value: &Value) -> u8 {
            match value {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Int(_) => 2,
                Value::Float(_) => 3,
                Value::Str(_) => 4,
                Value::Map(_) => 5,
            }
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a
                .iter()
                .zip(b.iter())
                .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.cmp_total(vb)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl<T: TotalOrd + ?Sized> TotalOrd for &T {
    fn cmp_total(&self, other: &Self) -> Ordering {
        (**self).cmp_total(*other)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn variants_sort_by_rank_first() {
        let mut values = [
            Value::from(array! {}),
            Value::from("a"),
            Value::from(0.5),
            Value::from(7),
            Value::from(false),
            Value::Null,
        ];
        values.sort_by(TotalOrd::cmp_total);
        assert_eq!(
            values,
            [
                Value::Null,
                Value::from(false),
                Value::from(7),
                Value::from(0.5),
                Value::from("a"),
                Value::from(array! {}),
            ]
        );
    }

    #[test]
    fn equal_under_total_order_means_equal() {
        let a = Value::from(array! {"x" => 1, "y" => array! {"z" => "s"}});
        assert_eq!(a.cmp_total(&a.clone()), Ordering::Equal);

        let reordered = Value::from(array! {"y" => array! {"z" => "s"}, "x" => 1});
        assert_ne!(a.cmp_total(&reordered), Ordering::Equal);

        let prefix = Value::from(array! {"x" => 1});
        assert_eq!(prefix.cmp_total(&a), Ordering::Less);
    }

    #[test]
    fn floats_are_totally_ordered() {
        assert_eq!((-0.0f64).cmp_total(&0.0), Ordering::Less);
        assert_eq!(1.0f64.cmp_total(&f64::NAN), Ordering::Less);
    }
}
