use crate::Value;

/// Values the statistics functions can read as numbers.
///
/// Implemented for the primitive integer and float types, and for [`Value`],
/// where only `Int` and `Float` count as numeric.
pub trait Numeric {
    /// Returns the value as an `f64`, or `None` if it is not a number.
    fn to_f64(&self) -> Option<f64>;

    /// A short description of the value's type for error messages.
    fn kind(&self) -> &'static str;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn kind(&self) -> &'static str {
                    stringify!($t)
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Numeric for Value {
    fn to_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
