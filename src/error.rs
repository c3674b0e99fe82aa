/// Errors reported by the statistics functions when a value cannot take part
/// in arithmetic, or when the arithmetic itself leaves the finite range.
///
/// `position` is the zero-based insertion-order position of the offending value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("value at position {position} is not numeric (found {found})")]
    NotNumeric { position: usize, found: &'static str },
    #[error("value at position {position} is not a finite number")]
    NotFinite { position: usize },
    /// Every input was finite but the `statistic` computed from them is not.
    #[error("{statistic} overflows the range of f64")]
    Overflow { statistic: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
