/// Truncates an `f64` toward zero into an `i64`.
///
/// Values outside the `i64` range saturate to `i64::MIN` or `i64::MAX`, and
/// NaN becomes `0`. Saturated values are always out of bounds for any array,
/// so no huge index can alias a valid one.
///
/// ## Example
/// ```
/// use alphadelta::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9), 2);
/// assert_eq!(f64_to_i64_truncated(-0.5), 0);
/// assert_eq!(f64_to_i64_truncated(-1.5), -1);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Converts an `i64` into a position within an array of length `len`.
///
/// ## Returns
/// - `Some(usize)`: If `0 <= value < len`.
/// - `None`: If the value is negative or too large.
///
/// ## Example
/// ```
/// use alphadelta::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(1, 3), Some(1));
/// assert_eq!(i64_to_index(3, 3), None);
/// assert_eq!(i64_to_index(-1, 3), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < len)
}
