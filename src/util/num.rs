/// Smallest `f64` that no longer fits in an `i64` (`2^63`).
///
/// `i64::MAX as f64` rounds up to this value, so it cannot be used as an
/// inclusive upper bound.
const I64_UPPER_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;
/// `i64::MIN` (`-2^63`), exactly representable as an `f64`.
const I64_LOWER_INCLUSIVE: f64 = -9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// Returns `None` for non-finite values, values with a fractional part and
/// values outside the `i64` range.
///
/// ## Example
/// ```
/// use infixa::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    if !(I64_LOWER_INCLUSIVE..I64_UPPER_EXCLUSIVE).contains(&value) {
        return None;
    }
    if value.trunc() != value {
        return None;
    }
    Some(value as i64)
}
