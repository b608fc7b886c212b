use crate::util::num::f64_to_i64_exact;

/// The normalized result of evaluating an expression.
///
/// Evaluation always runs on `f64`; this type only decides how the final
/// value is surfaced. A whole number that fits in an `i64` becomes
/// [`Number::Integer`] regardless of how it was computed, so `4 / 2` is an
/// integer and `0.5 + 0.5` is too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A whole number (64 bit integer).
    Integer(i64),
    /// Anything else: fractional, out of `i64` range, infinite or `NaN`.
    Float(f64),
}

impl Number {
    /// Returns `true` for [`Number::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<Number> for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => i as Self,
            Number::Float(f) => f,
        }
    }
}

impl std::fmt::Display for Number {
    /// Integers print without a decimal point. Floats use the `Debug`
    /// rendering, which always keeps a decimal point or an exponent
    /// (`2.5`, `1e300`, `inf`, `NaN`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:?}"),
        }
    }
}

/// Decides whether a raw evaluation result is an integer or a float.
///
/// The value becomes [`Number::Integer`] when it is finite, has no fractional
/// part and lies within the `i64` range; otherwise it stays a
/// [`Number::Float`].
///
/// # Example
/// ```
/// use infixa::{Number, interpreter::value::core::normalize};
///
/// assert_eq!(normalize(2.0), Number::Integer(2));
/// assert_eq!(normalize(2.5), Number::Float(2.5));
/// assert_eq!(normalize(1e20), Number::Float(1e20));
/// ```
#[must_use]
pub fn normalize(value: f64) -> Number {
    f64_to_i64_exact(value).map_or(Number::Float(value), Number::Integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_become_integers() {
        assert_eq!(normalize(14.0), Number::Integer(14));
        assert_eq!(normalize(-512.0), Number::Integer(-512));
        assert_eq!(normalize(-0.0), Number::Integer(0));
    }

    #[test]
    fn non_whole_or_non_finite_values_stay_floats() {
        assert_eq!(normalize(0.1), Number::Float(0.1));
        assert_eq!(normalize(f64::INFINITY), Number::Float(f64::INFINITY));
        assert!(matches!(normalize(f64::NAN), Number::Float(v) if v.is_nan()));
    }

    #[test]
    fn display_distinguishes_integers_from_floats() {
        assert_eq!(Number::Integer(4).to_string(), "4");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(1e20).to_string(), "1e20");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn converts_back_to_f64() {
        assert_eq!(f64::from(Number::Integer(3)), 3.0);
        assert_eq!(f64::from(Number::Float(0.25)), 0.25);
    }
}
