use std::fmt::{Debug, Display};

use num::Float;

/// A real floating point coefficient.
///
/// Arithmetic follows the IEEE-754 semantics of the underlying type, so
/// overflow saturates to infinity instead of trapping.
pub trait RealScalar: Float + Debug + Display + 'static {
    /// Coefficient equality: exact, except that `NaN` equals `NaN`.
    fn same_value(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    /// Maps `-0.0` onto `0.0` and every `NaN` onto one `NaN`, so that values
    /// equal under [`RealScalar::same_value`] share a bit pattern.
    #[must_use]
    fn canonical(self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.is_nan() {
            Self::nan()
        } else {
            self
        }
    }
}

impl RealScalar for f32 {}

impl RealScalar for f64 {}

#[cfg(test)]
mod test {
    use num::Float;

    use super::RealScalar;

    #[test]
    fn negative_zero_is_canonical() {
        assert_eq!(
            (-0.0f64).canonical().integer_decode(),
            0.0f64.integer_decode()
        );
        assert_eq!((-2.5f32).canonical(), -2.5);
        assert_eq!(
            (-f64::NAN).canonical().integer_decode(),
            f64::NAN.canonical().integer_decode()
        );
    }

    #[test]
    fn same_value() {
        assert!(f64::NAN.same_value(&f64::NAN));
        assert!((-0.0f64).same_value(&0.0));
        assert!(!1.0f32.same_value(&f32::NAN));
        assert!(!(0.1f64 + 0.2).same_value(&0.3));
    }
}
