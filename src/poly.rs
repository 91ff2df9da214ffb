use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::{util::doc_macros::panic_absurd_size, RealScalar};

mod conversions;
mod impl_num;
mod indexing;
mod internals;

/// A dense polynomial in one variable, with coefficients stored from the
/// lowest degree up.
///
/// Trailing zero coefficients are trimmed lazily: constructors and
/// [`Poly::set`] keep them, while arithmetic results never have any.
/// Equality, hashing and formatting always look at the trimmed
/// coefficients, so `poly![1.0, 0.0] == poly![1.0]`.
#[derive(Clone, Debug)]
pub struct Poly<T>(pub(crate) Vec<T>);

impl<T> Default for Poly<T> {
    /// The zero polynomial, with no coefficients
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial by copying a slice of coefficients, lowest degree
    /// first. Trailing zeros are kept.
    ///
    /// # Examples
    /// ```
    /// use dense_poly::Poly;
    ///
    /// let p = Poly::new(&[1.0, 2.0, 0.0]);
    /// assert_eq!(p.len(), 3);
    /// assert_eq!(p.degree(), 1);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self(coeffs.to_owned())
    }

    /// Create a polynomial from a single term (coefficient + degree)
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    ///
    /// # Examples
    /// ```
    /// use dense_poly::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(2.0, 3), poly![0.0, 0.0, 0.0, 2.0]);
    /// ```
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = coeff;
        Self(coeffs).normalize()
    }

    /// Number of stored coefficients. Indexed access is valid below this.
    ///
    /// Only shrinks through trimming, which arithmetic applies to its
    /// results.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len_raw()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len_raw() == 0
    }

    /// The highest exponent with a non-zero coefficient.
    ///
    /// The degree of the zero polynomial is undefined, this returns `-1` for
    /// it by convention.
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn degree(&self) -> i64 {
        let n: i64 = self
            .len_significant()
            .try_into()
            .expect("usize did not fit into i64");
        n - 1
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use dense_poly::{poly, Poly64};
    ///
    /// let p: Poly64 = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(2.0), 17.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        // Horner's method
        self.significant()
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }
}

impl<T: RealScalar> PartialEq for Poly<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let lhs = self.significant();
        let rhs = other.significant();
        if lhs.len() != rhs.len() {
            return false;
        }
        lhs.iter().zip(rhs).all(|(a, b)| a.same_value(b))
    }
}

impl<T: RealScalar> Eq for Poly<T> {}

impl<T: RealScalar> Hash for Poly<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // must agree with `eq`: trailing zeros are skipped, -0.0 == 0.0 and
        // NaN == NaN
        let coeffs = self.significant();
        coeffs.len().hash(state);
        for c in coeffs {
            c.canonical().integer_decode().hash(state);
        }
    }
}

/// Renders the polynomial as the left-hand side of an equation, e.g.
/// `2 + 3x^2  = 0`. Zero coefficients are skipped.
impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let coeffs = self.significant();
        match coeffs.first() {
            Some(c) if !c.is_zero() => write!(f, "{c} ")?,
            Some(_) => {}
            // the zero polynomial still gets an (empty) left-hand side
            None => write!(f, " ")?,
        }
        for (i, c) in coeffs.iter().enumerate().skip(1) {
            if c.is_zero() {
                continue;
            }
            if *c > T::zero() {
                write!(f, "+ ")?;
            }
            write!(f, "{c}x^{i} ")?;
        }
        write!(f, " = 0")
    }
}
