#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations and operators

use num::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use std::{
    iter::{Product, Sum},
    ops::{Add, Mul, Neg, Sub},
};

use crate::{util::linalg::convolve_1d, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Scale every coefficient by `factor`, reporting overflow.
    ///
    /// Returns `None` if a finite polynomial scaled by a finite factor ends up
    /// with an infinite or `NaN` coefficient. Inputs that are not finite to
    /// begin with are scaled as usual.
    ///
    /// ```
    /// use dense_poly::{poly, Poly64};
    ///
    /// let p: Poly64 = poly![1.0, f64::MAX];
    /// assert_eq!(p.checked_scale(0.5), Some(poly![0.5, f64::MAX / 2.0]));
    /// assert_eq!(p.checked_scale(4.0), None);
    /// ```
    #[must_use]
    pub fn checked_scale(&self, factor: T) -> Option<Self> {
        let inputs_finite = self.is_well_formed() && factor.is_finite();
        (self * factor).reject_overflow(inputs_finite)
    }

    fn reject_overflow(self, inputs_finite: bool) -> Option<Self> {
        if inputs_finite && !self.is_well_formed() {
            log::trace!("coefficient overflowed {{len: {}}}", self.len_raw());
            return None;
        }
        Some(self)
    }
}

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    /// The longer operand's storage accumulates the result, the left one on
    /// ties.
    fn add(self, rhs: Self) -> Self::Output {
        let lhs = self.normalize();
        let rhs = rhs.normalize();

        let (mut longest, shortest) = if lhs.len_raw() >= rhs.len_raw() {
            (lhs.0, rhs.0)
        } else {
            (rhs.0, lhs.0)
        };
        longest
            .iter_mut()
            .zip(shortest.iter())
            .for_each(|(l, &r)| *l = *l + r);
        Self(longest).normalize()
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self + rhs.clone()
    }
}

impl<T: RealScalar> Add<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: Poly<T>) -> Self::Output {
        self.clone() + rhs
    }
}

impl<T: RealScalar> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl<T: RealScalar> Sub<Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: RealScalar> Sub<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: Poly<T>) -> Self::Output {
        self.clone() - rhs
    }
}

impl<T: RealScalar> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        self.clone() - rhs
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -T::one()
    }
}

impl<T: RealScalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: RealScalar> Mul<T> for Poly<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = *c * rhs);
        self.normalize()
    }
}

impl<T: RealScalar> Mul<T> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.clone() * rhs
    }
}

/// `scalar * poly`, which the orphan rule only allows per concrete type
macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl Mul<Poly<$t>> for $t {
            type Output = Poly<$t>;

            fn mul(self, rhs: Poly<$t>) -> Poly<$t> {
                rhs * self
            }
        }

        impl Mul<&Poly<$t>> for $t {
            type Output = Poly<$t>;

            fn mul(self, rhs: &Poly<$t>) -> Poly<$t> {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<T: RealScalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        log::trace!(
            "convolving {{lhs_len: {}, rhs_len: {}}}",
            self.len_raw(),
            rhs.len_raw()
        );
        Poly(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        &self * rhs
    }
}

impl<T: RealScalar> Mul<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: Poly<T>) -> Self::Output {
        self * &rhs
    }
}

impl<T: RealScalar> CheckedAdd for Poly<T> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        let inputs_finite = self.is_well_formed() && v.is_well_formed();
        (self + v).reject_overflow(inputs_finite)
    }
}

impl<T: RealScalar> CheckedSub for Poly<T> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let inputs_finite = self.is_well_formed() && v.is_well_formed();
        (self - v).reject_overflow(inputs_finite)
    }
}

impl<T: RealScalar> CheckedMul for Poly<T> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        let inputs_finite = self.is_well_formed() && v.is_well_formed();
        (self * v).reject_overflow(inputs_finite)
    }
}

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.len_significant() == 0
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![T::one()])
    }
}

impl<T: RealScalar> Sum for Poly<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: RealScalar> Product for Poly<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod test {
    use num::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};

    use crate::{Poly32, Poly64};

    #[test]
    fn add() {
        assert_eq!(poly![1.0, 2.0] + poly![3.0, 4.0, 5.0], poly![4.0, 6.0, 5.0]);
        assert_eq!(poly![1.0, 2.0, 5.0] + poly![3.0, 4.0], poly![4.0, 6.0, 5.0]);
    }

    #[test]
    fn add_trims_result() {
        let sum = poly![1.0, 2.0, 3.0] + poly![1.0, -2.0, -3.0];
        assert_eq!(sum.len(), 1);
        assert_eq!(sum, poly![2.0]);
    }

    #[test]
    fn add_trims_operands_first() {
        // the trailing zeros of the left operand must not make it the accumulator
        let sum = poly![1.0, 0.0, 0.0, 0.0] + poly![1.0, 1.0];
        assert_eq!(sum.to_vec(), vec![2.0, 1.0]);
    }

    #[test]
    fn add_by_ref_leaves_operands_untouched() {
        let p = poly![1.0, 2.0, 3.0];
        let q = poly![4.0, 5.0];
        let sum = &p + &q;
        assert_eq!(sum, poly![5.0, 7.0, 3.0]);
        assert_eq!(p.to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(q.to_vec(), vec![4.0, 5.0]);
    }

    #[test]
    fn sub() {
        assert_eq!(poly![1.0, 2.0] - poly![3.0, 4.0, 5.0], poly![-2.0, -2.0, -5.0]);
        let p = poly![1.0, 2.0, 3.0];
        assert!((&p - &p).is_zero());
        assert_eq!((&p - &p).len(), 0);
    }

    #[test]
    fn neg() {
        assert_eq!(-poly![1.0, -2.0, 0.0], poly![-1.0, 2.0]);
        assert_eq!(-Poly64::zero(), Poly64::zero());
    }

    #[test]
    fn scalar_mul_both_orders() {
        let p: Poly64 = poly![1.0, 2.0, 3.0];
        assert_eq!(&p * 2.0, poly![2.0, 4.0, 6.0]);
        assert_eq!(2.0 * &p, &p * 2.0);
        assert_eq!(p.to_vec(), vec![1.0, 2.0, 3.0]);

        let q: Poly32 = poly![1.5, -1.0];
        assert_eq!(2.0f32 * q, poly![3.0, -2.0]);
    }

    #[test]
    fn scalar_mul_by_zero() {
        let p = poly![1.0, 2.0, 3.0] * 0.0;
        assert!(p.is_zero());
        assert!(p.is_empty());
    }

    #[test]
    fn mul() {
        assert_eq!(poly![1.0, 2.0] * poly![3.0, 4.0], poly![3.0, 10.0, 8.0]);
        assert_eq!(
            poly![1.0, 2.0, 3.0] * poly![1.0, 2.0, 3.0],
            poly![1.0, 4.0, 10.0, 12.0, 9.0]
        );
    }

    #[test]
    fn mul_result_is_tight() {
        let p = poly![1.0, 2.0] * poly![3.0, 4.0];
        assert_eq!(p.len(), 3);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn mul_by_zero_poly() {
        let p = poly![1.0, 2.0] * Poly64::zero();
        assert!(p.is_empty());
        let q = poly![0.0, 0.0] * poly![1.0, 2.0];
        assert!(q.is_empty());
    }

    #[test]
    fn one_is_identity() {
        let p = poly![3.0, 0.0, -1.0];
        assert_eq!(&p * &Poly64::one(), p);
        assert!(Poly64::one().is_one());
    }

    #[test]
    fn sum_and_product() {
        let terms = vec![poly![1.0], poly![0.0, 2.0], poly![0.0, 0.0, 3.0]];
        assert_eq!(terms.into_iter().sum::<Poly64>(), poly![1.0, 2.0, 3.0]);
        let factors = vec![poly![1.0, 1.0], poly![-1.0, 1.0]];
        assert_eq!(factors.into_iter().product::<Poly64>(), poly![-1.0, 0.0, 1.0]);
        assert!(std::iter::empty::<Poly64>().sum::<Poly64>().is_zero());
    }

    #[test]
    fn checked_add_overflow() {
        let p = poly![1.0, f64::MAX];
        assert_eq!(p.checked_add(&poly![1.0]), Some(poly![2.0, f64::MAX]));
        assert_eq!(p.checked_add(&p), None);
        assert_eq!(p.checked_sub(&-&p), None);
    }

    #[test]
    fn checked_ops_pass_through_non_finite_inputs() {
        let p = poly![f64::INFINITY];
        assert_eq!(p.checked_add(&poly![1.0]), Some(poly![f64::INFINITY]));
        assert_eq!(p.checked_scale(2.0), Some(poly![f64::INFINITY]));
    }

    #[test]
    fn checked_mul_overflow() {
        let p = poly![f64::MAX, 1.0];
        assert_eq!(p.checked_mul(&poly![0.5]), Some(poly![f64::MAX / 2.0, 0.5]));
        assert_eq!(p.checked_mul(&poly![2.0, 1.0]), None);
    }
}
