use itertools::Itertools;

use crate::{util::doc_macros::errors_null_argument, Error, Poly, RealScalar, Result};

impl<T: RealScalar> Poly<T> {
    /// Copy a coefficient list that may be absent.
    ///
    /// An empty list is the zero polynomial, while a missing one is an error.
    ///
    /// # Errors
    #[doc = errors_null_argument!()]
    ///
    /// # Examples
    /// ```
    /// use dense_poly::{Error, Poly64};
    ///
    /// let coeffs: Option<&[f64]> = None;
    /// assert_eq!(Poly64::try_from_coefficients(coeffs), Err(Error::NullArgument));
    /// assert_eq!(Poly64::try_from_coefficients(Some(&[][..])), Ok(Poly64::default()));
    /// ```
    pub fn try_from_coefficients(coeffs: Option<&[T]>) -> Result<Self> {
        coeffs.map(Self::new).ok_or_else(|| {
            log::debug!("rejected absent coefficient list");
            Error::NullArgument
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Mutable view of the coefficients. The length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }
}

impl<T: RealScalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: RealScalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<T: RealScalar> FromIterator<T> for Poly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect_vec())
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a mut Poly<T> {
    type IntoIter = std::slice::IterMut<'a, T>;
    type Item = &'a mut T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Poly64};

    #[test]
    fn copies_input() {
        let mut coeffs = vec![1.0, 2.0, 3.0];
        let p = Poly64::new(&coeffs);
        coeffs[0] = 100.0;
        assert_eq!(p.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn try_from_coefficients() {
        let coeffs = [4.0, 0.0, 0.0];
        let p = Poly64::try_from_coefficients(Some(coeffs.as_slice())).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(
            Poly64::try_from_coefficients(None),
            Err(Error::NullArgument)
        );
    }

    #[test]
    fn collect() {
        let p: Poly64 = (1..=3).map(f64::from).collect();
        assert_eq!(p, poly![1.0, 2.0, 3.0]);
        assert_eq!(Vec::from(p), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn as_mut_slice_writes_in_place() {
        let mut p = poly![1.0, 2.0, 3.0];
        p.as_mut_slice()[2] = 0.0;
        assert_eq!(p.len(), 3);
        assert_eq!(p.to_vec(), vec![1.0, 2.0, 0.0]);
        assert_eq!(p, poly![1.0, 2.0]);
    }

    #[test]
    fn iter_mut_writes_in_place() {
        let mut p = poly![1.0, 2.0];
        for c in &mut p {
            *c *= 3.0;
        }
        assert_eq!(p.to_vec(), vec![3.0, 6.0]);
    }
}
