use std::ops::{Index, IndexMut};

use crate::{util::doc_macros::errors_index_out_of_range, Error, Poly, RealScalar, Result};

impl<T: RealScalar> Poly<T> {
    /// Resolve `idx` against the current length. Negative indices never
    /// resolve.
    fn checked_index<I: TryInto<usize>>(&self, idx: I) -> Result<usize> {
        let len = self.len_raw();
        idx.try_into()
            .ok()
            .filter(|&i| i < len)
            .ok_or(Error::IndexOutOfRange { len })
    }

    /// The coefficient of the term of degree `idx`.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    ///
    /// # Examples
    /// ```
    /// use dense_poly::{poly, Error, Poly64};
    ///
    /// let p: Poly64 = poly![1.0, 2.0];
    /// assert_eq!(p.get(1), Ok(2.0));
    /// assert_eq!(p.get(2), Err(Error::IndexOutOfRange { len: 2 }));
    /// assert_eq!(p.get(-1), Err(Error::IndexOutOfRange { len: 2 }));
    /// ```
    pub fn get<I: TryInto<usize>>(&self, idx: I) -> Result<T> {
        Ok(self.0[self.checked_index(idx)?])
    }

    /// Overwrite the coefficient of the term of degree `idx`.
    ///
    /// The polynomial never grows, and writing a zero into the highest term
    /// does not shrink it either.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn set<I: TryInto<usize>>(&mut self, idx: I, value: T) -> Result<()> {
        let i = self.checked_index(idx)?;
        self.0[i] = value;
        Ok(())
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = T;

    /// # Panics
    /// If `index` is not below [`Poly::len`]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len_raw(),
            "index {index} out of range for polynomial of length {}",
            self.len_raw()
        );
        &self.0[index]
    }
}

impl<T: RealScalar> IndexMut<usize> for Poly<T> {
    /// # Panics
    /// If `index` is not below [`Poly::len`]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(
            index < self.len_raw(),
            "index {index} out of range for polynomial of length {}",
            self.len_raw()
        );
        &mut self.0[index]
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Poly64};

    #[test]
    fn get_matches_input() {
        let coeffs = [0.5, -1.0, 0.0, 7.25];
        let p = Poly64::new(&coeffs);
        for (i, c) in coeffs.iter().enumerate() {
            assert_eq!(p.get(i), Ok(*c));
        }
    }

    #[test]
    fn get_out_of_range() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.get(3usize), Err(Error::IndexOutOfRange { len: 3 }));
        assert_eq!(p.get(-1isize), Err(Error::IndexOutOfRange { len: 3 }));
        assert_eq!(p.get(i64::MIN), Err(Error::IndexOutOfRange { len: 3 }));
        assert_eq!(
            Poly64::default().get(0),
            Err(Error::IndexOutOfRange { len: 0 })
        );
    }

    #[test]
    fn set() {
        let mut p = poly![1.0, 2.0, 3.0];
        p.set(1, -4.0).unwrap();
        assert_eq!(p, poly![1.0, -4.0, 3.0]);
    }

    #[test]
    fn set_out_of_range() {
        let mut p = poly![1.0, 2.0];
        assert_eq!(p.set(2, 1.0), Err(Error::IndexOutOfRange { len: 2 }));
        assert_eq!(p.set(-1, 1.0), Err(Error::IndexOutOfRange { len: 2 }));
        assert_eq!(p, poly![1.0, 2.0]);
    }

    #[test]
    fn set_zero_keeps_length() {
        let mut p = poly![1.0, 2.0];
        p.set(1, 0.0).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(1), Ok(0.0));
        assert_eq!(p, poly![1.0]);
    }

    #[test]
    fn index() {
        let mut p = poly![1.0, 2.0];
        p[0] = 5.0;
        assert_eq!(p[0], 5.0);
        assert_eq!(p[1], 2.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range() {
        let p = poly![1.0, 2.0];
        let _ = p[2];
    }
}
