use crate::RealScalar;

use super::Poly;

impl<T> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }
}

impl<T: RealScalar> Poly<T> {
    /// The length the polynomial would have after trimming
    pub(crate) fn len_significant(&self) -> usize {
        self.0.iter().rposition(|c| !c.is_zero()).map_or(0, |i| i + 1)
    }

    /// Coefficients up to and including the highest non-zero one
    pub(crate) fn significant(&self) -> &[T] {
        &self.0[..self.len_significant()]
    }

    pub(crate) fn is_normalized(&self) -> bool {
        self.0.last().map_or(true, |c| !c.is_zero())
    }

    /// Remove trailing zero coefficients in-place. The allocation is kept.
    pub(crate) fn trim_zeros(&mut self) {
        let n = self.len_significant();
        if n < self.len_raw() {
            log::trace!(
                "trimming trailing zeros {{from: {}, to: {n}}}",
                self.len_raw()
            );
            self.0.truncate(n);
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
    }

    /// Moving version of `trim_zeros`
    pub(crate) fn normalize(mut self) -> Self {
        self.trim_zeros();
        self
    }

    // Check that the polynomial does not contain `NaN` or infinite values.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}
