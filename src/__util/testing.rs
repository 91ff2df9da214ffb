//! Testing utilities, do not depend on any of these in production!

use std::iter;

use fastrand::Rng;

use crate::Poly64;

fn binary_coeffs_inner(max_len: usize) -> Box<dyn Iterator<Item = Vec<f64>>> {
    if max_len == 0 {
        return Box::new(iter::once(vec![]));
    }
    Box::new(binary_coeffs_inner(max_len - 1).flat_map(|v| {
        let mut v1 = v.clone();
        let mut v2 = v;
        v1.push(0.0);
        v2.push(1.0);
        [v1, v2].into_iter()
    }))
}

/// Every polynomial with `0.0`/`1.0` coefficients and exactly `len` stored
/// coefficients, trailing zeros included.
pub fn binary_coeffs(len: usize) -> impl Iterator<Item = Poly64> {
    binary_coeffs_inner(len).map(Poly64::from)
}

/// Endless stream of random polynomials with small integer coefficients.
///
/// Integer coefficients keep sums and products exact, so algebraic laws can
/// be checked with `==`. Roughly half of the coefficients drawn are zero,
/// which exercises trimming.
pub struct RandStreamPoly64 {
    state: Rng,
    max_len: usize,
    bound: i32,
}

impl RandStreamPoly64 {
    /// # Panics
    /// If `bound` is negative
    #[must_use]
    pub fn new(seed: u64, max_len: usize, bound: i32) -> Self {
        assert!(bound >= 0, "bound should not be negative");
        Self {
            state: Rng::with_seed(seed),
            max_len,
            bound,
        }
    }

    fn coeff(&mut self) -> f64 {
        if self.state.bool() {
            return 0.0;
        }
        f64::from(self.state.i32(-self.bound..=self.bound))
    }
}

impl Iterator for RandStreamPoly64 {
    type Item = Poly64;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.state.usize(0..=self.max_len);
        Some((0..len).map(|_| self.coeff()).collect())
    }
}
