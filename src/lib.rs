//! Dense single-variable polynomials with real coefficients.
//!
//! A [`Poly`] stores its coefficients from the lowest degree up, so
//! `poly![1.0, 2.0, 3.0]` is `1 + 2x + 3x^2`.
//!
//! ```
//! use dense_poly::{poly, Poly64};
//!
//! let p: Poly64 = poly![1.0, 2.0];
//! let q: Poly64 = poly![3.0, 4.0];
//! assert_eq!(&p * &q, poly![3.0, 10.0, 8.0]);
//! assert_eq!((p + q).to_string(), "4 + 6x^1  = 0");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Build a polynomial from its coefficients, lowest degree first.
///
/// The coefficients are copied as given, trailing zeros included.
///
/// ```
/// use dense_poly::{poly, Poly64};
///
/// let p: Poly64 = poly![2.0, 0.0, 3.0];
/// assert_eq!(p.len(), 3);
/// assert_eq!(p[2], 3.0);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::default()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($c),+])
    };
}

pub use num;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::RealScalar;

mod poly;
pub use poly::Poly;

pub mod ops;

mod util;

// re-exported by crate root
#[doc(hidden)]
pub mod __util;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
