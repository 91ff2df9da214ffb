//! Named counterparts of the arithmetic operators.
//!
//! Every operand may be absent, so callers holding an `Option<&Poly<T>>`
//! get an [`Error::NullArgument`] instead of unwrapping first. Plain
//! references work too. Present operands give exactly what the operators
//! give.
//!
//! ```
//! use dense_poly::{ops, poly, Error, Poly64};
//!
//! let p: Poly64 = poly![1.0, 2.0];
//! assert_eq!(ops::multiply(&p, &p), Ok(poly![1.0, 4.0, 4.0]));
//! assert_eq!(ops::add(&p, None::<&Poly64>), Err(Error::NullArgument));
//! ```

use crate::{util::doc_macros::errors_null_argument, Error, Poly, RealScalar, Result};

fn present<'a, T: RealScalar>(pol: impl Into<Option<&'a Poly<T>>>) -> Result<&'a Poly<T>> {
    pol.into().ok_or_else(|| {
        log::debug!("rejected absent polynomial operand");
        Error::NullArgument
    })
}

/// Same as `-pol`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn negate<'a, T: RealScalar>(pol: impl Into<Option<&'a Poly<T>>>) -> Result<Poly<T>> {
    let pol = present(pol)?;
    Ok(-pol)
}

/// Same as `lhs + rhs`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn add<'a, T: RealScalar>(
    lhs: impl Into<Option<&'a Poly<T>>>,
    rhs: impl Into<Option<&'a Poly<T>>>,
) -> Result<Poly<T>> {
    let lhs = present(lhs)?;
    let rhs = present(rhs)?;
    Ok(lhs + rhs)
}

/// Same as `lhs - rhs`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn subtract<'a, T: RealScalar>(
    lhs: impl Into<Option<&'a Poly<T>>>,
    rhs: impl Into<Option<&'a Poly<T>>>,
) -> Result<Poly<T>> {
    let lhs = present(lhs)?;
    let rhs = present(rhs)?;
    Ok(lhs - rhs)
}

/// Same as `lhs * rhs`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn multiply<'a, T: RealScalar>(
    lhs: impl Into<Option<&'a Poly<T>>>,
    rhs: impl Into<Option<&'a Poly<T>>>,
) -> Result<Poly<T>> {
    let lhs = present(lhs)?;
    let rhs = present(rhs)?;
    Ok(lhs * rhs)
}

/// Same as `pol * x`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn multiply_scalar<'a, T: RealScalar>(
    pol: impl Into<Option<&'a Poly<T>>>,
    x: T,
) -> Result<Poly<T>> {
    Ok(present(pol)? * x)
}

/// Same as `x * pol`, which is `pol * x`
///
/// # Errors
#[doc = errors_null_argument!()]
pub fn scalar_multiply<'a, T: RealScalar>(
    x: T,
    pol: impl Into<Option<&'a Poly<T>>>,
) -> Result<Poly<T>> {
    multiply_scalar(pol, x)
}
