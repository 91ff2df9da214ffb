//! Macros for reducing doc comment boilerplate.

/// Documents panics due to absurdly large polynomials
macro_rules! panic_absurd_size {
    () => {
        r"May theoretically panic for absurdly large polynomials, however such polynomials will likely not fit in memory anyway.\n\n"
    }
}
pub(crate) use panic_absurd_size;

/// Default explanation for [`crate::Error::NullArgument`] errors.
macro_rules! errors_null_argument {
    () => {
        r"- `NullArgument`: a required argument was `None`.\n"
    };
}
pub(crate) use errors_null_argument;

/// Default explanation for [`crate::Error::IndexOutOfRange`] errors.
macro_rules! errors_index_out_of_range {
    () => {
        r"- `IndexOutOfRange`: the index is negative or not below [`crate::Poly::len`].\n"
    };
}
pub(crate) use errors_index_out_of_range;
