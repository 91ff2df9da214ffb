use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required polynomial or coefficient list was absent
    #[error("required argument was absent")]
    NullArgument,

    /// Indexed access outside of `[0, len)`
    #[error("index out of range for polynomial of length {len}")]
    IndexOutOfRange { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
