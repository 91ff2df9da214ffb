//! Internal utilities, not part of the API

pub(crate) mod doc_macros;
pub(crate) mod linalg;
