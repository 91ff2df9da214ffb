//! Internal utilities, not part of the API

pub mod testing;
