//! Core traits for movie collection backends.

mod source;

pub use source::MovieSource;
