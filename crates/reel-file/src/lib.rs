//! reel-file - Filesystem-backed movie source.

mod source;
mod store;

pub use source::FileMovieSource;
