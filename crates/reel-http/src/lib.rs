//! reel-http - HTTP-backed movie source.

mod client;
mod source;

pub use client::HttpClientConfig;
pub use source::HttpMovieSource;
