//! reel-core - Core types, traits and view state for reel.
//!
//! A [`MovieView`] fetches a movie collection through a [`MovieSource`],
//! tracks the fetch in a [`FetchStatus`] and derives a [`RenderState`] from it.
//! Backends live in `reel-http` (network endpoints) and `reel-file`
//! (local collection files).

pub mod error;
pub mod movie;
pub mod traits;
pub mod types;
pub mod view;

pub use error::Error;
pub use movie::{MoviePayload, MovieRecord, NewMovie, PayloadShape};
pub use traits::MovieSource;
pub use types::{CollectionUrl, MovieId};
pub use view::{FetchStatus, MovieView, RenderState};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
