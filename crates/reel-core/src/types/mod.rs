//! Core reel types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod collection_url;
mod movie_id;

pub use collection_url::CollectionUrl;
pub use movie_id::MovieId;
