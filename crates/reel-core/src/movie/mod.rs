//! Movie records and payload decoding.
//!
//! This module defines the normalized record shape and the decoding of the
//! remote payload shapes into it. Fetching is done through
//! [`MovieSource`](crate::MovieSource).

mod payload;
mod record;

pub use payload::{ListEntry, MapEntry, MoviePayload, PayloadShape};
pub use record::{MovieRecord, NewMovie};
