//! Movie identifier type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An opaque movie identifier.
///
/// Sources disagree on the type of their ids: the sample API uses numeric
/// episode ids while key-value databases use string keys. Both are held as a
/// string, so uniqueness and equality are judged on the string form.
///
/// # Example
///
/// ```
/// use reel_core::MovieId;
///
/// assert_eq!(MovieId::from(4u64), MovieId::new("4"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Create an id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MovieIdVisitor;

        impl Visitor<'_> for MovieIdVisitor {
            type Value = MovieId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer movie id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MovieId, E> {
                Ok(MovieId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<MovieId, E> {
                Ok(MovieId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MovieId, E> {
                Ok(MovieId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MovieId, E> {
                Ok(MovieId(v.to_string()))
            }
        }

        deserializer.deserialize_any(MovieIdVisitor)
    }
}
