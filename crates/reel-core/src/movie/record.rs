//! Movie record types.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// A movie as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Opaque identifier, unique within one fetched collection.
    pub id: MovieId,

    /// Display title.
    pub title: String,

    /// Opening text.
    pub opening_text: String,

    /// Release date. Kept as display text, never parsed.
    pub release_date: String,
}

impl MovieRecord {
    /// Create a record from its parts.
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            opening_text: opening_text.into(),
            release_date: release_date.into(),
        }
    }
}

/// A movie to add to the collection.
///
/// Serializes to `{"title", "openingText", "releaseDate"}`, the body of a
/// create request. Fields are not checked for presence or emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            opening_text: opening_text.into(),
            release_date: release_date.into(),
        }
    }

    /// Attach an id, producing the record a later fetch would return.
    pub fn with_id(self, id: impl Into<MovieId>) -> MovieRecord {
        MovieRecord {
            id: id.into(),
            title: self.title,
            opening_text: self.opening_text,
            release_date: self.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_movie_serializes_camel_case() {
        let movie = NewMovie::new("C", "z", "2021-03-03");
        assert_eq!(
            serde_json::to_value(&movie).unwrap(),
            json!({"title": "C", "openingText": "z", "releaseDate": "2021-03-03"})
        );
    }

    #[test]
    fn empty_fields_are_allowed() {
        let movie = NewMovie::new("", "", "");
        assert_eq!(
            serde_json::to_value(&movie).unwrap(),
            json!({"title": "", "openingText": "", "releaseDate": ""})
        );
    }

    #[test]
    fn record_serializes_with_string_id() {
        let record = MovieRecord::new(1u64, "A", "x", "2021-01-01");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": "1", "title": "A", "openingText": "x", "releaseDate": "2021-01-01"})
        );
    }
}
