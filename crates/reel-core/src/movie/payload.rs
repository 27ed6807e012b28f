//! Decoding of remote collection payloads.
//!
//! Two payload shapes are understood, and the shape is chosen by looking at
//! the top-level JSON value:
//!
//! - **List shape**: an array of `{episode_id, title, opening_crawl,
//!   release_date}` entries, as served by the public sample API. The API wraps
//!   the array in an envelope (`{"count": .., "results": [..]}`), which is
//!   unwrapped here as well.
//! - **Map shape**: an object mapping each movie id to
//!   `{title, openingText, releaseDate}`, as stored by a key-value database.
//!
//! Both decode to the same ordered sequence of [`MovieRecord`]s.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::DecodeError;
use crate::types::MovieId;

use super::MovieRecord;

/// Name of the envelope member holding the list in sample API responses.
const ENVELOPE_RESULTS: &str = "results";

/// The top-level shape a payload was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    List,
    Map,
}

/// An entry of the list shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub episode_id: MovieId,
    pub title: String,
    pub opening_crawl: String,
    pub release_date: String,
}

/// A value of the map shape; the id is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEntry {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

/// A decoded collection payload, tagged with the shape it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviePayload {
    /// Entries of the list shape, in response order.
    List(Vec<ListEntry>),
    /// `(key, value)` pairs of the map shape, in document order.
    Map(Vec<(MovieId, MapEntry)>),
}

impl MoviePayload {
    /// Decode a payload from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Decode a payload from an already parsed JSON value.
    ///
    /// A JSON `null` decodes as an empty map: key-value databases answer
    /// `null` for a collection that has never been written.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let payload = match value {
            Value::Null => MoviePayload::Map(Vec::new()),
            Value::Array(items) => Self::decode_list(items)?,
            Value::Object(object) if Self::is_list_envelope(&object) => {
                trace!("unwrapping list envelope");
                let items = object
                    .into_iter()
                    .find_map(|(key, value)| match value {
                        Value::Array(items) if key == ENVELOPE_RESULTS => Some(items),
                        _ => None,
                    })
                    .unwrap_or_default();
                Self::decode_list(items)?
            }
            Value::Object(object) => Self::decode_map(object)?,
            Value::Bool(_) => return Err(DecodeError::UnsupportedShape { found: "a boolean" }),
            Value::Number(_) => return Err(DecodeError::UnsupportedShape { found: "a number" }),
            Value::String(_) => return Err(DecodeError::UnsupportedShape { found: "a string" }),
        };

        payload.check_unique_ids()?;
        Ok(payload)
    }

    /// Returns true if `object` is a list envelope: its `results` member is
    /// an array. Such an object decodes as the list shape, not the map shape.
    pub fn is_list_envelope(object: &Map<String, Value>) -> bool {
        matches!(object.get(ENVELOPE_RESULTS), Some(Value::Array(_)))
    }

    fn decode_list(items: Vec<Value>) -> Result<Self, DecodeError> {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<ListEntry>(item).map_err(|e| DecodeError::Entry {
                    key: index.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MoviePayload::List(entries))
    }

    fn decode_map(object: Map<String, Value>) -> Result<Self, DecodeError> {
        let entries = object
            .into_iter()
            .map(|(key, item)| {
                let entry = serde_json::from_value::<MapEntry>(item).map_err(|e| {
                    DecodeError::Entry {
                        key: key.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok((MovieId::new(key), entry))
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;

        Ok(MoviePayload::Map(entries))
    }

    fn check_unique_ids(&self) -> Result<(), DecodeError> {
        let ids: Vec<&MovieId> = match self {
            MoviePayload::List(entries) => entries.iter().map(|e| &e.episode_id).collect(),
            MoviePayload::Map(entries) => entries.iter().map(|(id, _)| id).collect(),
        };

        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(duplicate) = ids.into_iter().find(|id| !seen.insert(*id)) {
            return Err(DecodeError::DuplicateId {
                id: duplicate.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the shape this payload was decoded from.
    pub fn shape(&self) -> PayloadShape {
        match self {
            MoviePayload::List(_) => PayloadShape::List,
            MoviePayload::Map(_) => PayloadShape::Map,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            MoviePayload::List(entries) => entries.len(),
            MoviePayload::Map(entries) => entries.len(),
        }
    }

    /// Returns true if the payload holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize into display records, keeping payload order.
    pub fn into_records(self) -> Vec<MovieRecord> {
        match self {
            MoviePayload::List(entries) => entries
                .into_iter()
                .map(|e| MovieRecord {
                    id: e.episode_id,
                    title: e.title,
                    opening_text: e.opening_crawl,
                    release_date: e.release_date,
                })
                .collect(),
            MoviePayload::Map(entries) => entries
                .into_iter()
                .map(|(id, e)| MovieRecord {
                    id,
                    title: e.title,
                    opening_text: e.opening_text,
                    release_date: e.release_date,
                })
                .collect(),
        }
    }
}
