//! Collection endpoint URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated collection endpoint URL.
///
/// The same URL is used both to read the collection (GET) and to add to it
/// (POST). Both network endpoints (HTTPS/HTTP) and local collection files
/// (`file://`) are supported.
///
/// # Network URLs
///
/// Network URLs must use HTTPS (or HTTP for localhost).
///
/// # File URLs
///
/// File URLs (`file:///path/to/movies.json`) point at a JSON file holding the
/// collection, for offline use and testing.
///
/// # Example
///
/// ```
/// use reel_core::CollectionUrl;
///
/// let swapi = CollectionUrl::new("https://swapi.dev/api/films/").unwrap();
/// assert!(swapi.is_network());
///
/// let local = CollectionUrl::new("file:///tmp/movies.json").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollectionUrl(Url);

impl CollectionUrl {
    /// Create a new collection URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::CollectionUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL as a string.
    ///
    /// A bare host is rendered without the trailing slash the URL parser adds.
    pub fn as_str(&self) -> &str {
        if self.0.path() == "/" && self.0.query().is_none() && self.0.fragment().is_none() {
            self.0.as_str().trim_end_matches('/')
        } else {
            self.0.as_str()
        }
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme (e.g., "https", "http", "file").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns true if this is a local collection file (file:// URL).
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns true if this is a network endpoint (http:// or https:// URL).
    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::CollectionUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let scheme = url.scheme();

        if scheme == "file" {
            // A collection file needs a file name, not just a directory.
            if url.path().is_empty() || url.path().ends_with('/') {
                return Err(invalid("file:// URL must name a file"));
            }
            return Ok(());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        Ok(())
    }
}

impl fmt::Display for CollectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CollectionUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CollectionUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CollectionUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for CollectionUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
