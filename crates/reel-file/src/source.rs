//! File-backed movie source.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, instrument};

use reel_core::error::InvalidInputError;
use reel_core::{CollectionUrl, MovieId, MoviePayload, MovieSource, NewMovie, Result};

use crate::store::FileStore;

/// A movie source backed by a local collection file.
///
/// Reads decode the file like a network response, so both the list and the
/// map shape are accepted. Submissions append to a map-shaped file under a
/// generated key; a missing file is created on the first submission.
#[derive(Debug, Clone)]
pub struct FileMovieSource {
    store: FileStore,
    url: CollectionUrl,
}

impl FileMovieSource {
    /// Create a source for a `file://` collection URL.
    pub fn new(url: CollectionUrl) -> Result<Self> {
        let path = url
            .to_file_path()
            .ok_or_else(|| InvalidInputError::CollectionUrl {
                value: url.to_string(),
                reason: "file source needs a file:// URL".to_string(),
            })?;

        Ok(Self {
            store: FileStore::new(path),
            url,
        })
    }

    /// Create a source for a collection file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let url = url::Url::from_file_path(&absolute).map_err(|_| {
            InvalidInputError::CollectionUrl {
                value: absolute.display().to_string(),
                reason: "not a valid file path".to_string(),
            }
        })?;

        Self::new(CollectionUrl::new(url.as_str())?)
    }

    /// Returns the collection file path.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Add a movie and return the key it was stored under.
    #[instrument(skip(self, movie), fields(title = %movie.title))]
    pub async fn add_movie(&self, movie: &NewMovie) -> Result<MovieId> {
        self.store.append(movie)
    }
}

#[async_trait]
impl MovieSource for FileMovieSource {
    fn endpoint(&self) -> &CollectionUrl {
        &self.url
    }

    #[instrument(skip(self), fields(path = %self.store.path().display()))]
    async fn fetch_payload(&self) -> Result<MoviePayload> {
        let payload = self.store.load()?;
        debug!(shape = ?payload.shape(), count = payload.len(), "read collection");
        Ok(payload)
    }

    async fn submit_movie(&self, movie: &NewMovie) -> Result<()> {
        self.add_movie(movie).await?;
        Ok(())
    }
}
