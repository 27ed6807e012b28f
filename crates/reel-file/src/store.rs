//! Filesystem storage for a local movie collection.
//!
//! The collection is a single JSON file in map shape: an object keyed by
//! movie id, in insertion order. Writers hold an exclusive lock on a sibling
//! `.lock` file and replace the collection file atomically.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use reel_core::Result;
use reel_core::error::{DecodeError, Error, InvalidInputError};
use reel_core::{MovieId, MoviePayload, NewMovie};

/// Filesystem-backed storage for one collection file.
#[derive(Debug, Clone)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given collection file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the collection file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the lock file path.
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Generate a new collection key.
    fn generate_key() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Open the lock file, creating parent directories as needed.
    ///
    /// Only writers take the lock.
    fn open_lock(&self) -> Result<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;
        Ok(lock)
    }

    /// Read the raw collection file; `None` if it does not exist yet.
    fn read_raw(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load and decode the collection.
    ///
    /// Writers replace the file by rename, so a plain read always sees one
    /// complete version. Reading never creates files or directories.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<MoviePayload> {
        let payload = match self.read_raw()? {
            Some(bytes) => MoviePayload::from_slice(&bytes)?,
            None => {
                trace!("collection file missing, treating as empty");
                MoviePayload::Map(Vec::new())
            }
        };

        debug!(count = payload.len(), "loaded collection");
        Ok(payload)
    }

    /// Append a movie under a freshly generated key.
    #[instrument(skip(self, movie), fields(path = %self.path.display()))]
    pub fn append(&self, movie: &NewMovie) -> Result<MovieId> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let result = self.append_locked(movie);
        lock.unlock()?;

        let key = result?;
        debug!(id = %key, "appended movie");
        Ok(key)
    }

    fn append_locked(&self, movie: &NewMovie) -> Result<MovieId> {
        let existing = match self.read_raw()? {
            Some(bytes) => serde_json::from_slice::<Value>(&bytes).map_err(DecodeError::from)?,
            None => Value::Null,
        };

        let mut object = match existing {
            Value::Null => Map::new(),
            Value::Object(object) if !MoviePayload::is_list_envelope(&object) => object,
            _ => {
                return Err(Error::InvalidInput(InvalidInputError::Other {
                    message: format!(
                        "{} is not a map-shaped collection; cannot add movies to it",
                        self.path.display()
                    ),
                }));
            }
        };

        let key = Self::generate_key();
        let value = serde_json::to_value(movie).map_err(DecodeError::from)?;
        object.insert(key.clone(), value);

        let content =
            serde_json::to_string_pretty(&Value::Object(object)).map_err(DecodeError::from)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(MovieId::new(key))
    }
}
