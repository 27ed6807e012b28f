//! Movie source trait.

use async_trait::async_trait;

use crate::Result;
use crate::movie::{MoviePayload, MovieRecord, NewMovie};
use crate::types::CollectionUrl;

/// A backend serving one movie collection.
///
/// The same collection endpoint is used for reads and creates.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Returns the collection endpoint this source talks to.
    fn endpoint(&self) -> &CollectionUrl;

    /// Retrieve and decode the collection.
    async fn fetch_payload(&self) -> Result<MoviePayload>;

    /// Add a movie to the collection.
    ///
    /// The response, if any, is not interpreted beyond success or failure.
    async fn submit_movie(&self, movie: &NewMovie) -> Result<()>;

    /// Retrieve the collection as normalized records.
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.fetch_payload().await?.into_records())
    }
}

#[async_trait]
impl<S> MovieSource for std::sync::Arc<S>
where
    S: MovieSource + ?Sized,
{
    fn endpoint(&self) -> &CollectionUrl {
        (**self).endpoint()
    }

    async fn fetch_payload(&self) -> Result<MoviePayload> {
        (**self).fetch_payload().await
    }

    async fn submit_movie(&self, movie: &NewMovie) -> Result<()> {
        (**self).submit_movie(movie).await
    }
}
