//! Network-backed movie source.

use async_trait::async_trait;
use tracing::{debug, instrument};

use reel_core::error::InvalidInputError;
use reel_core::{CollectionUrl, MoviePayload, MovieSource, NewMovie, Result};

use crate::client::{HttpClient, HttpClientConfig};

/// A movie source reading and writing a collection over HTTP.
///
/// Reads are `GET <endpoint>`, creates are `POST <endpoint>` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpMovieSource {
    client: HttpClient,
}

impl HttpMovieSource {
    /// Create a source for the given network endpoint.
    pub fn new(endpoint: CollectionUrl) -> Result<Self> {
        Self::with_config(endpoint, HttpClientConfig::default())
    }

    /// Create a source with explicit client settings.
    pub fn with_config(endpoint: CollectionUrl, config: HttpClientConfig) -> Result<Self> {
        if !endpoint.is_network() {
            return Err(InvalidInputError::CollectionUrl {
                value: endpoint.to_string(),
                reason: "HTTP source needs an http(s):// URL".to_string(),
            }
            .into());
        }

        Ok(Self {
            client: HttpClient::new(endpoint, &config)?,
        })
    }
}

#[async_trait]
impl MovieSource for HttpMovieSource {
    fn endpoint(&self) -> &CollectionUrl {
        self.client.endpoint()
    }

    #[instrument(skip(self))]
    async fn fetch_payload(&self) -> Result<MoviePayload> {
        let body = self.client.get().await?;
        let payload = MoviePayload::from_slice(&body)?;
        debug!(shape = ?payload.shape(), count = payload.len(), "decoded collection");
        Ok(payload)
    }

    #[instrument(skip(self, movie), fields(title = %movie.title))]
    async fn submit_movie(&self, movie: &NewMovie) -> Result<()> {
        self.client.post_json(movie).await
    }
}
