//! HTTP client for collection endpoints.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use reel_core::error::{Error, RequestFailed, TransportError};
use reel_core::{CollectionUrl, Result};

/// Settings for the underlying HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Overall per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

/// HTTP client bound to one collection endpoint.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    endpoint: CollectionUrl,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Create a new client for the given endpoint.
    pub fn new(endpoint: CollectionUrl, config: &HttpClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("reel/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::Http {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
        })
    }

    /// Returns the endpoint this client is configured for.
    pub fn endpoint(&self) -> &CollectionUrl {
        &self.endpoint
    }

    /// GET the collection and return the raw body.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get(&self) -> Result<Vec<u8>> {
        debug!("GET collection");

        let response = self
            .client
            .get(self.endpoint.as_url().clone())
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let response = self.check_status(response)?;
        let body = response.bytes().await.map_err(|e| self.map_transport(e))?;
        trace!(len = body.len(), "response body");

        Ok(body.to_vec())
    }

    /// POST a JSON body to the collection, ignoring the response body.
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    pub async fn post_json<B>(&self, body: &B) -> Result<()>
    where
        B: Serialize + std::fmt::Debug,
    {
        debug!("POST collection");
        trace!(?body, "request body");

        let response = self
            .client
            .post(self.endpoint.as_url().clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.check_status(response)?;
        Ok(())
    }

    /// Turn a non-success status into [`RequestFailed`].
    fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(response)
        } else {
            debug!(status = status.as_u16(), "request failed");
            Err(Error::RequestFailed(RequestFailed::new(status.as_u16())))
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        let transport = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self
                    .timeout
                    .map(|t| t.as_millis() as u64)
                    .unwrap_or_default(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(transport)
    }
}
