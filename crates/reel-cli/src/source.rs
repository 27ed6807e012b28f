//! Endpoint resolution and the CLI movie source.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use reel_core::{CollectionUrl, MoviePayload, MovieSource, NewMovie};
use reel_file::FileMovieSource;
use reel_http::{HttpClientConfig, HttpMovieSource};

use crate::config::storage;

/// Endpoint used when neither an override nor a stored config is present.
pub const DEFAULT_ENDPOINT: &str = "https://swapi.dev/api/films/";

/// Endpoint overrides from the command line or environment.
#[derive(Debug, Clone, Default)]
pub struct Target {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Where the effective endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Override,
    Config,
    Default,
}

impl Origin {
    pub fn describe(self) -> &'static str {
        match self {
            Origin::Override => "command line / REEL_ENDPOINT",
            Origin::Config => "stored config",
            Origin::Default => "built-in default",
        }
    }
}

/// The effective endpoint settings.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub endpoint: CollectionUrl,
    pub timeout: Option<Duration>,
    pub origin: Origin,
}

impl Target {
    /// Resolve the effective endpoint: override, then stored config, then default.
    pub fn resolve(&self) -> Result<Resolved> {
        let stored = storage::load_config().context("Failed to load config")?;

        let (endpoint, origin) = match (&self.endpoint, stored.collection_endpoint) {
            (Some(url), _) => (
                CollectionUrl::new(url).context("Invalid collection endpoint")?,
                Origin::Override,
            ),
            (None, Some(url)) => (url, Origin::Config),
            (None, None) => (CollectionUrl::new(DEFAULT_ENDPOINT)?, Origin::Default),
        };

        let timeout = self
            .timeout_secs
            .or(stored.request_timeout_secs)
            .map(Duration::from_secs);

        Ok(Resolved {
            endpoint,
            timeout,
            origin,
        })
    }

    /// Resolve the endpoint and open a source for it.
    pub fn open(&self) -> Result<CliSource> {
        let resolved = self.resolve()?;
        tracing::debug!(endpoint = %resolved.endpoint, origin = ?resolved.origin, "resolved endpoint");
        CliSource::open(resolved)
    }
}

/// Movie source wrapper for CLI use.
#[derive(Debug)]
pub enum CliSource {
    File(FileMovieSource),
    Http(HttpMovieSource),
}

impl CliSource {
    pub fn open(resolved: Resolved) -> Result<Self> {
        if resolved.endpoint.is_local() {
            let source =
                FileMovieSource::new(resolved.endpoint).context("Invalid collection file")?;
            Ok(CliSource::File(source))
        } else {
            let config = HttpClientConfig {
                timeout: resolved.timeout,
            };
            let source = HttpMovieSource::with_config(resolved.endpoint, config)
                .context("Failed to set up HTTP client")?;
            Ok(CliSource::Http(source))
        }
    }
}

#[async_trait]
impl MovieSource for CliSource {
    fn endpoint(&self) -> &CollectionUrl {
        match self {
            CliSource::File(source) => source.endpoint(),
            CliSource::Http(source) => source.endpoint(),
        }
    }

    async fn fetch_payload(&self) -> reel_core::Result<MoviePayload> {
        match self {
            CliSource::File(source) => source.fetch_payload().await,
            CliSource::Http(source) => source.fetch_payload().await,
        }
    }

    async fn submit_movie(&self, movie: &NewMovie) -> reel_core::Result<()> {
        match self {
            CliSource::File(source) => source.submit_movie(movie).await,
            CliSource::Http(source) => source.submit_movie(movie).await,
        }
    }
}
