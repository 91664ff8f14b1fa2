//! Poster lookup against the third-party movie search API.
//!
//! The catalogue only consults the lookup when a new movie arrives without
//! an image. [`TmdbPosterClient`] talks to the real service;
//! [`DisabledPosterLookup`] is used when no API key is configured.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cinebase_core::poster::PosterSearchResponse;
use reqwest::header::ACCEPT;

/// Default title search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.themoviedb.org/3/search/movie";

/// Default bound on one lookup call, in seconds.
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Poster-lookup settings.
#[derive(Debug, Clone)]
pub struct PosterConfig {
    /// API credential. `None` disables lookups.
    pub api_key: Option<String>,
    /// Title search endpoint.
    pub search_url: String,
    /// Bound on one lookup call, in seconds.
    pub timeout_secs: u64,
}

impl PosterConfig {
    /// Load poster-lookup configuration from environment variables.
    ///
    /// | Env Var                      | Default                                      |
    /// |------------------------------|----------------------------------------------|
    /// | `TMDB_API_KEY`               | unset (lookups disabled)                     |
    /// | `TMDB_SEARCH_URL`            | `https://api.themoviedb.org/3/search/movie`  |
    /// | `POSTER_LOOKUP_TIMEOUT_SECS` | `5`                                          |
    pub fn from_env() -> Self {
        let api_key = std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let search_url =
            std::env::var("TMDB_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.into());

        let timeout_secs: u64 = std::env::var("POSTER_LOOKUP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_LOOKUP_TIMEOUT_SECS.to_string())
            .parse()
            .expect("POSTER_LOOKUP_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            search_url,
            timeout_secs,
        }
    }

    /// Configuration with lookups turned off.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            search_url: DEFAULT_SEARCH_URL.into(),
            timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
        }
    }
}

/// Errors from the poster search call.
#[derive(Debug, thiserror::Error)]
pub enum PosterError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Poster search error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The body was not the expected JSON shape.
    #[error("Invalid poster search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Finds a poster URL for a movie title.
#[async_trait]
pub trait PosterLookup: Send + Sync {
    /// Return the display URL of the first poster found, or `None`.
    async fn lookup(&self, title: &str) -> Result<Option<String>, PosterError>;

    /// Whether lookups can find anything at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Lookup used when no API key is configured. Never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledPosterLookup;

#[async_trait]
impl PosterLookup for DisabledPosterLookup {
    async fn lookup(&self, _title: &str) -> Result<Option<String>, PosterError> {
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// HTTP client for the title search endpoint.
pub struct TmdbPosterClient {
    client: reqwest::Client,
    search_url: String,
    api_key: String,
}

impl TmdbPosterClient {
    /// Build a client whose requests are bounded by `timeout`.
    pub fn new(
        search_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, PosterError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, search_url, api_key))
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, search_url: String, api_key: String) -> Self {
        Self {
            client,
            search_url,
            api_key,
        }
    }
}

#[async_trait]
impl PosterLookup for TmdbPosterClient {
    async fn lookup(&self, title: &str) -> Result<Option<String>, PosterError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PosterError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PosterSearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.first_poster_url())
    }
}

/// Pick the lookup implementation for the given configuration.
pub fn build_poster_lookup(config: &PosterConfig) -> Result<Arc<dyn PosterLookup>, PosterError> {
    match &config.api_key {
        Some(key) => {
            let client = TmdbPosterClient::new(
                config.search_url.clone(),
                key.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            tracing::info!(search_url = %config.search_url, "Poster lookup enabled");
            Ok(Arc::new(client))
        }
        None => {
            tracing::info!("TMDB_API_KEY not set, poster lookup disabled");
            Ok(Arc::new(DisabledPosterLookup))
        }
    }
}
