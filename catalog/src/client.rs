//! Catalog client implementation

use crate::error::CatalogError;
use crate::fallback;
use crate::wire::{Volume, VolumeList};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use storefront_core::{Book, BookId};

/// Default volumes API endpoint (Google Books v1)
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Query used when the caller has no search term
const DEFAULT_QUERY: &str = "subject:fiction";

/// Environment variable holding the optional API key
const API_KEY_VAR: &str = "GOOGLE_BOOKS_API_KEY";

/// Configuration for [`CatalogClient`]
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Base URL of the volumes API
    pub base_url: String,
    /// Optional API key appended to each request
    pub api_key: Option<String>,
    /// Per-request timeout; requests that exceed it degrade to fallback data
    pub timeout: Duration,
    /// Maximum number of results per search
    pub max_results: u32,
}

impl CatalogConfig {
    /// Create a configuration with default settings
    ///
    /// Defaults:
    /// - `base_url`: the public volumes API
    /// - `api_key`: none
    /// - `timeout`: 10 seconds
    /// - `max_results`: 20
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
            max_results: 20,
        }
    }

    /// Set the base URL (tests point this at a local mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of search results
    #[must_use]
    pub const fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only client for the book catalog
///
/// The public lookup surface never fails: any transport or API problem is
/// logged and recovered with the bundled [`fallback`] dataset, so cart
/// flows are never blocked on the network.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a client from a configuration
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client with defaults, picking up `GOOGLE_BOOKS_API_KEY`
    /// from the environment when present
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn from_env() -> Result<Self, CatalogError> {
        let mut config = CatalogConfig::new();
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            config = config.with_api_key(key);
        }
        Self::new(config)
    }

    // ========== Public lookup surface (never fails) ==========

    /// Search the catalog.
    ///
    /// A blank term returns the featured listing instead. On failure the
    /// fallback dataset is served, filtered by title/author substring.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Vec<Book> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.fetch_featured().await;
        }

        match self.request_volumes(trimmed).await {
            Ok(books) => books,
            Err(error) => {
                tracing::warn!(%error, term = trimmed, "catalog search failed, serving fallback");
                metrics::counter!("catalog.fallbacks.total", "op" => "search").increment(1);
                fallback::search(trimmed)
            }
        }
    }

    /// The featured listing the landing view renders (default subject query)
    #[tracing::instrument(skip(self))]
    pub async fn fetch_featured(&self) -> Vec<Book> {
        match self.request_volumes(DEFAULT_QUERY).await {
            Ok(books) => books,
            Err(error) => {
                tracing::warn!(%error, "featured listing failed, serving fallback");
                metrics::counter!("catalog.fallbacks.total", "op" => "featured").increment(1);
                fallback::all()
            }
        }
    }

    /// Resolve a single volume by identifier.
    ///
    /// On failure the fallback dataset is consulted; `None` means the
    /// identifier is unknown everywhere.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: &BookId) -> Option<Book> {
        match self.request_volume(id).await {
            Ok(book) => Some(book),
            Err(error) => {
                tracing::warn!(%error, book_id = %id, "catalog lookup failed, serving fallback");
                metrics::counter!("catalog.fallbacks.total", "op" => "fetch_by_id").increment(1);
                fallback::by_id(id)
            }
        }
    }

    // ========== Fallible request layer ==========

    /// Run a volumes search query against the API
    ///
    /// # Errors
    ///
    /// Returns errors for transport failures, non-success statuses, and
    /// bodies that do not match the wire shape.
    async fn request_volumes(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let max_results = self.config.max_results.to_string();
        let mut request = self
            .client
            .get(format!("{}/volumes", self.config.base_url))
            .query(&[("q", query), ("maxResults", max_results.as_str())]);
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        metrics::counter!("catalog.requests.total", "op" => "search").increment(1);
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let list = response
                    .json::<VolumeList>()
                    .await
                    .map_err(|e| CatalogError::ResponseParseFailed(e.to_string()))?;
                Ok(list.items.into_iter().map(Book::from).collect())
            }
            StatusCode::TOO_MANY_REQUESTS => Err(CatalogError::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(CatalogError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Fetch one volume record by identifier
    ///
    /// # Errors
    ///
    /// Returns errors for transport failures, a 404 (`NotFound`), other
    /// non-success statuses, and unparsable bodies.
    async fn request_volume(&self, id: &BookId) -> Result<Book, CatalogError> {
        let mut request = self
            .client
            .get(format!("{}/volumes/{}", self.config.base_url, id));
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        metrics::counter!("catalog.requests.total", "op" => "fetch_by_id").increment(1);
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let volume = response
                    .json::<Volume>()
                    .await
                    .map_err(|e| CatalogError::ResponseParseFailed(e.to_string()))?;
                Ok(Book::from(volume))
            }
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(id.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(CatalogError::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(CatalogError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}
