//! Error types for the catalog client

use thiserror::Error;

/// Errors that can occur when talking to the volumes API
///
/// These never escape the public lookup surface — [`crate::CatalogClient`]
/// recovers by serving the bundled fallback dataset. They are still public
/// so the fallible request layer can be exercised and logged precisely.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP client construction failed
    #[error("client construction failed: {0}")]
    ClientBuild(String),

    /// HTTP request failed (transport error, DNS, or timeout)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the volumes wire shape
    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Rate limited - too many requests
    #[error("rate limited - too many requests")]
    RateLimited,

    /// Volume identifier unknown to the API
    #[error("volume not found: {0}")]
    NotFound(String),

    /// API returned an error status
    #[error("api error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },
}
