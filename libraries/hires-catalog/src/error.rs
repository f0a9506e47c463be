//! Error types for catalog lookups.

use thiserror::Error;

/// Errors that can occur when searching a remote catalog.
///
/// Every variant aborts the whole search; no partial result list is returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog is offline, unreachable or timed out
    #[error("Catalog unreachable at {url}: {message}")]
    Unreachable { url: String, message: String },

    /// Catalog returned a non-success status
    #[error("Catalog error ({status}) at {url}: {body}")]
    ServerError {
        url: String,
        status: u16,
        body: String,
    },

    /// Response body is not the expected JSON envelope
    #[error("Failed to parse response from {url}: {source}, body: {body}")]
    ParseError {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope parsed but `data.trackResult` is absent
    #[error("Response has no track results, url: {url}, body: {body}")]
    MissingData { url: String, body: String },

    /// A result's `bitPerSample` is not a decimal integer
    #[error("Invalid bitPerSample {value:?} for track {track:?}: {source}")]
    InvalidBitDepth {
        value: String,
        track: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Invalid endpoint URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
