//! Error types for the scout library.

use thiserror::Error;

/// Result type alias for scout operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while ranking proxies or scraping search pages.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a document or selector.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request exceeded its time budget.
    #[error("Request timeout exceeded")]
    Timeout,

    /// The search request is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A proxy endpoint could not be turned into a client.
    #[error("Invalid proxy '{0}'")]
    Proxy(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading or writing a document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
