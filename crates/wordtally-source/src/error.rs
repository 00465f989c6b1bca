//! Errors raised while loading the source page.

use thiserror::Error;

/// Failures that prevent a corpus from being built.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Section marker not found: {marker}")]
    MarkerNotFound { marker: String },

    #[error("Invalid HTTP client configuration: {0}")]
    Client(String),
}

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    pub fn marker_not_found(marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
        }
    }
}
