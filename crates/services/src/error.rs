//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `ProgressSource`.
///
/// The synchronizer never forwards these to its callers; they only decide
/// what the failure policy does with the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("progress request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("progress document is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("progress source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while building a fetcher configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid progress endpoint {raw:?}: {source}")]
    InvalidEndpoint {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("progress endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}
