//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
///
/// Cache failures never show up here: a broken cache degrades to a miss or a
/// skipped write instead.
#[derive(Debug, Error)]
pub enum DataError {
    /// Remote provider failure: transport, non-success status, exhausted
    /// rate-limit retries or a malformed payload.
    #[error("APIError: {0}")]
    Api(String),

    /// Rejected caller input (period, ticker, exchange, dates, range query).
    #[error("InputError: {0}")]
    Input(String),

    /// Data accessed before it was populated
    #[error("Data not yet available: {0}")]
    NotAvailable(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Shorthand for an [`DataError::Api`] error.
    pub fn api(detail: impl Into<String>) -> Self {
        Self::Api(detail.into())
    }

    /// Shorthand for an [`DataError::Input`] error.
    pub fn input(detail: impl Into<String>) -> Self {
        Self::Input(detail.into())
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        Self::Api(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Api(format!("malformed payload: {}", err))
    }
}
