//! CLI error type.

use fundament_data::DataError;

/// Errors surfaced to the user before exiting with status 1.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    /// Data layer failure (provider, input, configuration).
    #[error(transparent)]
    Data(#[from] DataError),
    /// Polars DataFrame error.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Progress bar template error.
    #[error("Progress template error: {0}")]
    Template(#[from] indicatif::style::TemplateError),
    /// Terminal output error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
