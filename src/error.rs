//! Error types for the gather source aggregator.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an aggregation run
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Configuration error: the path {path:?} must include '{marker}' as a folder")]
    Configuration { path: PathBuf, marker: String },

    #[error("Invalid root: {path:?} is not an existing directory")]
    InvalidRoot { path: PathBuf },

    #[error("Failed to write report {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a qualifying file could not be included in the report.
///
/// Never fatal: the aggregator logs it, records it in the summary and moves on.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Errors at the configuration, logging and CLI surface
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Output formatting failed: {0}")]
    Format(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
