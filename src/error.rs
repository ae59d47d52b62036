//! Error types for the directory index.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an index. Every variant is fatal to the build.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parent directory not indexed: {0}")]
    ParentNotFound(String),

    #[error("Identifier collision at key {key}: {existing:?} and {incoming:?}")]
    IdentifierCollision {
        key: String,
        existing: String,
        incoming: String,
    },

    #[error("Invalid segment name: {0:?}")]
    InvalidSegment(String),

    #[error("Invalid tree root: {0}")]
    InvalidRoot(String),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Front-end errors (CLI, config, logging).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
