//! Error types for directory structure rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by rendering, export, and CLI operations.
#[derive(Debug, Error)]
pub enum FoldermapError {
    /// I/O failure while enumerating or writing. Permission-denied during
    /// directory listing is recovered inline as a marker node and never
    /// reaches this variant.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Succeeding mode: the target is absent from its parent's subdirectory
    /// listing.
    #[error("Target folder not found in parent directory: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// The target path has no usable parent or file name component.
    #[error("Invalid target path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Invalid render mode: {0} (must be 'target', 'preceding', or 'succeeding')")]
    InvalidMode(String),

    #[error("Invalid output format: {0} (must be 'text' or 'json')")]
    InvalidFormat(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

impl FoldermapError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FoldermapError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for FoldermapError {
    fn from(e: config::ConfigError) -> Self {
        FoldermapError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for FoldermapError {
    fn from(e: serde_json::Error) -> Self {
        FoldermapError::SerializationError(e.to_string())
    }
}
