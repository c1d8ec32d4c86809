//! Error handling module for ClipMark

use thiserror::Error;

/// Main error type for ClipMark operations
#[derive(Error, Debug)]
pub enum ClipMarkError {
    /// Export attempted without a loaded media file
    #[error("No media file loaded; open a video before exporting")]
    NoMediaLoaded,

    /// Export attempted with an empty interval set
    #[error("Interval set is empty; commit at least one interval before exporting")]
    EmptyIntervalSet,

    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Interval file top level is not a JSON array
    #[error("Interval file must contain a top-level JSON array")]
    IntervalFileNotArray,

    /// Interval file entry has the wrong shape
    #[error("Interval file entry {index} is not a [start, end] pair of numbers")]
    InvalidIntervalEntry { index: usize },

    /// Interval file is not valid JSON
    #[error("Malformed interval file: {0}")]
    MalformedIntervalFile(#[from] serde_json::Error),

    /// Clipping backend answered with a non-OK status
    #[error("Clipping backend returned {status}: {message}")]
    BackendRejected { status: u16, message: String },

    /// Clipping backend could not be reached
    #[error("Clipping backend request failed: {0}")]
    BackendUnreachable(#[from] reqwest::Error),

    /// Configuration file error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Domain-layer error
    #[error(transparent)]
    Domain(#[from] crate::domain::errors::DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for ClipMark operations
pub type ClipMarkResult<T> = std::result::Result<T, ClipMarkError>;
