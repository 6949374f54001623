//! Error types for BOM detection and configuration loading

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the leading bytes of a file
#[derive(Debug, Error)]
pub enum DetectError {
    /// File could not be opened (not found, permission denied, ...)
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File was opened but reading its prefix failed
    #[error("cannot read prefix of {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a caller-supplied reader failed
    #[error("cannot read prefix: {0}")]
    Stream(#[source] io::Error),
}

impl DetectError {
    /// Underlying I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            DetectError::Open { source, .. }
            | DetectError::Read { source, .. }
            | DetectError::Stream(source) => source.kind(),
        }
    }
}

/// Configuration parsing errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = DetectError> = std::result::Result<T, E>;
