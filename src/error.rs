//! Error types for wordhoard

use std::io;
use std::path::PathBuf;
#[cfg(test)]
use std::path::Path;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// The word list source does not exist
    #[error("Resource not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The word list source exists but could not be opened or read
    #[error("Unreadable source {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while reading lines from an open source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The sorter was handed a zero-length sequence
    #[error("Cannot sort an empty sequence")]
    EmptyInput,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Classify a failure to open `path`.
    pub(crate) fn open_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path)
        } else {
            Error::Unreadable { path, source }
        }
    }
}
