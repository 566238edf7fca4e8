//! Error types for the file logger

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while creating, writing to, or closing a log file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log file's parent directory could not be created
    #[error("Failed to create log directory at {}: {source}", .path.display())]
    DirectoryCreation {
        /// The directory that failed to be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// The log file could not be opened in append mode
    #[error("Failed to open log file {}: {source}", .path.display())]
    FileOpen {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// A formatted line could not be appended
    #[error("Failed to write to log file {}: {source}", .path.display())]
    FileWrite {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// The file handle could not be released cleanly
    #[error("Failed to close log file {}: {source}", .path.display())]
    FileClose {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// The timestamp pattern contains an unknown strftime specifier
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),
}
