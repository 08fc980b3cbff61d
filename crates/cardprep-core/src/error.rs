//! Error types for cardprep-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for cardprep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cardprep.
///
/// Documents that are out of scope or that need no changes are not errors;
/// those are reported as run outcomes by the pipeline.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure while reading or writing a file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is missing, unreadable, or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A scope pattern could not be compiled
    #[error("Invalid path pattern '{pattern}': {source}")]
    Pattern {
        /// The glob as written in the configuration
        pattern: String,
        /// Compilation failure from the regex engine
        #[source]
        source: regex::Error,
    },

    /// Heading level outside of the Markdown range
    #[error("Heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(u8),
}

impl Error {
    /// Creates an I/O error tagged with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new pattern compilation error.
    pub fn pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Error::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
