//! Defines the error type shared by the walker, the ignore loader and the CLI.
//!
//! Pattern compilation never fails: every string is a valid pattern, so there
//! is no parse error variant here.

use thiserror::Error;

/// Errors produced by `ignorewalk`.
#[derive(Error, Debug)]
pub enum Error {
    /// An ignore file, a directory or an entry's metadata could not be read.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A visitor stopped the walk.
    ///
    /// Visitors with their own error type return that instead; this variant
    /// exists for callers that are happy with the crate error.
    #[error("Walk aborted at '{path}': {reason}")]
    VisitorAborted { path: String, reason: String },

    /// Invalid configuration, such as a base path that is not a directory.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::VisitorAborted` for `path`.
pub fn visitor_aborted<P: AsRef<std::path::Path>>(path: P, reason: impl Into<String>) -> Error {
    Error::VisitorAborted {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/dir/.gitignore");
        let source_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/dir/.gitignore"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = io_error_with_path(io::Error::new(io::ErrorKind::NotFound, "gone"), "a/b");
        assert_eq!(err.to_string(), "I/O error accessing path 'a/b': gone");

        let err = visitor_aborted("a/b.txt", "limit reached");
        assert_eq!(err.to_string(), "Walk aborted at 'a/b.txt': limit reached");

        assert!(Error::Interrupted.to_string().contains("cancelled"));
    }
}
