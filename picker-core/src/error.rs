//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Picker
//!
//! Every fallible operation inside the library returns `Result<T, AppError>`.
//! The binary wraps these in `anyhow` at the boundary.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all picker operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured root is missing or is not a directory.
    #[error("Initial path must be a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// Reading a directory's entries failed.
    #[error("Cannot list {path:?}: {source}")]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing task was superseded by a newer request.
    #[error("Listing of {0:?} was superseded")]
    Superseded(PathBuf),

    /// The typed folder name would leave the current directory.
    #[error("Folder name {0:?} must stay inside the current directory")]
    InvalidFolderName(String),

    /// Creating a folder failed.
    #[error("Failed to create folder {path:?}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No platform directory could be determined.
    #[error("Could not determine {0} directory")]
    NoPlatformDir(&'static str),

    /// The picked path cannot be reported without altering it.
    #[error("Path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    /// Serialization error while reporting the result.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Logging could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Create a listing failure error
    pub fn listing_failed<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ListingFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a folder creation failure error
    pub fn create_folder<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::CreateFolder {
            path: path.into(),
            source,
        }
    }

    /// Create a config I/O error
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// True when the listing was cancelled rather than failed.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded(_))
    }
}

fn clone_io(e: &io::Error) -> io::Error {
    io::Error::new(e.kind(), e.to_string())
}

// Manual Clone implementation to handle non-Clone fields. Parser errors
// have no Clone and degrade to `Io` carrying their message.
impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            Self::Io(e) => Self::Io(clone_io(e)),
            Self::NotADirectory(path) => Self::NotADirectory(path.clone()),
            Self::ListingFailed { path, source } => Self::ListingFailed {
                path: path.clone(),
                source: clone_io(source),
            },
            Self::Superseded(path) => Self::Superseded(path.clone()),
            Self::InvalidFolderName(name) => Self::InvalidFolderName(name.clone()),
            Self::CreateFolder { path, source } => Self::CreateFolder {
                path: path.clone(),
                source: clone_io(source),
            },
            Self::Config(e) => Self::Io(io::Error::other(format!("Config error: {e}"))),
            Self::ConfigSerialize(e) => Self::Io(io::Error::other(format!("Config error: {e}"))),
            Self::ConfigIo { path, source } => Self::ConfigIo {
                path: path.clone(),
                source: clone_io(source),
            },
            Self::NoPlatformDir(kind) => Self::NoPlatformDir(kind),
            Self::NonUtf8Path(path) => Self::NonUtf8Path(path.clone()),
            Self::Serde(e) => Self::Io(io::Error::other(format!("Serde error: {e}"))),
            Self::Logging(msg) => Self::Logging(msg.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = AppError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert!(err.to_string().contains("must be a directory"));
    }

    #[test]
    fn test_clone_keeps_listing_failure() {
        let err = AppError::listing_failed(
            "/r/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        match err.clone() {
            AppError::ListingFailed { path, source } => {
                assert_eq!(path, PathBuf::from("/r/locked"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected ListingFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_superseded_is_distinguishable() {
        assert!(AppError::Superseded(PathBuf::from("/")).is_superseded());
        assert!(!AppError::NotADirectory(PathBuf::from("/")).is_superseded());
    }
}
