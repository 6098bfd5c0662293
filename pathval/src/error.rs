//! Error types for the pathval library.
//!
//! Only the filesystem collaborator can fail. Pure path operations report a
//! missing result as `None` and never produce an [`Error`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::Path;

/// Result type alias for operations that may fail with a pathval error.
///
/// # Examples
///
/// ```
/// use pathval::{Path, Result};
///
/// fn config_dir() -> Result<Path> {
///     Ok(Path::new("/etc"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathval library.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem call failed.
    ///
    /// The operating system error is carried unmodified as the source.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path the call was issued for.
        path: Path,
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// The operating system returned a path that is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// The offending path, as returned by the operating system.
        path: PathBuf,
    },

    /// The working directory could not be determined.
    #[error("cannot determine working directory: {source}")]
    CurrentDir {
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.clone(),
            source,
        }
    }

    /// The kind of the underlying OS error, if there is one.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::CurrentDir { source } => Some(source.kind()),
            Self::InvalidUtf8 { .. } => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Error, Path};
    /// use std::io;
    ///
    /// let err = Error::Io {
    ///     path: Path::new("/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }
}
