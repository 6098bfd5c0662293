//! Filesystem queries for path values.
//!
//! Everything in [`crate::path`] is textual. This module is the one place
//! that asks the operating system about a path, through the [`FileSystem`]
//! trait so the policy below can be tested without touching disk.
//!
//! Two policies apply on top of the raw trait calls:
//!
//! - Type and existence queries ([`exists`], [`is_file`], [`is_dir`],
//!   [`is_symlink`], [`metadata`]) are safe on any path. A failed OS call
//!   is logged at debug level and answered with `false` or `None`.
//! - [`FileSystem::read_link`], [`FileSystem::read_dir`] and
//!   [`FileSystem::canonicalize`] only make sense for a path that exists,
//!   so their errors reach the caller unchanged.
//!
//! Nothing is cached: each query issues a fresh system call.

use std::time::SystemTime;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::Path;

/// The kind of object a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// A symbolic link. Only reported by non-following queries.
    Symlink,
    /// Anything else: sockets, pipes, devices.
    Other,
}

impl From<std::fs::FileType> for FileType {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Symlink => "symlink",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// The subset of file metadata exposed for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// What the path refers to.
    pub file_type: FileType,
    /// Size in bytes.
    pub len: u64,
    /// Whether the permissions forbid writing.
    pub readonly: bool,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

impl From<std::fs::Metadata> for Metadata {
    fn from(meta: std::fs::Metadata) -> Self {
        Self {
            file_type: meta.file_type().into(),
            len: meta.len(),
            readonly: meta.permissions().readonly(),
            modified: meta.modified().ok(),
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    /// The entry's file name.
    pub name: String,
    /// The entry's type, without following symlinks.
    pub file_type: FileType,
    /// The listed directory joined with `name`.
    pub path: Path,
}

/// The operating-system primitives path values rely on.
///
/// Each method performs exactly one query and reports failure as
/// [`Error::Io`] carrying the OS error unmodified.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Metadata of the path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be stat'ed.
    fn metadata(&self, path: &Path) -> Result<Metadata>;

    /// Metadata of the path itself, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be lstat'ed.
    fn symlink_metadata(&self, path: &Path) -> Result<Metadata>;

    /// The target of a symbolic link, as stored in the link.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a symlink or cannot be read, or
    /// if the target is not valid UTF-8.
    fn read_link(&self, path: &Path) -> Result<Path>;

    /// The entries of a directory, in the order the OS returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened or an entry
    /// cannot be read.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// The absolute path with every symlink resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if any component does not exist, or if the result
    /// is not valid UTF-8.
    fn canonicalize(&self, path: &Path) -> Result<Path>;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// # Examples
///
/// ```
/// use pathval::fs::{self, OsFileSystem};
/// use pathval::Path;
///
/// let root = Path::new("/");
/// assert!(fs::is_dir(&OsFileSystem, &root));
/// assert!(!fs::exists(&OsFileSystem, &Path::new("/definitely/not/here")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn metadata(&self, path: &Path) -> Result<Metadata> {
        log::trace!("stat {path}");
        std::fs::metadata(path.as_std_path())
            .map(Metadata::from)
            .map_err(|e| Error::io(path, e))
    }

    fn symlink_metadata(&self, path: &Path) -> Result<Metadata> {
        log::trace!("lstat {path}");
        std::fs::symlink_metadata(path.as_std_path())
            .map(Metadata::from)
            .map_err(|e| Error::io(path, e))
    }

    fn read_link(&self, path: &Path) -> Result<Path> {
        log::trace!("readlink {path}");
        let target = std::fs::read_link(path.as_std_path()).map_err(|e| Error::io(path, e))?;
        Path::try_from(target)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        log::trace!("readdir {path}");
        let entries = std::fs::read_dir(path.as_std_path()).map_err(|e| Error::io(path, e))?;

        let mut listing = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(path, e))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| Error::InvalidUtf8 { path: entry.path() })?;
            let file_type = entry.file_type().map_err(|e| Error::io(path, e))?;
            listing.push(DirEntry {
                path: path.join(&name),
                name,
                file_type: file_type.into(),
            });
        }
        Ok(listing)
    }

    fn canonicalize(&self, path: &Path) -> Result<Path> {
        log::trace!("realpath {path}");
        let resolved = std::fs::canonicalize(path.as_std_path()).map_err(|e| Error::io(path, e))?;
        Path::try_from(resolved)
    }
}

fn swallow<T>(path: &Path, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("treating {path} as absent: {e}");
            None
        }
    }
}

/// Metadata of the path, or `None` if it cannot be stat'ed.
pub fn metadata<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Option<Metadata> {
    swallow(path, fs.metadata(path))
}

/// Whether the path can be stat'ed. Broken symlinks do not exist.
pub fn exists<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    metadata(fs, path).is_some()
}

/// Whether the path is, or links to, a regular file.
pub fn is_file<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    metadata(fs, path).is_some_and(|m| m.file_type == FileType::File)
}

/// Whether the path is, or links to, a directory.
pub fn is_dir<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    metadata(fs, path).is_some_and(|m| m.file_type == FileType::Dir)
}

/// Whether the path itself is a symbolic link.
pub fn is_symlink<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    swallow(path, fs.symlink_metadata(path)).is_some_and(|m| m.file_type == FileType::Symlink)
}

impl Path {
    /// Whether this path names a directory on disk.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        is_dir(&OsFileSystem, self)
    }

    /// Whether this path names a regular file on disk.
    #[must_use]
    pub fn is_file(&self) -> bool {
        is_file(&OsFileSystem, self)
    }

    /// Whether this path exists on disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert!(Path::new("/").exists());
    /// assert!(!Path::new("/no/such/place").exists());
    /// ```
    #[must_use]
    pub fn exists(&self) -> bool {
        exists(&OsFileSystem, self)
    }

    /// Whether this path is itself a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        is_symlink(&OsFileSystem, self)
    }

    /// Metadata for this path, following symlinks.
    #[must_use]
    pub fn metadata(&self) -> Option<Metadata> {
        metadata(&OsFileSystem, self)
    }

    /// The target of this symbolic link.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the link cannot be read.
    pub fn read_link(&self) -> Result<Path> {
        OsFileSystem.read_link(self)
    }

    /// The entries of this directory.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the directory cannot be listed.
    pub fn read_dir(&self) -> Result<Vec<DirEntry>> {
        OsFileSystem.read_dir(self)
    }

    /// The real path of this path, with symlinks resolved.
    ///
    /// For a purely lexical absolute form see [`Path::absolute`].
    ///
    /// # Errors
    ///
    /// Returns the OS error if the path cannot be resolved.
    pub fn canonicalize(&self) -> Result<Path> {
        OsFileSystem.canonicalize(self)
    }
}
