#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathval
//!
//! Immutable, purely textual path values.
//!
//! A [`Path`] wraps a string and answers questions about it without
//! touching the filesystem: parent, ancestors, components, file name,
//! stem and extension, plus component-wise prefix and suffix matching.
//! Only the methods in [`fs`] talk to the operating system.
//!
//! ## Core Types
//!
//! - [`Path`]: the path value, compared structurally
//! - [`Ancestors`]: a single-pass cursor from a path to its root
//! - [`Component`] and [`Components`]: the derived component sequence
//! - [`PathRelationship`]: how two paths relate in the hierarchy
//! - [`Error`] and [`Result`]: errors from filesystem queries
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathval::Path;
//!
//! let path = Path::new("/test/haha/foo.txt");
//! assert_eq!(path.file_stem().as_deref(), Some("foo"));
//! assert_eq!(path.extension().as_deref(), Some("txt"));
//! assert_eq!(path.strip_prefix("/"), Some(Path::new("test/haha/foo.txt")));
//! assert_eq!(path.strip_prefix("test"), None);
//!
//! let joined = Path::new("/etc").join("passwd");
//! assert_eq!(joined.as_str(), "/etc/passwd");
//! ```

pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fs::{DirEntry, FileSystem, FileType, Metadata, OsFileSystem};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    Ancestors, Component, Components, Path, PathParts, PathRelationship, MAIN_SEPARATOR,
    MAIN_SEPARATOR_STR,
};
