//! Textual path values and their component algorithms.
//!
//! A [`Path`] is an immutable string. Everything in this module works on
//! that string alone, without asking the filesystem.
//!
//! # Key Concepts
//!
//! ## Parent and ancestors
//!
//! [`Path::parent`] drops the final segment. It is undefined once the
//! base segment is empty, which happens for `""`, `/` and runs of
//! separators. [`Path::ancestors`] repeats it until that point:
//!
//! ```
//! use pathval::Path;
//!
//! let walk: Vec<Path> = Path::new("/foo/bar").ancestors().collect();
//! assert_eq!(walk, [Path::new("/foo/bar"), Path::new("/foo"), Path::new("/")]);
//! ```
//!
//! ## Components
//!
//! The component sequence reverses the ancestor walk and keeps each
//! ancestor's base segment, plus a leading [`Component::RootDir`] for
//! absolute paths. Repeated separators vanish; `.` and `..` are kept
//! as written. Matching ([`Path::starts_with`], [`Path::ends_with`],
//! [`Path::strip_prefix`]) compares whole components:
//!
//! ```
//! use pathval::Path;
//!
//! let path = Path::new("/etc/passwd");
//! assert!(path.starts_with("/etc//"));
//! assert!(!path.starts_with("/et"));
//! ```
//!
//! ## Structural equality
//!
//! Two paths are equal when their parsed [`PathParts`] are equal. This
//! ignores trailing separators but nothing else.

mod ancestors;
mod components;
pub mod normalize;
mod parse;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use ancestors::Ancestors;
pub use components::{Component, Components};
pub use parse::PathParts;
pub use relationship::PathRelationship;
pub use types::Path;

/// The path separator.
pub const MAIN_SEPARATOR: char = '/';

/// The path separator as a string slice.
pub const MAIN_SEPARATOR_STR: &str = "/";
