//! Lexical path normalization.
//!
//! This module resolves `.` and `..` segments on the text alone:
//! - Empty and `.` segments are dropped
//! - `name/..` pairs cancel out
//! - `..` at the root of an absolute path stays at the root
//! - Leading `..` segments of a relative path are kept
//!
//! Symlinks are never consulted, so the result can differ from
//! [`Path::canonicalize`](crate::Path::canonicalize).

use std::env;

use super::parse::parse;
use super::types::Path;
use super::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use crate::error::{Error, Result};

/// Split `path` into its resolved segments.
///
/// Returns whether the path is absolute, and the remaining segments.
fn resolve_segments(path: &str) -> (bool, Vec<&str>) {
    let absolute = path.starts_with(MAIN_SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(MAIN_SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            name => segments.push(name),
        }
    }

    (absolute, segments)
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// # Examples
///
/// ```
/// use pathval::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c").as_str(), "/a/c");
/// assert_eq!(resolve_components("/a/../..").as_str(), "/");
/// assert_eq!(resolve_components("../a/./b/..").as_str(), "../a");
/// assert_eq!(resolve_components("a/..").as_str(), ".");
/// ```
#[must_use]
pub fn resolve_components(path: &str) -> Path {
    let (absolute, segments) = resolve_segments(path);
    let joined = segments.join(MAIN_SEPARATOR_STR);

    if absolute {
        Path::new(format!("{MAIN_SEPARATOR}{joined}"))
    } else if joined.is_empty() {
        Path::new(".")
    } else {
        Path::new(joined)
    }
}

/// Make a path absolute against the working directory, then resolve it.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathval::path::normalize::normalize;
///
/// let normalized = normalize("/a/./b/../c").unwrap();
/// assert_eq!(normalized.as_str(), "/a/c");
///
/// let normalized = normalize("./src").unwrap();
/// assert!(normalized.is_absolute());
/// assert!(normalized.ends_with("src"));
/// ```
pub fn normalize(path: &str) -> Result<Path> {
    if path.starts_with(MAIN_SEPARATOR) {
        return Ok(resolve_components(path));
    }

    let cwd = current_dir()?;
    Ok(resolve_components(cwd.join(path).as_str()))
}

fn current_dir() -> Result<Path> {
    let cwd = env::current_dir().map_err(|source| Error::CurrentDir { source })?;
    Path::try_from(cwd)
}

/// The final segment of `path` after lexical resolution.
///
/// A relative path that resolves to the working directory or one of its
/// ancestors takes that directory's name.
pub(crate) fn resolved_file_name(path: &str) -> Option<String> {
    let (absolute, segments) = resolve_segments(path);

    match segments.last() {
        Some(&last) if last != ".." => Some(last.to_string()),
        _ if absolute => None,
        _ => {
            // every remaining segment is `..`
            let climbs = segments.len();
            log::debug!("file name of {path:?} depends on the working directory ({climbs} up)");
            let cwd = current_dir().ok()?;
            let ancestor = cwd.ancestors().nth(climbs)?;
            let name = parse(ancestor.as_str()).base();
            (!name.is_empty()).then(|| name.to_string())
        }
    }
}

impl Path {
    /// Resolve `.` and `..` segments lexically.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert_eq!(Path::new("/a//b/../c/").normalize().as_str(), "/a/c");
    /// assert_eq!(Path::new("").normalize().as_str(), ".");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Path {
        resolve_components(self.as_str())
    }

    /// Join onto the working directory when relative, then normalize.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn absolute(&self) -> Result<Path> {
        normalize(self.as_str())
    }
}
