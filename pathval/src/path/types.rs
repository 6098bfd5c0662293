//! The [`Path`] value type.
//!
//! A `Path` owns its string and is never mutated: every operation that
//! yields a path builds a new value. Nothing here touches the filesystem,
//! except [`Path::file_name`] which may read the working directory.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ancestors::Ancestors;
use super::normalize;
use super::parse::{parent_str, parse, PathParts};
use super::MAIN_SEPARATOR;
use crate::error::Error;

/// An immutable, text-backed path value.
///
/// No normalization happens at construction: `/a//b/../c` and `/a/b/c` are
/// different values. Equality is structural (see [`PathParts`]), so trailing
/// separators do not matter:
///
/// ```
/// use pathval::Path;
///
/// assert_eq!(Path::new("/usr/bin/"), Path::new("/usr/bin"));
/// assert_ne!(Path::new("/a/../b"), Path::new("/b"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    inner: String,
}

impl Path {
    /// Create a path from any string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { inner: path.into() }
    }

    /// The empty path `""`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// View this path as a standard library path for OS calls.
    #[must_use]
    pub fn as_std_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.inner)
    }

    /// Check whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The parsed root, directory, base, extension and name parts.
    #[must_use]
    pub fn parts(&self) -> PathParts<'_> {
        parse(&self.inner)
    }

    /// Check whether the path starts with the separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert!(Path::new("/etc/passwd").is_absolute());
    /// assert!(!Path::new("foo.txt").is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with(MAIN_SEPARATOR)
    }

    /// The negation of [`Path::is_absolute`].
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Check whether the path has a parent.
    ///
    /// This is exactly `self.parent().is_some()`. It is true for any path
    /// with a non-empty base, which includes relative paths such as `foo`
    /// (whose parent is `""`); use [`Path::is_absolute`] to test for a
    /// leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert!(Path::new("/etc/passwd").has_root());
    /// assert!(Path::new("foo").has_root());
    /// assert!(!Path::new("/").has_root());
    /// assert!(!Path::new("").has_root());
    /// ```
    #[must_use]
    pub fn has_root(&self) -> bool {
        parent_str(&self.inner).is_some()
    }

    /// The path without its final segment.
    ///
    /// Returns `None` when the base part is empty, i.e. for `""`, `/` and
    /// paths made only of separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/foo/bar");
    /// let parent = path.parent().unwrap();
    /// assert_eq!(parent, Path::new("/foo"));
    ///
    /// let grand_parent = parent.parent().unwrap();
    /// assert_eq!(grand_parent, Path::new("/"));
    /// assert_eq!(grand_parent.parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        parent_str(&self.inner).map(Path::new)
    }

    /// Walk this path towards its root.
    ///
    /// The returned cursor is single-pass; see [`Ancestors`].
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors::new(self.clone())
    }

    /// The final segment of the path, with `.` and `..` resolved.
    ///
    /// Returns `None` when the base part is empty or is `..`. A trailing
    /// `.` is resolved away, so `foo.txt/.` names `foo.txt`. When a relative
    /// path resolves to the working directory or above it (`.`, `a/..`),
    /// the name of the corresponding working directory ancestor is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert_eq!(Path::new("/usr/bin/").file_name().as_deref(), Some("bin"));
    /// assert_eq!(Path::new("tmp/foo.txt").file_name().as_deref(), Some("foo.txt"));
    /// assert_eq!(Path::new("foo.txt/.//").file_name().as_deref(), Some("foo.txt"));
    /// assert_eq!(Path::new("foo.txt/..").file_name(), None);
    /// assert_eq!(Path::new("/").file_name(), None);
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        let base = parse(&self.inner).base();
        if base.is_empty() || base == ".." {
            return None;
        }
        normalize::resolved_file_name(&self.inner)
    }

    /// The file name without its final extension.
    ///
    /// A name without a dot, or whose only dot is its first character, is
    /// its own stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert_eq!(Path::new("foo.rs").file_stem().as_deref(), Some("foo"));
    /// assert_eq!(Path::new("foo.tar.gz").file_stem().as_deref(), Some("foo.tar"));
    /// assert_eq!(Path::new("Makefile").file_stem().as_deref(), Some("Makefile"));
    /// ```
    #[must_use]
    pub fn file_stem(&self) -> Option<String> {
        self.file_name()
            .map(|name| split_file_name(&name).0.to_string())
    }

    /// The final dot-delimited segment of the file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert_eq!(Path::new("foo.rs").extension().as_deref(), Some("rs"));
    /// assert_eq!(Path::new("foo.tar.gz").extension().as_deref(), Some("gz"));
    /// assert_eq!(Path::new("Makefile").extension(), None);
    /// assert_eq!(Path::new(".bashrc").extension(), None);
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.file_name()
            .and_then(|name| split_file_name(&name).1.map(str::to_string))
    }

    /// Append `segment` with exactly one separator in between.
    ///
    /// Empty sides are skipped and two empty sides yield `.`. The segment is
    /// not inspected, so joining an absolute segment doubles the separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// assert_eq!(Path::new("/etc").join("passwd"), Path::new("/etc/passwd"));
    /// assert_eq!(Path::new("").join("passwd"), Path::new("passwd"));
    /// assert_eq!(Path::new("").join("").as_str(), ".");
    /// assert_eq!(Path::new("/tmp").join("/var").as_str(), "/tmp//var");
    /// ```
    #[must_use]
    pub fn join(&self, segment: impl AsRef<str>) -> Path {
        let segment = segment.as_ref();
        match (self.inner.is_empty(), segment.is_empty()) {
            (true, true) => Path::new("."),
            (true, false) => Path::new(segment),
            (false, true) => self.clone(),
            (false, false) => Path::new(format!("{}{MAIN_SEPARATOR}{segment}", self.inner)),
        }
    }

    /// Replace the final segment with `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/tmp/foo.txt");
    /// assert_eq!(path.with_file_name("bar.txt"), Path::new("/tmp/bar.txt"));
    ///
    /// // the parent of `/tmp` is `/`, and joining does not collapse separators
    /// assert_eq!(Path::new("/tmp").with_file_name("var").as_str(), "//var");
    /// ```
    #[must_use]
    pub fn with_file_name(&self, name: impl AsRef<str>) -> Path {
        match self.parent() {
            Some(parent) => parent.join(name),
            None => Path::new(name.as_ref()),
        }
    }

    /// The file stem with `extension` appended.
    ///
    /// Only the file name is returned, not the directory: combine with
    /// [`Path::with_file_name`] to keep it. An empty `extension` strips the
    /// current one. Paths without a file name yield the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("foo.tar.gz");
    /// assert_eq!(path.with_extension(""), Path::new("foo.tar"));
    /// assert_eq!(path.with_extension("xz"), Path::new("foo.tar.xz"));
    /// assert_eq!(path.with_extension("").with_extension("txt"), Path::new("foo.txt"));
    ///
    /// let path = Path::new("/tmp/report.md");
    /// assert_eq!(
    ///     path.with_file_name(path.with_extension("html")),
    ///     Path::new("/tmp/report.html")
    /// );
    /// ```
    #[must_use]
    pub fn with_extension(&self, extension: impl AsRef<str>) -> Path {
        let extension = extension.as_ref();
        match self.file_stem() {
            Some(stem) if extension.is_empty() => Path::new(stem),
            Some(stem) => Path::new(format!("{stem}.{extension}")),
            None => Path::empty(),
        }
    }
}

/// Split a file name at its last dot into stem and extension.
fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        None | Some(0) => (name, None),
        Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.parts() == parse(other)
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        self.as_std_path()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl TryFrom<PathBuf> for Path {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        path.into_os_string()
            .into_string()
            .map(Self::new)
            .map_err(|os| Error::InvalidUtf8 {
                path: PathBuf::from(os),
            })
    }
}

impl TryFrom<&std::path::Path> for Path {
    type Error = Error;

    fn try_from(path: &std::path::Path) -> Result<Self, Self::Error> {
        path.to_str()
            .map(Self::new)
            .ok_or_else(|| Error::InvalidUtf8 {
                path: path.to_path_buf(),
            })
    }
}
