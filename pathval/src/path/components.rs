//! Component decomposition and structural matching.
//!
//! The component sequence of a path is derived from its ancestor walk:
//! the walk is reversed into root-to-leaf order and each ancestor
//! contributes its base segment. The root ancestor of an absolute path has
//! an empty base and contributes [`Component::RootDir`] instead; the empty
//! ancestor of a relative path contributes nothing. Separators therefore
//! collapse, while `.` and `..` survive verbatim.

use std::iter::{self, FusedIterator};
use std::vec;

use super::parse::{parent_str, parse};
use super::types::Path;
use super::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// One semantic segment of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component<'a> {
    /// The leading separator of an absolute path.
    RootDir,
    /// A literal `.` segment.
    CurDir,
    /// A literal `..` segment.
    ParentDir,
    /// Any other segment.
    Normal(&'a str),
}

impl<'a> Component<'a> {
    fn from_segment(segment: &'a str) -> Self {
        match segment {
            "." => Self::CurDir,
            ".." => Self::ParentDir,
            name => Self::Normal(name),
        }
    }

    /// The text of this component.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/tmp/./a.txt");
    /// let names: Vec<&str> = path.components().map(|c| c.as_str()).collect();
    /// assert_eq!(names, ["/", "tmp", ".", "a.txt"]);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::RootDir => MAIN_SEPARATOR_STR,
            Self::CurDir => ".",
            Self::ParentDir => "..",
            Self::Normal(name) => name,
        }
    }

    /// Components compare as single-segment paths.
    fn matches(&self, other: &Component<'_>) -> bool {
        parse(self.as_str()) == parse(other.as_str())
    }
}

/// Iterator over the [`Component`]s of a path, root to leaf.
///
/// Created by [`Path::components`].
#[derive(Debug, Clone)]
pub struct Components<'a> {
    inner: vec::IntoIter<Component<'a>>,
}

impl<'a> Components<'a> {
    fn new(path: &'a str) -> Self {
        let mut walk: Vec<&str> = iter::successors(Some(path), |&p| parent_str(p)).collect();
        walk.reverse();

        let components: Vec<Component<'a>> = walk
            .into_iter()
            .filter_map(|ancestor| {
                let base = parse(ancestor).base();
                if base.is_empty() {
                    ancestor
                        .starts_with(MAIN_SEPARATOR)
                        .then_some(Component::RootDir)
                } else {
                    Some(Component::from_segment(base))
                }
            })
            .collect();

        Self {
            inner: components.into_iter(),
        }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = Component<'a>;

    fn next(&mut self) -> Option<Component<'a>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Components<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Components<'_> {}

impl FusedIterator for Components<'_> {}

/// Check that every component of `prefix` matches the same position of `path`.
fn matches_prefix<'a, 'b, I, J>(path: I, prefix: J) -> bool
where
    I: ExactSizeIterator<Item = Component<'a>>,
    J: ExactSizeIterator<Item = Component<'b>>,
{
    prefix.len() <= path.len() && path.zip(prefix).all(|(mine, theirs)| mine.matches(&theirs))
}

impl Path {
    /// The component sequence of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Component, Path};
    ///
    /// let path = Path::new("/tmp/foo.txt");
    /// let mut components = path.components();
    /// assert_eq!(components.next(), Some(Component::RootDir));
    /// assert_eq!(components.next(), Some(Component::Normal("tmp")));
    /// assert_eq!(components.next(), Some(Component::Normal("foo.txt")));
    /// assert_eq!(components.next(), None);
    /// ```
    #[must_use]
    pub fn components(&self) -> Components<'_> {
        Components::new(self.as_str())
    }

    /// The text of each component, root to leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Path, MAIN_SEPARATOR_STR};
    ///
    /// let path = Path::new("/tmp/foo.txt");
    /// let parts: Vec<&str> = path.iter().collect();
    /// assert_eq!(parts, [MAIN_SEPARATOR_STR, "tmp", "foo.txt"]);
    /// ```
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.components().map(|component| component.as_str())
    }

    /// Check whether `base` is a component-wise prefix of this path.
    ///
    /// Only whole components match, and separators in `base` collapse, so
    /// trailing slashes are harmless.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/etc/passwd");
    /// assert!(path.starts_with("/etc"));
    /// assert!(path.starts_with("/etc/"));
    /// assert!(path.starts_with("/etc/passwd///"));
    /// assert!(!path.starts_with("/e"));
    /// assert!(!Path::new("/etc/foo.rs").starts_with("/etc/foo"));
    /// ```
    #[must_use]
    pub fn starts_with(&self, base: impl AsRef<str>) -> bool {
        matches_prefix(self.components(), Components::new(base.as_ref()))
    }

    /// Check whether `child` is a component-wise suffix of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/etc/resolv.conf");
    /// assert!(path.ends_with("resolv.conf"));
    /// assert!(path.ends_with("etc/resolv.conf"));
    /// assert!(!path.ends_with("/resolv.conf"));
    /// assert!(!path.ends_with("conf"));
    /// ```
    #[must_use]
    pub fn ends_with(&self, child: impl AsRef<str>) -> bool {
        matches_prefix(
            self.components().rev(),
            Components::new(child.as_ref()).rev(),
        )
    }

    /// The path that remains after removing `base` from the front.
    ///
    /// Returns `None` unless [`Path::starts_with`] holds. Stripping the
    /// whole path yields the empty path. The remaining components are
    /// rebuilt with [`Path::join`], so stripping nothing from an absolute
    /// path doubles its leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::Path;
    ///
    /// let path = Path::new("/test/haha/foo.txt");
    /// assert_eq!(path.strip_prefix("/"), Some(Path::new("test/haha/foo.txt")));
    /// assert_eq!(path.strip_prefix("/test/"), Some(Path::new("haha/foo.txt")));
    /// assert_eq!(path.strip_prefix("/test/haha/foo.txt"), Some(Path::new("")));
    /// assert_eq!(path.strip_prefix("test"), None);
    /// ```
    #[must_use]
    pub fn strip_prefix(&self, base: impl AsRef<str>) -> Option<Path> {
        let base = Components::new(base.as_ref());
        let skip = base.len();
        if !matches_prefix(self.components(), base) {
            return None;
        }

        // an empty prefix keeps the root component, which joins as `//`
        let remainder = self
            .components()
            .skip(skip)
            .fold(Path::empty(), |acc, component| acc.join(component.as_str()));
        Some(remainder)
    }
}
