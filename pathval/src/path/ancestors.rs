//! The ancestors cursor.

use std::iter::FusedIterator;

use super::types::Path;

/// A single-pass cursor walking a path towards its root.
///
/// Each call to [`Iterator::next`] emits the current path and steps to its
/// [`Path::parent`]. The walk ends the first time a parent is undefined;
/// after that the cursor keeps returning `None`. It cannot be restarted:
/// call [`Path::ancestors`] again for a fresh walk.
///
/// The empty path is a real ancestor of relative paths, distinct from the
/// end of the walk.
///
/// # Examples
///
/// ```
/// use pathval::Path;
///
/// let mut ancestors = Path::new("../foo/bar").ancestors();
/// assert_eq!(ancestors.next(), Some(Path::new("../foo/bar")));
/// assert_eq!(ancestors.next(), Some(Path::new("../foo")));
/// assert_eq!(ancestors.next(), Some(Path::new("..")));
/// assert_eq!(ancestors.next(), Some(Path::new("")));
/// assert_eq!(ancestors.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Path>,
}

impl Ancestors {
    pub(crate) fn new(start: Path) -> Self {
        Self { next: Some(start) }
    }
}

impl Iterator for Ancestors {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl FusedIterator for Ancestors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(path: &str) -> Vec<String> {
        Path::new(path)
            .ancestors()
            .map(Path::into_string)
            .collect()
    }

    #[test]
    fn test_absolute_walk_ends_at_root() {
        assert_eq!(walk("/foo/bar"), ["/foo/bar", "/foo", "/"]);
    }

    #[test]
    fn test_relative_walk_ends_at_empty() {
        assert_eq!(walk("../foo/bar"), ["../foo/bar", "../foo", "..", ""]);
    }

    #[test]
    fn test_walk_of_terminal_paths() {
        assert_eq!(walk("/"), ["/"]);
        assert_eq!(walk(""), [""]);
        assert_eq!(walk("."), [".", ""]);
    }

    #[test]
    fn test_walk_keeps_repeated_separators() {
        assert_eq!(walk("/a//b/"), ["/a//b/", "/a/", "/"]);
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut ancestors = Path::new("/a").ancestors();
        assert_eq!(ancestors.by_ref().count(), 2);
        assert_eq!(ancestors.next(), None);
        assert_eq!(ancestors.next(), None);
    }

    #[test]
    fn test_each_step_is_a_strict_parent() {
        let ancestors: Vec<Path> = Path::new("/usr/local/share/doc").ancestors().collect();
        for pair in ancestors.windows(2) {
            assert_eq!(pair[0].parent().as_ref(), Some(&pair[1]));
        }
    }
}
