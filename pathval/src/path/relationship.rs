//! Path relationship checking.
//!
//! Classifies how two path values relate in the hierarchy, using
//! component-wise prefix matching in both directions. Like the rest
//! of the crate this is purely textual: `/a/../b` is not related to `/b`
//! unless both are normalized first.

use std::fmt;

use serde::Serialize;

use super::types::Path;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathval::{Path, PathRelationship};
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The first path is a proper prefix of the second.
    Ancestor,

    /// The second path is a proper prefix of the first.
    Descendant,

    /// The paths have the same component sequence.
    ///
    /// Structurally equal paths are always the same; so are paths that
    /// differ only in repeated separators.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Path, PathRelationship};
    ///
    /// let a = Path::new("/a");
    /// let ab = Path::new("/a/b");
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &Path::new("/a/")), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &Path::new("/b")), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        match (path2.starts_with(path1), path1.starts_with(path2)) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Path, PathRelationship};
    ///
    /// let dir = Path::new("/home/user");
    /// let file = Path::new("/home/user/file.txt");
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, directory: &Path) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn between(a: &str, b: &str) -> PathRelationship {
        PathRelationship::between(&Path::new(a), &Path::new(b))
    }

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(between("/a", "/a/b"), PathRelationship::Ancestor);
        assert_eq!(between("/a/b", "/a/b/c/d"), PathRelationship::Ancestor);
        assert_eq!(between("/", "/a"), PathRelationship::Ancestor);
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(between("/a/b", "/a"), PathRelationship::Descendant);
        assert_eq!(between("src/lib.rs", "src"), PathRelationship::Descendant);
    }

    #[test]
    fn test_relationship_same() {
        assert_eq!(between("/a/b/c", "/a/b/c"), PathRelationship::Same);
        assert_eq!(between("/a/", "/a"), PathRelationship::Same);
        assert_eq!(between("/a", "/a//"), PathRelationship::Same);
        assert_eq!(between("/a//b", "/a/b"), PathRelationship::Same);
    }

    #[test]
    fn test_relationship_unrelated() {
        assert_eq!(between("/a", "/b"), PathRelationship::Unrelated);
        assert_eq!(between("/a/b", "/a/c"), PathRelationship::Unrelated);
        assert_eq!(between("/etc/foo", "/etc/foo.rs"), PathRelationship::Unrelated);
        assert_eq!(between("/a", "a"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_relationship_is_textual() {
        assert_eq!(between("/a/../b", "/b"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_is_hierarchical() {
        assert!(PathRelationship::Ancestor.is_hierarchical());
        assert!(PathRelationship::Descendant.is_hierarchical());
        assert!(PathRelationship::Same.is_hierarchical());
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_is_within_and_contains() {
        let a = Path::new("/a");
        let ab = Path::new("/a/b");
        assert!(PathRelationship::is_within(&ab, &a));
        assert!(!PathRelationship::is_within(&a, &ab));
        assert!(PathRelationship::contains(&a, &ab));
        assert!(PathRelationship::contains(&a, &a));
        assert!(!PathRelationship::contains(&ab, &a));
    }

    #[test]
    fn test_description() {
        let a = Path::new("/a");
        let ab = Path::new("/a/b");
        let desc = PathRelationship::Ancestor.description(&a, &ab);
        assert!(desc.contains("/a/b"));
        assert!(desc.contains("ancestor"));

        let desc = PathRelationship::Unrelated.description(&a, &Path::new("/b"));
        assert!(desc.contains("unrelated"));
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for relationship in [
            PathRelationship::Ancestor,
            PathRelationship::Descendant,
            PathRelationship::Same,
            PathRelationship::Unrelated,
        ] {
            assert_eq!(
                serde_json::to_string(&relationship).unwrap(),
                format!("\"{relationship}\"")
            );
        }
        assert_eq!(between("/a", "/a/b").to_string(), "ancestor");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = Path> {
            prop::collection::vec("[a-c]{1,2}", 0..=4)
                .prop_map(|parts| Path::new(format!("/{}", parts.join("/"))))
        }

        proptest! {
            #[test]
            fn relationship_reflexive(path in path_strategy()) {
                prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
            }

            #[test]
            fn relationship_symmetric(p1 in path_strategy(), p2 in path_strategy()) {
                let pair = (
                    PathRelationship::between(&p1, &p2),
                    PathRelationship::between(&p2, &p1),
                );
                let symmetric = matches!(
                    pair,
                    (PathRelationship::Ancestor, PathRelationship::Descendant)
                        | (PathRelationship::Descendant, PathRelationship::Ancestor)
                        | (PathRelationship::Same, PathRelationship::Same)
                        | (PathRelationship::Unrelated, PathRelationship::Unrelated)
                );
                prop_assert!(symmetric, "Invalid symmetry: {:?}", pair);
            }

            #[test]
            fn is_within_contains_consistent(p1 in path_strategy(), p2 in path_strategy()) {
                prop_assert_eq!(
                    PathRelationship::is_within(&p1, &p2),
                    PathRelationship::contains(&p2, &p1)
                );
            }
        }
    }
}
