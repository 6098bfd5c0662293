//! Integration tests for filesystem queries on path values.
//!
//! These run against a scratch directory and verify that type and
//! existence queries degrade to `false` while listing, link reading and
//! canonicalization surface the OS error.

use pathval::{FileType, Path, PathRelationship};
use tempfile::TempDir;

fn scratch() -> (TempDir, Path) {
    let dir = tempfile::tempdir().unwrap();
    let root = Path::try_from(dir.path().canonicalize().unwrap()).unwrap();
    (dir, root)
}

#[test]
fn test_queries_on_missing_path_are_false() {
    let (_dir, root) = scratch();
    let missing = root.join("nope/deeper");

    assert!(!missing.exists());
    assert!(!missing.is_file());
    assert!(!missing.is_dir());
    assert!(!missing.is_symlink());
    assert!(missing.metadata().is_none());
}

#[test]
fn test_strict_operations_surface_errors() {
    let (_dir, root) = scratch();
    let missing = root.join("nope");

    let err = missing.read_dir().unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope"));
    assert!(missing.canonicalize().is_err());
    assert!(missing.read_link().is_err());
}

#[test]
fn test_read_link_on_regular_file_fails() {
    let (_dir, root) = scratch();
    let file = root.join("plain.txt");
    std::fs::write(file.as_std_path(), "x").unwrap();

    assert!(file.read_link().is_err());
}

#[test]
fn test_tree_walk() {
    let (_dir, root) = scratch();
    let nested = root.join("a").join("b");
    std::fs::create_dir_all(nested.as_std_path()).unwrap();
    let file = nested.join("notes.md");
    std::fs::write(file.as_std_path(), "# notes").unwrap();

    assert!(file.is_file());
    assert_eq!(file.metadata().unwrap().len, 7);
    assert_eq!(
        PathRelationship::between(&root, &file),
        PathRelationship::Ancestor
    );

    let dirs: Vec<Path> = file.ancestors().skip(1).take(3).collect();
    assert!(dirs.iter().all(Path::is_dir));

    let listing = nested.read_dir().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "notes.md");
    assert_eq!(listing[0].file_type, FileType::File);
    assert_eq!(listing[0].path, file);
}

#[test]
fn test_canonicalize_resolves_dot_segments() {
    let (_dir, root) = scratch();
    std::fs::create_dir(root.join("sub").as_std_path()).unwrap();

    let winding = root.join("sub/../sub/.");
    assert_eq!(winding.canonicalize().unwrap(), root.join("sub"));
    assert_eq!(winding.normalize(), root.join("sub"));
}
