//! Property-based tests for the component engine.
//!
//! Note: the normalize and relationship modules carry their own small
//! property suites. This module runs the heavier checks across arbitrary
//! separator layouts.

use super::{Component, Path};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,8}",
        1 => "[a-z]{1,4}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![4 => Just("/".to_string()), 1 => Just("//".to_string())]
}

/// Paths with arbitrary segments, doubled separators and optional
/// leading/trailing separators.
fn path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec((segment_strategy(), separator_strategy()), 0..6),
        any::<bool>(),
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = String::new();
            if absolute {
                path.push('/');
            }
            let last = parts.len().saturating_sub(1);
            for (i, (segment, sep)) in parts.into_iter().enumerate() {
                path.push_str(&segment);
                if i < last || trailing {
                    path.push_str(&sep);
                }
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The walk to the root takes one step per component
    #[test]
    fn ancestors_match_component_count(s in path_strategy()) {
        let path = Path::new(s);
        let steps = path.ancestors().count();
        let components = path.components().len();
        let extra = usize::from(path.is_relative());
        prop_assert_eq!(steps, components + extra);
    }

    // Every ancestor step drops exactly one trailing component
    #[test]
    fn parent_drops_last_component(s in path_strategy()) {
        let path = Path::new(s);
        if let Some(parent) = path.parent() {
            let mine: Vec<Component<'_>> = path.components().collect();
            let theirs: Vec<Component<'_>> = parent.components().collect();
            prop_assert_eq!(&mine[..mine.len() - 1], &theirs[..]);
        }
    }

    // Only the first component may be the root
    #[test]
    fn root_only_leads(s in path_strategy()) {
        let path = Path::new(s);
        let roots: Vec<usize> = path
            .components()
            .enumerate()
            .filter(|(_, c)| *c == Component::RootDir)
            .map(|(i, _)| i)
            .collect();
        if path.is_absolute() {
            prop_assert_eq!(roots, vec![0]);
        } else {
            prop_assert!(roots.is_empty());
        }
    }

    // Separator layout never changes the component sequence
    #[test]
    fn separators_collapse(s in path_strategy()) {
        let doubled = Path::new(s.replace('/', "//"));
        let path = Path::new(s);
        prop_assert!(path.starts_with(&doubled));
        prop_assert!(doubled.starts_with(&path));
        prop_assert!(path.ends_with(&doubled));
    }

    // A path always starts and ends with itself, and stripping itself is empty
    #[test]
    fn self_prefix_and_suffix(s in path_strategy()) {
        let path = Path::new(s);
        prop_assert!(path.starts_with(&path));
        prop_assert!(path.ends_with(&path));
        prop_assert_eq!(path.strip_prefix(&path), Some(Path::empty()));
    }

    // starts_with holds exactly when strip_prefix succeeds
    #[test]
    fn starts_with_iff_strip_prefix(a in path_strategy(), b in path_strategy()) {
        let path = Path::new(a);
        prop_assert_eq!(path.starts_with(&b), path.strip_prefix(&b).is_some());
    }

    // Re-reading the text gives an equal value
    #[test]
    fn construction_idempotent(s in path_strategy()) {
        let path = Path::new(s);
        prop_assert_eq!(Path::new(path.to_string()), path);
    }

    // Stem and extension rebuild the file name
    #[test]
    fn stem_and_extension_rebuild_name(s in path_strategy()) {
        let path = Path::new(s);
        if let Some(name) = path.file_name() {
            let stem = path.file_stem().unwrap();
            let rebuilt = match path.extension() {
                Some(ext) => format!("{stem}.{ext}"),
                None => stem,
            };
            prop_assert_eq!(rebuilt, name);
        }
    }
}
