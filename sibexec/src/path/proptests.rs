//! Property-based tests for path arithmetic.
//!
//! The join unit tests pin the concrete edge cases; this module checks the
//! capacity and shape invariants over generated inputs.

use super::join::{dir_name, join};
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..4)
        .prop_map(|parts| parts.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A successful join never exceeds its capacity budget.
    #[test]
    fn join_respects_capacity(
        base in absolute_path_strategy(),
        rel in relative_path_strategy(),
        capacity in 1usize..512,
    ) {
        if let Ok(joined) = join(&base, &rel, capacity) {
            prop_assert!(joined.as_os_str().len() + 1 <= capacity);
        }
    }

    // The capacity boundary is exact: the required length succeeds and one
    // byte less fails.
    #[test]
    fn join_capacity_boundary_is_exact(
        base in absolute_path_strategy(),
        rel in relative_path_strategy(),
    ) {
        let unbounded = join(&base, &rel, usize::MAX).unwrap();
        let required = unbounded.as_os_str().len() + 1;

        prop_assert!(join(&base, &rel, required).is_ok());
        prop_assert!(join(&base, &rel, required - 1).is_err());
    }

    // A relative join is dir_name(base), one separator, then the fragment.
    #[test]
    fn join_is_dirname_plus_fragment(
        base in absolute_path_strategy(),
        rel in relative_path_strategy(),
    ) {
        let joined = join(&base, &rel, 4096).unwrap();
        let expected = format!(
            "{}/{}",
            dir_name(&base).display(),
            rel.display()
        );
        let expected = expected.replace("//", "/");
        prop_assert_eq!(joined, PathBuf::from(expected));
    }

    // An absolute fragment always wins, whatever the base was.
    #[test]
    fn join_absolute_fragment_wins(
        base in absolute_path_strategy(),
        rel in absolute_path_strategy(),
    ) {
        let joined = join(&base, &rel, 4096).unwrap();
        prop_assert_eq!(joined, rel);
    }

    // dir_name is pure: same input, same output, input untouched.
    #[test]
    fn dir_name_is_pure(path in absolute_path_strategy()) {
        let before = path.clone();
        let first = dir_name(&path);
        let second = dir_name(&path);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(path, before);
    }

    // dir_name of an absolute path is absolute and a prefix of the input.
    #[test]
    fn dir_name_of_absolute_is_absolute_prefix(path in absolute_path_strategy()) {
        let dir = dir_name(&path);
        prop_assert!(dir.is_absolute());
        prop_assert!(path.starts_with(&dir));
    }
}
