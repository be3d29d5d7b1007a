//! Path ancestry helper anchoring the classification root.

use std::path::{Path, PathBuf};

/// Longest common path-segment prefix of the given paths.
///
/// Comparison is segment-wise, never character-wise: `/a/bc` and `/a/bd`
/// share `/a`, not `/a/b`. Empty input yields an empty path.
pub fn common_ancestor<'a>(paths: impl IntoIterator<Item = &'a Path>) -> PathBuf {
    let mut paths = paths.into_iter();

    let Some(first) = paths.next() else {
        return PathBuf::new();
    };
    let mut prefix: Vec<_> = first.components().collect();

    for path in paths {
        let shared = prefix
            .iter()
            .zip(path.components())
            .take_while(|(a, b)| **a == *b)
            .count();
        prefix.truncate(shared);
    }

    prefix.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ancestor(paths: &[&str]) -> PathBuf {
        common_ancestor(paths.iter().map(Path::new))
    }

    #[test]
    fn shared_prefix_is_found() {
        assert_eq!(
            ancestor(&["/transforms/ctl/odt/p3", "/transforms/ctl/idt/arri"]),
            PathBuf::from("/transforms/ctl")
        );
    }

    #[test]
    fn ancestor_of_nested_paths_is_the_outer_one() {
        assert_eq!(
            ancestor(&["/a/b", "/a/b/c/d"]),
            PathBuf::from("/a/b")
        );
    }

    #[test]
    fn comparison_is_segment_wise() {
        assert_eq!(ancestor(&["/a/bc", "/a/bd"]), PathBuf::from("/a"));
    }

    #[test]
    fn single_path_is_its_own_ancestor() {
        assert_eq!(ancestor(&["/a/b/c"]), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn disjoint_paths_share_nothing_beyond_the_root() {
        assert_eq!(ancestor(&["/a/b", "/c/d"]), PathBuf::from("/"));
        assert_eq!(ancestor(&[]), PathBuf::new());
    }
}
