//! Filesystem discovery of CTL transform files.

use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Default location of the reference implementation transforms, relative to
/// the working directory. Callers override it with an explicit root.
pub const REFERENCE_TRANSFORMS_ROOT: &str = "reference_implementation/transforms";

/// Walk `root` and group CTL files (case-insensitive extension) by their
/// containing directory. Directories without CTL files do not appear; paths
/// within each directory come out sorted.
pub fn discover_ctl_transforms(root: &Path) -> Result<BTreeMap<PathBuf, Vec<PathBuf>>> {
    let mut by_directory: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_ctl = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("ctl"));
        if !is_ctl {
            continue;
        }

        info!("found CTL transform {}", path.display());

        let directory = path.parent().unwrap_or(root).to_path_buf();
        by_directory.entry(directory).or_default().push(path.to_path_buf());
    }

    for paths in by_directory.values_mut() {
        paths.sort();
    }

    Ok(by_directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn groups_ctl_files_by_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();

        fs::create_dir_all(root.join("rrt")).unwrap();
        fs::create_dir_all(root.join("odt/p3")).unwrap();
        fs::write(root.join("rrt/RRT.ctl"), "// a\n").unwrap();
        fs::write(root.join("odt/p3/ODT.P3.CTL"), "// b\n").unwrap();
        fs::write(root.join("odt/p3/README.md"), "not a transform\n").unwrap();

        let by_directory = discover_ctl_transforms(root).unwrap();

        assert_eq!(by_directory.len(), 2);
        assert_eq!(
            by_directory[&root.join("rrt")],
            vec![root.join("rrt/RRT.ctl")]
        );
        // Extension matching is case-insensitive; the markdown file is out.
        assert_eq!(
            by_directory[&root.join("odt/p3")],
            vec![root.join("odt/p3/ODT.P3.CTL")]
        );
    }

    #[test]
    fn empty_tree_yields_an_empty_grouping() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert_eq!(discover_ctl_transforms(temp.path()).unwrap(), BTreeMap::new());
    }
}
