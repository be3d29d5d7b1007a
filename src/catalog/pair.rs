//! Forward/inverse pairing of transform paths by normalized basename.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Forward/inverse slots collected for one basename. A slot written twice
/// keeps the most recently seen path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformRoles {
    pub forward: Option<PathBuf>,
    pub inverse: Option<PathBuf>,
}

impl TransformRoles {
    /// True when both halves of a pair are present.
    pub fn is_pair(&self) -> bool {
        self.forward.is_some() && self.inverse.is_some()
    }
}

/// Group paths by transform basename into forward/inverse roles.
///
/// The basename is the file stem with the inverse markers stripped: a
/// leading `Inv` token or a `_to_ACES` token, either of which marks the file
/// inverse. An `ACES_to_` token is dropped without marking anything.
/// Grouping is invariant under permutation of equal path sets.
pub fn find_transform_pairs(paths: &[PathBuf]) -> BTreeMap<String, TransformRoles> {
    let mut pairs: BTreeMap<String, TransformRoles> = BTreeMap::new();

    for path in paths {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut is_forward = true;
        let mut basename = stem;

        if let Some(stripped) = basename.strip_prefix("Inv") {
            basename = stripped.to_string();
            is_forward = false;
        }

        if basename.contains("_to_ACES") {
            basename = basename.replace("_to_ACES", "");
            is_forward = false;
        }

        basename = basename.replace("ACES_to_", "");

        let roles = pairs.entry(basename).or_default();
        if is_forward {
            roles.forward = Some(path.clone());
        } else {
            roles.inverse = Some(path.clone());
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn aces_prefixed_counterparts_pair_up() {
        let pairs = find_transform_pairs(&paths(&["ACES_to_P3D65.ctl", "InvACES_to_P3D65.ctl"]));

        assert_eq!(pairs.len(), 1);
        let roles = &pairs["P3D65"];
        assert!(roles.is_pair());
        assert_eq!(roles.forward, Some(PathBuf::from("ACES_to_P3D65.ctl")));
        assert_eq!(roles.inverse, Some(PathBuf::from("InvACES_to_P3D65.ctl")));
    }

    #[test]
    fn inv_prefix_marks_the_inverse() {
        let pairs = find_transform_pairs(&paths(&["RRT.ctl", "InvRRT.ctl"]));

        let roles = &pairs["RRT"];
        assert!(roles.is_pair());
        assert_eq!(roles.forward, Some(PathBuf::from("RRT.ctl")));
        assert_eq!(roles.inverse, Some(PathBuf::from("InvRRT.ctl")));
    }

    #[test]
    fn to_aces_token_marks_the_inverse() {
        let pairs = find_transform_pairs(&paths(&["ADX10_to_ACES.ctl"]));

        let roles = &pairs["ADX10"];
        assert_eq!(roles.forward, None);
        assert_eq!(roles.inverse, Some(PathBuf::from("ADX10_to_ACES.ctl")));
    }

    #[test]
    fn lone_files_keep_a_single_role() {
        let pairs = find_transform_pairs(&paths(&[
            "ODT.Academy.P3D65_48nits.ctl",
            "LMT.Academy.BlueLightFix.ctl",
        ]));

        assert_eq!(pairs.len(), 2);
        for roles in pairs.values() {
            assert!(!roles.is_pair());
            assert!(roles.forward.is_some());
        }
    }

    #[test]
    fn grouping_is_permutation_invariant() {
        let forward = paths(&["ACES_to_P3D65.ctl", "InvACES_to_P3D65.ctl", "RRT.ctl"]);
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            find_transform_pairs(&forward),
            find_transform_pairs(&reversed)
        );
    }

    #[test]
    fn duplicate_roles_resolve_last_write_wins() {
        let pairs = find_transform_pairs(&paths(&["dir_a/RRT.ctl", "dir_b/RRT.ctl"]));

        assert_eq!(pairs.len(), 1);
        let roles = &pairs["RRT"];
        assert_eq!(roles.forward, Some(PathBuf::from("dir_b/RRT.ctl")));
        assert_eq!(roles.inverse, None);
    }
}
