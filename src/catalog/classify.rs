//! Directory-semantics classification: category/classifier derivation and
//! catalog assembly.

use crate::Result;
use crate::catalog::pair::find_transform_pairs;
use crate::catalog::paths::common_ancestor;
use crate::ctl::{CtlTransform, CtlTransformPair};
use anyhow::{Context, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Directory names mapped to catalog categories. Names absent from the
/// table pass through unchanged.
const ROOT_CATEGORIES: [(&str, &str); 8] = [
    ("csc", "csc"),
    ("idt", "input_transform"),
    ("lib", "lib"),
    ("lmt", "lmt"),
    ("odt", "output_transform"),
    ("outputTransforms", "output_transform"),
    ("rrt", "rrt"),
    ("utilities", "utility"),
];

/// Directory segments that never contribute to category or classifier path.
const EXCLUDED_CLASSIFIERS: [&str; 1] = ["vendorSupplied"];

/// A catalog leaf: a lone transform or a forward/inverse pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEntry {
    Single(CtlTransform),
    Pair(CtlTransformPair),
}

/// category → classifier path → basename → entry.
pub type Catalog = BTreeMap<String, BTreeMap<String, BTreeMap<String, CatalogEntry>>>;

fn map_category(segment: &str) -> &str {
    ROOT_CATEGORIES
        .iter()
        .find(|(directory, _)| *directory == segment)
        .map(|(_, category)| *category)
        .unwrap_or(segment)
}

/// Derive `(category, classifier_path)` from a directory beneath the root.
fn category_and_classifier(directory: &Path, root: &Path) -> Result<(String, String)> {
    let relative = directory.strip_prefix(root).unwrap_or(directory);

    let mut segments = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .filter(|segment| !EXCLUDED_CLASSIFIERS.contains(segment))
        .map(map_category);

    let Some(category) = segments.next() else {
        bail!(
            "directory {} yields no category segment beneath {}",
            directory.display(),
            root.display()
        );
    };

    let classifiers: Vec<&str> = segments.collect();
    let classifier = if classifiers.is_empty() {
        "base".to_string()
    } else {
        classifiers.join("/")
    };

    Ok((category.to_string(), classifier))
}

/// Assemble the classification tree for CTL files grouped by directory.
///
/// Two runs over the same file set produce identical catalogs regardless of
/// enumeration order. A malformed identifier in any file aborts the run.
pub fn classify_ctl_transforms(
    by_directory: &BTreeMap<PathBuf, Vec<PathBuf>>,
) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    if by_directory.is_empty() {
        return Ok(catalog);
    }

    // 1) Anchor the classification at the deepest directory shared by all
    //    inputs; category and classifier segments start beneath it.
    let root = common_ancestor(by_directory.keys().map(PathBuf::as_path));

    for (directory, paths) in by_directory {
        let (category, classifier) = category_and_classifier(directory, &root)
            .with_context(|| format!("classify directory {}", directory.display()))?;

        // 2) Pair up forward/inverse counterparts, then parse each file.
        for (basename, roles) in find_transform_pairs(paths) {
            let entry = match (roles.forward, roles.inverse) {
                (Some(forward), Some(inverse)) => CatalogEntry::Pair(CtlTransformPair {
                    forward: CtlTransform::from_path(&forward)?,
                    inverse: CtlTransform::from_path(&inverse)?,
                }),
                (Some(path), None) | (None, Some(path)) => {
                    CatalogEntry::Single(CtlTransform::from_path(&path)?)
                }
                // A roles entry is only ever created with one slot filled.
                (None, None) => continue,
            };

            info!(
                "classifying {:?} under {:?}/{:?}",
                basename, category, classifier
            );

            // 3) Explicit three-level insert.
            catalog
                .entry(category.clone())
                .or_default()
                .entry(classifier.clone())
                .or_default()
                .insert(basename, entry);
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classified(directory: &str, root: &str) -> (String, String) {
        category_and_classifier(Path::new(directory), Path::new(root)).unwrap()
    }

    #[test]
    fn category_table_is_applied() {
        assert_eq!(
            classified("/t/idt/ARRI", "/t"),
            ("input_transform".to_string(), "ARRI".to_string())
        );
        assert_eq!(
            classified("/t/outputTransforms/rec2020", "/t"),
            ("output_transform".to_string(), "rec2020".to_string())
        );
        assert_eq!(
            classified("/t/utilities", "/t"),
            ("utility".to_string(), "base".to_string())
        );
    }

    #[test]
    fn unmapped_segments_pass_through() {
        assert_eq!(
            classified("/t/experimental/hdr", "/t"),
            ("experimental".to_string(), "hdr".to_string())
        );
    }

    #[test]
    fn excluded_segments_are_dropped() {
        assert_eq!(
            classified("/t/idt/vendorSupplied/Alexa", "/t"),
            ("input_transform".to_string(), "Alexa".to_string())
        );
        assert_eq!(
            classified("/t/idt/ARRI", "/t"),
            ("input_transform".to_string(), "ARRI".to_string())
        );
    }

    #[test]
    fn nested_classifiers_are_slash_joined() {
        assert_eq!(
            classified("/t/odt/p3/d65", "/t"),
            ("output_transform".to_string(), "p3/d65".to_string())
        );
    }

    #[test]
    fn category_segments_are_mapped_at_every_depth() {
        // The table applies to every surviving segment, not just the first.
        assert_eq!(
            classified("/t/odt/rrt", "/t"),
            ("output_transform".to_string(), "rrt".to_string())
        );
    }

    #[test]
    fn directory_without_segments_is_an_error() {
        let err = category_and_classifier(Path::new("/t"), Path::new("/t")).unwrap_err();
        assert!(err.to_string().contains("no category segment"));
    }
}
