//! Catalog assembly: basename pairing, directory classification, and the
//! nested category/classifier/basename tree.

pub mod classify;
pub mod pair;
pub mod paths;

pub use classify::{Catalog, CatalogEntry, classify_ctl_transforms};
pub use pair::{TransformRoles, find_transform_pairs};
pub use paths::common_ancestor;
