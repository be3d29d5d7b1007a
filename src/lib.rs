//! Catalog builder for the reference implementation's CTL colour transforms.
//!
//! Pipeline: discover `.ctl` files grouped by directory, extract each file's
//! header and transform identifier, pair forward/inverse counterparts by
//! basename, and classify everything into a category/classifier/basename
//! tree. A directed colour-space conversion graph can be projected from the
//! result.

pub mod catalog;
pub mod ctl;
pub mod discover;
pub mod graph;
pub mod id;

pub type Result<T> = anyhow::Result<T>;
