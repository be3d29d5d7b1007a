//! CTL transform records and their embedded headers.

pub mod header;
pub mod record;

pub use header::{RawHeader, extract_header};
pub use record::{CtlTransform, CtlTransformPair};
