//! Transform identifier grammar: canonical vocabulary, normalization of
//! legacy forms, and decoding into typed fields.

pub mod decode;
pub mod patch;
pub mod types;

pub use decode::{MalformedId, TransformId, decode};
pub use patch::patch_invalid_id;
pub use types::{ACES_2065_1, ACES_URN, OCES, TransformType};
