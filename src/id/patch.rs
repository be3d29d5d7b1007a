//! Normalization of known-malformed identifier strings.
//!
//! A handful of ids in the reference tree predate the current grammar; they
//! are rewritten into canonical form before decoding. Every rewrite is
//! surfaced as a warning, never as an error.

use crate::id::types::ACES_URN;
use tracing::warn;

/// Rewrite a known-malformed raw identifier into the canonical grammar.
///
/// Total, and idempotent on already-canonical input.
pub fn patch_invalid_id(raw: &str) -> String {
    let mut id = raw.to_string();

    if !id.starts_with(ACES_URN) {
        warn!("{:?} is missing the ACES URN", raw);

        id = format!("{}:{}", ACES_URN, id);
    }

    if id.contains("Academy.P3D65_108nits_7.2nits_ST2084") {
        warn!("{:?} has an invalid separator in \"7.2nits\"", raw);

        id = id.replace("7.2", "7");
    } else if id.contains("ACEScsc") {
        if !id.contains("ACEScsc.Academy") {
            warn!("{:?} is missing the \"Academy\" namespace", raw);

            id = id.replace("ACEScsc", "ACEScsc.Academy");
        }

        if id.ends_with("a1.v1") {
            warn!("{:?} uses the legacy two-component version scheme", raw);

            id = id.replace("a1.v1", "a1.1.0");
        }
    }

    id
}
