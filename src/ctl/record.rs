//! Transform record value objects: one per discovered CTL file, plus the
//! forward/inverse pairing of two records sharing a basename.

use crate::Result;
use crate::ctl::header::{RawHeader, extract_header};
use crate::id::{TransformId, decode, patch_invalid_id};
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered CTL file: path, raw text, header fields and decoded
/// identifier. The identifier stays unset when the file carries no
/// `<ACEStransformID>` tag; such a record contributes no graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtlTransform {
    pub path: PathBuf,
    pub code: String,
    pub header: RawHeader,
    pub id: Option<TransformId>,
}

impl CtlTransform {
    /// Read and parse a CTL file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let code = fs::read_to_string(path)
            .with_context(|| format!("read CTL transform {}", path.display()))?;

        Self::from_source(path.to_path_buf(), code)
    }

    /// Parse CTL source already held in memory.
    ///
    /// A malformed identifier is an error and aborts the caller's
    /// classification run.
    pub fn from_source(path: PathBuf, code: String) -> Result<Self> {
        let header = extract_header(&code)?;

        let id = match &header.id {
            Some(raw) => Some(
                decode(&patch_invalid_id(raw))
                    .with_context(|| format!("decode identifier of {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            path,
            code,
            header,
            id,
        })
    }

    /// Source colour space, when derivable from the identifier.
    pub fn source(&self) -> Option<&str> {
        self.id.as_ref().and_then(|id| id.source.as_deref())
    }

    /// Target colour space, when derivable from the identifier.
    pub fn target(&self) -> Option<&str> {
        self.id.as_ref().and_then(|id| id.target.as_deref())
    }
}

/// Forward/inverse counterparts of one transform, sharing a basename.
/// Both halves are always present; a lone file stays a [`CtlTransform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtlTransformPair {
    pub forward: CtlTransform,
    pub inverse: CtlTransform,
}
